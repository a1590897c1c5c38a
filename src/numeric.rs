//! Validated arithmetic helpers
//!
//! ```
//! use streamkit::numeric::NumericOps;
//! use streamkit::value::Number;
//!
//! assert_eq!(NumericOps::add(2, 3).unwrap(), Number::Int(5));
//! assert_eq!(NumericOps::add(1.5, 2.5).unwrap(), Number::Float(4.0));
//! assert_eq!(NumericOps::mean([2, 4, 6]).unwrap(), 4.0);
//! assert!(NumericOps::multiply(3, "4").is_err());
//! ```

use crate::error::Result;
use crate::value::{Number, Value};

/// Arithmetic over untyped inputs, rejecting anything that is not a real number
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericOps;

impl NumericOps {
    /// Sum of two numbers
    pub fn add(a: impl Into<Value>, b: impl Into<Value>) -> Result<Number> {
        let (a, b) = validate_pair(a.into(), b.into())?;
        Ok(a.add(b))
    }

    /// Product of two numbers
    pub fn multiply(a: impl Into<Value>, b: impl Into<Value>) -> Result<Number> {
        let (a, b) = validate_pair(a.into(), b.into())?;
        Ok(a.mul(b))
    }

    /// Arithmetic mean, 0.0 for an empty sequence
    ///
    /// Every element is validated before it is accumulated; the first invalid
    /// one aborts the computation.
    pub fn mean<I>(values: I) -> Result<f64>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut total = 0.0;
        let mut count = 0u64;
        for v in values {
            total += v.into().as_number()?.to_f64();
            count += 1;
        }
        if count == 0 {
            Ok(0.0)
        } else {
            Ok(total / count as f64)
        }
    }
}

fn validate_pair(a: Value, b: Value) -> Result<(Number, Number)> {
    Ok((a.as_number()?, b.as_number()?))
}
