//! Text normalization
//!
//! Trims, optionally collapses internal whitespace, and optionally lowercases.
//!
//! # Example
//!
//! ```
//! use streamkit::text::{NormalizerConfig, TextNormalizer};
//!
//! let normalizer = TextNormalizer::default();
//! assert_eq!(normalizer.clean("  Hello,   WORLD!!  ").unwrap(), "hello, world!!");
//!
//! let keep_case = TextNormalizer::new(NormalizerConfig::default().with_lowercase(false));
//! assert_eq!(keep_case.clean("Hi   THERE").unwrap(), "Hi THERE");
//! ```

mod normalizer;

pub use normalizer::{NormalizerConfig, TextNormalizer};
