//! # Streamkit
//!
//! Small streaming analytics utilities for Rust.
//!
//! Streamkit bundles a handful of self-contained components that are useful
//! at the edge of a data flow, before anything heavier takes over.
//!
//! ## Features
//!
//! - **Streaming Statistics**: running mean, sample variance and standard
//!   deviation with Welford's algorithm, in O(1) memory
//! - **Text Normalization**: trimming, whitespace collapsing and lowercasing
//! - **Validated Arithmetic**: addition, multiplication and mean over untyped inputs
//! - **Pipeline**: a thin wrapper that composes the three
//!
//! Inputs are accepted as anything convertible into a [`Value`], so values
//! of the wrong shape are reported as [`AnalyticsError::Validation`] rather
//! than silently coerced.
//!
//! ## Quick Start
//!
//! ```rust
//! use streamkit::prelude::*;
//!
//! let mut pipeline = Pipeline::default();
//! pipeline.ingest_texts(["  Hello  ", "WORLD   "]).unwrap();
//! pipeline.ingest_numbers([1, 2, 3, 4, 5]).unwrap();
//!
//! assert_eq!(pipeline.summary().to_string(), "n=5 mean=3.00 std=1.58");
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `demo`: The `streamkit-demo` binary and its log subscriber
//! - `serde`: Enable serialization of configuration, values and statistics

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod math;
pub mod numeric;
pub mod pipeline;
pub mod statistics;
pub mod text;
pub mod value;

pub mod prelude {
    pub use crate::error::{AnalyticsError, Result};
    pub use crate::numeric::NumericOps;
    pub use crate::pipeline::{Pipeline, Summary};
    pub use crate::statistics::{StatsSnapshot, StreamingStats};
    pub use crate::text::{NormalizerConfig, TextNormalizer};
    pub use crate::value::{Number, Value};
}

pub use error::{AnalyticsError, Result};
pub use pipeline::Pipeline;
pub use statistics::StreamingStats;
pub use text::TextNormalizer;
pub use value::Value;
