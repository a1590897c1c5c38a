//! Orchestration of the text and statistics components
//!
//! # Example
//!
//! ```
//! use streamkit::Pipeline;
//!
//! let mut pipeline = Pipeline::default();
//! let cleaned = pipeline.ingest_texts(["  Hello  ", "WORLD   "]).unwrap();
//! assert_eq!(cleaned, ["hello", "world"]);
//!
//! pipeline.ingest_numbers([10, 20, 30]).unwrap();
//! assert_eq!(pipeline.stats().mean(), 20.0);
//! assert_eq!(pipeline.cache(), &[10.0, 20.0, 30.0]);
//! ```

use core::fmt;

use tracing::{debug, warn};

use crate::error::Result;
use crate::statistics::StreamingStats;
use crate::text::{NormalizerConfig, TextNormalizer};
use crate::value::Value;

#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

/// Owns a normalizer, a statistics accumulator and a cache of ingested numbers
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    normalizer: TextNormalizer,
    stats: StreamingStats,
    cache: Vec<f64>,
}

impl Pipeline {
    /// Create a pipeline whose normalizer uses `config`
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(config),
            stats: StreamingStats::new(),
            cache: Vec::new(),
        }
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn stats(&self) -> &StreamingStats {
        &self.stats
    }

    /// Every number ingested since the last reset, as floats, in order
    pub fn cache(&self) -> &[f64] {
        &self.cache
    }

    /// Clean each text in order and return the cleaned copies
    ///
    /// Nothing is returned if any element is not a string.
    pub fn ingest_texts<I>(&self, texts: I) -> Result<Vec<String>>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut cleaned = Vec::new();
        for (index, text) in texts.into_iter().enumerate() {
            match self.normalizer.clean(text) {
                Ok(s) => cleaned.push(s),
                Err(error) => {
                    warn!(index, %error, "text ingestion stopped");
                    return Err(error);
                }
            }
        }
        debug!(count = cleaned.len(), "ingested texts");
        Ok(cleaned)
    }

    /// Feed each number to the statistics and append it to the cache
    ///
    /// Stops at the first value that is not a real number. Values before it
    /// remain applied to both the statistics and the cache.
    pub fn ingest_numbers<I>(&mut self, xs: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut count = 0usize;
        for (index, x) in xs.into_iter().enumerate() {
            let x = match x.into().as_number() {
                Ok(n) => n.to_f64(),
                Err(error) => {
                    warn!(index, %error, "number ingestion stopped");
                    return Err(error);
                }
            };
            self.stats.update(x)?;
            self.cache.push(x);
            count += 1;
        }
        debug!(count, total = self.stats.count(), "ingested numbers");
        Ok(())
    }

    /// Replace the statistics with a fresh accumulator and empty the cache
    ///
    /// The normalizer configuration is kept.
    pub fn reset(&mut self) {
        debug!(discarded = self.cache.len(), "resetting pipeline");
        self.stats = StreamingStats::new();
        self.cache.clear();
    }

    /// Snapshot of the current statistics
    pub fn summary(&self) -> Summary {
        Summary {
            count: self.stats.count(),
            mean: self.stats.mean(),
            std_dev: self.stats.std_dev(),
        }
    }
}

/// Observation count, mean and standard deviation at a point in time
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub count: u64,
    pub mean: f64,
    pub std_dev: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} mean={:.2} std={:.2}",
            self.count, self.mean, self.std_dev
        )
    }
}
