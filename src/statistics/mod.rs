//! Statistical summaries for streaming data
//!
//! This module provides algorithms for computing statistics over streams
//! in a single pass with constant memory.
//!
//! # Example
//!
//! ```
//! use streamkit::statistics::StreamingStats;
//!
//! let mut stats = StreamingStats::new();
//! stats.bulk_update([1.0, 2.0, 3.0, 4.0]).unwrap();
//!
//! assert_eq!(stats.count(), 4);
//! assert_eq!(stats.mean(), 2.5);
//! println!("Stddev: {}", stats.std_dev());
//! ```

mod streaming;

pub use streaming::{StatsSnapshot, StreamingStats};
