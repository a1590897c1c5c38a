//! Ingests a couple of fixed texts and numbers and prints a summary line.
//!
//! Run with: cargo run --features demo --bin streamkit-demo
//! Set `RUST_LOG=debug` to see the pipeline events.

use streamkit::{AnalyticsError, Pipeline};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AnalyticsError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut pipeline = Pipeline::default();
    let cleaned = pipeline.ingest_texts(["  Hello  ", "WORLD   "])?;
    info!(?cleaned, "normalized texts");

    pipeline.ingest_numbers([1, 2, 3, 4, 5])?;
    println!("{}", pipeline.summary());
    Ok(())
}
