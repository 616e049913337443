//! Run two reconciliation cycles against a mock source and show the
//! incremental fetch ranges.
//!
//! Suggested: RUST_LOG=info cargo run --example 01_update_cycle

use std::sync::Arc;

use chrono::NaiveDate;
use indice::{Indice, SeriesName};
use indice_core::CsvStore;
use indice_mock::MockSource;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    let source = Arc::new(
        MockSource::new()
            .with_series("T10Y2Y", [(day(2024, 1, 1), 0.35), (day(2024, 2, 1), 0.28)])
            .with_series("UNRATE", [(day(2024, 1, 1), 3.7), (day(2024, 2, 1), 3.9)]),
    );

    let dir = tempfile::tempdir()?;
    let indice = Indice::builder()
        .with_source(Arc::clone(&source) as Arc<dyn indice_core::SeriesSource>)
        .with_store(Arc::new(CsvStore::new(dir.path().join("expl.csv"))))
        .build()?;

    let names = [SeriesName::from("T10Y2Y"), SeriesName::from("UNRATE")];

    // Cold start: the full history is fetched and persisted.
    let report = indice.update(&names, None).await?;
    println!(
        "after cold start: {} columns x {} rows",
        report.frame.width(),
        report.frame.row_count()
    );

    // The upstream publishes a new month; the next cycle fetches only it.
    source.publish("T10Y2Y", [(day(2024, 3, 1), 0.12)]).await;
    source.publish("UNRATE", [(day(2024, 3, 1), 3.8)]).await;
    let report = indice.update(&names, None).await?;
    println!(
        "after warm update: {} columns x {} rows",
        report.frame.width(),
        report.frame.row_count()
    );

    for call in source.calls().await {
        println!("fetched {:?} over {}", call.names, call.range);
    }
    Ok(())
}
