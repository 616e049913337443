//! Prepare a target CPI frame: project one month ahead, resample to a
//! monthly cadence, and fill gaps.

use chrono::NaiveDate;
use indice::{ExtendOptions, Frequency, PreprocessOptions, preprocess_targets};
use indice_core::{ExtendMethod, SeriesFrame, SeriesName, SeriesValues};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let meat: SeriesValues = [
        (day(2024, 1, 1), 182.4),
        (day(2024, 2, 1), 183.1),
        (day(2024, 3, 1), 184.0),
    ]
    .into_iter()
    .collect();
    let frame = SeriesFrame::from_columns([(SeriesName::from("Meat"), meat)])?;

    let opts = PreprocessOptions {
        resample: Some(Frequency::Monthly),
        ..Default::default()
    };
    let extend = ExtendOptions {
        periods: 1,
        method: Some(ExtendMethod::Project),
    };

    let Some(prepared) = preprocess_targets(&frame, &opts, &extend)? else {
        println!("nothing to prepare");
        return Ok(());
    };
    for (name, values) in prepared.columns() {
        for (date, value) in values {
            println!("{name} {date} {value:.1}");
        }
    }
    Ok(())
}
