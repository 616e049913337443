//! Period-mean resampling.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::frame::{SeriesFrame, SeriesValues};
use crate::types::Frequency;

/// Generic resampler that groups each column by a bucket function and
/// averages the observations within each bucket.
fn resample_by<F>(frame: &SeriesFrame, bucket_of: F) -> SeriesFrame
where
    F: Fn(NaiveDate) -> NaiveDate,
{
    let mut out = SeriesFrame::empty();
    for (name, values) in frame.columns() {
        let mut buckets: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();
        for (&date, &value) in values {
            let slot = buckets.entry(bucket_of(date)).or_insert((0.0, 0));
            slot.0 += value;
            slot.1 += 1;
        }
        let resampled: SeriesValues = buckets
            .into_iter()
            .map(|(bucket, (sum, count))| (bucket, sum / f64::from(count)))
            .collect();
        out.push_unchecked(name.clone(), resampled);
    }
    out
}

/// Aggregate `frame` to one row per `freq` bucket using the arithmetic mean
/// of the non-missing observations in each bucket.
///
/// Output rows are keyed at the bucket start; buckets with no observations
/// in a column leave that column missing for the bucket. Resampling
/// already-aligned data is a no-op.
#[must_use]
pub fn resample_mean(frame: &SeriesFrame, freq: Frequency) -> SeriesFrame {
    resample_by(frame, |date| freq.bucket_start(date))
}
