//! Gap interpolation and leading backfill.

use chrono::NaiveDate;

use crate::frame::{SeriesFrame, SeriesValues};

/// Linearly interpolate missing observations over an explicit date index.
///
/// For every index date where a column has no value:
/// - with known neighbors on both sides, the gap is filled proportionally
///   to the day distance between those neighbors;
/// - past the column's last observation, the last value is held;
/// - before the column's first observation, the date is left missing (see
///   [`backfill`]).
///
/// The index is typically the frame's own row union, or the dense period
/// grid after a resample so that empty periods become rows too.
#[must_use]
pub fn interpolate_over(frame: &SeriesFrame, index: &[NaiveDate]) -> SeriesFrame {
    let mut out = frame.clone();
    for (_, values) in out.columns_mut() {
        *values = interpolate_column(values, index);
    }
    out
}

/// [`interpolate_over`] applied to the frame's own row index.
#[must_use]
pub fn interpolate(frame: &SeriesFrame) -> SeriesFrame {
    let index: Vec<NaiveDate> = frame.dates().into_iter().collect();
    interpolate_over(frame, &index)
}

fn interpolate_column(values: &SeriesValues, index: &[NaiveDate]) -> SeriesValues {
    let mut filled = values.clone();
    for &date in index {
        if values.contains_key(&date) {
            continue;
        }
        let before = values.range(..date).next_back();
        let after = values.range(date..).next();
        match (before, after) {
            (Some((&d0, &v0)), Some((&d1, &v1))) => {
                let span = (d1 - d0).num_days() as f64;
                let offset = (date - d0).num_days() as f64;
                filled.insert(date, v0 + (v1 - v0) * (offset / span));
            }
            // Trailing gap: hold the last observation.
            (Some((_, &v0)), None) => {
                filled.insert(date, v0);
            }
            _ => {}
        }
    }
    filled
}

/// Propagate the first known value of each column backward over any
/// still-missing leading dates of the frame's row index.
#[must_use]
pub fn backfill(frame: &SeriesFrame) -> SeriesFrame {
    let index = frame.dates();
    let mut out = frame.clone();
    for (_, values) in out.columns_mut() {
        let Some((&first_known, &value)) = values.iter().next() else {
            continue;
        };
        for &date in index.iter().take_while(|&&d| d < first_known) {
            values.insert(date, value);
        }
    }
    out
}
