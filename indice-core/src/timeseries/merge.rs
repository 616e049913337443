//! Merging fetched increments into a stored frame.
//!
//! Both operations build a new frame rather than patching the input in
//! place, so a failure mid-merge leaves the loaded store untouched and each
//! stage can be tested on its own.

use crate::frame::{SeriesFrame, SeriesValues};

/// Append increment rows strictly after `store`'s last date.
///
/// - Only columns already present in `store` are considered; extra
///   increment columns are ignored.
/// - Observations at or before the stored last date are never adopted, so
///   persisted history is never overwritten.
/// - A store with no rows adopts every increment observation for the
///   columns it declares.
#[must_use]
pub fn extend_rows(store: &SeriesFrame, increment: &SeriesFrame) -> SeriesFrame {
    let cutoff = store.last_date();
    let mut out = store.clone();
    for (name, values) in out.columns_mut() {
        let Some(incoming) = increment.column(name) else {
            continue;
        };
        for (&date, &value) in incoming {
            if cutoff.is_none_or(|c| date > c) {
                values.entry(date).or_insert(value);
            }
        }
    }
    out
}

/// Join `added`'s columns onto `store`, aligned on `store`'s existing row
/// index.
///
/// Observations at dates the store does not already have are dropped; this
/// step never creates rows. Columns whose name is already present in
/// `store` are ignored.
#[must_use]
pub fn join_columns(store: &SeriesFrame, added: &SeriesFrame) -> SeriesFrame {
    let index = store.dates();
    let mut out = store.clone();
    for (name, values) in added.columns() {
        if out.contains(name) {
            continue;
        }
        let aligned: SeriesValues = values
            .iter()
            .filter(|(date, _)| index.contains(*date))
            .map(|(&date, &value)| (date, value))
            .collect();
        out.push_unchecked(name.clone(), aligned);
    }
    out
}
