//! Time-series primitives shared by the reconciler and preprocessor.
//!
//! Modules include:
//! - `merge`: row/column extension of a stored frame from a fetched increment
//! - `resample`: period-mean aggregation to a calendar cadence
//! - `extend`: synthetic future rows for target series
//! - `fill`: linear interpolation and leading backfill
/// Synthetic future-row extension.
pub mod extend;
/// Gap interpolation and leading backfill.
pub mod fill;
/// Row and column extension of a stored frame.
pub mod merge;
/// Period-mean resampling.
pub mod resample;
