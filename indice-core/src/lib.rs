//! indice-core
//!
//! Core types, traits, and utilities shared across the indice workspace.
//!
//! - `types`: series names, date ranges, resample cadences, extension methods.
//! - `frame`: the column-oriented [`SeriesFrame`] container.
//! - `source`: the [`SeriesSource`] trait and per-series fetch reporting.
//! - `store`: the [`SeriesStore`] trait and its CSV-backed implementation.
//! - `timeseries`: merge, resample, extend, and gap-fill primitives.
//!
//! The crate is deliberately free of I/O beyond the store file itself and
//! free of logging; connectors and the orchestrator layer (`indice`) own
//! network access and diagnostics.
#![warn(missing_docs)]

/// Unified error type for the workspace.
pub mod error;
/// Column-oriented time-series frame keyed by calendar date.
pub mod frame;
/// The `SeriesSource` trait and per-series fetch reporting.
pub mod source;
/// Persisted series store: trait and CSV implementation.
pub mod store;
/// Time-series primitives for reconciliation and preprocessing.
pub mod timeseries;
/// Foundational identifier, range, and cadence types.
pub mod types;

pub use error::IndiceError;
pub use frame::{SeriesFrame, SeriesValues};
pub use source::{FetchFailure, FetchReport, SeriesSource};
pub use store::{CsvStore, SeriesStore};
pub use timeseries::extend::extend_frame;
pub use timeseries::fill::{backfill, interpolate, interpolate_over};
pub use timeseries::merge::{extend_rows, join_columns};
pub use timeseries::resample::resample_mean;
pub use types::{DateRange, ExtendMethod, Frequency, SeriesName};
