//! indice keeps flat-file stores of economic time series reconciled against
//! their upstream sources and prepares model-ready frames from them.
//!
//! Overview
//! - One [`Indice`] binds a [`indice_core::SeriesSource`] (where observations
//!   come from) to a [`indice_core::SeriesStore`] (where the reconciled
//!   history lives). A typical deployment runs two instances: one for
//!   explanatory macro indicators, one for target CPI categories.
//! - [`Indice::update`] performs one reconciliation cycle: on a cold start
//!   the full requested history is fetched and persisted verbatim; on a warm
//!   start only the rows past the stored history and the columns the store
//!   lacks are fetched, so repeated runs pay incremental cost only.
//! - [`preprocess`] / [`preprocess_targets`] turn a reconciled frame into
//!   model input: optional future extension (targets only), period-mean
//!   resampling, gap interpolation with leading backfill, and column
//!   selection — in that fixed order.
//!
//! Key behaviors and trade-offs
//! - Per-series fetch failures never abort a cycle; they are collected into
//!   [`UpdateReport::warnings`] and the series is simply absent.
//! - Newly requested columns are backfilled only over the span the store
//!   already covers; their earlier history is never fetched retroactively.
//! - The store is rewritten in full (atomically) at the end of every cycle
//!   and is not safe for concurrent writers — callers serialize updates.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use indice::{Indice, PreprocessOptions};
//! use indice_core::{CsvStore, SeriesName};
//!
//! let indice = Indice::builder()
//!     .with_source(Arc::new(fred))
//!     .with_store(Arc::new(CsvStore::new("expl.csv")))
//!     .build()?;
//! let report = indice.update(&names, None).await?;
//! let prepared = indice::preprocess(&report.frame, &PreprocessOptions::default())?;
//! ```
//!
//! See `indice/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod preprocess;
mod update;

pub use core::{Indice, IndiceBuilder};
pub use preprocess::{
    ExtendOptions, PreprocessOptions, parse_extend_method, preprocess, preprocess_targets,
};
pub use update::UpdateReport;

// Re-export core types for convenience
pub use indice_core::{
    CsvStore, DateRange, ExtendMethod, FetchFailure, FetchReport, Frequency, IndiceError,
    SeriesFrame, SeriesName, SeriesSource, SeriesStore, SeriesValues,
};
