//! The `SeriesSource` trait and per-series fetch reporting.

use async_trait::async_trait;

use crate::IndiceError;
use crate::frame::SeriesFrame;
use crate::types::{DateRange, SeriesName};

/// A single named series that failed to retrieve.
#[derive(Debug)]
pub struct FetchFailure {
    /// The series that failed.
    pub name: SeriesName,
    /// Why it failed.
    pub error: IndiceError,
}

/// Result of one fetch call: the columns that succeeded plus the named
/// failures.
///
/// A failed series is absent from `frame` and present in `failures`; it
/// never aborts the batch. Callers can therefore distinguish "fetched
/// empty" from "fetch failed" per series.
#[derive(Debug, Default)]
pub struct FetchReport {
    /// Columns that succeeded, restricted to the requested range.
    pub frame: SeriesFrame,
    /// Per-series failures, in request order.
    pub failures: Vec<FetchFailure>,
}

impl FetchReport {
    /// Record a per-series failure.
    pub fn push_failure(&mut self, name: SeriesName, error: IndiceError) {
        self.failures.push(FetchFailure { name, error });
    }
}

/// An external origin of named time series.
///
/// Implementations fetch the requested names sequentially, honoring a fixed
/// courtesy delay between successive requests to the same upstream.
/// Structural problems (an unreachable cache directory, a malformed bulk
/// table) are returned as `Err`; per-series failures are reported through
/// [`FetchReport::failures`] without failing the call.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Stable identifier used to tag errors (e.g. "indice-fred").
    fn name(&self) -> &'static str;

    /// Fetch the given series over `range` (bounds inclusive when present).
    ///
    /// # Errors
    /// Returns an error only for structural failures affecting the whole
    /// call, never for an individual series.
    async fn fetch(
        &self,
        names: &[SeriesName],
        range: DateRange,
    ) -> Result<FetchReport, IndiceError>;
}
