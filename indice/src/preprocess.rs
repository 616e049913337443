//! Model-ready preparation of a reconciled frame.
//!
//! The pipeline order is fixed: extension (targets only) runs before
//! resampling so synthetic rows never blend into real aggregates, and
//! gap-filling runs after resampling so sparse buckets get interpolated
//! values. Column selection is last and follows the caller's order.

use chrono::NaiveDate;

use indice_core::{
    ExtendMethod, Frequency, IndiceError, SeriesFrame, SeriesName, backfill, extend_frame,
    interpolate_over, resample_mean,
};

/// Options shared by explanatory and target preprocessing.
#[derive(Debug, Clone)]
pub struct PreprocessOptions {
    /// Columns to keep, in order. `None` keeps every frame column; an
    /// empty list yields the explicit "nothing to do" result.
    pub columns: Option<Vec<SeriesName>>,
    /// Fill gaps by linear interpolation plus leading backfill.
    pub interpolate: bool,
    /// Aggregate to this cadence by period mean before filling.
    pub resample: Option<Frequency>,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            columns: None,
            interpolate: true,
            resample: None,
        }
    }
}

/// Extension policy for target frames.
#[derive(Debug, Clone, Copy)]
pub struct ExtendOptions {
    /// Number of synthetic future rows to append.
    pub periods: u32,
    /// How to synthesize them; `None` (the degraded form of an
    /// unrecognized configuration value) skips extension with a diagnostic.
    pub method: Option<ExtendMethod>,
}

impl Default for ExtendOptions {
    fn default() -> Self {
        Self {
            periods: 1,
            method: Some(ExtendMethod::Constant),
        }
    }
}

/// Parse a configuration string into an extension method, degrading
/// unknown values to `None` with a diagnostic instead of failing.
#[must_use]
pub fn parse_extend_method(raw: &str) -> Option<ExtendMethod> {
    match raw.parse() {
        Ok(method) => Some(method),
        Err(_) => {
            tracing::warn!(method = raw, "unrecognized extension method");
            None
        }
    }
}

/// Prepare an explanatory frame: resample, fill gaps, select columns.
///
/// Returns `Ok(None)` when the effective column list is empty — an
/// explicit no-data signal, not an error.
///
/// # Errors
/// Propagates structural errors from the underlying steps.
pub fn preprocess(
    frame: &SeriesFrame,
    opts: &PreprocessOptions,
) -> Result<Option<SeriesFrame>, IndiceError> {
    run_pipeline(frame, opts, None)
}

/// Prepare a target frame: extend into the future, then resample, fill
/// gaps, and select columns.
///
/// Returns `Ok(None)` when the effective column list is empty.
///
/// # Errors
/// Returns `IndiceError::InsufficientHistory` when a projection is
/// requested against fewer rows than it needs; otherwise as [`preprocess`].
pub fn preprocess_targets(
    frame: &SeriesFrame,
    opts: &PreprocessOptions,
    extend: &ExtendOptions,
) -> Result<Option<SeriesFrame>, IndiceError> {
    run_pipeline(frame, opts, Some(extend))
}

fn run_pipeline(
    frame: &SeriesFrame,
    opts: &PreprocessOptions,
    extend: Option<&ExtendOptions>,
) -> Result<Option<SeriesFrame>, IndiceError> {
    let columns: Vec<SeriesName> = match &opts.columns {
        Some(columns) => columns.clone(),
        None => frame.names().cloned().collect(),
    };
    if columns.is_empty() {
        return Ok(None);
    }

    let mut out = frame.clone();
    if let Some(ext) = extend {
        if ext.periods > 0 {
            match ext.method {
                Some(method) => out = extend_frame(&out, ext.periods, method)?,
                None => tracing::warn!("no extension method; skipping extension"),
            }
        }
    }
    if let Some(freq) = opts.resample {
        out = resample_mean(&out, freq);
    }
    if opts.interpolate {
        // After a resample the fill index is the dense period grid, so a
        // period with no observations at all still becomes a row.
        let index = match opts.resample {
            Some(freq) => period_index(&out, freq),
            None => out.dates().into_iter().collect(),
        };
        out = backfill(&interpolate_over(&out, &index));
    }
    Ok(Some(out.select(&columns)))
}

fn period_index(frame: &SeriesFrame, freq: Frequency) -> Vec<NaiveDate> {
    let (Some(first), Some(last)) = (frame.first_date(), frame.last_date()) else {
        return Vec::new();
    };
    let mut index = Vec::new();
    let mut cursor = first;
    while cursor <= last {
        index.push(cursor);
        match freq.advance(cursor) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    index
}
