//! Mock series source for CI-safe tests and examples.
//!
//! Provides deterministic fixture data, forced per-series failures, and a
//! record of every fetch call so tests can assert on the exact ranges the
//! reconciler requested. Fixtures can be extended between calls to
//! simulate new upstream observations appearing over time.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use indice_core::{
    DateRange, FetchReport, IndiceError, SeriesName, SeriesSource, SeriesValues,
};

/// One recorded `fetch` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFetch {
    /// The names requested, in request order.
    pub names: Vec<SeriesName>,
    /// The range requested.
    pub range: DateRange,
}

#[derive(Default)]
struct InternalState {
    series: BTreeMap<SeriesName, SeriesValues>,
    failing: BTreeSet<SeriesName>,
    calls: Vec<RecordedFetch>,
}

/// Deterministic in-memory source.
///
/// - Known names return their fixture restricted to the requested range.
/// - Names registered via [`MockSource::with_failure`] fail with a tagged
///   fetch error.
/// - Unknown names are reported as `NotFound` failures, matching how a
///   real source drops identifiers it cannot serve.
#[derive(Default)]
pub struct MockSource {
    state: Mutex<InternalState>,
}

impl MockSource {
    /// A source with no fixtures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: register a series fixture.
    #[must_use]
    pub fn with_series(
        mut self,
        name: impl Into<SeriesName>,
        points: impl IntoIterator<Item = (NaiveDate, f64)>,
    ) -> Self {
        self.state
            .get_mut()
            .series
            .insert(name.into(), points.into_iter().collect());
        self
    }

    /// Builder-style: force every fetch of `name` to fail.
    #[must_use]
    pub fn with_failure(mut self, name: impl Into<SeriesName>) -> Self {
        self.state.get_mut().failing.insert(name.into());
        self
    }

    /// Publish additional observations for a series, as if the upstream
    /// source had released new data since the previous call.
    pub async fn publish(
        &self,
        name: impl Into<SeriesName>,
        points: impl IntoIterator<Item = (NaiveDate, f64)>,
    ) {
        let mut guard = self.state.lock().await;
        guard.series.entry(name.into()).or_default().extend(points);
    }

    /// All recorded fetch calls, in order.
    pub async fn calls(&self) -> Vec<RecordedFetch> {
        self.state.lock().await.calls.clone()
    }
}

#[async_trait]
impl SeriesSource for MockSource {
    fn name(&self) -> &'static str {
        "indice-mock"
    }

    async fn fetch(
        &self,
        names: &[SeriesName],
        range: DateRange,
    ) -> Result<FetchReport, IndiceError> {
        let mut guard = self.state.lock().await;
        guard.calls.push(RecordedFetch {
            names: names.to_vec(),
            range,
        });

        let mut report = FetchReport::default();
        for name in names {
            if guard.failing.contains(name) {
                report.push_failure(
                    name.clone(),
                    IndiceError::fetch(self.name(), name.as_str(), "forced failure"),
                );
                continue;
            }
            match guard.series.get(name) {
                Some(values) => {
                    let kept: SeriesValues = values
                        .iter()
                        .filter(|(date, _)| range.contains(**date))
                        .map(|(&date, &value)| (date, value))
                        .collect();
                    report.frame.with_column(name.clone(), kept)?;
                }
                None => {
                    report.push_failure(
                        name.clone(),
                        IndiceError::not_found(format!("series '{name}'")),
                    );
                }
            }
        }
        Ok(report)
    }
}
