//! indice-fred
//!
//! Connector that serves macro-indicator series from a FRED-style
//! observations endpoint: one HTTP request per source series identifier,
//! sequentially and with a fixed courtesy delay in between. Identifiers
//! that error are dropped from the result and reported per series.
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use indice_core::{DateRange, FetchReport, IndiceError, SeriesName, SeriesSource, SeriesValues};

/// The public FRED observations endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.stlouisfed.org/fred/series/observations";

/// Connector configuration.
///
/// Caller-supplied; `Default` targets the public endpoint with no
/// credential and a half-second delay between series requests.
#[derive(Debug, Clone)]
pub struct FredConfig {
    /// Observations endpoint. Tests point this at a local mock server.
    pub base_url: String,
    /// Optional access credential passed through as the `api_key` parameter.
    pub api_key: Option<String>,
    /// Fixed delay between successive series requests within one call.
    /// Rate-limit courtesy only, not adaptive backoff.
    pub pace: Duration,
}

impl Default for FredConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            pace: Duration::from_millis(500),
        }
    }
}

/// Connector fetching one column per source series identifier.
pub struct FredConnector {
    http: reqwest::Client,
    cfg: FredConfig,
}

impl FredConnector {
    /// Build with a fresh HTTP client.
    #[must_use]
    pub fn new(cfg: FredConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            cfg,
        }
    }

    /// Build against the public endpoint, picking up `FRED_API_KEY` from
    /// the environment (a `.env` file is honored when present).
    ///
    /// The credential is optional at this layer; without one the upstream
    /// may reject requests, which then surface as per-series failures.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::new(FredConfig {
            api_key: std::env::var("FRED_API_KEY").ok(),
            ..FredConfig::default()
        })
    }

    async fn fetch_series(
        &self,
        name: &SeriesName,
        range: DateRange,
    ) -> Result<SeriesValues, IndiceError> {
        let fail = |msg: String| IndiceError::fetch("indice-fred", name.as_str(), msg);

        let mut request = self
            .http
            .get(&self.cfg.base_url)
            .query(&[("series_id", name.as_str()), ("file_type", "json")]);
        if let Some(key) = &self.cfg.api_key {
            request = request.query(&[("api_key", key.as_str())]);
        }
        if let Some(start) = range.start {
            request = request.query(&[("observation_start", start.to_string())]);
        }
        if let Some(end) = range.end {
            request = request.query(&[("observation_end", end.to_string())]);
        }

        let response = request.send().await.map_err(|e| fail(e.to_string()))?;
        if !response.status().is_success() {
            return Err(fail(format!(
                "request failed with status {}",
                response.status()
            )));
        }
        let body: ObservationsResponse = response
            .json()
            .await
            .map_err(|e| fail(format!("unparseable response: {e}")))?;

        let mut values = SeriesValues::new();
        for obs in body.observations {
            // "." and blanks are the upstream's missing markers.
            let Some(value) = parse_value(&obs.value) else {
                continue;
            };
            let date = obs
                .date
                .parse::<chrono::NaiveDate>()
                .map_err(|e| fail(format!("invalid observation date '{}': {e}", obs.date)))?;
            if range.contains(date) {
                values.insert(date, value);
            }
        }
        Ok(values)
    }
}

#[async_trait]
impl SeriesSource for FredConnector {
    fn name(&self) -> &'static str {
        "indice-fred"
    }

    async fn fetch(
        &self,
        names: &[SeriesName],
        range: DateRange,
    ) -> Result<FetchReport, IndiceError> {
        let mut report = FetchReport::default();
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.cfg.pace).await;
            }
            match self.fetch_series(name, range).await {
                Ok(values) => {
                    tracing::debug!(series = %name, points = values.len(), "series loaded");
                    report.frame.with_column(name.clone(), values)?;
                }
                Err(error) => {
                    tracing::warn!(series = %name, %error, "series fetch failed");
                    report.push_failure(name.clone(), error);
                }
            }
        }
        Ok(report)
    }
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
    date: String,
    value: String,
}

fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed == "." || trimmed.is_empty() {
        return None;
    }
    let value = trimmed.parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}
