//! indice-statcan
//!
//! Connector that serves consumer-price-index categories from a Statistics
//! Canada bulk table. One call downloads (or refreshes) the whole table
//! into a local cache directory, filters it to the configured region, and
//! pivots the requested category rows into columns. When a refresh fails
//! but a cached copy exists, the stale copy is served with a warning.
#![warn(missing_docs)]

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use indice_core::{DateRange, FetchReport, IndiceError, SeriesName, SeriesSource, SeriesValues};

/// The public bulk-table download prefix.
pub const DEFAULT_BASE_URL: &str = "https://www150.statcan.gc.ca/t1/tbl1/csv";

/// The monthly CPI table the original deployment reads.
pub const DEFAULT_TABLE_ID: &str = "18-10-0004-13";

/// Connector configuration.
///
/// The table, region, and cache location are deliberately caller-supplied
/// rather than baked-in constants, so tests and non-Canadian deployments
/// can substitute their own without touching shared state.
#[derive(Debug, Clone)]
pub struct StatcanConfig {
    /// Bulk-table download prefix; the table is fetched from
    /// `{base_url}/{table_id}.csv`. Tests point this at a mock server.
    pub base_url: String,
    /// Table identifier.
    pub table_id: String,
    /// Geographic region rows are filtered to (`GEO` column).
    pub region: String,
    /// Directory holding the cached table download.
    pub cache_dir: PathBuf,
}

impl Default for StatcanConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            table_id: DEFAULT_TABLE_ID.to_owned(),
            region: "Canada".to_owned(),
            cache_dir: PathBuf::from("./statcan_data"),
        }
    }
}

/// The food CPI categories the original deployment tracks.
///
/// Provided as a convenience default for callers building a requested-name
/// list; nothing in the connector is limited to these.
#[must_use]
pub fn default_food_categories() -> Vec<SeriesName> {
    [
        "Bakery and cereal products (excluding baby food)",
        "Dairy products and eggs",
        "Fish, seafood and other marine products",
        "Food purchased from restaurants",
        "Food",
        "Fruit, fruit preparations and nuts",
        "Meat",
        "Other food products and non-alcoholic beverages",
        "Vegetables and vegetable preparations",
    ]
    .into_iter()
    .map(SeriesName::from)
    .collect()
}

/// Connector pivoting bulk-table category rows into columns.
pub struct StatcanConnector {
    http: reqwest::Client,
    cfg: StatcanConfig,
}

impl StatcanConnector {
    /// Build with a fresh HTTP client.
    #[must_use]
    pub fn new(cfg: StatcanConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            cfg,
        }
    }

    fn cache_path(&self) -> PathBuf {
        self.cfg.cache_dir.join(format!("{}.csv", self.cfg.table_id))
    }

    fn cache_err(&self, err: impl ToString) -> IndiceError {
        IndiceError::store(self.cache_path().display().to_string(), err.to_string())
    }

    async fn download(&self) -> Result<String, IndiceError> {
        let url = format!("{}/{}.csv", self.cfg.base_url, self.cfg.table_id);
        let fail = |msg: String| IndiceError::fetch("indice-statcan", &self.cfg.table_id, msg);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| fail(e.to_string()))?;
        if !response.status().is_success() {
            return Err(fail(format!(
                "table download failed with status {}",
                response.status()
            )));
        }
        response.text().await.map_err(|e| fail(e.to_string()))
    }

    /// Fetch the table body, refreshing the local cache. A failed refresh
    /// falls back to the cached copy when one exists.
    async fn table_body(&self) -> Result<String, IndiceError> {
        let cache = self.cache_path();
        let cached = cache.exists();
        match self.download().await {
            Ok(body) => {
                fs::create_dir_all(&self.cfg.cache_dir).map_err(|e| self.cache_err(e))?;
                fs::write(&cache, &body).map_err(|e| self.cache_err(e))?;
                Ok(body)
            }
            Err(error) if cached => {
                tracing::warn!(%error, table = %self.cfg.table_id, "table refresh failed; serving cached copy");
                fs::read_to_string(&cache).map_err(|e| self.cache_err(e))
            }
            Err(error) => Err(error),
        }
    }

    fn pivot(
        &self,
        body: &str,
        names: &[SeriesName],
        range: DateRange,
    ) -> Result<FetchReport, IndiceError> {
        let mut grouped: BTreeMap<String, SeriesValues> = BTreeMap::new();
        let mut reader = csv::Reader::from_reader(body.as_bytes());
        for row in reader.deserialize::<TableRow>() {
            let row = row.map_err(|e| {
                IndiceError::Data(format!("malformed table {}: {e}", self.cfg.table_id))
            })?;
            if row.geo != self.cfg.region {
                continue;
            }
            let Some(value) = parse_value(&row.value)? else {
                continue;
            };
            let date = parse_ref_date(&row.ref_date)?;
            if !range.contains(date) {
                continue;
            }
            grouped.entry(row.product).or_default().insert(date, value);
        }

        let mut report = FetchReport::default();
        for name in names {
            match grouped.remove(name.as_str()) {
                Some(values) => report.frame.with_column(name.clone(), values)?,
                None => {
                    tracing::warn!(category = %name, region = %self.cfg.region, "category absent from table");
                    report.push_failure(
                        name.clone(),
                        IndiceError::not_found(format!(
                            "category '{name}' in region '{}'",
                            self.cfg.region
                        )),
                    );
                }
            }
        }
        Ok(report)
    }
}

#[async_trait]
impl SeriesSource for StatcanConnector {
    fn name(&self) -> &'static str {
        "indice-statcan"
    }

    async fn fetch(
        &self,
        names: &[SeriesName],
        range: DateRange,
    ) -> Result<FetchReport, IndiceError> {
        let body = self.table_body().await?;
        self.pivot(&body, names, range)
    }
}

#[derive(Debug, Deserialize)]
struct TableRow {
    #[serde(rename = "REF_DATE")]
    ref_date: String,
    #[serde(rename = "GEO")]
    geo: String,
    #[serde(rename = "Products and product groups")]
    product: String,
    #[serde(rename = "VALUE")]
    value: String,
}

/// Monthly tables carry `YYYY-MM` reference dates; some carry full ISO.
fn parse_ref_date(raw: &str) -> Result<NaiveDate, IndiceError> {
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Ok(date);
    }
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
        .map_err(|e| IndiceError::Data(format!("unparseable REF_DATE '{raw}': {e}")))
}

fn parse_value(raw: &str) -> Result<Option<f64>, IndiceError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|e| IndiceError::Data(format!("unparseable VALUE '{raw}': {e}")))?;
    Ok(value.is_finite().then_some(value))
}
