//! Persisted series store: trait and the CSV-backed implementation.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::IndiceError;
use crate::frame::{SeriesFrame, SeriesValues};
use crate::types::SeriesName;

/// Stable storage for one dataset's reconciled frame.
///
/// The store is owned exclusively by the reconciler between runs: it is
/// read at the start of a cycle and rewritten in full at the end. It is not
/// safe for concurrent writers; callers serialize updates.
pub trait SeriesStore: Send + Sync {
    /// Whether a persisted frame exists yet.
    fn exists(&self) -> bool;

    /// Load the persisted frame.
    ///
    /// # Errors
    /// Returns `IndiceError::Store` if the file cannot be read and
    /// `IndiceError::Data` if its contents are malformed.
    fn load(&self) -> Result<SeriesFrame, IndiceError>;

    /// Replace the persisted frame with `frame` (whole-file replace).
    ///
    /// # Errors
    /// Returns `IndiceError::Store` on I/O failure.
    fn save(&self, frame: &SeriesFrame) -> Result<(), IndiceError>;
}

/// Store backed by a single delimited file.
///
/// Layout: a header row `date,<name>,...`, then one row per date with the
/// ISO date in the first cell and one cell per series; an empty cell is a
/// missing observation. Saves write a sibling temp file and rename it over
/// the target, so readers never observe a half-written store.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Bind a store to `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn store_err(&self, msg: impl ToString) -> IndiceError {
        IndiceError::store(self.path.display().to_string(), msg.to_string())
    }
}

impl SeriesStore for CsvStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Result<SeriesFrame, IndiceError> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| self.store_err(e))?;
        let headers = reader.headers().map_err(|e| self.store_err(e))?.clone();
        if headers.is_empty() {
            return Err(IndiceError::Data(format!(
                "store {} has no header row",
                self.path.display()
            )));
        }
        let mut columns: Vec<(SeriesName, SeriesValues)> = headers
            .iter()
            .skip(1)
            .map(|name| (SeriesName::from(name), SeriesValues::new()))
            .collect();
        for record in reader.records() {
            let record = record.map_err(|e| self.store_err(e))?;
            let raw_date = record
                .get(0)
                .ok_or_else(|| IndiceError::Data("store row missing date cell".into()))?;
            let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|e| {
                IndiceError::Data(format!("unparseable store date '{raw_date}': {e}"))
            })?;
            for (idx, (name, values)) in columns.iter_mut().enumerate() {
                let Some(cell) = record.get(idx + 1) else {
                    continue;
                };
                if cell.is_empty() {
                    continue;
                }
                let value: f64 = cell.parse().map_err(|e| {
                    IndiceError::Data(format!("unparseable value '{cell}' for '{name}': {e}"))
                })?;
                values.insert(date, value);
            }
        }
        SeriesFrame::from_columns(columns)
    }

    fn save(&self, frame: &SeriesFrame) -> Result<(), IndiceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.store_err(e))?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        {
            let mut writer = csv::Writer::from_path(&tmp).map_err(|e| self.store_err(e))?;
            let mut header = vec!["date".to_owned()];
            header.extend(frame.names().map(ToString::to_string));
            writer.write_record(&header).map_err(|e| self.store_err(e))?;
            for date in frame.dates() {
                let mut row = vec![date.format("%Y-%m-%d").to_string()];
                for (_, values) in frame.columns() {
                    row.push(values.get(&date).map(f64::to_string).unwrap_or_default());
                }
                writer.write_record(&row).map_err(|e| self.store_err(e))?;
            }
            writer.flush().map_err(|e| self.store_err(e))?;
        }
        fs::rename(&tmp, &self.path).map_err(|e| self.store_err(e))
    }
}
