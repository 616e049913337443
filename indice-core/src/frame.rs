//! Column-oriented time-series frame keyed by calendar date.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::IndiceError;
use crate::types::{DateRange, SeriesName};

/// One column's observations keyed by date. A missing observation is an
/// absent key, which keeps NaN out of the data path entirely.
pub type SeriesValues = BTreeMap<NaiveDate, f64>;

/// An ordered collection of named series sharing a calendar-date axis.
///
/// The frame's row index is the union of its columns' date sets; dates are
/// unique and strictly increasing by construction of the underlying
/// `BTreeMap`s. Column order is insertion order and is preserved through
/// selection and persistence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesFrame {
    columns: Vec<(SeriesName, SeriesValues)>,
}

impl SeriesFrame {
    /// A frame with no columns and no rows.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Build a frame from named columns, preserving their order.
    ///
    /// # Errors
    /// Returns `IndiceError::InvalidArg` if two columns share a name.
    pub fn from_columns(
        columns: impl IntoIterator<Item = (SeriesName, SeriesValues)>,
    ) -> Result<Self, IndiceError> {
        let mut frame = Self::empty();
        for (name, values) in columns {
            frame.with_column(name, values)?;
        }
        Ok(frame)
    }

    /// Append one named column.
    ///
    /// # Errors
    /// Returns `IndiceError::InvalidArg` if the name is already present.
    pub fn with_column(
        &mut self,
        name: SeriesName,
        values: SeriesValues,
    ) -> Result<(), IndiceError> {
        if self.contains(&name) {
            return Err(IndiceError::InvalidArg(format!(
                "duplicate series name '{name}' in frame"
            )));
        }
        self.columns.push((name, values));
        Ok(())
    }

    /// Append a column whose name the caller has already checked is absent.
    pub(crate) fn push_unchecked(&mut self, name: SeriesName, values: SeriesValues) {
        debug_assert!(!self.contains(&name));
        self.columns.push((name, values));
    }

    /// Whether the frame holds no observations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|(_, v)| v.is_empty())
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of distinct dates across all columns.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.dates().len()
    }

    /// Column names in frame order.
    pub fn names(&self) -> impl Iterator<Item = &SeriesName> {
        self.columns.iter().map(|(n, _)| n)
    }

    /// Whether a column with this name exists.
    #[must_use]
    pub fn contains(&self, name: &SeriesName) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// The observations of one column, if present.
    #[must_use]
    pub fn column(&self, name: &SeriesName) -> Option<&SeriesValues> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Iterate columns in frame order.
    pub fn columns(&self) -> impl Iterator<Item = (&SeriesName, &SeriesValues)> {
        self.columns.iter().map(|(n, v)| (n, v))
    }

    /// Iterate columns mutably in frame order.
    pub(crate) fn columns_mut(&mut self) -> impl Iterator<Item = (&SeriesName, &mut SeriesValues)> {
        self.columns.iter_mut().map(|(n, v)| (&*n, v))
    }

    /// The union of all column date sets, sorted ascending.
    #[must_use]
    pub fn dates(&self) -> BTreeSet<NaiveDate> {
        self.columns
            .iter()
            .flat_map(|(_, v)| v.keys().copied())
            .collect()
    }

    /// Earliest date with any observation.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.columns
            .iter()
            .filter_map(|(_, v)| v.keys().next().copied())
            .min()
    }

    /// Latest date with any observation.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.columns
            .iter()
            .filter_map(|(_, v)| v.keys().next_back().copied())
            .max()
    }

    /// The observation of `name` at `date`, if any.
    #[must_use]
    pub fn value(&self, name: &SeriesName, date: NaiveDate) -> Option<f64> {
        self.column(name).and_then(|v| v.get(&date)).copied()
    }

    /// A new frame holding the requested columns in the requested order.
    ///
    /// Names absent from this frame are skipped; this mirrors the fetch
    /// layer, where a failed series is simply absent from its report.
    #[must_use]
    pub fn select(&self, names: &[SeriesName]) -> Self {
        let mut out = Self::empty();
        for name in names {
            if out.contains(name) {
                continue;
            }
            if let Some(values) = self.column(name) {
                out.push_unchecked(name.clone(), values.clone());
            }
        }
        out
    }

    /// A new frame restricted to observations within `range`.
    #[must_use]
    pub fn restrict(&self, range: DateRange) -> Self {
        let mut out = Self::empty();
        for (name, values) in &self.columns {
            let kept: SeriesValues = values
                .iter()
                .filter(|(d, _)| range.contains(**d))
                .map(|(&d, &v)| (d, v))
                .collect();
            out.push_unchecked(name.clone(), kept);
        }
        out
    }
}
