//! Foundational identifier, range, and cadence types.

use core::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::IndiceError;

/// Identifier of one series within a frame (a FRED series id, a CPI
/// category name, ...).
///
/// Names are unique within one frame; explanatory and target datasets use
/// disjoint namespaces by construction since they live in separate stores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesName(String);

impl SeriesName {
    /// Wrap a raw identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesName {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for SeriesName {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Inclusive date interval; either bound may be absent, meaning unbounded
/// in that direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest date requested, inclusive.
    pub start: Option<NaiveDate>,
    /// Latest date requested, inclusive.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Range with no bound on either side.
    pub const UNBOUNDED: Self = Self {
        start: None,
        end: None,
    };

    /// Range bounded below only.
    #[must_use]
    pub const fn since(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Range bounded on both sides.
    #[must_use]
    pub const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Whether `date` falls within the range (both bounds inclusive).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(s) => write!(f, "[{s}, ")?,
            None => f.write_str("(unbounded, ")?,
        }
        match self.end {
            Some(e) => write!(f, "{e}]"),
            None => f.write_str("unbounded)"),
        }
    }
}

/// Calendar cadence used when resampling a frame by period mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Frequency {
    /// One bucket per calendar day (identity for daily observations).
    Daily,
    /// One bucket per ISO week, keyed at Monday.
    Weekly,
    /// One bucket per calendar month, keyed at the first of the month.
    Monthly,
    /// One bucket per calendar quarter, keyed at the quarter's first day.
    Quarterly,
    /// One bucket per calendar year, keyed at January 1st.
    Yearly,
}

impl Frequency {
    /// Map a date to the first date of its bucket.
    #[must_use]
    pub fn bucket_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => date,
            Self::Weekly => {
                let days_from_monday = u64::from(date.weekday().num_days_from_monday());
                date.checked_sub_days(chrono::Days::new(days_from_monday))
                    .unwrap_or(date)
            }
            Self::Monthly => NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date),
            Self::Quarterly => {
                let month = (date.month0() / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
            }
            Self::Yearly => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        }
    }

    /// The start of the bucket following the one containing `date`, or
    /// `None` on calendar overflow.
    #[must_use]
    pub fn advance(self, date: NaiveDate) -> Option<NaiveDate> {
        let start = self.bucket_start(date);
        match self {
            Self::Daily => start.checked_add_days(chrono::Days::new(1)),
            Self::Weekly => start.checked_add_days(chrono::Days::new(7)),
            Self::Monthly => start.checked_add_months(chrono::Months::new(1)),
            Self::Quarterly => start.checked_add_months(chrono::Months::new(3)),
            Self::Yearly => start.checked_add_months(chrono::Months::new(12)),
        }
    }
}

/// Policy for synthesizing future rows on a target frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ExtendMethod {
    /// Replicate the last real row unchanged.
    #[default]
    Constant,
    /// Continue the first difference of the last two rows one step.
    Project,
}

impl FromStr for ExtendMethod {
    type Err = IndiceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "constant" => Ok(Self::Constant),
            "project" => Ok(Self::Project),
            other => Err(IndiceError::InvalidArg(format!(
                "unknown extension method '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ExtendMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => f.write_str("constant"),
            Self::Project => f.write_str("project"),
        }
    }
}
