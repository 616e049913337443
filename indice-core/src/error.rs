use thiserror::Error;

/// Unified error type for the indice workspace.
///
/// Distinguishes per-series fetch failures (collected into reports, never
/// fatal to a batch) from structural failures (malformed stores, invalid
/// arguments) that must surface to the caller.
#[derive(Debug, Error)]
pub enum IndiceError {
    /// A single named series failed to retrieve from an external source.
    #[error("{source_name} failed for '{series}': {msg}")]
    Fetch {
        /// Source name that failed (e.g. "indice-fred").
        source_name: String,
        /// The series identifier that failed.
        series: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Issues with returned or stored data (unparseable dates, bad cells).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A requested resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "category 'Meat'".
        what: String,
    },

    /// I/O failure around the persisted series store.
    #[error("store error at {path}: {msg}")]
    Store {
        /// Path of the store file involved.
        path: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An extension was requested with fewer historical rows than it needs.
    #[error("insufficient history: extension needs {needed} rows, have {have}")]
    InsufficientHistory {
        /// Minimum number of rows the extension method requires.
        needed: usize,
        /// Number of rows actually present.
        have: usize,
    },
}

impl IndiceError {
    /// Helper: build a `Fetch` error tagged with the source and series name.
    pub fn fetch(
        source_name: impl Into<String>,
        series: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::Fetch {
            source_name: source_name.into(),
            series: series.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Store` error with the file path and message.
    pub fn store(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Store {
            path: path.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `InsufficientHistory` error.
    #[must_use]
    pub const fn insufficient_history(needed: usize, have: usize) -> Self {
        Self::InsufficientHistory { needed, have }
    }
}
