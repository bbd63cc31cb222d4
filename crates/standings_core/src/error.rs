use thiserror::Error;

/// Why a single match record was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowDefect {
    #[error("record has {found} fields, at least {required} required")]
    TooShort { found: usize, required: usize },

    #[error("empty team identifier in column {column}")]
    EmptyTeam { column: usize },

    #[error("column {column} ({field}) is not a number: '{value}'")]
    NotNumeric {
        column: usize,
        field: &'static str,
        value: String,
    },

    #[error("record could not be decoded: {message}")]
    Unreadable { message: String },
}

#[derive(Error, Debug)]
pub enum StandingsError {
    #[error("malformed row at line {line}: {defect}")]
    MalformedRow { line: u64, defect: RowDefect },

    #[error("source unavailable: {path}: {message}")]
    SourceUnavailable { path: String, message: String },

    #[error("cannot write destination {path}: {message}")]
    DestinationWriteFailure { path: String, message: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("lookup query is empty")]
    EmptyQuery,
}

impl StandingsError {
    /// Only malformed rows may be skipped; everything else ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StandingsError::MalformedRow { .. })
    }

    pub(crate) fn malformed(line: u64, defect: RowDefect) -> Self {
        StandingsError::MalformedRow { line, defect }
    }
}

pub type Result<T> = std::result::Result<T, StandingsError>;
