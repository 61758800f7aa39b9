use super::Format;
use std::fmt;
use thiserror::Error;

/// Where in the input a parse error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// 1-based line number, for line-oriented formats.
    Line(usize),
    /// 1-based character column, for single-line notations.
    Column(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Line(n) => write!(f, "line ~{n}"),
            Location::Column(n) => write!(f, "column {n}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at {location})")]
    Parse {
        format: Format,
        location: Location,
        details: String,
    },

    #[error("the '{0}' format is not supported for this read operation")]
    UnsupportedReadFormat(Format),

    #[error("invalid graph batch JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            location: Location::Line(line),
            details: details.into(),
        }
    }

    pub fn parse_at(format: Format, column: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            location: Location::Column(column),
            details: details.into(),
        }
    }
}
