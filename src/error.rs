//! Error type for structure perception and graph encoding.
//!
//! Encoding itself is total: unknown elements, missing stereo tags and
//! out-of-table atomic numbers degrade to overflow buckets, clamps or
//! fallback constants. The failures below all happen before any feature
//! is computed.

use thiserror::Error;

/// Errors raised while turning a structure into a graph record.
#[derive(Debug, Error)]
pub enum Error {
    /// The structure notation could not be parsed.
    ///
    /// Carries the offending input so batch callers can tell which
    /// molecule failed.
    #[error("failed to parse structure '{input}': {source}")]
    Structure {
        /// The notation string as supplied.
        input: String,
        /// The reader's diagnosis.
        #[source]
        source: crate::io::Error,
    },

    /// A hand-built molecule has a bond the perception step cannot accept.
    #[error("invalid bond between atoms {i} and {j}: {detail}")]
    InvalidBond {
        /// First atom index.
        i: usize,
        /// Second atom index.
        j: usize,
        /// Description of the problem.
        detail: String,
    },

    /// Failed to parse a feature configuration TOML document.
    #[error("failed to parse feature configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Creates a [`Structure`](Error::Structure) error.
    pub fn structure(input: impl Into<String>, source: crate::io::Error) -> Self {
        Self::Structure {
            input: input.into(),
            source,
        }
    }

    /// Creates an [`InvalidBond`](Error::InvalidBond) error.
    pub fn invalid_bond(i: usize, j: usize, details: impl Into<String>) -> Self {
        Self::InvalidBond {
            i,
            j,
            detail: details.into(),
        }
    }
}
