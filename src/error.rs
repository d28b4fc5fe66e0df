use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use std::{fmt, io};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path:?}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read data")]
    Read {
        #[source]
        source: io::Error,
    },

    #[error("line {line_number}: failed to parse section header: {line}")]
    MalformedSectionHeader { line_number: usize, line: String },

    #[error("line {line_number}: key is not under any section: {line}")]
    KeyOutsideSection { line_number: usize, line: String },

    #[error("line {line_number}: failed to parse key line: {line}")]
    MalformedKeyValueLine { line_number: usize, line: String },

    #[error("section not found: {section}")]
    SectionNotFound { section: String },

    #[error("key {key} not found in section {section}")]
    KeyNotFound { section: String, key: String },

    #[error("key {key} in section {section} has an unusable value {value:?}")]
    TypeConversion {
        section: String,
        key: String,
        value: String,
        #[source]
        source: ConversionError,
    },
}

impl Error {
    /// Returns the raw text of the line that failed to parse, if any.
    #[must_use]
    pub fn line(&self) -> Option<&str> {
        match *self {
            Self::MalformedSectionHeader { ref line, .. }
            | Self::KeyOutsideSection { ref line, .. }
            | Self::MalformedKeyValueLine { ref line, .. } => Some(line),
            Self::File { .. }
            | Self::Read { .. }
            | Self::SectionNotFound { .. }
            | Self::KeyNotFound { .. }
            | Self::TypeConversion { .. } => None,
        }
    }
}

/// Why a stored string could not be turned into the requested type.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Bool(#[from] ParseBoolError),

    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error("value out of range for f64")]
    FloatOutOfRange,

    #[error("invalid {type_name}: {message}")]
    Other {
        type_name: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseBoolError;

impl std::error::Error for ParseBoolError {}

impl fmt::Display for ParseBoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False".fmt(f)
    }
}
