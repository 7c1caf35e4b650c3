use std::fmt::Display;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid range: end {end} is before start {start}")]
    InvalidRange { start: usize, end: usize },
    #[error("invalid line/column {line}:{column}, both are 1-based")]
    InvalidLineColumn { line: usize, column: usize },
    #[error("source is not valid UTF-8 text (valid up to byte {valid_up_to})")]
    InvalidSourceType { valid_up_to: usize },
    #[error("range {start}..{end} is out of bounds for source of length {length}")]
    OutOfBounds {
        start: usize,
        end: usize,
        length: usize,
    },
    #[error("unknown token kind {tag:?}")]
    UnknownTokenKind { tag: String },
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::InvalidRange { .. } => "InvalidRange",
            Error::InvalidLineColumn { .. } => "InvalidLineColumn",
            Error::InvalidSourceType { .. } => "InvalidSourceType",
            Error::OutOfBounds { .. } => "OutOfBounds",
            Error::UnknownTokenKind { .. } => "UnknownTokenKind",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::InvalidRange { start, end } => ErrorTip::Suggestion(format!(
                "Swap the bounds? `{}..{}` is a valid range",
                end, start
            )),
            Error::InvalidLineColumn { .. } => ErrorTip::Suggestion(String::from(
                "Lines and columns start counting at 1",
            )),
            Error::InvalidSourceType { .. } => ErrorTip::Suggestion(String::from(
                "Source files must be encoded as UTF-8",
            )),
            Error::OutOfBounds { length, .. } => ErrorTip::Suggestion(format!(
                "Valid offsets are 0..={}",
                length
            )),
            Error::UnknownTokenKind { .. } => ErrorTip::None,
        }
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidSourceType {
            valid_up_to: err.valid_up_to(),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
