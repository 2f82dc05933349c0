use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // Persisted data could not be read, parsed or written. The caller gets it
    // as-is; nothing in the library retries a storage failure.
    Storage {
        message: String,
        reason_code: Option<String>,
    },
    // Raised by the input layer only; catalog operations never validate.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

pub const REASON_IO: &str = "io";
pub const REASON_MALFORMED: &str = "malformed";

impl LibraryError {
    pub fn storage(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Storage { message: message.to_string(), reason_code }
    }

    pub fn malformed(message: &str) -> LibraryError {
        LibraryError::storage(message, Some(REASON_MALFORMED.to_string()))
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn reason_code(&self) -> Option<&str> {
        match self {
            LibraryError::Storage { reason_code, .. } => { reason_code.as_deref() }
            LibraryError::Validation { reason_code, .. } => { reason_code.as_deref() }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::storage(
            format!("library file io {:?}", err).as_str(), Some(REASON_IO.to_string()))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return LibraryError::storage(
                format!("library file io {:?}", err).as_str(), Some(REASON_IO.to_string()));
        }
        LibraryError::malformed(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Storage { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the library store and catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ReadStatus {
    Read,
    Unread,
}

impl From<bool> for ReadStatus {
    fn from(read: bool) -> Self {
        if read { ReadStatus::Read } else { ReadStatus::Unread }
    }
}

impl Display for ReadStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ReadStatus::Read => write!(f, "Read"),
            ReadStatus::Unread => write!(f, "Unread"),
        }
    }
}
