//! Driver-local validation errors, grounded in
//! `examples/original_source/src/shell/service.py`'s `ValidationError` and
//! its nested `Code` (`NOT_EXIST = 1`, `NOT_FILE = 2`, `NOT_SUPPORTED = 3`).

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorCode {
    NotExist = 1,
    NotFile = 2,
    NotSupported = 3,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DriverError {
    SourceNotFound { path: PathBuf },
    SourceNotAFile { path: PathBuf },
    UnknownInterpreterAtCli { name: String },
    OutputPathNotAFile { path: PathBuf },
}

impl DriverError {
    pub fn code(&self) -> ValidationErrorCode {
        match self {
            DriverError::SourceNotFound { .. } => ValidationErrorCode::NotExist,
            DriverError::SourceNotAFile { .. } | DriverError::OutputPathNotAFile { .. } => ValidationErrorCode::NotFile,
            DriverError::UnknownInterpreterAtCli { .. } => ValidationErrorCode::NotSupported,
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::SourceNotFound { path } => write!(f, "the source file '{}' does not exist", path.display()),
            DriverError::SourceNotAFile { path } => write!(f, "the path '{}' does not refer to a file", path.display()),
            DriverError::UnknownInterpreterAtCli { name } => write!(f, "the interpreter '{name}' is not supported"),
            DriverError::OutputPathNotAFile { path } => write!(f, "the output path '{}' does not refer to a file", path.display()),
        }
    }
}

impl Error for DriverError {}
