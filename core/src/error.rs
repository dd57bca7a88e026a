use thiserror::Error;

/// Failure to read a single document. Scoped to that file; a build that hits
/// one of these keeps going with the remaining files.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("Error: File not found at {path}")]
    NotFound { path: String },
    #[error("An error occurred while reading {path}: {reason}")]
    Read { path: String, reason: String },
}

impl ReadError {
    pub(crate) fn from_io(path: &str, err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ReadError::NotFound { path: path.to_string() },
            _ => ReadError::Read { path: path.to_string(), reason: err.to_string() },
        }
    }
}

/// Fatal to a whole build attempt; no partial index is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Error: '{path}' is not a valid directory.")]
    NotADirectory { path: String },
    #[error("Error: could not list directory '{path}': {reason}")]
    Unreadable { path: String, reason: String },
}
