//! Error types for the dowsing pipeline.
//!
//! Decode failures are not errors: an undecodable file or manifest is
//! recorded as a [`DecodeWarning`](crate::core::DecodeWarning) and the run
//! continues.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Coarse classification of a [`DowserError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Neither string source is usable, or a setting is invalid.
    Configuration,
    /// The spreadsheet provider rejected the credentials.
    Auth,
    /// The ground directory, spreadsheet or worksheet does not exist.
    NotFound,
    /// Transport failure or unexpected response from the spreadsheet provider.
    Remote,
    /// Unexpected I/O failure while scanning.
    Io,
}

#[derive(Error, Debug)]
pub enum DowserError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unable to understand what to divine from {}", path.display())]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("ground directory does not exist: {}", .0.display())]
    GroundNotFound(PathBuf),

    #[error("ground directory is not a directory: {}", .0.display())]
    GroundNotDirectory(PathBuf),

    #[error("spreadsheet not found: {0}")]
    SheetNotFound(String),

    #[error("spreadsheet request failed")]
    Http(#[from] reqwest::Error),

    #[error("spreadsheet API responded with {status}: {message}")]
    SheetApi { status: u16, message: String },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DowserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DowserError::Config(_) | DowserError::ManifestUnreadable { .. } => {
                ErrorKind::Configuration
            }
            DowserError::Auth(_) => ErrorKind::Auth,
            DowserError::GroundNotFound(_)
            | DowserError::GroundNotDirectory(_)
            | DowserError::SheetNotFound(_) => ErrorKind::NotFound,
            DowserError::Http(_) | DowserError::SheetApi { .. } => ErrorKind::Remote,
            DowserError::Io { .. } => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, DowserError>;
