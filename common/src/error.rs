//! Error taxonomy.
//!
//! Probe errors are routine and never leave the probe engine: they are folded
//! into a [`Status`](crate::network::status::Status). Config errors are fatal
//! and surface once, before the first pass.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("no answer within {0:?}")]
    Timeout(Duration),

    #[error("connection refused")]
    ConnectionRefused,

    #[error("host unreachable: {0}")]
    HostUnreachable(String),
}

impl ProbeError {
    /// Classifies a failed connect by its io error kind.
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::ConnectionRefused => Self::ConnectionRefused,
            _ => Self::HostUnreachable(err.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed target file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("cannot access target file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
