//! The error taxonomy shared by every operation.
//!
//! Each variant's [`Display`](std::fmt::Display) output is the exact string
//! the frontend contract expects (`"Error: …"`,
//! `"Error reading file: …"`, …), so the structured value can be flattened
//! to that contract at the presentation edge without losing the category.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which file operation needed the home directory.
///
/// The legacy strings use a different prefix for reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl Access {
    fn home_prefix(self) -> &'static str {
        match self {
            Access::Read => "Error getting home directory: ",
            Access::Write => "Failed to get home directory: ",
        }
    }
}

/// Machine-readable failure category, sent over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    ExternalProcess,
    HomeResolution,
    FileRead,
    FileWrite,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The monitor-listing tool could not be started or failed.
    #[error("Error: {0}")]
    ExternalProcess(String),

    /// The current user's home directory is unknown.
    #[error("{}{}", .access.home_prefix(), .reason)]
    HomeResolution { access: Access, reason: String },

    #[error("Error reading file: {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ExternalProcess(_) => ErrorKind::ExternalProcess,
            Error::HomeResolution { .. } => ErrorKind::HomeResolution,
            Error::FileRead { .. } => ErrorKind::FileRead,
            Error::FileWrite { .. } => ErrorKind::FileWrite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn display_matches_legacy_prefixes() {
        let e = Error::ExternalProcess("exit status 1".into());
        assert_eq!(e.to_string(), "Error: exit status 1");

        let e = Error::HomeResolution {
            access: Access::Read,
            reason: "$HOME is not defined".into(),
        };
        assert_eq!(e.to_string(), "Error getting home directory: $HOME is not defined");

        let e = Error::HomeResolution {
            access: Access::Write,
            reason: "$HOME is not defined".into(),
        };
        assert_eq!(e.to_string(), "Failed to get home directory: $HOME is not defined");

        let e = Error::FileRead {
            path: "/x".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(e.to_string(), "Error reading file: /x: gone");

        let e = Error::FileWrite {
            path: "/x".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(e.to_string(), "Failed to write file: /x: denied");
    }

    #[test]
    fn kind_follows_variant() {
        assert_eq!(Error::ExternalProcess(String::new()).kind(), ErrorKind::ExternalProcess);
        let e = Error::HomeResolution {
            access: Access::Write,
            reason: String::new(),
        };
        assert_eq!(e.kind(), ErrorKind::HomeResolution);
    }
}
