//! Catalogue source handling.
//!
//! # Responsibility
//! - Turn tab-separated catalogue text into an immutable `Catalogue`.
//! - Report acquisition failures; record-level problems are only counted.
//!
//! # Invariants
//! - No load failure is fatal; callers may always fall back to an empty
//!   catalogue.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod load;
pub mod record;

pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Catalogue acquisition error.
#[derive(Debug)]
pub enum CatalogueError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    InvalidUtf8 {
        path: PathBuf,
    },
}

impl CatalogueError {
    /// Stable machine-readable code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "catalogue_read_failed",
            Self::InvalidUtf8 { .. } => "catalogue_invalid_utf8",
        }
    }
}

impl Display for CatalogueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalogue `{}`: {source}", path.display())
            }
            Self::InvalidUtf8 { path } => {
                write!(f, "catalogue `{}` is not valid UTF-8", path.display())
            }
        }
    }
}

impl Error for CatalogueError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidUtf8 { .. } => None,
        }
    }
}
