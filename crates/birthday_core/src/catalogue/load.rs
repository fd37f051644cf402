//! Catalogue acquisition from the file system.
//!
//! # Responsibility
//! - Read catalogue text once per load and hand it to the record parser.
//! - Degrade to an empty catalogue when the source is unavailable.
//!
//! # Invariants
//! - Each call builds a fresh `Catalogue`; nothing is cached between loads.
//! - Logged events carry counts and durations only, never record contents.

use super::{CatalogueError, CatalogueResult};
use crate::catalogue::record::parse_catalogue;
use crate::model::entity::Catalogue;
use log::{error, info};
use std::path::Path;
use std::time::Instant;

/// Reads and parses a catalogue file.
///
/// # Errors
/// - [`CatalogueError::Io`] when the file cannot be read.
/// - [`CatalogueError::InvalidUtf8`] when the file is not UTF-8 text.
pub fn load_catalogue(path: impl AsRef<Path>) -> CatalogueResult<Catalogue> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=catalogue_load module=catalogue status=start");

    let bytes = std::fs::read(path).map_err(|source| CatalogueError::Io {
        path: path.to_path_buf(),
        source,
    });
    let text = bytes.and_then(|bytes| {
        String::from_utf8(bytes).map_err(|_| CatalogueError::InvalidUtf8 {
            path: path.to_path_buf(),
        })
    });

    match text {
        Ok(text) => {
            let catalogue = parse_catalogue(&text);
            let stats = catalogue.stats();
            info!(
                "event=catalogue_load module=catalogue status=ok duration_ms={} lines={} entities={} malformed={} incomplete={}",
                started_at.elapsed().as_millis(),
                stats.lines,
                catalogue.len(),
                stats.malformed,
                stats.incomplete
            );
            Ok(catalogue)
        }
        Err(err) => {
            error!(
                "event=catalogue_load module=catalogue status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                err.code(),
                err
            );
            Err(err)
        }
    }
}

/// Loads a catalogue, falling back to an empty one on any error.
pub fn load_catalogue_or_empty(path: impl AsRef<Path>) -> Catalogue {
    load_catalogue(path).unwrap_or_else(|_| Catalogue::empty())
}

#[cfg(test)]
mod tests {
    use super::{load_catalogue, load_catalogue_or_empty};
    use crate::catalogue::CatalogueError;
    use std::io::Write;

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_catalogue(dir.path().join("missing.txt")).expect_err("must fail");
        assert!(matches!(err, CatalogueError::Io { .. }));
        assert!(load_catalogue_or_empty(dir.path().join("missing.txt")).is_empty());
    }

    #[test]
    fn non_utf8_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(&[0xff, 0xfe, 0x00]).expect("write bytes");
        let err = load_catalogue(file.path()).expect_err("must fail");
        assert!(matches!(err, CatalogueError::InvalidUtf8 { .. }));
    }
}
