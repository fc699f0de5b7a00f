//! Delivered-folder scanning.

use std::path::Path;

use drc_model::DeliveredFile;
use tracing::info;
use walkdir::WalkDir;

use crate::error::{IngestError, Result};

/// Recursively lists every file under `dir` as a [`DeliveredFile`], with
/// paths relative to `dir` and `/`-joined regardless of platform.
///
/// Entries are visited in file-name order per directory, so the scan is
/// deterministic. No filtering happens here; the core's drawing-file filter
/// decides what counts.
pub fn scan_delivered_files(dir: &Path) -> Result<Vec<DeliveredFile>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        let joined = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.push(DeliveredFile::from_path(joined));
    }
    info!(dir = %dir.display(), files = files.len(), "scanned delivered folder");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_nested_files_with_relative_paths() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("arch/plans")).expect("mkdir");
        std::fs::write(dir.path().join("ABC-DEF-001.pdf"), b"x").expect("write");
        std::fs::write(dir.path().join("arch/plans/ABC-DEF-002.dwg"), b"x").expect("write");

        let files = scan_delivered_files(dir.path()).expect("scan");
        assert_eq!(files.len(), 2);
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert!(paths.contains(&"ABC-DEF-001.pdf"));
        assert!(paths.contains(&"arch/plans/ABC-DEF-002.dwg"));
        let nested = files
            .iter()
            .find(|f| f.path.starts_with("arch/"))
            .expect("nested file");
        assert_eq!(nested.name, "ABC-DEF-002.dwg");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let error = scan_delivered_files(Path::new("/nonexistent/delivery"))
            .expect_err("should fail");
        assert!(matches!(error, IngestError::DirectoryNotFound { .. }));
    }

    #[test]
    fn empty_directory_scans_to_empty_list() {
        let dir = tempfile::tempdir().expect("tempdir");
        let files = scan_delivered_files(dir.path()).expect("scan");
        assert!(files.is_empty());
    }
}
