//! Source-folder discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// List the sheet files (CSV) in a directory, sorted by file name.
///
/// Subdirectories are not descended into; a batch folder is flat by
/// convention.
pub fn discover_sheets(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_sheet = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_sheet {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = %dir.display(), files = files.len(), "discovered sheet files");
    Ok(files)
}

/// File stem used for matching rules against a source file.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn discovers_only_csv_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        for name in ["б_штатка.csv", "а_бойовий.CSV", "нотатки.txt", "звіт.docx"] {
            std::fs::write(dir.path().join(name), "x").unwrap();
        }
        std::fs::create_dir(dir.path().join("архів")).unwrap();

        let files = discover_sheets(dir.path()).unwrap();
        let names: Vec<String> = files.iter().map(|path| file_stem(path)).collect();
        assert_eq!(names, vec!["а_бойовий", "б_штатка"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = discover_sheets(&dir.path().join("нема")).unwrap_err();
        assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
    }
}
