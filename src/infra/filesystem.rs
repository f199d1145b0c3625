//! Filesystem operations
//!
//! Handles file and directory operations.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove a directory and all its contents
pub fn remove_dir_all(path: &Path) -> Result<(), FilesystemError> {
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|e| FilesystemError::RemoveDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    }
    Ok(())
}

/// Remove a file if it exists
pub fn remove_file(path: &Path) -> Result<(), FilesystemError> {
    if path.exists() {
        std::fs::remove_file(path).map_err(|e| FilesystemError::RemoveFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    }
    Ok(())
}

/// Write text to a file with LF line endings
///
/// Any CRLF or lone CR in `content` is normalized to LF, since the module
/// scripts are executed by the Android shell.
pub fn write_unix_text(path: &Path, content: &str) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    std::fs::write(path, normalized).map_err(|e| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Recursively copy a directory tree
///
/// `to` must not exist yet.
pub fn copy_dir_all(from: &Path, to: &Path) -> Result<(), FilesystemError> {
    if !from.is_dir() {
        return Err(FilesystemError::NotFound {
            path: from.to_path_buf(),
        });
    }

    for entry in WalkDir::new(from).follow_links(true) {
        let entry = entry.map_err(|e| copy_error(from, to, e))?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| copy_error(from, to, e))?;
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            std::fs::copy(entry.path(), &target)
                .map_err(|e| copy_error(entry.path(), &target, e))?;
        }
    }

    Ok(())
}

fn copy_error(from: &Path, to: &Path, error: impl std::fmt::Display) -> FilesystemError {
    FilesystemError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        error: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_dir_all_copies_nested_tree() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        std::fs::create_dir_all(src.join("a/b")).unwrap();
        std::fs::create_dir_all(src.join("empty")).unwrap();
        std::fs::write(src.join("root.txt"), "root").unwrap();
        std::fs::write(src.join("a/b/leaf.txt"), "leaf").unwrap();

        let dst = temp.path().join("dst");
        copy_dir_all(&src, &dst).unwrap();

        assert_eq!(std::fs::read_to_string(dst.join("root.txt")).unwrap(), "root");
        assert_eq!(std::fs::read_to_string(dst.join("a/b/leaf.txt")).unwrap(), "leaf");
        assert!(dst.join("empty").is_dir());
    }

    #[test]
    fn test_copy_dir_all_missing_source() {
        let temp = TempDir::new().unwrap();
        let result = copy_dir_all(&temp.path().join("nope"), &temp.path().join("dst"));
        assert!(matches!(result, Err(FilesystemError::NotFound { .. })));
    }

    #[test]
    fn test_write_unix_text_normalizes_line_endings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/script.sh");

        write_unix_text(&path, "a\r\nb\rc\n").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"a\nb\nc\n");
    }

    #[test]
    fn test_remove_helpers_ignore_missing_paths() {
        let temp = TempDir::new().unwrap();
        assert!(remove_dir_all(&temp.path().join("missing")).is_ok());
        assert!(remove_file(&temp.path().join("missing.zip")).is_ok());
    }

    #[test]
    fn test_remove_file_deletes_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("old.zip");
        std::fs::write(&path, "zip").unwrap();

        remove_file(&path).unwrap();

        assert!(!path.exists());
    }
}
