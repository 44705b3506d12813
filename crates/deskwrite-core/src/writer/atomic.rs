//! File replacement strategies for rendered entries.
//!
//! Atomic writes follow the usual sequence:
//! 1. Write to a hidden temp file with a PID+TID suffix in the target directory
//! 2. `sync_all` so the data reaches disk
//! 3. Rename over the target
//!
//! The temp file is removed if any step fails.

use crate::error::{DeskwriteError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::thread;
use tracing::debug;

/// Truncate `path` and write `contents` in place.
///
/// A failure part-way through can leave a partial file behind.
pub fn write_in_place(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| DeskwriteError::Io {
        message: "create desktop file".to_string(),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;

    file.write_all(contents.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| DeskwriteError::Io {
            message: "write desktop file".to_string(),
            path: Some(path.to_path_buf()),
            source: Some(e),
        })?;

    debug!("Wrote {} in place", path.display());
    Ok(())
}

/// Replace `path` with `contents` via temp file and rename.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let temp_path = temp_path_for(path);

    if let Err(e) = write_and_sync(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(DeskwriteError::Io {
            message: format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            ),
            path: Some(path.to_path_buf()),
            source: Some(e),
        });
    }

    debug!("Atomically wrote {}", path.display());
    Ok(())
}

fn write_and_sync(temp_path: &Path, contents: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| DeskwriteError::Io {
            message: format!("Failed to create temp file {}", temp_path.display()),
            path: Some(temp_path.to_path_buf()),
            source: Some(e),
        })?;

    file.write_all(contents.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|e| DeskwriteError::Io {
            message: format!("Failed to write temp file {}", temp_path.display()),
            path: Some(temp_path.to_path_buf()),
            source: Some(e),
        })
}

/// `<dir>/.<file name>.<pid>.<tid>.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(
        ".{}.{}.{}.tmp",
        file_name,
        process::id(),
        thread_id()
    ))
}

/// Numeric identifier for the current thread.
fn thread_id() -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    thread::current().id().hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.desktop");

        write_atomic(&path, "first\n").unwrap();
        write_atomic(&path, "second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.desktop");

        write_atomic(&path, "content\n").unwrap();

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("a.desktop")]);
    }

    #[test]
    fn test_write_atomic_missing_dir_fails_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("a.desktop");

        let err = write_atomic(&path, "content\n").unwrap_err();
        assert!(matches!(err, DeskwriteError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_in_place_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.desktop");
        fs::write(&path, "a much longer previous body\n").unwrap();

        write_in_place(&path, "short\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/apps/x.desktop"));
        assert_eq!(temp.parent(), Some(Path::new("/apps")));
        let name = temp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".x.desktop."));
        assert!(name.ends_with(".tmp"));
    }
}
