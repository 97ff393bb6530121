//! Reading the target file and writing it back.
//!
//! The write goes through a temporary file in the target's directory that is
//! renamed over the original, so an interrupted run leaves either the old
//! text or the new text on disk.

use crate::error::{RewriteError, RewriteResult};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Read the whole target as UTF-8.
pub fn read_source(path: &Path) -> RewriteResult<String> {
    fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the contents of `path` with `contents`.
pub fn write_atomic(path: &Path, contents: &str) -> RewriteResult<()> {
    let write_err = |source: std::io::Error| RewriteError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    // Keep the original file's permissions rather than the temp file's 0600
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), meta.permissions()).map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.php");
        fs::write(&path, "<?php // héllo\n").unwrap();
        assert_eq!(read_source(&path).unwrap(), "<?php // héllo\n");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.php");
        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, RewriteError::Read { .. }), "Got: {err:?}");
        assert!(err.to_string().contains("missing.php"), "Got: {err}");
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.php");
        fs::write(&path, [0x3c, 0x3f, 0xff, 0xfe]).unwrap();
        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, RewriteError::Read { .. }), "Got: {err:?}");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.php");
        fs::write(&path, "old contents that are longer").unwrap();
        write_atomic(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        // no temp files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("a.php");
        let err = write_atomic(&path, "x").unwrap_err();
        assert!(matches!(err, RewriteError::Write { .. }), "Got: {err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.php");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        write_atomic(&path, "new").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
