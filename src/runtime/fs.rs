//! File system operations (read, write, rename, directory).

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn write_impl(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents)
            .with_context(|| format!("Failed to write to {}", path.display()))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn read_to_string_impl(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn rename_impl(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to).with_context(|| {
            format!("Failed to rename {} to {}", from.display(), to.display())
        })
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn create_dir_all_impl(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_file_ops() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        runtime.write(&file_path, b"hello").unwrap();
        assert!(runtime.exists(&file_path));
        assert_eq!(runtime.read_to_string(&file_path).unwrap(), "hello");

        let new_path = dir.path().join("renamed.txt");
        runtime.rename(&file_path, &new_path).unwrap();
        assert!(!runtime.exists(&file_path));
        assert_eq!(runtime.read_to_string(&new_path).unwrap(), "hello");
    }

    #[test]
    fn test_real_runtime_rename_replaces_destination() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let from = dir.path().join("new.json");
        let to = dir.path().join("data.json");

        runtime.write(&to, b"old").unwrap();
        runtime.write(&from, b"new").unwrap();
        runtime.rename(&from, &to).unwrap();
        assert_eq!(runtime.read_to_string(&to).unwrap(), "new");
    }

    #[test]
    fn test_real_runtime_create_dir_all() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");

        runtime.create_dir_all(&nested).unwrap();
        assert!(runtime.exists(&nested));
    }

    #[test]
    fn test_real_runtime_errors() {
        let runtime = RealRuntime;
        let err = runtime
            .read_to_string(std::path::Path::new("/nonexistent/path/file.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/path/file.txt"));
    }
}
