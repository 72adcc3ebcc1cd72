//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use halgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{HalgenError, HalgenResult},
};

/// In-memory filesystem for testing.
///
/// Stricter than `std::fs` in one respect: writing a file whose parent
/// directory was never created is an error. That catches services that forget
/// to call `create_dir_all` before writing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Pre-populate a file, creating its parent directories (testing helper).
    pub fn seed_file(&self, path: &Path, content: &str) {
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            let mut current = PathBuf::new();
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }

    fn lock_poisoned(path: &Path) -> HalgenError {
        ApplicationError::WriteFailed {
            path: path.to_path_buf(),
            reason: "filesystem lock poisoned".into(),
        }
        .into()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> HalgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| Self::lock_poisoned(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> HalgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| Self::lock_poisoned(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::WriteFailed {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_file(&self, path: &Path) -> HalgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| Self::lock_poisoned(path))?;

        inner.files.remove(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        let path = Path::new("out/widget.hpp");

        assert!(fs.write_file(path, "x").is_err());

        fs.create_dir_all(Path::new("out")).unwrap();
        fs.write_file(path, "x").unwrap();
        assert_eq!(fs.read_file(path).as_deref(), Some("x"));
    }

    #[test]
    fn seed_file_creates_parents_implicitly() {
        let fs = MemoryFilesystem::new();
        let path = Path::new("pre/existing.hpp");

        fs.seed_file(path, "seeded");
        assert!(fs.exists(path));
        assert!(fs.exists(Path::new("pre")));
    }

    #[test]
    fn remove_file_then_exists_is_false() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out")).unwrap();
        let path = Path::new("out/widget.hpp");

        fs.write_file(path, "x").unwrap();
        fs.remove_file(path).unwrap();
        assert!(!fs.exists(path));
    }

    #[test]
    fn clear_empties_everything() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out")).unwrap();
        fs.write_file(Path::new("out/a.hpp"), "x").unwrap();

        fs.clear();
        assert!(fs.list_files().is_empty());
        assert!(!fs.exists(Path::new("out")));
    }
}
