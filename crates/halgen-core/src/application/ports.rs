//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `halgen-adapters` crate provides implementations.

use std::path::Path;

use crate::error::HalgenResult;

#[cfg(test)]
use mockall::automock;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `halgen_adapters::filesystem::LocalFilesystem` (production)
/// - `halgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Only whole-file operations are exposed; the service never streams. A
/// scaffold touches at most two files, so the port stays deliberately small.
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> HalgenResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> HalgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> HalgenResult<()>;
}
