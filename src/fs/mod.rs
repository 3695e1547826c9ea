mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::models::FsMetadata;

pub trait FileSystem {
    /// Stat `path`, following symlinks.
    fn metadata(&self, path: &Path) -> Result<FsMetadata>;

    fn exists(&self, path: &Path) -> bool;

    /// Direct children of `dir`, in whatever order the platform yields them.
    fn read_dir(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Absolute form of `path` without resolving symlinks.
    fn absolute(&self, path: &Path) -> Result<PathBuf>;
}
