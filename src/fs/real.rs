use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{FileType, FsMetadata};

use super::FileSystem;

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn metadata(&self, path: &Path) -> Result<FsMetadata> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("cannot stat '{}'", path.display()))?;

        let file_type = if metadata.is_file() {
            FileType::File
        } else if metadata.is_dir() {
            FileType::Directory
        } else {
            FileType::Other
        };

        Ok(FsMetadata {
            file_type,
            len: metadata.len(),
            accessed: metadata
                .accessed()
                .with_context(|| format!("no access time for '{}'", path.display()))?,
            modified: metadata
                .modified()
                .with_context(|| format!("no modify time for '{}'", path.display()))?,
            // Not every platform/filesystem records a birth time.
            created: metadata.created().ok(),
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut children = Vec::new();
        for entry in fs::read_dir(dir)
            .with_context(|| format!("cannot read directory '{}'", dir.display()))?
        {
            let entry =
                entry.with_context(|| format!("cannot read directory '{}'", dir.display()))?;
            children.push(entry.path());
        }
        Ok(children)
    }

    fn absolute(&self, path: &Path) -> Result<PathBuf> {
        std::path::absolute(path)
            .with_context(|| format!("cannot resolve '{}'", path.display()))
    }
}
