use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use crate::models::{FileType, FsMetadata};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Node {
    File(u64),
    Directory(Vec<PathBuf>),
    Other,
    StatError(String),
    ListError(String),
    /// Stats fine, then vanishes before the existence check.
    Vanishing(u64),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    nodes: HashMap<PathBuf, Node>,
    created: bool,
    stat_calls: Vec<PathBuf>,
}

const MOCK_MTIME: u64 = 1_700_000_000;

impl MockFileSystem {
    pub fn add_file(&self, path: impl Into<PathBuf>, len: u64) {
        self.insert(path.into(), Node::File(len));
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>, children: &[&str]) {
        let path = path.into();
        let children = children.iter().map(|name| path.join(name)).collect();
        self.insert(path, Node::Directory(children));
    }

    pub fn add_other(&self, path: impl Into<PathBuf>) {
        self.insert(path.into(), Node::Other);
    }

    pub fn set_stat_error(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        self.insert(path.into(), Node::StatError(message.into()));
    }

    pub fn set_list_error(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        self.insert(path.into(), Node::ListError(message.into()));
    }

    pub fn add_vanishing(&self, path: impl Into<PathBuf>, len: u64) {
        self.insert(path.into(), Node::Vanishing(len));
    }

    pub fn with_creation_times(&self) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.created = true;
    }

    pub fn stat_calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.stat_calls.clone()
    }

    fn insert(&self, path: PathBuf, node: Node) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.nodes.insert(path, node);
    }
}

impl FileSystem for MockFileSystem {
    fn metadata(&self, path: &Path) -> Result<FsMetadata> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.stat_calls.push(path.to_path_buf());

        let (file_type, len) = match inner.nodes.get(path) {
            Some(Node::File(len)) | Some(Node::Vanishing(len)) => (FileType::File, *len),
            Some(Node::Directory(_)) | Some(Node::ListError(_)) => (FileType::Directory, 4096),
            Some(Node::Other) => (FileType::Other, 0),
            Some(Node::StatError(message)) => return Err(anyhow!("{message}")),
            None => return Err(anyhow!("no such file: {}", path.display())),
        };

        let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(MOCK_MTIME);
        Ok(FsMetadata {
            file_type,
            len,
            accessed: modified,
            modified,
            created: inner.created.then_some(modified),
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().expect("mock fs lock");
        matches!(
            inner.nodes.get(path),
            Some(node) if !matches!(node, Node::Vanishing(_) | Node::StatError(_))
        )
    }

    fn read_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let inner = self.inner.lock().expect("mock fs lock");
        match inner.nodes.get(dir) {
            Some(Node::Directory(children)) => Ok(children.clone()),
            Some(Node::ListError(message)) => Err(anyhow!("{message}")),
            _ => Err(anyhow!("not a directory: {}", dir.display())),
        }
    }

    fn absolute(&self, path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(Path::new("/mock").join(path))
        }
    }
}
