use std::path::PathBuf;
use std::time::SystemTime;

/// What a successfully inspected path turned out to be.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EntryKind {
    #[default]
    Unknown,
    File,
    Directory,
}

/// Outcome of inspecting a single path. Failures never escape as errors;
/// they are recorded here and rendered in-band.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Status {
    #[default]
    Ok,
    /// The existence check failed after metadata had already been read.
    NotFound,
    /// Metadata (or the directory listing) could not be read.
    StatError(String),
    /// Neither a regular file nor a directory.
    UnsupportedType,
}

impl Status {
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

/// Structured inspection result for one filesystem path.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Entry {
    pub input_path: PathBuf,
    pub status: Status,
    pub kind: EntryKind,
    pub name: String,
    pub path: PathBuf,
    pub absolute_path: PathBuf,
    pub size_bytes: u64,
    pub access_time: Option<SystemTime>,
    pub modify_time: Option<SystemTime>,
    pub create_time: Option<SystemTime>,
    /// Only set for files.
    pub extension: Option<String>,
    /// Only set for directories, in directory-iteration order.
    pub children: Option<Vec<Entry>>,
}

impl Entry {
    pub fn failed(input_path: PathBuf, status: Status) -> Self {
        Self {
            input_path,
            status,
            ..Self::default()
        }
    }

    /// Size that counts towards a parent's aggregate.
    pub fn counted_size(&self) -> u64 {
        if self.status.is_ok() {
            self.size_bytes
        } else {
            0
        }
    }
}
