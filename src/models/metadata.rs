use std::time::SystemTime;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileType {
    File,
    Directory,
    Other,
}

/// The subset of stat information the inspector needs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsMetadata {
    pub file_type: FileType,
    pub len: u64,
    pub accessed: SystemTime,
    pub modified: SystemTime,
    pub created: Option<SystemTime>,
}
