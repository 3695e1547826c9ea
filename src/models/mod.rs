mod entry;
mod metadata;

pub use entry::{Entry, EntryKind, Status};
pub use metadata::{FileType, FsMetadata};
