use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::fs::FileSystem;
use crate::models::{Entry, EntryKind, FileType, Status};

/// Inspect `input_path` and, for directories, everything below it.
///
/// Never fails: problems are recorded in the returned entry's `status`. A
/// directory's size is the sum of its children that inspected cleanly.
pub fn inspect<F: FileSystem>(fs: &F, input_path: &Path) -> Entry {
    debug!(path = %input_path.display(), "inspecting");

    let path = tidy_path(input_path);
    let stat = fs
        .absolute(&path)
        .and_then(|absolute| Ok((absolute, fs.metadata(&path)?)));
    let (absolute_path, metadata) = match stat {
        Ok(stat) => stat,
        Err(err) => {
            debug!(path = %input_path.display(), "stat failed: {err:#}");
            return Entry::failed(input_path.to_path_buf(), Status::StatError(format!("{err:#}")));
        }
    };

    // Separate from the stat above; the path may disappear in between.
    if !fs.exists(&path) {
        return Entry::failed(input_path.to_path_buf(), Status::NotFound);
    }

    let mut entry = Entry {
        input_path: input_path.to_path_buf(),
        status: Status::Ok,
        kind: EntryKind::Unknown,
        name: base_name(&path),
        absolute_path,
        size_bytes: metadata.len,
        access_time: Some(metadata.accessed),
        modify_time: Some(metadata.modified),
        create_time: metadata.created,
        extension: None,
        children: None,
        path,
    };

    match metadata.file_type {
        FileType::File => {
            entry.kind = EntryKind::File;
            entry.extension = Some(extension_of(&entry.path));
        }
        FileType::Directory => {
            let child_paths = match fs.read_dir(&entry.path) {
                Ok(child_paths) => child_paths,
                Err(err) => {
                    warn!(path = %input_path.display(), "cannot list directory: {err:#}");
                    return Entry::failed(
                        input_path.to_path_buf(),
                        Status::StatError(format!("{err:#}")),
                    );
                }
            };
            debug!(path = %entry.path.display(), children = child_paths.len(), "listed directory");

            let children: Vec<Entry> = child_paths
                .iter()
                .map(|child_path| inspect(fs, &tidy_path(child_path)))
                .collect();

            entry.kind = EntryKind::Directory;
            entry.size_bytes = children
                .iter()
                .fold(0u64, |total, child| total.saturating_add(child.counted_size()));
            entry.children = Some(children);
        }
        FileType::Other => {
            return Entry::failed(input_path.to_path_buf(), Status::UnsupportedType);
        }
    }

    entry
}

/// Lexically tidy a path the way it is displayed: no `.` components (except
/// a lone one), no repeated or trailing separators.
pub fn tidy_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    if matches!(components.peek(), Some(Component::CurDir)) {
        components.next();
    }

    let tidy: PathBuf = components.collect();
    if tidy.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        tidy
    }
}

fn base_name(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::ParentDir) => "..".to_owned(),
        _ => String::new(),
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}
