use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::fs::FileSystem;
use crate::models::{Entry, EntryKind, Status};

use super::format::{format_size, format_timestamp};
use super::inspect::inspect;

const SEPARATOR: &str = "====================";

/// Options controlling how reports are rendered.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Inspect every directory child again right before rendering it, rather
    /// than reusing the entry collected while sizing the parent. The child is
    /// then stat'd twice and its report reflects the filesystem at render time.
    pub reinspect_children: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            reinspect_children: true,
        }
    }
}

/// Output for an invocation without paths: usage, then a report on the
/// running executable itself.
pub fn write_usage<W: Write, F: FileSystem>(
    writer: &mut W,
    fs: &F,
    program_name: &str,
    executable: &Path,
    options: &RenderOptions,
) -> io::Result<()> {
    if program_name.contains(' ') {
        writeln!(writer, "用法：\"{program_name}\" [文件]...")?;
    } else {
        writeln!(writer, "用法：{program_name} [文件]...")?;
    }
    writer.write_all("显示文件大小信息\n\n".as_bytes())?;

    let entry = inspect(fs, executable);
    write_entry(writer, fs, &entry, options)?;
    writer.write_all(b"\n")
}

/// Reports for every path. More than one path gets a header with the count
/// and combined size, and a separator before each report.
pub fn write_reports<W: Write, F: FileSystem>(
    writer: &mut W,
    fs: &F,
    paths: &[PathBuf],
    options: &RenderOptions,
) -> io::Result<()> {
    if let [path] = paths {
        let entry = inspect(fs, path);
        write_entry(writer, fs, &entry, options)?;
        return writer.write_all(b"\n");
    }

    let entries: Vec<Entry> = paths.iter().map(|path| inspect(fs, path)).collect();
    let total = entries
        .iter()
        .fold(0u64, |total, entry| total.saturating_add(entry.size_bytes));

    writeln!(writer, "共输入了 {} 个文件", entries.len())?;
    write!(writer, "总大小：{}", format_size(total))?;
    for entry in &entries {
        write!(writer, "\n{SEPARATOR}\n\n")?;
        write_entry(writer, fs, entry, options)?;
    }
    writer.write_all(b"\n")
}

/// Multi-line report for one entry, recursing into directory children.
pub fn write_entry<W: Write, F: FileSystem>(
    writer: &mut W,
    fs: &F,
    entry: &Entry,
    options: &RenderOptions,
) -> io::Result<()> {
    writeln!(writer, "{}", entry.input_path.display())?;

    match &entry.status {
        Status::Ok => {}
        Status::StatError(message) => return writeln!(writer, "{message}"),
        Status::NotFound => return writeln!(writer, "文件不存在"),
        Status::UnsupportedType => return writeln!(writer, "不支持的文件类型"),
    }

    match entry.kind {
        EntryKind::File => {
            writeln!(writer, "文件名: {}", entry.name)?;
            writeln!(writer, "文件大小: {}", format_size(entry.size_bytes))?;
            writeln!(writer, "扩展名: {}", entry.extension.as_deref().unwrap_or_default())?;
            write_locations(writer, entry)?;
            if let Some(time) = entry.access_time {
                writeln!(writer, "访问时间: {}", format_timestamp(time))?;
            }
            if let Some(time) = entry.modify_time {
                writeln!(writer, "修改时间: {}", format_timestamp(time))?;
            }
            if let Some(time) = entry.create_time {
                writeln!(writer, "创建时间: {}", format_timestamp(time))?;
            }
        }
        EntryKind::Directory => {
            let children = entry.children.as_deref().unwrap_or_default();
            writeln!(writer, "目录名: {}", entry.name)?;
            writeln!(writer, "目录大小: {}", format_size(entry.size_bytes))?;
            write_locations(writer, entry)?;
            writeln!(writer, "子文件数: {}", children.len())?;

            for child in children {
                writer.write_all(b"\n\n")?;
                if options.reinspect_children {
                    let fresh = inspect(fs, &child.input_path);
                    write_entry(writer, fs, &fresh, options)?;
                } else {
                    write_entry(writer, fs, child, options)?;
                }
            }
        }
        EntryKind::Unknown => {}
    }

    Ok(())
}

fn write_locations<W: Write>(writer: &mut W, entry: &Entry) -> io::Result<()> {
    if entry.path != entry.absolute_path {
        writeln!(writer, "路径: {}", entry.path.display())?;
    }
    writeln!(writer, "绝对路径: {}", entry.absolute_path.display())
}

/// Convenience wrapper around [`write_entry`] for callers that want a string.
pub fn render_entry<F: FileSystem>(
    fs: &F,
    entry: &Entry,
    options: &RenderOptions,
) -> io::Result<String> {
    let mut out = Vec::new();
    write_entry(&mut out, fs, entry, options)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
