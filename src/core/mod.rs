pub mod format;
pub mod inspect;
pub mod render;
pub mod units;

pub use format::{format_size, format_timestamp};
pub use inspect::inspect;
pub use render::{RenderOptions, render_entry, write_entry, write_reports, write_usage};
