//! Size and metadata reports for files and directories.
//!
//! [`crate::core::inspect()`] turns a path into an [`models::Entry`] tree, and
//! the functions in [`crate::core::render`] turn that tree into text.
//!
//! [`crate::core::units`] is library API beyond what the binary prints: unit
//! labels such as `KiB`, `千字节` or `JEDEC MB` parse into a
//! [`crate::core::units::Unit`] (via `FromStr`), and `to_bytes`, `auto_unit` and
//! `convert` translate between byte counts and any unit.

pub mod cli;
pub mod core;
pub mod fs;
pub mod models;
