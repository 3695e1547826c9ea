use std::fmt::Write;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use super::units::{self, Quantity, Unit, UnitSystem};

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;
const TIB: u64 = GIB * 1024;

const KB: u64 = 1000;
const MB: u64 = KB * 1000;
const GB: u64 = MB * 1000;

/// Render a byte count in binary and decimal units.
///
/// The first line carries the IEC value followed by the SI value. Further
/// indented lines cross-reference the exact byte count and the KiB/MiB/GiB
/// scales, but only for sizes where the headline units do not already show
/// that scale.
pub fn format_size(bytes: u64) -> String {
    let value = bytes as f64;
    let mut out = String::new();

    if bytes < KIB {
        let _ = write!(out, "{bytes} B");
    } else {
        let unit = units::unit_for(bytes, UnitSystem::Iec);
        out.push_str(&units::convert(value, unit, Some(4)));
    }

    if bytes < KB {
        out.push_str(" 字节");
    } else {
        let unit = units::unit_for(bytes, UnitSystem::Si);
        let name = Unit::new(UnitSystem::SiChinese, unit.exponent(), Quantity::Byte);
        let _ = write!(out, "    {} {name}", units::convert(value, unit, Some(4)));
    }

    if bytes >= KB {
        let _ = write!(out, "\n    {bytes} B 字节");
    }

    if !(KB..=MIB).contains(&bytes) && bytes != 0 {
        let _ = write!(
            out,
            "\n    {:.4} KiB    {:.4} KB 千字节",
            value / KIB as f64,
            value / KB as f64
        );
    }

    if !(MB..=GIB).contains(&bytes) && bytes >= KB {
        let _ = write!(
            out,
            "\n    {:.4} MiB    {:.4} MB 兆字节",
            value / MIB as f64,
            value / MB as f64
        );
    }

    if !(GB..=TIB).contains(&bytes) && bytes >= MB {
        let _ = write!(
            out,
            "\n    {:.4} GiB    {:.4} GB 吉字节",
            value / GIB as f64,
            value / GB as f64
        );
    }

    out
}

/// Local time as `YYYY-MM-DD HH:MM:SS`, plus the fraction when there is one.
pub fn format_timestamp(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%Y-%m-%d %H:%M:%S%.f").to_string()
}
