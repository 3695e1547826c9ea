//! Size units and conversions between them.
//!
//! Three prefix families are understood: IEC (`KiB`, base 1024), SI (`kB`,
//! base 1000, also spelled with Chinese magnitude names such as `千字节`) and
//! JEDEC (`KB`, base 1024). Every unit also has a bit form (`Kib`, `kb`,
//! `千比特`, ...) worth one eighth of its byte form.
//!
//! Prefix symbols up to yotta/yobi come from `number_prefix`; ronna and
//! quetta are appended here.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use number_prefix::{NumberPrefix, Prefix};

const BINARY: [Prefix; 8] = [
    Prefix::Kibi,
    Prefix::Mebi,
    Prefix::Gibi,
    Prefix::Tebi,
    Prefix::Pebi,
    Prefix::Exbi,
    Prefix::Zebi,
    Prefix::Yobi,
];
const DECIMAL: [Prefix; 8] = [
    Prefix::Kilo,
    Prefix::Mega,
    Prefix::Giga,
    Prefix::Tera,
    Prefix::Peta,
    Prefix::Exa,
    Prefix::Zetta,
    Prefix::Yotta,
];
const EXTENDED: [&str; 2] = ["R", "Q"];

pub const METRIC_NAMES: [&str; 10] = ["千", "兆", "吉", "太", "拍", "艾", "泽", "尧", "容", "昆"];

/// Largest exponent any family has a prefix for.
pub const MAX_EXPONENT: u32 = (BINARY.len() + EXTENDED.len()) as u32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnitSystem {
    Iec,
    Si,
    Jedec,
    SiChinese,
}

impl UnitSystem {
    pub fn base(self) -> f64 {
        self.exact_base() as f64
    }

    fn exact_base(self) -> u128 {
        match self {
            UnitSystem::Iec | UnitSystem::Jedec => 1024,
            UnitSystem::Si | UnitSystem::SiChinese => 1000,
        }
    }

    fn is_binary(self) -> bool {
        matches!(self, UnitSystem::Iec | UnitSystem::Jedec)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Quantity {
    Byte,
    Bit,
}

/// A concrete unit: `system` prefix number `exponent`, counting bytes or bits.
/// Exponent 0 is the plain byte (or bit) whatever the system.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Unit {
    system: UnitSystem,
    exponent: u32,
    quantity: Quantity,
}

impl Unit {
    /// Exponents past the last prefix are clamped to it.
    pub fn new(system: UnitSystem, exponent: u32, quantity: Quantity) -> Self {
        Self {
            system,
            exponent: exponent.min(MAX_EXPONENT),
            quantity,
        }
    }

    pub fn system(self) -> UnitSystem {
        self.system
    }

    pub fn exponent(self) -> u32 {
        self.exponent
    }

    pub fn quantity(self) -> Quantity {
        self.quantity
    }

    pub fn bytes_per_unit(self) -> f64 {
        let bytes = self.system.base().powi(self.exponent as i32);
        match self.quantity {
            Quantity::Byte => bytes,
            Quantity::Bit => bytes / 8.0,
        }
    }
}

/// Single-letter prefix for `exponent`: `K`, `M`, ... in binary families,
/// `k`, `M`, ... in decimal ones.
fn prefix_letter(exponent: u32, binary: bool) -> Option<String> {
    let index = (exponent as usize).checked_sub(1)?;
    let table = if binary { &BINARY } else { &DECIMAL };
    match table.get(index) {
        // number_prefix spells binary prefixes with the `i` ("Ki").
        Some(prefix) => prefix.to_string().chars().next().map(String::from),
        None => EXTENDED.get(index - table.len()).map(|letter| (*letter).to_owned()),
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chinese = self.system == UnitSystem::SiChinese;
        let suffix = match (self.quantity, chinese) {
            (Quantity::Byte, false) => "B",
            (Quantity::Bit, false) => "b",
            (Quantity::Byte, true) => "字节",
            (Quantity::Bit, true) => "比特",
        };

        if chinese {
            let name = (self.exponent as usize)
                .checked_sub(1)
                .and_then(|index| METRIC_NAMES.get(index));
            return match name {
                Some(name) => write!(f, "{name}{suffix}"),
                None => f.write_str(suffix),
            };
        }

        let Some(letter) = prefix_letter(self.exponent, self.system.is_binary()) else {
            return f.write_str(suffix);
        };
        match self.system {
            UnitSystem::Iec => write!(f, "{letter}i{suffix}"),
            _ => write!(f, "{letter}{suffix}"),
        }
    }
}

impl FromStr for Unit {
    type Err = anyhow::Error;

    /// Accepts `B`, `b`, `字节`, `比特`, `KiB`, `kB`, `千字节`, ... optionally
    /// tagged with `IEC `, `SI ` or `JEDEC `. An untagged `KB`/`Kb` is JEDEC.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let (tag, rest) = match label.split_once(' ') {
            Some((tag @ ("IEC" | "SI" | "JEDEC"), rest)) => (Some(tag), rest),
            _ => (None, label),
        };

        let plain = |quantity| Unit::new(UnitSystem::Iec, 0, quantity);
        match rest {
            "B" | "字节" => return Ok(plain(Quantity::Byte)),
            "b" | "比特" => return Ok(plain(Quantity::Bit)),
            _ => {}
        }

        let parsed = match tag {
            Some("JEDEC") => parse_lettered(rest, UnitSystem::Jedec, &["B", "b"]),
            Some("IEC") => parse_lettered(rest, UnitSystem::Iec, &["iB", "ib"]),
            Some(_) => parse_si(rest),
            None => parse_lettered(rest, UnitSystem::Iec, &["iB", "ib"])
                .or_else(|| parse_si(rest))
                .or(match rest {
                    "KB" => Some(Unit::new(UnitSystem::Jedec, 1, Quantity::Byte)),
                    "Kb" => Some(Unit::new(UnitSystem::Jedec, 1, Quantity::Bit)),
                    _ => None,
                }),
        };

        parsed.ok_or_else(|| anyhow!("unknown unit: {label}"))
    }
}

/// `suffixes` lists the byte spelling first, then the bit spelling.
fn parse_lettered(label: &str, system: UnitSystem, suffixes: &[&str; 2]) -> Option<Unit> {
    let (prefix, quantity) = if let Some(prefix) = label.strip_suffix(suffixes[0]) {
        (prefix, Quantity::Byte)
    } else {
        (label.strip_suffix(suffixes[1])?, Quantity::Bit)
    };

    let exponent = (1..=MAX_EXPONENT)
        .find(|&exponent| prefix_letter(exponent, system.is_binary()).as_deref() == Some(prefix))?;
    Some(Unit::new(system, exponent, quantity))
}

fn parse_si(label: &str) -> Option<Unit> {
    let chinese = if let Some(name) = label.strip_suffix("字节") {
        Some((name, Quantity::Byte))
    } else {
        label.strip_suffix("比特").map(|name| (name, Quantity::Bit))
    };

    match chinese {
        Some((name, quantity)) => {
            let exponent = METRIC_NAMES.iter().position(|&known| known == name)? as u32 + 1;
            Some(Unit::new(UnitSystem::SiChinese, exponent, quantity))
        }
        None => parse_lettered(label, UnitSystem::Si, &["B", "b"]),
    }
}

/// Number of bytes in `value` of `unit`.
pub fn to_bytes(value: f64, unit: Unit) -> f64 {
    value * unit.bytes_per_unit()
}

/// Largest byte unit of `system` that `bytes` reaches, capped at the last prefix.
pub fn auto_unit(bytes: f64, system: UnitSystem) -> Unit {
    let table = if system.is_binary() { &BINARY } else { &DECIMAL };
    let amount = if system.is_binary() {
        NumberPrefix::binary(bytes)
    } else {
        NumberPrefix::decimal(bytes)
    };

    let (mut scaled, mut exponent) = match amount {
        NumberPrefix::Standalone(_) => return Unit::new(system, 0, Quantity::Byte),
        NumberPrefix::Prefixed(prefix, scaled) => {
            let index = table.iter().position(|&known| known == prefix).unwrap_or(0);
            (scaled, index as u32 + 1)
        }
    };

    // number_prefix stops at yotta/yobi.
    let base = system.base();
    while scaled >= base && exponent < MAX_EXPONENT {
        scaled /= base;
        exponent += 1;
    }
    Unit::new(system, exponent, Quantity::Byte)
}

/// Like [`auto_unit`] for an exact byte count: the prefix is the largest one
/// with `base^exponent <= bytes`, compared in integers.
pub fn unit_for(bytes: u64, system: UnitSystem) -> Unit {
    let base = system.exact_base();
    let bytes = u128::from(bytes);
    let mut exponent = 0;
    let mut threshold = base;
    while bytes >= threshold && exponent < MAX_EXPONENT {
        exponent += 1;
        threshold = threshold.saturating_mul(base);
    }
    Unit::new(system, exponent, Quantity::Byte)
}

/// Render `bytes` as `"<value> <unit>"`, with `digits` decimals when given.
pub fn convert(bytes: f64, unit: Unit, digits: Option<usize>) -> String {
    let value = bytes / unit.bytes_per_unit();
    match digits {
        Some(digits) => format!("{value:.digits$} {unit}"),
        None => format!("{value} {unit}"),
    }
}
