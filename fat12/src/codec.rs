//! 字段解码
//!
//! Every bit layout the volume uses is spelled out here and nowhere else.

use alloc::string::String;

use derive_more::Display;
use enumflags2::{BitFlags, bitflags};

/// Replaces a leading `0xE5` in a stored name, which would otherwise read as a free slot.
const KANJI_LEAD: u8 = 0x05;

const PADDING: u8 = b' ';

/// FAT dates count years from here.
pub const EPOCH_YEAR: u16 = 1980;

#[inline]
pub const fn read_le16(low: u8, high: u8) -> u16 {
    (high as u16) << 8 | low as u16
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[bitflags]
#[repr(u8)]
pub enum AttrFlag {
    ReadOnly = 0b0000_0001,
    Hidden = 0b0000_0010,
    /// The corresponding file is tagged as a component of the operating system
    System = 0b0000_0100,
    /// The corresponding entry contains the volume label
    VolumeId = 0b0000_1000,
    Directory = 0b0001_0000,
    /// Indicates that properties of the associated file have been modified
    Archive = 0b0010_0000,
}

impl AttrFlag {
    /// 列表中的属性键，卷标与目录不显示
    pub const fn key(self) -> Option<char> {
        match self {
            Self::ReadOnly => Some('R'),
            Self::Hidden => Some('H'),
            Self::System => Some('S'),
            Self::Archive => Some('A'),
            Self::VolumeId | Self::Directory => None,
        }
    }

    /// Flags that show up in a listing.
    pub fn reported() -> BitFlags<Self> {
        Self::ReadOnly | Self::Hidden | Self::System | Self::Archive
    }
}

/// Keeps the ReadOnly, Hidden, System and Archive bits of an attribute byte.
pub fn decode_attributes(flag: u8) -> BitFlags<AttrFlag> {
    BitFlags::from_bits_truncate(flag) & AttrFlag::reported()
}

/// Renders flags as their keys, lowest bit first, i.e. in `RHSA` order.
pub fn attr_keys(flags: BitFlags<AttrFlag>) -> String {
    flags.iter().filter_map(AttrFlag::key).collect()
}

/// Last write time, granularity is 2 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}:{:02}:{:02}", hour, minute, second)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Bits 0-4   -- Seconds / 2
/// Bits 5-10  -- Minutes
/// Bits 11-15 -- Hours
pub const fn decode_time(packed: u16) -> Time {
    Time {
        hour: ((packed >> 11) & 0x1F) as u8,
        minute: ((packed >> 5) & 0x3F) as u8,
        second: (packed & 0x1F) as u8 * 2,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", year, month, day)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// Bits 0-4  -- Day of month
/// Bits 5-8  -- Month
/// Bits 9-15 -- Years since [`EPOCH_YEAR`]
pub const fn decode_date(packed: u16) -> Date {
    Date {
        year: ((packed >> 9) & 0x7F) + EPOCH_YEAR,
        month: ((packed >> 5) & 0x0F) as u8,
        day: (packed & 0x1F) as u8,
    }
}

/// Rebuilds `NAME.EXT` from a space padded 8.3 name.
///
/// Case is kept as stored. An empty extension gets no dot.
pub fn decode_filename(raw: &[u8; 11]) -> String {
    let (name, ext) = raw.split_at(8);

    let mut filename: String = trim_padding(name)
        .iter()
        .enumerate()
        .map(|(i, &b)| if i == 0 && b == KANJI_LEAD { 0xE5 } else { b })
        .map(char::from)
        .collect();

    let ext = trim_padding(ext);
    if !ext.is_empty() {
        filename.push('.');
        filename.extend(ext.iter().copied().map(char::from));
    }

    filename
}

/// Turns a fixed width label into a string without its space or NUL padding.
pub fn decode_label(raw: &[u8]) -> String {
    let end = raw
        .iter()
        .rposition(|&b| b != PADDING && b != 0)
        .map_or(0, |i| i + 1);
    raw[..end].iter().copied().map(char::from).collect()
}

fn trim_padding(field: &[u8]) -> &[u8] {
    let end = field
        .iter()
        .rposition(|&b| b != PADDING)
        .map_or(0, |i| i + 1);
    &field[..end]
}
