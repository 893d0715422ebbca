//! 根目录项，每项32字节
//!
//! FAT12没有长文件名支持，这里只认短目录项。

use alloc::string::String;

use enumflags2::BitFlags;

use crate::codec::{self, AttrFlag, Date, Time, read_le16};

pub const DIR_ENTRY_LEN: usize = 32;

pub type RawDirEntry = [u8; DIR_ENTRY_LEN];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    name: [u8; 11],

    attr: u8,

    /// Last modification time
    wrt_time: u16,

    /// Last modification date
    wrt_date: u16,

    /// Low word of first data cluster number
    /// for file/directory described by this entry
    fst_clus_lo: u16,

    /// Low word of the size in bytes
    size_lo: u16,

    /// High word of the size in bytes
    size_hi: u16,
}

impl DirEntry {
    pub fn decode(slot: &RawDirEntry) -> Self {
        let le16 = |at: usize| read_le16(slot[at], slot[at + 1]);

        let mut name = [0; 11];
        name.copy_from_slice(&slot[..11]);

        Self {
            name,
            attr: slot[11],
            wrt_time: le16(22),
            wrt_date: le16(24),
            fst_clus_lo: le16(26),
            size_lo: le16(28),
            size_hi: le16(30),
        }
    }

    /// `NAME.EXT`
    pub fn name(&self) -> String {
        codec::decode_filename(&self.name)
    }

    pub const fn raw_name(&self) -> &[u8; 11] {
        &self.name
    }

    /// The ReadOnly, Hidden, System and Archive bits.
    pub fn attributes(&self) -> BitFlags<AttrFlag> {
        codec::decode_attributes(self.attr)
    }

    pub fn raw_attributes(&self) -> BitFlags<AttrFlag> {
        BitFlags::from_bits_truncate(self.attr)
    }

    pub fn is_volume_label(&self) -> bool {
        self.raw_attributes().contains(AttrFlag::VolumeId)
    }

    pub const fn time(&self) -> Time {
        codec::decode_time(self.wrt_time)
    }

    pub const fn date(&self) -> Date {
        codec::decode_date(self.wrt_date)
    }

    pub const fn first_cluster(&self) -> u16 {
        self.fst_clus_lo
    }

    /// Quantity containing size in bytes of the file described by this entry
    pub const fn size(&self) -> u32 {
        (self.size_hi as u32) << 16 | self.size_lo as u32
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DirEntryStatus {
    /// name[0] == 0xE5
    Free,
    /// name[0] == 0，此条目后的条目皆为[`DirEntryStatus::TailFree`]
    TailFree,
    /// 已被使用
    Occupied,
}

impl DirEntryStatus {
    pub const fn of(slot: &RawDirEntry) -> Self {
        match slot[0] {
            0xE5 => Self::Free,
            0x00 => Self::TailFree,
            _ => Self::Occupied,
        }
    }
}
