use alloc::string::String;

use crate::Error;
use crate::codec::{decode_label, read_le16};
use crate::volume::root::DIR_ENTRY_LEN;

/// Bytes of the boot sector that carry the BIOS parameter block.
pub const BPB_LEN: usize = 30;

/// Sectors in front of the first FAT.
const BOOT_SECTORS: usize = 1;

/// BIOS Parameter Block BIOS参数块
/// 位于保留区的第一扇区，该扇区又名启动扇区。
///
/// Nothing beyond the length of the buffer is checked: the format carries no
/// checksum, so a garbled sector decodes into garbled numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSector {
    /// 卷名，一般用于记录什么系统格式化此卷
    volume_name: [u8; 8],

    /// 一个扇区的字节量
    bytes_per_sector: u16,

    /// 一个簇的扇区数
    sectors_per_cluster: u8,

    /// 保留区的扇区数
    reserved_sectors: u16,

    /// 此卷的文件分配表(FAT)数量，一般为2
    fat_count: u8,

    /// 根目录可容纳的目录项数
    root_entry_count: u16,

    /// 此卷的扇区总数
    logical_sector_count: u16,

    /// 物理媒介的类型
    medium_descriptor: u8,

    /// 每个FAT占用的扇区数
    sectors_per_fat: u16,

    /// 中断0x13模式下，轨道的扇区数
    sectors_per_track: u16,

    /// 中断0x13模式下，头数量
    head_count: u16,

    /// 分区前的隐藏扇区数
    hidden_sector_count: u16,
}

impl BootSector {
    /// Decodes the parameter block from the first [`BPB_LEN`] bytes of `buf`.
    ///
    /// The leading jump instruction is skipped.
    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let Some(raw) = buf.first_chunk::<BPB_LEN>() else {
            return Err(Error::TruncatedBuffer {
                required: BPB_LEN,
                actual: buf.len(),
            });
        };
        let le16 = |at: usize| read_le16(raw[at], raw[at + 1]);

        let mut volume_name = [0; 8];
        volume_name.copy_from_slice(&raw[3..11]);

        let bpb = Self {
            volume_name,
            bytes_per_sector: le16(11),
            sectors_per_cluster: raw[13],
            reserved_sectors: le16(14),
            fat_count: raw[16],
            root_entry_count: le16(17),
            logical_sector_count: le16(19),
            medium_descriptor: raw[21],
            sectors_per_fat: le16(22),
            sectors_per_track: le16(24),
            head_count: le16(26),
            hidden_sector_count: le16(28),
        };
        log::trace!("{bpb:?}");

        Ok(bpb)
    }

    pub fn volume_name(&self) -> String {
        decode_label(&self.volume_name)
    }

    pub const fn raw_volume_name(&self) -> &[u8; 8] {
        &self.volume_name
    }

    pub const fn bytes_per_sector(&self) -> u16 {
        self.bytes_per_sector
    }

    pub const fn sectors_per_cluster(&self) -> u8 {
        self.sectors_per_cluster
    }

    pub const fn reserved_sectors(&self) -> u16 {
        self.reserved_sectors
    }

    pub const fn fat_count(&self) -> u8 {
        self.fat_count
    }

    pub const fn root_entry_count(&self) -> u16 {
        self.root_entry_count
    }

    pub const fn logical_sector_count(&self) -> u16 {
        self.logical_sector_count
    }

    pub const fn medium_descriptor(&self) -> u8 {
        self.medium_descriptor
    }

    pub const fn sectors_per_fat(&self) -> u16 {
        self.sectors_per_fat
    }

    pub const fn sectors_per_track(&self) -> u16 {
        self.sectors_per_track
    }

    pub const fn head_count(&self) -> u16 {
        self.head_count
    }

    pub const fn hidden_sector_count(&self) -> u16 {
        self.hidden_sector_count
    }
}

impl BootSector {
    /// 根目录在镜像中的字节偏移：启动扇区 + 全部FAT
    pub const fn root_dir_offset(&self) -> usize {
        (BOOT_SECTORS + self.sectors_per_fat as usize * self.fat_count as usize)
            * self.bytes_per_sector as usize
    }

    /// 根目录占用的字节数
    pub const fn root_dir_len(&self) -> usize {
        self.root_entry_count as usize * DIR_ENTRY_LEN
    }

    /// 计算根目录占用的扇区数
    pub const fn root_dir_sectors(&self) -> usize {
        match self.bytes_per_sector as usize {
            0 => 0,
            sector => self.root_dir_len().div_ceil(sector),
        }
    }

    pub const fn volume_bytes(&self) -> usize {
        self.logical_sector_count as usize * self.bytes_per_sector as usize
    }
}

impl TryFrom<&[u8]> for BootSector {
    type Error = Error;

    fn try_from(buf: &[u8]) -> Result<Self, Self::Error> {
        Self::decode(buf)
    }
}
