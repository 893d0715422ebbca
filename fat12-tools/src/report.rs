//! Console rendering of decoded metadata.

use std::fmt;

use fat12::codec::attr_keys;
use fat12::{BootSector, DirEntries};

/// Width of the right-aligned labels in a boot sector report.
const LABEL_WIDTH: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radix {
    #[default]
    Decimal,
    Hex,
}

pub fn boot_sector(bpb: &BootSector, radix: Radix) -> BootSectorReport<'_> {
    BootSectorReport { bpb, radix }
}

pub fn listing(entry_count: usize, entries: DirEntries<'_>) -> Listing<'_> {
    Listing {
        entry_count,
        entries,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BootSectorReport<'a> {
    bpb: &'a BootSector,
    radix: Radix,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Byte(u8),
    Word(u16),
    /// 介质描述符总以十六进制显示
    Descriptor(u8),
}

impl Field {
    fn fmt(self, radix: Radix, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, radix) {
            (Self::Byte(v), Radix::Decimal) => write!(f, "{v}"),
            (Self::Word(v), Radix::Decimal) => write!(f, "{v}"),
            (Self::Descriptor(v), Radix::Decimal) => write!(f, "0x{v:04x}"),
            (Self::Byte(v) | Self::Descriptor(v), Radix::Hex) => write!(f, "0x{v:02x}"),
            (Self::Word(v), Radix::Hex) => write!(f, "0x{v:04x}"),
        }
    }
}

impl fmt::Display for BootSectorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bpb = self.bpb;
        writeln!(f, "{:>LABEL_WIDTH$}:   {}", "Name", bpb.volume_name())?;

        for (label, field) in [
            ("Bytes/Sector", Field::Word(bpb.bytes_per_sector())),
            ("Sectors/Cluster", Field::Byte(bpb.sectors_per_cluster())),
            ("Reserved Sectors", Field::Word(bpb.reserved_sectors())),
            ("Number of FATs", Field::Byte(bpb.fat_count())),
            ("Root Directory entries", Field::Word(bpb.root_entry_count())),
            ("Logical sectors", Field::Word(bpb.logical_sector_count())),
            ("Medium descriptor", Field::Descriptor(bpb.medium_descriptor())),
            ("Sectors/FAT", Field::Word(bpb.sectors_per_fat())),
            ("Sectors/Track", Field::Word(bpb.sectors_per_track())),
            ("Number of heads", Field::Word(bpb.head_count())),
            ("Number of Hidden Sectors", Field::Word(bpb.hidden_sector_count())),
        ] {
            write!(f, "{label:>LABEL_WIDTH$}:   ")?;
            field.fmt(self.radix, f)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Root directory table, one tab separated row per occupied entry.
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    entry_count: usize,
    entries: DirEntries<'a>,
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "There are {} entries", self.entry_count)?;
        writeln!(f, "Filename\tAttrib\tTime\t\tDate\t\tSize")?;

        for dirent in self.entries.clone() {
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}",
                dirent.name(),
                attr_keys(dirent.attributes()),
                dirent.time(),
                dirent.date(),
                dirent.size()
            )?;
        }

        writeln!(f, "(R)ead Only (H)idden (S)ystem (A)rchive")
    }
}
