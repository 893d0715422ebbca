use std::fs;
use std::io;
use std::path::Path;

use fat12::{BootSector, DirEntries, Error};

/// A floppy image held in memory.
#[derive(Debug, Clone)]
pub struct DiskImage {
    data: Vec<u8>,
}

impl DiskImage {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        log::info!("image={path:?} size={}", data.len());

        Ok(Self::new(data))
    }

    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn boot_sector(&self) -> Result<BootSector, Error> {
        BootSector::decode(&self.data)
    }

    pub fn root_directory(&self, bpb: &BootSector) -> Result<&[u8], Error> {
        fat12::root_directory(&self.data, bpb)
    }

    /// Occupied root directory entries, bounded by the boot sector's entry count.
    pub fn root_entries(&self, bpb: &BootSector) -> Result<DirEntries<'_>, Error> {
        let root = self.root_directory(bpb)?;
        fat12::parse_all(root, bpb.root_entry_count().into())
    }
}
