//! 根目录区，位于FAT区之后，大小固定。

mod dir_entry;

use core::iter::{Enumerate, FusedIterator};
use core::slice::ChunksExact;

pub use self::dir_entry::*;
use crate::Error;

/// Walks the first `entry_count` slots of a root directory region.
///
/// Deleted slots are skipped and the first never-used slot ends the walk.
/// Fails when `buf` holds fewer than `entry_count` slots.
pub fn parse_all(buf: &[u8], entry_count: usize) -> Result<DirEntries<'_>, Error> {
    let len = entry_count.saturating_mul(DIR_ENTRY_LEN);
    let Some(region) = buf.get(..len) else {
        return Err(Error::UnrecoverableGeometry {
            offset: 0,
            len,
            available: buf.len(),
        });
    };

    Ok(DirEntries {
        slots: region.chunks_exact(DIR_ENTRY_LEN).enumerate(),
        tail: false,
    })
}

/// Lazily decoded directory entries, in on-disk order.
#[derive(Debug, Clone)]
pub struct DirEntries<'a> {
    slots: Enumerate<ChunksExact<'a, u8>>,
    /// 已遇到[`DirEntryStatus::TailFree`]
    tail: bool,
}

impl Iterator for DirEntries<'_> {
    type Item = DirEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.tail {
            return None;
        }

        for (i, slot) in self.slots.by_ref() {
            let slot: &RawDirEntry = slot.first_chunk()?;

            match DirEntryStatus::of(slot) {
                DirEntryStatus::TailFree => {
                    log::debug!("slot {i}: end of directory");
                    self.tail = true;
                    return None;
                }
                DirEntryStatus::Free => log::debug!("slot {i}: deleted, skipped"),
                DirEntryStatus::Occupied => {
                    let dirent = DirEntry::decode(slot);
                    log::trace!("slot {i}: {dirent:?}");
                    return Some(dirent);
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.tail {
            (0, Some(0))
        } else {
            (0, self.slots.size_hint().1)
        }
    }
}

impl FusedIterator for DirEntries<'_> {}
