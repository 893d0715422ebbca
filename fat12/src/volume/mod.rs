//! 卷的布局
//!
//! 保留区 | FAT区 | 根目录 | 数据区
//!
//! Only the reserved area and the root directory are decoded; the FATs and
//! the data area are merely stepped over.

pub mod reserved;
pub mod root;

use crate::Error;

use self::reserved::BootSector;

/// Cuts the root directory region out of a whole image.
pub fn root_directory<'a>(image: &'a [u8], bpb: &BootSector) -> Result<&'a [u8], Error> {
    let offset = bpb.root_dir_offset();
    let len = bpb.root_dir_len();
    log::debug!("root directory at {offset:#x}, {len} bytes");

    offset
        .checked_add(len)
        .and_then(|end| image.get(offset..end))
        .ok_or(Error::UnrecoverableGeometry {
            offset,
            len,
            available: image.len(),
        })
}
