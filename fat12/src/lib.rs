//! Decoder for the on-disk metadata of FAT12 floppy images.
//!
//! Only the boot sector and the root directory are understood. Nothing here
//! touches a device: every function takes a byte buffer the caller already
//! read and hands back freshly built values.

#![no_std]

extern crate alloc;

pub mod codec;
mod error;
pub mod volume;

pub use self::{
    codec::AttrFlag,
    error::Error,
    volume::{
        reserved::BootSector,
        root::{DirEntries, DirEntry, parse_all},
        root_directory,
    },
};
