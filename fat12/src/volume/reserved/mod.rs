//! 保留区，FAT12中只有启动扇区

mod bpb;

pub use self::bpb::*;
