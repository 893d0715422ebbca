use clap::Parser;
use std::path::PathBuf;

use fat12_tools::report::Radix;

/// Reads the boot sector of an MSDOS floppy image
#[derive(Parser)]
pub struct Cli {
    /// Floppy disk image
    pub image: PathBuf,

    /// Print the numeric fields in hex
    #[arg(long, short = 'x')]
    pub hex: bool,
}

impl Cli {
    pub fn radix(&self) -> Radix {
        if self.hex { Radix::Hex } else { Radix::Decimal }
    }
}
