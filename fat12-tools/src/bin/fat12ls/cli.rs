use clap::Parser;
use std::path::PathBuf;

/// Displays the files in the root directory of an MSDOS floppy image
#[derive(Parser)]
pub struct Cli {
    /// Floppy disk image
    pub image: PathBuf,
}
