mod cli;

use std::io;

use clap::Parser;
use cli::Cli;
use fat12_tools::{DiskImage, report};

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let image = DiskImage::open(&cli.image)?;
    let bpb = image.boot_sector().map_err(io::Error::other)?;

    print!("{}", report::boot_sector(&bpb, cli.radix()));

    Ok(())
}
