#[cfg(test)]
mod tests;

mod image;
pub mod report;

pub use self::image::DiskImage;
