use derive_more::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Error {
    /// The buffer ends before the structure being decoded does.
    #[display(
        fmt = "truncated buffer: {} bytes required, {} supplied",
        required,
        actual
    )]
    TruncatedBuffer { required: usize, actual: usize },

    /// Geometry points at a region the buffer does not cover.
    #[display(
        fmt = "unrecoverable geometry: {} bytes at offset {} lie outside a {}-byte buffer",
        len,
        offset,
        available
    )]
    UnrecoverableGeometry {
        offset: usize,
        len: usize,
        available: usize,
    },
}

impl core::error::Error for Error {}
