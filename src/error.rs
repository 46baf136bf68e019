use std::io;
use thiserror::Error;

/// Failure classes of a load call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    OpenFailed,
    BadMagic,
    ShortRead,
    NotFound,
    DecompressionFailed,
    OutOfMemory,
    UnsupportedCompression,
    UnknownDataType,
    Io,
}

#[derive(Error, Debug)]
pub enum RresError {
    #[error("rRES raylib resource file could not be opened: {0}")]
    Open(#[source] io::Error),
    #[error("This is not a valid raylib resource file (magic {found:02x?})")]
    BadMagic { found: [u8; 4] },
    #[error("Unexpected end of file: needed {needed} bytes at offset {offset}")]
    ShortRead { offset: u64, needed: u64 },
    #[error("Requested resource could not be found (ID {id})")]
    NotFound { id: i32 },
    #[error("Data decompression failed: {0}")]
    DecompressionFailed(String),
    #[error("Out of memory while allocating {size} bytes")]
    OutOfMemory { size: u64 },
    #[error("Unsupported compression type: {0}")]
    UnsupportedCompression(u8),
    #[error("Unknown resource data type: {0}")]
    UnknownDataType(u8),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl RresError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RresError::Open(_)                   => ErrorKind::OpenFailed,
            RresError::BadMagic { .. }           => ErrorKind::BadMagic,
            RresError::ShortRead { .. }          => ErrorKind::ShortRead,
            RresError::NotFound { .. }           => ErrorKind::NotFound,
            RresError::DecompressionFailed(_)    => ErrorKind::DecompressionFailed,
            RresError::OutOfMemory { .. }        => ErrorKind::OutOfMemory,
            RresError::UnsupportedCompression(_) => ErrorKind::UnsupportedCompression,
            RresError::UnknownDataType(_)        => ErrorKind::UnknownDataType,
            RresError::Io(_)                     => ErrorKind::Io,
        }
    }
}
