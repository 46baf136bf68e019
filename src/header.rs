//! File header and per-entry info header.
//!
//! ```text
//! file header (8 B)   magic "rRES" | version u16 | count u16
//! info header (28 B)  id u16 | data_type u8 | comp_type u8 | data_size u32
//!                     | uncomp_size u32 | param1..param4 u32
//! ```
//!
//! All integers little-endian, no padding.

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use serde::Serialize;
use std::io::{self, Read, Seek, Write};

use crate::error::RresError;
use crate::reader::ByteReader;

pub const MAGIC: &[u8; 4] = b"rRES";
pub const VERSION: u16 = 1;
pub const FILE_HEADER_SIZE: usize = 8;
pub const INFO_HEADER_SIZE: usize = 28;

/// Sizing hint for callers; the format admits up to `u16::MAX` entries.
pub const MAX_RESOURCES_SUPPORTED: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileHeader {
    pub version: u16,
    pub count:   u16,
}

impl FileHeader {
    pub fn new(count: u16) -> Self {
        Self { version: VERSION, count }
    }

    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(MAGIC)?;
        writer.write_u16::<LittleEndian>(self.version)?;
        writer.write_u16::<LittleEndian>(self.count)?;
        Ok(())
    }

    /// Reads and validates the file header.  `version` is not interpreted.
    pub fn read<R: Read + Seek>(reader: &mut ByteReader<R>) -> Result<Self, RresError> {
        let magic = reader.read_array::<4>()?;
        if &magic != MAGIC {
            return Err(RresError::BadMagic { found: magic });
        }
        let version = reader.read_u16_le()?;
        let count = reader.read_u16_le()?;
        Ok(Self { version, count })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InfoHeader {
    pub id:          u16,
    pub data_type:   u8,
    pub comp_type:   u8,
    pub data_size:   u32,
    pub uncomp_size: u32,
    pub param1:      u32,
    pub param2:      u32,
    pub param3:      u32,
    pub param4:      u32,
}

impl InfoHeader {
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_u16::<LittleEndian>(self.id)?;
        writer.write_u8(self.data_type)?;
        writer.write_u8(self.comp_type)?;
        writer.write_u32::<LittleEndian>(self.data_size)?;
        writer.write_u32::<LittleEndian>(self.uncomp_size)?;
        writer.write_u32::<LittleEndian>(self.param1)?;
        writer.write_u32::<LittleEndian>(self.param2)?;
        writer.write_u32::<LittleEndian>(self.param3)?;
        writer.write_u32::<LittleEndian>(self.param4)?;
        Ok(())
    }

    /// Reads one info header.  Tags are left raw; the loader validates them.
    pub fn read<R: Read + Seek>(reader: &mut ByteReader<R>) -> Result<Self, RresError> {
        let b = reader.read_array::<INFO_HEADER_SIZE>()?;
        Ok(Self::from_bytes(&b))
    }

    pub fn from_bytes(b: &[u8; INFO_HEADER_SIZE]) -> Self {
        Self {
            id:          LittleEndian::read_u16(&b[0..2]),
            data_type:   b[2],
            comp_type:   b[3],
            data_size:   LittleEndian::read_u32(&b[4..8]),
            uncomp_size: LittleEndian::read_u32(&b[8..12]),
            param1:      LittleEndian::read_u32(&b[12..16]),
            param2:      LittleEndian::read_u32(&b[16..20]),
            param3:      LittleEndian::read_u32(&b[20..24]),
            param4:      LittleEndian::read_u32(&b[24..28]),
        }
    }

    pub fn params(&self) -> [u32; 4] {
        [self.param1, self.param2, self.param3, self.param4]
    }
}
