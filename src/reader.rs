//! Forward-only little-endian reader over a seekable handle.
//!
//! Every operation either consumes exactly the bytes it asks for or fails
//! with [`RresError::ShortRead`].  The handle length is sampled once at
//! construction so that payload sizes can be checked before any buffer is
//! allocated.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Read, Seek, SeekFrom};

use crate::error::RresError;

pub struct ByteReader<R: Read + Seek> {
    inner: R,
    pos:   u64,
    len:   u64,
}

impl<R: Read + Seek> ByteReader<R> {
    pub fn new(mut inner: R) -> io::Result<Self> {
        let pos = inner.stream_position()?;
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(pos))?;
        Ok(Self { inner, pos, len })
    }

    /// Current offset from the start of the handle.
    pub fn position(&self) -> u64 { self.pos }

    /// Bytes left before end of file.
    pub fn remaining(&self) -> u64 { self.len.saturating_sub(self.pos) }

    pub fn into_inner(self) -> R { self.inner }

    pub fn read_u8(&mut self) -> Result<u8, RresError> {
        self.ensure(1)?;
        let v = self.inner.read_u8().map_err(|e| self.short_read(e, 1))?;
        self.pos += 1;
        Ok(v)
    }

    pub fn read_u16_le(&mut self) -> Result<u16, RresError> {
        self.ensure(2)?;
        let v = self.inner.read_u16::<LittleEndian>().map_err(|e| self.short_read(e, 2))?;
        self.pos += 2;
        Ok(v)
    }

    pub fn read_u32_le(&mut self) -> Result<u32, RresError> {
        self.ensure(4)?;
        let v = self.inner.read_u32::<LittleEndian>().map_err(|e| self.short_read(e, 4))?;
        self.pos += 4;
        Ok(v)
    }

    /// Fill a fixed-size array, e.g. a magic id or a whole record.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], RresError> {
        self.ensure(N as u64)?;
        let mut buf = [0u8; N];
        self.inner.read_exact(&mut buf).map_err(|e| self.short_read(e, N as u64))?;
        self.pos += N as u64;
        Ok(buf)
    }

    /// Read exactly `n` bytes into a freshly allocated buffer.
    pub fn read_exact(&mut self, n: u64) -> Result<Vec<u8>, RresError> {
        self.ensure(n)?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(n as usize)
            .map_err(|_| RresError::OutOfMemory { size: n })?;
        let read = (&mut self.inner).take(n).read_to_end(&mut buf);
        let got = read.map_err(|e| self.short_read(e, n))?;
        if got as u64 != n {
            return Err(RresError::ShortRead { offset: self.pos, needed: n });
        }
        self.pos += n;
        Ok(buf)
    }

    /// Advance `n` bytes without reading them.
    pub fn skip(&mut self, n: u64) -> Result<(), RresError> {
        self.ensure(n)?;
        self.inner.seek(SeekFrom::Current(n as i64))?;
        self.pos += n;
        Ok(())
    }

    fn ensure(&self, n: u64) -> Result<(), RresError> {
        if self.remaining() < n {
            return Err(RresError::ShortRead { offset: self.pos, needed: n });
        }
        Ok(())
    }

    fn short_read(&self, e: io::Error, needed: u64) -> RresError {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => RresError::ShortRead { offset: self.pos, needed },
            _ => RresError::Io(e),
        }
    }
}
