//! Sequential walk over the resource directory.
//!
//! Entries have no index; each info header is followed directly by its
//! payload, so reaching entry `n` means reading or skipping every payload
//! before it.  The walker enforces that order: after [`DirectoryWalker::next_header`]
//! the caller must either take or skip the payload before asking for the
//! next header.

use std::io::{Read, Seek};

use crate::error::RresError;
use crate::header::InfoHeader;
use crate::reader::ByteReader;

pub struct DirectoryWalker<'a, R: Read + Seek> {
    reader:  &'a mut ByteReader<R>,
    count:   u16,
    visited: u16,
    pending: Option<InfoHeader>,
}

impl<'a, R: Read + Seek> DirectoryWalker<'a, R> {
    /// `reader` must be positioned just past the file header.
    pub fn new(reader: &'a mut ByteReader<R>, count: u16) -> Self {
        Self { reader, count, visited: 0, pending: None }
    }

    /// Entries not yet visited.
    pub fn remaining(&self) -> u16 { self.count - self.visited }

    /// Read the next info header, skipping the previous payload if the caller
    /// left it unconsumed.  `Ok(None)` once `count` entries have been seen.
    pub fn next_header(&mut self) -> Result<Option<InfoHeader>, RresError> {
        self.skip_payload()?;
        if self.visited == self.count {
            return Ok(None);
        }
        let info = InfoHeader::read(&mut *self.reader)?;
        self.visited += 1;
        self.pending = Some(info);
        Ok(Some(info))
    }

    /// Read the current entry's stored payload (still compressed, if it is).
    pub fn take_payload(&mut self) -> Result<Vec<u8>, RresError> {
        match self.pending.take() {
            Some(info) => self.reader.read_exact(info.data_size as u64),
            None => Ok(Vec::new()),
        }
    }

    pub fn skip_payload(&mut self) -> Result<(), RresError> {
        if let Some(info) = self.pending.take() {
            self.reader.skip(info.data_size as u64)?;
        }
        Ok(())
    }

    /// Advance to the first entry whose id satisfies `wanted` and return its
    /// header and stored payload.  Duplicate ids resolve to the first match.
    pub fn find<F>(&mut self, mut wanted: F) -> Result<Option<(InfoHeader, Vec<u8>)>, RresError>
    where
        F: FnMut(u16) -> bool,
    {
        while let Some(info) = self.next_header()? {
            if wanted(info.id) {
                let payload = self.take_payload()?;
                return Ok(Some((info, payload)));
            }
            log::debug!("skipping resource {} ({} bytes)", info.id, info.data_size);
        }
        Ok(None)
    }

    /// Collect every remaining info header, skipping all payloads.
    pub fn headers(&mut self) -> Result<Vec<InfoHeader>, RresError> {
        let mut out = Vec::with_capacity(self.remaining() as usize);
        while let Some(info) = self.next_header()? {
            out.push(info);
        }
        self.skip_payload()?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::header::FileHeader;
    use std::io::Cursor;

    fn container(entries: &[(u16, &[u8])]) -> ByteReader<Cursor<Vec<u8>>> {
        let mut buf = Vec::new();
        FileHeader::new(entries.len() as u16).write(&mut buf).unwrap();
        for (id, payload) in entries {
            let n = payload.len() as u32;
            InfoHeader { id: *id, data_size: n, uncomp_size: n, ..Default::default() }
                .write(&mut buf)
                .unwrap();
            buf.extend_from_slice(payload);
        }
        let mut r = ByteReader::new(Cursor::new(buf)).unwrap();
        FileHeader::read(&mut r).unwrap();
        r
    }

    #[test]
    fn find_skips_earlier_payloads() {
        let mut r = container(&[(1, b"A"), (2, b"BB"), (3, b"CCC")]);
        let mut walker = DirectoryWalker::new(&mut r, 3);
        let (info, payload) = walker.find(|id| id == 2).unwrap().unwrap();
        assert_eq!(info.id, 2);
        assert_eq!(payload, b"BB");
        assert_eq!(walker.remaining(), 1);
    }

    #[test]
    fn first_duplicate_wins() {
        let mut r = container(&[(5, b"first"), (5, b"second")]);
        let (_, payload) = DirectoryWalker::new(&mut r, 2).find(|id| id == 5).unwrap().unwrap();
        assert_eq!(payload, b"first");
    }

    #[test]
    fn missing_id_exhausts_directory() {
        let mut r = container(&[(10, b"x"), (20, b"y")]);
        let len = 8 + 2 * (28 + 1);
        assert!(DirectoryWalker::new(&mut r, 2).find(|id| id == 15).unwrap().is_none());
        assert_eq!(r.position(), len);
    }

    #[test]
    fn headers_lists_in_disk_order() {
        let mut r = container(&[(3, b""), (1, b"zz"), (2, b"q")]);
        let ids: Vec<u16> = DirectoryWalker::new(&mut r, 3)
            .headers()
            .unwrap()
            .iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn count_larger_than_file_is_short_read() {
        let mut r = container(&[(1, b"A")]);
        let err = DirectoryWalker::new(&mut r, 5).find(|_| false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShortRead);
    }
}
