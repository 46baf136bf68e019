//! Public loading API.
//!
//! ```no_run
//! let mut res = rres::load_by_id("assets.rres", 7);
//! if res.is_loaded() {
//!     println!("{} bytes, params {:?}", res.data().len(), res.params());
//! }
//! res.release();
//! ```
//!
//! [`load_first`] and [`load_by_id`] never fail: every error is logged as a
//! warning and turned into a zero [`Resource`].  The `try_*` variants return
//! the error instead.  Each call opens its own handle and closes it before
//! returning, on every path.

use std::fs::File;
use std::path::Path;

use crate::codec::{get_decompressor, CompressionType};
use crate::directory::DirectoryWalker;
use crate::error::RresError;
use crate::header::{FileHeader, InfoHeader};
use crate::reader::ByteReader;
use crate::resource::{Resource, ResourceType};

/// Load the first resource in the container, regardless of its id.
pub fn load_first<P: AsRef<Path>>(path: P) -> Resource {
    let path = path.as_ref();
    match try_load_first(path) {
        Ok(res) => {
            log::info!("[{}] Resource data loaded successfully", path.display());
            res
        }
        Err(e) => {
            report(path, None, &e);
            Resource::default()
        }
    }
}

/// Load the first resource whose id equals `id`.
pub fn load_by_id<P: AsRef<Path>>(path: P, id: i32) -> Resource {
    let path = path.as_ref();
    match try_load_by_id(path, id) {
        Ok(res) => {
            log::info!("[{}][ID {}] Resource data loaded successfully", path.display(), id);
            res
        }
        Err(e) => {
            report(path, Some(id), &e);
            Resource::default()
        }
    }
}

/// Free a descriptor's payload.  Equivalent to [`Resource::release`].
pub fn release(resource: &mut Resource) {
    resource.release();
}

pub fn try_load_first<P: AsRef<Path>>(path: P) -> Result<Resource, RresError> {
    let (mut reader, _) = open(path.as_ref())?;
    // Reads one entry even when the header declares zero.
    let info = InfoHeader::read(&mut reader)?;
    let payload = reader.read_exact(info.data_size as u64)?;
    decode(&info, payload)
}

/// Ids outside the `u16` range never match.
pub fn try_load_by_id<P: AsRef<Path>>(path: P, id: i32) -> Result<Resource, RresError> {
    let (mut reader, header) = open(path.as_ref())?;
    let found = DirectoryWalker::new(&mut reader, header.count)
        .find(|entry| i32::from(entry) == id)?;
    match found {
        Some((info, payload)) => decode(&info, payload),
        None => Err(RresError::NotFound { id }),
    }
}

/// Info headers of every entry, in on-disk order.
pub fn list_entries<P: AsRef<Path>>(path: P) -> Result<Vec<InfoHeader>, RresError> {
    let (mut reader, header) = open(path.as_ref())?;
    let entries = DirectoryWalker::new(&mut reader, header.count).headers()?;
    Ok(entries)
}

pub fn read_file_header<P: AsRef<Path>>(path: P) -> Result<FileHeader, RresError> {
    let (_, header) = open(path.as_ref())?;
    Ok(header)
}

fn open(path: &Path) -> Result<(ByteReader<File>, FileHeader), RresError> {
    let file = File::open(path).map_err(RresError::Open)?;
    let mut reader = ByteReader::new(file)?;
    let header = FileHeader::read(&mut reader)?;
    log::debug!(
        "[{}] rRES v{}, {} resource(s)",
        path.display(),
        header.version,
        header.count
    );
    Ok((reader, header))
}

/// Validate an entry's tags and turn its stored payload into a descriptor.
fn decode(info: &InfoHeader, payload: Vec<u8>) -> Result<Resource, RresError> {
    let resource_type = ResourceType::try_from(info.data_type)?;
    let comp = CompressionType::try_from(info.comp_type)?;
    let data = get_decompressor(comp)?.decompress(payload, info.uncomp_size)?;
    Ok(Resource::from_parts(resource_type, info, data))
}

fn report(path: &Path, id: Option<i32>, e: &RresError) {
    let p = path.display();
    match (e, id) {
        (RresError::Open(_), _) => {
            log::warn!("[{}] rRES raylib resource file could not be opened", p)
        }
        (RresError::BadMagic { .. }, _) => {
            log::warn!("[{}] This is not a valid raylib resource file", p)
        }
        (RresError::NotFound { id }, _) => {
            log::warn!("[{}][ID {}] Requested resource could not be found, wrong id?", p, id)
        }
        (_, Some(id)) => log::warn!("[{}][ID {}] Resource data could not be loaded: {}", p, id, e),
        (_, None) => log::warn!("[{}] Resource data could not be loaded: {}", p, e),
    }
}
