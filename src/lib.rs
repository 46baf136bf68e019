pub mod error;
pub mod reader;
pub mod codec;
pub mod header;
pub mod directory;
pub mod resource;
pub mod loader;
pub mod trace;

pub use error::{ErrorKind, RresError};
pub use codec::CompressionType;
pub use header::{FileHeader, InfoHeader, MAGIC, MAX_RESOURCES_SUPPORTED};
pub use resource::{Resource, ResourceType};
pub use loader::{
    list_entries, load_by_id, load_first, read_file_header, release, try_load_by_id,
    try_load_first,
};
