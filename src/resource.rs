use serde::Serialize;

use crate::error::RresError;
use crate::header::InfoHeader;

/// Semantic category of a payload.  Downstream loaders dispatch on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ResourceType {
    #[default]
    Raw    = 0,
    Image  = 1,
    Wave   = 2,
    Vertex = 3,
    Text   = 4,
}

impl ResourceType {
    pub fn name(self) -> &'static str {
        match self {
            ResourceType::Raw    => "raw",
            ResourceType::Image  => "image",
            ResourceType::Wave   => "wave",
            ResourceType::Vertex => "vertex",
            ResourceType::Text   => "text",
        }
    }
}

impl TryFrom<u8> for ResourceType {
    type Error = RresError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(ResourceType::Raw),
            1 => Ok(ResourceType::Image),
            2 => Ok(ResourceType::Wave),
            3 => Ok(ResourceType::Vertex),
            4 => Ok(ResourceType::Text),
            _ => Err(RresError::UnknownDataType(v)),
        }
    }
}

/// A loaded resource: type tag, the four opaque parameters and the decoded
/// payload.
///
/// `data == None` is the zero state returned on any failure.  A successful
/// load of an empty payload yields `Some(vec![])`.
///
/// The parameters are interpreted by the consumer, e.g. width, height,
/// pixel format and mipmaps for an image, or sample count, sample rate,
/// sample size and channels for a wave.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Resource {
    pub resource_type: ResourceType,
    pub param1:        u32,
    pub param2:        u32,
    pub param3:        u32,
    pub param4:        u32,
    pub data:          Option<Vec<u8>>,
}

impl Resource {
    pub(crate) fn from_parts(resource_type: ResourceType, info: &InfoHeader, data: Vec<u8>) -> Self {
        Self {
            resource_type,
            param1: info.param1,
            param2: info.param2,
            param3: info.param3,
            param4: info.param4,
            data:   Some(data),
        }
    }

    pub fn is_loaded(&self) -> bool { self.data.is_some() }

    pub fn data(&self) -> &[u8] {
        self.data.as_deref().unwrap_or(&[])
    }

    pub fn params(&self) -> [u32; 4] {
        [self.param1, self.param2, self.param3, self.param4]
    }

    /// Hand the payload to the caller, leaving the descriptor unloaded.
    pub fn take_data(&mut self) -> Option<Vec<u8>> {
        self.data.take()
    }

    /// Free the payload.  Safe to call on a zero descriptor and safe to call
    /// more than once.
    pub fn release(&mut self) {
        self.data = None;
    }
}
