use bytes::Bytes;
use mime::Mime;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// An uploaded file part. The payload is shared, never copied, on clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    content_type: Option<Mime>,
    bytes: Bytes,
}

impl File {
    pub fn new(
        name: impl Into<String>,
        content_type: Option<Mime>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> Option<&Mime> {
        self.content_type.as_ref()
    }

    /// Size of the payload in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }
}

// Files are summarized on the wire; the payload itself is never serialized.
impl Serialize for File {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("File", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("type", &self.content_type.as_ref().map(|m| m.essence_str()))?;
        state.serialize_field("size", &self.size())?;
        state.end()
    }
}
