use super::{decode_collection, encode_collection, RecordStore};
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing.
/// Holds the encoded document so raw and malformed content behave as on disk.
#[derive(Default)]
pub struct InMemoryStore {
    content: Vec<u8>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            saves: 0,
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Number of times the collection was written back.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl RecordStore for InMemoryStore {
    fn raw(&self) -> Result<Vec<u8>> {
        Ok(self.content.clone())
    }

    fn load(&self) -> Result<Vec<Record>> {
        decode_collection(&self.content)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.content = encode_collection(records, false)?;
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---
