//! # Storage Layer
//!
//! The [`RecordStore`] trait is the seam between the commands and the place a
//! collection lives.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: the production store, one JSON array per file.
//! - [`memory::InMemoryStore`]: a byte buffer standing in for the file, used by
//!   the command tests.
//!
//! ## Storage Format
//!
//! ```text
//! [{"id":"1","email":"a@x.com","age":30},{"id":"2","email":"b@x.com","age":41}]
//! ```
//!
//! Every operation reads the whole document and mutating operations write the
//! whole document back. There is no locking: two processes working on the
//! same file race, and the last writer wins.

use crate::error::{Result, UserStoreError};
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for record storage.
pub trait RecordStore {
    /// The stored document, byte for byte.
    fn raw(&self) -> Result<Vec<u8>>;

    /// Load the full collection, in stored order.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the stored collection with `records`.
    fn save(&mut self, records: &[Record]) -> Result<()>;
}

/// Decode a stored document.
///
/// A blank document or a JSON `null` is an empty collection; anything else
/// must be an array of records. Unparseable content is returned as
/// [`UserStoreError::Parse`] rather than read as empty, so a later save cannot
/// overwrite it.
pub fn decode_collection(bytes: &[u8]) -> Result<Vec<Record>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let records: Option<Vec<Record>> =
        serde_json::from_slice(bytes).map_err(UserStoreError::Parse)?;
    Ok(records.unwrap_or_default())
}

/// Encode a collection, compact unless `pretty` is set.
pub fn encode_collection(records: &[Record], pretty: bool) -> Result<Vec<u8>> {
    let encoded = if pretty {
        serde_json::to_vec_pretty(records)
    } else {
        serde_json::to_vec(records)
    };
    encoded.map_err(UserStoreError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_documents_are_empty_collections() {
        assert!(decode_collection(b"").unwrap().is_empty());
        assert!(decode_collection(b"  \n\t").unwrap().is_empty());
        assert!(decode_collection(b"null").unwrap().is_empty());
        assert!(decode_collection(b"[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_documents_are_parse_errors() {
        let docs: [&[u8]; 4] = [b"not json", b"{\"id\":\"1\"}", b"[{\"id\":\"1\"}]", b"[1,2]"];
        for doc in docs {
            let err = decode_collection(doc).unwrap_err();
            assert!(matches!(err, UserStoreError::Parse(_)), "{:?}", doc);
        }
    }

    #[test]
    fn decodes_in_stored_order() {
        let doc = br#"[{"id":"2","email":"b@x.com","age":2},{"id":"1","email":"a@x.com","age":1}]"#;
        let records = decode_collection(doc).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn saving_a_loaded_collection_is_stable() {
        let doc = br#"[ {"id": 5, "email": "e@x.com", "age": 50} ]"#;
        let once = encode_collection(&decode_collection(doc).unwrap(), false).unwrap();
        let twice = encode_collection(&decode_collection(&once).unwrap(), false).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn pretty_output_decodes_to_the_same_collection() {
        let records = vec![Record::new("1", "a@x.com", 30)];
        let pretty = encode_collection(&records, true).unwrap();
        assert!(pretty.contains(&b'\n'));
        assert_eq!(decode_collection(&pretty).unwrap(), records);
    }
}
