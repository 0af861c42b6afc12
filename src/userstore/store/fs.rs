use super::{decode_collection, encode_collection, RecordStore};
use crate::error::{Result, UserStoreError};
use crate::model::Record;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
#[cfg(test)]
use std::path::Path;
use tracing::debug;

/// A collection stored as one JSON array in one file.
pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file if it is missing. Existing content is kept.
    pub fn ensure_exists(&self) -> Result<()> {
        // The handle only proves the file is there; it is closed on return.
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(UserStoreError::Io)?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn raw(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(UserStoreError::Io)
    }

    fn load(&self) -> Result<Vec<Record>> {
        let bytes = self.raw()?;
        let records = decode_collection(&bytes)?;
        debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        let content = encode_collection(records, self.pretty)?;
        fs::write(&self.path, content).map_err(UserStoreError::Io)?;
        debug!(path = %self.path.display(), count = records.len(), "saved records");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("users.json"))
    }

    #[test]
    fn ensure_exists_creates_an_empty_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.ensure_exists().unwrap();
        assert_eq!(fs::read(store.path()).unwrap(), b"");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn ensure_exists_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "[]").unwrap();
        store.ensure_exists().unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(matches!(store.load(), Err(UserStoreError::Io(_))));
        assert!(matches!(store.raw(), Err(UserStoreError::Io(_))));
    }

    #[test]
    fn save_truncates_previous_content() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store
            .save(&[Record::new("1", "a@x.com", 30), Record::new("2", "b@x.com", 31)])
            .unwrap();
        store.save(&[Record::new("2", "b@x.com", 31)]).unwrap();

        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            r#"[{"id":"2","email":"b@x.com","age":31}]"#
        );
    }

    #[test]
    fn pretty_store_writes_indented_json() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir).with_pretty(true);
        store.save(&[Record::new("1", "a@x.com", 30)]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("[\n"));
        assert_eq!(store.load().unwrap(), vec![Record::new("1", "a@x.com", 30)]);
    }

    #[test]
    fn save_into_missing_directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nope").join("users.json"));
        assert!(matches!(store.save(&[]), Err(UserStoreError::Io(_))));
    }
}
