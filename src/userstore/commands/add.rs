use crate::error::{Result, UserStoreError};
use crate::model::Record;
use crate::store::RecordStore;
use tracing::info;

/// Append the record encoded in `item`.
///
/// A record whose id is already taken is rejected and nothing is written.
pub fn run<S: RecordStore>(store: &mut S, item: &str) -> Result<Record> {
    let record: Record = serde_json::from_str(item).map_err(UserStoreError::Decode)?;

    let mut records = store.load()?;
    if records.iter().any(|existing| existing.id == record.id) {
        return Err(UserStoreError::DuplicateId(record.id));
    }

    records.push(record.clone());
    store.save(&records)?;
    info!(id = %record.id, total = records.len(), "added record");
    Ok(record)
}
