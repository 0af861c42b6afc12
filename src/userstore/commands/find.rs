use crate::error::{Result, UserStoreError};
use crate::model::RecordId;
use crate::store::RecordStore;
use std::io::Write;
use tracing::debug;

/// Write every record with the given id to `out`, back to back, and return
/// how many were written.
pub fn run<S: RecordStore, W: Write>(store: &S, id: &RecordId, out: &mut W) -> Result<usize> {
    let records = store.load()?;
    let mut found = 0;

    for record in records.iter().filter(|r| &r.id == id) {
        let bytes = serde_json::to_vec(record).map_err(UserStoreError::Encode)?;
        out.write_all(&bytes)?;
        found += 1;
    }

    if found == 0 {
        debug!(%id, "no record with this id");
    }
    Ok(found)
}
