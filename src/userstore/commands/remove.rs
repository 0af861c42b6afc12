use crate::error::Result;
use crate::model::{Record, RecordId};
use crate::store::RecordStore;
use std::io::Write;
use tracing::info;

/// Remove the first record with the given id.
///
/// When nothing matches, a "not found" message goes to `out` and the store is
/// not written.
pub fn run<S: RecordStore, W: Write>(
    store: &mut S,
    id: &RecordId,
    out: &mut W,
) -> Result<Option<Record>> {
    let records = store.load()?;

    let mut removed = None;
    let remaining: Vec<Record> = records
        .into_iter()
        .filter_map(|record| {
            if removed.is_none() && &record.id == id {
                removed = Some(record);
                None
            } else {
                Some(record)
            }
        })
        .collect();

    match removed {
        Some(record) => {
            store.save(&remaining)?;
            info!(%id, total = remaining.len(), "removed record");
            Ok(Some(record))
        }
        None => {
            write!(out, "Item with id {} not found", id)?;
            Ok(None)
        }
    }
}
