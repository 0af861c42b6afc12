use crate::error::Result;
use crate::store::RecordStore;
use std::io::Write;

/// Copy the stored document to `out` as it is, without parsing it.
pub fn run<S: RecordStore, W: Write>(store: &S, out: &mut W) -> Result<()> {
    let bytes = store.raw()?;
    out.write_all(&bytes)?;
    Ok(())
}
