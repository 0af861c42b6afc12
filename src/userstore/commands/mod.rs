//! One module per operation. Each `run` loads the collection from a
//! [`RecordStore`](crate::store::RecordStore), works on it in memory and, when
//! it changes something, saves the whole collection back.
//!
//! Commands that produce output take the sink as a `Write`; they never assume
//! it is a terminal.

pub mod add;
pub mod find;
pub mod list;
pub mod remove;
