//! # API Facade
//!
//! Entry point for every userstore operation, whatever the front end.
//!
//! - [`Arguments`] is what flag parsing produces: every field optional, nothing
//!   checked yet.
//! - [`Arguments::validate`] turns it into an [`Invocation`], or the first
//!   [`UserStoreError::MissingFlag`] / [`UserStoreError::UnsupportedOperation`]
//!   it runs into.
//! - [`UserStoreApi`] dispatches an [`Operation`] to its command, generic over
//!   the [`RecordStore`] so tests can run it against `InMemoryStore`.
//! - [`perform`] wires the three together over a [`JsonFileStore`].

use crate::commands;
use crate::error::{Flag, Result, UserStoreError};
use crate::model::{Record, RecordId};
use crate::store::fs::JsonFileStore;
use crate::store::RecordStore;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Raw inputs, as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    pub operation: Option<String>,
    pub file_name: Option<PathBuf>,
    pub item: Option<String>,
    pub id: Option<String>,
    pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add { item: String },
    List,
    FindById { id: RecordId },
    Remove { id: RecordId },
}

/// Validated inputs: a backing file and one operation on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub file: PathBuf,
    pub operation: Operation,
    pub pretty: bool,
}

impl Arguments {
    /// Check required flags. Empty values count as missing.
    pub fn validate(self) -> Result<Invocation> {
        let file = self
            .file_name
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(UserStoreError::MissingFlag(Flag::FileName))?;
        let name = non_empty(self.operation).ok_or(UserStoreError::MissingFlag(Flag::Operation))?;

        let operation = match name.as_str() {
            "add" => Operation::Add {
                item: non_empty(self.item).ok_or(UserStoreError::MissingFlag(Flag::Item))?,
            },
            "list" => Operation::List,
            "findById" => Operation::FindById {
                id: required_id(self.id)?,
            },
            "remove" => Operation::Remove {
                id: required_id(self.id)?,
            },
            _ => return Err(UserStoreError::UnsupportedOperation(name)),
        };

        Ok(Invocation {
            file,
            operation,
            pretty: self.pretty,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn required_id(value: Option<String>) -> Result<RecordId> {
    non_empty(value)
        .map(RecordId::from)
        .ok_or(UserStoreError::MissingFlag(Flag::Id))
}

/// The operations over one store.
pub struct UserStoreApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> UserStoreApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add(&mut self, item: &str) -> Result<Record> {
        commands::add::run(&mut self.store, item)
    }

    pub fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        commands::list::run(&self.store, out)
    }

    pub fn find_by_id<W: Write>(&self, id: &RecordId, out: &mut W) -> Result<usize> {
        commands::find::run(&self.store, id, out)
    }

    pub fn remove<W: Write>(&mut self, id: &RecordId, out: &mut W) -> Result<Option<Record>> {
        commands::remove::run(&mut self.store, id, out)
    }

    /// Run one operation, writing its output to `out`.
    pub fn run<W: Write>(&mut self, operation: &Operation, out: &mut W) -> Result<()> {
        match operation {
            Operation::Add { item } => self.add(item).map(|_| ()),
            Operation::List => self.list(out),
            Operation::FindById { id } => self.find_by_id(id, out).map(|_| ()),
            Operation::Remove { id } => self.remove(id, out).map(|_| ()),
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Validate `arguments`, make sure the backing file exists and run the
/// operation against it.
///
/// Nothing touches the filesystem until validation has passed.
pub fn perform<W: Write>(arguments: Arguments, out: &mut W) -> Result<()> {
    let invocation = arguments.validate()?;
    debug!(file = %invocation.file.display(), operation = ?invocation.operation, "dispatching");

    let store = JsonFileStore::new(invocation.file).with_pretty(invocation.pretty);
    store.ensure_exists()?;

    UserStoreApi::new(store).run(&invocation.operation, out)?;
    out.flush()?;
    Ok(())
}
