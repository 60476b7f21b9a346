//! Name lookup store implementations.

use crate::error::{Error, Result};
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Outcome of a single name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The store holds a common name for the scientific name.
    Found(String),
    /// The scientific name is not in the store.
    NotFound,
}

/// Capability contract for the scientific-to-common name store.
///
/// A miss is a normal outcome (`Lookup::NotFound`), not an error; `Err` is
/// reserved for store-level failures such as an unreachable database.
pub trait NameStore: Send + Sync {
    /// Look up the common name for a scientific name by exact match.
    fn lookup(&self, scientific_name: &str) -> Result<Lookup>;
}

/// SQLite-backed name store.
///
/// The database holds one table `birdnames(scientific_name, common_name)`
/// with `scientific_name` unique. The store is read-only at request time;
/// a fresh read-only connection is opened per lookup so concurrent
/// requests never contend on a shared handle.
#[derive(Debug, Clone)]
pub struct SqliteNameStore {
    path: PathBuf,
}

impl SqliteNameStore {
    /// Create a store backed by the database at `path`.
    ///
    /// The file is not opened here; availability is checked per lookup so
    /// a store outage degrades lookups instead of failing startup.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<Connection> {
        Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| Error::NameStoreOpen {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl NameStore for SqliteNameStore {
    fn lookup(&self, scientific_name: &str) -> Result<Lookup> {
        let conn = self.open()?;
        let common: Option<String> = conn
            .query_row(
                "SELECT common_name FROM birdnames WHERE scientific_name = ?1",
                [scientific_name],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| Error::NameLookup {
                reason: e.to_string(),
            })?;

        Ok(common.map_or(Lookup::NotFound, Lookup::Found))
    }
}

/// In-memory name store for development mode and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryNameStore {
    entries: HashMap<String, String>,
}

impl MemoryNameStore {
    /// Build a store from (scientific name, common name) pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = &'a (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(scientific, common)| ((*scientific).to_string(), (*common).to_string()))
                .collect(),
        }
    }
}

impl NameStore for MemoryNameStore {
    fn lookup(&self, scientific_name: &str) -> Result<Lookup> {
        Ok(self
            .entries
            .get(scientific_name)
            .cloned()
            .map_or(Lookup::NotFound, Lookup::Found))
    }
}

/// Create a SQLite name database at `path` with the expected schema.
///
/// Used by tests and local tooling to seed lookup data.
pub fn create_database(path: &Path, pairs: &[(&str, &str)]) -> Result<()> {
    let conn = Connection::open(path).map_err(|e| Error::NameStoreOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS birdnames (
            scientific_name TEXT PRIMARY KEY,
            common_name TEXT NOT NULL
        )",
    )
    .map_err(|e| Error::NameLookup {
        reason: e.to_string(),
    })?;

    for (scientific, common) in pairs {
        conn.execute(
            "INSERT OR REPLACE INTO birdnames (scientific_name, common_name) VALUES (?1, ?2)",
            rusqlite::params![scientific, common],
        )
        .map_err(|e| Error::NameLookup {
            reason: e.to_string(),
        })?;
    }

    Ok(())
}
