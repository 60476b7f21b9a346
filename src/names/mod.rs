//! Scientific-to-common name resolution.

mod resolver;
mod store;

pub use resolver::NameResolver;
pub use store::{create_database, Lookup, MemoryNameStore, NameStore, SqliteNameStore};
