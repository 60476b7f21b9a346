//! Fail-open resolution of scientific names to common names.

use crate::constants::UNKNOWN_BIRD;
use crate::names::{Lookup, NameStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves scientific names to common names through a [`NameStore`].
///
/// A miss or any store failure resolves to the `"Unknown Bird"` sentinel
/// so a lookup-store outage degrades labels rather than failing the whole
/// request. One lookup attempt per call; no retries.
#[derive(Clone)]
pub struct NameResolver {
    store: Arc<dyn NameStore>,
}

impl NameResolver {
    /// Create a resolver over the given store.
    pub fn new(store: Arc<dyn NameStore>) -> Self {
        Self { store }
    }

    /// Resolve a scientific name to a common name.
    pub fn resolve(&self, scientific_name: &str) -> String {
        match self.store.lookup(scientific_name) {
            Ok(Lookup::Found(common)) => common,
            Ok(Lookup::NotFound) => {
                debug!("No common name found for: {scientific_name}");
                UNKNOWN_BIRD.to_string()
            }
            Err(e) => {
                warn!("Name lookup failed for '{scientific_name}': {e}");
                UNKNOWN_BIRD.to_string()
            }
        }
    }
}

impl std::fmt::Debug for NameResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameResolver").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::names::MemoryNameStore;
    use crate::Result;

    struct FailingStore;

    impl NameStore for FailingStore {
        fn lookup(&self, _scientific_name: &str) -> Result<Lookup> {
            Err(Error::NameLookup {
                reason: "store unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_resolve_hit() {
        let store = MemoryNameStore::from_pairs(&[("Cyanocitta cristata", "Blue Jay")]);
        let resolver = NameResolver::new(Arc::new(store));
        assert_eq!(resolver.resolve("Cyanocitta cristata"), "Blue Jay");
    }

    #[test]
    fn test_resolve_miss_is_sentinel() {
        let resolver = NameResolver::new(Arc::new(MemoryNameStore::default()));
        assert_eq!(resolver.resolve("Corvus corax"), UNKNOWN_BIRD);
    }

    #[test]
    fn test_resolve_store_failure_is_sentinel() {
        let resolver = NameResolver::new(Arc::new(FailingStore));
        assert_eq!(resolver.resolve("Corvus corax"), UNKNOWN_BIRD);
    }
}
