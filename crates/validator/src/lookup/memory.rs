use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::Value;

use super::{Criteria, EntityLookup};
use crate::error::LookupError;

/// Thread-safe in-memory [`EntityLookup`].
///
/// Collections must be registered (explicitly or by inserting into them)
/// before they can be queried; querying an unknown entity is an error, the
/// same way a repository lookup for an unmapped entity is.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use warden_validator::{Criteria, EntityLookup, InMemoryLookup};
///
/// let lookup = InMemoryLookup::new();
/// lookup.insert("User", json!({"id": 1, "email": "a@example.com"}));
///
/// let hit = lookup.find_one_by("User", &Criteria::by("email", json!("a@example.com")));
/// assert!(hit.unwrap().is_some());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLookup {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl InMemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty collection. Existing records are kept.
    pub fn register(&self, entity: impl Into<String>) {
        self.collections.write().entry(entity.into()).or_default();
    }

    /// Appends a record, registering the collection if needed.
    pub fn insert(&self, entity: impl Into<String>, record: Value) {
        self.collections
            .write()
            .entry(entity.into())
            .or_default()
            .push(record);
    }

    /// Number of records in `entity`, `None` if it is not registered.
    pub fn record_count(&self, entity: &str) -> Option<usize> {
        self.collections.read().get(entity).map(Vec::len)
    }
}

impl EntityLookup for InMemoryLookup {
    fn find_one_by(
        &self,
        entity: &str,
        criteria: &Criteria,
    ) -> Result<Option<Value>, LookupError> {
        let collections = self.collections.read();
        let records = collections
            .get(entity)
            .ok_or_else(|| LookupError::UnknownEntity {
                entity: entity.to_owned(),
            })?;

        let found = records.iter().find(|r| criteria.matches(r)).cloned();
        tracing::trace!(
            entity,
            property = criteria.property(),
            hit = found.is_some(),
            "in-memory lookup"
        );
        Ok(found)
    }
}
