//! The data-access seam queried by [`EntityNotExistValidator`](crate::EntityNotExistValidator).
//!
//! Connection management and query execution belong to the backend; the
//! validator only ever asks "find one record of this entity whose property
//! equals this value".

mod memory;

pub use memory::InMemoryLookup;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::LookupError;
use crate::value;

/// A single property/value match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Criteria {
    property: String,
    value: Value,
}

impl Criteria {
    /// Matches records whose `property` equals `value`.
    pub fn by(property: impl Into<String>, value: Value) -> Self {
        Self {
            property: property.into(),
            value,
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether a JSON object record satisfies this criteria.
    pub fn matches(&self, record: &Value) -> bool {
        record
            .get(&self.property)
            .is_some_and(|stored| value::loosely_equal(stored, &self.value))
    }

    /// The criteria as a one-key map, `{property: value}`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::with_capacity(1);
        map.insert(self.property.clone(), self.value.clone());
        map
    }
}

/// Finds at most one record by a single property match.
///
/// Implementations must be safe for concurrent use; the validator shares
/// one lookup across every evaluation.
pub trait EntityLookup: Send + Sync {
    /// Returns the first record of `entity` matching `criteria`, or `None`.
    fn find_one_by(&self, entity: &str, criteria: &Criteria)
    -> Result<Option<Value>, LookupError>;
}
