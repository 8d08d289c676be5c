//! Person name value type with structural equality.
//!
//! # Responsibility
//! - Define equality and hashing for a `(first_name, last_name)` pair.
//!
//! # Invariants
//! - Equality is exact and case-sensitive on both fields, no normalization.
//! - `Hash` feeds exactly the equality fields, so equal names always hash
//!   identically.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::hash::{Hash, Hasher};

/// Two-field name value compared by content, not identity.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
}

impl PersonName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Compares against a type-erased value.
    ///
    /// A value that is not a `PersonName` compares unequal instead of
    /// failing, so heterogeneous lookups stay total.
    pub fn eq_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .map_or(false, |name| name == self)
    }
}

impl PartialEq for PersonName {
    fn eq(&self, other: &Self) -> bool {
        self.first_name == other.first_name && self.last_name == other.last_name
    }
}

impl Hash for PersonName {
    // Must stay in sync with `PartialEq`: hash exactly the equality fields.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first_name.hash(state);
        self.last_name.hash(state);
    }
}
