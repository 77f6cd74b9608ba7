//! Record type stored by the pair list
//!
//! A record is a triple of `(id, name, value)`. Its identity for uniqueness
//! purposes is the `(id, name)` pair; the value never takes part in key
//! comparisons.

use crate::error::{Error, Result};

/// An `(id, name, value)` triple
///
/// `PartialEq` compares all three fields, matching full-record operations such
/// as [`PairList::contains`](crate::PairList::contains). Key comparisons go
/// through [`Record::matches_key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record<K1, K2, V> {
    /// First half of the composite key
    pub id: K1,
    /// Second half of the composite key
    pub name: K2,
    /// Payload, not part of the key
    pub value: V,
}

impl<K1, K2, V> Record<K1, K2, V> {
    /// Create a record from present values
    pub fn new(id: K1, name: K2, value: V) -> Self {
        Record { id, name, value }
    }

    /// Create a record from possibly absent values
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] naming the first absent field.
    pub fn try_new(id: Option<K1>, name: Option<K2>, value: Option<V>) -> Result<Self> {
        let id = id.ok_or(Error::NullArgument("id"))?;
        let name = name.ok_or(Error::NullArgument("name"))?;
        let value = value.ok_or(Error::NullArgument("value"))?;
        Ok(Record { id, name, value })
    }

    /// Split the record into its parts
    pub fn into_parts(self) -> (K1, K2, V) {
        (self.id, self.name, self.value)
    }
}

impl<K1: PartialEq, K2: PartialEq, V> Record<K1, K2, V> {
    /// True when this record has the given composite key
    #[inline]
    pub fn matches_key(&self, id: &K1, name: &K2) -> bool {
        self.id == *id && self.name == *name
    }

    /// True when both records share the same composite key
    #[inline]
    pub fn same_key(&self, other: &Self) -> bool {
        self.matches_key(&other.id, &other.name)
    }
}

impl<K1, K2, V> From<(K1, K2, V)> for Record<K1, K2, V> {
    fn from((id, name, value): (K1, K2, V)) -> Self {
        Record { id, name, value }
    }
}
