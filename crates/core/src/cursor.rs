//! Mutation-aware enumeration
//!
//! A [`Cursor`] does not borrow the list it walks. It captures the list's
//! mutation counter when created and checks it again on every advance, so a
//! caller that mutates the list mid-walk gets
//! [`Error::ConcurrentModification`] instead of stale or shifted records.
//!
//! A cursor also remembers which list created it and refuses to walk any
//! other one, even a clone at the same version.
//!
//! A cursor is forward-only. To restart, ask the list for a new one.

use tracing::debug;

use crate::error::{Error, Result};
use crate::list::PairList;
use crate::record::Record;

/// Forward-only enumerator over a [`PairList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    list_id: u64,
    expected: u64,
    index: usize,
}

impl Cursor {
    pub(crate) fn new(list_id: u64, version: u64) -> Self {
        Cursor {
            list_id,
            expected: version,
            index: 0,
        }
    }

    /// Yield the next record, or `None` once the list is exhausted
    ///
    /// # Errors
    ///
    /// Returns [`Error::ForeignCursor`] if `list` is not the list that
    /// created this cursor, and [`Error::ConcurrentModification`] if the list
    /// was mutated since the cursor was created, including overwrites that
    /// kept the length unchanged. Both checks run on every call, also after
    /// exhaustion.
    pub fn advance<'a, K1, K2, V>(
        &mut self,
        list: &'a PairList<K1, K2, V>,
    ) -> Result<Option<&'a Record<K1, K2, V>>> {
        if list.list_id() != self.list_id {
            debug!(
                expected = self.list_id,
                actual = list.list_id(),
                "cursor advanced over another list"
            );
            return Err(Error::ForeignCursor);
        }

        let actual = list.version();
        if actual != self.expected {
            debug!(
                expected = self.expected,
                actual,
                position = self.index,
                "cursor invalidated by mutation"
            );
            return Err(Error::ConcurrentModification {
                expected: self.expected,
                actual,
            });
        }

        let record = list.as_slice().get(self.index);
        if record.is_some() {
            self.index += 1;
        }
        Ok(record)
    }

    /// Number of records yielded so far
    pub fn position(&self) -> usize {
        self.index
    }

    /// Version captured at creation
    pub fn version(&self) -> u64 {
        self.expected
    }
}
