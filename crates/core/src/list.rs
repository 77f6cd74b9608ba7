//! Array-backed composite-key collection
//!
//! [`PairList`] stores [`Record`]s in insertion order and supports lookup by
//! id, by name, or by the `(id, name)` pair. Lookups are linear scans.
//!
//! ## Capacity
//!
//! The list reports a logical capacity that only changes through
//! [`PairList::set_capacity`] or growth. Growth doubles the capacity, starting
//! at [`DEFAULT_CAPACITY`], and never shrinks on removal. A capacity of zero
//! holds no allocation.
//!
//! ## Versioning
//!
//! Every structural or positional change (add, insert, remove, overwrite,
//! clear) bumps a mutation counter. [`Cursor`]s capture it on creation and
//! fail with [`Error::ConcurrentModification`] when it moves.
//!
//! ## Thread safety
//!
//! `PairList` takes no lock. Wrap it in a
//! [`SharedPairList`](crate::SharedPairList) and hold the lock around compound
//! read-modify-write sequences.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::config::{PairListConfig, DEFAULT_CAPACITY};
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::record::Record;

/// Source of per-list identities handed to cursors.
static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

fn next_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)
}

/// Borrowing iterator over the records of a [`PairList`].
pub type Iter<'a, K1, K2, V> = std::slice::Iter<'a, Record<K1, K2, V>>;

/// Ordered, resizable collection of `(id, name, value)` records
#[derive(Debug)]
pub struct PairList<K1, K2, V> {
    items: Vec<Record<K1, K2, V>>,
    /// Logical slot count; `items` always has at least this much room.
    capacity: usize,
    /// Ceiling for growth and `set_capacity`.
    limit: usize,
    unique_keys: bool,
    version: u64,
    /// Identity checked by cursors; never shared, not even by clones.
    id: u64,
}

impl<K1: Clone, K2: Clone, V: Clone> Clone for PairList<K1, K2, V> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        PairList {
            items,
            capacity: self.capacity,
            limit: self.limit,
            unique_keys: self.unique_keys,
            version: self.version,
            id: next_list_id(),
        }
    }
}

impl<K1, K2, V> Default for PairList<K1, K2, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K1, K2, V> PairList<K1, K2, V> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an empty list that rejects duplicate keys
    pub fn new() -> Self {
        Self::with_unique_keys(true)
    }

    /// Create an empty list, choosing whether duplicate keys are rejected
    pub fn with_unique_keys(unique_keys: bool) -> Self {
        let config = PairListConfig {
            unique_keys,
            ..PairListConfig::default()
        };
        Self::build(&config)
    }

    /// Create a list with `capacity` pre-allocated slots
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds the platform maximum, like `Vec`.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut list = Self::new();
        list.reallocate(capacity);
        list
    }

    /// Create a list from a signed size, as read from an untyped source
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `size` is negative or above the
    /// platform maximum.
    pub fn try_with_capacity(size: isize) -> Result<Self> {
        let capacity = usize::try_from(size)
            .map_err(|_| Error::invalid_argument("size", "cannot be less than zero"))?;
        Self::from_config(PairListConfig {
            initial_capacity: capacity,
            ..PairListConfig::default()
        })
    }

    /// Create a list from a [`PairListConfig`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the initial capacity exceeds the
    /// configured maximum.
    pub fn from_config(config: PairListConfig) -> Result<Self> {
        config.validate::<Record<K1, K2, V>>()?;
        let mut list = Self::build(&config);
        list.reallocate(config.initial_capacity);
        Ok(list)
    }

    fn build(config: &PairListConfig) -> Self {
        PairList {
            items: Vec::new(),
            capacity: 0,
            limit: config.capacity_limit::<Record<K1, K2, V>>(),
            unique_keys: config.unique_keys,
            version: 0,
            id: next_list_id(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of records
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list holds no records
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocated slot count
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Largest capacity this list may grow to
    pub fn max_capacity(&self) -> usize {
        self.limit
    }

    /// Whether inserts through [`add`](Self::add) reject duplicate keys
    pub fn unique_keys(&self) -> bool {
        self.unique_keys
    }

    /// Current value of the mutation counter
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Identity of this list, unique within the process
    pub(crate) fn list_id(&self) -> u64 {
        self.id
    }

    /// The records as a slice
    pub fn as_slice(&self) -> &[Record<K1, K2, V>] {
        &self.items
    }

    /// Borrowing iterator in index order
    ///
    /// The borrow prevents mutation for as long as the iterator lives. Use
    /// [`cursor`](Self::cursor) to walk the list while mutating it.
    pub fn iter(&self) -> Iter<'_, K1, K2, V> {
        self.items.iter()
    }

    /// Detached enumerator bound to this list and its current version
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.id, self.version)
    }

    // =========================================================================
    // Capacity management
    // =========================================================================

    /// Reallocate to exactly `capacity` slots
    ///
    /// Setting the capacity to zero on an empty list releases the allocation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is below the current
    /// length or above [`max_capacity`](Self::max_capacity).
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.len() {
            return Err(Error::invalid_argument(
                "capacity",
                format!("{} is less than length {}", capacity, self.len()),
            ));
        }
        if capacity > self.limit {
            return Err(Error::invalid_argument(
                "capacity",
                format!("{} exceeds maximum capacity {}", capacity, self.limit),
            ));
        }
        if capacity != self.capacity {
            self.reallocate(capacity);
        }
        Ok(())
    }

    /// Make room for at least `additional` more records
    ///
    /// Does not count as a mutation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the required capacity exceeds
    /// [`max_capacity`](Self::max_capacity).
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let needed = self.len().checked_add(additional).ok_or_else(|| {
            Error::invalid_argument("additional", "length overflows usize")
        })?;
        if needed > self.capacity {
            self.grow(needed)?;
        }
        Ok(())
    }

    /// Grow so that at least `min` slots exist
    ///
    /// Single appends ask for `len + 1`, which doubling always covers; a
    /// larger `min` comes from [`reserve`](Self::reserve).
    fn grow(&mut self, min: usize) -> Result<()> {
        if min > self.limit {
            return Err(Error::invalid_argument(
                "capacity",
                format!("{} exceeds maximum capacity {}", min, self.limit),
            ));
        }

        let mut next = if self.capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            self.capacity.saturating_mul(2)
        };
        if next > self.limit {
            next = self.limit;
        }
        if next < min {
            next = min;
        }

        trace!(from = self.capacity, to = next, len = self.len(), "growing pair list");
        self.reallocate(next);
        Ok(())
    }

    fn ensure_room(&mut self) -> Result<()> {
        if self.len() == self.capacity {
            self.grow(self.len() + 1)?;
        }
        Ok(())
    }

    /// Move the records into a fresh allocation of exactly `capacity` slots
    fn reallocate(&mut self, capacity: usize) {
        let items = if capacity == 0 {
            Vec::new()
        } else {
            let mut items = Vec::with_capacity(capacity);
            items.append(&mut self.items);
            items
        };
        self.items = items;
        self.capacity = capacity;
    }

    #[inline]
    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    // =========================================================================
    // Positional mutation
    // =========================================================================

    /// Insert `record` at `index`, shifting later records right
    ///
    /// `index == len()` appends. Key uniqueness is NOT checked here; use
    /// [`add`](Self::add) for that.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > len()`.
    pub fn insert_at(&mut self, index: usize, record: Record<K1, K2, V>) -> Result<()> {
        if index > self.len() {
            return Err(Error::index_out_of_range(index, self.len()));
        }
        self.ensure_room()?;
        self.items.insert(index, record);
        self.bump();
        Ok(())
    }

    /// Remove and return the record at `index`, shifting later records left
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<Record<K1, K2, V>> {
        if index >= self.len() {
            return Err(Error::index_out_of_range(index, self.len()));
        }
        let removed = self.items.remove(index);
        self.bump();
        Ok(removed)
    }

    /// Record at `index`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Record<K1, K2, V>> {
        self.items
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.len()))
    }

    /// Overwrite the record at `index`, returning the previous one
    ///
    /// Counts as a mutation for cursor invalidation even though the length is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn set(&mut self, index: usize, record: Record<K1, K2, V>) -> Result<Record<K1, K2, V>> {
        let len = self.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))?;
        let old = std::mem::replace(slot, record);
        self.bump();
        Ok(old)
    }

    /// Overwrite the record at `index`; see [`set`](Self::set)
    pub fn update_at(
        &mut self,
        index: usize,
        record: Record<K1, K2, V>,
    ) -> Result<Record<K1, K2, V>> {
        self.set(index, record)
    }

    /// Overwrite the first record matching `predicate`
    ///
    /// Returns the index that was written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record matches.
    pub fn update_by_predicate<P>(
        &mut self,
        predicate: P,
        record: Record<K1, K2, V>,
    ) -> Result<usize>
    where
        P: FnMut(&Record<K1, K2, V>) -> bool,
    {
        let index = self
            .find_index(0, self.len(), predicate)?
            .ok_or(Error::NotFound("predicate"))?;
        self.set(index, record)?;
        Ok(index)
    }

    /// Remove every record, keeping the capacity
    pub fn clear(&mut self) {
        self.items.clear();
        self.bump();
    }

    // =========================================================================
    // Predicate search
    // =========================================================================

    /// First record satisfying `predicate`
    pub fn find<P>(&self, mut predicate: P) -> Option<&Record<K1, K2, V>>
    where
        P: FnMut(&Record<K1, K2, V>) -> bool,
    {
        self.items.iter().find(|record| predicate(record))
    }

    /// First matching index within `[start, start + count)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `start > len()`, and
    /// [`Error::InvalidArgument`] if the window runs past the end.
    pub fn find_index<P>(
        &self,
        start: usize,
        count: usize,
        mut predicate: P,
    ) -> Result<Option<usize>>
    where
        P: FnMut(&Record<K1, K2, V>) -> bool,
    {
        if start > self.len() {
            return Err(Error::index_out_of_range(start, self.len()));
        }
        let end = start
            .checked_add(count)
            .filter(|end| *end <= self.len())
            .ok_or_else(|| {
                Error::invalid_argument(
                    "count",
                    format!("window {}+{} exceeds length {}", start, count, self.len()),
                )
            })?;
        Ok(self.items[start..end]
            .iter()
            .position(|record| predicate(record))
            .map(|offset| start + offset))
    }

    /// First matching index over the whole list
    pub fn find_index_all<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&Record<K1, K2, V>) -> bool,
    {
        self.items.iter().position(|record| predicate(record))
    }

    /// First record, if any
    pub fn first(&self) -> Option<&Record<K1, K2, V>> {
        self.items.first()
    }

    /// Last record, if any
    pub fn last(&self) -> Option<&Record<K1, K2, V>> {
        self.items.last()
    }
}

impl<K1: Clone, K2: Clone, V: Clone> PairList<K1, K2, V> {
    /// New list holding every record satisfying `predicate`, in order
    ///
    /// The result never enforces unique keys.
    pub fn find_all<P>(&self, mut predicate: P) -> PairList<K1, K2, V>
    where
        P: FnMut(&Record<K1, K2, V>) -> bool,
    {
        let items: Vec<_> = self
            .items
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect();
        PairList {
            capacity: items.len(),
            items,
            limit: self.limit,
            unique_keys: false,
            version: 0,
            id: next_list_id(),
        }
    }

    /// Copy the records into a new, independent vector
    pub fn to_array(&self) -> Vec<Record<K1, K2, V>> {
        self.items.clone()
    }

    /// Copy the records into `destination` starting at `dest_index`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `dest_index` is past the end of
    /// `destination`, and [`Error::InvalidArgument`] if fewer than `len()`
    /// slots remain after it. Nothing is written on failure.
    pub fn copy_to(&self, destination: &mut [Record<K1, K2, V>], dest_index: usize) -> Result<()> {
        if dest_index > destination.len() {
            return Err(Error::index_out_of_range(dest_index, destination.len()));
        }
        let room = destination.len() - dest_index;
        if room < self.len() {
            return Err(Error::invalid_argument(
                "destination",
                format!("{} slots after index {}, need {}", room, dest_index, self.len()),
            ));
        }
        destination[dest_index..dest_index + self.len()].clone_from_slice(&self.items);
        Ok(())
    }
}

impl<K1: PartialEq, K2: PartialEq, V> PairList<K1, K2, V> {
    // =========================================================================
    // Insertion
    // =========================================================================

    /// Append a record built from `id`, `name` and `value`
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if unique keys are enforced and the
    /// pair already exists, or [`Error::InvalidArgument`] if the list is at
    /// its maximum capacity.
    pub fn add(&mut self, id: K1, name: K2, value: V) -> Result<()> {
        self.add_record(Record::new(id, name, value))
    }

    /// Append a record built from possibly absent parts
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] before anything else is checked, then
    /// fails like [`add`](Self::add).
    pub fn try_add(&mut self, id: Option<K1>, name: Option<K2>, value: Option<V>) -> Result<()> {
        self.add_record(Record::try_new(id, name, value)?)
    }

    /// Append `record`, enforcing unique keys if configured
    pub fn add_record(&mut self, record: Record<K1, K2, V>) -> Result<()> {
        if self.unique_keys && self.index_of_key(&record.id, &record.name).is_some() {
            debug!(len = self.len(), "rejecting record with duplicate key");
            return Err(Error::DuplicateKey);
        }
        self.ensure_room()?;
        self.items.push(record);
        self.bump();
        Ok(())
    }

    /// Append every record, stopping at the first failure
    ///
    /// Records added before the failure stay in the list. Room for the
    /// iterator's lower size bound is reserved up front when it fits under
    /// the maximum capacity.
    pub fn add_all<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Record<K1, K2, V>>,
    {
        let records = records.into_iter();
        let (lower, _) = records.size_hint();
        if self.len().saturating_add(lower) <= self.limit {
            self.reserve(lower)?;
        }
        for record in records {
            self.add_record(record)?;
        }
        Ok(())
    }

    // =========================================================================
    // Key lookup
    // =========================================================================

    /// Index of the first record with this id
    pub fn index_of_id(&self, id: &K1) -> Option<usize> {
        self.items.iter().position(|record| record.id == *id)
    }

    /// Index of the first record with this name
    pub fn index_of_name(&self, name: &K2) -> Option<usize> {
        self.items.iter().position(|record| record.name == *name)
    }

    /// Index found by both the id scan and the name scan
    ///
    /// This is a hit only when the first record with `id` is also the first
    /// record with `name`. A record matching both fields that sits behind an
    /// earlier partial match is missed; use [`index_of_key`](Self::index_of_key)
    /// for a true composite scan.
    pub fn index_of_pair(&self, id: &K1, name: &K2) -> Option<usize> {
        let by_id = self.index_of_id(id)?;
        let by_name = self.index_of_name(name)?;
        (by_id == by_name).then_some(by_id)
    }

    /// Index of the first record whose id and name both match
    pub fn index_of_key(&self, id: &K1, name: &K2) -> Option<usize> {
        self.items.iter().position(|record| record.matches_key(id, name))
    }

    /// Value of the first record with this id
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] on a miss.
    pub fn find_value_by_id(&self, id: &K1) -> Result<&V> {
        self.value_at(self.index_of_id(id), "id")
    }

    /// Value of the first record with this name
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] on a miss.
    pub fn find_value_by_name(&self, name: &K2) -> Result<&V> {
        self.value_at(self.index_of_name(name), "name")
    }

    /// Value at [`index_of_pair`](Self::index_of_pair)
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] on a miss.
    pub fn find_value_by_pair(&self, id: &K1, name: &K2) -> Result<&V> {
        self.value_at(self.index_of_pair(id, name), "id and name")
    }

    fn value_at(&self, index: Option<usize>, what: &'static str) -> Result<&V> {
        index
            .and_then(|index| self.items.get(index))
            .map(|record| &record.value)
            .ok_or(Error::NotFound(what))
    }

    // =========================================================================
    // Key removal
    // =========================================================================

    /// Remove the first record with this id; returns whether one was removed
    pub fn remove_by_id(&mut self, id: &K1) -> bool {
        let index = self.index_of_id(id);
        self.remove_found(index)
    }

    /// Remove the first record with this name; returns whether one was removed
    pub fn remove_by_name(&mut self, name: &K2) -> bool {
        let index = self.index_of_name(name);
        self.remove_found(index)
    }

    /// Remove the first record with this composite key
    pub fn remove_by_pair(&mut self, id: &K1, name: &K2) -> bool {
        let index = self.index_of_key(id, name);
        self.remove_found(index)
    }

    fn remove_found(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<K1: PartialEq, K2: PartialEq, V: PartialEq> PairList<K1, K2, V> {
    /// Index of the first record equal to `record` in all three fields
    pub fn index_of(&self, record: &Record<K1, K2, V>) -> Option<usize> {
        self.items.iter().position(|item| item == record)
    }

    /// True if a record equal to `record` is present
    pub fn contains(&self, record: &Record<K1, K2, V>) -> bool {
        self.index_of(record).is_some()
    }

    /// Remove the first record equal to `record`
    pub fn remove(&mut self, record: &Record<K1, K2, V>) -> bool {
        let index = self.index_of(record);
        self.remove_found(index)
    }
}

impl<'a, K1, K2, V> IntoIterator for &'a PairList<K1, K2, V> {
    type Item = &'a Record<K1, K2, V>;
    type IntoIter = Iter<'a, K1, K2, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<K1, K2, V> IntoIterator for PairList<K1, K2, V> {
    type Item = Record<K1, K2, V>;
    type IntoIter = std::vec::IntoIter<Record<K1, K2, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
