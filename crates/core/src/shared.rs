//! Externally owned lock around a pair list
//!
//! [`PairList`] is not thread-safe and takes no lock itself. Callers that need
//! to share one across threads hold a [`SharedPairList`] handle and acquire
//! its mutex around every compound read-modify-write sequence, such as
//! "look up, then update" or "walk with a cursor, then remove".

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::list::PairList;

/// Cloneable handle to a mutex-protected [`PairList`]
pub struct SharedPairList<K1, K2, V> {
    inner: Arc<Mutex<PairList<K1, K2, V>>>,
}

impl<K1, K2, V> SharedPairList<K1, K2, V> {
    /// Wrap `list` in a new lock
    pub fn new(list: PairList<K1, K2, V>) -> Self {
        SharedPairList {
            inner: Arc::new(Mutex::new(list)),
        }
    }

    /// Block until the lock is held
    pub fn lock(&self) -> MutexGuard<'_, PairList<K1, K2, V>> {
        self.inner.lock()
    }

    /// Take the lock only if it is free
    pub fn try_lock(&self) -> Option<MutexGuard<'_, PairList<K1, K2, V>>> {
        self.inner.try_lock()
    }

    /// Run `f` with the lock held
    pub fn with<R>(&self, f: impl FnOnce(&mut PairList<K1, K2, V>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Recover the list when this is the last handle
    ///
    /// Returns the handle unchanged if other clones are still alive.
    pub fn into_inner(self) -> Result<PairList<K1, K2, V>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| SharedPairList { inner })
    }

    /// Number of live handles to the same list
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<K1, K2, V> Clone for SharedPairList<K1, K2, V> {
    fn clone(&self) -> Self {
        SharedPairList {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K1, K2, V> From<PairList<K1, K2, V>> for SharedPairList<K1, K2, V> {
    fn from(list: PairList<K1, K2, V>) -> Self {
        SharedPairList::new(list)
    }
}

impl<K1, K2, V> Default for SharedPairList<K1, K2, V> {
    fn default() -> Self {
        SharedPairList::new(PairList::new())
    }
}

impl<K1, K2, V> std::fmt::Debug for SharedPairList<K1, K2, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_lock() {
            Some(list) => f
                .debug_struct("SharedPairList")
                .field("len", &list.len())
                .field("version", &list.version())
                .finish(),
            None => f
                .debug_struct("SharedPairList")
                .field("locked", &true)
                .finish(),
        }
    }
}
