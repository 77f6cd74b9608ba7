//! Indexable sequence abstraction
//!
//! [`IndexedSequence`] is the minimal read capability shared by the pair list,
//! slices and vectors: count, positional get, and in-order iteration. Generic
//! helpers such as [`copy_sequence`] are written against the trait so they do
//! not depend on the concrete container.

use crate::list::PairList;
use crate::record::Record;

/// Read-only, index-addressable sequence
pub trait IndexedSequence {
    /// Element type
    type Item;

    /// Iterator over the elements in index order
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Number of elements
    fn len(&self) -> usize;

    /// True when the sequence has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or `None` past the end
    fn item(&self, index: usize) -> Option<&Self::Item>;

    /// Iterate in index order
    fn iter(&self) -> Self::Iter<'_>;
}

impl<T> IndexedSequence for [T] {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }
}

impl<T> IndexedSequence for Vec<T> {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<K1, K2, V> IndexedSequence for PairList<K1, K2, V> {
    type Item = Record<K1, K2, V>;
    type Iter<'a> = std::slice::Iter<'a, Record<K1, K2, V>> where Self: 'a;

    fn len(&self) -> usize {
        PairList::len(self)
    }

    fn item(&self, index: usize) -> Option<&Record<K1, K2, V>> {
        self.as_slice().get(index)
    }

    fn iter(&self) -> Self::Iter<'_> {
        PairList::iter(self)
    }
}

/// Clone every element of `sequence` into a new vector, in order
pub fn copy_sequence<S>(sequence: &S) -> Vec<S::Item>
where
    S: IndexedSequence + ?Sized,
    S::Item: Clone,
{
    let mut out = Vec::with_capacity(sequence.len());
    out.extend(sequence.iter().cloned());
    out
}
