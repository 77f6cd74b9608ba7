//! Pairlist - ordered in-memory collection keyed by an `(id, name)` pair
//!
//! A [`PairList`] stores `(id, name, value)` records in insertion order and
//! looks them up by id, by name, or by the composite pair.
//!
//! # Quick Start
//!
//! ```
//! use pairlist::{Error, PairList};
//!
//! let mut list = PairList::new();
//! list.add(1, "a", "x")?;
//! list.add(2, "b", "y")?;
//! assert_eq!(list.add(1, "a", "z"), Err(Error::DuplicateKey));
//!
//! assert_eq!(list.find_value_by_id(&2)?, &"y");
//! list.remove_at(0)?;
//! assert_eq!(list.len(), 1);
//! # Ok::<(), Error>(())
//! ```
//!
//! # Architecture
//!
//! All types live in `pairlist-core`; this crate re-exports them.

// Re-export the public API from pairlist-core
pub use pairlist_core::*;
