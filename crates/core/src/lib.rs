//! Core types for the pair list
//!
//! This crate defines an ordered, array-backed container of
//! `(id, name, value)` records keyed by two independent comparable fields:
//! - Record: The `(id, name, value)` triple and its composite key
//! - PairList: Resizable list with key lookup, predicate search and growth
//! - Cursor: Detached enumerator that detects mutation during a walk
//! - IndexedSequence: Read capability shared with slices and vectors
//! - SharedPairList: Externally owned lock for cross-thread use
//! - PairListConfig: Serde-friendly construction settings
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod list;
pub mod record;
pub mod shared;
pub mod traits;

pub use config::{platform_max_capacity, PairListConfig, DEFAULT_CAPACITY};
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use list::{Iter, PairList};
pub use record::Record;
pub use shared::SharedPairList;
pub use traits::{copy_sequence, IndexedSequence};
