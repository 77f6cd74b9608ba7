//! Pair list configuration
//!
//! Callers that keep their settings in a config file can embed
//! [`PairListConfig`] in their own serde structures; every field has a
//! default so partial documents deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Capacity allocated by the first growth of an empty list.
pub const DEFAULT_CAPACITY: usize = 4;

/// Largest slot count a list of `T` can allocate on this platform.
pub fn platform_max_capacity<T>() -> usize {
    let slot = std::mem::size_of::<Option<T>>().max(1);
    isize::MAX as usize / slot
}

/// Construction settings for a [`PairList`](crate::PairList).
///
/// # Example
///
/// ```json
/// { "unique_keys": false, "initial_capacity": 16 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairListConfig {
    /// Reject inserts whose `(id, name)` pair already exists.
    #[serde(default = "default_unique_keys")]
    pub unique_keys: bool,
    /// Slots to allocate up front.
    #[serde(default)]
    pub initial_capacity: usize,
    /// Upper bound on capacity. `None` means the platform maximum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<usize>,
}

fn default_unique_keys() -> bool {
    true
}

impl Default for PairListConfig {
    fn default() -> Self {
        PairListConfig {
            unique_keys: default_unique_keys(),
            initial_capacity: 0,
            max_capacity: None,
        }
    }
}

impl PairListConfig {
    /// Config for a list that accepts duplicate keys.
    pub fn allow_duplicates() -> Self {
        PairListConfig {
            unique_keys: false,
            ..Self::default()
        }
    }

    /// Effective capacity ceiling for records of type `T`.
    pub(crate) fn capacity_limit<T>(&self) -> usize {
        let platform = platform_max_capacity::<T>();
        self.max_capacity.map_or(platform, |max| max.min(platform))
    }

    /// Check that the initial capacity fits under the ceiling.
    pub(crate) fn validate<T>(&self) -> Result<()> {
        let limit = self.capacity_limit::<T>();
        if self.initial_capacity > limit {
            return Err(Error::invalid_argument(
                "initial_capacity",
                format!("{} exceeds maximum capacity {}", self.initial_capacity, limit),
            ));
        }
        Ok(())
    }
}
