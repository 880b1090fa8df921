/// Configuration for history stores.
use serde::{Deserialize, Serialize};

use crate::error::HistoryError;

/// Number of entries a store keeps when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 10;

/// Configuration for a `BoundedHistoryStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of entries retained, current value included.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl HistoryConfig {
    /// Creates a config with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Checks that the capacity can hold at least one entry.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::InvalidCapacity` when `capacity` is zero.
    pub fn validate(&self) -> Result<(), HistoryError> {
        if self.capacity < 1 {
            return Err(HistoryError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}
