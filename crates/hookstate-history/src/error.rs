/// Errors raised by the history store.
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// A store must be able to hold at least its current value.
    #[error("history capacity must be at least 1, got {capacity}")]
    InvalidCapacity { capacity: usize },
}
