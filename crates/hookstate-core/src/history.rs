// Re-exports from hookstate-history so hosts only need this crate.
pub use hookstate_history::config::DEFAULT_CAPACITY;
pub use hookstate_history::{
    BoundedHistoryStore, HistoryConfig, HistoryError, HistorySnapshot, ListenerId, Update,
};
