/// Bounded undo/redo history for a single value.
///
/// Provides a `BoundedHistoryStore` that remembers a linear timeline of past
/// values, lets the owner step backward and forward through it, discards the
/// redo branch on every new write, and evicts the oldest entries once the
/// configured capacity is exceeded.
pub mod config;
pub mod error;
pub mod listener;
pub mod store;
pub mod update;

pub use config::HistoryConfig;
pub use error::HistoryError;
pub use listener::ListenerId;
pub use store::{BoundedHistoryStore, HistorySnapshot};
pub use update::Update;
