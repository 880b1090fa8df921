//! Framework-independent state helpers meant to be owned by one UI
//! component instance each.
pub mod array;
pub mod async_state;
pub mod deps_guard;
pub mod history;
pub mod previous;
pub mod toggle;
pub mod update_guard;

pub use array::ArrayState;
pub use async_state::AsyncState;
pub use deps_guard::DepsGuard;
pub use history::{BoundedHistoryStore, HistoryConfig, HistoryError, HistorySnapshot, Update};
pub use previous::Previous;
pub use toggle::Toggle;
pub use update_guard::UpdateGuard;
