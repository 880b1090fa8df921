//! Terminal host for a history-backed counter.
pub mod session;

pub use session::{Command, Outcome, ParseCommandError, Session};
