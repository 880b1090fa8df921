/// Progress of a job that finishes with a value or an error.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsyncState<V, E> {
    /// Started and not finished yet.
    Loading,
    Value(V),
    Error(E),
}

impl<V, E> Default for AsyncState<V, E> {
    fn default() -> Self {
        AsyncState::Loading
    }
}

impl<V, E> AsyncState<V, E> {
    /// Creates the state of a job that has just started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restarts the job, dropping any previous outcome.
    pub fn start(&mut self) {
        tracing::trace!("async job started");
        *self = AsyncState::Loading;
    }

    pub fn resolve(&mut self, value: V) {
        *self = AsyncState::Value(value);
    }

    pub fn reject(&mut self, error: E) {
        *self = AsyncState::Error(error);
    }

    /// Records the outcome of a finished job.
    pub fn finish(&mut self, result: Result<V, E>) {
        match result {
            Ok(value) => self.resolve(value),
            Err(error) => self.reject(error),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AsyncState::Loading)
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            AsyncState::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            AsyncState::Error(error) => Some(error),
            _ => None,
        }
    }
}
