/// The two ways a new value can be written to a store.
use std::fmt;

/// A write request for a `BoundedHistoryStore`.
///
/// `Set` carries the new value directly. `Apply` derives it from the current
/// value, so callers don't need a separate read before writing.
pub enum Update<'a, T> {
    Set(T),
    Apply(Box<dyn FnOnce(&T) -> T + 'a>),
}

impl<'a, T> Update<'a, T> {
    /// Wraps a function of the current value.
    pub fn apply(f: impl FnOnce(&T) -> T + 'a) -> Self {
        Update::Apply(Box::new(f))
    }

    /// Produces the value to write, given the current one.
    pub fn resolve(self, current: &T) -> T {
        match self {
            Update::Set(value) => value,
            Update::Apply(f) => f(current),
        }
    }
}

impl<T> From<T> for Update<'_, T> {
    fn from(value: T) -> Self {
        Update::Set(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Update<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Update::Set(value) => f.debug_tuple("Set").field(value).finish(),
            Update::Apply(_) => f.write_str("Apply(..)"),
        }
    }
}
