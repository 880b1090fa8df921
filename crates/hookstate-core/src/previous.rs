/// Tracks the value seen before the most recent change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Previous<T> {
    current: T,
    previous: Option<T>,
}

impl<T: PartialEq> Previous<T> {
    /// Starts tracking with `initial` and no previous value.
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            previous: None,
        }
    }

    /// Feeds the latest value and returns the one before it.
    ///
    /// Feeding a value equal to the current one leaves both untouched, so
    /// unrelated re-renders don't shift the previous value.
    pub fn track(&mut self, value: T) -> Option<&T> {
        if value != self.current {
            let old = std::mem::replace(&mut self.current, value);
            self.previous = Some(old);
        }
        self.previous.as_ref()
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn previous(&self) -> Option<&T> {
        self.previous.as_ref()
    }
}
