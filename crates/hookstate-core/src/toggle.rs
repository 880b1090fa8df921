/// Boolean flag that flips on demand.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    value: bool,
}

impl Toggle {
    pub fn new(initial: bool) -> Self {
        Self { value: initial }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.value = !self.value;
        self.value
    }

    /// Sets the flag. Returns whether it changed.
    pub fn set(&mut self, value: bool) -> bool {
        let changed = self.value != value;
        self.value = value;
        changed
    }
}
