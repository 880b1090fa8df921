/// Bounded undo/redo store.
///
/// Keeps a linear timeline of values with a pointer to the current one.
/// Writing while the pointer is behind the newest entry discards the redo
/// branch. Once the timeline grows past its capacity the oldest entries are
/// evicted.
use std::collections::vec_deque;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::HistoryConfig;
use crate::error::HistoryError;
use crate::listener::{ListenerId, Listeners};
use crate::update::Update;

/// Owned copy of a store's timeline, suitable for rendering or serializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot<T> {
    /// Entries, oldest first.
    pub entries: Vec<T>,
    /// Index of the current value in `entries`.
    pub pointer: usize,
    /// Maximum number of entries the store retains.
    pub capacity: usize,
}

impl<T> HistorySnapshot<T> {
    /// The entry the pointer refers to.
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.pointer)
    }
}

/// A value with a bounded history of its past values.
///
/// Each owner gets its own store. The store is single-threaded; listeners
/// run synchronously after each mutation that changes the current value.
#[derive(Debug)]
pub struct BoundedHistoryStore<T> {
    /// Timeline, oldest first. Never empty.
    entries: VecDeque<T>,
    /// Index of the current value.
    pointer: usize,
    /// Maximum length of `entries`.
    capacity: usize,
    listeners: Listeners<T>,
}

impl<T: PartialEq> BoundedHistoryStore<T> {
    /// Creates a store holding `initial` as its only entry.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::InvalidCapacity` if `capacity` is zero.
    pub fn new(initial: T, capacity: usize) -> Result<Self, HistoryError> {
        Self::with_config(initial, &HistoryConfig::with_capacity(capacity))
    }

    /// Creates a store using the capacity from `config`.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::InvalidCapacity` if the configured capacity is zero.
    pub fn with_config(initial: T, config: &HistoryConfig) -> Result<Self, HistoryError> {
        config.validate()?;
        Ok(Self::from_valid_capacity(initial, config.capacity))
    }

    /// Creates a store with the default capacity of 10.
    pub fn with_default_capacity(initial: T) -> Self {
        Self::from_valid_capacity(initial, HistoryConfig::default().capacity)
    }

    /// Builds the store once `capacity` is known to be at least 1.
    fn from_valid_capacity(initial: T, capacity: usize) -> Self {
        debug_assert!(capacity >= 1);
        tracing::debug!(capacity, "creating history store");

        let mut entries = VecDeque::with_capacity(capacity.min(64));
        entries.push_back(initial);
        Self {
            entries,
            pointer: 0,
            capacity,
            listeners: Listeners::default(),
        }
    }

    /// Writes a new value, either literal or derived from the current one.
    ///
    /// Returns `false` without touching the timeline when the resolved value
    /// equals the current value.
    pub fn write<'a>(&mut self, update: impl Into<Update<'a, T>>) -> bool {
        let value = update.into().resolve(self.current());
        if value == *self.current() {
            return false;
        }

        let discarded = self.entries.len() - 1 - self.pointer;
        self.entries.truncate(self.pointer + 1);
        self.entries.push_back(value);

        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            evicted += 1;
        }
        self.pointer = self.entries.len() - 1;

        tracing::trace!(
            discarded,
            evicted,
            len = self.entries.len(),
            "history write"
        );
        self.notify();
        true
    }

    /// Writes a literal value.
    pub fn set(&mut self, value: T) -> bool {
        self.write(Update::Set(value))
    }

    /// Writes the value computed by `f` from the current value.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        self.write(Update::apply(f))
    }
}

impl<T> BoundedHistoryStore<T> {
    /// The value at the pointer.
    pub fn current(&self) -> &T {
        &self.entries[self.pointer]
    }

    /// Index of the current value in the timeline.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of retained entries. Always at least 1.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a store holds its current value at minimum.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates the timeline, oldest first.
    pub fn entries(&self) -> vec_deque::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Whether `back` would move the pointer.
    pub fn can_back(&self) -> bool {
        self.pointer > 0
    }

    /// Whether `forward` would move the pointer.
    pub fn can_forward(&self) -> bool {
        self.pointer + 1 < self.entries.len()
    }

    /// Steps to the previous entry. No-op at the oldest entry.
    pub fn back(&mut self) -> bool {
        if !self.can_back() {
            return false;
        }
        self.pointer -= 1;
        tracing::trace!(pointer = self.pointer, "history back");
        self.notify();
        true
    }

    /// Steps to the next entry. No-op at the newest entry.
    pub fn forward(&mut self) -> bool {
        if !self.can_forward() {
            return false;
        }
        self.pointer += 1;
        tracing::trace!(pointer = self.pointer, "history forward");
        self.notify();
        true
    }

    /// Moves the pointer to `index`.
    ///
    /// Out-of-range indices are ignored: callers often derive them from a
    /// timeline rendered before the last write.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.entries.len() || index == self.pointer {
            return false;
        }
        self.pointer = index;
        tracing::trace!(pointer = self.pointer, "history go_to");
        self.notify();
        true
    }

    /// Drops every entry except the current value.
    pub fn clear_to_current(&mut self) {
        let keep = self.pointer;
        self.entries.truncate(keep + 1);
        self.entries.drain(..keep);
        self.pointer = 0;
    }

    /// Registers a callback run with the new current value after every
    /// state-changing operation.
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        self.listeners.notify(&self.entries[self.pointer]);
    }
}

impl<T: Clone> BoundedHistoryStore<T> {
    /// Copies the timeline out of the store.
    pub fn snapshot(&self) -> HistorySnapshot<T> {
        HistorySnapshot {
            entries: self.entries.iter().cloned().collect(),
            pointer: self.pointer,
            capacity: self.capacity,
        }
    }
}
