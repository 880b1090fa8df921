/// A vector with the list operations UI code usually reaches for.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayState<T> {
    items: Vec<T>,
}

impl<T> ArrayState<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Replaces the whole array.
    pub fn set(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Keeps only the items for which `keep` returns true.
    pub fn filter(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.items.retain(|item| keep(item));
    }

    /// Replaces the item at `index`.
    ///
    /// An index past the end appends the item instead.
    pub fn update(&mut self, index: usize, item: T) {
        match self.items.get_mut(index) {
            Some(slot) => *slot = item,
            None => {
                tracing::trace!(index, len = self.items.len(), "update past end, appending");
                self.items.push(item);
            }
        }
    }

    /// Removes and returns the item at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> From<Vec<T>> for ArrayState<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}
