//! Rotating sequences for player order and phase order.

use im::Vector;
use rustc_hash::FxHashSet;

/// An ordered sequence whose head is "current" and can be moved to the tail.
///
/// Entries are unique and a rotation is never empty. Removal is permanent: an
/// eliminated player is dropped, not skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation<T: Clone> {
    items: Vector<T>,
}

impl<T> Rotation<T>
where
    T: Clone + Eq + std::hash::Hash,
{
    /// Create a rotation from distinct items.
    ///
    /// Returns `None` if `items` is empty or contains duplicates.
    pub fn new(items: impl IntoIterator<Item = T>) -> Option<Self> {
        let items: Vector<T> = items.into_iter().collect();
        let distinct: FxHashSet<&T> = items.iter().collect();
        if items.is_empty() || distinct.len() != items.len() {
            return None;
        }
        Some(Self { items })
    }

    /// Create a rotation from items already known to be distinct and non-empty.
    pub(crate) fn from_distinct(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Current head.
    #[must_use]
    pub fn front(&self) -> &T {
        &self.items[0]
    }

    /// Move the head to the tail.
    pub fn rotate(&mut self) {
        if let Some(head) = self.items.pop_front() {
            self.items.push_back(head);
        }
    }

    /// Drop an item.
    ///
    /// Returns false if it was not present or is the last remaining item.
    pub fn remove(&mut self, item: &T) -> bool {
        if self.items.len() <= 1 {
            return false;
        }
        match self.items.index_of(item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Check if an item is still in the rotation.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Items from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
