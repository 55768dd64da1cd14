use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::item::Item;

/// Append-only, ordered item storage.
///
/// Insertion order is the enumeration order. Records are never removed or
/// modified, so `len()` never decreases for the life of the store.
pub trait ItemStore: Send + Sync {
    /// Push `item` at the end of the sequence. Never fails.
    fn append(&self, item: Item);
    /// Snapshot of every stored item, oldest first.
    fn list(&self) -> Vec<Item>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn append(&self, item: Item) {
        (**self).append(item)
    }

    fn list(&self) -> Vec<Item> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory store guarded by a single mutex.
///
/// Reads and writes are mutually exclusive, so `list()` always sees a
/// complete prefix of the appends and concurrent appends are never lost.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: Mutex<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
        }
    }

    // A panicking holder can only have been mid-`push` or mid-`clone`,
    // neither of which leaves the vector inconsistent.
    fn items(&self) -> MutexGuard<'_, Vec<Item>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ItemStore for InMemoryItemStore {
    fn append(&self, item: Item) {
        let mut items = self.items();
        items.push(item);
        tracing::debug!(count = items.len(), "item stored");
    }

    fn list(&self) -> Vec<Item> {
        self.items().clone()
    }

    fn len(&self) -> usize {
        self.items().len()
    }
}
