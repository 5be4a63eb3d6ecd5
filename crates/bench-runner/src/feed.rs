//! Cyclic data feed over a fixed record pool.

use std::sync::Arc;

/// Wrapping cursor over a shared, non-empty pool.
///
/// Every call to [`CyclicFeed::next_record`] returns the record under the
/// cursor and advances it, wrapping at the pool length. Clones share the
/// pool but own their cursor.
#[derive(Debug, Clone)]
pub struct CyclicFeed<T> {
    items: Arc<[T]>,
    cursor: usize,
}

impl<T> CyclicFeed<T> {
    /// Create a feed starting at the first record. Returns `None` for an
    /// empty pool.
    pub fn new(items: Arc<[T]>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, cursor: 0 })
    }

    /// Return the next record and advance the cursor.
    pub fn next_record(&mut self) -> &T {
        let index = self.cursor;
        self.cursor = (index + 1) % self.items.len();
        &self.items[index]
    }

    /// Index of the record the next call will return.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of records in one full cycle.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; empty pools are rejected by [`CyclicFeed::new`].
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
