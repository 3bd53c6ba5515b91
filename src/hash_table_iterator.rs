//! HashTableIterator: one linear cursor over every entry of a `HashTable`.
//!
//! The cursor is a bucket index plus a detached list position inside that
//! bucket. Each operation re-attaches a `ListIterator` to the current bucket,
//! so crossing a bucket boundary is just building a fresh one at the head of
//! the next non-empty bucket.

use crate::hash_table::{HashTable, Key};
use crate::linked_list::NodeId;
use crate::list_iterator::ListIterator;

pub struct HashTableIterator<'a, V> {
    table: &'a mut HashTable<V>,
    bucket: usize,
    node: Option<NodeId>,
}

impl<'a, V> HashTableIterator<'a, V> {
    /// Cursor at the first entry of the lowest non-empty bucket, or terminal
    /// if the table is empty.
    pub fn new(table: &'a mut HashTable<V>) -> Self {
        let first = if table.is_empty() {
            None
        } else {
            table.next_occupied(0)
        };
        match first {
            Some(bucket) => {
                let node = ListIterator::new(table.bucket_mut(bucket)).position();
                Self {
                    table,
                    bucket,
                    node,
                }
            }
            None => {
                debug_assert!(table.is_empty(), "non-empty table with no occupied bucket");
                let bucket = table.num_buckets();
                Self {
                    table,
                    bucket,
                    node: None,
                }
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.node.is_some() && self.bucket < self.table.num_buckets() && !self.table.is_empty()
    }

    /// Step to the next entry, crossing into later buckets as needed.
    /// Returns false, leaving the cursor terminal, once the last bucket is exhausted.
    pub fn advance(&mut self) -> bool {
        if !self.is_valid() {
            return false;
        }
        let mut inner = ListIterator::resume(self.table.bucket_mut(self.bucket), self.node);
        if inner.advance() {
            self.node = inner.position();
            return true;
        }
        match self.table.next_occupied(self.bucket + 1) {
            Some(bucket) => {
                self.bucket = bucket;
                self.node = ListIterator::new(self.table.bucket_mut(bucket)).position();
                true
            }
            None => {
                self.bucket = self.table.num_buckets();
                self.node = None;
                false
            }
        }
    }

    /// Entry under the cursor, if any.
    pub fn get(&self) -> Option<(Key, &V)> {
        if !self.is_valid() {
            return None;
        }
        let entry = self.table.bucket(self.bucket).payload(self.node?)?;
        Some((entry.key, &entry.value))
    }

    /// Remove the entry under the cursor and return it, leaving the cursor on
    /// the following entry (or terminal).
    ///
    /// The entry is removed by key through [`HashTable::remove`] after the
    /// cursor has moved past it.
    ///
    /// # Panics
    /// If the table no longer holds the entry the cursor pointed at.
    pub fn remove(&mut self) -> Option<(Key, V)> {
        let (key, _) = self.get()?;
        self.advance();
        match self.table.remove(key) {
            Some((removed, value)) => {
                assert_eq!(removed, key, "cursor removed the wrong entry");
                Some((removed, value))
            }
            None => panic!("cursor entry {key:#x} missing from its table"),
        }
    }

    /// Bucket the cursor currently sits in, if it is valid.
    pub fn bucket_index(&self) -> Option<usize> {
        self.is_valid().then_some(self.bucket)
    }
}
