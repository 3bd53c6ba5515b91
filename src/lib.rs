//! chain-table: a single-threaded, separate-chaining hash table built on an
//! arena-backed doubly-linked list, with cursor iteration over both.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep each layer small enough that its invariants can be checked
//!   in isolation and then relied on by the layer above.
//! - Layers:
//!   - DoublyLinkedList<T>: ordered sequence whose nodes live in a per-list
//!     `SlotMap`; links are generational `NodeId`s rather than pointers.
//!   - ListIterator<'a, T>: mutable cursor over one list; removal at the
//!     cursor is the only way to splice a node out mid-traversal.
//!   - HashTable<V>: array of list buckets keyed by `u64 % num_buckets`,
//!     growing by a `GrowthPolicy` when the load ceiling is reached.
//!   - HashTableIterator<'a, V>: a bucket index plus a list position,
//!     presenting one linear traversal across buckets.
//!   - fnv: stand-alone FNV-1a digest for callers deriving keys.
//!
//! Constraints
//! - Single-threaded; no interior mutability and no synchronisation.
//! - Keys are `u64` and are never re-mixed by the table.
//! - Cursors hold `&mut` borrows of their collection, so any mutation not
//!   made through the cursor itself is rejected at compile time.
//!
//! Unlinking
//! - All four removal shapes (sole node, head, tail, interior) are decided
//!   by one pure function of the removed node's neighbours (`unlink`). The
//!   list applies that plan, then releases the node from its arena. Caller
//!   code (disposal closures) only runs once the list is consistent again.
//!
//! Resizing
//! - Checked at the start of every insert using the pre-insert count. The
//!   table moves every entry into a larger table through a
//!   `HashTableIterator`, swaps bucket arrays so the handle keeps its
//!   identity, and tears the emptied array down with `Disposal::Transfer`.
//!   Iteration order is not preserved across a resize.
//!
//! Disposal
//! - `free` on either structure takes a `Disposal`: `Release` passes each
//!   remaining payload to a closure exactly once; `Transfer` asserts that no
//!   payload is left because ownership already moved elsewhere. Plain `Drop`
//!   simply drops any remaining payloads.
//!
//! Failure model
//! - Expected outcomes (missing key, empty list, end of traversal, replace
//!   versus insert) are reported through `Option`, `bool`, and `ListError`.
//! - Contract violations (zero buckets, `get` on a terminal list cursor,
//!   transfer teardown with payloads left) panic.

mod disposal;
mod fnv;
pub mod hash_table;
mod hash_table_iterator;
mod hash_table_proptest;
pub mod linked_list;
mod list_iterator;
mod unlink;

// Public surface
pub use disposal::Disposal;
pub use fnv::{fnv1a_64, FnvBuildHasher, FnvHasher, FNV1A_64_INIT, FNV1A_64_PRIME};
pub use hash_table::{GrowthPolicy, HashTable, Key, DEFAULT_BUCKETS};
pub use hash_table_iterator::HashTableIterator;
pub use linked_list::{DoublyLinkedList, ListError, NodeId, SortOrder};
pub use list_iterator::ListIterator;
