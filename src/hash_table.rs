//! HashTable: separate chaining over `DoublyLinkedList` buckets keyed by `u64`.
//!
//! `bucket_index(key) = key % num_buckets`. The key's bits are not mixed;
//! callers wanting diffusion derive keys with [`crate::fnv1a_64`] first.

use crate::disposal::Disposal;
use crate::hash_table_iterator::HashTableIterator;
use crate::linked_list::{self, DoublyLinkedList};
use crate::list_iterator::ListIterator;
use core::fmt;

pub type Key = u64;

/// Bucket count used by [`HashTable::new`].
pub const DEFAULT_BUCKETS: usize = 16;

#[derive(Debug)]
pub(crate) struct Entry<V> {
    pub(crate) key: Key,
    pub(crate) value: V,
}

type Bucket<V> = DoublyLinkedList<Entry<V>>;

/// When and how far a table grows.
///
/// Growth is checked at the start of every insert against the element count
/// before that insert: once `len >= max_load * num_buckets`, the bucket count
/// is multiplied by `growth_factor`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GrowthPolicy {
    pub max_load: usize,
    pub growth_factor: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            max_load: 3,
            growth_factor: 9,
        }
    }
}

impl GrowthPolicy {
    #[inline]
    fn should_grow(&self, len: usize, num_buckets: usize) -> bool {
        len >= self.max_load.saturating_mul(num_buckets)
    }

    #[inline]
    fn grown(&self, num_buckets: usize) -> usize {
        num_buckets.saturating_mul(self.growth_factor)
    }
}

/// Bucket array plus element count. Replaced wholesale on resize.
struct Buckets<V> {
    lists: Vec<Bucket<V>>,
    len: usize,
}

impl<V> Buckets<V> {
    fn with_count(n: usize) -> Self {
        let mut lists = Vec::with_capacity(n);
        lists.resize_with(n, DoublyLinkedList::new);
        Self { lists, len: 0 }
    }

    #[inline]
    fn index(&self, key: Key) -> usize {
        (key % self.lists.len() as u64) as usize
    }
}

pub struct HashTable<V> {
    repr: Buckets<V>,
    policy: GrowthPolicy,
}

/// Cursor into `bucket` at the entry for `key`, or terminal if absent.
fn seek<V>(bucket: &mut Bucket<V>, key: Key) -> ListIterator<'_, Entry<V>> {
    let mut it = bucket.cursor();
    while it.is_valid() && it.get().key != key {
        it.advance();
    }
    it
}

impl<V> HashTable<V> {
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// # Panics
    /// If `num_buckets` is zero.
    pub fn with_buckets(num_buckets: usize) -> Self {
        Self::with_policy(num_buckets, GrowthPolicy::default())
    }

    /// # Panics
    /// If `num_buckets` is zero, `policy.max_load` is zero, or
    /// `policy.growth_factor` is less than two.
    pub fn with_policy(num_buckets: usize, policy: GrowthPolicy) -> Self {
        assert!(num_buckets > 0, "hash table needs at least one bucket");
        assert!(policy.max_load > 0, "max_load must be positive");
        assert!(policy.growth_factor > 1, "growth_factor must exceed one");
        Self {
            repr: Buckets::with_count(num_buckets),
            policy,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.repr.len
    }
    pub fn is_empty(&self) -> bool {
        self.repr.len == 0
    }

    pub fn num_buckets(&self) -> usize {
        self.repr.lists.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.num_buckets() as f64
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Insert `value` under `key`. If the key was present its value is
    /// replaced in place and the displaced value returned.
    pub fn insert(&mut self, key: Key, value: V) -> Option<V> {
        self.maybe_resize();

        let idx = self.repr.index(key);
        let bucket = &mut self.repr.lists[idx];
        let mut it = seek(bucket, key);
        if it.is_valid() {
            return Some(core::mem::replace(&mut it.get_mut().value, value));
        }
        bucket.append(Entry { key, value });
        self.repr.len += 1;
        None
    }

    pub fn find(&self, key: Key) -> Option<&V> {
        let bucket = &self.repr.lists[self.repr.index(key)];
        bucket.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    pub fn find_mut(&mut self, key: Key) -> Option<&mut V> {
        let idx = self.repr.index(key);
        seek(&mut self.repr.lists[idx], key)
            .into_mut()
            .map(|e| &mut e.value)
    }

    pub fn contains_key(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    /// Remove the entry for `key`, returning it.
    pub fn remove(&mut self, key: Key) -> Option<(Key, V)> {
        let idx = self.repr.index(key);
        let mut it = seek(&mut self.repr.lists[idx], key);
        if !it.is_valid() {
            return None;
        }
        let (entry, _) = it.take();
        self.repr.len -= 1;
        Some((entry.key, entry.value))
    }

    /// Tear the table down, disposing of every value bucket by bucket.
    pub fn free(self, mut disposal: Disposal<'_, V>) {
        for mut bucket in self.repr.lists {
            while let Ok(entry) = bucket.pop() {
                disposal.dispose(entry.value);
            }
            bucket.free(Disposal::Transfer);
        }
    }

    /// Cursor over all entries, bucket by bucket.
    pub fn cursor(&mut self) -> HashTableIterator<'_, V> {
        HashTableIterator::new(self)
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.repr.lists.iter(),
            chain: None,
            remaining: self.repr.len,
        }
    }

    pub(crate) fn bucket(&self, idx: usize) -> &Bucket<V> {
        &self.repr.lists[idx]
    }

    pub(crate) fn bucket_mut(&mut self, idx: usize) -> &mut Bucket<V> {
        &mut self.repr.lists[idx]
    }

    /// First non-empty bucket at or after `from`.
    pub(crate) fn next_occupied(&self, from: usize) -> Option<usize> {
        (from..self.num_buckets()).find(|&i| !self.repr.lists[i].is_empty())
    }

    /// Grow if the pre-insert element count has reached the policy ceiling.
    ///
    /// Entries are moved into a larger table through a cursor, then the two
    /// bucket arrays are swapped so this handle keeps its identity. The
    /// orphaned array holds no values by then and is torn down in transfer mode.
    fn maybe_resize(&mut self) {
        if !self.policy.should_grow(self.len(), self.num_buckets()) {
            return;
        }
        let expected = self.len();
        let mut fresh = HashTable::with_policy(self.policy.grown(self.num_buckets()), self.policy);

        let mut it = self.cursor();
        while let Some((key, value)) = it.remove() {
            let replaced = fresh.insert(key, value);
            debug_assert!(replaced.is_none(), "duplicate key {key:#x} during rehash");
        }
        debug_assert_eq!(fresh.len(), expected);

        core::mem::swap(&mut self.repr, &mut fresh.repr);
        fresh.free(Disposal::Transfer);
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for HashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = (Key, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(key, &value)` in bucket order, then chain order.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Bucket<V>>,
    chain: Option<linked_list::Iter<'a, Entry<V>>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.as_mut().and_then(|c| c.next()) {
                self.remaining -= 1;
                return Some((e.key, &e.value));
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {}
