use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// A key/value store usable as the backing cache of a memoized wrapper.
///
/// The memoized wrapper drives its backing store exclusively through this
/// trait, so any implementation can be substituted — per wrapper via
/// [`Memoized::with_store`](crate::Memoized::with_store), or process-wide
/// via the [`StoreRegistry`](crate::StoreRegistry).
///
/// # Contract
///
/// The wrapper only ever performs a lookup followed by, on a miss, a single
/// `set`. It never evicts, never overwrites a live entry, and never calls
/// `clear` on its own. Everything else (manual inserts, deletes, clearing,
/// wholesale replacement) is external mutation, and the wrapper must honor
/// it: the store is the single source of truth, not a shadow of one.
///
/// # Best-effort insertion
///
/// `set` is best-effort. An implementation is free to decline to retain a
/// key (a bounded store that is full, a store whose key discipline rejects
/// the value, ...). The wrapper treats an unretained key as a miss on every
/// subsequent call: the target is recomputed each time and no error is
/// raised. Substituting a store that cannot hold a wrapper's keys turns
/// that wrapper into a pass-through, not a failure.
///
/// # Examples
///
/// ```
/// use memolito::{CacheStore, InsertionOrderMap};
///
/// let mut store: InsertionOrderMap<u32, String> = InsertionOrderMap::new();
/// store.set(1, "one".to_string());
///
/// assert!(store.has(&1));
/// assert_eq!(store.get(&1), Some("one".to_string()));
/// assert!(store.delete(&1));
/// assert!(store.is_empty());
/// ```
pub trait CacheStore<K, V> {
    /// Returns `true` if a live entry exists for `key`.
    fn has(&self, key: &K) -> bool;

    /// Returns a clone of the value stored under `key`, if any.
    fn get(&self, key: &K) -> Option<V>;

    /// Inserts `value` under `key`, overwriting any previous value.
    ///
    /// Best-effort: an implementation may decline to retain the entry
    /// (see the trait-level docs).
    fn set(&mut self, key: K, value: V);

    /// Removes the entry for `key`. Returns `true` if an entry was removed.
    fn delete(&mut self, key: &K) -> bool;

    /// Number of live entries.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries.
    fn clear(&mut self);
}

/// The default backing store: a mapping that remembers insertion order.
///
/// Entries live in a `HashMap`, while a companion `VecDeque` records the
/// order in which keys were first inserted. Re-`set`ting an existing key
/// updates the value in place and keeps the key's original position in the
/// order queue, so [`keys`](InsertionOrderMap::keys) always yields keys
/// oldest-first.
///
/// Keys are compared by `Eq`/`Hash`; there is no size limit, no expiration
/// and no eviction.
///
/// # Examples
///
/// ```
/// use memolito::{CacheStore, InsertionOrderMap};
///
/// let mut store = InsertionOrderMap::new();
/// store.set("b", 2);
/// store.set("a", 1);
/// store.set("b", 20); // keeps its original position
///
/// let order: Vec<_> = store.keys().copied().collect();
/// assert_eq!(order, vec!["b", "a"]);
/// assert_eq!(store.get(&"b"), Some(20));
/// ```
#[derive(Debug, Clone)]
pub struct InsertionOrderMap<K, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
}

impl<K, V> InsertionOrderMap<K, V> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    /// Iterates over the keys in insertion order, oldest first.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }
}

impl<K, V> Default for InsertionOrderMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CacheStore<K, V> for InsertionOrderMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: K, value: V) {
        if self.entries.insert(key.clone(), value).is_none() {
            self.order.push_back(key);
        }
    }

    fn delete(&mut self, key: &K) -> bool {
        if self.entries.remove(key).is_some() {
            if let Some(pos) = self.order.iter().position(|k| k == key) {
                self.order.remove(pos);
            }
            true
        } else {
            false
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
