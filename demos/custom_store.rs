//! Substituting the backing store: a capacity-bounded store installed
//! process-wide, and the pass-through behavior of a store that declines
//! keys once full.
//!
//! Run with: `cargo run --example custom_store`

use memolito::{memoize, reset_default_store, CacheStore, InsertionOrderMap, StoreRegistry};

/// A store that retains at most `capacity` entries and silently declines
/// the rest. Declined keys are recomputed on every call — the wrapper
/// never errors over them.
struct BoundedStore<K, V> {
    inner: InsertionOrderMap<K, V>,
    capacity: usize,
}

impl<K, V> BoundedStore<K, V> {
    fn new(capacity: usize) -> Self {
        Self {
            inner: InsertionOrderMap::new(),
            capacity,
        }
    }
}

impl<K, V> CacheStore<K, V> for BoundedStore<K, V>
where
    K: Clone + Eq + std::hash::Hash,
    V: Clone,
{
    fn has(&self, key: &K) -> bool {
        self.inner.has(key)
    }
    fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key)
    }
    fn set(&mut self, key: K, value: V) {
        if self.inner.len() < self.capacity || self.inner.has(&key) {
            self.inner.set(key, value);
        }
    }
    fn delete(&mut self, key: &K) -> bool {
        self.inner.delete(key)
    }
    fn len(&self) -> usize {
        self.inner.len()
    }
    fn clear(&mut self) {
        self.inner.clear();
    }
}

fn main() {
    StoreRegistry::global().set_default_with::<u32, u32, _, _>(|| BoundedStore::new(2));

    let mut square = memoize(|x: u32| {
        println!("  computing {x}^2...");
        x * x
    });

    println!("filling the two retained slots:");
    square.call(1);
    square.call(2);

    println!("these are cached:");
    square.call(1);
    square.call(2);

    println!("the store is full, so 3 recomputes every time:");
    square.call(3);
    square.call(3);

    println!("retained entries: {}", square.cache().len());

    reset_default_store::<u32, u32>();
}
