use std::hash::Hash;
use std::marker::PhantomData;

use crate::keys::FirstArgKey;
use crate::registry::{BoxedStore, StoreRegistry};
use crate::store::CacheStore;

#[cfg(feature = "stats")]
use crate::stats::CallStats;

/// A memoizing wrapper around a function.
///
/// Built by [`memoize`], [`memoize_with`], [`memoize_result`] or
/// [`memoize_result_with`], a `Memoized` pairs a target function with a
/// key resolver and a backing [`CacheStore`]. Each [`call`](Memoized::call)
/// derives a key from the arguments, serves a live cache entry when one
/// exists, and otherwise invokes the target once and stores the result.
///
/// # The backing store is yours
///
/// The store is not encapsulated: [`cache`](Memoized::cache),
/// [`cache_mut`](Memoized::cache_mut) and [`set_cache`](Memoized::set_cache)
/// hand out the real thing, and subsequent calls reflect whatever was done
/// to it. Overwriting an entry changes what the wrapper returns for that
/// key without re-running the target; deleting an entry forces the next
/// call for that key to recompute; replacing the whole store starts the
/// wrapper cold. The wrapper only ever *adds* entries — it never evicts,
/// expires or overwrites on its own.
///
/// # Guarantees
///
/// For a fixed wrapper, two calls whose arguments resolve to the same key
/// invoke the target at most once, unless the entry for that key was
/// externally removed (or the store replaced) in between. The resolver, by
/// contrast, runs on **every** call, hit or miss. Panics from the target
/// or the resolver unwind through the wrapper unchanged and insert nothing.
///
/// # Threading
///
/// There is no internal locking: exclusive access is enforced by
/// `&mut self`, which statically rules out the racy
/// lookup-compute-insert interleaving a shared wrapper would allow. To
/// share a wrapper across threads, put it behind a lock of your choosing
/// (e.g. `parking_lot::Mutex`) — the wrapper itself picks no
/// synchronization discipline.
///
/// # Examples
///
/// ```
/// use memolito::memoize;
///
/// let mut double = memoize(|x: u32| x * 2);
/// assert_eq!(double.call(2), 4);
/// assert_eq!(double.call(2), 4); // served from cache
///
/// assert!(double.cache().has(&2));
/// assert_eq!(double.cache().get(&2), Some(4));
/// ```
pub struct Memoized<A, K, V, F, R> {
    target: F,
    resolver: R,
    cache: BoxedStore<K, V>,
    #[cfg(feature = "stats")]
    stats: CallStats,
    _args: PhantomData<fn(A)>,
}

/// Memoizes `target` with the default first-argument key.
///
/// The cache key of each call is the first positional argument (see
/// [`FirstArgKey`]): a bare argument keys on itself, a tuple of arguments
/// keys on its first element and ignores the rest. The wrapper's store
/// comes from the [`StoreRegistry`] as configured at this moment.
///
/// # Examples
///
/// ```
/// use memolito::memoize;
///
/// let mut double = memoize(|x: u32| x * 2);
/// assert_eq!(double.call(2), 4);
/// assert_eq!(double.call(3), 6);
/// ```
///
/// With a tuple argument, later fields do not participate in the key:
///
/// ```
/// use memolito::memoize;
///
/// let mut product = memoize(|(x, y): (u32, u32)| x * y);
/// assert_eq!(product.call((2, 3)), 6);
/// assert_eq!(product.call((2, 5)), 6); // same key: first element 2
/// ```
pub fn memoize<A, V, F>(target: F) -> Memoized<A, A::Key, V, F, fn(&A) -> A::Key>
where
    A: FirstArgKey,
    A::Key: Clone + Eq + Hash + 'static,
    V: Clone + 'static,
    F: FnMut(A) -> V,
{
    Memoized::new(target, first_arg_resolver::<A> as fn(&A) -> A::Key)
}

/// Memoizes `target` with an explicit key resolver.
///
/// `resolver` runs on every call — hit or miss — and maps the full
/// argument value to the cache key, so all arguments can participate.
///
/// # Examples
///
/// ```
/// use memolito::memoize_with;
///
/// let mut sum = memoize_with(
///     |(x, y): (i32, i32)| x + y,
///     |&(x, y)| format!("{x}-{y}"),
/// );
/// assert_eq!(sum.call((1, 2)), 3);
/// assert_eq!(sum.call((1, 2)), 3);
/// assert!(sum.cache().has(&"1-2".to_string()));
/// ```
pub fn memoize_with<A, K, V, F, R>(target: F, resolver: R) -> Memoized<A, K, V, F, R>
where
    K: Clone + Eq + Hash + 'static,
    V: Clone + 'static,
    F: FnMut(A) -> V,
    R: FnMut(&A) -> K,
{
    Memoized::new(target, resolver)
}

/// Memoizes a fallible `target`, caching only `Ok` payloads.
///
/// Drive the wrapper with [`try_call`](Memoized::try_call): an `Err` from
/// the target propagates to the caller and leaves no cache entry behind,
/// so the next call for that key retries.
///
/// # Examples
///
/// ```
/// use memolito::memoize_result;
///
/// let mut checked = memoize_result(|x: u32| {
///     if x == 0 {
///         Err("zero")
///     } else {
///         Ok(100 / x)
///     }
/// });
/// assert_eq!(checked.try_call(4), Ok(25));
/// assert_eq!(checked.try_call(0), Err("zero"));
/// assert!(!checked.cache().has(&0)); // failures are not cached
/// ```
pub fn memoize_result<A, V, E, F>(target: F) -> Memoized<A, A::Key, V, F, fn(&A) -> A::Key>
where
    A: FirstArgKey,
    A::Key: Clone + Eq + Hash + 'static,
    V: Clone + 'static,
    F: FnMut(A) -> Result<V, E>,
{
    Memoized::new(target, first_arg_resolver::<A> as fn(&A) -> A::Key)
}

/// Memoizes a fallible `target` with an explicit key resolver.
///
/// Combines [`memoize_result`] and [`memoize_with`]: only `Ok` payloads
/// are cached, and the resolver runs on every call.
pub fn memoize_result_with<A, K, V, E, F, R>(target: F, resolver: R) -> Memoized<A, K, V, F, R>
where
    K: Clone + Eq + Hash + 'static,
    V: Clone + 'static,
    F: FnMut(A) -> Result<V, E>,
    R: FnMut(&A) -> K,
{
    Memoized::new(target, resolver)
}

fn first_arg_resolver<A: FirstArgKey>(args: &A) -> A::Key {
    args.first_arg()
}

impl<A, K, V, F, R> Memoized<A, K, V, F, R>
where
    K: 'static,
    V: 'static,
{
    fn new(target: F, resolver: R) -> Self
    where
        K: Clone + Eq + Hash,
        V: Clone,
    {
        Self::from_parts(target, resolver, StoreRegistry::global().build::<K, V>())
    }

    /// Builds a wrapper over an explicit store, bypassing the registry.
    ///
    /// # Examples
    ///
    /// ```
    /// use memolito::{InsertionOrderMap, Memoized};
    ///
    /// let mut double = Memoized::with_store(
    ///     |x: u32| x * 2,
    ///     |x: &u32| *x,
    ///     InsertionOrderMap::new(),
    /// );
    /// assert_eq!(double.call(21), 42);
    /// ```
    pub fn with_store<S>(target: F, resolver: R, store: S) -> Self
    where
        S: CacheStore<K, V> + 'static,
    {
        Self::from_parts(target, resolver, Box::new(store))
    }

    fn from_parts(target: F, resolver: R, cache: BoxedStore<K, V>) -> Self {
        Self {
            target,
            resolver,
            cache,
            #[cfg(feature = "stats")]
            stats: CallStats::new(),
            _args: PhantomData,
        }
    }

    /// Calls the wrapped function through the cache.
    ///
    /// Derives the key via the resolver, serves a live entry if one exists,
    /// and otherwise invokes the target with the full argument value,
    /// stores the result under the key and returns it.
    pub fn call(&mut self, args: A) -> V
    where
        V: Clone,
        F: FnMut(A) -> V,
        R: FnMut(&A) -> K,
    {
        let key = (self.resolver)(&args);
        if let Some(hit) = self.cache.get(&key) {
            #[cfg(feature = "stats")]
            self.stats.record_hit();
            return hit;
        }
        #[cfg(feature = "stats")]
        self.stats.record_miss();

        let value = (self.target)(args);
        self.cache.set(key, value.clone());
        value
    }

    /// Calls a fallible wrapped function through the cache.
    ///
    /// A cached entry is returned as `Ok` without invoking the target. On
    /// a miss the target runs; an `Ok` payload is stored and returned,
    /// while an `Err` propagates unchanged and nothing is inserted.
    pub fn try_call<E>(&mut self, args: A) -> Result<V, E>
    where
        V: Clone,
        F: FnMut(A) -> Result<V, E>,
        R: FnMut(&A) -> K,
    {
        let key = (self.resolver)(&args);
        if let Some(hit) = self.cache.get(&key) {
            #[cfg(feature = "stats")]
            self.stats.record_hit();
            return Ok(hit);
        }
        #[cfg(feature = "stats")]
        self.stats.record_miss();

        let value = (self.target)(args)?;
        self.cache.set(key, value.clone());
        Ok(value)
    }

    /// Read access to the backing store.
    pub fn cache(&self) -> &dyn CacheStore<K, V> {
        self.cache.as_ref()
    }

    /// Mutable access to the backing store.
    ///
    /// Entries inserted, overwritten or deleted here are fully honored by
    /// subsequent calls.
    pub fn cache_mut(&mut self) -> &mut dyn CacheStore<K, V> {
        self.cache.as_mut()
    }

    /// Replaces the backing store wholesale.
    ///
    /// The wrapper continues with the new store's contents; previously
    /// cached results are gone with the old store.
    pub fn set_cache(&mut self, store: BoxedStore<K, V>) {
        self.cache = store;
    }

    /// Hit/miss counters for this wrapper.
    #[cfg(feature = "stats")]
    pub fn stats(&self) -> &CallStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InsertionOrderMap;

    #[test]
    fn test_call_caches_by_first_argument() {
        let mut calls = 0u32;
        let mut double = memoize(|x: u32| {
            calls += 1;
            x * 2
        });

        assert_eq!(double.call(2), 4);
        assert_eq!(double.call(2), 4);

        // The miss counter is the closure-invocation count.
        #[cfg(feature = "stats")]
        assert_eq!(double.stats().misses(), 1);
        assert_eq!(double.cache().len(), 1);
    }

    #[test]
    fn test_with_store_uses_the_given_store() {
        let mut seeded = InsertionOrderMap::new();
        seeded.set(7u32, 1000u32);

        let mut wrapped = Memoized::with_store(|x: u32| x * 2, |x: &u32| *x, seeded);
        assert_eq!(wrapped.call(7), 1000); // pre-seeded entry wins
        assert_eq!(wrapped.call(3), 6);
    }

    #[test]
    fn test_set_cache_resets_memoization() {
        let mut double = memoize(|x: u32| x * 2);
        assert_eq!(double.call(2), 4);
        assert!(double.cache().has(&2));

        double.set_cache(Box::new(InsertionOrderMap::new()));
        assert!(!double.cache().has(&2));
        assert_eq!(double.call(2), 4); // recomputed into the new store
    }

    #[test]
    fn test_try_call_propagates_err_without_caching() {
        let mut attempts = 0u32;
        let mut flaky = memoize_result(|x: u32| {
            attempts += 1;
            if x == 0 {
                Err("zero")
            } else {
                Ok(x + 1)
            }
        });

        assert_eq!(flaky.try_call(0), Err("zero"));
        assert_eq!(flaky.try_call(0), Err("zero")); // retried, not cached
        assert_eq!(flaky.try_call(5), Ok(6));
        assert_eq!(flaky.try_call(5), Ok(6)); // cached

        assert!(!flaky.cache().has(&0));
        assert!(flaky.cache().has(&5));
    }
}
