//! # Memolito
//!
//! A lightweight function-memoization library with pluggable cache stores.
//!
//! ## Features
//!
//! - **Simple wrappers**: [`memoize`] turns any function into a caching one
//! - **Flexible key derivation**: default first-argument keys, or a custom
//!   resolver that sees every argument
//! - **Open caches**: a wrapper's backing store is yours to inspect,
//!   mutate or replace at any time
//! - **Pluggable stores**: implement [`CacheStore`] once, substitute it per
//!   wrapper or process-wide via the [`StoreRegistry`]
//! - **Result-aware**: [`memoize_result`] caches only successful `Ok` values
//!
//! ## Quick Start
//!
//! ```rust
//! use memolito::memoize;
//!
//! let mut fib = memoize(|n: u64| {
//!     // pretend this is expensive
//!     (0..n).fold((0u64, 1u64), |(a, b), _| (b, a + b)).0
//! });
//!
//! // First call computes the result
//! let first = fib.call(40);
//! // Second call returns the cached result instantly
//! let second = fib.call(40);
//! assert_eq!(first, second);
//! ```
//!
//! ## Custom Key Resolution
//!
//! By default the cache key is the first argument (later tuple fields are
//! ignored). When every argument should participate, pass a resolver:
//!
//! ```rust
//! use memolito::memoize_with;
//!
//! let mut area = memoize_with(
//!     |(w, h): (u32, u32)| w * h,
//!     |&(w, h)| (w, h),
//! );
//! assert_eq!(area.call((2, 3)), 6);
//! assert_eq!(area.call((2, 5)), 10); // distinct key, recomputed
//! ```
//!
//! ## The Cache Is Not a Black Box
//!
//! ```rust
//! use memolito::memoize;
//!
//! let mut double = memoize(|x: u32| x * 2);
//! assert_eq!(double.call(2), 4);
//!
//! // Inspect...
//! assert!(double.cache().has(&2));
//! // ...override...
//! double.cache_mut().set(2, 8);
//! assert_eq!(double.call(2), 8); // no recomputation
//! // ...or invalidate.
//! double.cache_mut().delete(&2);
//! assert_eq!(double.call(2), 4); // recomputed
//! ```
//!
//! ## Substituting the Store
//!
//! New wrappers take their store from the process-wide [`StoreRegistry`];
//! wrappers that already exist keep the store they were built with. A
//! single wrapper can also be given a store directly with
//! [`Memoized::with_store`].
//!
//! ```rust
//! use memolito::{memoize, set_default_store, reset_default_store, InsertionOrderMap};
//!
//! set_default_store::<i64, i64, InsertionOrderMap<i64, i64>>();
//! let mut triple = memoize(|x: i64| x * 3);
//! assert_eq!(triple.call(3), 9);
//! reset_default_store::<i64, i64>();
//! ```

mod keys;
mod memoized;
mod store;

pub mod registry;
pub mod utils;

#[cfg(feature = "stats")]
mod stats;

pub use keys::FirstArgKey;
pub use memoized::{memoize, memoize_result, memoize_result_with, memoize_with, Memoized};
pub use registry::{BoxedStore, StoreRegistry};
pub use store::{CacheStore, InsertionOrderMap};

#[cfg(feature = "stats")]
pub use stats::CallStats;

/// Makes `S::default()` the backing store for wrappers over `K -> V`
/// constructed from now on.
///
/// Convenience for [`StoreRegistry::set_default`] on the global registry.
/// Wrappers constructed before the call keep their original store.
///
/// # Examples
///
/// ```rust
/// use memolito::{set_default_store, reset_default_store, InsertionOrderMap};
///
/// set_default_store::<u8, u8, InsertionOrderMap<u8, u8>>();
/// reset_default_store::<u8, u8>();
/// ```
pub fn set_default_store<K, V, S>()
where
    K: 'static,
    V: 'static,
    S: CacheStore<K, V> + Default + 'static,
{
    StoreRegistry::global().set_default::<K, V, S>()
}

/// Restores [`InsertionOrderMap`] as the backing store for future wrappers
/// over `K -> V`.
///
/// Convenience for [`StoreRegistry::reset`] on the global registry.
pub fn reset_default_store<K: 'static, V: 'static>() {
    StoreRegistry::global().reset::<K, V>()
}
