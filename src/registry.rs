//! # Default-store registry
//!
//! Process-wide configuration of which [`CacheStore`] implementation newly
//! constructed wrappers receive.
//!
//! The registry is the one piece of process-scoped mutable state in this
//! crate. Its lifecycle is deliberately simple:
//!
//! - at process start every `(K, V)` pairing is unset, so new wrappers get
//!   an [`InsertionOrderMap`];
//! - [`set_default`](StoreRegistry::set_default) (or
//!   [`set_default_with`](StoreRegistry::set_default_with)) installs a
//!   constructor for one `(K, V)` pairing, affecting wrappers constructed
//!   **afterwards** only;
//! - [`reset`](StoreRegistry::reset) removes the override and restores the
//!   initial state.
//!
//! A wrapper consults the registry exactly once, when it is constructed.
//! Swapping the registered store never touches a live wrapper or its
//! entries.
//!
//! # Examples
//!
//! ```
//! use memolito::{memoize, InsertionOrderMap, StoreRegistry};
//!
//! StoreRegistry::global().set_default::<u32, u32, InsertionOrderMap<u32, u32>>();
//! let mut double = memoize(|x: u32| x * 2);
//! assert_eq!(double.call(4), 8);
//!
//! StoreRegistry::global().reset::<u32, u32>();
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::hash::Hash;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::store::{CacheStore, InsertionOrderMap};

/// A heap-allocated store driven through the [`CacheStore`] trait.
pub type BoxedStore<K, V> = Box<dyn CacheStore<K, V>>;

type StoreCtor<K, V> = Box<dyn Fn() -> BoxedStore<K, V> + Send + Sync>;

/// Registry of default store constructors, one slot per `(K, V)` pairing.
///
/// Constructors are registered under the `TypeId` of the `(K, V)` pair and
/// stored type-erased; [`build`](StoreRegistry::build) recovers the typed
/// constructor for the pairing it is asked for. Registration is fully
/// typed, so a registered constructor can never produce a store of the
/// wrong shape for its slot.
///
/// See the [module docs](self) for lifecycle and examples.
pub struct StoreRegistry {
    ctors: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl StoreRegistry {
    fn new() -> Self {
        Self {
            ctors: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the global registry instance.
    pub fn global() -> &'static StoreRegistry {
        static INSTANCE: Lazy<StoreRegistry> = Lazy::new(StoreRegistry::new);
        &INSTANCE
    }

    /// Makes `S::default()` the store for future `K -> V` wrappers.
    ///
    /// # Examples
    ///
    /// ```
    /// use memolito::{InsertionOrderMap, StoreRegistry};
    ///
    /// StoreRegistry::global().set_default::<String, u64, InsertionOrderMap<String, u64>>();
    /// StoreRegistry::global().reset::<String, u64>();
    /// ```
    pub fn set_default<K, V, S>(&self)
    where
        K: 'static,
        V: 'static,
        S: CacheStore<K, V> + Default + 'static,
    {
        self.set_default_with::<K, V, _, _>(S::default);
    }

    /// Makes `ctor()` the store for future `K -> V` wrappers.
    ///
    /// Use this when the store needs constructor arguments (a capacity, a
    /// seed value, ...) rather than `Default`.
    pub fn set_default_with<K, V, S, F>(&self, ctor: F)
    where
        K: 'static,
        V: 'static,
        S: CacheStore<K, V> + 'static,
        F: Fn() -> S + Send + Sync + 'static,
    {
        let boxed: StoreCtor<K, V> = Box::new(move || Box::new(ctor()) as BoxedStore<K, V>);
        self.ctors
            .write()
            .insert(TypeId::of::<(K, V)>(), Box::new(boxed));
    }

    /// Removes any override for `K -> V`, restoring [`InsertionOrderMap`].
    pub fn reset<K: 'static, V: 'static>(&self) {
        self.ctors.write().remove(&TypeId::of::<(K, V)>());
    }

    /// Constructs a fresh store for a `K -> V` wrapper.
    ///
    /// Returns whatever constructor is currently registered for the
    /// pairing, or an empty [`InsertionOrderMap`] when the slot is unset.
    pub fn build<K, V>(&self) -> BoxedStore<K, V>
    where
        K: Clone + Eq + Hash + 'static,
        V: Clone + 'static,
    {
        if let Some(erased) = self.ctors.read().get(&TypeId::of::<(K, V)>()) {
            if let Some(ctor) = erased.downcast_ref::<StoreCtor<K, V>>() {
                return ctor();
            }
        }
        Box::new(InsertionOrderMap::new())
    }
}
