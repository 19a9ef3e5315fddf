use std::cell::Cell;
use std::rc::Rc;

use memolito::{
    memoize, memoize_result, memoize_result_with, memoize_with, CacheStore, InsertionOrderMap,
    Memoized,
};

/// Shared call counter for asserting how often a closure actually ran.
fn counter() -> (Rc<Cell<usize>>, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    (count.clone(), count)
}

#[test]
fn test_same_input_computes_once() {
    let (count, probe) = counter();
    let mut double = memoize(move |x: u32| {
        count.set(count.get() + 1);
        x * 2
    });

    assert_eq!(double.call(2), 4);
    assert_eq!(double.call(2), 4);
    assert_eq!(probe.get(), 1);
}

#[test]
fn test_distinct_inputs_compute_independently() {
    let (count, probe) = counter();
    let mut double = memoize(move |x: u32| {
        count.set(count.get() + 1);
        x * 2
    });

    assert_eq!(double.call(2), 4);
    assert_eq!(double.call(3), 6);
    assert_eq!(probe.get(), 2);
}

#[test]
fn test_resolver_runs_on_every_call() {
    let (calls, call_probe) = counter();
    let (resolutions, resolution_probe) = counter();

    let mut sum = memoize_with(
        move |(x, y): (i32, i32)| {
            calls.set(calls.get() + 1);
            x + y
        },
        move |&(x, y)| {
            resolutions.set(resolutions.get() + 1);
            format!("{x}-{y}")
        },
    );

    assert_eq!(sum.call((1, 2)), 3);
    assert_eq!(sum.call((1, 2)), 3);
    assert_eq!(call_probe.get(), 1);
    assert_eq!(resolution_probe.get(), 2);
}

#[test]
fn test_cache_is_exposed() {
    let mut double = memoize(|x: u32| x * 2);

    assert_eq!(double.call(2), 4);
    assert!(double.cache().has(&2));
    assert_eq!(double.cache().get(&2), Some(4));
    assert_eq!(double.cache().len(), 1);
}

#[test]
fn test_manual_overwrite_is_honored() {
    let (count, probe) = counter();
    let mut double = memoize(move |x: u32| {
        count.set(count.get() + 1);
        x * 2
    });

    assert_eq!(double.call(2), 4);
    double.cache_mut().set(2, 8);

    assert_eq!(double.call(2), 8);
    assert_eq!(probe.get(), 1); // target not re-run
}

#[test]
fn test_manual_delete_forces_recompute() {
    let (count, probe) = counter();
    let mut double = memoize(move |x: u32| {
        count.set(count.get() + 1);
        x * 2
    });

    assert_eq!(double.call(2), 4);
    assert!(double.cache_mut().delete(&2));
    assert!(!double.cache().has(&2));

    assert_eq!(double.call(2), 4);
    assert_eq!(probe.get(), 2);
}

#[test]
fn test_replacing_the_whole_cache_starts_cold() {
    let (count, probe) = counter();
    let mut double = memoize(move |x: u32| {
        count.set(count.get() + 1);
        x * 2
    });

    assert_eq!(double.call(2), 4);
    double.set_cache(Box::new(InsertionOrderMap::new()));

    assert_eq!(double.call(2), 4);
    assert_eq!(probe.get(), 2);
}

#[test]
fn test_default_key_ignores_later_tuple_fields() {
    let (count, probe) = counter();
    let mut product = memoize(move |(x, y): (u32, u32)| {
        count.set(count.get() + 1);
        x * y
    });

    assert_eq!(product.call((2, 3)), 6);
    // Same first element, so same key: the first result is served again.
    assert_eq!(product.call((2, 5)), 6);
    assert_eq!(probe.get(), 1);
}

#[test]
fn test_resolver_makes_all_arguments_participate() {
    let (count, probe) = counter();
    let mut product = memoize_with(
        move |(x, y): (u32, u32)| {
            count.set(count.get() + 1);
            x * y
        },
        |&(x, y)| (x, y),
    );

    assert_eq!(product.call((2, 3)), 6);
    assert_eq!(product.call((2, 5)), 10);
    assert_eq!(product.call((2, 3)), 6);
    assert_eq!(probe.get(), 2);
}

#[test]
fn test_string_arguments() {
    let mut shout = memoize(|s: String| s.to_uppercase());

    assert_eq!(shout.call("hola".to_string()), "HOLA");
    assert_eq!(shout.call("hola".to_string()), "HOLA");
    assert!(shout.cache().has(&"hola".to_string()));
}

#[test]
fn test_externally_seeded_entry_skips_computation() {
    let (count, probe) = counter();
    let mut double = memoize(move |x: u32| {
        count.set(count.get() + 1);
        x * 2
    });

    // An entry inserted from outside counts as a hit like any other.
    double.cache_mut().set(9, 1234);
    assert_eq!(double.call(9), 1234);
    assert_eq!(probe.get(), 0);
}

#[test]
fn test_fallible_target_caches_only_ok() {
    let (count, probe) = counter();
    let mut checked = memoize_result(move |x: u32| {
        count.set(count.get() + 1);
        if x == 0 {
            Err("division by zero")
        } else {
            Ok(100 / x)
        }
    });

    assert_eq!(checked.try_call(4), Ok(25));
    assert_eq!(checked.try_call(4), Ok(25));
    assert_eq!(probe.get(), 1);

    assert_eq!(checked.try_call(0), Err("division by zero"));
    assert_eq!(checked.try_call(0), Err("division by zero"));
    assert_eq!(probe.get(), 3); // failures retried every time
    assert!(!checked.cache().has(&0));
}

#[test]
fn test_fallible_target_with_resolver() {
    let mut lookup = memoize_result_with(
        |(table, id): (&str, u32)| {
            if table.is_empty() {
                Err("no table")
            } else {
                Ok(format!("{table}/{id}"))
            }
        },
        |&(table, id)| format!("{table}:{id}"),
    );

    assert_eq!(lookup.try_call(("users", 1)), Ok("users/1".to_string()));
    assert!(lookup.cache().has(&"users:1".to_string()));
    assert_eq!(lookup.try_call(("", 1)), Err("no table"));
    assert!(!lookup.cache().has(&":1".to_string()));
}

/// A store that never retains anything. Substituting it turns the wrapper
/// into a permanent-miss pass-through: every call recomputes, none fails.
struct DiscardingStore;

impl<K, V> CacheStore<K, V> for DiscardingStore {
    fn has(&self, _key: &K) -> bool {
        false
    }
    fn get(&self, _key: &K) -> Option<V> {
        None
    }
    fn set(&mut self, _key: K, _value: V) {}
    fn delete(&mut self, _key: &K) -> bool {
        false
    }
    fn len(&self) -> usize {
        0
    }
    fn clear(&mut self) {}
}

#[test]
fn test_store_that_declines_keys_means_permanent_miss() {
    let (count, probe) = counter();
    let mut double = Memoized::with_store(
        move |x: u32| {
            count.set(count.get() + 1);
            x * 2
        },
        |x: &u32| *x,
        DiscardingStore,
    );

    assert_eq!(double.call(2), 4);
    assert_eq!(double.call(2), 4);
    assert_eq!(double.call(2), 4);
    assert_eq!(probe.get(), 3);
    assert!(double.cache().is_empty());
}

#[cfg(feature = "stats")]
#[test]
fn test_stats_track_hits_and_misses() {
    let mut double = memoize(|x: u32| x * 2);

    double.call(2);
    double.call(2);
    double.call(3);
    double.call(2);

    let stats = double.stats();
    assert_eq!(stats.misses(), 2);
    assert_eq!(stats.hits(), 2);
    assert_eq!(stats.lookups(), 4);
    assert!((stats.hit_rate() - 0.5).abs() < 1e-9);
}
