//! Basic memoization: default first-argument keys, cache inspection and
//! manual invalidation.
//!
//! Run with: `cargo run --example basic`

use memolito::memoize;

fn main() {
    let mut fib = memoize(|n: u64| {
        println!("  computing fib({n})...");
        (0..n).fold((0u64, 1u64), |(a, b), _| (b, a + b)).0
    });

    println!("first call:");
    println!("fib(40) = {}", fib.call(40));

    println!("second call (cached, no computation line):");
    println!("fib(40) = {}", fib.call(40));

    println!("cache holds the entry: {}", fib.cache().has(&40));

    fib.cache_mut().delete(&40);
    println!("after delete, the next call recomputes:");
    println!("fib(40) = {}", fib.call(40));

    #[cfg(feature = "stats")]
    println!(
        "hits: {}, misses: {}",
        fib.stats().hits(),
        fib.stats().misses()
    );
}
