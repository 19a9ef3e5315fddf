use std::sync::atomic::{AtomicU64, Ordering};

/// Per-wrapper lookup counters (hits and misses).
///
/// Every wrapper call is either a hit (a live cache entry served the
/// result) or a miss (the target ran). On the fallible path a target
/// failure still counts as a miss, since the lookup did not find an entry.
///
/// Counters use relaxed atomics so they can be read through a shared
/// reference while the wrapper itself is driven through `&mut self`.
///
/// # Examples
///
/// ```
/// use memolito::memoize;
///
/// let mut double = memoize(|x: u32| x * 2);
/// double.call(2);
/// double.call(2);
/// double.call(3);
///
/// let stats = double.stats();
/// assert_eq!(stats.hits(), 1);
/// assert_eq!(stats.misses(), 2);
/// assert_eq!(stats.lookups(), 3);
/// ```
#[derive(Debug, Default)]
pub struct CallStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CallStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of calls answered from the cache.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of calls that invoked the target.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Total number of wrapper calls observed.
    #[inline]
    pub fn lookups(&self) -> u64 {
        self.hits() + self.misses()
    }

    /// Fraction of calls answered from the cache, `0.0` when unused.
    ///
    /// # Examples
    ///
    /// ```
    /// use memolito::CallStats;
    ///
    /// let stats = CallStats::new();
    /// assert_eq!(stats.hit_rate(), 0.0);
    /// ```
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.lookups();
        if lookups == 0 {
            0.0
        } else {
            self.hits() as f64 / lookups as f64
        }
    }

    /// Resets both counters to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl Clone for CallStats {
    fn clone(&self) -> Self {
        Self {
            hits: AtomicU64::new(self.hits()),
            misses: AtomicU64::new(self.misses()),
        }
    }
}
