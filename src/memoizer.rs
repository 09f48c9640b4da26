use std::collections::HashMap;
use std::hash::Hash;

/// Caches the results of a pure computation, one entry per distinct key.
///
/// The cache is unbounded: every distinct key ever requested stays cached for
/// the lifetime of the memoizer. Sharing one instance between threads requires
/// an external lock around [`get`](Memoizer::get), e.g. a
/// `Lazy<Mutex<Memoizer<..>>>`.
pub struct Memoizer<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    cache: HashMap<K, V>,
    compute: F,
}

impl<K, V, F> Memoizer<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    pub fn new(compute: F) -> Self {
        Self {
            cache: HashMap::new(),
            compute,
        }
    }

    /// Returns the value for `key`, computing it on the first request.
    /// The compute function runs at most once per distinct key.
    pub fn get(&mut self, key: K) -> V {
        if let Some(value) = self.cache.get(&key) {
            return value.clone();
        }
        let value = (self.compute)(&key);
        self.cache.insert(key, value.clone());
        value
    }

    /// Number of distinct keys cached so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Memoizer for fallible computations. An `Err` propagates to the caller and
/// is never cached, so a failed key is recomputed on the next request.
pub struct TryMemoizer<K, V, E, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> Result<V, E>,
{
    cache: HashMap<K, V>,
    compute: F,
}

impl<K, V, E, F> TryMemoizer<K, V, E, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> Result<V, E>,
{
    pub fn new(compute: F) -> Self {
        Self {
            cache: HashMap::new(),
            compute,
        }
    }

    pub fn get(&mut self, key: K) -> Result<V, E> {
        if let Some(value) = self.cache.get(&key) {
            return Ok(value.clone());
        }
        let value = (self.compute)(&key)?;
        self.cache.insert(key, value.clone());
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn computes_once_per_key() {
        let calls = Cell::new(0u32);
        let mut square = Memoizer::new(|x: &u64| {
            calls.set(calls.get() + 1);
            x * x
        });

        assert_eq!(square.get(4), 16);
        assert_eq!(square.get(4), 16);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn distinct_keys_are_cached_independently() {
        let calls = Cell::new(0u32);
        let mut square = Memoizer::new(|x: &u64| {
            calls.set(calls.get() + 1);
            x * x
        });

        assert_eq!(square.get(4), 16);
        assert_eq!(square.get(5), 25);
        assert_eq!(calls.get(), 2);
        assert_eq!(square.len(), 2);

        // both hits now
        assert_eq!(square.get(4), 16);
        assert_eq!(square.get(5), 25);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn starts_empty() {
        let memo = Memoizer::new(|x: &u64| x + 1);
        assert!(memo.is_empty());
    }

    #[test]
    fn failures_are_not_cached() {
        let calls = Cell::new(0u32);
        let mut parse = TryMemoizer::new(|s: &String| {
            calls.set(calls.get() + 1);
            s.parse::<u64>().map_err(|e| e.to_string())
        });

        assert!(parse.get("oops".to_string()).is_err());
        assert!(parse.get("oops".to_string()).is_err());
        assert_eq!(calls.get(), 2);
        assert!(parse.is_empty());

        assert_eq!(parse.get("42".to_string()), Ok(42));
        assert_eq!(parse.get("42".to_string()), Ok(42));
        assert_eq!(calls.get(), 3);
        assert_eq!(parse.len(), 1);
    }
}
