use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

/// Cache configuration for a sequence instance.
///
/// A cache is an insertion-only memo from index to element. It is bounded
/// by `capacity`: once it holds `capacity - 2` entries it freezes, after
/// which existing entries are still served but nothing new is stored.
/// There is no eviction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheConfig {
    capacity: Option<usize>,
}

impl CacheConfig {
    /// A configuration without caching.
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration without caching.
    pub fn disabled() -> Self {
        Self { capacity: None }
    }

    /// Cache up to (roughly) `capacity` entries, then freeze.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn is_enabled(&self) -> bool {
        self.capacity.is_some()
    }
}

impl From<Option<usize>> for CacheConfig {
    fn from(capacity: Option<usize>) -> Self {
        Self { capacity }
    }
}

/// A fill-once-then-freeze memo table.
#[derive(Debug, Clone)]
pub(crate) struct FreezingCache<K, V> {
    entries: HashMap<K, V>,
    config: CacheConfig,
    frozen: bool,
}

impl<K, V> FreezingCache<K, V>
where
    K: Eq + Hash,
{
    pub(crate) fn new(config: CacheConfig) -> Self {
        let mut cache = Self {
            entries: HashMap::new(),
            config,
            frozen: false,
        };
        cache.check_frozen();
        cache
    }

    /// A cache that starts out with `entries`.
    ///
    /// Seed entries are served even if the configuration disables caching,
    /// and they count towards the capacity.
    pub(crate) fn seeded(config: CacheConfig, entries: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut cache = Self {
            entries: entries.into_iter().collect(),
            config,
            frozen: false,
        };
        cache.check_frozen();
        cache
    }

    pub(crate) fn config(&self) -> CacheConfig {
        self.config
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether new entries are stored.
    pub(crate) fn is_accepting(&self) -> bool {
        self.config.is_enabled() && !self.frozen
    }

    #[cfg(test)]
    pub(crate) fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Store an entry if the cache still accepts entries.
    ///
    /// Returns whether it was stored. Existing entries are never replaced.
    pub(crate) fn insert(&mut self, key: K, value: V) -> bool {
        if !self.is_accepting() || self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, value);
        self.check_frozen();
        true
    }

    fn check_frozen(&mut self) {
        if self.frozen {
            return;
        }
        if let Some(capacity) = self.config.capacity() {
            if self.entries.len() >= capacity.saturating_sub(2) {
                self.frozen = true;
                tracing::debug!(
                    capacity,
                    entries = self.entries.len(),
                    "cache is full and is now frozen"
                );
            }
        }
    }
}
