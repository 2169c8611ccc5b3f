//! Memoized external assets.
//!
//! Color functions may sample textures, but loading them is somebody else's
//! job. [`TextureLoader`] is that seam; [`AssetCache`] makes sure each key is
//! loaded at most once. The first load of a key wins, and a failed load is
//! remembered as `None` and never retried.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

/// Opaque handle naming an asset, usually a path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetKey(String);

impl AssetKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for AssetKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

pub trait TextureLoader<T> {
    type Error: std::error::Error;

    /// # Errors
    ///
    /// Whatever the underlying loader reports; the cache logs it and stores
    /// a miss.
    fn load(&self, key: &AssetKey) -> Result<T, Self::Error>;
}

pub struct AssetCache<T> {
    entries: RwLock<HashMap<AssetKey, Option<Arc<T>>>>,
}

impl<T> Default for AssetCache<T> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> AssetCache<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached asset for `key`, loading it with `loader` on first
    /// use. `None` means the load failed, now or on an earlier call.
    pub fn get_or_load<L>(&self, key: &AssetKey, loader: &L) -> Option<Arc<T>>
    where
        L: TextureLoader<T> + ?Sized,
    {
        if let Some(entry) = self.entries.read().get(key) {
            return entry.clone();
        }

        let mut entries = self.entries.write();
        // another caller may have loaded it between the two locks
        if let Some(entry) = entries.get(key) {
            return entry.clone();
        }
        let loaded = match loader.load(key) {
            Ok(asset) => Some(Arc::new(asset)),
            Err(err) => {
                warn!(%key, error = %err, "asset failed to load");
                None
            }
        };
        entries.insert(key.clone(), loaded.clone());
        loaded
    }

    /// Cached asset without attempting a load.
    pub fn get(&self, key: &AssetKey) -> Option<Arc<T>> {
        self.entries.read().get(key).cloned().flatten()
    }

    /// Whether `key` has been attempted, successfully or not.
    pub fn contains(&self, key: &AssetKey) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, thiserror::Error)]
    #[error("missing asset")]
    struct Missing;

    struct CountingLoader {
        calls: AtomicUsize,
    }

    impl TextureLoader<String> for CountingLoader {
        type Error = Missing;

        fn load(&self, key: &AssetKey) -> Result<String, Missing> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if key.as_str().starts_with("missing") {
                Err(Missing)
            } else {
                Ok(key.as_str().to_uppercase())
            }
        }
    }

    #[test]
    fn loads_once_per_key() {
        let cache = AssetCache::new();
        let loader = CountingLoader {
            calls: AtomicUsize::new(0),
        };
        let key = AssetKey::from("floor.png");
        let first = cache.get_or_load(&key, &loader).unwrap();
        let second = cache.get_or_load(&key, &loader).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, "FLOOR.PNG");
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failures_are_cached_and_not_retried() {
        let cache: AssetCache<String> = AssetCache::new();
        let loader = CountingLoader {
            calls: AtomicUsize::new(0),
        };
        let key = AssetKey::from("missing.png");
        assert!(cache.get_or_load(&key, &loader).is_none());
        assert!(cache.get_or_load(&key, &loader).is_none());
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
        assert!(cache.contains(&key));
        assert!(cache.get(&key).is_none());
        assert_eq!(cache.len(), 1);
    }
}
