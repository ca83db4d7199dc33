//! Hasher selection for seen-sets and group indices.
//!
//! `fxhash` takes precedence over `ahash` when both features are enabled.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "fxhash")]
pub(crate) type BuildHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type BuildHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type BuildHasher = std::collections::hash_map::RandomState;

pub(crate) type FastHashSet<K> = HashSet<K, BuildHasher>;
pub(crate) type FastHashMap<K, V> = HashMap<K, V, BuildHasher>;

pub(crate) fn new_set<K>() -> FastHashSet<K> {
    HashSet::with_hasher(BuildHasher::default())
}

pub(crate) fn new_map<K, V>() -> FastHashMap<K, V> {
    HashMap::with_hasher(BuildHasher::default())
}
