//! Grouping and sorting support for aggregators.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::hash::Hash;

use crate::hash::{FastHashMap, new_map};

/// An ordered mapping from key to the elements that produced it.
///
/// Keys keep the order in which they were first seen; elements inside each
/// group keep source order.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::Sequence;
///
/// let groups = Sequence::from(vec!["apple", "banana", "apricot"])
///     .group_by(|word, _| word.chars().next());
///
/// assert_eq!(groups.get(&Some('a')), Some(&["apple", "apricot"][..]));
/// assert_eq!(groups.keys().collect::<Vec<_>>(), vec![&Some('a'), &Some('b')]);
/// ```
#[derive(Clone)]
pub struct GroupMap<K, V> {
    entries: Vec<(K, Vec<V>)>,
    positions: FastHashMap<K, usize>,
}

impl<K, V> GroupMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: new_map(),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no element has been grouped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Groups in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.entries
            .iter()
            .map(|(key, values)| (key, values.as_slice()))
    }

    /// Consumes the map into its entries, in first-seen key order.
    pub fn into_vec(self) -> Vec<(K, Vec<V>)> {
        self.entries
    }
}

impl<K: Hash + Eq + Clone, V> GroupMap<K, V> {
    /// Appends `value` to the group for `key`, creating the group at the end
    /// if the key is new.
    pub fn push(&mut self, key: K, value: V) {
        if let Some(&position) = self.positions.get(&key) {
            self.entries[position].1.push(value);
        } else {
            self.positions.insert(key.clone(), self.entries.len());
            self.entries.push((key, vec![value]));
        }
    }

    /// Elements grouped under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&[V]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions
            .get(key)
            .map(|&position| self.entries[position].1.as_slice())
    }

    /// Returns `true` if `key` has a group.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(key)
    }
}

impl<K, V> Default for GroupMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> IntoIterator for GroupMap<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = std::vec::IntoIter<(K, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for GroupMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for GroupMap<K, V> {}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for GroupMap<K, V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_map()
            .entries(self.entries.iter().map(|(key, values)| (key, values)))
            .finish()
    }
}

type Comparator<'k, T> = Box<dyn Fn(&T, &T) -> Ordering + 'k>;

/// One ascending sort key for [`Sequence::to_sorted_by`](super::Sequence::to_sorted_by).
///
/// Keys compare with `PartialOrd`; values that are unordered relative to
/// each other (such as `NaN`) compare as equal and fall through to the next
/// key.
pub struct SortKey<'k, T> {
    comparator: Comparator<'k, T>,
}

impl<'k, T> SortKey<'k, T> {
    /// Sorts ascending by the value `extract` reads from each element.
    pub fn by<K, F>(extract: F) -> Self
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'k,
    {
        Self {
            comparator: Box::new(move |lhs, rhs| {
                extract(lhs)
                    .partial_cmp(&extract(rhs))
                    .unwrap_or(Ordering::Equal)
            }),
        }
    }

    pub(super) fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self.comparator)(lhs, rhs)
    }
}

impl<T> std::fmt::Debug for SortKey<'_, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("SortKey").finish_non_exhaustive()
    }
}
