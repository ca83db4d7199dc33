//! Terminal operations.
//!
//! Aggregators consume the sequence, fully or until they have their answer,
//! and produce a concrete value. A partially consumed sequence is released
//! when the aggregator drops it.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::{GroupMap, Sequence, SortKey};
use crate::hash::new_set;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Collects every remaining element.
    pub fn to_vec(mut self) -> Vec<T> {
        let mut items = Vec::new();
        while let Some(item) = self.pull() {
            items.push(item);
        }
        items
    }

    /// Pulls exactly one element.
    pub fn first(mut self) -> Option<T> {
        self.pull()
    }

    /// Consumes everything and returns the last element.
    pub fn last(mut self) -> Option<T> {
        let mut last = None;
        while let Some(item) = self.pull() {
            last = Some(item);
        }
        last
    }

    /// Consumes everything and returns how many elements there were.
    ///
    /// Named `tally` because [`Sequence::count`] builds a counting sequence;
    /// [`Iterator::count`] is also available.
    pub fn tally(mut self) -> usize {
        let mut tally = 0;
        while self.pull().is_some() {
            tally += 1;
        }
        tally
    }

    /// Element at `index`; negative indices count from the end.
    ///
    /// A non-negative index skips that many elements and takes the next one.
    /// `-1` is the last element. Smaller indices keep a trailing window of
    /// `|index|` elements and take the oldest, so an index reaching before
    /// the start of a non-empty sequence yields its first element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// assert_eq!(Sequence::from(vec![1, 2, 3]).at(1), Some(2));
    /// assert_eq!(Sequence::from(vec![1, 2, 3]).at(-1), Some(3));
    /// assert_eq!(Sequence::from(vec![1, 2, 3]).at(-3), Some(1));
    /// assert_eq!(Sequence::from(vec![1, 2, 3]).at(-4), Some(1));
    /// ```
    pub fn at(self, index: isize) -> Option<T> {
        match index {
            -1 => self.last(),
            index if index < 0 => self.take(index).at(0),
            index => self.skip(index).first(),
        }
    }

    /// Groups elements by key into a [`GroupMap`].
    pub fn group_by<K, F>(mut self, mut key: F) -> GroupMap<K, T>
    where
        K: Hash + Eq + Clone,
        F: FnMut(&T, usize) -> K,
    {
        let mut groups = GroupMap::new();
        let mut index = 0;
        while let Some(item) = self.pull() {
            groups.push(key(&item, index), item);
            index += 1;
        }
        groups
    }

    /// Groups elements by key into a [`HashMap`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let map = Sequence::from(vec![("a", 1), ("b", 2), ("a", 3)]).to_map(|(key, _), _| *key);
    /// assert_eq!(map["a"], vec![("a", 1), ("a", 3)]);
    /// assert_eq!(map["b"], vec![("b", 2)]);
    /// ```
    pub fn to_map<K, F>(mut self, mut key: F) -> HashMap<K, Vec<T>>
    where
        K: Hash + Eq,
        F: FnMut(&T, usize) -> K,
    {
        let mut map: HashMap<K, Vec<T>> = HashMap::new();
        let mut index = 0;
        while let Some(item) = self.pull() {
            map.entry(key(&item, index)).or_default().push(item);
            index += 1;
        }
        map
    }

    /// Collects distinct elements into a [`HashSet`].
    pub fn to_set(self) -> HashSet<T>
    where
        T: Hash + Eq,
    {
        self.collect_with(|sequence| sequence.collect())
    }

    /// Returns `true` if no two elements are equal. Stops at the first
    /// duplicate.
    pub fn uniqueness(self) -> bool
    where
        T: Hash + Eq,
    {
        let mut seen = new_set();
        for item in self {
            if !seen.insert(item) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if no two elements share a key. Stops at the first
    /// duplicate.
    pub fn uniqueness_by<K, F>(mut self, mut key: F) -> bool
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        let mut seen = new_set();
        while let Some(item) = self.pull() {
            if !seen.insert(key(&item)) {
                return false;
            }
        }
        true
    }

    /// Hands the sequence to an arbitrary reduction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let sum = Sequence::from(vec![1, 2, 3]).collect_with(|items| items.fold(0, |sum, value| sum + value));
    /// assert_eq!(sum, 6);
    /// ```
    pub fn collect_with<R, F>(self, reduce: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        reduce(self)
    }

    /// Materializes and sorts ascending by each key in turn. Later keys only
    /// break ties left by earlier ones, and elements equal under every key
    /// keep their source order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::{Sequence, SortKey};
    ///
    /// let people = Sequence::from(vec![('b', 30), ('c', 25), ('a', 25)]);
    /// let sorted = people.to_sorted_by([
    ///     SortKey::by(|person: &(char, u32)| person.1),
    ///     SortKey::by(|person: &(char, u32)| person.0),
    /// ]);
    /// assert_eq!(sorted, vec![('a', 25), ('c', 25), ('b', 30)]);
    /// ```
    pub fn to_sorted_by<'k, I>(self, keys: I) -> Vec<T>
    where
        I: IntoIterator<Item = SortKey<'k, T>>,
    {
        let keys: Vec<SortKey<'k, T>> = keys.into_iter().collect();
        let mut items = self.to_vec();
        items.sort_by(|lhs, rhs| {
            keys.iter()
                .map(|key| key.compare(lhs, rhs))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        items
    }
}
