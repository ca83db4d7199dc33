//! Lazy transformations.
//!
//! Each method consumes the receiver and returns a new [`Sequence`]. None of
//! them pulls anything until the returned sequence is pulled. The few that
//! must see the end of the source before yielding (`take` and `skip` with a
//! negative count, `splice` with a negative start) do their buffering on the
//! first pull.

use std::collections::VecDeque;
use std::hash::Hash;

use super::Sequence;
use super::adapters::{
    Chunk, ChunkWith, Compact, Concat, CycleTimes, DefaultIfEmpty, Deferred, Filter, FlatMap,
    Interleave, Interpose, InterposeWith, Map, Skip, SkipWhile, Splice, Take, TakeLast,
    TakeWhile, Unique, WithEach, ZipPair,
};

impl<'a, T: 'a> Sequence<'a, T> {
    // =========================================================================
    // Element-wise
    // =========================================================================

    /// Transforms each element. The closure also receives the element's
    /// zero-based position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let labelled = Sequence::from(vec!["a", "b"]).map(|value, index| format!("{index}:{value}"));
    /// assert_eq!(labelled.to_vec(), vec!["0:a", "1:b"]);
    /// ```
    pub fn map<U, F>(self, function: F) -> Sequence<'a, U>
    where
        U: 'a,
        F: FnMut(T, usize) -> U + 'a,
    {
        Sequence::wrap(Map {
            upstream: self,
            function,
            index: 0,
        })
    }

    /// Keeps elements for which `predicate` holds. The position passed to the
    /// predicate counts every source element, kept or not.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T, usize) -> bool + 'a,
    {
        Self::wrap(Filter {
            upstream: self,
            predicate,
            index: 0,
        })
    }

    /// Invokes `function` on each element as it passes through, unchanged.
    pub fn with_each<F>(self, function: F) -> Self
    where
        F: FnMut(&T, usize) + 'a,
    {
        Self::wrap(WithEach {
            upstream: self,
            function,
            index: 0,
        })
    }

    /// Maps each element to an iterable and yields the iterable's elements,
    /// flattening one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let expanded = Sequence::from(vec![1, 2, 3]).flat_map(|value, _| vec![value; value]);
    /// assert_eq!(expanded.to_vec(), vec![1, 2, 2, 3, 3, 3]);
    /// ```
    pub fn flat_map<I, F>(self, function: F) -> Sequence<'a, I::Item>
    where
        I: IntoIterator + 'a,
        I::IntoIter: 'a,
        I::Item: 'a,
        F: FnMut(T, usize) -> I + 'a,
    {
        Sequence::wrap(FlatMap::<T, I, F> {
            upstream: self,
            function,
            index: 0,
            current: None,
        })
    }

    /// Flattens one level of nesting.
    pub fn flatten(self) -> Sequence<'a, T::Item>
    where
        T: IntoIterator,
        T::IntoIter: 'a,
        T::Item: 'a,
    {
        self.flat_map(|inner, _| inner)
    }

    /// Keeps only the first occurrence of each element.
    ///
    /// The set of seen elements grows for as long as the sequence is
    /// consumed.
    pub fn unique(self) -> Self
    where
        T: Clone + Hash + Eq,
    {
        self.unique_by(T::clone)
    }

    /// Keeps only the first element for each key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let words = Sequence::from(vec!["apple", "avocado", "banana", "blueberry", "cherry"]);
    /// let first_per_letter = words.unique_by(|word| word.chars().next());
    /// assert_eq!(first_per_letter.to_vec(), vec!["apple", "banana", "cherry"]);
    /// ```
    pub fn unique_by<K, F>(self, key: F) -> Self
    where
        K: Hash + Eq + 'a,
        F: FnMut(&T) -> K + 'a,
    {
        Self::wrap(Unique::new(self, key))
    }

    // =========================================================================
    // Prefix and suffix selection
    // =========================================================================

    /// Takes a prefix or a suffix.
    ///
    /// A non-negative `count` yields the first `count` elements and stops
    /// without pulling any further; the source is released when the limit
    /// is reached. A negative `count` yields the last `|count|` elements,
    /// keeping a sliding window of that size while consuming the whole
    /// source on the first pull.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// assert_eq!(Sequence::from(vec![1, 2, 3, 4, 5]).take(2).to_vec(), vec![1, 2]);
    /// assert_eq!(Sequence::from(vec![1, 2, 3, 4, 5]).take(-2).to_vec(), vec![4, 5]);
    /// ```
    pub fn take(self, count: isize) -> Self {
        if count >= 0 {
            Self::wrap(Take {
                upstream: self,
                remaining: count.unsigned_abs(),
            })
        } else {
            Self::wrap(TakeLast {
                upstream: self,
                count: count.unsigned_abs(),
                window: None,
            })
        }
    }

    /// Skips a prefix or drops a suffix.
    ///
    /// A non-negative `count` skips the first `count` elements. A negative
    /// `count` drops the last `|count|` elements, which requires
    /// materializing the source on the first pull; dropping more elements
    /// than there are leaves nothing.
    pub fn skip(self, count: isize) -> Self {
        if count >= 0 {
            Self::wrap(Skip {
                upstream: self,
                pending: count.unsigned_abs(),
            })
        } else {
            let dropped = count.unsigned_abs();
            Self::wrap(Deferred::new(self, move |mut items: Vec<T>| {
                items.truncate(items.len().saturating_sub(dropped));
                items
            }))
        }
    }

    /// Yields elements while `predicate` holds, then stops and releases the
    /// source. The first failing element is consumed but not yielded.
    pub fn take_while<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T, usize) -> bool + 'a,
    {
        Self::wrap(TakeWhile {
            upstream: self,
            predicate,
            index: 0,
        })
    }

    /// Skips elements while `predicate` holds. The first failing element and
    /// everything after it are yielded without further tests.
    pub fn skip_while<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T, usize) -> bool + 'a,
    {
        Self::wrap(SkipWhile {
            upstream: self,
            predicate: Some(predicate),
            index: 0,
        })
    }

    // =========================================================================
    // Concatenation and merging
    // =========================================================================

    /// Yields the receiver, then `items`. `items` is not pulled until the
    /// receiver is exhausted.
    pub fn concat<I>(self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::wrap(Concat {
            head: self,
            tail: Self::from_iterable(items),
        })
    }

    /// Yields `items`, then the receiver.
    pub fn prepend_many<I>(self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::wrap(Concat {
            head: Self::from_iterable(items),
            tail: self,
        })
    }

    /// Yields the receiver, then `item`.
    pub fn append(self, item: T) -> Self {
        self.concat(std::iter::once(item))
    }

    /// Yields `item`, then the receiver.
    pub fn prepend(self, item: T) -> Self {
        self.prepend_many(std::iter::once(item))
    }

    /// Alternates elements of the receiver and `other`, receiver first. Once
    /// either side is exhausted the rest of the other is drained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let merged = Sequence::from(vec![1, 3]).interleave(vec![2, 4, 6, 8]);
    /// assert_eq!(merged.to_vec(), vec![1, 2, 3, 4, 6, 8]);
    /// ```
    pub fn interleave<I>(self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::wrap(Interleave {
            receiver: self,
            other: Self::from_iterable(other),
            other_turn: false,
        })
    }

    /// Pairs elements of the receiver with elements of `other`, stopping at
    /// the first step in which either side is exhausted. Both sides are
    /// pulled on every step.
    pub fn zip_with<U, I>(self, other: I) -> Sequence<'a, (T, U)>
    where
        U: 'a,
        I: IntoIterator<Item = U>,
        I::IntoIter: 'a,
    {
        Sequence::wrap(ZipPair {
            left: self,
            right: Sequence::from_iterable(other),
        })
    }

    // =========================================================================
    // Grouping
    // =========================================================================

    /// Groups consecutive elements into vectors of `size`. The last group
    /// holds the remainder and may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let chunks = Sequence::from(vec![1, 2, 3, 4, 5]).chunk(2);
    /// assert_eq!(chunks.to_vec(), vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// ```
    pub fn chunk(self, size: usize) -> Sequence<'a, Vec<T>> {
        assert!(size != 0, "chunk size must be non-zero");
        Sequence::wrap(Chunk {
            upstream: self,
            size,
        })
    }

    /// Groups runs of adjacent elements for which `comparer(previous, next)`
    /// holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let runs = Sequence::from(vec![1, 1, 2, 3, 3, 3, 2, 2]).chunk_with(|lhs, rhs| lhs == rhs);
    /// assert_eq!(runs.to_vec(), vec![vec![1, 1], vec![2], vec![3, 3, 3], vec![2, 2]]);
    /// ```
    pub fn chunk_with<F>(self, comparer: F) -> Sequence<'a, Vec<T>>
    where
        F: FnMut(&T, &T) -> bool + 'a,
    {
        Sequence::wrap(ChunkWith {
            upstream: self,
            comparer,
            pending: None,
        })
    }

    // =========================================================================
    // Insertion and replacement
    // =========================================================================

    /// Inserts `separator` between every pair of adjacent elements.
    pub fn interpose(self, separator: T) -> Self
    where
        T: Clone,
    {
        Self::wrap(Interpose {
            upstream: self,
            separator,
            pending: None,
            started: false,
        })
    }

    /// Inserts a computed separator between adjacent elements. The closure
    /// receives both neighbours and the zero-based index of the pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let midpoints = Sequence::from(vec![1.0, 2.0, 5.0]).interpose_with(|lhs, rhs, _| (lhs + rhs) / 2.0);
    /// assert_eq!(midpoints.to_vec(), vec![1.0, 1.5, 2.0, 3.5, 5.0]);
    /// ```
    pub fn interpose_with<F>(self, function: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T, usize) -> T + 'a,
    {
        Self::wrap(InterposeWith {
            upstream: self,
            function,
            previous: None,
            pending: None,
            index: 0,
        })
    }

    /// Removes `delete_count` elements starting at `start` and inserts
    /// `items` in their place.
    ///
    /// With a non-negative `start` this streams: `items` are emitted when
    /// position `start` is reached, so a `start` past the end of the source
    /// inserts nothing. A negative `start` counts from the end and requires
    /// materializing the source on the first pull.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let spliced = Sequence::from(vec![1, 2, 3, 4]).splice(1, 2, vec![5, 6]);
    /// assert_eq!(spliced.to_vec(), vec![1, 5, 6, 4]);
    ///
    /// let from_end = Sequence::from(vec![1, 2, 3, 4]).splice(-1, 1, vec![9]);
    /// assert_eq!(from_end.to_vec(), vec![1, 2, 3, 9]);
    /// ```
    pub fn splice(self, start: isize, delete_count: usize, items: Vec<T>) -> Self {
        if start >= 0 {
            return Self::wrap(Splice {
                upstream: self,
                start: start.unsigned_abs(),
                delete_count,
                items: Some(items),
                pending: VecDeque::new(),
                index: 0,
            });
        }
        let from_end = start.unsigned_abs();
        Self::wrap(Deferred::new(self, move |mut buffer: Vec<T>| {
            let begin = buffer.len().saturating_sub(from_end);
            let end = begin.saturating_add(delete_count).min(buffer.len());
            buffer.splice(begin..end, items);
            buffer
        }))
    }

    /// Replaces the element at `index` with `value`.
    pub fn with(self, index: isize, value: T) -> Self {
        self.splice(index, 1, vec![value])
    }

    /// Yields the single value returned by `provider` if the receiver turns
    /// out to be empty; otherwise yields the receiver unchanged.
    pub fn default_if_empty<F>(self, provider: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self::wrap(DefaultIfEmpty {
            upstream: self,
            provider: Some(provider),
        })
    }

    /// Yields the receiver `times` times over. The first pass streams while
    /// recording; later passes replay the recording.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let looped = Sequence::from(vec![1, 2]).cycle_times(3);
    /// assert_eq!(looped.to_vec(), vec![1, 2, 1, 2, 1, 2]);
    /// ```
    pub fn cycle_times(self, times: usize) -> Self
    where
        T: Clone,
    {
        Self::wrap(CycleTimes {
            upstream: self,
            times,
            recording: Vec::new(),
            replaying: false,
            pass: 0,
            position: 0,
        })
    }
}

impl<'a, T: 'a> Sequence<'a, Option<T>> {
    /// Drops absent elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let present = Sequence::from(vec![Some(1), None, Some(2)]).compact();
    /// assert_eq!(present.to_vec(), vec![1, 2]);
    /// ```
    pub fn compact(self) -> Sequence<'a, T> {
        Sequence::wrap(Compact { upstream: self })
    }
}
