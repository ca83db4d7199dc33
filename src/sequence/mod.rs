//! The lazy sequence type and its combinators.
//!
//! A [`Sequence`] owns exactly one upstream [`Cursor`]. Every transformation
//! consumes the receiver and returns a new `Sequence` whose cursor pulls from
//! the previous one, so a chain of combinators performs no work until the
//! final sequence is pulled or handed to an aggregator.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::sequence::{CountOptions, Sequence};
//!
//! let odd_squares = Sequence::count(CountOptions::<u64>::new())
//!     .filter(|value, _| value % 2 == 1)
//!     .map(|value, _| value * value)
//!     .take(3)
//!     .to_vec();
//! assert_eq!(odd_squares, vec![1, 9, 25]);
//! ```
//!
//! Operations that must see the end of the source before yielding buffer
//! only what they need:
//!
//! ```rust
//! use seqkit::sequence::Sequence;
//!
//! assert_eq!(Sequence::from(vec![1, 2, 3, 4, 5]).take(-2).to_vec(), vec![4, 5]);
//! assert_eq!(Sequence::from(vec![1, 2, 3, 4, 5]).skip(-2).to_vec(), vec![1, 2, 3]);
//! ```

mod adapters;
mod aggregate;
mod construct;
mod groups;
mod transform;

pub use adapters::Countable;
pub use construct::CountOptions;
pub use groups::{GroupMap, SortKey};

use crate::error::SequenceError;
use crate::source::{Cursor, IndexCursor, Indexable, IterCursor, Source};
use crate::trace::trace_event;

/// A lazy, single-pass, pull-based sequence.
///
/// `Sequence` is itself a [`Cursor`] and an [`Iterator`], so sequences nest
/// inside one another and interoperate with std adapters and `for` loops.
///
/// Once a pull reports exhaustion the sequence never touches its cursor
/// again: every later pull returns `None`. Dropping a sequence that has not
/// been exhausted releases its cursor, which propagates release down to the
/// original source.
///
/// A sequence is neither `Send` nor `Sync`; it is meant to be driven by one
/// consumer on one thread.
pub struct Sequence<'a, T> {
    cursor: Box<dyn Cursor<Item = T> + 'a>,
    finished: bool,
}

static_assertions::assert_not_impl_any!(Sequence<'static, i32>: Send, Sync);

impl<'a, T: 'a> Sequence<'a, T> {
    pub(crate) fn wrap<C>(cursor: C) -> Self
    where
        C: Cursor<Item = T> + 'a,
    {
        Self {
            cursor: Box::new(cursor),
            finished: false,
        }
    }

    /// Wraps a raw pull cursor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    /// use seqkit::source::FnCursor;
    ///
    /// let mut next = 0;
    /// let powers = Sequence::from_cursor(FnCursor::new(move || {
    ///     next += 1;
    ///     (next <= 4).then(|| 1 << next)
    /// }));
    /// assert_eq!(powers.to_vec(), vec![2, 4, 8, 16]);
    /// ```
    pub fn from_cursor<C>(cursor: C) -> Self
    where
        C: Cursor<Item = T> + 'a,
    {
        Self::wrap(cursor)
    }

    /// Wraps anything enumerable. Nothing is copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let words = ["a", "b"];
    /// assert_eq!(Sequence::from_iterable(words.iter()).to_vec(), vec![&"a", &"b"]);
    /// ```
    pub fn from_iterable<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::wrap(IterCursor::new(iterable.into_iter()))
    }

    /// Walks an array-like source by increasing position `0..length`.
    pub fn from_indexable<X>(indexable: X) -> Self
    where
        X: Indexable<Item = T> + 'a,
    {
        Self::wrap(IndexCursor::new(indexable))
    }

    /// Adapts a source whose capabilities are only known at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidSource`] when the source exposes no
    /// iterable, pull, or indexed capability.
    pub fn from_source(source: Source<'a, T>) -> Result<Self, SequenceError> {
        let cursor = source.into_cursor()?;
        Ok(Self {
            cursor,
            finished: false,
        })
    }
}

impl<T> Sequence<'_, T> {
    /// Pulls the next element, or `None` once exhausted.
    #[inline]
    pub fn pull(&mut self) -> Option<T> {
        if self.finished {
            return None;
        }
        let item = self.cursor.pull();
        if item.is_none() {
            self.finished = true;
        }
        item
    }

    /// Stops the sequence early and releases the underlying source.
    ///
    /// Has no effect on a sequence that is already exhausted or released.
    /// After release every pull returns `None`.
    pub fn release(&mut self) {
        if !self.finished {
            self.finished = true;
            trace_event!("releasing upstream cursor");
            self.cursor.release();
        }
    }

    /// Returns `true` once the sequence has been exhausted or released.
    #[inline]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<T> Cursor for Sequence<'_, T> {
    type Item = T;

    #[inline]
    fn pull(&mut self) -> Option<T> {
        Sequence::pull(self)
    }

    fn release(&mut self) {
        Sequence::release(self);
    }
}

impl<T> Iterator for Sequence<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.pull()
    }
}

impl<T> Drop for Sequence<'_, T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<'a, T: 'a> From<Vec<T>> for Sequence<'a, T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_iterable(items)
    }
}

impl<T> std::fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Sequence")
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
