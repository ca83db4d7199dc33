//! Cursor adapters behind the lazy transformations.
//!
//! Every adapter owns its upstream [`Sequence`] by move and forwards
//! `release` to it. The upstream `Sequence` guarantees release happens at
//! most once and never after natural exhaustion.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::hash::Hash;

use num_traits::{CheckedAdd, One, Zero};

use super::Sequence;
use crate::hash::{FastHashSet, new_set};
use crate::source::Cursor;
use crate::trace::trace_event;

// =============================================================================
// Element-wise
// =============================================================================

pub(super) struct Map<'a, T, F> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) function: F,
    pub(super) index: usize,
}

impl<'a, T: 'a, U, F: FnMut(T, usize) -> U> Cursor for Map<'a, T, F> {
    type Item = U;

    fn pull(&mut self) -> Option<U> {
        let item = self.upstream.pull()?;
        let index = self.index;
        self.index += 1;
        Some((self.function)(item, index))
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}

pub(super) struct Filter<'a, T, P> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) predicate: P,
    pub(super) index: usize,
}

impl<'a, T: 'a, P: FnMut(&T, usize) -> bool> Cursor for Filter<'a, T, P> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        loop {
            let item = self.upstream.pull()?;
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
                return Some(item);
            }
        }
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}

pub(super) struct WithEach<'a, T, F> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) function: F,
    pub(super) index: usize,
}

impl<'a, T: 'a, F: FnMut(&T, usize)> Cursor for WithEach<'a, T, F> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let item = self.upstream.pull()?;
        (self.function)(&item, self.index);
        self.index += 1;
        Some(item)
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}

pub(super) struct Compact<'a, T> {
    pub(super) upstream: Sequence<'a, Option<T>>,
}

impl<'a, T: 'a> Cursor for Compact<'a, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        loop {
            if let Some(item) = self.upstream.pull()? {
                return Some(item);
            }
        }
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}

pub(super) struct FlatMap<'a, T, I: IntoIterator, F> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) function: F,
    pub(super) index: usize,
    pub(super) current: Option<I::IntoIter>,
}

impl<'a, T: 'a, I, F> Cursor for FlatMap<'a, T, I, F>
where
    I: IntoIterator,
    F: FnMut(T, usize) -> I,
{
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.current = None;
            }
            let outer = self.upstream.pull()?;
            let index = self.index;
            self.index += 1;
            self.current = Some((self.function)(outer, index).into_iter());
        }
    }

    fn release(&mut self) {
        self.current = None;
        self.upstream.release();
    }
}

pub(super) struct Unique<'a, T, K, F> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) key: F,
    pub(super) seen: FastHashSet<K>,
}

impl<'a, T: 'a, K, F: FnMut(&T) -> K> Unique<'a, T, K, F> {
    pub(super) fn new(upstream: Sequence<'a, T>, key: F) -> Self {
        Self {
            upstream,
            key,
            seen: new_set(),
        }
    }
}

impl<'a, T: 'a, K: Hash + Eq, F: FnMut(&T) -> K> Cursor for Unique<'a, T, K, F> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        loop {
            let item = self.upstream.pull()?;
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}

// =============================================================================
// Prefix and suffix selection
// =============================================================================

pub(super) struct Take<'a, T> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) remaining: usize,
}

impl<'a, T: 'a> Cursor for Take<'a, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if self.remaining == 0 {
            self.upstream.release();
            return None;
        }
        self.remaining -= 1;
        self.upstream.pull()
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}

/// Keeps a sliding window of the last `count` elements.
pub(super) struct TakeLast<'a, T> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) count: usize,
    pub(super) window: Option<VecDeque<T>>,
}

impl<'a, T: 'a> Cursor for TakeLast<'a, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if self.window.is_none() {
            trace_event!(count = self.count, "buffering trailing window");
            let mut window = VecDeque::with_capacity(self.count.min(1024));
            while let Some(item) = self.upstream.pull() {
                window.push_back(item);
                if window.len() > self.count {
                    window.pop_front();
                }
            }
            self.window = Some(window);
        }
        self.window.as_mut()?.pop_front()
    }

    fn release(&mut self) {
        self.window = None;
        self.upstream.release();
    }
}

pub(super) struct Skip<'a, T> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) pending: usize,
}

impl<'a, T: 'a> Cursor for Skip<'a, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        while self.pending > 0 {
            self.pending -= 1;
            self.upstream.pull()?;
        }
        self.upstream.pull()
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}

pub(super) struct TakeWhile<'a, T, P> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) predicate: P,
    pub(super) index: usize,
}

impl<'a, T: 'a, P: FnMut(&T, usize) -> bool> Cursor for TakeWhile<'a, T, P> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let item = self.upstream.pull()?;
        let index = self.index;
        self.index += 1;
        if (self.predicate)(&item, index) {
            Some(item)
        } else {
            self.upstream.release();
            None
        }
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}

pub(super) struct SkipWhile<'a, T, P> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) predicate: Option<P>,
    pub(super) index: usize,
}

impl<'a, T: 'a, P: FnMut(&T, usize) -> bool> Cursor for SkipWhile<'a, T, P> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let Some(predicate) = self.predicate.as_mut() else {
            return self.upstream.pull();
        };
        loop {
            let item = self.upstream.pull()?;
            let index = self.index;
            self.index += 1;
            if !predicate(&item, index) {
                self.predicate = None;
                return Some(item);
            }
        }
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}

/// Materializes the upstream on first pull, rearranges it, then replays it.
pub(super) struct Deferred<'a, T, F> {
    pub(super) pending: Option<(Sequence<'a, T>, F)>,
    pub(super) ready: std::vec::IntoIter<T>,
}

impl<'a, T: 'a, F: FnOnce(Vec<T>) -> Vec<T>> Deferred<'a, T, F> {
    pub(super) fn new(upstream: Sequence<'a, T>, rearrange: F) -> Self {
        Self {
            pending: Some((upstream, rearrange)),
            ready: Vec::new().into_iter(),
        }
    }
}

impl<'a, T: 'a, F: FnOnce(Vec<T>) -> Vec<T>> Cursor for Deferred<'a, T, F> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if let Some((upstream, rearrange)) = self.pending.take() {
            let items = upstream.to_vec();
            trace_event!(length = items.len(), "materialized sequence for rearrangement");
            self.ready = rearrange(items).into_iter();
        }
        self.ready.next()
    }

    fn release(&mut self) {
        if let Some((mut upstream, _)) = self.pending.take() {
            upstream.release();
        }
        self.ready = Vec::new().into_iter();
    }
}

// =============================================================================
// Concatenation and merging
// =============================================================================

pub(super) struct Concat<'a, T> {
    pub(super) head: Sequence<'a, T>,
    pub(super) tail: Sequence<'a, T>,
}

impl<'a, T: 'a> Cursor for Concat<'a, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        self.head.pull().or_else(|| self.tail.pull())
    }

    fn release(&mut self) {
        self.head.release();
        self.tail.release();
    }
}

pub(super) struct Interleave<'a, T> {
    pub(super) receiver: Sequence<'a, T>,
    pub(super) other: Sequence<'a, T>,
    pub(super) other_turn: bool,
}

impl<'a, T: 'a> Cursor for Interleave<'a, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let (current, fallback) = if self.other_turn {
            (&mut self.other, &mut self.receiver)
        } else {
            (&mut self.receiver, &mut self.other)
        };
        self.other_turn = !self.other_turn;
        current.pull().or_else(|| fallback.pull())
    }

    fn release(&mut self) {
        self.receiver.release();
        self.other.release();
    }
}

pub(super) struct Zip<'a, T> {
    pub(super) operands: Vec<Sequence<'a, T>>,
}

impl<'a, T: 'a> Cursor for Zip<'a, T> {
    type Item = Vec<T>;

    fn pull(&mut self) -> Option<Vec<T>> {
        if self.operands.is_empty() {
            return None;
        }
        let mut group = Vec::with_capacity(self.operands.len());
        let mut exhausted = false;
        for operand in &mut self.operands {
            match operand.pull() {
                Some(item) => group.push(item),
                None => exhausted = true,
            }
        }
        if exhausted {
            self.release();
            None
        } else {
            Some(group)
        }
    }

    fn release(&mut self) {
        for operand in &mut self.operands {
            operand.release();
        }
    }
}

pub(super) struct ZipPair<'a, T, U> {
    pub(super) left: Sequence<'a, T>,
    pub(super) right: Sequence<'a, U>,
}

impl<'a, T: 'a, U: 'a> Cursor for ZipPair<'a, T, U> {
    type Item = (T, U);

    fn pull(&mut self) -> Option<(T, U)> {
        match (self.left.pull(), self.right.pull()) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => {
                self.release();
                None
            }
        }
    }

    fn release(&mut self) {
        self.left.release();
        self.right.release();
    }
}

// =============================================================================
// Grouping
// =============================================================================

pub(super) struct Chunk<'a, T> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) size: usize,
}

impl<'a, T: 'a> Cursor for Chunk<'a, T> {
    type Item = Vec<T>;

    fn pull(&mut self) -> Option<Vec<T>> {
        let first = self.upstream.pull()?;
        let mut chunk = Vec::with_capacity(self.size.min(1024));
        chunk.push(first);
        while chunk.len() < self.size {
            match self.upstream.pull() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }
        Some(chunk)
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}

pub(super) struct ChunkWith<'a, T, F> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) comparer: F,
    pub(super) pending: Option<T>,
}

impl<'a, T: 'a, F: FnMut(&T, &T) -> bool> Cursor for ChunkWith<'a, T, F> {
    type Item = Vec<T>;

    fn pull(&mut self) -> Option<Vec<T>> {
        let first = match self.pending.take() {
            Some(item) => item,
            None => self.upstream.pull()?,
        };
        let mut group = vec![first];
        while let Some(item) = self.upstream.pull() {
            let comparer = &mut self.comparer;
            if group.last().is_some_and(|last| comparer(last, &item)) {
                group.push(item);
            } else {
                self.pending = Some(item);
                break;
            }
        }
        Some(group)
    }

    fn release(&mut self) {
        self.pending = None;
        self.upstream.release();
    }
}

// =============================================================================
// Insertion
// =============================================================================

pub(super) struct Interpose<'a, T> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) separator: T,
    pub(super) pending: Option<T>,
    pub(super) started: bool,
}

impl<'a, T: Clone + 'a> Cursor for Interpose<'a, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        let item = self.upstream.pull()?;
        if self.started {
            self.pending = Some(item);
            Some(self.separator.clone())
        } else {
            self.started = true;
            Some(item)
        }
    }

    fn release(&mut self) {
        self.pending = None;
        self.upstream.release();
    }
}

pub(super) struct InterposeWith<'a, T, F> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) function: F,
    pub(super) previous: Option<T>,
    pub(super) pending: Option<T>,
    pub(super) index: usize,
}

impl<'a, T: Clone + 'a, F: FnMut(&T, &T, usize) -> T> Cursor for InterposeWith<'a, T, F> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if let Some(item) = self.pending.take() {
            self.previous = Some(item.clone());
            return Some(item);
        }
        let item = self.upstream.pull()?;
        match self.previous.take() {
            None => {
                self.previous = Some(item.clone());
                Some(item)
            }
            Some(previous) => {
                let separator = (self.function)(&previous, &item, self.index);
                self.index += 1;
                self.pending = Some(item);
                Some(separator)
            }
        }
    }

    fn release(&mut self) {
        self.pending = None;
        self.upstream.release();
    }
}

/// Streaming splice for a non-negative start.
pub(super) struct Splice<'a, T> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) start: usize,
    pub(super) delete_count: usize,
    pub(super) items: Option<Vec<T>>,
    pub(super) pending: VecDeque<T>,
    pub(super) index: usize,
}

impl<'a, T: 'a> Cursor for Splice<'a, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        loop {
            if let Some(item) = self.pending.pop_front() {
                return Some(item);
            }
            let item = self.upstream.pull()?;
            let index = self.index;
            self.index += 1;
            if index == self.start
                && let Some(items) = self.items.take()
            {
                self.pending.extend(items);
            }
            if index < self.start || index >= self.start.saturating_add(self.delete_count) {
                self.pending.push_back(item);
            }
        }
    }

    fn release(&mut self) {
        self.pending.clear();
        self.upstream.release();
    }
}

pub(super) struct DefaultIfEmpty<'a, T, F> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) provider: Option<F>,
}

impl<'a, T: 'a, F: FnOnce() -> T> Cursor for DefaultIfEmpty<'a, T, F> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        match self.upstream.pull() {
            Some(item) => {
                self.provider = None;
                Some(item)
            }
            None => self.provider.take().map(|provider| provider()),
        }
    }

    fn release(&mut self) {
        self.provider = None;
        self.upstream.release();
    }
}

/// Streams the first pass while recording it, then replays the recording.
pub(super) struct CycleTimes<'a, T> {
    pub(super) upstream: Sequence<'a, T>,
    pub(super) times: usize,
    pub(super) recording: Vec<T>,
    pub(super) replaying: bool,
    pub(super) pass: usize,
    pub(super) position: usize,
}

impl<'a, T: Clone + 'a> Cursor for CycleTimes<'a, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if self.times == 0 {
            self.upstream.release();
            return None;
        }
        if !self.replaying {
            if let Some(item) = self.upstream.pull() {
                self.recording.push(item.clone());
                return Some(item);
            }
            self.replaying = true;
            self.pass = 1;
        }
        while self.pass < self.times && !self.recording.is_empty() {
            if let Some(item) = self.recording.get(self.position) {
                self.position += 1;
                return Some(item.clone());
            }
            self.position = 0;
            self.pass += 1;
        }
        None
    }

    fn release(&mut self) {
        self.recording.clear();
        self.upstream.release();
    }
}

// =============================================================================
// Generators
// =============================================================================

/// Numeric types usable with [`Sequence::count`].
///
/// `Zero` and `One` supply the default start and interval. [`advance`]
/// returns `None` when the next value is not representable, which ends the
/// count instead of overflowing.
///
/// [`advance`]: Countable::advance
pub trait Countable: Copy + PartialOrd + Zero + One {
    /// The value `interval` steps after `self`, if representable.
    fn advance(self, interval: Self) -> Option<Self>;
}

macro_rules! checked_countable {
    ($($number:ty),* $(,)?) => {
        $(
            impl Countable for $number {
                #[inline]
                fn advance(self, interval: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &interval)
                }
            }
        )*
    };
}

checked_countable!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Countable for f32 {
    #[inline]
    fn advance(self, interval: Self) -> Option<Self> {
        Some(self + interval)
    }
}

impl Countable for f64 {
    #[inline]
    fn advance(self, interval: Self) -> Option<Self> {
        Some(self + interval)
    }
}

/// `current` is `None` once the next value overflowed.
pub(super) struct Count<N> {
    pub(super) current: Option<N>,
    pub(super) end: Option<N>,
    pub(super) interval: N,
}

impl<N: Countable> Cursor for Count<N> {
    type Item = N;

    fn pull(&mut self) -> Option<N> {
        let value = self.current?;
        // Unordered values such as NaN end the count.
        if let Some(end) = self.end
            && value.partial_cmp(&end) != Some(Ordering::Less)
        {
            self.current = None;
            return None;
        }
        self.current = value.advance(self.interval);
        Some(value)
    }
}
