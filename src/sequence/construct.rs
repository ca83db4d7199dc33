//! Construction primitives.

use num_traits::{One, Zero};

use super::Sequence;
use super::adapters::{Count, Countable, Zip};
use crate::source::IterCursor;

/// Bounds for [`Sequence::count`].
///
/// `start` defaults to `0`, `interval` to `1`, and `end` to unbounded.
///
/// Integer counts end early rather than overflow: once the next value is
/// not representable in `N`, the sequence is exhausted.
///
/// The interval is expected to be positive. A zero interval never advances,
/// and a negative interval walks away from `end`; both produce an infinite
/// sequence that the consumer must bound itself, for example with `take`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::{CountOptions, Sequence};
///
/// let odd = Sequence::count(CountOptions::new().start(5).interval(2)).take(3);
/// assert_eq!(odd.to_vec(), vec![5, 7, 9]);
///
/// let below_four = Sequence::count(CountOptions::up_to(4));
/// assert_eq!(below_four.to_vec(), vec![0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOptions<N> {
    /// First value produced.
    pub start: N,
    /// Exclusive upper bound, or `None` for an unbounded sequence.
    pub end: Option<N>,
    /// Step added after each value.
    pub interval: N,
}

impl<N: Countable> CountOptions<N> {
    /// Counts up from zero without bound.
    pub fn new() -> Self {
        Self {
            start: <N as Zero>::zero(),
            end: None,
            interval: <N as One>::one(),
        }
    }

    /// Counts `0, 1, ...` while below `end`.
    pub fn up_to(end: N) -> Self {
        Self::new().end(end)
    }

    /// Sets the first value.
    #[must_use]
    pub fn start(mut self, start: N) -> Self {
        self.start = start;
        self
    }

    /// Sets the exclusive upper bound.
    #[must_use]
    pub fn end(mut self, end: N) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the step.
    #[must_use]
    pub fn interval(mut self, interval: N) -> Self {
        self.interval = interval;
        self
    }
}

impl<N: Countable> Default for CountOptions<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, N: Countable + 'a> Sequence<'a, N> {
    /// Produces ascending numbers as described by `options`.
    pub fn count(options: CountOptions<N>) -> Self {
        Self::wrap(Count {
            current: Some(options.start),
            end: options.end,
            interval: options.interval,
        })
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// A sequence that is exhausted from the start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// assert!(Sequence::<u8>::empty().first().is_none());
    /// ```
    pub fn empty() -> Self {
        Self::wrap(IterCursor::new(std::iter::empty()))
    }

    /// Yields `value` exactly `count` times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// assert_eq!(Sequence::repeat(3, 'x').to_vec(), vec!['x', 'x', 'x']);
    /// assert!(Sequence::repeat(0, 'x').to_vec().is_empty());
    /// ```
    pub fn repeat(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::wrap(IterCursor::new(std::iter::repeat_n(value, count)))
    }

    /// Yields `value` forever.
    pub fn repeat_forever(value: T) -> Self
    where
        T: Clone,
    {
        Self::wrap(IterCursor::new(std::iter::repeat(value)))
    }

    /// Steps all operands together, yielding one group per step.
    ///
    /// Each step pulls one element from every operand, in order. The sequence
    /// ends at the first step in which any operand is exhausted, at which
    /// point the remaining operands are released. With no operands the
    /// result is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let zipped = Sequence::zip([
    ///     Sequence::from(vec![1, 2, 3]),
    ///     Sequence::from(vec![10, 20]),
    /// ]);
    /// assert_eq!(zipped.to_vec(), vec![vec![1, 10], vec![2, 20]]);
    /// ```
    pub fn zip<I>(operands: I) -> Sequence<'a, Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        Sequence::wrap(Zip {
            operands: operands.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_defaults() {
        let options: CountOptions<i64> = CountOptions::default();
        assert_eq!(options.start, 0);
        assert_eq!(options.end, None);
        assert_eq!(options.interval, 1);
    }

    #[test]
    fn test_count_with_float_interval() {
        let values = Sequence::count(CountOptions::new().end(1.0).interval(0.25)).to_vec();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_count_start_at_or_past_end_is_empty() {
        assert!(Sequence::count(CountOptions::new().start(3).end(3)).to_vec().is_empty());
        assert!(Sequence::count(CountOptions::new().start(9).end(3)).to_vec().is_empty());
    }

    #[test]
    fn test_count_stops_before_overflowing() {
        let bytes = Sequence::count(CountOptions::new().start(250_u8).end(255).interval(10)).to_vec();
        assert_eq!(bytes, vec![250]);

        let near_max =
            Sequence::count(CountOptions::new().start(i32::MAX - 1).end(i32::MAX).interval(2))
                .to_vec();
        assert_eq!(near_max, vec![i32::MAX - 1]);
    }

    #[test]
    fn test_unbounded_count_ends_at_type_maximum() {
        let tail = Sequence::count(CountOptions::new().start(253_u8)).to_vec();
        assert_eq!(tail, vec![253, 254, 255]);
    }

    #[test]
    fn test_count_with_nan_end_is_empty() {
        assert!(Sequence::count(CountOptions::up_to(f64::NAN)).to_vec().is_empty());
    }

    #[test]
    fn test_zip_without_operands_is_empty() {
        let zipped = Sequence::<i32>::zip(Vec::new());
        assert!(zipped.to_vec().is_empty());
    }
}
