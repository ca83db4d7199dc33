//! `to_sequence` for every iterable.

use crate::sequence::Sequence;

/// Adds [`to_sequence`](SequenceExt::to_sequence) to every iterable.
///
/// The method is only visible where the trait is imported; no std type is
/// modified.
///
/// # Examples
///
/// ```rust
/// use seqkit::source::SequenceExt;
/// use std::collections::BTreeSet;
///
/// let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
/// assert_eq!(set.to_sequence().map(|value, _| value * 10).to_vec(), vec![10, 20, 30]);
/// ```
pub trait SequenceExt<'a>: IntoIterator + Sized
where
    Self::IntoIter: 'a,
    Self::Item: 'a,
{
    /// Wraps this iterable into a [`Sequence`] without copying it.
    fn to_sequence(self) -> Sequence<'a, Self::Item> {
        Sequence::from_iterable(self)
    }
}

impl<'a, I> SequenceExt<'a> for I
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
{
}
