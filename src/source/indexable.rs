//! Array-like sources: a length plus access by position.

use super::Cursor;

/// An array-like source: a numeric length plus access by integer position.
///
/// Iteration over an `Indexable` visits `0..length()` in increasing order and
/// never relies on an enumeration capability, so sparse shapes are natural:
/// an implementation with `Item = Option<T>` reports holes as `None`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::Sequence;
/// use seqkit::source::Indexable;
///
/// struct Sparse;
///
/// impl Indexable for Sparse {
///     type Item = Option<&'static str>;
///
///     fn length(&self) -> usize {
///         3
///     }
///
///     fn item_at(&self, index: usize) -> Self::Item {
///         (index != 1).then_some("set")
///     }
/// }
///
/// let items = Sequence::from_indexable(Sparse).to_vec();
/// assert_eq!(items, vec![Some("set"), None, Some("set")]);
/// ```
pub trait Indexable {
    /// The type of the element at each position.
    type Item;

    /// Number of positions.
    fn length(&self) -> usize;

    /// Element at `index`. Only called with `index < self.length()`.
    fn item_at(&self, index: usize) -> Self::Item;
}

impl<T: Clone> Indexable for [T] {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn item_at(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone> Indexable for Vec<T> {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn item_at(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone, const N: usize> Indexable for [T; N] {
    type Item = T;

    fn length(&self) -> usize {
        N
    }

    fn item_at(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<X: Indexable + ?Sized> Indexable for &X {
    type Item = X::Item;

    fn length(&self) -> usize {
        (**self).length()
    }

    fn item_at(&self, index: usize) -> X::Item {
        (**self).item_at(index)
    }
}

/// An [`Indexable`] assembled from a length and an accessor closure.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::Sequence;
/// use seqkit::source::Indexed;
///
/// let squares = Sequence::from_indexable(Indexed::new(4, |index| index * index));
/// assert_eq!(squares.to_vec(), vec![0, 1, 4, 9]);
/// ```
#[derive(Clone)]
pub struct Indexed<F> {
    length: usize,
    accessor: F,
}

impl<F> Indexed<F> {
    /// Creates an indexed view of `length` positions.
    pub const fn new(length: usize, accessor: F) -> Self {
        Self { length, accessor }
    }
}

impl<T, F: Fn(usize) -> T> Indexable for Indexed<F> {
    type Item = T;

    fn length(&self) -> usize {
        self.length
    }

    fn item_at(&self, index: usize) -> T {
        (self.accessor)(index)
    }
}

impl<F> std::fmt::Debug for Indexed<F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Indexed")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

/// Cursor over an [`Indexable`], by increasing position.
///
/// The length is read on every pull, so an indexable whose length shrinks
/// while being walked stops early instead of reading past the end.
#[derive(Debug, Clone)]
pub struct IndexCursor<X> {
    source: Option<X>,
    position: usize,
}

impl<X: Indexable> IndexCursor<X> {
    /// Starts at position zero.
    pub const fn new(source: X) -> Self {
        Self {
            source: Some(source),
            position: 0,
        }
    }
}

impl<X: Indexable> Cursor for IndexCursor<X> {
    type Item = X::Item;

    fn pull(&mut self) -> Option<X::Item> {
        let source = self.source.as_ref()?;
        if self.position >= source.length() {
            return None;
        }
        let item = source.item_at(self.position);
        self.position += 1;
        Some(item)
    }

    fn release(&mut self) {
        self.source = None;
    }
}
