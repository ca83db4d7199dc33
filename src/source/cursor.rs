//! The pull capability every sequence is built on.

/// Minimal pull-based production capability.
///
/// A cursor produces its next element with [`pull`](Cursor::pull) and
/// signals exhaustion with `None`. Pulling advances irreversibly; there is no
/// rewind. A cursor has exactly one owner at a time.
///
/// [`release`](Cursor::release) lets a consumer that abandons the cursor
/// early hand back resources held by the underlying source. It is called at
/// most once, and never after the cursor has reported exhaustion.
///
/// # Examples
///
/// ```rust
/// use seqkit::source::Cursor;
///
/// struct Countdown(u32);
///
/// impl Cursor for Countdown {
///     type Item = u32;
///
///     fn pull(&mut self) -> Option<u32> {
///         if self.0 == 0 {
///             None
///         } else {
///             self.0 -= 1;
///             Some(self.0 + 1)
///         }
///     }
/// }
///
/// let mut countdown = Countdown(2);
/// assert_eq!(countdown.pull(), Some(2));
/// assert_eq!(countdown.pull(), Some(1));
/// assert_eq!(countdown.pull(), None);
/// ```
pub trait Cursor {
    /// The type of the produced elements.
    type Item;

    /// Produces the next element, or `None` once exhausted.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Releases resources held by the source after early termination.
    fn release(&mut self) {}
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    #[inline]
    fn pull(&mut self) -> Option<Self::Item> {
        (**self).pull()
    }

    #[inline]
    fn release(&mut self) {
        (**self).release();
    }
}

/// Adapts a std iterator to [`Cursor`].
///
/// Releasing drops the iterator, so whatever it borrows or owns is freed
/// immediately rather than when the sequence is dropped.
#[derive(Debug, Clone)]
pub struct IterCursor<I> {
    iterator: Option<I>,
}

impl<I: Iterator> IterCursor<I> {
    /// Wraps an iterator.
    #[inline]
    pub const fn new(iterator: I) -> Self {
        Self {
            iterator: Some(iterator),
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    #[inline]
    fn pull(&mut self) -> Option<Self::Item> {
        self.iterator.as_mut()?.next()
    }

    fn release(&mut self) {
        self.iterator = None;
    }
}

/// A cursor driven by a closure.
///
/// The closure is dropped on release.
pub struct FnCursor<F> {
    function: Option<F>,
}

impl<F> FnCursor<F> {
    /// Wraps a pull function.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            function: Some(function),
        }
    }
}

impl<T, F: FnMut() -> Option<T>> Cursor for FnCursor<F> {
    type Item = T;

    #[inline]
    fn pull(&mut self) -> Option<T> {
        (self.function.as_mut()?)()
    }

    fn release(&mut self) {
        self.function = None;
    }
}

impl<F> std::fmt::Debug for FnCursor<F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FnCursor")
            .field("released", &self.function.is_none())
            .finish()
    }
}
