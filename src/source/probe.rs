//! Dynamic capability probing.
//!
//! Statically typed inputs go through `Sequence::from_iterable`,
//! `Sequence::from_cursor` or `Sequence::from_indexable`. A [`Source`] is for
//! inputs whose shape is only known at runtime, such as values decoded from
//! a plugin boundary: it carries whichever capabilities the value exposes,
//! and adaptation picks one or fails.

use super::{Cursor, FnCursor, IndexCursor, Indexed, IterCursor};
use crate::error::InvalidSourceError;
use crate::trace::{debug_event, trace_event};

type BoxedIterator<'a, T> = Box<dyn Iterator<Item = T> + 'a>;
type PullFunction<'a, T> = Box<dyn FnMut() -> Option<T> + 'a>;
type Accessor<'a, T> = Box<dyn Fn(usize) -> T + 'a>;

/// A bag of optional capabilities describing a value to be adapted.
///
/// Adaptation precedence is iterable, then pull, then indexed. When none of
/// the three is present adaptation fails with [`InvalidSourceError`].
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::Sequence;
/// use seqkit::source::Source;
///
/// let source = Source::labeled("letters").with_indexed(3, |index| (b'a' + index as u8) as char);
/// let letters = Sequence::from_source(source).unwrap().to_vec();
/// assert_eq!(letters, vec!['a', 'b', 'c']);
///
/// let nothing = Source::<i32>::labeled("opaque");
/// assert!(Sequence::from_source(nothing).is_err());
/// ```
pub struct Source<'a, T> {
    label: Option<String>,
    iterable: Option<BoxedIterator<'a, T>>,
    pull: Option<PullFunction<'a, T>>,
    indexed: Option<(usize, Accessor<'a, T>)>,
}

impl<'a, T: 'a> Source<'a, T> {
    /// Creates a source with no capabilities.
    pub fn new() -> Self {
        Self {
            label: None,
            iterable: None,
            pull: None,
            indexed: None,
        }
    }

    /// Creates a source with no capabilities and a name used in errors.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new()
        }
    }

    /// Exposes an enumeration capability.
    #[must_use]
    pub fn with_iterable<I>(mut self, iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        self.iterable = Some(Box::new(iterable.into_iter()));
        self
    }

    /// Exposes a raw pull function.
    #[must_use]
    pub fn with_pull<F>(mut self, pull: F) -> Self
    where
        F: FnMut() -> Option<T> + 'a,
    {
        self.pull = Some(Box::new(pull));
        self
    }

    /// Exposes a length and positional accessor.
    #[must_use]
    pub fn with_indexed<F>(mut self, length: usize, accessor: F) -> Self
    where
        F: Fn(usize) -> T + 'a,
    {
        self.indexed = Some((length, Box::new(accessor)));
        self
    }

    /// Name attached to this source, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns `true` if at least one capability is present.
    pub const fn is_adaptable(&self) -> bool {
        self.iterable.is_some() || self.pull.is_some() || self.indexed.is_some()
    }

    pub(crate) fn into_cursor(self) -> Result<Box<dyn Cursor<Item = T> + 'a>, InvalidSourceError> {
        if let Some(iterator) = self.iterable {
            trace_event!(label = ?self.label, "adapting iterable source");
            return Ok(Box::new(IterCursor::new(iterator)));
        }
        if let Some(pull) = self.pull {
            trace_event!(label = ?self.label, "adapting pull source");
            return Ok(Box::new(FnCursor::new(pull)));
        }
        if let Some((length, accessor)) = self.indexed {
            trace_event!(label = ?self.label, length, "adapting indexed source");
            return Ok(Box::new(IndexCursor::new(Indexed::new(length, accessor))));
        }
        debug_event!(label = ?self.label, "rejected source without capabilities");
        Err(InvalidSourceError { label: self.label })
    }
}

impl<'a, T: 'a> Default for Source<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Source<'_, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Source")
            .field("label", &self.label)
            .field("iterable", &self.iterable.is_some())
            .field("pull", &self.pull.is_some())
            .field("indexed", &self.indexed.as_ref().map(|(length, _)| *length))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T>(mut cursor: Box<dyn Cursor<Item = T> + '_>) -> Vec<T> {
        let mut items = Vec::new();
        while let Some(item) = cursor.pull() {
            items.push(item);
        }
        items
    }

    #[test]
    fn test_iterable_wins_over_other_capabilities() {
        let source = Source::new()
            .with_indexed(1, |_| 0)
            .with_pull(|| Some(-1))
            .with_iterable(vec![1, 2]);
        assert_eq!(drain(source.into_cursor().unwrap()), vec![1, 2]);
    }

    #[test]
    fn test_pull_wins_over_indexed() {
        let mut remaining = 2;
        let source = Source::new().with_indexed(5, |index| index).with_pull(move || {
            if remaining == 0 {
                None
            } else {
                remaining -= 1;
                Some(remaining + 10)
            }
        });
        assert_eq!(drain(source.into_cursor().unwrap()), vec![11, 10]);
    }

    #[test]
    fn test_missing_capabilities_is_invalid() {
        let source = Source::<u8>::labeled("blob");
        assert!(!source.is_adaptable());
        let error = source.into_cursor().err().unwrap();
        assert_eq!(error.label.as_deref(), Some("blob"));
    }
}
