//! Source adaptation.
//!
//! Everything a [`Sequence`](crate::sequence::Sequence) pulls from is a
//! [`Cursor`]. This module provides the trait and the adapters that turn the
//! three accepted source shapes into one:
//!
//! - a raw pull cursor (any [`Cursor`] implementation, or a closure through
//!   [`FnCursor`]);
//! - an enumerable value (any [`IntoIterator`], through [`IterCursor`]);
//! - an array-like value with a length (any [`Indexable`], through
//!   [`IndexCursor`]).
//!
//! [`Source`] covers values whose shape is only known at runtime, and
//! [`SequenceExt`] adds `to_sequence` to every iterable at call sites that
//! import it.

mod cursor;
mod extension;
mod indexable;
mod probe;

pub use cursor::{Cursor, FnCursor, IterCursor};
pub use extension::SequenceExt;
pub use indexable::{IndexCursor, Indexable, Indexed};
pub use probe::Source;
