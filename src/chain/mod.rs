//! Chain of responsibility built from a sequence of handlers.
//!
//! A [`Chain`] captures an immutable list of handlers once. [`Chain::build`]
//! turns it into a single callable: each call walks the handlers from the
//! first, and every handler receives a [`Next`] continuation that it may
//! call to forward (possibly transformed) arguments to the following
//! handler, or ignore to produce the final result itself.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::chain::Next;
//! use seqkit::error::SequenceError;
//! use seqkit::sequence::Sequence;
//!
//! type Handler = fn(Next<'_, u32, String>, u32) -> Result<String, SequenceError>;
//!
//! fn small(next: Next<'_, u32, String>, value: u32) -> Result<String, SequenceError> {
//!     if value < 10 { Ok(format!("{value} is small")) } else { next.call(value) }
//! }
//!
//! fn large(_next: Next<'_, u32, String>, value: u32) -> Result<String, SequenceError> {
//!     Ok(format!("{value} is large"))
//! }
//!
//! let describe = Sequence::from(vec![small as Handler, large as Handler])
//!     .to_chain()
//!     .build(|handler, next, value| handler(next, value));
//!
//! assert_eq!(describe(3).unwrap(), "3 is small");
//! assert_eq!(describe(30).unwrap(), "30 is large");
//! ```

mod builder;

pub use builder::{Chain, Next};
