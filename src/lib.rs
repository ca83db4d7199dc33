//! # seqkit
//!
//! Lazy, pull-based sequence combinators for Rust.
//!
//! ## Overview
//!
//! `seqkit` wraps any enumerable source into a [`Sequence`](sequence::Sequence)
//! and composes transformations over it without materializing intermediate
//! results. It includes:
//!
//! - **Source adaptation**: iterables, raw pull cursors, and array-like
//!   values with a length all become one [`Cursor`](source::Cursor)
//! - **Lazy transformations**: map, filter, take/skip (including negative
//!   counts), flatten, unique, chunk, interpose, interleave, splice, ...
//! - **Aggregators**: `to_vec`, `first`, `last`, `at`, `group_by`,
//!   `to_sorted_by`, `uniqueness`, custom folds
//! - **Chain of responsibility**: build one callable from an ordered list of
//!   handlers that forward through a `next` continuation
//!
//! Evaluation is single-threaded and synchronous. Early termination releases
//! the original source.
//!
//! ## Feature Flags
//!
//! - `chain`: Chain-of-responsibility builder
//! - `tracing`: Diagnostic events through the `tracing` crate
//! - `fxhash`: Use `rustc-hash` for seen-sets and group indices
//! - `ahash`: Use `ahash` for seen-sets and group indices
//! - `full`: Enable `chain` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let groups = vec!["apple", "banana", "apricot"]
//!     .to_sequence()
//!     .group_by(|word, _| word.as_bytes()[0]);
//!
//! assert_eq!(groups.get(&b'a'), Some(&["apple", "apricot"][..]));
//! assert_eq!(groups.get(&b'b'), Some(&["banana"][..]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use seqkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SequenceError;
    pub use crate::sequence::*;
    pub use crate::source::*;

    #[cfg(feature = "chain")]
    pub use crate::chain::*;
}

mod hash;
mod trace;

pub mod error;
pub mod sequence;
pub mod source;

#[cfg(feature = "chain")]
pub mod chain;
