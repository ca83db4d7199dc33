//! Handler capture and the continuation that walks it.

use std::rc::Rc;

use crate::error::{ChainExhaustedError, SequenceError};
use crate::sequence::Sequence;
use crate::trace::debug_event;

/// Advances a call to the handler at `position`.
trait Link<A, R> {
    fn proceed(&self, position: usize, arguments: A) -> Result<R, SequenceError>;
}

/// Continuation handed to each handler.
///
/// Calling it forwards `arguments` to the next handler and returns that
/// handler's result. If no handler is left the call fails with
/// [`SequenceError::ChainExhausted`].
pub struct Next<'c, A, R> {
    link: &'c dyn Link<A, R>,
    position: usize,
}

impl<A, R> Next<'_, A, R> {
    /// Forwards to the next handler.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::ChainExhausted`] if this continuation belongs
    /// to the last handler, or whatever error the next handler returns.
    pub fn call(self, arguments: A) -> Result<R, SequenceError> {
        self.link.proceed(self.position, arguments)
    }

    /// Position of the handler this continuation leads to.
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<A, R> std::fmt::Debug for Next<'_, A, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Next")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

struct Links<H, F> {
    handlers: Rc<[H]>,
    invoke: F,
}

impl<H, A, R, F> Link<A, R> for Links<H, F>
where
    F: for<'c> Fn(&H, Next<'c, A, R>, A) -> Result<R, SequenceError>,
{
    fn proceed(&self, position: usize, arguments: A) -> Result<R, SequenceError> {
        let Some(handler) = self.handlers.get(position) else {
            debug_event!(handler_count = self.handlers.len(), "chain exhausted");
            return Err(ChainExhaustedError {
                handler_count: self.handlers.len(),
            }
            .into());
        };
        let next = Next {
            link: self,
            position: position + 1,
        };
        (self.invoke)(handler, next, arguments)
    }
}

/// An immutable, ordered list of handlers.
///
/// Cloning a chain shares the handler list.
pub struct Chain<H> {
    handlers: Rc<[H]>,
}

impl<H> Chain<H> {
    /// Captures `handlers` in order.
    pub fn new<I>(handlers: I) -> Self
    where
        I: IntoIterator<Item = H>,
    {
        Self {
            handlers: handlers.into_iter().collect(),
        }
    }

    /// Number of captured handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if there are no handlers.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// The captured handlers, in order.
    pub fn handlers(&self) -> &[H] {
        &self.handlers
    }

    /// Builds the chain into one callable.
    ///
    /// `invoke(handler, next, arguments)` defines how a handler is called.
    /// Every call of the returned function starts again from the first
    /// handler, so the function keeps no state between calls and remains
    /// usable after a call fails.
    ///
    /// Multiple arguments are passed as a tuple.
    pub fn build<A, R, F>(self, invoke: F) -> impl Fn(A) -> Result<R, SequenceError>
    where
        F: for<'c> Fn(&H, Next<'c, A, R>, A) -> Result<R, SequenceError>,
    {
        let links = Links {
            handlers: self.handlers,
            invoke,
        };
        move |arguments| links.proceed(0, arguments)
    }
}

impl<H> Clone for Chain<H> {
    fn clone(&self) -> Self {
        Self {
            handlers: Rc::clone(&self.handlers),
        }
    }
}

impl<H: std::fmt::Debug> std::fmt::Debug for Chain<H> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Chain")
            .field("handlers", &self.handlers)
            .finish()
    }
}

impl<'a, H: 'a> Sequence<'a, H> {
    /// Materializes the sequence into a [`Chain`] of handlers.
    pub fn to_chain(self) -> Chain<H> {
        Chain::new(self)
    }
}
