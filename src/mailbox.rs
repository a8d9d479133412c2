//! Event mailbox between interrupt handlers and the scheduler.
//!
//! The platform's interrupt handlers hold [`Poster`] handles and post edge
//! events; the scheduler drains them from application context. Built on
//! `critical-section` and `heapless::Deque`, so posting is safe from any
//! interrupt priority.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when posting to a full mailbox.
///
/// Carries the rejected event back to the poster. A full single-slot
/// mailbox means the consumer has not run since the previous event, which
/// under the latch handshake is a missed edge worth diagnosing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostError<T>(pub T);

/// A fixed-capacity event mailbox guarded by critical sections.
///
/// `DEPTH` is the number of undrained events the mailbox holds. The latch
/// handshake posts strictly alternating events, so a depth of 1 suffices
/// there and turns any pile-up into a visible [`PostError`].
pub struct Mailbox<T, const DEPTH: usize> {
    inner: Mutex<RefCell<Deque<T, DEPTH>>>,
}

impl<T, const DEPTH: usize> Mailbox<T, DEPTH> {
    /// Create a new empty mailbox.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a posting handle for an interrupt handler.
    ///
    /// Posters are plain copyable references; every handler can own one.
    pub const fn poster(&self) -> Poster<'_, T, DEPTH> {
        Poster { mailbox: self }
    }

    /// Get the draining handle for the consumer.
    pub const fn receiver(&self) -> Receiver<'_, T, DEPTH> {
        Receiver { mailbox: self }
    }

    /// Post an event.
    ///
    /// Returns `Err(PostError(event))` when the mailbox is full.
    pub fn post(&self, event: T) -> Result<(), PostError<T>> {
        critical_section::with(|cs| {
            let mut slots = self.inner.borrow(cs).borrow_mut();
            slots.push_back(event).map_err(PostError)
        })
    }

    /// Take the oldest posted event, if any.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }
}

impl<T, const DEPTH: usize> Default for Mailbox<T, DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

/// Posting handle for a [`Mailbox`].
#[derive(Clone, Copy)]
pub struct Poster<'a, T, const DEPTH: usize> {
    mailbox: &'a Mailbox<T, DEPTH>,
}

impl<T, const DEPTH: usize> Poster<'_, T, DEPTH> {
    /// Post an event.
    ///
    /// Returns `Err(PostError(event))` when the mailbox is full.
    pub fn post(&self, event: T) -> Result<(), PostError<T>> {
        self.mailbox.post(event)
    }
}

/// Draining handle for a [`Mailbox`].
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const DEPTH: usize> {
    mailbox: &'a Mailbox<T, DEPTH>,
}

impl<T, const DEPTH: usize> Receiver<'_, T, DEPTH> {
    /// Take the oldest posted event, if any.
    pub fn take(&self) -> Option<T> {
        self.mailbox.take()
    }
}
