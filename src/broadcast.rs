//! Motor Broadcasts
//!
//! Identification broadcasts that play on several motors at once:
//! a chirp-coded ID byte per motor and a plain single-tone beacon. Both
//! are started through a [`RequestLatch`] and run for a bounded number of
//! scheduler ticks over a set of motors.

pub mod beacon;
pub mod chirp_id;

/// One-shot start request
///
/// Set by whoever wants a broadcast, consumed exactly once by the
/// broadcaster that owns it on its next tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestLatch {
    pending: bool,
}

impl RequestLatch {
    /// Create a cleared latch
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Raise the request; repeated raises before consumption merge
    pub fn request(&mut self) {
        self.pending = true;
    }

    /// Consume the request, returning whether one was pending
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.pending)
    }

    /// Check whether a request is waiting
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }
}
