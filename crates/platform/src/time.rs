//! Clock and single-shot scheduling abstraction.
//!
//! The interaction core needs two things from the host's event loop: a
//! monotonic "now" for measuring how long a key has been held, and a way to
//! run one callback after a delay (the minimum-hold lamp timer). Both are
//! cooperative — nothing here blocks.

use core::time::Duration;

/// Monotonic millisecond timestamp.
///
/// Origin is arbitrary (host boot, adapter start); only differences matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant {
    millis: u64,
}

impl Instant {
    /// Construct from milliseconds since the host's arbitrary origin.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Milliseconds since the host's arbitrary origin.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.millis
    }

    /// Time elapsed since `earlier`. Saturates to zero if `earlier` is in
    /// the future (a host clock hiccup must not underflow).
    #[must_use]
    pub fn duration_since(self, earlier: Instant) -> Duration {
        Duration::from_millis(self.millis.saturating_sub(earlier.millis))
    }
}

/// Monotonic time source.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// Identity of one scheduled single-shot callback.
///
/// The host hands the handle back when the timer fires; the core compares it
/// against the one it is waiting for and ignores the rest. Stale-handle
/// ignoring *is* the cancellation story — there is no explicit cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wrap a host-assigned timer id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The host-assigned timer id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Single-shot deferred callback scheduling.
///
/// The host must arrange for the core's timer entry point to be invoked with
/// the returned handle once `delay` has elapsed, on the same logical thread
/// as pointer events.
pub trait Scheduler {
    /// Schedule one callback after `delay`. Handles must not repeat while a
    /// previously returned handle may still fire.
    fn schedule_after(&mut self, delay: Duration) -> TimerHandle;
}

#[cfg(test)]
mod tests {
    use super::Instant;
    use core::time::Duration;

    #[test]
    fn duration_since_measures_forward() {
        let a = Instant::from_millis(1_000);
        let b = Instant::from_millis(1_250);
        assert_eq!(b.duration_since(a), Duration::from_millis(250));
    }

    #[test]
    fn duration_since_saturates_backward() {
        let a = Instant::from_millis(1_000);
        let b = Instant::from_millis(400);
        assert_eq!(b.duration_since(a), Duration::ZERO);
    }
}
