#![forbid(unsafe_code)]

//! Trailing-edge coalescing for resize storms.
//!
//! Platforms deliver resize events at native drag frequency, unbounded.
//! Recomputing fit placement per event is idempotent and side-effect free,
//! so flooding is an inefficiency rather than a correctness hazard; this
//! module bounds the recomputation rate anyway.
//!
//! [`ResizeCoalescer`] absorbs resize events into a single pending slot and
//! releases the latest one after a quiet period with no further resizes.
//! All other events pass through immediately.
//!
//! # Design
//!
//! "Latest wins": every absorbed resize replaces the pending one and pushes
//! the release deadline out by the quiet period. Observable output is
//! unchanged relative to uncoalesced delivery: the final size a drag
//! settles on is always the one released.
//!
//! Time is injected explicitly (`now: Instant` parameters). The coalescer
//! never reads a clock, which keeps it deterministic under test.
//!
//! # Usage
//!
//! ```
//! use viewfit_core::coalescer::ResizeCoalescer;
//! use viewfit_core::event::ViewportEvent;
//! use web_time::{Duration, Instant};
//!
//! let mut coalescer = ResizeCoalescer::new(Duration::from_millis(50));
//! let t0 = Instant::now();
//!
//! // Resizes are absorbed; only the latest is pending.
//! assert!(coalescer.push(ViewportEvent::Resize { width: 800.0, height: 600.0 }, t0).is_none());
//! assert!(coalescer.push(ViewportEvent::Resize { width: 900.0, height: 600.0 }, t0).is_none());
//!
//! // Other events pass through immediately.
//! assert!(coalescer.push(ViewportEvent::Mounted, t0).is_some());
//!
//! // Nothing is released before the quiet period elapses.
//! assert!(coalescer.poll(t0).is_none());
//! let settled = coalescer.poll(t0 + Duration::from_millis(50)).unwrap();
//! assert_eq!(settled, ViewportEvent::Resize { width: 900.0, height: 600.0 });
//! ```

use crate::event::ViewportEvent;
use crate::geometry::Size;
use web_time::{Duration, Instant};

/// Default quiet period before a pending resize is released.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(50);

/// Coalesces resize events, releasing the latest after a quiet period.
///
/// A zero quiet period disables coalescing entirely: resizes pass through
/// `push` like any other event, restoring per-event recomputation.
///
/// # Thread Safety
///
/// `ResizeCoalescer` is not thread-safe. It is owned by a single event
/// processing loop.
#[derive(Debug, Clone)]
pub struct ResizeCoalescer {
    quiet_period: Duration,
    pending: Option<Size>,
    deadline: Option<Instant>,
}

impl ResizeCoalescer {
    /// Create a coalescer with the given quiet period.
    #[must_use]
    pub const fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
            deadline: None,
        }
    }

    /// Create a coalescer that passes every event through unchanged.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The configured quiet period.
    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Push an event into the coalescer.
    ///
    /// Returns `Some(event)` if the event should be processed immediately,
    /// or `None` if it was absorbed into the pending resize slot. Each
    /// absorbed resize replaces the pending one and extends the release
    /// deadline to `now + quiet_period`.
    pub fn push(&mut self, event: ViewportEvent, now: Instant) -> Option<ViewportEvent> {
        match event {
            ViewportEvent::Resize { width, height } if !self.quiet_period.is_zero() => {
                self.pending = Some(Size::new(width, height));
                self.deadline = Some(now + self.quiet_period);
                None
            }
            other => Some(other),
        }
    }

    /// Release the pending resize if its quiet period has elapsed.
    ///
    /// Callers poll on their own cadence (tick, frame, or timer); the
    /// coalescer only compares `now` against the stored deadline.
    pub fn poll(&mut self, now: Instant) -> Option<ViewportEvent> {
        match self.deadline {
            Some(deadline) if now >= deadline => self.take_pending(),
            _ => None,
        }
    }

    /// Release the pending resize immediately, ignoring the deadline.
    ///
    /// Use this on teardown or when the caller needs the settled size now
    /// (e.g. before a synchronous layout pass).
    pub fn flush(&mut self) -> Option<ViewportEvent> {
        self.take_pending()
    }

    /// Check if a resize is pending release.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The instant at which the pending resize becomes releasable.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Discard any pending resize without releasing it.
    pub fn clear(&mut self) {
        self.pending = None;
        self.deadline = None;
    }

    fn take_pending(&mut self) -> Option<ViewportEvent> {
        self.deadline = None;
        self.pending.take().map(ViewportEvent::resize)
    }
}

impl Default for ResizeCoalescer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}
