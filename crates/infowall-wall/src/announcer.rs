#![forbid(unsafe_code)]

//! Debounced visibility announcements for assistive technology.
//!
//! The announcer owns two cancellable one-shot timers: the debounce
//! window between a visibility change and its announcement, and the
//! short self-clear of the live region after delivery. Emptying and
//! refilling the region is what lets screen readers perceive repeated
//! identical messages as distinct events.
//!
//! Time advances through explicit [`VisibilityAnnouncer::tick`] calls;
//! the host's event loop owns the real timer. Scheduling while a
//! previous announcement is pending replaces it, so only the final
//! settled state is ever announced.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use infowall_wall::announcer::{LiveRegionUpdate, VisibilityAnnouncer};
//!
//! let mut announcer = VisibilityAnnouncer::new(
//!     Duration::from_millis(500),
//!     Duration::from_millis(100),
//! );
//! announcer.schedule("Showing 3 of 5 items.".into());
//! announcer.schedule("Showing 4 of 5 items.".into()); // replaces the first
//!
//! let updates = announcer.tick(Duration::from_millis(500));
//! assert_eq!(
//!     updates.as_slice(),
//!     [LiveRegionUpdate::Announce("Showing 4 of 5 items.".into())]
//! );
//! assert_eq!(
//!     announcer.tick(Duration::from_millis(100)).as_slice(),
//!     [LiveRegionUpdate::Clear]
//! );
//! ```

use std::time::Duration;

use smallvec::SmallVec;

/// An effect to apply to the live-announcing text region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveRegionUpdate {
    /// Place this message into the region.
    Announce(String),
    /// Empty the region again.
    Clear,
}

/// Updates produced by one tick; at most a clear and an announce.
pub type LiveRegionUpdates = SmallVec<[LiveRegionUpdate; 2]>;

#[derive(Debug, Clone)]
struct Pending {
    remaining: Duration,
    text: String,
}

/// Debounces and delivers live-region announcements.
#[derive(Debug, Clone)]
pub struct VisibilityAnnouncer {
    delay: Duration,
    clear_delay: Duration,
    pending: Option<Pending>,
    clear_remaining: Option<Duration>,
}

impl VisibilityAnnouncer {
    /// Create an announcer with the given debounce and region-clear delays.
    pub fn new(delay: Duration, clear_delay: Duration) -> Self {
        Self {
            delay,
            clear_delay,
            pending: None,
            clear_remaining: None,
        }
    }

    /// Schedule `text` for delivery after the debounce window.
    ///
    /// Any previously pending announcement is cancelled and replaced;
    /// the countdown restarts from the full delay.
    pub fn schedule(&mut self, text: String) {
        self.pending = Some(Pending {
            remaining: self.delay,
            text,
        });
    }

    /// Cancel the pending announcement and any pending region clear.
    ///
    /// Call on teardown so no timer fires against a destroyed region.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.clear_remaining = None;
    }

    /// Whether an announcement is waiting for its debounce window.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance time by `delta` and collect due live-region updates.
    ///
    /// A due clear is emitted before a due announcement, so within one
    /// tick the region is emptied before it is refilled. The clear
    /// countdown for a freshly delivered announcement starts on the
    /// next tick.
    pub fn tick(&mut self, delta: Duration) -> LiveRegionUpdates {
        let mut updates = LiveRegionUpdates::new();

        if let Some(remaining) = self.clear_remaining {
            if remaining <= delta {
                self.clear_remaining = None;
                updates.push(LiveRegionUpdate::Clear);
            } else {
                self.clear_remaining = Some(remaining - delta);
            }
        }

        if let Some(mut pending) = self.pending.take() {
            if pending.remaining <= delta {
                updates.push(LiveRegionUpdate::Announce(pending.text));
                self.clear_remaining = Some(self.clear_delay);
            } else {
                pending.remaining -= delta;
                self.pending = Some(pending);
            }
        }

        updates
    }
}
