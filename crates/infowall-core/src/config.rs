#![forbid(unsafe_code)]

//! Behaviour configuration, read once at construction.

use std::time::Duration;

use crate::matcher::FilterMode;

/// Debounce window before a visibility change is announced.
pub const ANNOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Delay before the live region is emptied again after an announcement,
/// so repeated identical messages register as distinct events.
pub const REGION_CLEAR_DELAY: Duration = Duration::from_millis(100);

/// Wall behaviour settings. Immutable after construction.
#[derive(Debug, Clone)]
pub struct WallBehaviour {
    /// How per-word match results aggregate per panel.
    pub filter_mode: FilterMode,
    /// Whether visible panels get alternating background flags.
    pub alternate_background: bool,
    /// Whether the host should offer the filter field at all.
    pub offer_filter_field: bool,
    /// Debounce window for visibility announcements.
    pub announce_delay: Duration,
    /// Self-clear delay for the live region after delivery.
    pub region_clear_delay: Duration,
}

impl Default for WallBehaviour {
    fn default() -> Self {
        Self {
            filter_mode: FilterMode::Any,
            alternate_background: true,
            offer_filter_field: true,
            announce_delay: ANNOUNCE_DELAY,
            region_clear_delay: REGION_CLEAR_DELAY,
        }
    }
}

impl WallBehaviour {
    /// Create the default behaviour.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter mode (builder).
    pub fn filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }

    /// Enable or disable background alternation (builder).
    pub fn alternate_background(mut self, alternate: bool) -> Self {
        self.alternate_background = alternate;
        self
    }

    /// Enable or disable the filter field offer (builder).
    pub fn offer_filter_field(mut self, offer: bool) -> Self {
        self.offer_filter_field = offer;
        self
    }

    /// Set the announcement debounce window (builder).
    pub fn announce_delay(mut self, delay: Duration) -> Self {
        self.announce_delay = delay;
        self
    }

    /// Set the live-region self-clear delay (builder).
    pub fn region_clear_delay(mut self, delay: Duration) -> Self {
        self.region_clear_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let behaviour = WallBehaviour::default();
        assert_eq!(behaviour.filter_mode, FilterMode::Any);
        assert!(behaviour.alternate_background);
        assert!(behaviour.offer_filter_field);
        assert_eq!(behaviour.announce_delay, Duration::from_millis(500));
        assert_eq!(behaviour.region_clear_delay, Duration::from_millis(100));
    }

    #[test]
    fn builders_override() {
        let behaviour = WallBehaviour::new()
            .filter_mode(FilterMode::All)
            .alternate_background(false)
            .announce_delay(Duration::from_millis(50));
        assert_eq!(behaviour.filter_mode, FilterMode::All);
        assert!(!behaviour.alternate_background);
        assert_eq!(behaviour.announce_delay, Duration::from_millis(50));
    }
}
