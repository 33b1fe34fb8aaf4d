#![forbid(unsafe_code)]

//! The stateful filter controller.
//!
//! [`FilterWall`] owns the panel list and drives every filter pass: it
//! tokenizes the query, re-evaluates each panel independently, updates
//! the visible count and the no-matches message, recomputes background
//! alternation over the now-visible panels, and schedules a debounced
//! visibility announcement when the count changed.
//!
//! # Invariants
//!
//! 1. `visible_count` equals the number of visible panels after every
//!    [`FilterWall::apply_query`] call.
//! 2. Panel order never changes; filtering only toggles per-panel flags.
//! 3. The raw empty query means "show all" and is never tokenized.
//!
//! # Example
//!
//! ```rust
//! use infowall_core::{PanelSource, PropertyDescriptor, WallBehaviour, WallStrings, build_panels};
//! use infowall_wall::wall::FilterWall;
//!
//! let properties = vec![PropertyDescriptor::new().label("Name").searchable(true)];
//! let panels = build_panels(
//!     &properties,
//!     vec![
//!         PanelSource::new(vec!["Ada Lovelace".into()]),
//!         PanelSource::new(vec!["Alan Turing".into()]),
//!     ],
//! );
//! let mut wall = FilterWall::new(panels, WallBehaviour::default(), WallStrings::default());
//!
//! let outcome = wall.apply_query("ada");
//! assert_eq!(outcome.visible_count, 1);
//! assert!(!outcome.no_matches);
//! ```

use std::time::Duration;

use infowall_core::config::WallBehaviour;
use infowall_core::fuzzy::{FuzzyMatch, SubsequenceFuzzy};
use infowall_core::matcher::panel_matches;
use infowall_core::model::Panel;
use infowall_core::query::tokenize;
use infowall_core::strings::WallStrings;

use crate::announcer::{LiveRegionUpdate, LiveRegionUpdates, VisibilityAnnouncer};
use crate::sink::WallSink;

/// Result of one filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Panels visible after the pass.
    pub visible_count: usize,
    /// Total panels in the wall.
    pub total: usize,
    /// Whether the no-matches message is active.
    pub no_matches: bool,
}

/// Filter controller over an immutable panel set.
#[derive(Debug)]
pub struct FilterWall<F = SubsequenceFuzzy> {
    panels: Vec<Panel>,
    behaviour: WallBehaviour,
    strings: WallStrings,
    fuzzy: F,
    last_query: String,
    visible_count: usize,
    previous_visible_count: usize,
    message: Option<String>,
    announcer: VisibilityAnnouncer,
}

impl FilterWall<SubsequenceFuzzy> {
    /// Create a wall with the default subsequence fuzzy matcher.
    pub fn new(panels: Vec<Panel>, behaviour: WallBehaviour, strings: WallStrings) -> Self {
        Self::with_fuzzy(panels, behaviour, strings, SubsequenceFuzzy)
    }
}

impl<F: FuzzyMatch> FilterWall<F> {
    /// Create a wall with a host-supplied fuzzy capability.
    pub fn with_fuzzy(
        panels: Vec<Panel>,
        behaviour: WallBehaviour,
        strings: WallStrings,
        fuzzy: F,
    ) -> Self {
        let visible_count = panels.len();
        let announcer =
            VisibilityAnnouncer::new(behaviour.announce_delay, behaviour.region_clear_delay);
        let mut wall = Self {
            panels,
            behaviour,
            strings,
            fuzzy,
            last_query: String::new(),
            visible_count,
            previous_visible_count: visible_count,
            message: None,
            announcer,
        };
        if wall.behaviour.alternate_background {
            wall.refresh_alternation();
        }
        wall
    }

    /// Apply `query` and return the resulting counts and message state.
    ///
    /// Runs to completion synchronously; the only deferred effect is the
    /// announcement scheduled on the internal debounce timer, delivered
    /// through [`FilterWall::tick`].
    pub fn apply_query(&mut self, query: &str) -> FilterOutcome {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("apply_query", query).entered();

        let total = self.panels.len();

        if query.is_empty() {
            // Query box emptied: show all, never tokenize.
            for panel in &mut self.panels {
                panel.show();
            }
            self.visible_count = total;
            self.message = None;
        } else {
            let words = tokenize(query);
            let mode = self.behaviour.filter_mode;
            let mut visible = 0;
            for panel in &mut self.panels {
                if panel_matches(panel, &words, mode, &self.fuzzy) {
                    panel.show();
                    visible += 1;
                } else {
                    panel.hide();
                }
            }
            self.visible_count = visible;
            self.message = if visible == 0 {
                Some(self.strings.no_matches_for(query))
            } else {
                None
            };
        }

        if self.behaviour.alternate_background {
            self.refresh_alternation();
        }

        if self.visible_count != self.previous_visible_count {
            self.announcer
                .schedule(self.strings.list_changed_message(self.visible_count, total));
            // The next pass compares against this pass's count, not the
            // count last delivered to the live region.
            self.previous_visible_count = self.visible_count;
        }

        self.last_query.clear();
        self.last_query.push_str(query);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            visible = self.visible_count,
            total,
            no_matches = self.message.is_some(),
            "filter pass complete"
        );

        FilterOutcome {
            visible_count: self.visible_count,
            total,
            no_matches: self.message.is_some(),
        }
    }

    /// Advance the announcement timers and collect due live-region updates.
    pub fn tick(&mut self, delta: Duration) -> LiveRegionUpdates {
        self.announcer.tick(delta)
    }

    /// Advance the announcement timers, applying due updates to `sink`.
    pub fn tick_into(&mut self, delta: Duration, sink: &mut dyn WallSink) {
        for update in self.announcer.tick(delta) {
            match update {
                LiveRegionUpdate::Announce(text) => sink.announce(&text),
                LiveRegionUpdate::Clear => sink.clear_announcement(),
            }
        }
    }

    /// Push the full current state into `sink`.
    ///
    /// Called after [`FilterWall::apply_query`]; hidden panels keep their
    /// stale alternation flag, so alternation is only pushed while the
    /// feature is enabled.
    pub fn sync(&self, sink: &mut dyn WallSink) {
        for (index, panel) in self.panels.iter().enumerate() {
            sink.set_visible(index, panel.is_visible());
            if self.behaviour.alternate_background && panel.is_visible() {
                sink.set_background_alternate(index, panel.background_alternate());
            }
        }
        sink.set_no_matches_message(self.message.as_deref());
    }

    /// Cancel any pending announcement; call on teardown.
    pub fn shutdown(&mut self) {
        self.announcer.cancel();
    }

    /// Whether the host should offer the filter field: the feature is
    /// enabled and at least one panel has searchable content.
    pub fn filter_available(&self) -> bool {
        self.behaviour.offer_filter_field
            && self.panels.iter().any(|panel| !panel.corpus().is_empty())
    }

    /// Panels in stable authoring order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Panels visible after the last filter pass.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// The active no-matches message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The query applied by the last filter pass.
    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    /// The wall's message templates.
    pub fn strings(&self) -> &WallStrings {
        &self.strings
    }

    /// Reassign alternation flags over visible panels in stable order,
    /// starting at `false`. Hidden panels are left untouched.
    fn refresh_alternation(&mut self) {
        let mut alternate = false;
        for panel in &mut self.panels {
            if panel.is_visible() {
                panel.set_background_alternate(alternate);
                alternate = !alternate;
            }
        }
    }
}
