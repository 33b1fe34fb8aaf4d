#![forbid(unsafe_code)]

//! End-to-end filter flow: controller decisions applied through a
//! recording sink, announcements delivered through ticking.

use std::collections::BTreeMap;
use std::time::Duration;

use infowall_core::matcher::FilterMode;
use infowall_core::model::{Panel, PanelSource, PropertyDescriptor, build_panels};
use infowall_core::{NoFuzzy, WallBehaviour, WallStrings};
use infowall_wall::sink::WallSink;
use infowall_wall::wall::FilterWall;

#[derive(Debug, Default)]
struct RecordingSink {
    visible: BTreeMap<usize, bool>,
    alternate: BTreeMap<usize, bool>,
    message: Option<String>,
    announcements: Vec<String>,
    clears: usize,
}

impl WallSink for RecordingSink {
    fn set_visible(&mut self, index: usize, visible: bool) {
        self.visible.insert(index, visible);
    }

    fn set_background_alternate(&mut self, index: usize, alternate: bool) {
        self.alternate.insert(index, alternate);
    }

    fn set_no_matches_message(&mut self, message: Option<&str>) {
        self.message = message.map(str::to_string);
    }

    fn announce(&mut self, text: &str) {
        self.announcements.push(text.to_string());
    }

    fn clear_announcement(&mut self) {
        self.clears += 1;
    }
}

fn contact_panels() -> Vec<Panel> {
    let properties = vec![
        PropertyDescriptor::new().label("Name").searchable(true),
        PropertyDescriptor::new().label("Occupation").searchable(true),
        PropertyDescriptor::new().label("Phone").searchable(false),
    ];
    build_panels(
        &properties,
        vec![
            PanelSource::new(vec![
                "Ada Lovelace".into(),
                "Mathematician".into(),
                "555-0100".into(),
            ]),
            PanelSource::new(vec![
                "Alan Turing".into(),
                "Computer Scientist".into(),
                "555-0101".into(),
            ])
            .keywords("enigma bletchley"),
            PanelSource::new(vec![
                "Grace Hopper".into(),
                "Rear Admiral".into(),
                "555-0102".into(),
            ]),
        ],
    )
}

/// Exact-substring-only wall, so expectations stay independent of the
/// default fuzzy matcher's recall.
fn contact_wall(behaviour: WallBehaviour) -> FilterWall<NoFuzzy> {
    FilterWall::with_fuzzy(contact_panels(), behaviour, WallStrings::default(), NoFuzzy)
}

#[test]
fn filter_and_sync_drive_the_sink() {
    let mut wall = contact_wall(WallBehaviour::default());
    let mut sink = RecordingSink::default();

    let outcome = wall.apply_query("ada");
    wall.sync(&mut sink);

    assert_eq!(outcome.visible_count, 1);
    assert_eq!(sink.visible.get(&0), Some(&true));
    assert_eq!(sink.visible.get(&1), Some(&false));
    assert_eq!(sink.visible.get(&2), Some(&false));
    assert_eq!(sink.message, None);
}

#[test]
fn keywords_match_panels_without_matching_entries() {
    let mut wall = contact_wall(WallBehaviour::default());
    let outcome = wall.apply_query("enigma");
    assert_eq!(outcome.visible_count, 1);
    assert!(wall.panels()[1].is_visible());
}

#[test]
fn unsearchable_columns_never_match() {
    let mut wall = contact_wall(WallBehaviour::default());
    // Phone numbers are in a non-searchable column.
    let mut wall_outcome = wall.apply_query("555-0100");
    assert_eq!(wall_outcome.visible_count, 0);

    wall_outcome = wall.apply_query("");
    assert_eq!(wall_outcome.visible_count, 3);
}

#[test]
fn no_matches_message_reaches_the_sink() {
    let mut wall = contact_wall(WallBehaviour::default());
    let mut sink = RecordingSink::default();

    wall.apply_query("zzz_no_such_token");
    wall.sync(&mut sink);
    let message = sink.message.as_deref().unwrap();
    assert!(message.contains("zzz_no_such_token"));

    wall.apply_query("");
    wall.sync(&mut sink);
    assert_eq!(sink.message, None);
}

#[test]
fn alternation_is_pushed_for_visible_panels_only() {
    let mut wall = contact_wall(WallBehaviour::default());
    let mut sink = RecordingSink::default();

    wall.apply_query("");
    wall.sync(&mut sink);
    assert_eq!(sink.alternate.get(&0), Some(&false));
    assert_eq!(sink.alternate.get(&1), Some(&true));
    assert_eq!(sink.alternate.get(&2), Some(&false));

    // Hide the middle panel; alternation recomputes over the survivors.
    sink.alternate.clear();
    wall.apply_query("ada hopper");
    wall.sync(&mut sink);
    assert_eq!(wall.visible_count(), 2);
    assert_eq!(sink.alternate.get(&0), Some(&false));
    assert_eq!(sink.alternate.get(&1), None);
    assert_eq!(sink.alternate.get(&2), Some(&true));
}

#[test]
fn burst_of_queries_announces_only_the_settled_state() {
    let mut wall = contact_wall(WallBehaviour::default());
    let mut sink = RecordingSink::default();

    // Three passes inside the debounce window: 3 -> 1 -> 2 visible.
    wall.apply_query("ada");
    wall.tick_into(Duration::from_millis(100), &mut sink);
    wall.apply_query("ada turing");
    wall.tick_into(Duration::from_millis(100), &mut sink);

    assert!(sink.announcements.is_empty());

    wall.tick_into(Duration::from_millis(500), &mut sink);
    assert_eq!(
        sink.announcements,
        ["List changed. Showing 2 of 3 items."]
    );

    // The live region self-clears shortly after delivery.
    wall.tick_into(Duration::from_millis(100), &mut sink);
    assert_eq!(sink.clears, 1);
}

#[test]
fn all_mode_requires_every_word() {
    let mut wall = contact_wall(WallBehaviour::default().filter_mode(FilterMode::All));
    assert_eq!(wall.apply_query("grace admiral").visible_count, 1);
    assert_eq!(wall.apply_query("grace turing").visible_count, 0);
}

#[test]
fn default_fuzzy_matcher_adds_recall() {
    let mut wall = FilterWall::new(
        contact_panels(),
        WallBehaviour::default(),
        WallStrings::default(),
    );
    // "lvlace" is not a substring of any corpus but is an in-order
    // subsequence of "lovelace".
    let outcome = wall.apply_query("lvlace");
    assert_eq!(outcome.visible_count, 1);
    assert!(wall.panels()[0].is_visible());
}

#[test]
fn shutdown_suppresses_late_delivery() {
    let mut wall = contact_wall(WallBehaviour::default());
    let mut sink = RecordingSink::default();

    wall.apply_query("ada");
    wall.shutdown();
    wall.tick_into(Duration::from_secs(5), &mut sink);
    assert!(sink.announcements.is_empty());
    assert_eq!(sink.clears, 0);
}
