#![forbid(unsafe_code)]

//! User-facing message templates.
//!
//! Templates interpolate `@placeholder` tokens with literal values. The
//! defaults match the authoring tool's English strings; hosts with their
//! own localization layer replace the whole struct.

/// Message templates for the wall.
#[derive(Debug, Clone)]
pub struct WallStrings {
    /// Shown when the author provided no panels at all.
    pub no_entries: String,
    /// Shown when a query hides every panel. `@query` interpolates the
    /// literal query text.
    pub no_matches: String,
    /// Accessible label for the filter input.
    pub enter_to_filter: String,
    /// Live-region announcement after the visible count settles.
    /// `@visible` and `@total` interpolate the counts.
    pub list_changed: String,
}

impl Default for WallStrings {
    fn default() -> Self {
        Self {
            no_entries: "The author did not enter anything.".into(),
            no_matches: "There are no matches for @query.".into(),
            enter_to_filter: "Enter a query to filter the content for relevant entries.".into(),
            list_changed: "List changed. Showing @visible of @total items.".into(),
        }
    }
}

impl WallStrings {
    /// The no-matches message with the literal query interpolated.
    pub fn no_matches_for(&self, query: &str) -> String {
        self.no_matches.replace("@query", query)
    }

    /// The list-changed announcement with both counts interpolated.
    pub fn list_changed_message(&self, visible: usize, total: usize) -> String {
        self.list_changed
            .replace("@visible", &visible.to_string())
            .replace("@total", &total.to_string())
    }
}
