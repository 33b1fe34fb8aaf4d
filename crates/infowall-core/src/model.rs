#![forbid(unsafe_code)]

//! Panel data model: property descriptors, entries, and panels.
//!
//! A [`PropertyDescriptor`] is one column of the authoring schema and is
//! shared across all panels. An [`Entry`] is one cell of a panel, derived
//! pairwise from a descriptor and a raw text value. A [`Panel`] owns its
//! entries plus optional free-text keywords and caches its lower-cased
//! searchable corpus at construction; entry text is immutable afterwards,
//! so the corpus never needs recomputation.
//!
//! # Example
//!
//! ```rust
//! use infowall_core::model::{PanelSource, PropertyDescriptor, build_panels};
//!
//! let properties = vec![
//!     PropertyDescriptor::new().label("Name").searchable(true),
//!     PropertyDescriptor::new().searchable(false),
//! ];
//! let panels = build_panels(
//!     &properties,
//!     vec![PanelSource::new(vec!["Ada".into(), "unsearched".into()])],
//! );
//! assert_eq!(panels.len(), 1);
//! assert_eq!(panels[0].corpus(), "ada");
//! ```

/// Text styling flags carried from the authoring schema.
///
/// The engine never reads these; they ride along for the rendering adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyling {
    /// Render the cell in bold.
    pub bold: bool,
    /// Render the cell in italics.
    pub italic: bool,
}

/// One column of the panel schema.
///
/// Defined once per content instance and shared by all panels; it is
/// schema, not per-panel data.
#[derive(Debug, Clone, Default)]
pub struct PropertyDescriptor {
    /// Label shown next to the cell, if the author declared one.
    pub label: Option<String>,
    /// Whether cells of this column participate in the searchable corpus.
    pub searchable: bool,
    /// Styling applied to cells of this column.
    pub styling: TextStyling,
}

impl PropertyDescriptor {
    /// Create a descriptor with no label, not searchable, default styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label (builder).
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set whether this column is searchable (builder).
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Set styling flags (builder).
    pub fn styling(mut self, styling: TextStyling) -> Self {
        self.styling = styling;
        self
    }
}

/// One cell inside a panel.
#[derive(Debug, Clone)]
pub struct Entry {
    text: String,
    label: Option<String>,
    searchable: bool,
    styling: TextStyling,
}

impl Entry {
    /// Derive an entry from a descriptor and one raw text value.
    ///
    /// The label is copied only when the descriptor declares one.
    pub fn from_descriptor(descriptor: &PropertyDescriptor, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: descriptor.label.clone(),
            searchable: descriptor.searchable,
            styling: descriptor.styling,
        }
    }

    /// The raw (decoded) text of this cell.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The label copied from the descriptor, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether this cell participates in the searchable corpus.
    pub fn searchable(&self) -> bool {
        self.searchable
    }

    /// Styling flags for the rendering adapter.
    pub fn styling(&self) -> TextStyling {
        self.styling
    }

    /// Whether the trimmed text is empty.
    ///
    /// Blank entries are tolerated in the entry list but are skipped at
    /// render time and never contribute to the corpus.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Raw authoring data for one panel: one text value per descriptor plus
/// optional keywords.
#[derive(Debug, Clone, Default)]
pub struct PanelSource {
    /// Raw cell values, pairwise with the property descriptors.
    pub values: Vec<String>,
    /// Free-text tags included in search but not shown in any entry.
    pub keywords: Option<String>,
}

impl PanelSource {
    /// Create a source from raw cell values.
    pub fn new(values: Vec<String>) -> Self {
        Self {
            values,
            keywords: None,
        }
    }

    /// Set keywords (builder).
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }
}

/// The unit of display and filtering.
///
/// # Invariants
///
/// 1. Entry text and keywords never change after construction.
/// 2. `corpus` and `accessibility_text` are computed exactly once here.
/// 3. Filtering toggles `visible` / `background_alternate` only; panels
///    are never reordered or removed.
#[derive(Debug, Clone)]
pub struct Panel {
    entries: Vec<Entry>,
    keywords: Option<String>,
    visible: bool,
    background_alternate: bool,
    corpus: String,
    accessibility_text: String,
}

impl Panel {
    /// Build a panel from its entries and optional keywords.
    ///
    /// Panels start visible with the alternation flag unset.
    pub fn new(entries: Vec<Entry>, keywords: Option<String>) -> Self {
        let corpus = build_corpus(&entries, keywords.as_deref());
        let accessibility_text = build_accessibility_text(&entries);
        Self {
            entries,
            keywords,
            visible: true,
            background_alternate: false,
            corpus,
            accessibility_text,
        }
    }

    /// The panel's entries in authoring order, blanks included.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Free-text keywords, if any.
    pub fn keywords(&self) -> Option<&str> {
        self.keywords.as_deref()
    }

    /// The cached lower-cased searchable corpus.
    pub fn corpus(&self) -> &str {
        &self.corpus
    }

    /// Plain-text summary of the panel for assistive technology,
    /// e.g. `"Name: Ada Lovelace. Mathematician."`.
    pub fn accessibility_text(&self) -> &str {
        &self.accessibility_text
    }

    /// Whether every entry is blank.
    pub fn is_blank(&self) -> bool {
        self.entries.iter().all(Entry::is_blank)
    }

    /// Whether the panel is currently visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Mark the panel visible.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Mark the panel hidden.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Alternating-background flag. Meaningful only while visible and only
    /// when the alternation feature is enabled.
    pub fn background_alternate(&self) -> bool {
        self.background_alternate
    }

    /// Set the alternating-background flag.
    pub fn set_background_alternate(&mut self, alternate: bool) {
        self.background_alternate = alternate;
    }
}

/// Build the panel set from the schema and raw per-panel data.
///
/// Entries pair up with descriptors by index; sources with fewer values
/// than descriptors pad with empty text. Panels whose entries are all
/// blank are dropped before the filter engine ever sees them.
pub fn build_panels(properties: &[PropertyDescriptor], sources: Vec<PanelSource>) -> Vec<Panel> {
    sources
        .into_iter()
        .map(|source| {
            let entries = properties
                .iter()
                .enumerate()
                .map(|(index, descriptor)| {
                    let text = source.values.get(index).cloned().unwrap_or_default();
                    Entry::from_descriptor(descriptor, text)
                })
                .collect();
            Panel::new(entries, source.keywords)
        })
        .filter(|panel| !panel.is_blank())
        .collect()
}

fn build_corpus(entries: &[Entry], keywords: Option<&str>) -> String {
    let mut segments: Vec<&str> = Vec::new();
    if let Some(keywords) = keywords {
        let keywords = keywords.trim();
        if !keywords.is_empty() {
            segments.push(keywords);
        }
    }
    for entry in entries {
        if entry.searchable() && !entry.is_blank() {
            segments.push(entry.text().trim());
        }
    }
    // Single space between segments so substrings cannot straddle two cells.
    segments.join(" ").to_lowercase()
}

fn build_accessibility_text(entries: &[Entry]) -> String {
    let mut segments: Vec<String> = Vec::new();
    for entry in entries {
        if entry.is_blank() {
            continue;
        }
        if let Some(label) = entry.label() {
            segments.push(format!("{}:", label.trim()));
        }
        segments.push(format!("{}.", entry.text().trim()));
    }
    segments.join(" ")
}
