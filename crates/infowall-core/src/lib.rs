#![forbid(unsafe_code)]

//! Data model and matching primitives for the info-wall filter engine.
//!
//! This crate owns everything that is pure data or pure function: the
//! panel model with its cached searchable corpus, the query tokenizer,
//! the exact-then-fuzzy match evaluator with ALL/ANY aggregation, and the
//! behaviour/strings configuration. The stateful filter controller and
//! the debounced visibility announcer live in `infowall-wall`.

pub mod config;
pub mod fuzzy;
pub mod matcher;
pub mod model;
pub mod query;
pub mod strings;

pub use config::WallBehaviour;
pub use fuzzy::{FuzzyMatch, NoFuzzy, SubsequenceFuzzy};
pub use matcher::{FilterMode, panel_matches};
pub use model::{Entry, Panel, PanelSource, PropertyDescriptor, TextStyling, build_panels};
pub use query::tokenize;
pub use strings::WallStrings;
