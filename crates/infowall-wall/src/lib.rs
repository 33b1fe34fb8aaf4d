#![forbid(unsafe_code)]

//! Stateful panel wall: filter controller, visibility announcer, and the
//! rendering-adapter seam.
//!
//! The wall receives the full query text on every edit event, re-evaluates
//! all panels synchronously, and defers exactly one effect — the debounced
//! live-region announcement — to an explicit [`wall::FilterWall::tick`]
//! driven by the host's event loop. Rendering is applied through the
//! [`sink::WallSink`] trait so the algorithmic core never touches a
//! display technology.

pub mod announcer;
pub mod sink;
pub mod wall;

pub use announcer::{LiveRegionUpdate, LiveRegionUpdates, VisibilityAnnouncer};
pub use sink::WallSink;
pub use wall::{FilterOutcome, FilterWall};
