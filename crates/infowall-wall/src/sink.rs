#![forbid(unsafe_code)]

//! Rendering adapter seam.
//!
//! The controller computes pure visibility and alternation decisions; a
//! [`WallSink`] applies them to whatever rendering technology the host
//! uses. Keeping the seam here means the algorithmic core stays testable
//! against a recording sink.

/// Receives the controller's decisions.
///
/// Panel indices refer to the controller's stable panel order.
pub trait WallSink {
    /// Show or hide the panel at `index`.
    fn set_visible(&mut self, index: usize, visible: bool);

    /// Apply the alternating-background flag for the panel at `index`.
    ///
    /// Only called when the alternation feature is enabled, and only
    /// meaningful for visible panels.
    fn set_background_alternate(&mut self, index: usize, alternate: bool);

    /// Activate (`Some(text)`) or clear (`None`) the no-matches message.
    fn set_no_matches_message(&mut self, message: Option<&str>);

    /// Place `text` into the live-announcing region.
    fn announce(&mut self, text: &str);

    /// Empty the live-announcing region.
    fn clear_announcement(&mut self);
}
