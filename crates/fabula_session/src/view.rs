//! View models emitted to the presentation surface.

use serde::Serialize;

/// What the presentation surface should render, derived purely from the
/// session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StoryView {
    /// Goal and animal inputs plus the start control.
    Intake,
    /// A story segment, its choices when present, and any moral notice.
    Segment {
        /// Progress value (1-3)
        progress: u8,
        /// Narrative text of the latest segment
        text: String,
        /// Display text for the progressing choice, when offered
        option_a: Option<String>,
        /// Display text for the gentle-consequence choice, when offered
        option_b: Option<String>,
        /// Moral explanation from an Option B press, when present
        moral_notice: Option<String>,
    },
    /// Congratulatory banner and the restart control.
    Complete,
}
