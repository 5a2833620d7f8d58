//! Parsing of generated story text into narrative and choices.
//!
//! Story segments arrive as free text with optional `Option A:` and
//! `Option B:` marker lines. Marker lines contribute to the choice pair;
//! everything else is narrative.

use serde::{Deserialize, Serialize};

const OPTION_A_MARKER: &str = "Option A:";
const OPTION_B_MARKER: &str = "Option B:";

/// The pair of choices offered at a decision point.
///
/// A missing marker in the model output yields `None` for that side, which
/// the state machine treats as "no choice available" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSet {
    /// Display text for the progressing choice
    pub option_a: Option<String>,
    /// Display text for the gentle-consequence choice
    pub option_b: Option<String>,
}

impl ChoiceSet {
    /// Returns true when neither choice is present.
    pub fn is_empty(&self) -> bool {
        self.option_a.is_none() && self.option_b.is_none()
    }
}

/// A story segment parsed into narrative text and choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedStory {
    /// All non-marker lines, newline-joined and trimmed
    pub narrative: String,
    /// Choices scanned from marker lines
    pub choices: ChoiceSet,
}

/// Parse a story segment in a single pass over its lines.
///
/// Lines are classified by substring containment. A line containing both
/// markers counts as Option A (the checks are ordered). Repeated markers
/// overwrite: the last occurrence wins. Option values are the remainder of
/// the line after the marker, trimmed.
///
/// # Examples
///
/// ```
/// use fabula_session::parse_story;
///
/// let parsed = parse_story("Once upon a time.\nOption A: Share the berries.");
/// assert_eq!(parsed.narrative, "Once upon a time.");
/// assert_eq!(parsed.choices.option_a.as_deref(), Some("Share the berries."));
/// assert!(parsed.choices.option_b.is_none());
/// ```
pub fn parse_story(content: &str) -> ParsedStory {
    let mut narrative = String::new();
    let mut choices = ChoiceSet::default();

    for line in content.lines() {
        if let Some(idx) = line.find(OPTION_A_MARKER) {
            choices.option_a = Some(line[idx + OPTION_A_MARKER.len()..].trim().to_string());
        } else if let Some(idx) = line.find(OPTION_B_MARKER) {
            choices.option_b = Some(line[idx + OPTION_B_MARKER.len()..].trim().to_string());
        } else {
            narrative.push_str(line);
            narrative.push('\n');
        }
    }

    ParsedStory {
        narrative: narrative.trim().to_string(),
        choices,
    }
}
