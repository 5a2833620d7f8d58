//! Session state for one story run.

use crate::parser::{ChoiceSet, ParsedStory};
use fabula_core::Animal;
use serde::{Deserialize, Serialize};

/// Five-stage progression of a story run.
///
/// Progress is monotonically non-decreasing within a run; only a restart
/// returns to `Intake`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum StoryStage {
    /// Collecting the learning goal and animal
    #[default]
    Intake,
    /// First story segment, awaiting a decision
    Segment1,
    /// Second story segment, awaiting a decision
    Segment2,
    /// Third story segment, awaiting a decision
    Segment3,
    /// Story finished
    Complete,
}

impl StoryStage {
    /// Progress value of this stage (0-4).
    pub fn progress(&self) -> u8 {
        match self {
            StoryStage::Intake => 0,
            StoryStage::Segment1 => 1,
            StoryStage::Segment2 => 2,
            StoryStage::Segment3 => 3,
            StoryStage::Complete => 4,
        }
    }

    /// Whether this stage shows a story segment awaiting a decision.
    pub fn is_segment(&self) -> bool {
        matches!(
            self,
            StoryStage::Segment1 | StoryStage::Segment2 | StoryStage::Segment3
        )
    }

    fn next(self) -> StoryStage {
        match self {
            StoryStage::Intake => StoryStage::Segment1,
            StoryStage::Segment1 => StoryStage::Segment2,
            StoryStage::Segment2 => StoryStage::Segment3,
            StoryStage::Segment3 | StoryStage::Complete => StoryStage::Complete,
        }
    }
}

/// Explicit state container for one story session.
///
/// Mutated only by the four user events (start, choose A, choose B,
/// restart); everything else reads it. Invariant: `choices` is non-empty
/// only while `0 < progress < 4`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct StorySession {
    /// Current stage of the run
    stage: StoryStage,
    /// Story segments in order, append-only within a run
    segments: Vec<String>,
    /// Choices offered by the latest segment
    choices: ChoiceSet,
    /// Learning goal, set once at intake
    goal: String,
    /// Featured animal, set once at intake
    animal: Animal,
    /// Moral explanation shown after an Option B press
    moral_notice: Option<String>,
}

impl StorySession {
    /// The most recently generated story segment.
    pub fn latest_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Enter the first segment from intake.
    pub(crate) fn begin(&mut self, goal: String, animal: Animal, parsed: ParsedStory) {
        self.goal = goal;
        self.animal = animal;
        self.segments.push(parsed.narrative);
        self.choices = parsed.choices;
        self.stage = StoryStage::Segment1;
    }

    /// Append a segment and advance one stage.
    ///
    /// Entering `Complete` drops the choice pair regardless of what the
    /// final response contained.
    pub(crate) fn advance(&mut self, parsed: ParsedStory) {
        self.segments.push(parsed.narrative);
        self.stage = self.stage.next();
        self.choices = if self.stage == StoryStage::Complete {
            ChoiceSet::default()
        } else {
            parsed.choices
        };
        self.moral_notice = None;
    }

    /// Record the moral explanation for inline display.
    pub(crate) fn set_moral_notice(&mut self, notice: String) {
        self.moral_notice = Some(notice);
    }

    /// Reset every field to its initial value.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
