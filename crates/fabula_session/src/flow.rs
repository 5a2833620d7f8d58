//! The session state machine.
//!
//! `StoryFlow` owns the session and the story teller, advances the session
//! in response to user events, and emits a fresh view model after each
//! event.

use crate::parser::parse_story;
use crate::session::{StorySession, StoryStage};
use crate::view::StoryView;
use fabula_client::StoryTeller;
use fabula_core::{Animal, StoryDriver};
use fabula_error::{FabulaResult, SessionError, SessionErrorKind};
use tracing::{debug, info, instrument, warn};

/// Annotation sent with every Option A advance.
pub const OPTION_A_ANNOTATION: &str = "Child chose Option A";

/// User-triggered events that drive a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Start pressed on the intake screen
    Start {
        /// Learning goal entered by the user
        goal: String,
        /// Animal selected by the user
        animal: Animal,
    },
    /// The progressing choice pressed
    ChooseOptionA,
    /// The gentle-consequence choice pressed
    ChooseOptionB,
    /// Start Over pressed
    Restart,
}

impl SessionEvent {
    fn name(&self) -> &'static str {
        match self {
            SessionEvent::Start { .. } => "Start",
            SessionEvent::ChooseOptionA => "ChooseOptionA",
            SessionEvent::ChooseOptionB => "ChooseOptionB",
            SessionEvent::Restart => "Restart",
        }
    }
}

/// Drives one story session over a generation backend.
///
/// Events either complete fully or leave the session untouched: a failed
/// outbound call never advances the stage, appends a segment, or replaces
/// the choice pair.
pub struct StoryFlow<D: StoryDriver> {
    teller: StoryTeller<D>,
    session: StorySession,
}

impl<D: StoryDriver> StoryFlow<D> {
    /// Create a flow with a fresh session over the given backend.
    pub fn new(driver: D) -> Self {
        Self {
            teller: StoryTeller::new(driver),
            session: StorySession::default(),
        }
    }

    /// The current session state.
    pub fn session(&self) -> &StorySession {
        &self.session
    }

    /// Get a reference to the underlying story teller.
    pub fn teller(&self) -> &StoryTeller<D> {
        &self.teller
    }

    /// Apply one user event and emit the resulting view.
    ///
    /// # Errors
    ///
    /// Returns an error when the event is invalid for the current stage or
    /// an outbound call fails; the session is left unchanged in both
    /// cases.
    #[instrument(skip(self, event), fields(event = event.name(), progress = self.session.stage().progress()))]
    pub async fn handle(&mut self, event: SessionEvent) -> FabulaResult<StoryView> {
        match event {
            SessionEvent::Start { goal, animal } => self.start(goal, animal).await?,
            SessionEvent::ChooseOptionA => self.choose_option_a().await?,
            SessionEvent::ChooseOptionB => self.choose_option_b().await?,
            SessionEvent::Restart => self.restart(),
        }

        Ok(self.view())
    }

    /// Render the current state as a view model.
    pub fn view(&self) -> StoryView {
        match self.session.stage() {
            StoryStage::Intake => StoryView::Intake,
            StoryStage::Complete => StoryView::Complete,
            stage => StoryView::Segment {
                progress: stage.progress(),
                text: self.session.latest_segment().unwrap_or_default().to_string(),
                option_a: self.session.choices().option_a.clone(),
                option_b: self.session.choices().option_b.clone(),
                moral_notice: self.session.moral_notice().clone(),
            },
        }
    }

    async fn start(&mut self, goal: String, animal: Animal) -> FabulaResult<()> {
        if *self.session.stage() != StoryStage::Intake {
            return Err(self.invalid_event("Start"));
        }
        if goal.trim().is_empty() {
            warn!("Start rejected: empty learning goal");
            return Err(SessionError::new(SessionErrorKind::EmptyGoal).into());
        }

        let response = self.teller.generate_story(&goal, animal, "").await?;
        let parsed = parse_story(&response);

        info!(goal = %goal, animal = %animal, "Story started");
        self.session.begin(goal, animal, parsed);
        Ok(())
    }

    async fn choose_option_a(&mut self) -> FabulaResult<()> {
        if !self.session.stage().is_segment() {
            return Err(self.invalid_event("ChooseOptionA"));
        }
        if self.session.choices().is_empty() {
            return Err(SessionError::new(SessionErrorKind::NoChoicesAvailable).into());
        }

        let goal = self.session.goal().clone();
        let animal = *self.session.animal();

        // A failed fetch must not advance the stage or append its error
        // text as story content.
        let response = self
            .teller
            .generate_story(&goal, animal, OPTION_A_ANNOTATION)
            .await?;
        let parsed = parse_story(&response);

        self.session.advance(parsed);
        debug!(
            progress = self.session.stage().progress(),
            segments = self.session.segments().len(),
            "Advanced on Option A"
        );
        Ok(())
    }

    async fn choose_option_b(&mut self) -> FabulaResult<()> {
        if !self.session.stage().is_segment() {
            return Err(self.invalid_event("ChooseOptionB"));
        }
        if self.session.choices().is_empty() {
            return Err(SessionError::new(SessionErrorKind::NoChoicesAvailable).into());
        }

        let goal = self.session.goal().clone();
        let animal = *self.session.animal();

        let notice = self.teller.explain_moral_choice(&goal, animal).await?;

        // Option B never advances; the same choices stay active.
        self.session.set_moral_notice(notice);
        debug!("Moral notice recorded");
        Ok(())
    }

    fn restart(&mut self) {
        info!("Session reset");
        self.session.reset();
    }

    fn invalid_event(&self, event: &str) -> fabula_error::FabulaError {
        SessionError::new(SessionErrorKind::InvalidEvent {
            event: event.to_string(),
            progress: self.session.stage().progress(),
        })
        .into()
    }
}
