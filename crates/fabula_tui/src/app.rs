//! Application state and key handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fabula_core::{Animal, StoryDriver};
use fabula_error::{FabulaError, FabulaErrorKind};
use fabula_session::{SessionEvent, StoryFlow, StoryView};
use strum::IntoEnumIterator;
use tracing::warn;

/// Warning shown when an outbound story call fails.
const FETCH_WARNING: &str = "There was an issue fetching the story. Please try again.";

/// TUI application state.
///
/// Owns the session flow and the transient input state of the intake
/// screen. Each key event performs at most one blocking outbound call
/// before the next re-render.
pub struct App<D: StoryDriver> {
    /// The session state machine
    pub flow: StoryFlow<D>,
    /// Goal text being typed on the intake screen
    pub goal_input: String,
    /// Index into the animal selector
    pub animal_index: usize,
    /// Status line content
    pub status_message: String,
    /// Set when the user asks to quit
    pub should_quit: bool,
}

impl<D: StoryDriver> App<D> {
    /// Create an application over the given backend.
    pub fn new(driver: D) -> Self {
        Self {
            flow: StoryFlow::new(driver),
            goal_input: String::new(),
            animal_index: 0,
            status_message: "Ready".to_string(),
            should_quit: false,
        }
    }

    /// The animal currently selected on the intake screen.
    pub fn selected_animal(&self) -> Animal {
        Animal::iter()
            .nth(self.animal_index)
            .unwrap_or_default()
    }

    /// Replace the status line.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Handle one key press.
    pub async fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.flow.view() {
            StoryView::Intake => self.on_intake_key(key).await,
            StoryView::Segment { .. } => self.on_segment_key(key).await,
            StoryView::Complete => self.on_complete_key(key).await,
        }
    }

    async fn on_intake_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.animal_index = (self.animal_index + 1) % Animal::iter().count();
            }
            KeyCode::Backspace => {
                self.goal_input.pop();
            }
            KeyCode::Enter => {
                let event = SessionEvent::Start {
                    goal: self.goal_input.clone(),
                    animal: self.selected_animal(),
                };
                self.dispatch(event).await;
            }
            KeyCode::Char(c) => self.goal_input.push(c),
            _ => {}
        }
    }

    async fn on_segment_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.dispatch(SessionEvent::ChooseOptionA).await;
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                self.dispatch(SessionEvent::ChooseOptionB).await;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    async fn on_complete_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                self.dispatch(SessionEvent::Restart).await;
                self.goal_input.clear();
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    async fn dispatch(&mut self, event: SessionEvent) {
        match self.flow.handle(event).await {
            Ok(_) => self.status_message = "Ready".to_string(),
            Err(e) => {
                warn!(error = %e, "Event failed");
                self.status_message = warning_for(&e);
            }
        }
    }
}

/// Turn an error into a status-line warning.
fn warning_for(err: &FabulaError) -> String {
    match err.kind() {
        FabulaErrorKind::Client(_) => FETCH_WARNING.to_string(),
        FabulaErrorKind::Session(e) => e.kind.to_string(),
        FabulaErrorKind::Config(e) => e.message.clone(),
    }
}
