//! UI rendering for the TUI.

use crate::app::App;
use fabula_core::{Animal, StoryDriver};
use fabula_session::StoryView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw<D: StoryDriver>(f: &mut Frame, app: &App<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let view = app.flow.view();

    draw_header(f, &view, chunks[0]);

    match &view {
        StoryView::Intake => draw_intake(f, app, chunks[1]),
        StoryView::Segment { .. } => draw_segment(f, &view, chunks[1]),
        StoryView::Complete => draw_complete(f, chunks[1]),
    }

    draw_status_bar(f, app, &view, chunks[2]);
}

/// Draw the header.
#[tracing::instrument(skip_all)]
fn draw_header(f: &mut Frame, view: &StoryView, area: ratatui::layout::Rect) {
    let title = match view {
        StoryView::Segment { progress, .. } => {
            format!("Fabula Story Time - Part {} of 3", progress)
        }
        _ => "Fabula Story Time".to_string(),
    };
    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Draw the status bar with help text.
#[tracing::instrument(skip_all)]
fn draw_status_bar<D: StoryDriver>(
    f: &mut Frame,
    app: &App<D>,
    view: &StoryView,
    area: ratatui::layout::Rect,
) {
    let help_text = match view {
        StoryView::Intake => "Type a goal | Tab: Animal | Enter: Start Story | Esc: Quit",
        StoryView::Segment { .. } => "A/B: Choose | Q: Quit",
        StoryView::Complete => "Enter: Start Over | Q: Quit",
    };

    let status_text = format!("{} | {}", app.status_message, help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

/// Draw the intake screen.
#[tracing::instrument(skip_all)]
fn draw_intake<D: StoryDriver>(f: &mut Frame, app: &App<D>, area: ratatui::layout::Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .margin(2)
        .split(area);

    let goal_block = Block::default()
        .borders(Borders::ALL)
        .title("Learning goal (e.g., kindness, teamwork)");
    let goal = Paragraph::new(app.goal_input.as_str()).block(goal_block);
    f.render_widget(goal, chunks[0]);

    let animals = Animal::iter()
        .enumerate()
        .map(|(i, animal)| {
            if i == app.animal_index {
                format!("[{}]", animal)
            } else {
                format!(" {} ", animal)
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    let animal_block = Block::default().borders(Borders::ALL).title("Animal");
    let animal = Paragraph::new(animals)
        .block(animal_block)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(animal, chunks[1]);
}

/// Draw a story segment with its choices and any moral notice.
#[tracing::instrument(skip_all)]
fn draw_segment(f: &mut Frame, view: &StoryView, area: ratatui::layout::Rect) {
    let StoryView::Segment {
        text,
        option_a,
        option_b,
        moral_notice,
        ..
    } = view
    else {
        return;
    };

    let notice_height = if moral_notice.is_some() { 6 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),                  // Narrative
            Constraint::Length(6),               // Choices
            Constraint::Length(notice_height),   // Moral notice
        ])
        .margin(1)
        .split(area);

    let story = Paragraph::new(text.as_str())
        .block(Block::default().borders(Borders::ALL).title("Story"))
        .wrap(Wrap { trim: true });
    f.render_widget(story, chunks[0]);

    // Buttons only exist for choices the response actually offered
    let mut lines = Vec::new();
    if let Some(a) = option_a {
        lines.push(format!("[A] {}", a));
    }
    if let Some(b) = option_b {
        lines.push(format!("[B] {}", b));
    }
    let choices = Paragraph::new(lines.join("\n"))
        .block(Block::default().borders(Borders::ALL).title("What happens next?"))
        .style(Style::default().fg(Color::Green))
        .wrap(Wrap { trim: true });
    f.render_widget(choices, chunks[1]);

    if let Some(notice) = moral_notice {
        let text = format!(
            "That wasn't the best choice. Here's something to learn:\n{}",
            notice
        );
        let moral = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("A gentle lesson"))
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(moral, chunks[2]);
    }
}

/// Draw the completion banner.
#[tracing::instrument(skip_all)]
fn draw_complete(f: &mut Frame, area: ratatui::layout::Rect) {
    let banner = Paragraph::new(
        "Congrats!!! You finished the adventure!\nThank you for playing!",
    )
    .block(Block::default().borders(Borders::ALL))
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center);
    f.render_widget(banner, area);
}
