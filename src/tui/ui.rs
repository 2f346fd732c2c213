//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::features::breathing::{BreathAction, Clock, Technique};
use crate::tui::app::App;

const PRIMARY_DARK: Color = Color::Rgb(0x60, 0x3F, 0x2B);
const PRIMARY_MEDIUM: Color = Color::Rgb(0xA6, 0x7C, 0x52);
const PRIMARY_BG: Color = Color::Rgb(0xD9, 0xB8, 0x8F);
const ACCENT_LIGHT: Color = Color::Rgb(0xE8, 0xD5, 0xB7);

/// Circle scale and color for an action, idle when `None`.
#[must_use]
pub fn circle_style(action: Option<BreathAction>) -> (f64, Color) {
    match action {
        Some(BreathAction::Inhale) => (1.2, PRIMARY_BG),
        Some(BreathAction::Hold) => (1.1, PRIMARY_MEDIUM),
        Some(BreathAction::Exhale) => (0.8, ACCENT_LIGHT),
        Some(BreathAction::Pause) | None => (1.0, ACCENT_LIGHT),
    }
}

/// Render the application UI.
pub fn render<C: Clock>(frame: &mut Frame<'_>, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Technique tabs
            Constraint::Min(8),    // Circle
            Constraint::Length(3), // Instruction and timer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    render_circle(frame, app, chunks[1]);
    render_instruction(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

fn render_tabs<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let mut spans = Vec::new();
    for (i, technique) in Technique::all().iter().enumerate() {
        let style = if i == app.selected {
            Style::default()
                .fg(PRIMARY_DARK)
                .bg(ACCENT_LIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, technique.name), style));
        spans.push(Span::raw(" "));
    }

    let tabs = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Дыхательные техники ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PRIMARY_MEDIUM)),
    );

    frame.render_widget(tabs, area);
}

fn render_circle<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let (scale, color) = circle_style(app.screen().action);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PRIMARY_MEDIUM)),
        )
        .marker(Marker::Braille)
        .x_bounds([-50.0, 50.0])
        .y_bounds([-50.0, 50.0])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 30.0 * scale,
                color,
            });
        });

    frame.render_widget(canvas, area);
}

fn render_instruction<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let screen = app.screen();
    let (_, color) = circle_style(screen.action);

    let mut spans = vec![Span::styled(
        screen.instruction.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if app.show_elapsed {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            screen.timer.clone(),
            Style::default().fg(PRIMARY_DARK).add_modifier(Modifier::BOLD),
        ));
    }

    let instruction = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PRIMARY_MEDIUM)),
        );

    frame.render_widget(instruction, area);
}

fn render_status_bar<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or_default();
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
