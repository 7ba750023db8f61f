//! Top-level UI layout: header, input card, summary, thesis tabs, status bar.

pub mod input_panel;
pub mod overlays;
pub mod status_bar;
pub mod summary;
pub mod thesis_tabs;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use thesisos_core::session::SessionState;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    f.render_widget(Block::default().style(theme::background()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    input_panel::render_header(f, chunks[0]);
    input_panel::render(f, chunks[1], app);
    draw_body(f, chunks[2], app);
    status_bar::render(f, chunks[3], app);

    // Overlays on top of everything but the status bar.
    let overlay_area = Rect {
        height: f.area().height.saturating_sub(1),
        ..f.area()
    };
    match app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, overlay_area),
        Overlay::Help => overlays::render_help(f, overlay_area),
        Overlay::ErrorHistory => overlays::render_error_history(f, overlay_area, app),
        Overlay::None => {}
    }
}

/// Summary and tabs once loaded, a single banner after a failure.
fn draw_body(f: &mut Frame, area: Rect, app: &AppState) {
    match app.session.state() {
        SessionState::Idle => {
            let hint = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  Enter a ticker and press g to generate a thesis.",
                    theme::muted(),
                )),
            ]);
            f.render_widget(hint, area);
        }
        SessionState::Failed(failure) => summary::render_error(f, area, &failure.message),
        SessionState::Ready(active) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(4), Constraint::Min(3)])
                .split(area);
            summary::render(f, chunks[0], &active.snapshot);
            thesis_tabs::render(f, chunks[1], app, active);
        }
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
