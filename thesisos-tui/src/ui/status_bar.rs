//! Bottom status bar: key hints, provider, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Mode, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let hints = match app.mode {
        Mode::Editing => " [Esc]done [Enter]submit/newline",
        Mode::Normal if app.has_thesis() => " [j/k]move [h/l]adjust [1-6]tabs [g]generate [?]help",
        Mode::Normal => " [Enter]edit [g]generate [?]help [q]quit",
    };

    let mut spans = vec![
        Span::styled(hints, theme::muted()),
        Span::raw(" | "),
        Span::styled(app.provider_name(), theme::muted()),
    ];

    if !app.error_history.is_empty() {
        spans.push(Span::styled(
            format!(" [e]{} errors", app.error_history.len()),
            theme::muted(),
        ));
    }

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
