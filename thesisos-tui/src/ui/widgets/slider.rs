//! Labeled 1–5 slider line.

use ratatui::text::{Line, Span};

use thesisos_core::domain::Level;

use crate::theme;

const WIDTH: usize = 20;

/// `[=========           ]`, filled in proportion to the level.
pub fn bar(level: Level, width: usize) -> String {
    let filled = (level.fraction() * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

pub fn line(label: &str, level: Level, focused: bool) -> Line<'static> {
    let label_style = if focused { theme::focused() } else { theme::muted() };
    let bar_style = if focused { theme::accent() } else { theme::muted() };
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::styled(bar(level, WIDTH), bar_style),
        Span::styled(
            format!(" {} / {}", level.get(), Level::MAX),
            theme::metric_value(),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_ends() {
        assert_eq!(bar(Level::new(1), 4), "[    ]");
        assert_eq!(bar(Level::new(5), 4), "[====]");
        assert_eq!(bar(Level::new(3), 4), "[==  ]");
    }

    #[test]
    fn line_shows_value() {
        let text: String = line("Confidence Level", Level::new(4), false)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.starts_with("Confidence Level: ["));
        assert!(text.ends_with(" 4 / 5"));
    }
}
