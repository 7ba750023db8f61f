//! Dark card theme tokens for the ThesisOS dashboard
//!
//! # Color Palette
//! - **Background**: near-black blue (base layer)
//! - **Card**: slightly lifted charcoal (metric cards, input card)
//! - **Accent**: bright blue (focus, buttons, active tab)
//! - **Positive**: green (Accumulate, success)
//! - **Negative**: red (errors, Avoid)
//! - **Warning**: amber (Watch, unavailable actions)
//! - **Muted**: gray (labels, placeholders)

use ratatui::style::{Color, Modifier, Style};

use thesisos_core::domain::Decision;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub card: Color,
    pub border: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub muted: Color,
    pub text: Color,
}

impl Theme {
    pub const fn github_dark() -> Self {
        Self {
            background: Color::Rgb(14, 17, 23),
            card: Color::Rgb(22, 27, 34),
            border: Color::Rgb(48, 54, 61),
            accent: Color::Rgb(59, 130, 246),
            positive: Color::Rgb(63, 185, 80),
            negative: Color::Rgb(248, 81, 73),
            warning: Color::Rgb(210, 153, 34),
            muted: Color::Rgb(139, 148, 158),
            text: Color::Rgb(230, 230, 230),
        }
    }

    /// Color for the final decision select.
    pub fn decision_color(&self, decision: Decision) -> Color {
        match decision {
            Decision::Accumulate => self.positive,
            Decision::Watch => self.warning,
            Decision::Avoid => self.negative,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::github_dark()
    }
}

pub const PALETTE: Theme = Theme::github_dark();

pub fn background() -> Style {
    Style::default().bg(PALETTE.background)
}

pub fn text() -> Style {
    Style::default().fg(PALETTE.text)
}

pub fn muted() -> Style {
    Style::default().fg(PALETTE.muted)
}

pub fn accent() -> Style {
    Style::default().fg(PALETTE.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn negative() -> Style {
    Style::default().fg(PALETTE.negative)
}

pub fn warning() -> Style {
    Style::default().fg(PALETTE.warning)
}

/// Highlight for the field under the cursor.
pub fn focused() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

pub fn card() -> Style {
    Style::default().bg(PALETTE.card)
}

pub fn card_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        Style::default().fg(PALETTE.border)
    }
}

pub fn metric_title() -> Style {
    muted()
}

pub fn metric_value() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn decision(decision: Decision) -> Style {
    Style::default()
        .fg(PALETTE.decision_color(decision))
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(14, 17, 23));
        assert_eq!(theme.accent, Color::Rgb(59, 130, 246));
        assert_eq!(theme, PALETTE);
    }

    #[test]
    fn test_decision_color() {
        let theme = Theme::default();
        assert_eq!(theme.decision_color(Decision::Accumulate), theme.positive);
        assert_eq!(theme.decision_color(Decision::Watch), theme.warning);
        assert_eq!(theme.decision_color(Decision::Avoid), theme.negative);
    }

    #[test]
    fn test_focus_is_reversed_accent() {
        let style = focused();
        assert_eq!(style.fg, Some(PALETTE.accent));
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }
}
