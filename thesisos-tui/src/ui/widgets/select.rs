//! Single-select (`< value >`) and multi-select (`[x] option`) lines.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use thesisos_core::domain::Choice;

use crate::theme;

/// `Label: < Value >`. `value_style` overrides the unfocused value color.
pub fn line<C: Choice>(
    label: &str,
    value: C,
    focused: bool,
    value_style: Option<Style>,
) -> Line<'static> {
    let label_style = if focused { theme::focused() } else { theme::muted() };
    let value_style = if focused {
        theme::accent_bold()
    } else {
        value_style.unwrap_or_else(theme::text)
    };
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::styled(format!("< {} >", value.label()), value_style),
    ])
}

/// One line per option with a check box; `cursor` marks the option under
/// the option cursor when the control is focused.
pub fn multi_lines<C: Choice>(
    selected: impl Fn(C) -> bool,
    cursor: Option<usize>,
) -> Vec<Line<'static>> {
    C::ALL
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let mark = if selected(*option) { "[x]" } else { "[ ]" };
            let style = if cursor == Some(i) {
                theme::focused()
            } else if selected(*option) {
                theme::accent()
            } else {
                theme::muted()
            };
            Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{mark} {}", option.label()), style),
            ])
        })
        .collect()
}
