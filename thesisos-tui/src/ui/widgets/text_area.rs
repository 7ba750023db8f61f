//! Bordered free-text area with a placeholder.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use thesisos_core::domain::NoteField;

use crate::theme;

pub fn title(field: NoteField) -> &'static str {
    match field {
        NoteField::MacroInsight => "Key Macro Insight",
        NoteField::CommodityInsight => "Commodity Insight",
        NoteField::Bottlenecks => "Bottlenecks / Constraints",
        NoteField::FinancialInsight => "Financial Insight",
        NoteField::Risks => "Key Risks & Scenarios",
        NoteField::FinalThesis => "Final Investment Thesis",
    }
}

pub fn placeholder(field: NoteField) -> &'static str {
    match field {
        NoteField::MacroInsight => "What macro force matters most for this asset?",
        NoteField::CommodityInsight => {
            "Which input cost or commodity trend can surprise the market?"
        }
        NoteField::Bottlenecks => "Capacity, logistics, suppliers, inventory issues...",
        NoteField::FinancialInsight => "What does the market misunderstand about the financials?",
        NoteField::Risks => "Bear case, invalidation triggers, tail risks...",
        NoteField::FinalThesis => "Clear, structured, unemotional reasoning...",
    }
}

pub fn render(
    f: &mut Frame,
    area: Rect,
    field: NoteField,
    content: &str,
    focused: bool,
    editing: bool,
) {
    let title = if editing {
        format!(" {} [Esc]done ", title(field))
    } else {
        format!(" {} ", title(field))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::card_border(focused))
        .title(title)
        .title_style(if focused { theme::accent_bold() } else { theme::muted() });

    let mut lines: Vec<Line> = if content.is_empty() && !editing {
        vec![Line::from(Span::styled(placeholder(field), theme::muted()))]
    } else {
        content
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), theme::text())))
            .collect()
    };

    if editing {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled("_", theme::accent()));
        }
    }

    // Keep the tail visible once the wrapped note outgrows the box.
    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    let inner_width = area.width.saturating_sub(2);
    let visible = area.height.saturating_sub(2).max(1) as usize;
    let rows = para.line_count(inner_width);
    let scroll = rows.saturating_sub(visible).min(u16::MAX as usize) as u16;

    f.render_widget(para.block(block).scroll((scroll, 0)), area);
}
