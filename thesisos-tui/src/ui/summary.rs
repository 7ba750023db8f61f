//! Summary row: four metric cards, or the fetch-failure banner.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use thesisos_core::domain::CompanySnapshot;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, snapshot: &CompanySnapshot) {
    let metrics = snapshot.summary();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (metric, col) in metrics.iter().zip(cols.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::card_border(false))
            .style(theme::card())
            .title(format!(" {} ", metric.title))
            .title_style(theme::metric_title());
        let value = Paragraph::new(Span::styled(metric.value, theme::metric_value()))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(value, *col);
    }
}

/// The one message a failed submission leaves on screen.
pub fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let banner = Rect {
        height: area.height.min(3),
        ..area
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative());
    let para = Paragraph::new(Span::styled(message, theme::negative())).block(block);
    f.render_widget(para, banner);
}
