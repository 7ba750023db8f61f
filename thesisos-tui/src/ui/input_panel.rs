//! Header card and the ticker / horizon / Generate input card.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Field};
use crate::theme;
use crate::ui::widgets::select;

const TICKER_PLACEHOLDER: &str = "AAPL, MSFT, NVDA";

pub fn render_header(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::card_border(false))
        .style(theme::card())
        .title(" ThesisOS ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(Span::styled(
            "Automated Investment Thesis Builder",
            theme::text(),
        )),
        Line::from(Span::styled(
            "Macro → Commodities → Supply Chain → Company → Decision",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(text).block(block), area);
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let in_input = matches!(
        app.focused(),
        Field::Ticker | Field::Horizon | Field::Generate
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::card_border(in_input))
        .style(theme::card());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(2, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(ticker_line(app)), cols[0]);
    f.render_widget(
        Paragraph::new(select::line(
            "Time Horizon",
            app.horizon,
            app.is_focused(Field::Horizon),
            None,
        )),
        cols[1],
    );

    let button_style = if app.is_focused(Field::Generate) {
        theme::focused()
    } else {
        theme::accent_bold()
    };
    f.render_widget(
        Paragraph::new(Span::styled("[ Generate Thesis ]", button_style)),
        cols[2],
    );
}

fn ticker_line(app: &AppState) -> Line<'_> {
    let focused = app.is_focused(Field::Ticker);
    let editing = app.is_editing(Field::Ticker);
    let label_style = if focused { theme::focused() } else { theme::muted() };

    let mut spans = vec![Span::styled("Stock Ticker: ", label_style)];
    if app.ticker_input.is_empty() && !editing {
        spans.push(Span::styled(TICKER_PLACEHOLDER, theme::muted()));
    } else {
        spans.push(Span::styled(app.ticker_input.as_str(), theme::metric_value()));
    }
    if editing {
        spans.push(Span::styled("_", theme::accent()));
    }
    Line::from(spans)
}
