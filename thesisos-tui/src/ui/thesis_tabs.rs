//! Tab bar and the six thesis sections.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use thesisos_core::domain::{Commodity, NoteField};
use thesisos_core::session::ActiveThesis;

use crate::app::{AppState, Field, Tab};
use crate::theme;
use crate::ui::widgets::{select, slider, text_area};

pub fn render(f: &mut Frame, area: Rect, app: &AppState, active: &ActiveThesis) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let titles: Vec<String> = Tab::ALL
        .iter()
        .map(|t| format!("{} {}", t.index() + 1, t.label()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(theme::muted())
        .highlight_style(theme::accent_bold())
        .divider(Span::styled("|", theme::muted()));
    f.render_widget(tabs, chunks[0]);

    let in_tab = app.active_tab.fields().contains(&app.focused());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::card_border(in_tab))
        .style(theme::card())
        .title(format!(" {} · {} ", active.ticker, active.horizon))
        .title_style(theme::muted());
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);

    match app.active_tab {
        Tab::Macro => render_macro(f, inner, app, active),
        Tab::Commodities => render_commodities(f, inner, app, active),
        Tab::SupplyChain => render_supply_chain(f, inner, app, active),
        Tab::Financials => render_financials(f, inner, app, active),
        Tab::Risks => note(f, inner, app, active, NoteField::Risks),
        Tab::Decision => render_decision(f, inner, app, active),
    }
}

/// Control lines on top, the note filling the rest, optional footer below.
fn split(area: Rect, controls: u16, footer: u16) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(controls),
            Constraint::Min(3),
            Constraint::Length(footer),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

fn note(f: &mut Frame, area: Rect, app: &AppState, active: &ActiveThesis, field: NoteField) {
    let control = Field::Note(field);
    text_area::render(
        f,
        area,
        field,
        active.form.note(field),
        app.is_focused(control),
        app.is_editing(control),
    );
}

fn render_macro(f: &mut Frame, area: Rect, app: &AppState, active: &ActiveThesis) {
    let m = &active.form.macro_view;
    let [controls, body, _] = split(area, 3, 0);
    let lines = vec![
        select::line(
            "Inflation Trend",
            m.inflation,
            app.is_focused(Field::Inflation),
            None,
        ),
        select::line(
            "Interest Rates Outlook",
            m.rates,
            app.is_focused(Field::Rates),
            None,
        ),
    ];
    f.render_widget(Paragraph::new(lines), controls);
    note(f, body, app, active, NoteField::MacroInsight);
}

fn render_commodities(f: &mut Frame, area: Rect, app: &AppState, active: &ActiveThesis) {
    let c = &active.form.commodities;
    let focused = app.is_focused(Field::Commodities);
    let label_style = if focused { theme::focused() } else { theme::muted() };
    let hint = if focused { "  [h/l]move [Space]toggle" } else { "" };

    let mut lines = vec![Line::from(vec![
        Span::styled("Key Commodity Exposures", label_style),
        Span::styled(hint, theme::muted()),
    ])];
    lines.extend(select::multi_lines::<Commodity>(
        |option| c.is_selected(option),
        focused.then_some(app.commodity_cursor),
    ));

    let [controls, body, _] = split(area, lines.len() as u16 + 1, 0);
    f.render_widget(Paragraph::new(lines), controls);
    note(f, body, app, active, NoteField::CommodityInsight);
}

fn render_supply_chain(f: &mut Frame, area: Rect, app: &AppState, active: &ActiveThesis) {
    let [controls, body, _] = split(area, 2, 0);
    let line = slider::line(
        "Supply Chain Stress Level",
        active.form.supply_chain.stress,
        app.is_focused(Field::SupplyStress),
    );
    f.render_widget(Paragraph::new(line), controls);
    note(f, body, app, active, NoteField::Bottlenecks);
}

fn render_financials(f: &mut Frame, area: Rect, app: &AppState, active: &ActiveThesis) {
    let [controls, body, _] = split(area, 3, 0);
    let snap = &active.snapshot;
    let lines = vec![
        metric_line("Gross Margin", snap.gross_margin_display()),
        metric_line("Debt / Equity", snap.debt_to_equity_display()),
    ];
    f.render_widget(Paragraph::new(lines), controls);
    note(f, body, app, active, NoteField::FinancialInsight);
}

fn render_decision(f: &mut Frame, area: Rect, app: &AppState, active: &ActiveThesis) {
    let d = &active.form.decision;
    let [controls, body, footer] = split(area, 3, 1);
    let lines = vec![
        select::line(
            "Final Decision",
            d.decision,
            app.is_focused(Field::Decision),
            Some(theme::decision(d.decision)),
        ),
        slider::line(
            "Confidence Level",
            d.confidence,
            app.is_focused(Field::Confidence),
        ),
    ];
    f.render_widget(Paragraph::new(lines), controls);
    note(f, body, app, active, NoteField::FinalThesis);

    let save_style = if app.is_focused(Field::Save) {
        theme::focused()
    } else {
        theme::accent_bold()
    };
    f.render_widget(
        Paragraph::new(Span::styled("[ Save Thesis (v1) ]", save_style)),
        footer,
    );
}

fn metric_line(title: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{title:>14}: "), theme::metric_title()),
        Span::styled(value, theme::metric_value()),
    ])
}
