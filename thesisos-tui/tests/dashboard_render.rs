//! Renders the dashboard into a ratatui `TestBackend` and checks what is on screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::json;

use thesisos_core::config::ThesisConfig;
use thesisos_core::data::{DataFetchError, DataProvider, DataSource, FetchResult};
use thesisos_core::domain::Ticker;
use thesisos_core::FETCH_FAILED_MESSAGE;
use thesisos_tui::app::Overlay;
use thesisos_tui::{handle_key, ui, AppState};

struct CannedProvider;

impl DataProvider for CannedProvider {
    fn name(&self) -> &str {
        "canned"
    }

    fn fetch_info(&self, ticker: &Ticker) -> Result<FetchResult, DataFetchError> {
        let info = match ticker.as_str() {
            "AAPL" => json!({
                "shortName": "Apple Inc.",
                "sector": "Technology",
                "country": "United States",
                "currency": "USD",
                "grossMargins": 0.153,
                "debtToEquity": 151.864,
            }),
            "XYZ" => json!({ "shortName": "Sparse Corp" }),
            _ => {
                return Err(DataFetchError::SymbolNotFound {
                    symbol: ticker.to_string(),
                })
            }
        };
        Ok(FetchResult {
            ticker: ticker.clone(),
            info: info.as_object().cloned().unwrap(),
            source: DataSource::Fixture,
        })
    }
}

fn new_app() -> AppState {
    let mut config = ThesisConfig::default();
    config.ui.show_welcome = false;
    AppState::new(Box::new(CannedProvider), &config)
}

fn press(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

/// Type a ticker into the input card and submit it the way the event loop does.
fn submit(app: &mut AppState, ticker: &str) {
    press(app, KeyCode::Enter);
    for c in ticker.chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
    assert!(app.submit_requested);
    app.run_submission();
}

fn screen(app: &AppState) -> String {
    screen_sized(app, 120, 40)
}

fn screen_sized(app: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn idle_screen_shows_input_card() {
    let app = new_app();
    let s = screen(&app);
    assert!(s.contains("ThesisOS"));
    assert!(s.contains("Stock Ticker: AAPL, MSFT, NVDA"));
    assert!(s.contains("Time Horizon: < Short >"));
    assert!(s.contains("Generate Thesis"));
    assert!(!s.contains("1 Macro"));
}

#[test]
fn complete_response_fills_summary_cards() {
    let mut app = new_app();
    submit(&mut app, "aapl");
    let s = screen(&app);
    for value in ["Apple Inc.", "Technology", "United States", "USD"] {
        assert!(s.contains(value), "missing {value}");
    }
    for title in ["Company", "Sector", "Country", "Currency"] {
        assert!(s.contains(&format!(" {title} ")), "missing card {title}");
    }
    assert!(s.contains("1 Macro"));
    assert!(s.contains("6 Decision"));
    assert!(s.contains("What macro force matters most for this asset?"));
}

#[test]
fn financials_tab_formats_margin() {
    let mut app = new_app();
    submit(&mut app, "AAPL");
    press(&mut app, KeyCode::Char('4'));
    let s = screen(&app);
    assert!(s.contains("Gross Margin: 15.3%"));
    assert!(s.contains("Debt / Equity: 151.864"));
}

#[test]
fn missing_fields_render_sentinels() {
    let mut app = new_app();
    submit(&mut app, "xyz");
    let s = screen(&app);
    assert!(s.contains("Sparse Corp"));
    assert_eq!(s.matches("N/A").count(), 3);

    press(&mut app, KeyCode::Char('4'));
    let s = screen(&app);
    assert!(s.contains("Gross Margin: 0.0%"));
    assert!(s.contains("Debt / Equity: N/A"));
}

#[test]
fn failed_fetch_shows_one_message_and_nothing_else() {
    let mut app = new_app();
    submit(&mut app, "AAPL");
    submit_again(&mut app, "ZZZZ");

    let s = screen(&app);
    assert_eq!(s.matches(FETCH_FAILED_MESSAGE).count(), 1);
    assert!(!s.contains("Apple Inc."));
    assert!(!s.contains(" Sector "));
    assert!(!s.contains("1 Macro"));
    assert!(!s.contains("Inflation Trend"));
}

/// The ticker field already holds text; clear it before typing.
fn submit_again(app: &mut AppState, ticker: &str) {
    press(app, KeyCode::Char('k'));
    press(app, KeyCode::Char('k'));
    press(app, KeyCode::Char('k'));
    press(app, KeyCode::Enter);
    for _ in 0..16 {
        press(app, KeyCode::Backspace);
    }
    for c in ticker.chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
    app.run_submission();
}

#[test]
fn stress_slider_renders_clamped_value() {
    let mut app = new_app();
    submit(&mut app, "AAPL");
    press(&mut app, KeyCode::Char('3'));
    for _ in 0..9 {
        press(&mut app, KeyCode::Char('l'));
    }
    let s = screen(&app);
    assert!(s.contains("Supply Chain Stress Level: [====================] 5 / 5"));
}

#[test]
fn decision_tab_shows_save_button() {
    let mut app = new_app();
    submit(&mut app, "AAPL");
    press(&mut app, KeyCode::Char('6'));
    let s = screen(&app);
    assert!(s.contains("Final Decision: < Accumulate >"));
    assert!(s.contains("Confidence Level: [==========          ] 3 / 5"));
    assert!(s.contains("Save Thesis (v1)"));
}

#[test]
fn fetching_frame_names_ticker() {
    let mut app = new_app();
    press(&mut app, KeyCode::Enter);
    for c in "msft".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    assert!(screen(&app).contains("Fetching MSFT..."));
}

#[test]
fn help_overlay_lists_keys() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.overlay, Overlay::Help);
    let s = screen(&app);
    assert!(s.contains("Toggle commodity exposure"));
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.overlay, Overlay::None);
}

#[test]
fn error_history_keeps_detail() {
    let mut app = new_app();
    submit(&mut app, "ZZZZ");
    press(&mut app, KeyCode::Char('e'));
    let s = screen(&app);
    assert!(s.contains("Error History (1)"));
    assert!(s.contains("[TICKER]"));
}

#[test]
fn long_note_keeps_cursor_in_view() {
    let mut app = new_app();
    submit(&mut app, "AAPL");
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Enter);
    for _ in 0..1499 {
        press(&mut app, KeyCode::Char('x'));
    }
    press(&mut app, KeyCode::Char('Z'));

    let s = screen_sized(&app, 80, 30);
    assert!(s.contains("Key Risks & Scenarios [Esc]done"));
    assert!(s.contains("Z_"), "tail of the note scrolled out of view");
}
