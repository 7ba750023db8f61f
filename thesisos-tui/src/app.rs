//! Application state: single-owner, main-thread only.
//!
//! All dashboard state lives here: the ticker input, the session (snapshot +
//! thesis form), the field cursor, and cross-cutting status/error state.

use std::collections::VecDeque;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use thesisos_core::config::ThesisConfig;
use thesisos_core::data::DataProvider;
use thesisos_core::domain::{Choice, Commodity, Horizon, NoteField};
use thesisos_core::session::{Session, SubmitOutcome};

/// Longest ticker the input accepts.
pub const MAX_TICKER_LEN: usize = 16;

/// Error history cap.
pub const ERROR_HISTORY_LEN: usize = 50;

/// Which thesis tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    Macro,
    Commodities,
    SupplyChain,
    Financials,
    Risks,
    Decision,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Macro,
        Tab::Commodities,
        Tab::SupplyChain,
        Tab::Financials,
        Tab::Risks,
        Tab::Decision,
    ];

    pub fn index(self) -> usize {
        match self {
            Tab::Macro => 0,
            Tab::Commodities => 1,
            Tab::SupplyChain => 2,
            Tab::Financials => 3,
            Tab::Risks => 4,
            Tab::Decision => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Tab::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Macro => "Macro",
            Tab::Commodities => "Commodities",
            Tab::SupplyChain => "Supply Chain",
            Tab::Financials => "Financials",
            Tab::Risks => "Risks",
            Tab::Decision => "Decision",
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % 6]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + 5) % 6]
    }

    /// Focusable controls on this tab, top to bottom.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Tab::Macro => &[
                Field::Inflation,
                Field::Rates,
                Field::Note(NoteField::MacroInsight),
            ],
            Tab::Commodities => &[Field::Commodities, Field::Note(NoteField::CommodityInsight)],
            Tab::SupplyChain => &[Field::SupplyStress, Field::Note(NoteField::Bottlenecks)],
            Tab::Financials => &[Field::Note(NoteField::FinancialInsight)],
            Tab::Risks => &[Field::Note(NoteField::Risks)],
            Tab::Decision => &[
                Field::Decision,
                Field::Confidence,
                Field::Note(NoteField::FinalThesis),
                Field::Save,
            ],
        }
    }
}

/// A focusable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Ticker,
    Horizon,
    Generate,
    Inflation,
    Rates,
    Commodities,
    SupplyStress,
    Decision,
    Confidence,
    Note(NoteField),
    Save,
}

impl Field {
    pub fn is_text(self) -> bool {
        matches!(self, Field::Ticker | Field::Note(_))
    }
}

/// Input panel controls, always focusable.
pub const INPUT_FIELDS: [Field; 3] = [Field::Ticker, Field::Horizon, Field::Generate];

/// Keyboard mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing into the focused text field.
    Editing,
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: &'static str,
    pub message: String,
    pub context: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    Help,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub mode: Mode,

    // Input panel
    pub ticker_input: String,
    pub horizon: Horizon,

    // Thesis form navigation
    pub session: Session,
    pub active_tab: Tab,
    /// Index into [`AppState::focusable_fields`].
    pub cursor: usize,
    pub commodity_cursor: usize,

    /// Set by input handling; the event loop performs the fetch.
    pub submit_requested: bool,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,

    provider: Box<dyn DataProvider>,
    /// False until the first thesis loads; the restored tab survives that load.
    loaded_once: bool,
}

impl AppState {
    pub fn new(provider: Box<dyn DataProvider>, config: &ThesisConfig) -> Self {
        Self {
            running: true,
            mode: Mode::Normal,
            ticker_input: String::new(),
            horizon: config.ui.default_horizon,
            session: Session::new(),
            active_tab: Tab::Macro,
            cursor: 0,
            commodity_cursor: 0,
            submit_requested: false,
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_LEN),
            error_scroll: 0,
            overlay: if config.ui.show_welcome {
                Overlay::Welcome
            } else {
                Overlay::None
            },
            provider,
            loaded_once: false,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// True once a ticker has loaded and the tabs are visible.
    pub fn has_thesis(&self) -> bool {
        self.session.active().is_some()
    }

    /// Input panel controls, followed by the active tab's controls when loaded.
    pub fn focusable_fields(&self) -> Vec<Field> {
        let mut fields = INPUT_FIELDS.to_vec();
        if self.has_thesis() {
            fields.extend_from_slice(self.active_tab.fields());
        }
        fields
    }

    pub fn focused(&self) -> Field {
        let fields = self.focusable_fields();
        fields
            .get(self.cursor)
            .copied()
            .unwrap_or(Field::Ticker)
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focused() == field
    }

    pub fn is_editing(&self, field: Field) -> bool {
        self.mode == Mode::Editing && self.is_focused(field)
    }

    pub fn move_cursor(&mut self, delta: i32) {
        let count = self.focusable_fields().len() as i64;
        self.cursor = (self.cursor as i64 + delta as i64).clamp(0, count - 1) as usize;
    }

    pub fn focus(&mut self, field: Field) {
        if let Some(i) = self.focusable_fields().iter().position(|f| *f == field) {
            self.cursor = i;
        }
    }

    /// Switch tabs. A cursor inside the old tab moves to the new tab's first field.
    pub fn set_tab(&mut self, tab: Tab) {
        let in_tab = self.cursor >= INPUT_FIELDS.len();
        self.active_tab = tab;
        self.mode = Mode::Normal;
        if in_tab {
            self.cursor = INPUT_FIELDS.len();
        }
    }

    /// `h`/`l` on the focused control: cycle selects, step sliders, move
    /// the commodity option cursor.
    pub fn adjust(&mut self, delta: i32) {
        let focused = self.focused();
        if focused == Field::Horizon {
            self.horizon = self.horizon.cycle(delta);
            return;
        }
        if focused == Field::Commodities {
            let len = Commodity::ALL.len() as i64;
            self.commodity_cursor =
                (self.commodity_cursor as i64 + delta as i64).rem_euclid(len) as usize;
            return;
        }
        let Some(form) = self.session.form_mut() else {
            return;
        };
        match focused {
            Field::Inflation => form.macro_view.inflation = form.macro_view.inflation.cycle(delta),
            Field::Rates => form.macro_view.rates = form.macro_view.rates.cycle(delta),
            Field::SupplyStress => {
                form.supply_chain.stress = form.supply_chain.stress.step(delta as i64)
            }
            Field::Decision => form.decision.decision = form.decision.decision.cycle(delta),
            Field::Confidence => {
                form.decision.confidence = form.decision.confidence.step(delta as i64)
            }
            _ => {}
        }
    }

    /// Toggle the commodity under the option cursor.
    pub fn toggle_commodity(&mut self) {
        if self.focused() != Field::Commodities {
            return;
        }
        let commodity = Commodity::ALL[self.commodity_cursor % Commodity::ALL.len()];
        if let Some(form) = self.session.form_mut() {
            form.commodities.toggle(commodity);
        }
    }

    /// `Enter` in normal mode.
    pub fn activate(&mut self) {
        match self.focused() {
            Field::Ticker | Field::Note(_) => self.mode = Mode::Editing,
            Field::Generate => self.request_submit(),
            Field::Save => self.set_warning("Saving theses is not available yet (v1)"),
            Field::Commodities => self.toggle_commodity(),
            _ => self.adjust(1),
        }
    }

    /// Queue a submission for the event loop. Blank tickers are ignored.
    pub fn request_submit(&mut self) {
        self.mode = Mode::Normal;
        let ticker = self.ticker_input.trim();
        if ticker.is_empty() {
            self.set_warning("Enter a ticker first");
            return;
        }
        self.set_status(format!("Fetching {}...", ticker.to_uppercase()));
        self.submit_requested = true;
    }

    /// Perform the queued submission. Blocks on the provider.
    pub fn run_submission(&mut self) {
        self.submit_requested = false;
        let outcome = self
            .session
            .submit(self.provider.as_ref(), &self.ticker_input, self.horizon);

        match outcome {
            SubmitOutcome::Ignored => self.set_warning("Enter a ticker first"),
            SubmitOutcome::Loaded => {
                if self.loaded_once {
                    self.active_tab = Tab::Macro;
                }
                self.loaded_once = true;
                self.commodity_cursor = 0;
                self.cursor = INPUT_FIELDS.len();
                let msg = self
                    .session
                    .active()
                    .map(|a| format!("Loaded {} from {}", a.ticker, a.source.label()))
                    .unwrap_or_default();
                self.set_status(msg);
            }
            SubmitOutcome::Failed(err) => {
                let context = self
                    .session
                    .failure()
                    .map(|f| f.ticker.clone())
                    .unwrap_or_default();
                // The failure banner is the only message on screen.
                self.status_message = None;
                self.record_error(err.category(), err.to_string(), context);
                self.focus(Field::Ticker);
            }
        }
    }

    /// Append a character to the field being edited.
    pub fn type_char(&mut self, c: char) {
        match self.focused() {
            Field::Ticker => {
                if self.ticker_input.chars().count() < MAX_TICKER_LEN && !c.is_whitespace() {
                    self.ticker_input.push(c);
                }
            }
            Field::Note(note) => {
                if let Some(form) = self.session.form_mut() {
                    form.note_mut(note).push(c);
                }
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focused() {
            Field::Ticker => {
                self.ticker_input.pop();
            }
            Field::Note(note) => {
                if let Some(form) = self.session.form_mut() {
                    form.note_mut(note).pop();
                }
            }
            _ => {}
        }
    }

    /// Push a record to the error history, capping at [`ERROR_HISTORY_LEN`].
    pub fn record_error(&mut self, category: &'static str, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message,
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_LEN {
            self.error_history.pop_back();
        }
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use thesisos_core::data::{DataFetchError, DataSource, FetchResult};
    use thesisos_core::domain::{Decision, InflationTrend, Ticker};

    /// Knows AAPL; everything else is not found.
    pub(crate) struct StubProvider;

    impl DataProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn fetch_info(&self, ticker: &Ticker) -> Result<FetchResult, DataFetchError> {
            if ticker.as_str() != "AAPL" {
                return Err(DataFetchError::SymbolNotFound {
                    symbol: ticker.to_string(),
                });
            }
            let info = serde_json::json!({
                "shortName": "Apple Inc.",
                "sector": "Technology",
                "country": "United States",
                "currency": "USD",
                "grossMargins": 0.153,
            });
            Ok(FetchResult {
                ticker: ticker.clone(),
                info: info.as_object().cloned().unwrap_or_default(),
                source: DataSource::Fixture,
            })
        }
    }

    pub(crate) fn app() -> AppState {
        let mut config = ThesisConfig::default();
        config.ui.show_welcome = false;
        AppState::new(Box::new(StubProvider), &config)
    }

    pub(crate) fn loaded_app() -> AppState {
        let mut app = app();
        app.ticker_input = "aapl".into();
        app.request_submit();
        app.run_submission();
        app
    }

    #[test]
    fn tab_cycle() {
        assert_eq!(Tab::Macro.next(), Tab::Commodities);
        assert_eq!(Tab::Decision.next(), Tab::Macro);
        assert_eq!(Tab::Macro.prev(), Tab::Decision);
        assert_eq!(Tab::Commodities.prev(), Tab::Macro);
    }

    #[test]
    fn tab_from_index() {
        for i in 0..6 {
            let t = Tab::from_index(i).unwrap();
            assert_eq!(t.index(), i);
        }
        assert!(Tab::from_index(6).is_none());
    }

    #[test]
    fn only_input_fields_before_loading() {
        let app = app();
        assert_eq!(app.focusable_fields(), INPUT_FIELDS.to_vec());
    }

    #[test]
    fn blank_ticker_does_not_queue_submission() {
        let mut app = app();
        app.ticker_input = "  ".into();
        app.request_submit();
        assert!(!app.submit_requested);
        assert_eq!(app.status_message.as_ref().unwrap().1, StatusLevel::Warning);
    }

    #[test]
    fn successful_submission_focuses_first_tab_field() {
        let app = loaded_app();
        assert!(app.has_thesis());
        assert!(!app.submit_requested);
        assert_eq!(app.focused(), Field::Inflation);
        assert_eq!(app.status_message.as_ref().unwrap().1, StatusLevel::Info);
    }

    #[test]
    fn failed_submission_records_one_error_and_clears_status() {
        let mut app = app();
        app.ticker_input = "zzzz".into();
        app.request_submit();
        app.run_submission();
        assert!(!app.has_thesis());
        assert!(app.status_message.is_none());
        assert_eq!(app.error_history.len(), 1);
        assert_eq!(app.error_history[0].category, "TICKER");
        assert_eq!(app.error_history[0].context, "ZZZZ");
        assert_eq!(app.focused(), Field::Ticker);
    }

    #[test]
    fn adjust_cycles_selects_and_clamps_sliders() {
        let mut app = loaded_app();
        app.adjust(1);
        assert_eq!(
            app.session.active().unwrap().form.macro_view.inflation,
            InflationTrend::Falling
        );

        app.set_tab(Tab::Decision);
        app.adjust(-1);
        assert_eq!(app.session.active().unwrap().form.decision.decision, Decision::Avoid);

        app.move_cursor(1);
        assert_eq!(app.focused(), Field::Confidence);
        for _ in 0..10 {
            app.adjust(1);
        }
        assert_eq!(app.session.active().unwrap().form.decision.confidence.get(), 5);
        for _ in 0..10 {
            app.adjust(-1);
        }
        assert_eq!(app.session.active().unwrap().form.decision.confidence.get(), 1);
    }

    #[test]
    fn horizon_cycles_from_input_panel() {
        let mut app = app();
        app.focus(Field::Horizon);
        app.adjust(1);
        assert_eq!(app.horizon, Horizon::Medium);
        app.adjust(-2);
        assert_eq!(app.horizon, Horizon::Long);
    }

    #[test]
    fn commodity_toggle_uses_option_cursor() {
        let mut app = loaded_app();
        app.set_tab(Tab::Commodities);
        assert_eq!(app.focused(), Field::Commodities);
        app.adjust(2);
        app.toggle_commodity();
        let form = &app.session.active().unwrap().form;
        assert!(form.commodities.is_selected(Commodity::Copper));
        assert_eq!(form.commodities.exposures.len(), 1);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = loaded_app();
        app.move_cursor(100);
        assert_eq!(app.focused(), Field::Note(NoteField::MacroInsight));
        app.move_cursor(-100);
        assert_eq!(app.focused(), Field::Ticker);
    }

    #[test]
    fn save_only_warns() {
        let mut app = loaded_app();
        app.set_tab(Tab::Decision);
        app.focus(Field::Save);
        app.activate();
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Warning);
        assert!(msg.contains("not available"));
    }

    #[test]
    fn typing_goes_to_focused_note() {
        let mut app = loaded_app();
        app.set_tab(Tab::Risks);
        app.activate();
        assert_eq!(app.mode, Mode::Editing);
        for c in "bear".chars() {
            app.type_char(c);
        }
        app.backspace();
        assert_eq!(app.session.active().unwrap().form.risks.scenarios, "bea");
    }

    #[test]
    fn ticker_input_is_bounded() {
        let mut app = app();
        for _ in 0..40 {
            app.type_char('A');
        }
        app.type_char(' ');
        assert_eq!(app.ticker_input.len(), MAX_TICKER_LEN);
    }

    #[test]
    fn error_history_caps_at_50() {
        let mut app = app();
        for i in 0..60 {
            app.record_error("DATA", format!("error {i}"), String::new());
        }
        assert_eq!(app.error_history.len(), ERROR_HISTORY_LEN);
        assert!(app.error_history[0].message.contains("59"));
    }
}
