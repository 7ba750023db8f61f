//! ThesisOS TUI: keyboard-driven investment thesis dashboard.
//!
//! Layout, top to bottom:
//! - Header card
//! - Input card: ticker, time horizon, Generate Thesis
//! - Company summary (four metric cards) or the fetch-failure banner
//! - Six thesis tabs: Macro, Commodities, Supply Chain, Financials, Risks, Decision
//! - Status bar

pub mod app;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
