//! UI preference persistence: JSON save/load across restarts.
//!
//! Only navigation preferences are stored; thesis content lives for one
//! session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use thesisos_core::domain::Horizon;

use crate::app::{AppState, Overlay, Tab, MAX_TICKER_LEN};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub last_ticker: String,
    pub horizon: Horizon,
    pub active_tab: Tab,
    pub welcome_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            last_ticker: String::new(),
            horizon: Horizon::default(),
            active_tab: Tab::Macro,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring corrupt UI state {}: {e}", path.display());
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        last_ticker: app.ticker_input.trim().to_string(),
        horizon: app.horizon,
        active_tab: app.active_tab,
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

/// Apply persisted state to AppState.
///
/// The config's `show_welcome = false` wins over a fresh state file. A hand-edited
/// ticker is held to the same rules as typed input.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.ticker_input = state
        .last_ticker
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(MAX_TICKER_LEN)
        .collect();
    app.horizon = state.horizon;
    app.active_tab = state.active_tab;
    if state.welcome_dismissed && app.overlay == Overlay::Welcome {
        app.overlay = Overlay::None;
    }
}
