//! ThesisOS Core: domain types, market-data providers, session workflow.
//!
//! This crate holds everything the dashboard and CLI share:
//! - Domain types (ticker, select options, 1–5 levels, company snapshot, thesis form)
//! - Provider trait with Yahoo Finance and offline fixture implementations
//! - Session state machine: submit → Ready | Failed
//! - TOML configuration

pub mod config;
pub mod data;
pub mod domain;
pub mod session;

pub use config::{ConfigError, ThesisConfig};
pub use data::{build_provider, DataFetchError, DataProvider, FETCH_FAILED_MESSAGE};
pub use session::{Session, SessionState, SubmitOutcome};
