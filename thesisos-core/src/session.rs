//! Session workflow: submit a ticker, hold the snapshot and thesis form.
//!
//! One submission means one provider call. A successful submission replaces
//! the previous snapshot and starts a fresh form; a failed one leaves only a
//! single user-facing message and no summary or form.

use crate::data::{DataFetchError, DataProvider, DataSource};
use crate::domain::{CompanySnapshot, Horizon, ThesisForm, Ticker, TickerError};

/// Thesis being drafted for a loaded ticker.
#[derive(Debug, Clone)]
pub struct ActiveThesis {
    pub ticker: Ticker,
    pub horizon: Horizon,
    pub snapshot: CompanySnapshot,
    pub source: DataSource,
    pub form: ThesisForm,
}

/// What is left after a failed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedSubmission {
    pub ticker: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Ready(Box<ActiveThesis>),
    Failed(FailedSubmission),
}

/// Result of one call to [`Session::submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Blank ticker; nothing was fetched and the state is unchanged.
    Ignored,
    Loaded,
    Failed(DataFetchError),
}

#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    submissions: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn active(&self) -> Option<&ActiveThesis> {
        match &self.state {
            SessionState::Ready(active) => Some(active),
            _ => None,
        }
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveThesis> {
        match &mut self.state {
            SessionState::Ready(active) => Some(active),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut ThesisForm> {
        self.active_mut().map(|a| &mut a.form)
    }

    pub fn failure(&self) -> Option<&FailedSubmission> {
        match &self.state {
            SessionState::Failed(f) => Some(f),
            _ => None,
        }
    }

    /// Number of submissions that reached the provider.
    pub fn submissions(&self) -> usize {
        self.submissions
    }

    /// Validate the ticker, fetch once, and move to `Ready` or `Failed`.
    pub fn submit(
        &mut self,
        provider: &dyn DataProvider,
        raw_ticker: &str,
        horizon: Horizon,
    ) -> SubmitOutcome {
        let ticker = match Ticker::parse(raw_ticker) {
            Ok(t) => t,
            Err(TickerError::Empty) => return SubmitOutcome::Ignored,
            Err(e) => {
                let err = DataFetchError::InvalidTicker {
                    input: raw_ticker.trim().to_string(),
                    reason: e.to_string(),
                };
                return self.fail(raw_ticker.trim().to_uppercase(), err);
            }
        };

        log::info!("fetching {ticker} from {} (horizon {horizon})", provider.name());
        self.submissions += 1;

        match provider.fetch_info(&ticker) {
            Ok(result) => {
                log::info!(
                    "loaded {} from {} ({} fields)",
                    result.ticker,
                    result.source.label(),
                    result.info.len()
                );
                self.state = SessionState::Ready(Box::new(ActiveThesis {
                    snapshot: CompanySnapshot::from_info(&result.info),
                    ticker,
                    horizon,
                    source: result.source,
                    form: ThesisForm::default(),
                }));
                SubmitOutcome::Loaded
            }
            Err(e) => self.fail(ticker.to_string(), e),
        }
    }

    fn fail(&mut self, ticker: String, err: DataFetchError) -> SubmitOutcome {
        log::warn!("fetch failed for {ticker}: {err}");
        self.state = SessionState::Failed(FailedSubmission {
            ticker,
            message: err.user_message().to_string(),
        });
        SubmitOutcome::Failed(err)
    }
}
