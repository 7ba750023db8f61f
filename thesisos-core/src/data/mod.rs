//! Company-info providers

pub mod fixture;
pub mod provider;
pub mod yahoo;

use std::path::Path;

use crate::config::ProviderConfig;

pub use fixture::FixtureProvider;
pub use provider::{DataFetchError, DataProvider, DataSource, FetchResult, FETCH_FAILED_MESSAGE};
pub use yahoo::YahooProvider;

/// Fixture files from `offline` when given, live Yahoo Finance otherwise.
pub fn build_provider(
    config: &ProviderConfig,
    offline: Option<&Path>,
) -> Result<Box<dyn DataProvider>, DataFetchError> {
    match offline {
        Some(dir) => {
            log::info!("offline mode, reading fixtures from {}", dir.display());
            Ok(Box::new(FixtureProvider::new(dir)))
        }
        None => Ok(Box::new(YahooProvider::new(config)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_dir_selects_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let provider = build_provider(&ProviderConfig::default(), Some(dir.path())).unwrap();
        assert_eq!(provider.name(), "fixture");
    }
}
