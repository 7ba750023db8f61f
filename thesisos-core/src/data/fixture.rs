//! Offline provider backed by a directory of JSON info files.
//!
//! `<dir>/<TICKER>.json` holds one flat info object, the same shape the
//! Yahoo provider produces after flattening.

use std::path::PathBuf;

use super::provider::{DataFetchError, DataProvider, DataSource, FetchResult};
use crate::domain::{InfoMap, Ticker};

pub struct FixtureProvider {
    dir: PathBuf,
}

impl FixtureProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, ticker: &Ticker) -> PathBuf {
        self.dir.join(format!("{}.json", ticker.as_str()))
    }
}

impl DataProvider for FixtureProvider {
    fn name(&self) -> &str {
        "fixture"
    }

    fn fetch_info(&self, ticker: &Ticker) -> Result<FetchResult, DataFetchError> {
        let path = self.path_for(ticker);
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataFetchError::SymbolNotFound {
                symbol: ticker.to_string(),
            },
            _ => DataFetchError::Other(format!("read {}: {e}", path.display())),
        })?;

        let info: InfoMap = serde_json::from_str(&content).map_err(|e| {
            DataFetchError::ResponseFormatChanged(format!("parse {}: {e}", path.display()))
        })?;

        if info.is_empty() {
            return Err(DataFetchError::EmptyResponse {
                symbol: ticker.to_string(),
            });
        }

        Ok(FetchResult {
            ticker: ticker.clone(),
            info,
            source: DataSource::Fixture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(s: &str) -> Ticker {
        Ticker::parse(s).unwrap()
    }

    #[test]
    fn reads_info_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("MSFT.json"),
            r#"{"shortName": "Microsoft Corporation", "grossMargins": 0.69}"#,
        )
        .unwrap();

        let provider = FixtureProvider::new(dir.path());
        let result = provider.fetch_info(&ticker("msft")).unwrap();
        assert_eq!(result.source, DataSource::Fixture);
        assert_eq!(result.info["shortName"], "Microsoft Corporation");
    }

    #[test]
    fn missing_file_is_symbol_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FixtureProvider::new(dir.path());
        assert!(matches!(
            provider.fetch_info(&ticker("NOPE")),
            Err(DataFetchError::SymbolNotFound { .. })
        ));
    }

    #[test]
    fn corrupt_file_is_format_change() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("BAD.json"), "{ not json").unwrap();
        let provider = FixtureProvider::new(dir.path());
        assert!(matches!(
            provider.fetch_info(&ticker("BAD")),
            Err(DataFetchError::ResponseFormatChanged(_))
        ));
    }

    #[test]
    fn empty_object_is_nothing_usable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("EMPTY.json"), "{}").unwrap();
        let provider = FixtureProvider::new(dir.path());
        assert!(matches!(
            provider.fetch_info(&ticker("EMPTY")),
            Err(DataFetchError::EmptyResponse { .. })
        ));
    }
}
