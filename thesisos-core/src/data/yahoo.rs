//! Yahoo Finance data provider.
//!
//! Looks up company info through Yahoo's v10 quoteSummary API. The endpoint
//! needs a session cookie plus a crumb token, both obtained lazily on the
//! first fetch and refreshed once when Yahoo answers 401.
//!
//! Yahoo Finance has no official API and is subject to unannounced format changes.
//! The fixture provider is the fallback when Yahoo is unavailable.

use std::sync::Mutex;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::REFERER;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use super::provider::{DataFetchError, DataProvider, DataSource, FetchResult};
use crate::config::ProviderConfig;
use crate::domain::{InfoMap, Ticker};

/// quoteSummary modules, in precedence order for duplicate keys.
pub const MODULES: [&str; 3] = ["price", "assetProfile", "financialData"];

const YAHOO_REFERER: &str = "https://finance.yahoo.com/";

#[derive(Debug, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummary,
}

#[derive(Debug, Deserialize)]
struct QuoteSummary {
    result: Option<Vec<serde_json::Map<String, Value>>>,
    error: Option<SummaryError>,
}

#[derive(Debug, Deserialize)]
struct SummaryError {
    code: String,
    #[serde(default)]
    description: String,
}

/// Yahoo Finance provider.
pub struct YahooProvider {
    client: Client,
    base_url: String,
    cookie_url: String,
    crumb: Mutex<Option<String>>,
}

impl YahooProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, DataFetchError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| DataFetchError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cookie_url: config.cookie_url.clone(),
            crumb: Mutex::new(None),
        })
    }

    fn summary_url(&self, ticker: &Ticker) -> String {
        format!(
            "{}/v10/finance/quoteSummary/{}",
            self.base_url,
            urlencoding::encode(ticker.as_str())
        )
    }

    fn cached_crumb(&self) -> Option<String> {
        self.crumb.lock().ok().and_then(|c| c.clone())
    }

    fn store_crumb(&self, crumb: Option<String>) {
        if let Ok(mut slot) = self.crumb.lock() {
            *slot = crumb;
        }
    }

    fn crumb(&self) -> Result<String, DataFetchError> {
        match self.cached_crumb() {
            Some(crumb) => Ok(crumb),
            None => self.refresh_crumb(),
        }
    }

    /// Visit the cookie endpoint, then ask for a crumb tied to that cookie.
    fn refresh_crumb(&self) -> Result<String, DataFetchError> {
        log::debug!("refreshing Yahoo session cookie and crumb");

        // The cookie endpoint usually answers 404 but still sets the cookie.
        self.client
            .get(&self.cookie_url)
            .header(REFERER, YAHOO_REFERER)
            .send()
            .map_err(network_error)?;

        let resp = self
            .client
            .get(format!("{}/v1/test/getcrumb", self.base_url))
            .header(REFERER, YAHOO_REFERER)
            .send()
            .map_err(network_error)?;

        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(DataFetchError::RateLimited {
                retry_after_secs: retry_after(&resp),
            });
        }

        let body = resp.text().map_err(network_error)?;
        let crumb = body.trim();
        if !status.is_success() || !is_plausible_crumb(crumb) {
            self.store_crumb(None);
            return Err(DataFetchError::AuthenticationRequired(format!(
                "Yahoo did not issue a crumb (HTTP {status})"
            )));
        }

        self.store_crumb(Some(crumb.to_string()));
        Ok(crumb.to_string())
    }

    fn request_summary(
        &self,
        ticker: &Ticker,
        crumb: &str,
    ) -> Result<(StatusCode, u64, String), DataFetchError> {
        let resp = self
            .client
            .get(self.summary_url(ticker))
            .query(&[("modules", MODULES.join(",").as_str()), ("crumb", crumb)])
            .header(REFERER, YAHOO_REFERER)
            .send()
            .map_err(network_error)?;

        let status = resp.status();
        let wait = retry_after(&resp);
        let body = resp.text().map_err(network_error)?;
        Ok((status, wait, body))
    }

    fn fetch_summary(&self, ticker: &Ticker) -> Result<InfoMap, DataFetchError> {
        let crumb = self.crumb()?;
        let (mut status, mut wait, mut body) = self.request_summary(ticker, &crumb)?;

        if status == StatusCode::UNAUTHORIZED {
            log::info!("Yahoo rejected the cached crumb, refreshing once");
            self.store_crumb(None);
            let crumb = self.refresh_crumb()?;
            (status, wait, body) = self.request_summary(ticker, &crumb)?;
            if status == StatusCode::UNAUTHORIZED {
                return Err(DataFetchError::AuthenticationRequired(
                    "Yahoo Finance rejected the session crumb".into(),
                ));
            }
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(DataFetchError::RateLimited {
                retry_after_secs: wait,
            });
        }

        parse_summary(ticker.as_str(), status.as_u16(), &body)
    }
}

impl DataProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch_info(&self, ticker: &Ticker) -> Result<FetchResult, DataFetchError> {
        let info = self.fetch_summary(ticker)?;
        Ok(FetchResult {
            ticker: ticker.clone(),
            info,
            source: DataSource::YahooFinance,
        })
    }
}

/// Turn a quoteSummary body into a flat info map.
pub fn parse_summary(symbol: &str, status: u16, body: &str) -> Result<InfoMap, DataFetchError> {
    let not_found = || DataFetchError::SymbolNotFound {
        symbol: symbol.to_string(),
    };

    let parsed = match serde_json::from_str::<QuoteSummaryResponse>(body) {
        Ok(p) => p,
        Err(_) if status == 404 => return Err(not_found()),
        Err(_) if !(200..300).contains(&status) => {
            return Err(DataFetchError::Other(format!("HTTP {status} for {symbol}")))
        }
        Err(e) => {
            return Err(DataFetchError::ResponseFormatChanged(format!(
                "failed to parse response for {symbol}: {e}"
            )))
        }
    };

    if let Some(err) = parsed.quote_summary.error {
        return Err(if err.code == "Not Found" {
            not_found()
        } else {
            DataFetchError::ResponseFormatChanged(format!("{}: {}", err.code, err.description))
        });
    }
    if status == 404 {
        return Err(not_found());
    }
    if !(200..300).contains(&status) {
        return Err(DataFetchError::Other(format!("HTTP {status} for {symbol}")));
    }

    let modules = parsed
        .quote_summary
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| DataFetchError::EmptyResponse {
            symbol: symbol.to_string(),
        })?;

    let info = flatten_modules(&modules);
    if info.is_empty() {
        return Err(DataFetchError::EmptyResponse {
            symbol: symbol.to_string(),
        });
    }
    Ok(info)
}

/// Merge module objects into one map.
///
/// `{"raw": x, "fmt": ..}` wrappers collapse to `x`; empty objects, nulls
/// and arrays are dropped; the first module to define a key wins.
pub fn flatten_modules(modules: &serde_json::Map<String, Value>) -> InfoMap {
    let mut info = InfoMap::new();
    let known = MODULES.iter().filter_map(|m| modules.get(*m));
    let extra = modules
        .iter()
        .filter(|(name, _)| !MODULES.contains(&name.as_str()))
        .map(|(_, v)| v);

    for module in known.chain(extra) {
        let Some(fields) = module.as_object() else {
            continue;
        };
        for (key, value) in fields {
            if info.contains_key(key) {
                continue;
            }
            if let Some(v) = scalar(value) {
                info.insert(key.clone(), v);
            }
        }
    }
    info
}

fn scalar(value: &Value) -> Option<Value> {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Some(value.clone()),
        Value::Object(obj) => match obj.get("raw") {
            Some(raw @ (Value::Number(_) | Value::String(_))) => Some(raw.clone()),
            _ => None,
        },
        Value::Null | Value::Array(_) => None,
    }
}

fn is_plausible_crumb(crumb: &str) -> bool {
    !crumb.is_empty()
        && crumb.len() <= 64
        && !crumb.contains('<')
        && !crumb.chars().any(char::is_whitespace)
}

fn retry_after(resp: &Response) -> u64 {
    resp.headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

fn network_error(e: reqwest::Error) -> DataFetchError {
    DataFetchError::NetworkUnreachable(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const AAPL_BODY: &str = r#"{
        "quoteSummary": {
            "result": [{
                "price": {
                    "shortName": "Apple Inc.",
                    "currency": "USD",
                    "regularMarketPrice": {"raw": 227.52, "fmt": "227.52"},
                    "postMarketChange": {}
                },
                "assetProfile": {
                    "sector": "Technology",
                    "country": "United States",
                    "companyOfficers": [{"name": "Tim Cook"}]
                },
                "financialData": {
                    "grossMargins": {"raw": 0.46206, "fmt": "46.21%"},
                    "debtToEquity": {"raw": 209.059, "fmt": "209.06"},
                    "currency": "EUR"
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn flattens_modules_into_info_keys() {
        let info = parse_summary("AAPL", 200, AAPL_BODY).unwrap();
        assert_eq!(info["shortName"], "Apple Inc.");
        assert_eq!(info["sector"], "Technology");
        assert_eq!(info["country"], "United States");
        assert_eq!(info["grossMargins"].as_f64(), Some(0.46206));
        assert_eq!(info["debtToEquity"].as_f64(), Some(209.059));
        assert_eq!(info["regularMarketPrice"].as_f64(), Some(227.52));
    }

    #[test]
    fn earlier_module_wins_duplicate_keys() {
        let info = parse_summary("AAPL", 200, AAPL_BODY).unwrap();
        assert_eq!(info["currency"], "USD");
    }

    #[test]
    fn drops_empty_objects_and_arrays() {
        let info = parse_summary("AAPL", 200, AAPL_BODY).unwrap();
        assert!(!info.contains_key("postMarketChange"));
        assert!(!info.contains_key("companyOfficers"));
    }

    #[test]
    fn not_found_body_maps_to_symbol_not_found() {
        let body = r#"{"quoteSummary":{"result":null,"error":{"code":"Not Found","description":"Quote not found for symbol: ZZZZ"}}}"#;
        match parse_summary("ZZZZ", 404, body) {
            Err(DataFetchError::SymbolNotFound { symbol }) => assert_eq!(symbol, "ZZZZ"),
            other => panic!("expected SymbolNotFound, got {other:?}"),
        }
    }

    #[test]
    fn bare_404_maps_to_symbol_not_found() {
        assert!(matches!(
            parse_summary("ZZZZ", 404, "<html>gone</html>"),
            Err(DataFetchError::SymbolNotFound { .. })
        ));
    }

    #[test]
    fn other_api_error_is_format_change() {
        let body = r#"{"quoteSummary":{"result":null,"error":{"code":"Bad Request","description":"Invalid Crumb"}}}"#;
        assert!(matches!(
            parse_summary("AAPL", 400, body),
            Err(DataFetchError::ResponseFormatChanged(_))
        ));
    }

    #[test]
    fn empty_result_is_nothing_usable() {
        let body = r#"{"quoteSummary":{"result":[],"error":null}}"#;
        assert!(matches!(
            parse_summary("AAPL", 200, body),
            Err(DataFetchError::EmptyResponse { .. })
        ));

        let body = r#"{"quoteSummary":{"result":[{"price":{}}],"error":null}}"#;
        assert!(matches!(
            parse_summary("AAPL", 200, body),
            Err(DataFetchError::EmptyResponse { .. })
        ));
    }

    #[test]
    fn garbage_body_is_format_change() {
        assert!(matches!(
            parse_summary("AAPL", 200, "not json"),
            Err(DataFetchError::ResponseFormatChanged(_))
        ));
    }

    #[test]
    fn server_error_without_body() {
        match parse_summary("AAPL", 503, "") {
            Err(DataFetchError::Other(msg)) => assert!(msg.contains("503")),
            other => panic!("expected Other, got {other:?}"),
        }
    }

    #[test]
    fn crumb_validation() {
        assert!(is_plausible_crumb("a1B2c3D4e5f"));
        assert!(!is_plausible_crumb(""));
        assert!(!is_plausible_crumb("<html>Too Many Requests</html>"));
        assert!(!is_plausible_crumb("two words"));
    }

    #[test]
    fn summary_url_encodes_index_symbols() {
        let provider = YahooProvider::new(&ProviderConfig::default()).unwrap();
        let ticker = Ticker::parse("^gspc").unwrap();
        assert_eq!(
            provider.summary_url(&ticker),
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/%5EGSPC"
        );
    }
}
