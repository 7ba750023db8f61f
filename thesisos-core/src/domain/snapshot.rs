//! Company snapshot: the handful of provider fields the dashboard shows.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat key/value mapping returned by a provider, keyed like Yahoo's `info`.
pub type InfoMap = serde_json::Map<String, Value>;

/// Placeholder shown for any missing text field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Provider keys read into a snapshot.
pub mod keys {
    pub const SHORT_NAME: &str = "shortName";
    pub const SECTOR: &str = "sector";
    pub const COUNTRY: &str = "country";
    pub const CURRENCY: &str = "currency";
    pub const GROSS_MARGINS: &str = "grossMargins";
    pub const DEBT_TO_EQUITY: &str = "debtToEquity";
}

/// Immutable record fetched once per submitted ticker. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanySnapshot {
    pub name: Option<String>,
    pub sector: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    /// Fraction in 0–1.
    pub gross_margin: Option<f64>,
    pub debt_to_equity: Option<f64>,
}

impl CompanySnapshot {
    /// Bind the provider's info map to snapshot fields.
    pub fn from_info(info: &InfoMap) -> Self {
        Self {
            name: text(info, keys::SHORT_NAME),
            sector: text(info, keys::SECTOR),
            country: text(info, keys::COUNTRY),
            currency: text(info, keys::CURRENCY),
            gross_margin: number(info, keys::GROSS_MARGINS),
            debt_to_equity: number(info, keys::DEBT_TO_EQUITY),
        }
    }

    pub fn name_display(&self) -> &str {
        or_sentinel(&self.name)
    }

    pub fn sector_display(&self) -> &str {
        or_sentinel(&self.sector)
    }

    pub fn country_display(&self) -> &str {
        or_sentinel(&self.country)
    }

    pub fn currency_display(&self) -> &str {
        or_sentinel(&self.currency)
    }

    /// Gross margin as a percentage; a missing margin counts as zero.
    pub fn gross_margin_display(&self) -> String {
        format_margin(self.gross_margin.unwrap_or(0.0))
    }

    /// Debt-to-equity as reported, unrounded.
    pub fn debt_to_equity_display(&self) -> String {
        match self.debt_to_equity {
            Some(v) => format!("{v}"),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// The four summary cards, in display order.
    pub fn summary(&self) -> [SummaryMetric<'_>; 4] {
        [
            SummaryMetric { title: "Company", value: self.name_display() },
            SummaryMetric { title: "Sector", value: self.sector_display() },
            SummaryMetric { title: "Country", value: self.country_display() },
            SummaryMetric { title: "Currency", value: self.currency_display() },
        ]
    }
}

/// One summary card: title plus rendered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryMetric<'a> {
    pub title: &'static str,
    pub value: &'a str,
}

/// `0.153` → `"15.3%"`.
pub fn format_margin(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn or_sentinel(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_AVAILABLE)
}

fn text(info: &InfoMap, key: &str) -> Option<String> {
    match info.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number(info: &InfoMap, key: &str) -> Option<f64> {
    match info.get(key)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
