//! Domain types: ticker, select options, sliders, snapshot, thesis form.

pub mod choice;
pub mod level;
pub mod snapshot;
pub mod thesis;
pub mod ticker;

pub use choice::{Choice, Commodity, Decision, Horizon, InflationTrend, RatesOutlook};
pub use level::Level;
pub use snapshot::{format_margin, CompanySnapshot, InfoMap, SummaryMetric, NOT_AVAILABLE};
pub use thesis::{
    CommoditySection, DecisionSection, FinancialsSection, MacroSection, NoteField,
    RisksSection, SupplyChainSection, ThesisForm,
};
pub use ticker::{Ticker, TickerError};
