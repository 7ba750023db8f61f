//! Thesis form: six independent sections of transient values.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::choice::{Commodity, Decision, InflationTrend, RatesOutlook};
use super::level::Level;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSection {
    pub inflation: InflationTrend,
    pub rates: RatesOutlook,
    pub insight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommoditySection {
    pub exposures: BTreeSet<Commodity>,
    pub insight: String,
}

impl CommoditySection {
    /// Add or remove an exposure. Returns whether it is now selected.
    pub fn toggle(&mut self, commodity: Commodity) -> bool {
        if self.exposures.remove(&commodity) {
            false
        } else {
            self.exposures.insert(commodity);
            true
        }
    }

    pub fn is_selected(&self, commodity: Commodity) -> bool {
        self.exposures.contains(&commodity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyChainSection {
    pub stress: Level,
    pub bottlenecks: String,
}

/// Financial metrics come from the snapshot; only the note is editable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialsSection {
    pub insight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RisksSection {
    pub scenarios: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionSection {
    pub decision: Decision,
    pub confidence: Level,
    pub thesis: String,
}

/// All six sections. No field depends on another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesisForm {
    pub macro_view: MacroSection,
    pub commodities: CommoditySection,
    pub supply_chain: SupplyChainSection,
    pub financials: FinancialsSection,
    pub risks: RisksSection,
    pub decision: DecisionSection,
}

/// Identifies one free-text field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteField {
    MacroInsight,
    CommodityInsight,
    Bottlenecks,
    FinancialInsight,
    Risks,
    FinalThesis,
}

impl NoteField {
    pub const ALL: [NoteField; 6] = [
        NoteField::MacroInsight,
        NoteField::CommodityInsight,
        NoteField::Bottlenecks,
        NoteField::FinancialInsight,
        NoteField::Risks,
        NoteField::FinalThesis,
    ];
}

impl ThesisForm {
    pub fn note(&self, field: NoteField) -> &str {
        match field {
            NoteField::MacroInsight => &self.macro_view.insight,
            NoteField::CommodityInsight => &self.commodities.insight,
            NoteField::Bottlenecks => &self.supply_chain.bottlenecks,
            NoteField::FinancialInsight => &self.financials.insight,
            NoteField::Risks => &self.risks.scenarios,
            NoteField::FinalThesis => &self.decision.thesis,
        }
    }

    pub fn note_mut(&mut self, field: NoteField) -> &mut String {
        match field {
            NoteField::MacroInsight => &mut self.macro_view.insight,
            NoteField::CommodityInsight => &mut self.commodities.insight,
            NoteField::Bottlenecks => &mut self.supply_chain.bottlenecks,
            NoteField::FinancialInsight => &mut self.financials.insight,
            NoteField::Risks => &mut self.risks.scenarios,
            NoteField::FinalThesis => &mut self.decision.thesis,
        }
    }

    /// True when nothing has been changed from the defaults.
    pub fn is_blank(&self) -> bool {
        *self == ThesisForm::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_uses_first_options_and_mid_sliders() {
        let form = ThesisForm::default();
        assert_eq!(form.macro_view.inflation, InflationTrend::Rising);
        assert_eq!(form.macro_view.rates, RatesOutlook::Tightening);
        assert!(form.commodities.exposures.is_empty());
        assert_eq!(form.supply_chain.stress.get(), 3);
        assert_eq!(form.decision.decision, Decision::Accumulate);
        assert_eq!(form.decision.confidence.get(), 3);
        assert!(form.is_blank());
    }

    #[test]
    fn toggle_commodity() {
        let mut section = CommoditySection::default();
        assert!(section.toggle(Commodity::Copper));
        assert!(section.is_selected(Commodity::Copper));
        assert!(!section.toggle(Commodity::Copper));
        assert!(!section.is_selected(Commodity::Copper));
    }

    #[test]
    fn notes_are_independent() {
        let mut form = ThesisForm::default();
        form.note_mut(NoteField::Risks).push_str("rate shock");
        for field in NoteField::ALL {
            if field == NoteField::Risks {
                assert_eq!(form.note(field), "rate shock");
            } else {
                assert!(form.note(field).is_empty());
            }
        }
        assert!(!form.is_blank());
    }
}
