// src/editor.rs
//
// The single mutation surface over the input model. Every operation that
// changes `ModelInputs` goes through here, records exactly one history
// snapshot before mutating, and leaves derived state to be recomputed
// fresh by `outputs()`.

use log::warn;

use crate::fields;
use crate::history::ChangeHistory;
use crate::import;
use crate::models::{ModelInputs, ValuationInputs, Y4WorkingCapital};
use crate::services::{self, ModelOutputs};

/// Statement lines with a row-level clear action. Cost/percent rows clear
/// their historical and projection arrays together; absolute-amount rows
/// clear the historical side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementRow {
    Sales,
    MaterialCost,
    ManufacturingCost,
    OperatingProfit,
    OtherIncome,
    Interest,
    Depreciation,
    Tax,
    Capex,
}

#[derive(Debug, Default)]
pub struct ModelEditor {
    inputs: ModelInputs,
    valuation: ValuationInputs,
    y4_working_capital: Y4WorkingCapital,
    history: ChangeHistory,
}

impl ModelEditor {
    pub fn new() -> Self {
        ModelEditor::default()
    }

    /// Start from previously persisted records.
    pub fn with_inputs(inputs: ModelInputs) -> Self {
        ModelEditor {
            inputs,
            ..ModelEditor::default()
        }
    }

    pub fn inputs(&self) -> &ModelInputs {
        &self.inputs
    }

    pub fn valuation_inputs(&self) -> &ValuationInputs {
        &self.valuation
    }

    pub fn y4_working_capital(&self) -> &Y4WorkingCapital {
        &self.y4_working_capital
    }

    /// Edit one field through its catalogue coercion. Returns false (and
    /// leaves model and history untouched) for an unknown key.
    pub fn set_field(&mut self, key: &str, raw: &str) -> bool {
        let spec = match fields::spec(key) {
            Some(spec) => spec,
            None => {
                warn!("edit ignored: unknown field '{}'", key);
                return false;
            }
        };
        self.history.push_snapshot(&self.inputs);
        spec.apply(&mut self.inputs, raw);
        true
    }

    /// Clear a statement row back to blank entries.
    pub fn clear_row(&mut self, row: StatementRow) {
        self.history.push_snapshot(&self.inputs);
        let h = &mut self.inputs.historical;
        let p = &mut self.inputs.projections;
        match row {
            StatementRow::Sales => h.sales = empty_text(),
            StatementRow::MaterialCost => {
                h.material_cost = empty_text();
                p.material_cost = empty_text();
            }
            StatementRow::ManufacturingCost => {
                h.manufacturing_cost = empty_text();
                p.manufacturing_cost = empty_text();
            }
            StatementRow::OperatingProfit => h.operating_profit = empty_text(),
            StatementRow::OtherIncome => {
                h.other_income = [0.0; 4];
                p.other_income_percent = empty_text();
            }
            StatementRow::Interest => {
                h.interest = [0.0; 4];
                p.interest_percent = empty_text();
            }
            StatementRow::Depreciation => {
                h.depreciation = [0.0; 4];
                p.depreciation_percent = empty_text();
            }
            StatementRow::Tax => {
                h.tax = empty_text();
                p.tax = empty_text();
            }
            StatementRow::Capex => h.capex = [0.0; 4],
        }
    }

    /// Bulk import pasted text starting at the given field. All-or-nothing;
    /// returns the number of fields written.
    pub fn paste(&mut self, start_key: &str, text: &str) -> usize {
        import::apply_paste(&mut self.inputs, &mut self.history, start_key, text)
    }

    pub fn undo(&mut self) {
        self.inputs = self.history.undo(std::mem::take(&mut self.inputs));
    }

    pub fn redo(&mut self) {
        self.inputs = self.history.redo(std::mem::take(&mut self.inputs));
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Return both records to their all-zero defaults. Undoable like any
    /// other mutation; valuation assumptions are left alone.
    pub fn reset(&mut self) {
        self.history.push_snapshot(&self.inputs);
        self.inputs = ModelInputs::default();
    }

    pub fn set_valuation_inputs(&mut self, valuation: ValuationInputs) {
        self.valuation = valuation;
    }

    pub fn set_y4_working_capital(&mut self, baseline: Y4WorkingCapital) {
        self.y4_working_capital = baseline;
    }

    /// The field reached by confirming from `key` (navigation contract).
    pub fn next_field(key: &str) -> Option<&'static str> {
        fields::next_field(key)
    }

    /// Recompute every derived series and the valuation from the current
    /// inputs. Pure with respect to the editor state.
    pub fn outputs(&self) -> ModelOutputs {
        services::run_model(
            &self.inputs.historical,
            &self.inputs.projections,
            &self.valuation,
            &self.y4_working_capital,
        )
    }
}

fn empty_text<const N: usize>() -> [String; N] {
    std::array::from_fn(|_| String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_is_undoable() {
        let mut editor = ModelEditor::new();
        assert!(editor.set_field("sales-0", "1,500"));
        assert_eq!(editor.inputs().historical.sales[0], "1500");

        editor.undo();
        assert_eq!(editor.inputs().historical.sales[0], "0");

        editor.redo();
        assert_eq!(editor.inputs().historical.sales[0], "1500");
    }

    #[test]
    fn set_field_with_unknown_key_changes_nothing() {
        let mut editor = ModelEditor::new();
        assert!(!editor.set_field("nope-0", "5"));
        assert!(!editor.can_undo());
        assert_eq!(editor.inputs(), &ModelInputs::default());
    }

    #[test]
    fn clear_row_pairs_historical_and_projection_arrays() {
        let mut editor = ModelEditor::new();
        editor.set_field("materialCost-1", "40");
        editor.set_field("projMaterialCost-2", "38");

        editor.clear_row(StatementRow::MaterialCost);
        assert!(editor.inputs().historical.material_cost.iter().all(|v| v.is_empty()));
        assert!(editor.inputs().projections.material_cost.iter().all(|v| v.is_empty()));
    }

    #[test]
    fn clear_row_on_sales_leaves_projections_alone() {
        let mut editor = ModelEditor::new();
        editor.set_field("sales-0", "100");
        editor.set_field("salesGrowth-0", "10");

        editor.clear_row(StatementRow::Sales);
        assert!(editor.inputs().historical.sales.iter().all(|v| v.is_empty()));
        assert_eq!(editor.inputs().projections.sales_growth[0], 10.0);
    }

    #[test]
    fn reset_returns_defaults_and_is_undoable() {
        let mut editor = ModelEditor::new();
        editor.set_field("sales-3", "900");
        editor.set_field("projTax-0", "25");

        editor.reset();
        assert_eq!(editor.inputs(), &ModelInputs::default());

        editor.undo();
        assert_eq!(editor.inputs().historical.sales[3], "900");
        assert_eq!(editor.inputs().projections.tax[0], "25");
    }

    #[test]
    fn mutation_after_undo_clears_redo() {
        let mut editor = ModelEditor::new();
        editor.set_field("sales-0", "100");
        editor.undo();
        assert!(editor.can_redo());

        editor.set_field("sales-0", "200");
        assert!(!editor.can_redo());
        editor.redo();
        assert_eq!(editor.inputs().historical.sales[0], "200");
    }

    #[test]
    fn valuation_inputs_are_outside_the_history() {
        let mut editor = ModelEditor::new();
        editor.set_field("sales-0", "100");
        let mut v = ValuationInputs::default();
        v.wacc = "12".to_string();
        editor.set_valuation_inputs(v);

        editor.undo();
        assert_eq!(editor.valuation_inputs().wacc, "12");
    }

    #[test]
    fn outputs_are_deterministic() {
        let mut editor = ModelEditor::new();
        editor.paste("sales-0", "1000\t1100\t1210\t1331\t10\t10\t10\t10\t10");
        let a = serde_json::to_string(&editor.outputs()).unwrap();
        let b = serde_json::to_string(&editor.outputs()).unwrap();
        assert_eq!(a, b);
    }
}
