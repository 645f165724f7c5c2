// src/models.rs
use serde::{Deserialize, Serialize};

/// Four years of reported financial-statement line items, Y1..Y4.
///
/// Text fields keep exactly what the analyst typed (digits, decimals) so
/// that editing round-trips losslessly; they are coerced to numbers only
/// when a calculation consumes them. The day-count series cover Y2..Y4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalData {
    pub sales: [String; 4],
    pub material_cost: [String; 4],
    pub manufacturing_cost: [String; 4],
    pub operating_profit: [String; 4],
    pub other_income: [f64; 4],
    pub interest: [f64; 4],
    pub depreciation: [f64; 4],
    pub tax: [String; 4],
    pub debtor_days: [f64; 3],
    pub inventory_days: [f64; 3],
    pub payable_days: [f64; 3],
    pub capex: [f64; 4],
}

impl Default for HistoricalData {
    fn default() -> Self {
        HistoricalData {
            sales: zero_text(),
            material_cost: zero_text(),
            manufacturing_cost: zero_text(),
            operating_profit: zero_text(),
            other_income: [0.0; 4],
            interest: [0.0; 4],
            depreciation: [0.0; 4],
            tax: zero_text(),
            debtor_days: [0.0; 3],
            inventory_days: [0.0; 3],
            payable_days: [0.0; 3],
            capex: [0.0; 4],
        }
    }
}

/// Forward assumptions for the five projection periods P1..P5.
///
/// Percent rows stay as raw text like the historical record; only the
/// sales-growth row is numeric at rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionData {
    pub sales_growth: [f64; 5],
    pub material_cost: [String; 5],
    pub manufacturing_cost: [String; 5],
    pub sga_cost: [String; 5],
    pub other_income_percent: [String; 5],
    pub interest_percent: [String; 5],
    pub depreciation_percent: [String; 5],
    pub tax: [String; 5],
    pub capex_percent: [String; 5],
}

impl Default for ProjectionData {
    fn default() -> Self {
        ProjectionData {
            sales_growth: [0.0; 5],
            material_cost: zero_text(),
            manufacturing_cost: zero_text(),
            sga_cost: zero_text(),
            other_income_percent: zero_text(),
            interest_percent: zero_text(),
            depreciation_percent: zero_text(),
            tax: zero_text(),
            capex_percent: zero_text(),
        }
    }
}

/// The snapshot and persistence unit: everything undo/redo tracks.
///
/// Valuation assumptions and the Y4 working-capital baseline live outside
/// this struct and outside the history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInputs {
    pub historical: HistoricalData,
    pub projections: ProjectionData,
}

/// Discounting and equity-bridge assumptions. All free-form text, parsed
/// with a zero fallback when a calculation consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationInputs {
    pub wacc: String,
    pub perpetuity_growth: String,
    pub fiscal_year_end_month: String,
    pub cash: String,
    pub debt: String,
    pub shares_outstanding: String,
    pub current_share_price: String,
}

impl Default for ValuationInputs {
    fn default() -> Self {
        ValuationInputs {
            wacc: "10".to_string(),
            perpetuity_growth: "3".to_string(),
            fiscal_year_end_month: "3".to_string(),
            cash: "0".to_string(),
            debt: "0".to_string(),
            shares_outstanding: "0".to_string(),
            current_share_price: "0".to_string(),
        }
    }
}

/// User-entered absolute working-capital balances for the last historical
/// year. Only the first projected working-capital change reads these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Y4WorkingCapital {
    pub debtors: String,
    pub inventory: String,
    pub payables: String,
}

fn zero_text<const N: usize>() -> [String; N] {
    std::array::from_fn(|_| "0".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_zero_rows() {
        let h = HistoricalData::default();
        assert!(h.sales.iter().all(|v| v == "0"));
        assert!(h.tax.iter().all(|v| v == "0"));
        assert_eq!(h.other_income, [0.0; 4]);
        assert_eq!(h.debtor_days, [0.0; 3]);

        let p = ProjectionData::default();
        assert_eq!(p.sales_growth, [0.0; 5]);
        assert!(p.capex_percent.iter().all(|v| v == "0"));
    }

    #[test]
    fn valuation_defaults_match_form_defaults() {
        let v = ValuationInputs::default();
        assert_eq!(v.wacc, "10");
        assert_eq!(v.perpetuity_growth, "3");
        assert_eq!(v.fiscal_year_end_month, "3");
        assert_eq!(v.shares_outstanding, "0");
    }

    #[test]
    fn model_inputs_round_trip_through_json() {
        let mut inputs = ModelInputs::default();
        inputs.historical.sales[0] = "1234.5".to_string();
        inputs.projections.tax[4] = "25".to_string();
        let json = serde_json::to_string(&inputs).unwrap();
        let back: ModelInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inputs);
    }
}
