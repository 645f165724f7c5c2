// src/services/cash_flow.rs

use serde::Serialize;

use super::projections::ProjectedIncome;
use crate::fields::parse_or_zero;
use crate::models::ProjectionData;

#[derive(Debug, Serialize)]
pub struct CashFlowForecast {
    /// EBIT is the projected operating profit.
    pub ebit: [f64; 5],
    pub nopat: [f64; 5],
    pub fcf: [f64; 5],
}

/// FCFF per period: NOPAT + depreciation - working-capital change - |capex|.
///
/// Capex enters as an absolute value: a negative capex entry (a disposal)
/// does not add cash to the forecast.
pub fn forecast_free_cash_flow(
    p: &ProjectionData,
    income: &ProjectedIncome,
    wc_change: &[f64; 5],
    capex: &[f64; 5],
) -> CashFlowForecast {
    let ebit = income.operating_profit;
    let nopat: [f64; 5] =
        std::array::from_fn(|i| ebit[i] * (1.0 - parse_or_zero(&p.tax[i]) / 100.0));
    let fcf: [f64; 5] = std::array::from_fn(|i| {
        nopat[i] + income.depreciation[i] - wc_change[i] - capex[i].abs()
    });

    CashFlowForecast { ebit, nopat, fcf }
}
