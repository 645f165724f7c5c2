// src/services/working_capital.rs
//
// Receivables, inventory and payables projected from historical day
// averages, plus the period-over-period working-capital change that feeds
// the cash-flow forecast.

use serde::Serialize;

use super::calculations::average;
use crate::fields::parse_or_zero;
use crate::models::{HistoricalData, ProjectionData, Y4WorkingCapital};

#[derive(Debug, Serialize)]
pub struct WorkingCapitalForecast {
    pub avg_debtor_days: Option<f64>,
    pub avg_inventory_days: Option<f64>,
    pub avg_payable_days: Option<f64>,
    pub debtors: [f64; 5],
    pub cogs: [f64; 5],
    pub inventory: [f64; 5],
    pub payables: [f64; 5],
    pub working_capital: [f64; 5],
    /// P1's change is measured against the user-entered Y4 balances, not
    /// against anything derived from the day averages.
    pub y4_baseline: f64,
    pub change: [f64; 5],
}

pub fn forecast_working_capital(
    h: &HistoricalData,
    p: &ProjectionData,
    projected_sales: &[f64; 5],
    y4: &Y4WorkingCapital,
) -> WorkingCapitalForecast {
    let avg_debtor_days = average(&h.debtor_days);
    let avg_inventory_days = average(&h.inventory_days);
    let avg_payable_days = average(&h.payable_days);

    let debtor_days = avg_debtor_days.unwrap_or(0.0);
    let inventory_days = avg_inventory_days.unwrap_or(0.0);
    let payable_days = avg_payable_days.unwrap_or(0.0);

    let debtors: [f64; 5] = std::array::from_fn(|i| projected_sales[i] * debtor_days / 365.0);
    // COGS for stock and supplier terms is the material plus manufacturing
    // share of the period's sales.
    let cogs: [f64; 5] = std::array::from_fn(|i| {
        let cost_pct = parse_or_zero(&p.material_cost[i]) + parse_or_zero(&p.manufacturing_cost[i]);
        projected_sales[i] * cost_pct / 100.0
    });
    let inventory: [f64; 5] = std::array::from_fn(|i| cogs[i] * inventory_days / 365.0);
    let payables: [f64; 5] = std::array::from_fn(|i| cogs[i] * payable_days / 365.0);
    let working_capital: [f64; 5] = std::array::from_fn(|i| debtors[i] + inventory[i] - payables[i]);

    let y4_baseline =
        parse_or_zero(&y4.debtors) + parse_or_zero(&y4.inventory) - parse_or_zero(&y4.payables);
    let change: [f64; 5] = std::array::from_fn(|i| {
        if i == 0 {
            working_capital[0] - y4_baseline
        } else {
            working_capital[i] - working_capital[i - 1]
        }
    });

    WorkingCapitalForecast {
        avg_debtor_days,
        avg_inventory_days,
        avg_payable_days,
        debtors,
        cogs,
        inventory,
        payables,
        working_capital,
        y4_baseline,
        change,
    }
}
