// src/services/mod.rs
//
// The calculation pipeline. Data flows one way: inputs, then projections,
// then working capital and capex, then cash flow, then valuation.

pub mod calculations;
pub mod capex;
pub mod cash_flow;
pub mod projections;
pub mod store;
pub mod valuation;
pub mod working_capital;

use serde::Serialize;

use crate::models::{HistoricalData, ProjectionData, ValuationInputs, Y4WorkingCapital};
use self::capex::CapexForecast;
use self::cash_flow::CashFlowForecast;
use self::projections::{HistoricalAnalysis, ProjectedIncome};
use self::valuation::ValuationResult;
use self::working_capital::WorkingCapitalForecast;

/// Everything derived for one projection period, bundled for presentation.
#[derive(Debug, Serialize)]
pub struct ProjectedYear {
    pub sales: f64,
    pub material_cost: f64,
    pub manufacturing_cost: f64,
    pub sga_cost: f64,
    pub operating_profit: f64,
    pub other_income: f64,
    pub interest: f64,
    pub depreciation: f64,
    pub pbt: f64,
    pub tax_amount: f64,
    pub net_profit: f64,
    pub opm: f64,
    pub npm: f64,
    pub ebit: f64,
    pub nopat: f64,
    pub capex: f64,
    pub debtors: f64,
    pub inventory: f64,
    pub payables: f64,
    pub working_capital: f64,
    pub working_capital_change: f64,
    pub fcf: f64,
    pub discounted_fcf: f64,
}

#[derive(Debug, Serialize)]
pub struct ModelOutputs {
    pub historical: HistoricalAnalysis,
    pub income: ProjectedIncome,
    pub working_capital: WorkingCapitalForecast,
    pub capex: CapexForecast,
    pub cash_flow: CashFlowForecast,
    pub valuation: ValuationResult,
    pub years: Vec<ProjectedYear>,
}

/// Full deterministic recompute of every derived entity. Pure: same inputs
/// always produce the same outputs, and nothing is cached between calls.
pub fn run_model(
    h: &HistoricalData,
    p: &ProjectionData,
    v: &ValuationInputs,
    y4: &Y4WorkingCapital,
) -> ModelOutputs {
    let historical = projections::analyze_historical(h);
    let income = projections::project_income(h, p);
    let working_capital = working_capital::forecast_working_capital(h, p, &income.sales, y4);
    let capex = capex::forecast_capex(h, p, &income.sales);
    let cash_flow =
        cash_flow::forecast_free_cash_flow(p, &income, &working_capital.change, &capex.projected);
    let valuation = valuation::value_equity(v, &cash_flow.fcf);

    let years = (0..5)
        .map(|i| ProjectedYear {
            sales: income.sales[i],
            material_cost: income.material_cost[i],
            manufacturing_cost: income.manufacturing_cost[i],
            sga_cost: income.sga_cost[i],
            operating_profit: income.operating_profit[i],
            other_income: income.other_income[i],
            interest: income.interest[i],
            depreciation: income.depreciation[i],
            pbt: income.pbt[i],
            tax_amount: income.tax_amount[i],
            net_profit: income.net_profit[i],
            opm: income.opm[i],
            npm: income.npm[i],
            ebit: cash_flow.ebit[i],
            nopat: cash_flow.nopat[i],
            capex: capex.projected[i],
            debtors: working_capital.debtors[i],
            inventory: working_capital.inventory[i],
            payables: working_capital.payables[i],
            working_capital: working_capital.working_capital[i],
            working_capital_change: working_capital.change[i],
            fcf: cash_flow.fcf[i],
            discounted_fcf: valuation.discounted_fcf[i],
        })
        .collect();

    ModelOutputs {
        historical,
        income,
        working_capital,
        capex,
        cash_flow,
        valuation,
        years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    fn full_inputs() -> (HistoricalData, ProjectionData, ValuationInputs, Y4WorkingCapital) {
        let mut h = HistoricalData::default();
        h.sales = ["1000", "1100", "1210", "1331"].map(String::from);
        h.material_cost = ["40"; 4].map(String::from);
        h.manufacturing_cost = ["20"; 4].map(String::from);
        h.operating_profit = ["200", "220", "242", "266.2"].map(String::from);
        h.tax = ["25"; 4].map(String::from);
        h.debtor_days = [60.0, 60.0, 60.0];
        h.inventory_days = [90.0, 90.0, 90.0];
        h.payable_days = [30.0, 30.0, 30.0];
        h.capex = [50.0, 55.0, 60.0, 65.0];

        let mut p = ProjectionData::default();
        p.sales_growth = [10.0; 5];
        p.material_cost = ["40"; 5].map(String::from);
        p.manufacturing_cost = ["20"; 5].map(String::from);
        p.sga_cost = ["20"; 5].map(String::from);
        p.depreciation_percent = ["3"; 5].map(String::from);
        p.tax = ["25"; 5].map(String::from);
        p.capex_percent = ["5"; 5].map(String::from);

        let mut v = ValuationInputs::default();
        v.wacc = "12".to_string();
        v.perpetuity_growth = "4".to_string();
        v.fiscal_year_end_month = "3".to_string();
        v.shares_outstanding = "100".to_string();
        v.current_share_price = "15".to_string();

        let y4 = Y4WorkingCapital {
            debtors: "220".to_string(),
            inventory: "200".to_string(),
            payables: "110".to_string(),
        };
        (h, p, v, y4)
    }

    #[test]
    fn pipeline_stages_agree_with_each_other() {
        let (h, p, v, y4) = full_inputs();
        let out = run_model(&h, &p, &v, &y4);

        for i in 0..5 {
            let year = &out.years[i];
            assert_approx(year.sales, out.income.sales[i]);
            assert_approx(year.ebit, year.operating_profit);
            assert_approx(
                year.fcf,
                year.nopat + year.depreciation - year.working_capital_change - year.capex.abs(),
            );
            assert_approx(
                year.working_capital,
                year.debtors + year.inventory - year.payables,
            );
        }
        assert!(out.valuation.bridge.is_some());
    }

    #[test]
    fn recompute_is_bit_identical() {
        let (h, p, v, y4) = full_inputs();
        let a = serde_json::to_string(&run_model(&h, &p, &v, &y4)).unwrap();
        let b = serde_json::to_string(&run_model(&h, &p, &v, &y4)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn default_inputs_produce_a_definite_output() {
        // All-zero inputs must flow through the whole pipeline without
        // panics or non-finite projected values.
        let out = run_model(
            &HistoricalData::default(),
            &ProjectionData::default(),
            &ValuationInputs::default(),
            &Y4WorkingCapital::default(),
        );
        for year in &out.years {
            assert!(year.sales.is_finite());
            assert!(year.fcf.is_finite());
        }
        // Default WACC 10% > growth 3%, so the bridge exists and is zero.
        let bridge = out.valuation.bridge.unwrap();
        assert_approx(bridge.equity_value_per_share, 0.0);
    }
}
