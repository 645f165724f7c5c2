// src/services/projections.rs
//
// Income-statement analysis: historical margins derived from the reported
// figures, and the five-year projected P&L driven by the growth and
// percent-of-sales assumptions.

use serde::Serialize;

use super::calculations::{average, average_or_zero, growth_rate, margin_pct, pct_of_sales};
use crate::fields::parse_or_zero;
use crate::models::{HistoricalData, ProjectionData};

/// Per-year derived series over the historical record, plus the averages
/// shown in the summary column.
#[derive(Debug, Serialize)]
pub struct HistoricalAnalysis {
    pub sales: [f64; 4],
    /// Operating profit margin per year.
    pub opm: [f64; 4],
    /// SGA% is the residual of the cost structure, not an input: whatever
    /// of the sales rupee is not material, manufacturing, or margin.
    pub sga_pct: [f64; 4],
    pub pbt: [f64; 4],
    pub net_profit: [f64; 4],
    pub npm: [f64; 4],
    /// Year-over-year rates; the first year has no prior and a zero prior
    /// year yields no data.
    pub sales_growth: [Option<f64>; 4],
    pub profit_growth: [Option<f64>; 4],
    pub averages: HistoricalAverages,
}

/// "No data" (all-zero underlying series) surfaces as `None`.
#[derive(Debug, Serialize)]
pub struct HistoricalAverages {
    pub material_cost_pct: Option<f64>,
    pub manufacturing_cost_pct: Option<f64>,
    pub sga_pct: Option<f64>,
    pub other_income_pct: Option<f64>,
    pub interest_pct: Option<f64>,
    pub depreciation_pct: Option<f64>,
    pub tax_pct: Option<f64>,
    pub opm: Option<f64>,
    pub npm: Option<f64>,
    pub sales_growth: Option<f64>,
    pub profit_growth: Option<f64>,
}

pub fn analyze_historical(h: &HistoricalData) -> HistoricalAnalysis {
    let sales: [f64; 4] = std::array::from_fn(|i| parse_or_zero(&h.sales[i]));
    let operating_profit: [f64; 4] = std::array::from_fn(|i| parse_or_zero(&h.operating_profit[i]));
    let material: [f64; 4] = std::array::from_fn(|i| parse_or_zero(&h.material_cost[i]));
    let manufacturing: [f64; 4] = std::array::from_fn(|i| parse_or_zero(&h.manufacturing_cost[i]));
    let tax: [f64; 4] = std::array::from_fn(|i| parse_or_zero(&h.tax[i]));

    let opm: [f64; 4] = std::array::from_fn(|i| pct_of_sales(operating_profit[i], sales[i]));
    let sga_pct: [f64; 4] = std::array::from_fn(|i| 100.0 - material[i] - manufacturing[i] - opm[i]);
    let pbt: [f64; 4] = std::array::from_fn(|i| {
        operating_profit[i] + h.other_income[i] - h.interest[i] - h.depreciation[i]
    });
    let net_profit: [f64; 4] = std::array::from_fn(|i| pbt[i] * (1.0 - tax[i] / 100.0));
    let npm: [f64; 4] = std::array::from_fn(|i| margin_pct(net_profit[i], sales[i]));

    let sales_growth: [Option<f64>; 4] = std::array::from_fn(|i| {
        if i == 0 {
            None
        } else {
            growth_rate(sales[i], sales[i - 1])
        }
    });
    let profit_growth: [Option<f64>; 4] = std::array::from_fn(|i| {
        if i == 0 {
            None
        } else {
            growth_rate(net_profit[i], net_profit[i - 1])
        }
    });

    let other_income_pct: [f64; 4] = std::array::from_fn(|i| pct_of_sales(h.other_income[i], sales[i]));
    let interest_pct: [f64; 4] = std::array::from_fn(|i| pct_of_sales(h.interest[i], sales[i]));
    let depreciation_pct: [f64; 4] = std::array::from_fn(|i| pct_of_sales(h.depreciation[i], sales[i]));

    let averages = HistoricalAverages {
        material_cost_pct: average(&material),
        manufacturing_cost_pct: average(&manufacturing),
        sga_pct: average(&sga_pct),
        other_income_pct: average(&other_income_pct),
        interest_pct: average(&interest_pct),
        depreciation_pct: average(&depreciation_pct),
        tax_pct: average(&tax),
        opm: average(&opm),
        npm: average(&npm),
        sales_growth: average_or_zero(&sales_growth[1..]),
        profit_growth: average_or_zero(&profit_growth[1..]),
    };

    HistoricalAnalysis {
        sales,
        opm,
        sga_pct,
        pbt,
        net_profit,
        npm,
        sales_growth,
        profit_growth,
        averages,
    }
}

/// The projected five-period P&L.
#[derive(Debug, Serialize)]
pub struct ProjectedIncome {
    pub sales: [f64; 5],
    pub material_cost: [f64; 5],
    pub manufacturing_cost: [f64; 5],
    pub sga_cost: [f64; 5],
    pub operating_profit: [f64; 5],
    pub other_income: [f64; 5],
    pub interest: [f64; 5],
    pub depreciation: [f64; 5],
    pub pbt: [f64; 5],
    pub tax_amount: [f64; 5],
    pub net_profit: [f64; 5],
    pub opm: [f64; 5],
    pub npm: [f64; 5],
    pub sales_growth: [Option<f64>; 5],
    pub profit_growth: [Option<f64>; 5],
    pub avg_sales_growth: Option<f64>,
    pub avg_profit_growth: Option<f64>,
}

pub fn project_income(h: &HistoricalData, p: &ProjectionData) -> ProjectedIncome {
    // Growth compounds period over period off the last historical year;
    // later periods are never re-based off the historical sales.
    let mut sales = [0.0; 5];
    let mut prior = parse_or_zero(&h.sales[3]);
    for i in 0..5 {
        sales[i] = prior * (1.0 + p.sales_growth[i] / 100.0);
        prior = sales[i];
    }

    let line = |pcts: &[String; 5]| -> [f64; 5] {
        std::array::from_fn(|i| sales[i] * parse_or_zero(&pcts[i]) / 100.0)
    };
    let material_cost = line(&p.material_cost);
    let manufacturing_cost = line(&p.manufacturing_cost);
    let sga_cost = line(&p.sga_cost);
    let other_income = line(&p.other_income_percent);
    let interest = line(&p.interest_percent);
    let depreciation = line(&p.depreciation_percent);

    let operating_profit: [f64; 5] =
        std::array::from_fn(|i| sales[i] - material_cost[i] - manufacturing_cost[i] - sga_cost[i]);
    let pbt: [f64; 5] =
        std::array::from_fn(|i| operating_profit[i] + other_income[i] - interest[i] - depreciation[i]);
    let tax_rate: [f64; 5] = std::array::from_fn(|i| parse_or_zero(&p.tax[i]));
    let tax_amount: [f64; 5] = std::array::from_fn(|i| pbt[i] * tax_rate[i] / 100.0);
    let net_profit: [f64; 5] = std::array::from_fn(|i| pbt[i] * (1.0 - tax_rate[i] / 100.0));
    let opm: [f64; 5] = std::array::from_fn(|i| pct_of_sales(operating_profit[i], sales[i]));
    let npm: [f64; 5] = std::array::from_fn(|i| margin_pct(net_profit[i], sales[i]));

    let sales_growth: [Option<f64>; 5] = std::array::from_fn(|i| {
        if i == 0 {
            None
        } else {
            growth_rate(sales[i], sales[i - 1])
        }
    });
    let profit_growth: [Option<f64>; 5] = std::array::from_fn(|i| {
        if i == 0 {
            None
        } else {
            growth_rate(net_profit[i], net_profit[i - 1])
        }
    });
    let avg_sales_growth = average_or_zero(&sales_growth[1..]);
    let avg_profit_growth = average_or_zero(&profit_growth[1..]);

    ProjectedIncome {
        sales,
        material_cost,
        manufacturing_cost,
        sga_cost,
        operating_profit,
        other_income,
        interest,
        depreciation,
        pbt,
        tax_amount,
        net_profit,
        opm,
        npm,
        sales_growth,
        profit_growth,
        avg_sales_growth,
        avg_profit_growth,
    }
}
