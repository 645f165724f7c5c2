// src/services/capex.rs

use serde::Serialize;

use super::calculations::{average, pct_of_sales};
use crate::fields::parse_or_zero;
use crate::models::{HistoricalData, ProjectionData};

#[derive(Debug, Serialize)]
pub struct CapexForecast {
    /// Historical capex as a percent of each year's sales.
    pub historical_pct: [f64; 4],
    /// Averaged over years 2..4 only; year 1 is excluded from the summary.
    pub avg_pct: Option<f64>,
    pub projected: [f64; 5],
}

pub fn forecast_capex(
    h: &HistoricalData,
    p: &ProjectionData,
    projected_sales: &[f64; 5],
) -> CapexForecast {
    let historical_pct: [f64; 4] =
        std::array::from_fn(|i| pct_of_sales(h.capex[i], parse_or_zero(&h.sales[i])));
    let avg_pct = average(&historical_pct[1..]);
    let projected: [f64; 5] =
        std::array::from_fn(|i| projected_sales[i] * parse_or_zero(&p.capex_percent[i]) / 100.0);

    CapexForecast {
        historical_pct,
        avg_pct,
        projected,
    }
}
