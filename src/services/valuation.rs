// src/services/valuation.rs
//
// Discounts the free-cash-flow forecast and a Gordon-growth terminal value
// to present, then bridges enterprise value to a per-share equity value.

use log::warn;
use serde::Serialize;

use crate::fields::parse_or_zero;
use crate::models::ValuationInputs;

#[derive(Debug, Serialize)]
pub struct ValuationResult {
    /// Fractional discount periods, front-loaded toward the fiscal year
    /// end: period_p = p - (12 - fiscal_year_end_month) / 12.
    pub discount_periods: [f64; 5],
    pub discounted_fcf: [f64; 5],
    /// None when WACC <= perpetuity growth: the terminal value is undefined
    /// there and nothing downstream of it may be shown as a number.
    pub bridge: Option<EquityBridge>,
}

#[derive(Debug, Serialize)]
pub struct EquityBridge {
    pub terminal_value: f64,
    pub discounted_terminal_value: f64,
    pub enterprise_value: f64,
    pub equity_value: f64,
    pub equity_value_per_share: f64,
    pub upside_percent: f64,
}

pub fn value_equity(v: &ValuationInputs, fcf: &[f64; 5]) -> ValuationResult {
    let wacc = parse_or_zero(&v.wacc) / 100.0;
    let growth = parse_or_zero(&v.perpetuity_growth) / 100.0;

    let month_fraction = (12.0 - fiscal_year_end_month(v)) / 12.0;
    let discount_periods: [f64; 5] = std::array::from_fn(|i| (i + 1) as f64 - month_fraction);
    let discounted_fcf: [f64; 5] =
        std::array::from_fn(|i| fcf[i] / (1.0 + wacc).powf(discount_periods[i]));

    if wacc <= growth {
        warn!(
            "terminal value undefined: WACC {:.2}% must exceed perpetuity growth {:.2}%",
            wacc * 100.0,
            growth * 100.0
        );
        return ValuationResult {
            discount_periods,
            discounted_fcf,
            bridge: None,
        };
    }

    let terminal_value = fcf[4] * (1.0 + growth) / (wacc - growth);
    let discounted_terminal_value = terminal_value / (1.0 + wacc).powf(discount_periods[4]);
    let enterprise_value = discounted_fcf.iter().sum::<f64>() + discounted_terminal_value;
    let equity_value =
        enterprise_value + parse_or_zero(&v.cash) - parse_or_zero(&v.debt);

    let shares = parse_or_zero(&v.shares_outstanding);
    let equity_value_per_share = if shares > 0.0 { equity_value / shares } else { 0.0 };
    let price = parse_or_zero(&v.current_share_price);
    let upside_percent = if price > 0.0 {
        (equity_value_per_share - price) / price * 100.0
    } else {
        0.0
    };

    ValuationResult {
        discount_periods,
        discounted_fcf,
        bridge: Some(EquityBridge {
            terminal_value,
            discounted_terminal_value,
            enterprise_value,
            equity_value,
            equity_value_per_share,
            upside_percent,
        }),
    }
}

/// Fiscal-year-end month, defaulting to 12 (no fractional shift) when the
/// entry is blank, unparsable or out of range.
fn fiscal_year_end_month(v: &ValuationInputs) -> f64 {
    match v.fiscal_year_end_month.trim().parse::<i64>() {
        Ok(month) if (1..=12).contains(&month) => month as f64,
        Ok(0) | Err(_) => 12.0,
        Ok(month) => {
            warn!("fiscal year end month {} out of range, using December", month);
            12.0
        }
    }
}
