// src/services/calculations.rs
//
// Shared numeric helpers for the engines. Everything here is total: bad
// input degrades to a zero or a `None` ("no data"), never an error.

/// Arithmetic mean. `None` when the series is empty or entirely zero, the
/// engine-wide "no data" condition.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() || values.iter().all(|v| *v == 0.0) {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean over a series that may contain "no data" periods; those count as
/// zero, matching the zero-fallback used everywhere else.
pub fn average_or_zero(values: &[Option<f64>]) -> Option<f64> {
    let flattened: Vec<f64> = values.iter().map(|v| v.unwrap_or(0.0)).collect();
    average(&flattened)
}

/// Period-over-period growth in percent. `None` when the prior value is
/// zero: growth off a zero base is "no data", not infinity.
pub fn growth_rate(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

/// A line item as a percent of sales. A zero sales denominator is
/// substituted with 1 so ratio rows and their averages stay finite.
pub fn pct_of_sales(value: f64, sales: f64) -> f64 {
    let denominator = if sales == 0.0 { 1.0 } else { sales };
    value / denominator * 100.0
}

/// Margin on sales with the stricter guard: zero (or negative) sales
/// reports a 0 margin.
pub fn margin_pct(value: f64, sales: f64) -> f64 {
    if sales > 0.0 {
        value / sales * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_all_zero_series_is_no_data() {
        assert_eq!(average(&[0.0, 0.0, 0.0]), None);
        assert_eq!(average(&[]), None);
        assert_eq!(average(&[2.0, 4.0]), Some(3.0));
    }

    #[test]
    fn average_or_zero_counts_missing_periods_as_zero() {
        assert_eq!(average_or_zero(&[None, Some(6.0), Some(3.0)]), Some(3.0));
        assert_eq!(average_or_zero(&[None, None]), None);
    }

    #[test]
    fn growth_rate_off_zero_base_is_no_data() {
        let rate = growth_rate(110.0, 100.0).unwrap();
        assert!((rate - 10.0).abs() < 1e-9);
        assert_eq!(growth_rate(110.0, 0.0), None);
        assert_eq!(growth_rate(90.0, 100.0), Some(-10.0));
    }

    #[test]
    fn pct_of_sales_substitutes_unit_denominator() {
        assert_eq!(pct_of_sales(50.0, 200.0), 25.0);
        assert_eq!(pct_of_sales(50.0, 0.0), 5000.0);
    }

    #[test]
    fn margin_pct_reports_zero_without_sales() {
        assert_eq!(margin_pct(20.0, 100.0), 20.0);
        assert_eq!(margin_pct(20.0, 0.0), 0.0);
        assert_eq!(margin_pct(20.0, -5.0), 0.0);
    }
}
