// src/bin/run_valuation.rs
//
// Loads the persisted input records, runs the full projection/valuation
// pipeline once and logs the result. Valuation assumptions can be
// overridden from the environment.

use std::env;

use dotenv::dotenv;
use log::info;

use dcf_engine::format::{pct_or_dash, thousands_fixed};
use dcf_engine::models::{ValuationInputs, Y4WorkingCapital};
use dcf_engine::services;
use dcf_engine::services::store::FileStore;

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn valuation_from_env() -> ValuationInputs {
    let defaults = ValuationInputs::default();
    ValuationInputs {
        wacc: env_or("DCF_WACC", &defaults.wacc),
        perpetuity_growth: env_or("DCF_PERPETUITY_GROWTH", &defaults.perpetuity_growth),
        fiscal_year_end_month: env_or("DCF_FY_END_MONTH", &defaults.fiscal_year_end_month),
        cash: env_or("DCF_CASH", &defaults.cash),
        debt: env_or("DCF_DEBT", &defaults.debt),
        shares_outstanding: env_or("DCF_SHARES", &defaults.shares_outstanding),
        current_share_price: env_or("DCF_SHARE_PRICE", &defaults.current_share_price),
    }
}

fn y4_from_env() -> Y4WorkingCapital {
    Y4WorkingCapital {
        debtors: env_or("DCF_Y4_DEBTORS", ""),
        inventory: env_or("DCF_Y4_INVENTORY", ""),
        payables: env_or("DCF_Y4_PAYABLES", ""),
    }
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let dir = env_or("DCF_DATA_DIR", "data");
    info!("Loading input records from {}", dir);
    let inputs = FileStore::new(&dir).load();

    let valuation_inputs = valuation_from_env();
    let outputs = services::run_model(
        &inputs.historical,
        &inputs.projections,
        &valuation_inputs,
        &y4_from_env(),
    );

    info!("Historical averages:");
    info!("  OPM: {}", pct_or_dash(outputs.historical.averages.opm, 1));
    info!("  NPM: {}", pct_or_dash(outputs.historical.averages.npm, 1));
    info!(
        "  Sales growth: {}",
        pct_or_dash(outputs.historical.averages.sales_growth, 2)
    );

    info!("Projected periods:");
    for (i, year) in outputs.years.iter().enumerate() {
        info!(
            "  P{}: sales {}, op profit {}, FCF {}, discounted {}",
            i + 1,
            thousands_fixed(year.sales, 0),
            thousands_fixed(year.operating_profit, 0),
            thousands_fixed(year.fcf, 0),
            thousands_fixed(year.discounted_fcf, 0),
        );
    }

    match &outputs.valuation.bridge {
        Some(bridge) => {
            info!("Valuation (WACC {}%):", valuation_inputs.wacc);
            info!("  Terminal value: {}", thousands_fixed(bridge.terminal_value, 0));
            info!(
                "  Enterprise value: {}",
                thousands_fixed(bridge.enterprise_value, 0)
            );
            info!("  Equity value: {}", thousands_fixed(bridge.equity_value, 0));
            println!(
                "Fair value per share: {} (upside {})",
                thousands_fixed(bridge.equity_value_per_share, 2),
                pct_or_dash(Some(bridge.upside_percent), 1),
            );
        }
        None => {
            println!(
                "Valuation invalid: WACC ({}) must exceed perpetuity growth ({})",
                valuation_inputs.wacc, valuation_inputs.perpetuity_growth
            );
        }
    }

    Ok(())
}
