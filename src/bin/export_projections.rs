// src/bin/export_projections.rs
//
// Writes the five projected periods as a CSV table for use outside the
// tool, using default valuation assumptions for the discounting column.

use std::env;

use dotenv::dotenv;
use log::info;

use dcf_engine::models::{ValuationInputs, Y4WorkingCapital};
use dcf_engine::services;
use dcf_engine::services::store::FileStore;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let dir = env::var("DCF_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let out_path = env::var("DCF_EXPORT_PATH").unwrap_or_else(|_| "projections.csv".to_string());

    let inputs = FileStore::new(&dir).load();
    let outputs = services::run_model(
        &inputs.historical,
        &inputs.projections,
        &ValuationInputs::default(),
        &Y4WorkingCapital::default(),
    );

    let mut writer = csv::Writer::from_path(&out_path)?;
    writer.write_record([
        "period",
        "sales",
        "operating_profit",
        "pbt",
        "net_profit",
        "nopat",
        "capex",
        "working_capital_change",
        "fcf",
        "discounted_fcf",
    ])?;
    for (i, year) in outputs.years.iter().enumerate() {
        writer.write_record([
            format!("P{}", i + 1),
            format!("{:.2}", year.sales),
            format!("{:.2}", year.operating_profit),
            format!("{:.2}", year.pbt),
            format!("{:.2}", year.net_profit),
            format!("{:.2}", year.nopat),
            format!("{:.2}", year.capex),
            format!("{:.2}", year.working_capital_change),
            format!("{:.2}", year.fcf),
            format!("{:.2}", year.discounted_fcf),
        ])?;
    }
    writer.flush()?;

    info!("Exported {} periods to {}", outputs.years.len(), out_path);
    println!("Projection export complete: {}", out_path);
    Ok(())
}
