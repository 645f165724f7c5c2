// src/bin/init_store.rs
use std::env;

use dotenv::dotenv;
use log::info;

use dcf_engine::models::ModelInputs;
use dcf_engine::services::store::FileStore;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let dir = env::var("DCF_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    info!("Initializing input records in {}", dir);

    let store = FileStore::new(&dir);
    store.save(&ModelInputs::default())?;

    println!("Store initialization complete!");
    Ok(())
}
