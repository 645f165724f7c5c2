// src/services/store.rs
//
// Plain JSON persistence of the two input records. Each record is its own
// file and recovers independently: a missing or corrupt record falls back
// to its all-zero default without touching the other one. Persistence sits
// outside the calculation path; a failed save never affects a recompute.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{HistoricalData, ModelInputs, ProjectionData};

const HISTORICAL_FILE: &str = "historical.json";
const PROJECTIONS_FILE: &str = "projections.json";

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    /// Load both records. Never fails: each record independently falls
    /// back to its default when unreadable.
    pub fn load(&self) -> ModelInputs {
        ModelInputs {
            historical: self.load_record::<HistoricalData>(HISTORICAL_FILE),
            projections: self.load_record::<ProjectionData>(PROJECTIONS_FILE),
        }
    }

    pub fn save(&self, inputs: &ModelInputs) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating data dir {}", self.dir.display()))?;
        self.save_record(HISTORICAL_FILE, &inputs.historical)?;
        self.save_record(PROJECTIONS_FILE, &inputs.projections)?;
        info!("saved input records to {}", self.dir.display());
        Ok(())
    }

    fn load_record<T: DeserializeOwned + Default>(&self, file: &str) -> T {
        let path = self.dir.join(file);
        match read_record(&path) {
            Ok(record) => record,
            Err(e) => {
                warn!("falling back to defaults for {}: {}", path.display(), e);
                T::default()
            }
        }
    }

    fn save_record<T: Serialize>(&self, file: &str, record: &T) -> Result<()> {
        let path = self.dir.join(file);
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| "reading record")?;
    serde_json::from_str(&raw).with_context(|| "parsing record")
}
