//! Advisory prediction cache under `~/.pitwall/`.
//!
//! A single JSON file holding the last generated prediction and the race it
//! was generated for. Read and written without any transactional guarantee:
//! this is advisory state, not a correctness-critical store. A corrupt or
//! unreadable file is treated as empty and overwritten on the next save.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::predict::ProjectionResult;

const STORE_DIR: &str = ".pitwall";
const STORE_FILE: &str = "predictions.json";

#[derive(Serialize, Deserialize, Default)]
struct StoreData {
    #[serde(skip_serializing_if = "Option::is_none")]
    last_prediction: Option<CachedPrediction>,
}

/// The last prediction generated, keyed by the race it was generated after.
#[derive(Serialize, Deserialize, Clone)]
pub struct CachedPrediction {
    pub season: i32,
    pub round: u32,
    pub total_rounds: u32,
    pub class: String,
    pub results: Vec<ProjectionResult>,
}

pub struct Store {
    path: PathBuf,
    data: StoreData,
}

impl Store {
    /// Open the store at `$HOME/.pitwall/predictions.json`.
    pub fn open_default() -> Result<Self, Box<dyn Error>> {
        let home = std::env::var("HOME").map_err(|_| "could not determine home directory")?;
        Ok(Self::open(
            PathBuf::from(home).join(STORE_DIR).join(STORE_FILE),
        ))
    }

    /// Open a store file, treating a missing or corrupt file as empty.
    pub fn open(path: PathBuf) -> Self {
        let data = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self { path, data }
    }

    /// The cached prediction, if it was generated for exactly this race and
    /// entity class.
    pub fn cached_prediction(
        &self,
        season: i32,
        round: u32,
        class: &str,
    ) -> Option<&CachedPrediction> {
        self.data
            .last_prediction
            .as_ref()
            .filter(|p| p.season == season && p.round == round && p.class == class)
    }

    /// Replace the cached prediction and persist the store.
    pub fn save_prediction(&mut self, prediction: CachedPrediction) -> Result<(), Box<dyn Error>> {
        self.data.last_prediction = Some(prediction);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.data)?)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
