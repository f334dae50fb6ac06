//! Limits config loader (strict parsing).

pub mod schema;

use std::fs;

use stockade_core::error::{Result, StockadeError};

pub use schema::{EngineSection, LimitsConfig};

pub fn load_from_file(path: &str) -> Result<LimitsConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| StockadeError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<LimitsConfig> {
    let cfg: LimitsConfig = serde_yaml::from_str(s)
        .map_err(|e| StockadeError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
