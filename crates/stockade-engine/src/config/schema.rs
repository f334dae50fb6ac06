use serde::Deserialize;
use serde_yaml::Mapping;

use stockade_core::error::{Result, StockadeError};

/// Root limits config.
///
/// The three rule sections stay as raw YAML mappings here: rule keys are
/// material names only the catalog can validate, and their declaration order
/// is semantically significant, so compilation happens in a separate pass
/// (see [`crate::compile`]).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    pub version: u32,

    #[serde(default)]
    pub engine: EngineSection,

    #[serde(default)]
    pub defaults: Mapping,

    #[serde(default)]
    pub players: Mapping,

    #[serde(default)]
    pub groups: Mapping,
}

impl LimitsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StockadeError::UnsupportedVersion);
        }

        self.engine.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineSection {
    /// Deadline for one protection-store count fetch.
    #[serde(default = "default_count_timeout_ms")]
    pub count_timeout_ms: u64,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            count_timeout_ms: default_count_timeout_ms(),
        }
    }
}

impl EngineSection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=60000).contains(&self.count_timeout_ms) {
            return Err(StockadeError::Config(
                "engine.count_timeout_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_count_timeout_ms() -> u64 {
    2000
}
