use anyhow::Result;
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ArenaOptions {
    pub seed: Option<u64>,
    pub results_file: Option<String>,
}

impl Config for ArenaOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        Ok(Self {
            seed: config.get("seed").and_then(|v| v.as_u64()),
            results_file: config.get("results_file").and_then(|v| v.as_string()),
        })
    }
}
