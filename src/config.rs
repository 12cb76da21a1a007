// ⚙️ Demo Configuration
// How many records to generate and how many of them to show

use anyhow::{ensure, Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::generator::FIXED_SEED;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Seed for the data generator
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Records produced by the generator
    #[serde(default = "default_generated_count")]
    pub generated_count: usize,

    /// Leading records used by every demonstration step
    #[serde(default = "default_demo_count")]
    pub demo_count: usize,
}

fn default_seed() -> u64 {
    FIXED_SEED
}

fn default_generated_count() -> usize {
    100
}

fn default_demo_count() -> usize {
    25
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            seed: default_seed(),
            generated_count: default_generated_count(),
            demo_count: default_demo_count(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    ///
    /// Counts are unsigned, so a negative count fails here.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: DemoConfig =
            serde_json::from_str(content).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.demo_count <= self.generated_count,
            "demo_count ({}) exceeds generated_count ({})",
            self.demo_count,
            self.generated_count
        );
        Ok(())
    }
}
