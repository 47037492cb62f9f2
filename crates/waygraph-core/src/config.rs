//! Engine configuration
//!
//! Configuration is an optional TOML file. Every field has a default, so an
//! empty file (or none at all) is valid.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{GraphError, Result};

pub use types::{EngineConfig, FrontierConfig, GraphConfig, LoggingConfig};

/// Default configuration file name looked up by the CLI
pub const CONFIG_FILE_NAME: &str = "waygraph.toml";

impl EngineConfig {
    /// Load configuration from a file
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(order = %config.graph.traversal_order, "config_loaded");
        Ok(config)
    }

    /// Load configuration if the file exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::failed("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the engine cannot honor
    pub fn validate(&self) -> Result<()> {
        let h = self.graph.default_heuristic;
        if !h.is_finite() || h < 0.0 {
            bail_invalid!("graph.default_heuristic", h);
        }
        if self.frontier.max_cost.is_nan() {
            bail_invalid!("frontier.max_cost", self.frontier.max_cost);
        }
        Ok(())
    }
}
