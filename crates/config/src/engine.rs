//! Engine tunables

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Tunables for matching, the pending-comparison TTL, and list rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum similarity for a fuzzy phone resolution to count.
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,

    /// Minimum similarity for the whole-query comparison-target scan.
    #[serde(default = "default_target_threshold")]
    pub target_threshold: f64,

    /// How long an unanswered comparison prompt stays alive.
    #[serde(default = "default_pending_ttl_secs")]
    pub pending_ttl_secs: u64,

    /// How many entries a feature ranking shows.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Maximum number of phones in one comparison.
    #[serde(default = "default_max_comparison_targets")]
    pub max_comparison_targets: usize,

    /// Prices below this get a bargain annotation.
    #[serde(default = "default_budget_price")]
    pub budget_price: u32,

    /// Batteries above this (mAh) get the exceptional-duration annotation.
    #[serde(default = "default_big_battery_mah")]
    pub big_battery_mah: u32,
}

fn default_fuzzy_threshold() -> f64 {
    0.6
}

fn default_target_threshold() -> f64 {
    0.7
}

fn default_pending_ttl_secs() -> u64 {
    300
}

fn default_top_n() -> usize {
    5
}

fn default_max_comparison_targets() -> usize {
    4
}

fn default_budget_price() -> u32 {
    20_000
}

fn default_big_battery_mah() -> u32 {
    5_000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            target_threshold: default_target_threshold(),
            pending_ttl_secs: default_pending_ttl_secs(),
            top_n: default_top_n(),
            max_comparison_targets: default_max_comparison_targets(),
            budget_price: default_budget_price(),
            big_battery_mah: default_big_battery_mah(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("engine.fuzzy_threshold", self.fuzzy_threshold),
            ("engine.target_threshold", self.target_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("similarity threshold must be in (0, 1], got {value}"),
                });
            }
        }

        if self.pending_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "engine.pending_ttl_secs".to_string(),
                message: "pending-comparison TTL must be non-zero".to_string(),
            });
        }

        if self.top_n == 0 {
            return Err(ConfigError::InvalidValue {
                field: "engine.top_n".to_string(),
                message: "ranking size must be non-zero".to_string(),
            });
        }

        if !(2..=4).contains(&self.max_comparison_targets) {
            return Err(ConfigError::InvalidValue {
                field: "engine.max_comparison_targets".to_string(),
                message: format!(
                    "comparison needs between 2 and 4 targets, got {}",
                    self.max_comparison_targets
                ),
            });
        }

        Ok(())
    }
}
