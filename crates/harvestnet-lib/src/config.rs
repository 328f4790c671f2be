//! Tunable constants for the supply chain engine.
//!
//! Every threshold and formula constant used by the optimisers lives here so
//! callers (and tests) can parameterise a run without touching the algorithms.
//! All fields carry serde defaults, so a partial JSON document only overrides
//! the keys it names.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Complete configuration passed into each component of a report run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplyChainConfig {
    pub inventory: InventoryConfig,
    pub clustering: ClusteringConfig,
    pub thresholds: RecommendationThresholds,
    pub triage: TriageConfig,
}

impl SupplyChainConfig {
    /// Load a configuration from a JSON file, falling back to defaults for
    /// any missing keys.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every nested section.
    pub fn validate(&self) -> Result<()> {
        self.inventory.validate()?;
        self.clustering.validate()
    }
}

/// Constants for the safety stock and EOQ formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Standard normal quantile for the target service level (95% by default).
    pub z_score: f64,
    /// Fixed cost of placing one replenishment order.
    pub order_cost: f64,
    /// Days used to annualise demand and de-annualise storage cost.
    pub days_per_year: f64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            z_score: 1.645,
            order_cost: 100.0,
            days_per_year: 365.0,
        }
    }
}

impl InventoryConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.z_score.is_finite() || self.z_score < 0.0 {
            return Err(Error::InvalidConfig {
                message: format!("z_score must be finite and non-negative, got {}", self.z_score),
            });
        }
        if !self.order_cost.is_finite() || self.order_cost < 0.0 {
            return Err(Error::InvalidConfig {
                message: format!(
                    "order_cost must be finite and non-negative, got {}",
                    self.order_cost
                ),
            });
        }
        if !self.days_per_year.is_finite() || self.days_per_year <= 0.0 {
            return Err(Error::InvalidConfig {
                message: format!(
                    "days_per_year must be finite and positive, got {}",
                    self.days_per_year
                ),
            });
        }
        Ok(())
    }
}

/// Density-based clustering parameters, in standardised coordinate units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Neighbourhood radius.
    pub eps: f64,
    /// Minimum neighbourhood size (including the point itself) for a core point.
    pub min_samples: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            eps: 0.5,
            min_samples: 5,
        }
    }
}

impl ClusteringConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(Error::InvalidConfig {
                message: format!("eps must be finite and positive, got {}", self.eps),
            });
        }
        if self.min_samples == 0 {
            return Err(Error::InvalidConfig {
                message: "min_samples must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Thresholds that trigger the fixed recommendation blocks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    pub min_delivery_reliability: f64,
    /// Safety stock above this fraction of max inventory is flagged.
    pub max_safety_stock_ratio: f64,
    pub min_capacity_utilization: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            min_delivery_reliability: 0.9,
            max_safety_stock_ratio: 0.4,
            min_capacity_utilization: 0.7,
        }
    }
}

/// Keyword lists used to rank recommendation lines across reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    pub high_keywords: Vec<String>,
    pub medium_keywords: Vec<String>,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            high_keywords: vec!["immediate".into(), "urgent".into(), "warning".into()],
            medium_keywords: vec!["optimize".into(), "improve".into(), "strengthen".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = SupplyChainConfig::default();
        assert_eq!(config.inventory.z_score, 1.645);
        assert_eq!(config.inventory.order_cost, 100.0);
        assert_eq!(config.clustering.eps, 0.5);
        assert_eq!(config.clustering.min_samples, 5);
        assert_eq!(config.thresholds.max_safety_stock_ratio, 0.4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: SupplyChainConfig =
            serde_json::from_str(r#"{"clustering": {"eps": 1.25}}"#).expect("parse");
        assert_eq!(config.clustering.eps, 1.25);
        assert_eq!(config.clustering.min_samples, 5);
        assert_eq!(config.inventory, InventoryConfig::default());
    }

    #[test]
    fn rejects_non_positive_eps() {
        let config = ClusteringConfig {
            eps: 0.0,
            min_samples: 5,
        };
        let error = config.validate().expect_err("eps must be positive");
        assert!(error.to_string().contains("eps"));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let error = SupplyChainConfig::from_path(Path::new("/definitely/not/here.json"))
            .expect_err("missing file");
        assert!(matches!(error, Error::InputNotFound { .. }));
    }
}
