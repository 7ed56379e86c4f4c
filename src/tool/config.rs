//! Tool configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::Result;
use crate::tool::energy::EnergyTier;
use crate::world::block::ToolTier;

/// Configuration for a powered area-mining tool
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Energy capacity of the tool
    pub charge_capacity: u32,
    /// Energy drained per extra block broken by the area effect
    pub cost_per_block: u32,
    /// Energy I/O tier
    pub tier: EnergyTier,
    /// Effectiveness baseline for area candidates (iron-pickaxe
    /// equivalent by default)
    pub effectiveness_tier: ToolTier,
    /// Mining speed against stone-class blocks while charged
    pub powered_speed: f32,
    /// Mining speed when out of charge or against the wrong material
    pub unpowered_speed: f32,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            charge_capacity: 400_000,
            cost_per_block: 250,
            tier: EnergyTier::Insane,
            effectiveness_tier: ToolTier::Iron,
            powered_speed: 32.0,
            unpowered_speed: 0.5,
        }
    }
}

impl ToolConfig {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.cost_per_block > self.charge_capacity {
            return Err(crate::core::Error::Config(format!(
                "cost_per_block ({}) exceeds charge_capacity ({})",
                self.cost_per_block, self.charge_capacity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ToolConfig::default();
        assert_eq!(config.charge_capacity, 400_000);
        assert_eq!(config.cost_per_block, 250);
        assert_eq!(config.tier, EnergyTier::Insane);
        assert_eq!(config.effectiveness_tier, ToolTier::Iron);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = ToolConfig::from_json(r#"{ "cost_per_block": 100 }"#).unwrap();
        assert_eq!(config.cost_per_block, 100);
        assert_eq!(config.charge_capacity, 400_000);
    }

    #[test]
    fn test_invalid_cost_rejected() {
        let result = ToolConfig::from_json(
            r#"{ "cost_per_block": 500, "charge_capacity": 100 }"#,
        );
        assert!(result.is_err());
    }
}
