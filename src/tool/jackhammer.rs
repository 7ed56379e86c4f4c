//! The powered area-mining tool
//!
//! Ties the toggle cycle, energy store, and area selector together the
//! way the host engine drives a held item: `handle_use` on right-click,
//! `check_active` on usage ticks, `post_mine` after a block break.

use serde::{Deserialize, Serialize};

use crate::core::types::{BlockPos, Result};
use crate::mining::AreaMiningSelector;
use crate::notify::{Notice, Notifier};
use crate::tool::config::ToolConfig;
use crate::tool::energy::EnergyStore;
use crate::tool::state::{ModeChange, ToolState};
use crate::world::block::BlockKind;
use crate::world::view::{Actor, ActorId, WorldView};

/// Outcome of a use interaction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UseResult {
    /// The tool consumed the interaction
    Handled,
    /// Not ours; the host should keep dispatching
    Pass,
}

/// Tag blob handed to the host's item persistence
#[derive(Serialize, Deserialize)]
struct TagBlob {
    state: ToolState,
    energy: EnergyStore,
}

/// One tool instance
pub struct Jackhammer {
    pub state: ToolState,
    pub energy: EnergyStore,
    config: ToolConfig,
}

impl Jackhammer {
    /// Create an uncharged, inactive tool
    pub fn new(config: ToolConfig) -> Self {
        let energy = EnergyStore::new(config.charge_capacity, config.tier);
        Self {
            state: ToolState::new(),
            energy,
            config,
        }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Use interaction: sneaking advances the toggle cycle, plain use
    /// is not handled by this tool.
    pub fn handle_use(
        &mut self,
        actor: ActorId,
        notifier: &mut dyn Notifier,
        sneaking: bool,
    ) -> UseResult {
        if !sneaking {
            return UseResult::Pass;
        }
        self.toggle_area(actor, notifier);
        UseResult::Handled
    }

    /// Advance the toggle cycle and notify the actor
    pub fn toggle_area(&mut self, actor: ActorId, notifier: &mut dyn Notifier) -> ModeChange {
        let change = self.state.toggle_mode();
        log::debug!("area mode toggled: {:?}", change);
        notifier.notify(actor, Notice::Mode(change));
        change
    }

    /// Usage-tick check: an active tool that can no longer cover one
    /// area removal switches itself off.
    pub fn check_active(&mut self, actor: ActorId, notifier: &mut dyn Notifier) {
        if self.state.active && !self.energy.can_afford(self.config.cost_per_block) {
            self.state.active = false;
            log::debug!("tool deactivated on low charge for {:?}", actor);
            notifier.notify(actor, Notice::Deactivated);
        }
    }

    /// Mining speed against a block: powered multiplier on stone-class
    /// materials while charged, crawl speed otherwise.
    pub fn mining_speed(&self, block: BlockKind) -> f32 {
        if block.is_stone_material() && self.energy.can_afford(self.config.cost_per_block) {
            self.config.powered_speed
        } else {
            self.config.unpowered_speed
        }
    }

    /// Post-mine hook: dispatch the area removals for `origin`
    pub fn post_mine(&mut self, world: &mut dyn WorldView, origin: BlockPos, actor: &Actor) {
        let selector = AreaMiningSelector::from_config(&self.config);
        selector.on_block_mined(world, origin, actor, self.state, &mut self.energy);
    }

    /// Lines the host appends to the item tooltip
    pub fn tooltip_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.state.active {
            lines.push("Active".to_string());
            lines.push(self.state.area_mode.label().to_string());
        } else {
            lines.push("Inactive".to_string());
        }
        lines
    }

    /// Serialize state and charge into the host's tag storage
    pub fn to_tag(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(TagBlob {
            state: self.state,
            energy: self.energy,
        })?)
    }

    /// Restore a tool from the host's tag storage
    ///
    /// A blob that does not decode, including one whose stored energy
    /// exceeds its capacity, is rejected.
    pub fn from_tag(config: ToolConfig, tag: &serde_json::Value) -> Result<Self> {
        let blob: TagBlob = serde_json::from_value(tag.clone())?;
        Ok(Self {
            state: blob.state,
            energy: blob.energy,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NullNotifier;
    use crate::tool::state::AreaMode;

    fn charged_tool() -> Jackhammer {
        let mut tool = Jackhammer::new(ToolConfig::default());
        tool.energy.fill();
        tool
    }

    #[test]
    fn test_plain_use_passes_through() {
        let mut tool = charged_tool();
        let result = tool.handle_use(ActorId(1), &mut NullNotifier, false);
        assert_eq!(result, UseResult::Pass);
        assert!(!tool.state.active);
    }

    #[test]
    fn test_sneak_use_toggles() {
        let mut tool = charged_tool();
        let result = tool.handle_use(ActorId(1), &mut NullNotifier, true);
        assert_eq!(result, UseResult::Handled);
        assert!(tool.state.active);
        assert_eq!(tool.state.area_mode, AreaMode::Small);
    }

    #[test]
    fn test_check_active_deactivates_on_low_charge() {
        let mut tool = Jackhammer::new(ToolConfig::default());
        tool.energy.receive(100); // below cost_per_block
        tool.state.active = true;

        tool.check_active(ActorId(1), &mut NullNotifier);
        assert!(!tool.state.active);
    }

    #[test]
    fn test_check_active_keeps_charged_tool_on() {
        let mut tool = charged_tool();
        tool.state.active = true;
        tool.check_active(ActorId(1), &mut NullNotifier);
        assert!(tool.state.active);
    }

    #[test]
    fn test_mining_speed() {
        let tool = charged_tool();
        let config = ToolConfig::default();
        assert_eq!(tool.mining_speed(BlockKind::Stone), config.powered_speed);
        assert_eq!(tool.mining_speed(BlockKind::Dirt), config.unpowered_speed);

        let empty = Jackhammer::new(ToolConfig::default());
        assert_eq!(empty.mining_speed(BlockKind::Stone), config.unpowered_speed);
    }

    #[test]
    fn test_tooltip_lines() {
        let mut tool = charged_tool();
        assert_eq!(tool.tooltip_lines(), vec!["Inactive"]);

        tool.state.toggle_mode();
        tool.state.toggle_mode();
        assert_eq!(tool.tooltip_lines(), vec!["Active", "5*5"]);
    }

    #[test]
    fn test_post_mine_full_flow() {
        use crate::world::facing::Facing;
        use crate::world::view::{Actor, GridWorld};

        let mut tool = charged_tool();
        let actor = Actor::new(ActorId(7), Facing::Down);

        // Sneak-use twice: on at 3*3, then up to 5*5
        tool.handle_use(actor.id, &mut NullNotifier, true);
        tool.handle_use(actor.id, &mut NullNotifier, true);
        assert_eq!(tool.state.area_mode, AreaMode::Large);

        let mut world = GridWorld::new();
        world.fill(
            BlockPos::new(-2, 0, -2),
            BlockPos::new(2, 0, 2),
            BlockKind::Stone,
        );
        tool.post_mine(&mut world, BlockPos::new(0, 0, 0), &actor);

        assert_eq!(world.removals().len(), 25);
        let cost = tool.config().cost_per_block;
        assert_eq!(tool.energy.stored(), tool.energy.capacity() - 24 * cost);
    }

    #[test]
    fn test_tag_roundtrip_keeps_state_and_charge() {
        let mut tool = charged_tool();
        tool.state.toggle_mode();
        tool.energy.try_drain(500);

        let tag = tool.to_tag().unwrap();
        let restored = Jackhammer::from_tag(ToolConfig::default(), &tag).unwrap();
        assert_eq!(restored.state, tool.state);
        assert_eq!(restored.energy, tool.energy);
    }

    #[test]
    fn test_overfull_tag_rejected() {
        // A corrupt blob claiming more charge than the store can hold
        // must fail the load instead of arming a later underflow
        let tag = serde_json::json!({
            "state": { "active": true, "area_mode": "Small" },
            "energy": { "stored": 500, "capacity": 100, "tier": "Insane" },
        });
        assert!(Jackhammer::from_tag(ToolConfig::default(), &tag).is_err());
    }
}
