//! Area mining selection and dispatch
//!
//! When an active tool breaks a block, extra removals are issued in a
//! plane around the origin, perpendicular to the actor's mining
//! direction: a horizontal slab when mining floor or ceiling, a
//! vertical one when mining a wall.

use crate::core::types::BlockPos;
use crate::tool::config::ToolConfig;
use crate::tool::energy::EnergyStore;
use crate::tool::state::ToolState;
use crate::world::block::ToolTier;
use crate::world::facing::Facing;
use crate::world::view::{Actor, RemovalCause, WorldView};

/// Computes and dispatches the extra removals of an area-mining action
pub struct AreaMiningSelector {
    /// Effectiveness baseline a candidate must pass
    effectiveness_tier: ToolTier,
    /// Energy drained per extra removal
    cost_per_block: u32,
}

impl AreaMiningSelector {
    pub fn new(effectiveness_tier: ToolTier, cost_per_block: u32) -> Self {
        Self {
            effectiveness_tier,
            cost_per_block,
        }
    }

    pub fn from_config(config: &ToolConfig) -> Self {
        Self::new(config.effectiveness_tier, config.cost_per_block)
    }

    /// Candidate positions around `origin` for the given facing and
    /// radius: the (2r+1)^2 plane perpendicular to the mining
    /// direction, origin excluded.
    pub fn neighborhood(origin: BlockPos, facing: Facing, radius: i32) -> Vec<BlockPos> {
        let (a, b) = facing.plane_axes();
        let side = 2 * radius + 1;
        let mut candidates = Vec::with_capacity((side * side - 1) as usize);
        for u in -radius..=radius {
            for v in -radius..=radius {
                if u == 0 && v == 0 {
                    continue;
                }
                candidates.push(origin.offset(a * u + b * v));
            }
        }
        candidates
    }

    /// Break decision for one candidate
    ///
    /// Air and liquids are nothing to mine; ores are excluded by policy
    /// so the area effect cannot mass-harvest them; anything the
    /// baseline tier is not effective against stays put.
    fn should_break(&self, world: &dyn WorldView, origin: BlockPos, pos: BlockPos) -> bool {
        if pos == origin {
            return false;
        }
        let block = world.block_at(pos);
        if block.is_air() || block.is_liquid() || block.is_ore() {
            return false;
        }
        block.effective_with(self.effectiveness_tier)
    }

    /// Handle a mined block
    ///
    /// With an inactive tool this is just the origin removal. With an
    /// active tool, each eligible candidate in the area is charged
    /// `cost_per_block` and removed; a candidate the balance cannot
    /// cover is skipped on its own, without affecting later candidates.
    /// The origin always comes out last - the host already charged the
    /// primary break.
    pub fn on_block_mined(
        &self,
        world: &mut dyn WorldView,
        origin: BlockPos,
        actor: &Actor,
        state: ToolState,
        energy: &mut EnergyStore,
    ) {
        if state.active {
            let radius = state.area_mode.radius();
            let mut broken = 0u32;
            for pos in Self::neighborhood(origin, actor.facing, radius) {
                if !self.should_break(world, origin, pos) {
                    continue;
                }
                if !energy.try_drain(self.cost_per_block) {
                    continue;
                }
                world.remove_block(pos, RemovalCause::AreaEffect);
                broken += 1;
            }
            log::trace!(
                "area mining at {:?}: {} extra removals (radius {})",
                origin,
                broken,
                radius
            );
        }
        world.remove_block(origin, RemovalCause::Primary);
    }
}
