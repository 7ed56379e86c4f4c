//! Block classification

use serde::{Deserialize, Serialize};

/// Harvest capability tier of a mining tool
///
/// Ordered by strength; a tool can harvest any block whose required
/// tier is at or below its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ToolTier {
    Wood,
    Stone,
    #[default]
    Iron,
    Diamond,
}

/// Block kind at a world position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    #[default]
    Air,
    Stone,
    Cobblestone,
    Dirt,
    Gravel,
    Sand,
    Sandstone,
    Water,
    Lava,
    CoalOre,
    IronOre,
    GoldOre,
    RedstoneOre,
    Obsidian,
    Bedrock,
    Wood,
    Leaves,
}

impl BlockKind {
    pub fn is_air(&self) -> bool {
        *self == BlockKind::Air
    }

    pub fn is_liquid(&self) -> bool {
        matches!(self, BlockKind::Water | BlockKind::Lava)
    }

    /// Ore-bearing blocks are excluded from area mining by policy.
    pub fn is_ore(&self) -> bool {
        matches!(
            self,
            BlockKind::CoalOre | BlockKind::IronOre | BlockKind::GoldOre | BlockKind::RedstoneOre
        )
    }

    /// Whether a pickaxe is the right tool class for this block at all
    pub fn is_pickaxe_material(&self) -> bool {
        matches!(
            self,
            BlockKind::Stone
                | BlockKind::Cobblestone
                | BlockKind::Sandstone
                | BlockKind::CoalOre
                | BlockKind::IronOre
                | BlockKind::GoldOre
                | BlockKind::RedstoneOre
                | BlockKind::Obsidian
        )
    }

    /// Stone-class materials get the powered mining speed bonus
    pub fn is_stone_material(&self) -> bool {
        matches!(
            self,
            BlockKind::Stone | BlockKind::Cobblestone | BlockKind::Sandstone
        )
    }

    /// Minimum tool tier required to harvest this block, or None when
    /// the block cannot be harvested at all (bedrock)
    pub fn required_tier(&self) -> Option<ToolTier> {
        match self {
            BlockKind::Bedrock => None,
            BlockKind::Obsidian => Some(ToolTier::Diamond),
            BlockKind::GoldOre | BlockKind::RedstoneOre => Some(ToolTier::Iron),
            BlockKind::IronOre => Some(ToolTier::Stone),
            _ => Some(ToolTier::Wood),
        }
    }

    /// Effectiveness test against this block for a tool of `tier`
    ///
    /// Mirrors the single-block mining capability: the block must be a
    /// pickaxe material and the tier must meet its harvest requirement.
    pub fn effective_with(&self, tier: ToolTier) -> bool {
        if !self.is_pickaxe_material() {
            return false;
        }
        match self.required_tier() {
            Some(required) => tier >= required,
            None => false,
        }
    }
}
