//! World access trait and the in-memory grid world

use std::collections::HashMap;

use crate::core::types::BlockPos;
use crate::world::block::BlockKind;
use crate::world::facing::Facing;

/// Identifier of an acting player or entity, assigned by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActorId(pub u64);

/// The acting entity, as seen by the tool logic
///
/// The host engine owns the real entity; this carries only what the
/// mining path needs.
#[derive(Clone, Copy, Debug)]
pub struct Actor {
    pub id: ActorId,
    /// Direction the actor is mining into
    pub facing: Facing,
}

impl Actor {
    pub fn new(id: ActorId, facing: Facing) -> Self {
        Self { id, facing }
    }
}

/// Why a block removal was issued
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemovalCause {
    /// The block the actor actually mined
    Primary,
    /// An extra removal added by the area effect
    AreaEffect,
}

/// Read/write access to block state, owned by the host engine
pub trait WorldView {
    /// Block kind at a position; air when nothing is there
    fn block_at(&self, pos: BlockPos) -> BlockKind;

    /// Remove the block at a position
    fn remove_block(&mut self, pos: BlockPos, cause: RemovalCause);
}

/// HashMap-backed world for tests and headless simulation
///
/// Positions with no entry read as air. Removals are recorded in order
/// so callers can assert on what happened.
#[derive(Default)]
pub struct GridWorld {
    blocks: HashMap<BlockPos, BlockKind>,
    removals: Vec<(BlockPos, RemovalCause)>,
}

impl GridWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a block, overwriting whatever was there
    pub fn set_block(&mut self, pos: BlockPos, kind: BlockKind) {
        if kind.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, kind);
        }
    }

    /// Fill an inclusive box with one block kind
    pub fn fill(&mut self, min: BlockPos, max: BlockPos, kind: BlockKind) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.set_block(BlockPos::new(x, y, z), kind);
                }
            }
        }
    }

    /// Removals issued so far, in order
    pub fn removals(&self) -> &[(BlockPos, RemovalCause)] {
        &self.removals
    }
}

impl WorldView for GridWorld {
    fn block_at(&self, pos: BlockPos) -> BlockKind {
        self.blocks.get(&pos).copied().unwrap_or(BlockKind::Air)
    }

    fn remove_block(&mut self, pos: BlockPos, cause: RemovalCause) {
        self.blocks.remove(&pos);
        self.removals.push((pos, cause));
    }
}
