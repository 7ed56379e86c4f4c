//! Core type aliases and re-exports

use serde::{Deserialize, Serialize};

pub use glam::IVec3;

/// Standard Result type for the crate
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;

/// Block coordinate in world space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Offset by a delta vector
    pub fn offset(self, delta: IVec3) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            z: self.z + delta.z,
        }
    }
}

impl From<IVec3> for BlockPos {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<BlockPos> for IVec3 {
    fn from(p: BlockPos) -> Self {
        IVec3::new(p.x, p.y, p.z)
    }
}
