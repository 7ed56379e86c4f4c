//! Mining direction

use crate::core::types::IVec3;

/// Direction the actor is mining into
///
/// Determines the orientation of the area-mining plane: mining a floor
/// or ceiling sweeps a horizontal plane, mining a wall sweeps a
/// vertical plane facing the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Facing {
    /// Unit offset along this direction (north is -Z, east is +X)
    pub fn offset(&self) -> IVec3 {
        match self {
            Facing::Down => IVec3::new(0, -1, 0),
            Facing::Up => IVec3::new(0, 1, 0),
            Facing::North => IVec3::new(0, 0, -1),
            Facing::South => IVec3::new(0, 0, 1),
            Facing::West => IVec3::new(-1, 0, 0),
            Facing::East => IVec3::new(1, 0, 0),
        }
    }

    /// The two axes spanning the mining plane perpendicular to this
    /// direction, as unit vectors
    pub fn plane_axes(&self) -> (IVec3, IVec3) {
        match self {
            Facing::Down | Facing::Up => (IVec3::new(1, 0, 0), IVec3::new(0, 0, 1)),
            Facing::North | Facing::South => (IVec3::new(1, 0, 0), IVec3::new(0, 1, 0)),
            Facing::West | Facing::East => (IVec3::new(0, 0, 1), IVec3::new(0, 1, 0)),
        }
    }
}
