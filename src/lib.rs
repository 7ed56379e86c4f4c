//! Drillkit - powered area-of-effect mining tool logic for voxel worlds

pub mod core;
pub mod world;
pub mod tool;
pub mod mining;
pub mod notify;
