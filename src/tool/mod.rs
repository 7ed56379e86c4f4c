//! Tool state, energy storage, and the powered tool itself

pub mod config;
pub mod energy;
pub mod state;
pub mod jackhammer;

pub use config::ToolConfig;
pub use energy::{EnergyStore, EnergyTier};
pub use jackhammer::{Jackhammer, UseResult};
pub use state::{AreaMode, ModeChange, ToolState};
