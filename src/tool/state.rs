//! Persistent tool flags and the activation toggle cycle

use serde::{Deserialize, Serialize};

use crate::core::types::Result;

/// Area-effect footprint of the tool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaMode {
    /// 3x3 plane
    #[default]
    Small,
    /// 5x5 plane
    Large,
}

impl AreaMode {
    /// Plane half-extent in blocks
    pub fn radius(&self) -> i32 {
        match self {
            AreaMode::Small => 1,
            AreaMode::Large => 2,
        }
    }

    /// Short label for tooltips and chat ("3*3" / "5*5")
    pub fn label(&self) -> &'static str {
        match self {
            AreaMode::Small => "3*3",
            AreaMode::Large => "5*5",
        }
    }
}

/// Outcome of one step of the toggle cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeChange {
    SwitchedOn(AreaMode),
    ModeChanged(AreaMode),
    SwitchedOff,
}

/// Persistent flags attached to one tool instance
///
/// Round-trips through the host's opaque tag storage via [`to_tag`]
/// and [`from_tag`]. `area_mode` is only meaningful while `active`,
/// and switching off leaves it in place (last mode is remembered).
///
/// [`to_tag`]: ToolState::to_tag
/// [`from_tag`]: ToolState::from_tag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolState {
    pub active: bool,
    pub area_mode: AreaMode,
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the toggle cycle: Off -> Small -> Large -> Off
    ///
    /// Switching on always re-enters at Small. Switching off does not
    /// touch `area_mode`.
    pub fn toggle_mode(&mut self) -> ModeChange {
        if !self.active {
            self.active = true;
            self.area_mode = AreaMode::Small;
            ModeChange::SwitchedOn(AreaMode::Small)
        } else if self.area_mode == AreaMode::Small {
            self.area_mode = AreaMode::Large;
            ModeChange::ModeChanged(AreaMode::Large)
        } else {
            self.active = false;
            ModeChange::SwitchedOff
        }
    }

    /// Serialize into the host's tag blob
    pub fn to_tag(&self) -> serde_json::Value {
        // Two plain fields, cannot fail
        serde_json::json!({
            "active": self.active,
            "area_mode": self.area_mode,
        })
    }

    /// Restore from the host's tag blob
    pub fn from_tag(tag: &serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(tag.clone())?)
    }
}
