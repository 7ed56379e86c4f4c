//! World-side abstractions the tool logic mines through

pub mod block;
pub mod facing;
pub mod view;

pub use block::{BlockKind, ToolTier};
pub use facing::Facing;
pub use view::{Actor, ActorId, GridWorld, RemovalCause, WorldView};
