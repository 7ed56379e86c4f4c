//! Area-of-effect mining selection

pub mod selector;

pub use selector::AreaMiningSelector;
