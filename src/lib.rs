// Game-side helper kit: countdown timers, enum coercion, float utilities and
// UI anchor/pivot presets.

pub mod config;
pub mod core;
pub mod engine;
pub mod ui;

pub use config::{KitConfig, DEFAULT_CONFIG};
pub use crate::core::{UtilError, UtilResult};
