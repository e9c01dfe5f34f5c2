// UI layout helpers
//
// Anchor/pivot presets and padding adjustments over a plain rectangle value.

pub mod presets;
pub mod rect;

pub use presets::{AnchorLayout, AnchorPreset, PivotPreset};
pub use rect::RectLayout;
