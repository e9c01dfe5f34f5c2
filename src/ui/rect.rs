// Plain-value description of an anchored UI rectangle
//
// The host UI system owns the real rectangle; it copies its fields in, runs
// one of the helpers below, and copies the result back.

use glam::{IVec2, Vec2};

use super::presets::{AnchorPreset, PivotPreset};

/// Anchored rectangle: size and position relative to its anchors, with
/// anchor and pivot fractions kept in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectLayout {
    size_delta: Vec2,
    anchored_position: Vec2,
    anchor_min: Vec2,
    anchor_max: Vec2,
    pivot: Vec2,
}

impl Default for RectLayout {
    fn default() -> Self {
        Self::new(Vec2::new(100.0, 100.0), Vec2::ZERO)
    }
}

impl RectLayout {
    /// Create a rectangle with centred anchors and pivot
    pub fn new(size_delta: Vec2, anchored_position: Vec2) -> Self {
        let center = PivotPreset::MiddleCenter.point();
        Self {
            size_delta,
            anchored_position,
            anchor_min: center,
            anchor_max: center,
            pivot: center,
        }
    }

    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot.clamp(Vec2::ZERO, Vec2::ONE);
        self
    }

    pub fn with_anchors(mut self, min: Vec2, max: Vec2) -> Self {
        self.anchor_min = min.clamp(Vec2::ZERO, Vec2::ONE);
        self.anchor_max = max.clamp(Vec2::ZERO, Vec2::ONE);
        self
    }

    pub fn size_delta(&self) -> Vec2 {
        self.size_delta
    }

    pub fn set_size_delta(&mut self, size_delta: Vec2) {
        self.size_delta = size_delta;
    }

    pub fn anchored_position(&self) -> Vec2 {
        self.anchored_position
    }

    pub fn set_anchored_position(&mut self, position: Vec2) {
        self.anchored_position = position;
    }

    pub fn anchor_min(&self) -> Vec2 {
        self.anchor_min
    }

    pub fn anchor_max(&self) -> Vec2 {
        self.anchor_max
    }

    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    /// Lower-left corner relative to the lower-left anchor
    pub fn offset_min(&self) -> Vec2 {
        self.anchored_position - self.size_delta * self.pivot
    }

    /// Upper-right corner relative to the upper-right anchor
    pub fn offset_max(&self) -> Vec2 {
        self.anchored_position + self.size_delta * (Vec2::ONE - self.pivot)
    }

    /// Move the lower-left corner, keeping the upper-right one in place
    pub fn set_offset_min(&mut self, value: Vec2) {
        let change = value - self.offset_min();
        self.size_delta -= change;
        self.anchored_position += change * (Vec2::ONE - self.pivot);
    }

    /// Move the upper-right corner, keeping the lower-left one in place
    pub fn set_offset_max(&mut self, value: Vec2) {
        let change = value - self.offset_max();
        self.size_delta += change;
        self.anchored_position += change * self.pivot;
    }

    /// Centre of the rectangle relative to its anchor reference point
    pub fn center(&self) -> Vec2 {
        self.anchored_position + (Vec2::splat(0.5) - self.pivot) * self.size_delta
    }

    /// Shrink width by `reduce_size.x` and height by `reduce_size.y`
    pub fn set_padding_size(&mut self, reduce_size: IVec2) {
        self.set_horizontal_width(reduce_size.x as f32);
        self.set_vertical_height(reduce_size.y as f32);
    }

    /// Shrink the width equally from both sides
    ///
    /// The position shifts by half the removed width, which keeps the centre
    /// fixed for left-edge pivots.
    pub fn set_horizontal_width(&mut self, reduce: f32) {
        self.size_delta.x -= reduce;
        self.anchored_position.x += reduce / 2.0;
    }

    /// Shrink the height equally from both sides (bottom-edge pivots keep
    /// their centre)
    pub fn set_vertical_height(&mut self, reduce: f32) {
        self.size_delta.y -= reduce;
        self.anchored_position.y += reduce / 2.0;
    }

    /// Apply an anchor preset, placing the rectangle at `offset` from it
    pub fn set_anchor(&mut self, preset: AnchorPreset, offset: IVec2) {
        self.anchored_position = offset.as_vec2();

        let layout = preset.layout();
        self.anchor_min = layout.min;
        self.anchor_max = layout.max;
        if let Some(pivot) = layout.pivot {
            self.set_pivot(pivot);
        }
        if layout.reset_offsets {
            self.set_offset_max(Vec2::ZERO);
            self.set_offset_min(Vec2::ZERO);
            log::debug!("Offsets reset for {:?}", preset);
        }
    }

    pub fn set_pivot(&mut self, preset: PivotPreset) {
        self.pivot = preset.point();
    }
}
