// Anchor and pivot presets
//
// Each preset resolves to a constant record, so adding a variant without a
// table entry fails to compile.

use glam::Vec2;

use crate::core::IndexedEnum;

/// Nine-point pivot presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PivotPreset {
    TopLeft = 0,
    TopCenter = 1,
    TopRight = 2,
    MiddleLeft = 3,
    MiddleCenter = 4,
    MiddleRight = 5,
    BottomLeft = 6,
    BottomCenter = 7,
    BottomRight = 8,
}

impl PivotPreset {
    pub const ALL: [PivotPreset; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::MiddleLeft,
        Self::MiddleCenter,
        Self::MiddleRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Fractional point within the rectangle
    pub const fn point(self) -> Vec2 {
        match self {
            Self::TopLeft => Vec2::new(0.0, 1.0),
            Self::TopCenter => Vec2::new(0.5, 1.0),
            Self::TopRight => Vec2::new(1.0, 1.0),
            Self::MiddleLeft => Vec2::new(0.0, 0.5),
            Self::MiddleCenter => Vec2::new(0.5, 0.5),
            Self::MiddleRight => Vec2::new(1.0, 0.5),
            Self::BottomLeft => Vec2::new(0.0, 0.0),
            Self::BottomCenter => Vec2::new(0.5, 0.0),
            Self::BottomRight => Vec2::new(1.0, 0.0),
        }
    }
}

impl IndexedEnum for PivotPreset {
    type Repr = u8;

    fn from_repr(repr: u8) -> Option<Self> {
        Self::ALL.get(usize::from(repr)).copied()
    }
}

/// Anchor presets: nine points, three horizontal stretches, three vertical
/// stretches and a full stretch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnchorPreset {
    TopLeft = 0,
    TopCenter = 1,
    TopRight = 2,
    MiddleLeft = 3,
    MiddleCenter = 4,
    MiddleRight = 5,
    BottomLeft = 6,
    BottomCenter = 7,
    BottomRight = 8,
    HorStretchTop = 9,
    HorStretchMiddle = 10,
    HorStretchBottom = 11,
    VertStretchLeft = 12,
    VertStretchCenter = 13,
    VertStretchRight = 14,
    StretchAll = 15,
}

/// What an anchor preset writes to a rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorLayout {
    pub min: Vec2,
    pub max: Vec2,
    /// Pivot to apply; stretch presets leave the pivot alone
    pub pivot: Option<PivotPreset>,
    /// Zero both offsets after anchoring
    pub reset_offsets: bool,
}

impl AnchorLayout {
    const fn point(pivot: PivotPreset) -> Self {
        let at = pivot.point();
        Self {
            min: at,
            max: at,
            pivot: Some(pivot),
            reset_offsets: false,
        }
    }

    const fn stretch(min: Vec2, max: Vec2) -> Self {
        Self {
            min,
            max,
            pivot: None,
            reset_offsets: false,
        }
    }
}

impl AnchorPreset {
    pub const ALL: [AnchorPreset; 16] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::MiddleLeft,
        Self::MiddleCenter,
        Self::MiddleRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
        Self::HorStretchTop,
        Self::HorStretchMiddle,
        Self::HorStretchBottom,
        Self::VertStretchLeft,
        Self::VertStretchCenter,
        Self::VertStretchRight,
        Self::StretchAll,
    ];

    pub const fn layout(self) -> AnchorLayout {
        match self {
            Self::TopLeft => AnchorLayout::point(PivotPreset::TopLeft),
            Self::TopCenter => AnchorLayout::point(PivotPreset::TopCenter),
            Self::TopRight => AnchorLayout::point(PivotPreset::TopRight),
            Self::MiddleLeft => AnchorLayout::point(PivotPreset::MiddleLeft),
            Self::MiddleCenter => AnchorLayout::point(PivotPreset::MiddleCenter),
            Self::MiddleRight => AnchorLayout::point(PivotPreset::MiddleRight),
            Self::BottomLeft => AnchorLayout::point(PivotPreset::BottomLeft),
            Self::BottomCenter => AnchorLayout::point(PivotPreset::BottomCenter),
            Self::BottomRight => AnchorLayout::point(PivotPreset::BottomRight),

            Self::HorStretchTop => AnchorLayout::stretch(Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0)),
            Self::HorStretchMiddle => {
                AnchorLayout::stretch(Vec2::new(0.0, 0.5), Vec2::new(1.0, 0.5))
            }
            Self::HorStretchBottom => {
                AnchorLayout::stretch(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0))
            }

            Self::VertStretchLeft => {
                AnchorLayout::stretch(Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0))
            }
            Self::VertStretchCenter => {
                AnchorLayout::stretch(Vec2::new(0.5, 0.0), Vec2::new(0.5, 1.0))
            }
            Self::VertStretchRight => {
                AnchorLayout::stretch(Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0))
            }

            Self::StretchAll => AnchorLayout {
                min: Vec2::ZERO,
                max: Vec2::ONE,
                pivot: None,
                reset_offsets: true,
            },
        }
    }

    /// Whether the preset spans the parent on at least one axis
    pub fn is_stretch(self) -> bool {
        self.layout().pivot.is_none()
    }
}

impl IndexedEnum for AnchorPreset {
    type Repr = u8;

    fn from_repr(repr: u8) -> Option<Self> {
        Self::ALL.get(usize::from(repr)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{try_convert, try_named, EnumCoercion, EnumValue};

    #[test]
    fn test_pivot_points_cover_the_grid() {
        for preset in PivotPreset::ALL {
            let p = preset.point();
            assert!([0.0, 0.5, 1.0].contains(&p.x));
            assert!([0.0, 0.5, 1.0].contains(&p.y));
        }
        assert_eq!(PivotPreset::TopLeft.point(), Vec2::new(0.0, 1.0));
        assert_eq!(PivotPreset::BottomRight.point(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_point_presets_pin_both_anchors() {
        for preset in &AnchorPreset::ALL[..9] {
            let layout = preset.layout();
            assert_eq!(layout.min, layout.max);
            let pivot = layout.pivot.expect("point presets carry a pivot");
            assert_eq!(pivot.point(), layout.min);
            assert!(!layout.reset_offsets);
        }
    }

    #[test]
    fn test_stretch_presets() {
        let top = AnchorPreset::HorStretchTop.layout();
        assert_eq!((top.min, top.max), (Vec2::new(0.0, 1.0), Vec2::ONE));

        let center = AnchorPreset::VertStretchCenter.layout();
        assert_eq!(
            (center.min, center.max),
            (Vec2::new(0.5, 0.0), Vec2::new(0.5, 1.0))
        );

        for preset in &AnchorPreset::ALL[9..] {
            assert!(preset.is_stretch());
        }
        assert!(AnchorPreset::StretchAll.layout().reset_offsets);
    }

    #[test]
    fn test_discriminants_match_table_order() {
        for (i, preset) in AnchorPreset::ALL.iter().enumerate() {
            assert_eq!(*preset as usize, i);
        }
        for (i, preset) in PivotPreset::ALL.iter().enumerate() {
            assert_eq!(*preset as usize, i);
        }
    }

    #[test]
    fn test_presets_coerce_from_serialized_indices() {
        assert_eq!(try_named::<AnchorPreset>(15), Some(AnchorPreset::StretchAll));
        assert_eq!(try_named::<PivotPreset>(9), None);
        assert_eq!(
            try_convert::<PivotPreset>(9, EnumCoercion::Lenient),
            Some(EnumValue::Unnamed(9))
        );
    }
}
