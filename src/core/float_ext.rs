// Method-call sugar over the free functions in `math` and `time_format`

use super::{math, time_format, UtilResult};

/// Float helpers callable as methods, e.g. `hp.normalize(0.0, max_hp)`
pub trait FloatExt {
    fn equal_approximately(self, target: f32, tolerance: f32) -> bool;
    fn equal_approximately_or_greater(self, target: f32, tolerance: f32) -> bool;
    fn equal_approximately_or_less(self, target: f32, tolerance: f32) -> bool;
    fn clamp_between(self, min: f32, max: f32) -> f32;
    fn map(self, from_lo: f32, from_hi: f32, to_lo: f32, to_hi: f32) -> f32;
    fn round_to_decimal_places(self, places: i32) -> f32;
    fn normalize(self, min: f32, max: f32) -> UtilResult<f32>;
    fn normalize_extremum(self, min: f32, max: f32, tolerance: f32) -> UtilResult<f32>;
    fn to_hms_time(self, decimal_places: i32) -> UtilResult<String>;
}

impl FloatExt for f32 {
    fn equal_approximately(self, target: f32, tolerance: f32) -> bool {
        math::equal_approximately(self, target, tolerance)
    }

    fn equal_approximately_or_greater(self, target: f32, tolerance: f32) -> bool {
        math::equal_approximately_or_greater(self, target, tolerance)
    }

    fn equal_approximately_or_less(self, target: f32, tolerance: f32) -> bool {
        math::equal_approximately_or_less(self, target, tolerance)
    }

    // Named apart from the inherent `f32::clamp`, which panics on inverted bounds
    fn clamp_between(self, min: f32, max: f32) -> f32 {
        math::clamp(self, min, max)
    }

    fn map(self, from_lo: f32, from_hi: f32, to_lo: f32, to_hi: f32) -> f32 {
        math::map(self, from_lo, from_hi, to_lo, to_hi)
    }

    fn round_to_decimal_places(self, places: i32) -> f32 {
        math::round_to_decimal_places(self, places)
    }

    fn normalize(self, min: f32, max: f32) -> UtilResult<f32> {
        math::normalize(self, min, max)
    }

    fn normalize_extremum(self, min: f32, max: f32, tolerance: f32) -> UtilResult<f32> {
        math::normalize_extremum(self, min, max, tolerance)
    }

    fn to_hms_time(self, decimal_places: i32) -> UtilResult<String> {
        time_format::to_hms_time(self, decimal_places)
    }
}
