// Math utilities and helper functions

use super::{UtilError, UtilResult};

/// Clamp a value between min and max
///
/// Unlike `f32::clamp` this never panics when `min > max`; the result is
/// then whichever bound is hit first.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Check if `value` is within `tolerance` of `target` (inclusive)
pub fn equal_approximately(value: f32, target: f32, tolerance: f32) -> bool {
    (value - target).abs() <= tolerance
}

/// Check if `value` is greater than, or approximately equal to, `target`
pub fn equal_approximately_or_greater(value: f32, target: f32, tolerance: f32) -> bool {
    value > target || equal_approximately(value, target, tolerance)
}

/// Check if `value` is less than, or approximately equal to, `target`
pub fn equal_approximately_or_less(value: f32, target: f32, tolerance: f32) -> bool {
    value < target || equal_approximately(value, target, tolerance)
}

/// Remap `value` from the range `[from_lo, from_hi]` to `[to_lo, to_hi]`
///
/// Not clamped. A zero-width source range yields an infinite or NaN result.
pub fn map(value: f32, from_lo: f32, from_hi: f32, to_lo: f32, to_hi: f32) -> f32 {
    (value - from_lo) / (from_hi - from_lo) * (to_hi - to_lo) + to_lo
}

/// Round to the given number of decimal places (ties to even)
pub fn round_to_decimal_places(value: f32, places: i32) -> f32 {
    let power = 10f32.powi(places);
    (value * power).round_ties_even() / power
}

/// 0-1 position of `value` within `[min, max]`
///
/// Anything outside the range, on either side, reports `1.0`. Callers that
/// need `0.0` below the range should use [`normalize_extremum`].
pub fn normalize(value: f32, min: f32, max: f32) -> UtilResult<f32> {
    ensure_range(min, max)?;
    if value > max || value < min {
        return Ok(1.0);
    }
    Ok((value - min) / (max - min))
}

/// 0-1 position of `value` within `[min, max]`, snapping to the extremes
///
/// Values at or past `max` (within `tolerance`) give `1.0`, values at or
/// below `min` give `0.0`.
pub fn normalize_extremum(value: f32, min: f32, max: f32, tolerance: f32) -> UtilResult<f32> {
    ensure_range(min, max)?;
    if equal_approximately_or_greater(value, max, tolerance) {
        return Ok(1.0);
    }
    if equal_approximately_or_less(value, min, tolerance) {
        return Ok(0.0);
    }
    Ok((value - min) / (max - min))
}

fn ensure_range(min: f32, max: f32) -> UtilResult<()> {
    // Written so a NaN bound is rejected too
    if !(max > min) {
        return Err(UtilError::InvalidRange { min, max });
    }
    Ok(())
}
