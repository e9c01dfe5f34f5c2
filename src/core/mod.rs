// Core utilities: float math, time formatting and enum coercion
//
// Everything in here is pure and engine-agnostic.

pub mod enums;
pub mod float_ext;
pub mod math;
pub mod time_format;

pub use enums::{try_convert, try_named, EnumCoercion, EnumValue, IndexedEnum};
pub use float_ext::FloatExt;
pub use time_format::{to_hms_time, to_hms_time_default};

/// Argument validation errors raised by the float helpers
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum UtilError {
    #[error("Invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange { min: f32, max: f32 },

    #[error("Invalid decimal places: {0} (must be between 0 and 3)")]
    InvalidDecimalPlaces(i32),
}

pub type UtilResult<T> = Result<T, UtilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_util_error_display() {
        let err = UtilError::InvalidRange { min: 2.0, max: 1.0 };
        assert_eq!(
            err.to_string(),
            "Invalid range: max (1) must be greater than min (2)"
        );

        let err = UtilError::InvalidDecimalPlaces(4);
        assert_eq!(
            err.to_string(),
            "Invalid decimal places: 4 (must be between 0 and 3)"
        );
    }
}
