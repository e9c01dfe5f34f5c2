// Kit-wide defaults

use crate::core::{math, time_format, UtilResult};

/// Tunable defaults shared by the helpers
#[derive(Debug, Clone, PartialEq)]
pub struct KitConfig {
    /// Countdown length for timers built from this config (seconds)
    pub timer_duration: f32,
    /// Tolerance for approximate float comparisons
    pub tolerance: f32,
    /// Fractional digits when formatting seconds (0..=3)
    pub hms_decimal_places: i32,
    /// Reject enum indices that name no declared member
    pub strict_enums: bool,
}

/// Defaults used when nothing else is configured
pub const DEFAULT_CONFIG: KitConfig = KitConfig {
    timer_duration: crate::engine::timer::DEFAULT_DURATION,
    tolerance: 1.0e-4,
    hms_decimal_places: time_format::DEFAULT_DECIMAL_PLACES,
    strict_enums: false,
};

impl Default for KitConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl KitConfig {
    /// `equal_approximately` with the configured tolerance
    pub fn approx_eq(&self, value: f32, target: f32) -> bool {
        math::equal_approximately(value, target, self.tolerance)
    }

    /// Format seconds with the configured precision
    pub fn format_seconds(&self, total_seconds: f32) -> UtilResult<String> {
        time_format::to_hms_time(total_seconds, self.hms_decimal_places)
    }
}
