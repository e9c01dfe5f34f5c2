// Seconds to clock-style "HH:MM:SS[.fff]" strings

use super::{UtilError, UtilResult};

/// Largest supported number of fractional digits
pub const MAX_DECIMAL_PLACES: i32 = 3;

/// Fractional digits used by [`to_hms_time_default`]
pub const DEFAULT_DECIMAL_PLACES: i32 = 2;

/// Format a number of seconds as `HH:MM:SS`, with a `.f`..`.fff` suffix
/// when `decimal_places > 0`.
///
/// The fraction is rounded (ties to even) to `decimal_places` digits and any
/// carry rolls into the whole seconds, so `59.999` at two places becomes
/// `00:01:00.00`. Hours keep counting past 23. Negative values get a leading
/// `-`; NaN and infinities format as zero.
pub fn to_hms_time(total_seconds: f32, decimal_places: i32) -> UtilResult<String> {
    if !(0..=MAX_DECIMAL_PLACES).contains(&decimal_places) {
        return Err(UtilError::InvalidDecimalPlaces(decimal_places));
    }

    let total_seconds = if total_seconds.is_finite() {
        total_seconds
    } else {
        0.0
    };
    if total_seconds < 0.0 {
        return Ok(format!("-{}", to_hms_time(-total_seconds, decimal_places)?));
    }

    let whole = total_seconds.floor();
    let fraction = total_seconds - whole;
    let mut whole_seconds = whole as i64;

    let multiplier = 10_i64.pow(decimal_places as u32);
    let mut decimals = (fraction * multiplier as f32).round_ties_even() as i64;

    // Rounding the fraction can produce a full second
    if decimals >= multiplier {
        decimals -= multiplier;
        whole_seconds = whole_seconds.saturating_add(1);
    }

    let hours = whole_seconds / 3600;
    let remaining = whole_seconds % 3600;
    let minutes = remaining / 60;
    let seconds = remaining % 60;

    if decimal_places == 0 {
        return Ok(format!("{hours:02}:{minutes:02}:{seconds:02}"));
    }
    Ok(format!(
        "{hours:02}:{minutes:02}:{seconds:02}.{decimals:0width$}",
        width = decimal_places as usize
    ))
}

/// [`to_hms_time`] with two decimal places
pub fn to_hms_time_default(total_seconds: f32) -> String {
    to_hms_time(total_seconds, DEFAULT_DECIMAL_PLACES)
        .expect("default decimal places in range")
}
