//! Buffer resolution from configuration.

/// Buffer applied when the configured value is missing or unusable.
pub const DEFAULT_BUFFER_MINUTES: i64 = 10;

/// Resolve the inter-appointment buffer from a raw configuration string.
///
/// Accepts a non-negative whole number of minutes, ignoring surrounding
/// whitespace. Anything else (absent, empty, fractional, negative or
/// non-numeric) falls back to [`DEFAULT_BUFFER_MINUTES`]. Never fails.
pub fn resolve_buffer_minutes(raw: Option<&str>) -> i64 {
    raw.map(str::trim)
        .and_then(|value| value.parse::<i64>().ok())
        .filter(|minutes| *minutes >= 0)
        .unwrap_or(DEFAULT_BUFFER_MINUTES)
}
