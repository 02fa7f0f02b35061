//! Disc clock conversion and timestamp formatting.

/// Disc clock ticks per second (1 tick = 1/45000 s).
pub const DISC_CLOCK_HZ: u64 = 45_000;

/// Convert disc clock ticks to milliseconds, truncating.
///
/// `45000 -> 1000`, `44999 -> 999`. The intermediate product is widened so
/// large tick values cannot overflow.
pub fn ticks_to_ms(ticks: u64) -> u64 {
    (ticks as u128 * 1000 / DISC_CLOCK_HZ as u128) as u64
}

/// Format milliseconds as `HH:MM:SS.mmm`.
///
/// Hours are not wrapped, so values past 99 hours widen the first field.
pub fn format_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let millis = ms % 1000;
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

/// Format milliseconds as a short `1h 02m 03s` style duration.
pub fn format_duration(ms: u64) -> String {
    let secs = ms / 1000;
    let (hours, mins, secs) = (secs / 3600, (secs / 60) % 60, secs % 60);
    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, mins, secs)
    } else {
        format!("{}m {:02}s", mins, secs)
    }
}
