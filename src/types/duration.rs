use chrono::TimeDelta;
use std::fmt::Write;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Format a duration as `P[nD][T[nH][nM][nS]]` (RFC 2445 section 4.3.6).
///
/// Only the magnitude is written, a negative duration renders like its absolute value.
/// Fractional seconds are dropped and a zero duration renders as a bare `P`.
pub fn format_duration(duration: &TimeDelta) -> String {
    // TimeDelta is symmetric around zero, so abs cannot overflow
    let seconds = duration.abs().num_seconds();
    let days = seconds / SECONDS_PER_DAY;
    let hours = seconds % SECONDS_PER_DAY / SECONDS_PER_HOUR;
    let minutes = seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
    let seconds = seconds % SECONDS_PER_MINUTE;

    let mut out = String::from("P");
    // Writing into a String cannot fail
    if days != 0 {
        let _ = write!(out, "{days}D");
    }
    if hours != 0 || minutes != 0 || seconds != 0 {
        out.push('T');
    }
    if hours != 0 {
        let _ = write!(out, "{hours}H");
    }
    if minutes != 0 {
        let _ = write!(out, "{minutes}M");
    }
    if seconds != 0 {
        let _ = write!(out, "{seconds}S");
    }
    out
}
