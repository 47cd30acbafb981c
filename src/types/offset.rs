use super::ValueError;

/// Format seconds east of UTC as `[-]HHMM` (RFC 2445 section 4.3.14).
///
/// Positive offsets carry no sign. Offsets with a seconds remainder cannot be
/// written in this form; a warning is emitted and the seconds are dropped.
pub fn format_utc_offset(offset: i32) -> Result<String, ValueError> {
    let magnitude = offset.unsigned_abs();
    let hours = magnitude / 3600;
    let minutes = magnitude % 3600 / 60;
    let seconds = magnitude % 60;

    if hours > 99 {
        return Err(ValueError::UtcOffsetOutOfRange(offset));
    }
    if seconds != 0 {
        tracing::warn!(
            offset,
            seconds,
            "seconds not zero in UTC offset, truncating to whole minutes"
        );
    }

    let sign = if offset < 0 { "-" } else { "" };
    Ok(format!("{sign}{hours:02}{minutes:02}"))
}
