use super::ValueError;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y%m%d";
pub const DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";

// chrono writes years outside of this range with a sign and more digits
fn check_year(year: i32) -> Result<(), ValueError> {
    if (0..=9999).contains(&year) {
        Ok(())
    } else {
        Err(ValueError::YearOutOfRange(year))
    }
}

/// Format a date as `YYYYMMDD`
pub fn format_date(date: &NaiveDate) -> Result<String, ValueError> {
    check_year(date.year())?;
    Ok(date.format(DATE_FORMAT).to_string())
}

/// Format a floating date-time as `YYYYMMDDTHHMMSS`.
///
/// No zone suffix is written, the zone belongs into a `TZID` parameter.
pub fn format_datetime(datetime: &NaiveDateTime) -> Result<String, ValueError> {
    check_year(datetime.year())?;
    Ok(datetime.format(DATETIME_FORMAT).to_string())
}
