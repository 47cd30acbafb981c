use super::{
    ValueError, escape_text, format_date, format_datetime, format_duration, format_utc_offset,
};
use crate::{ENUM_LIST_DELIMITER, LIST_DELIMITER, Name, PARAM_NAME_DELIMITER};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeDelta};
use itertools::{Itertools, process_results};

/// Value of a property or a parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Free text, escaped when rendered
    Text(String),
    Date(NaiveDate),
    /// Floating date-time, the zone is given with a `TZID` parameter
    DateTime(NaiveDateTime),
    Integer(i64),
    /// Comma separated values
    List(Vec<Value>),
    /// Semicolon separated `NAME=value` pairs, e.g. the parts of a recurrence rule
    EnumList(Vec<(Name, Value)>),
    /// Seconds east of UTC
    UtcOffset(i32),
    /// Only the magnitude of the duration is rendered
    Duration(TimeDelta),
}

impl Value {
    /// Start an empty enumerated list, see [`Value::add_value`]
    pub fn enum_list() -> Self {
        Self::EnumList(Vec::new())
    }

    /// Append a `NAME=value` pair to an enumerated list.
    ///
    /// Other values stay unchanged.
    pub fn add_value(&mut self, name: impl Into<Name>, value: impl Into<Value>) {
        match self {
            Self::EnumList(pairs) => pairs.push((name.into(), value.into())),
            other => {
                tracing::debug!(?other, "not an enumerated list, ignoring added value");
            }
        }
    }

    /// Builder variant of [`Value::add_value`]
    #[must_use]
    pub fn with_value(mut self, name: impl Into<Name>, value: impl Into<Value>) -> Self {
        self.add_value(name, value);
        self
    }

    /// Render the value with the encoding rule of its type
    pub fn encode(&self) -> Result<String, ValueError> {
        Ok(match self {
            Self::Text(text) => escape_text(text),
            Self::Date(date) => format_date(date)?,
            Self::DateTime(datetime) => format_datetime(datetime)?,
            Self::Integer(int) => int.to_string(),
            Self::List(values) => process_results(values.iter().map(Value::encode), |mut iter| {
                iter.join(LIST_DELIMITER)
            })?,
            Self::EnumList(pairs) => process_results(
                pairs.iter().map(|(name, value)| {
                    value
                        .encode()
                        .map(|value| format!("{name}{PARAM_NAME_DELIMITER}{value}"))
                }),
                |mut iter| iter.join(ENUM_LIST_DELIMITER),
            )?,
            Self::UtcOffset(offset) => format_utc_offset(*offset)?,
            Self::Duration(duration) => format_duration(duration),
        })
    }
}

macro_rules! value_from {
    ($variant:ident, $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )+
    };
}

value_from!(Text, String, &str);
value_from!(Date, NaiveDate);
value_from!(DateTime, NaiveDateTime);
value_from!(Integer, i64, i32, u32);
value_from!(List, Vec<Value>);
value_from!(Duration, TimeDelta);

impl From<FixedOffset> for Value {
    fn from(offset: FixedOffset) -> Self {
        Self::UtcOffset(offset.local_minus_utc())
    }
}

#[cfg(feature = "chrono-tz")]
impl From<chrono_tz::TzOffset> for Value {
    fn from(offset: chrono_tz::TzOffset) -> Self {
        use chrono::Offset;
        offset.fix().into()
    }
}
