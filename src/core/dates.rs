//! Date parameters sent to the API as ISO calendar dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Serialize, Serializer};

/// A date accepted by date-range parameters such as `DateFrom` / `DateTo`.
///
/// Date-times are truncated to their calendar date (in their own time zone)
/// when converted; strings are assumed to be pre-formatted and are sent
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParam {
    /// A calendar date, sent as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// A caller-formatted value sent verbatim.
    Text(String),
}

impl DateParam {
    /// The value as it appears on the wire.
    pub fn to_wire(&self) -> String {
        match self {
            DateParam::Date(d) => d.format("%Y-%m-%d").to_string(),
            DateParam::Text(s) => s.clone(),
        }
    }
}

impl From<NaiveDate> for DateParam {
    fn from(d: NaiveDate) -> Self {
        DateParam::Date(d)
    }
}

impl From<NaiveDateTime> for DateParam {
    fn from(dt: NaiveDateTime) -> Self {
        DateParam::Date(dt.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateParam {
    fn from(dt: DateTime<Tz>) -> Self {
        DateParam::Date(dt.date_naive())
    }
}

impl From<String> for DateParam {
    fn from(s: String) -> Self {
        DateParam::Text(s)
    }
}

impl From<&str> for DateParam {
    fn from(s: &str) -> Self {
        DateParam::Text(s.to_string())
    }
}

impl Serialize for DateParam {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}
