//! Twitter's fixed timestamp format, e.g. `Wed Aug 27 13:08:45 +0000 2008`.

use chrono::{DateTime, FixedOffset, ParseError, Utc};
use serde::{Deserialize, Deserializer};

pub const TWITTER_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Parse a Twitter timestamp, keeping the offset it was written with.
pub fn parse_date_time(value: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_str(value.trim(), TWITTER_DATE_FORMAT)
}

/// Parse a Twitter timestamp and convert it to UTC.
pub fn parse_date_time_utc(value: &str) -> Result<DateTime<Utc>, ParseError> {
    parse_date_time(value).map(|dt| dt.with_timezone(&Utc))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date_time_utc(&raw).map_err(|e| serde::de::Error::custom(format!("invalid date `{raw}`: {e}")))
}

pub(crate) fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_date_time_utc(&raw)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid date `{raw}`: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn parses_utc_timestamp() {
        let dt = parse_date_time_utc("Wed Aug 27 13:08:45 +0000 2008").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2008, 8, 27, 13, 8, 45).unwrap());
    }

    #[test]
    fn keeps_offset_unless_converted() {
        let dt = parse_date_time("Mon Jan 04 10:00:00 +0200 2021").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 7200);
        assert_eq!(dt.hour(), 10);

        let utc = parse_date_time_utc("Mon Jan 04 10:00:00 +0200 2021").unwrap();
        assert_eq!(utc.hour(), 8);
        assert_eq!(utc.day(), 4);
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_date_time("2008-08-27T13:08:45Z").is_err());
        assert!(parse_date_time("").is_err());
    }
}
