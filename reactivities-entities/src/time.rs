use std::{fmt, str::FromStr};

use thiserror::Error;
use time::{format_description::well_known::Rfc3339, Duration, OffsetDateTime};

/// A point in time (UTC) with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        // Truncate to the stored precision
        Self::from(OffsetDateTime::now_utc()).truncate_to_millis()
    }

    pub fn from_millis(millis: i64) -> Self {
        Self(OffsetDateTime::UNIX_EPOCH.saturating_add(Duration::milliseconds(millis)))
    }

    pub fn as_millis(self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }

    pub fn format_rfc3339(self) -> String {
        self.to_string()
    }

    fn truncate_to_millis(self) -> Self {
        Self::from_millis(self.as_millis())
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.to_offset(time::UtcOffset::UTC))
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatted = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[derive(Debug, Error)]
#[error("Invalid date/time, expected RFC 3339")]
pub struct TimestampParseError;

impl FromStr for Timestamp {
    type Err = TimestampParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OffsetDateTime::parse(s, &Rfc3339)
            .map(Self::from)
            .map(Self::truncate_to_millis)
            .map_err(|_| TimestampParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_millis() {
        let t1 = Timestamp::now();
        let t2 = Timestamp::from_millis(t1.as_millis());
        assert_eq!(t1, t2);
    }

    #[test]
    fn parse_rfc3339_with_offset() {
        let ts = "2020-02-01T20:30:00+01:00".parse::<Timestamp>().unwrap();
        assert_eq!("2020-02-01T19:30:00Z", ts.format_rfc3339());
        assert_eq!(1_580_585_400_000, ts.as_millis());
    }

    #[test]
    fn reject_other_formats() {
        assert!("01.02.2020".parse::<Timestamp>().is_err());
        assert!("".parse::<Timestamp>().is_err());
    }
}
