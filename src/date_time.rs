//! Alpaca timestamps.
//!
//! Alpaca devices exchange UTC timestamps as ISO 8601 strings with a variable number of
//! fractional-second digits (most servers send 7, i.e. 100ns ticks, but 1 to 7 digits are in use)
//! and an optional trailing `Z`. [`DateTime`] captures such a string field by field without losing
//! any of the transmitted digits, and converts to [`time::OffsetDateTime`] / [`SystemTime`] when
//! you need to do arithmetic on it.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::SystemTime;
use thiserror::Error;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

#[allow(clippy::unwrap_used)] // literal pattern
static ISO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?\d+)-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})\.(\d{1,7})Z?$").unwrap()
});

/// Maximum number of fractional digits accepted on input.
const MAX_FRACTION_DIGITS: u8 = 7;

/// Errors produced while parsing or converting a [`DateTime`].
#[derive(Debug, Error)]
pub enum DateTimeError {
    /// The string is not of the form `YYYY-MM-DDTHH:MM:SS.F[FFFFFF][Z]`.
    #[error("Invalid Alpaca timestamp {input:?}, expected YYYY-MM-DDTHH:MM:SS.F[FFFFFF][Z]")]
    Format {
        /// The rejected input.
        input: String,
        /// Numeric overflow of a field that matched the pattern.
        #[source]
        source: Option<ParseIntError>,
    },

    /// One of the fields is out of range for a calendar date or a time of day.
    #[error("Timestamp out of range: {0}")]
    Range(#[from] time::error::ComponentRange),
}

/// Fractional seconds exactly as transmitted: the digits as an integer plus how many there were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Fraction {
    value: u32,
    digits: u8,
}

impl Fraction {
    /// Interpret the digits as a decimal fraction of a second, in nanoseconds.
    fn as_nanos(self) -> u32 {
        // `digits` is 1..=7 so the multiplier is at most 10^8 and the product fits in u32.
        self.value * 10_u32.pow(9 - u32::from(self.digits))
    }
}

/// A timestamp decomposed into its ISO 8601 fields.
///
/// ```
/// use alpaca_client::DateTime;
///
/// let date_time: DateTime = "2016-03-04T17:45:31.1234567Z".parse()?;
/// assert_eq!(date_time.year(), 2016);
/// assert_eq!(date_time.microsecond(), 1234567);
/// assert_eq!(date_time.to_string(), "2016-03-04T17:45:31.1234567Z");
/// # Ok::<_, alpaca_client::DateTimeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    fraction: Fraction,
}

impl DateTime {
    /// Parse a `YYYY-MM-DDTHH:MM:SS.F[FFFFFF][Z]` string.
    ///
    /// The year may have any number of digits and a leading `-`. Field values are not
    /// range-checked here, only on conversion to a calendar type.
    pub fn parse(input: &str) -> Result<Self, DateTimeError> {
        fn number<T: FromStr<Err = ParseIntError>>(
            captures: &regex::Captures<'_>,
            index: usize,
            input: &str,
        ) -> Result<T, DateTimeError> {
            captures
                .get(index)
                .map_or("", |m| m.as_str())
                .parse()
                .map_err(|err| DateTimeError::Format {
                    input: input.to_owned(),
                    source: Some(err),
                })
        }

        let captures = ISO_PATTERN
            .captures(input)
            .ok_or_else(|| DateTimeError::Format {
                input: input.to_owned(),
                source: None,
            })?;

        let fraction_str = captures.get(7).map_or("", |m| m.as_str());

        Ok(Self {
            year: number(&captures, 1, input)?,
            month: number(&captures, 2, input)?,
            day: number(&captures, 3, input)?,
            hour: number(&captures, 4, input)?,
            minute: number(&captures, 5, input)?,
            second: number(&captures, 6, input)?,
            fraction: Fraction {
                value: number(&captures, 7, input)?,
                // The pattern allows 1 to 7 digits.
                digits: u8::try_from(fraction_str.len()).unwrap_or(MAX_FRACTION_DIGITS),
            },
        })
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS.FFFFFFFZ`.
    ///
    /// The fractional part keeps the number of digits it was parsed with, so any string accepted by
    /// [`DateTime::parse`] that ends in `Z` is reproduced byte for byte.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Year, possibly with more or fewer than four digits.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, `1` to `12` for well-formed input.
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month.
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Hour of the day.
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of the hour.
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Second of the minute.
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Fractional-second digits as transmitted, read as an integer.
    ///
    /// `.1234567` gives `1234567` and `.452` gives `452`. Use [`Self::subsec_micros`] for a value
    /// normalized to microseconds.
    pub const fn microsecond(&self) -> u32 {
        self.fraction.value
    }

    /// Number of fractional-second digits, `1` to `7`.
    pub const fn fraction_digits(&self) -> u8 {
        self.fraction.digits
    }

    /// Fractional seconds normalized to microseconds, truncating any finer digit.
    pub fn subsec_micros(&self) -> u32 {
        self.fraction.as_nanos() / 1_000
    }

    /// Convert to a UTC [`OffsetDateTime`] with microsecond precision.
    ///
    /// Digits beyond the sixth are dropped, not rounded.
    pub fn to_offset_date_time(&self) -> Result<OffsetDateTime, DateTimeError> {
        let date = Date::from_calendar_date(
            self.year,
            Month::try_from(self.month)?,
            self.day,
        )?;
        let time = Time::from_hms_micro(self.hour, self.minute, self.second, self.subsec_micros())?;
        Ok(PrimitiveDateTime::new(date, time).assume_utc())
    }

    /// Convert to a [`SystemTime`] with microsecond precision.
    pub fn to_system_time(&self) -> Result<SystemTime, DateTimeError> {
        self.to_offset_date_time().map(SystemTime::from)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:0width$}Z",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.fraction.value,
            width = usize::from(self.fraction.digits),
        )
    }
}

impl FromStr for DateTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<OffsetDateTime> for DateTime {
    /// Capture the instant in UTC with 7 fractional digits (100ns ticks).
    fn from(value: OffsetDateTime) -> Self {
        let value = value.to_offset(time::UtcOffset::UTC);

        Self {
            year: value.year(),
            month: value.month().into(),
            day: value.day(),
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
            fraction: Fraction {
                value: value.nanosecond() / 100,
                digits: MAX_FRACTION_DIGITS,
            },
        }
    }
}

impl From<SystemTime> for DateTime {
    fn from(value: SystemTime) -> Self {
        OffsetDateTime::from(value).into()
    }
}

impl TryFrom<DateTime> for OffsetDateTime {
    type Error = DateTimeError;

    fn try_from(value: DateTime) -> Result<Self, Self::Error> {
        value.to_offset_date_time()
    }
}

impl TryFrom<DateTime> for SystemTime {
    type Error = DateTimeError;

    fn try_from(value: DateTime) -> Result<Self, Self::Error> {
        value.to_system_time()
    }
}

impl Serialize for DateTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = DateTime;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an ISO 8601 date string")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
                DateTime::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

/// A timestamp argument for endpoints such as `utcdate`.
///
/// Strings are sent verbatim, every other source is rendered through [`DateTime`].
/// Only the conversions below exist, so passing anything else is a compile-time error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtcDate(String);

impl UtcDate {
    /// The wire representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UtcDate {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for UtcDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<DateTime> for UtcDate {
    fn from(value: DateTime) -> Self {
        Self(value.to_canonical_string())
    }
}

impl From<OffsetDateTime> for UtcDate {
    fn from(value: OffsetDateTime) -> Self {
        DateTime::from(value).into()
    }
}

impl From<SystemTime> for UtcDate {
    fn from(value: SystemTime) -> Self {
        DateTime::from(value).into()
    }
}

impl fmt::Display for UtcDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const SAMPLE: &str = "2016-03-04T17:45:31.1234567Z";

    #[test]
    fn parses_fields() -> eyre::Result<()> {
        let date_time = DateTime::parse(SAMPLE)?;

        assert_eq!(date_time.year(), 2016);
        assert_eq!(date_time.month(), 3);
        assert_eq!(date_time.day(), 4);
        assert_eq!(date_time.hour(), 17);
        assert_eq!(date_time.minute(), 45);
        assert_eq!(date_time.second(), 31);
        assert_eq!(date_time.microsecond(), 1_234_567);
        assert_eq!(date_time.fraction_digits(), 7);

        Ok(())
    }

    #[test]
    fn canonical_string_round_trips() -> eyre::Result<()> {
        assert_eq!(DateTime::parse(SAMPLE)?.to_canonical_string(), SAMPLE);
        Ok(())
    }

    #[test]
    fn short_fraction_without_zone() -> eyre::Result<()> {
        let date_time = DateTime::parse("2019-06-12T06:12:52.452")?;

        assert_eq!(date_time.microsecond(), 452);
        assert_eq!(date_time.subsec_micros(), 452_000);
        assert_eq!(date_time.to_string(), "2019-06-12T06:12:52.452Z");

        Ok(())
    }

    #[test]
    fn leading_zeros_in_fraction_survive() -> eyre::Result<()> {
        let input = "2020-01-02T03:04:05.0012300Z";
        let date_time: DateTime = input.parse()?;

        assert_eq!(date_time.microsecond(), 12_300);
        assert_eq!(date_time.to_string(), input);
        assert_eq!(date_time.subsec_micros(), 1_230);

        Ok(())
    }

    #[test]
    fn lenient_year() -> eyre::Result<()> {
        let date_time = DateTime::parse("12345-01-01T00:00:00.5")?;
        assert_eq!(date_time.year(), 12345);
        assert_eq!(date_time.to_string(), "12345-01-01T00:00:00.5Z");

        let date_time = DateTime::parse("7-01-01T00:00:00.5")?;
        assert_eq!(date_time.year(), 7);

        Ok(())
    }

    #[test]
    fn negative_years_round_trip() -> eyre::Result<()> {
        let before_epoch = Date::from_calendar_date(-5, Month::January, 1)?
            .midnight()
            .assume_utc();
        let rendered = DateTime::from(before_epoch).to_string();
        assert_eq!(rendered, "-5-01-01T00:00:00.0000000Z");

        let parsed = DateTime::parse(&rendered)?;
        assert_eq!(parsed.year(), -5);
        assert_eq!(parsed.to_offset_date_time()?, before_epoch);

        Ok(())
    }

    #[test]
    fn year_overflow_keeps_cause() {
        let err = DateTime::parse("99999999999-03-04T17:45:31.123Z").expect_err("must fail");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn rejects_malformed() {
        for input in [
            "",
            "2016-03-04T17:45:31",
            "2016-03-04T17:45:31Z",
            "2016-03-04 17:45:31.123Z",
            "2016-3-04T17:45:31.123Z",
            "2016-03-04T17:45:31.12345678Z",
            "2016-03-04T17:45:31.123ZZ",
            "--2016-03-04T17:45:31.123Z",
            "99999999999-03-04T17:45:31.123Z",
        ] {
            assert!(
                matches!(DateTime::parse(input), Err(DateTimeError::Format { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn truncates_to_microseconds() -> eyre::Result<()> {
        let converted = DateTime::parse(SAMPLE)?.to_offset_date_time()?;

        assert_eq!(converted, datetime!(2016-03-04 17:45:31.123456 UTC));
        assert_eq!(converted.microsecond(), 123_456);

        Ok(())
    }

    #[test]
    fn out_of_range_fields_fail_on_conversion() -> eyre::Result<()> {
        let date_time = DateTime::parse("2016-13-04T17:45:31.1Z")?;

        assert!(matches!(
            date_time.to_offset_date_time(),
            Err(DateTimeError::Range(_))
        ));

        Ok(())
    }

    #[test]
    fn from_offset_date_time() {
        let date_time = DateTime::from(datetime!(2021-11-05 22:01:02.987654321 +02:00));

        assert_eq!(date_time.to_string(), "2021-11-05T20:01:02.9876543Z");
    }

    #[test]
    fn system_time_round_trip() -> eyre::Result<()> {
        let original = DateTime::parse(SAMPLE)?;
        let system_time = original.to_system_time()?;

        assert_eq!(
            DateTime::from(system_time).to_string(),
            "2016-03-04T17:45:31.1234560Z"
        );

        Ok(())
    }

    #[test]
    fn serde_as_string() -> eyre::Result<()> {
        let date_time: DateTime = serde_json::from_str(&format!("\"{SAMPLE}\""))?;
        assert_eq!(serde_json::to_string(&date_time)?, format!("\"{SAMPLE}\""));

        assert!(serde_json::from_str::<DateTime>("\"yesterday\"").is_err());

        Ok(())
    }

    #[test]
    fn utc_date_sources() -> eyre::Result<()> {
        assert_eq!(UtcDate::from("anything goes").as_str(), "anything goes");
        assert_eq!(UtcDate::from(DateTime::parse(SAMPLE)?).as_str(), SAMPLE);
        assert_eq!(
            UtcDate::from(datetime!(2019-06-12 06:12:52.452 UTC)).as_str(),
            "2019-06-12T06:12:52.4520000Z"
        );

        Ok(())
    }
}
