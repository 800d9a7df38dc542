//! Canonical calendar-day keys and local-time date normalization.
//!
//! Every comparison between a logged instant and a schedule day goes through
//! a single [`DateNormalizer`], so the calendar day is always read with the
//! same time zone's local fields.

use std::{fmt, str::FromStr};

use jiff::{
    civil::{Date, DateTime},
    tz::TimeZone,
    Span, Timestamp, Zoned,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A calendar day in the user's local time zone, rendered as `YYYY-MM-DD`.
///
/// Day keys order chronologically, which is also their lexicographic order
/// when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(Date);

impl DayKey {
    /// Wraps a civil date.
    pub fn new(date: Date) -> Self {
        Self(date)
    }

    /// Builds a day key from year/month/day fields, or `None` when the fields
    /// do not name a real calendar day.
    pub fn from_ymd(year: i16, month: i8, day: i8) -> Option<Self> {
        Date::new(year, month, day).ok().map(Self)
    }

    /// Parses a strict `YYYY-MM-DD` string.
    pub fn parse_canonical(input: &str) -> Option<Self> {
        let bytes = input.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        let field = |start: usize, end: usize| -> Option<i16> {
            let part = input.get(start..end)?;
            if !part.bytes().all(|c| c.is_ascii_digit()) {
                return None;
            }
            part.parse().ok()
        };

        let year = field(0, 4)?;
        let month = i8::try_from(field(5, 7)?).ok()?;
        let day = i8::try_from(field(8, 10)?).ok()?;
        Self::from_ymd(year, month, day)
    }

    /// The underlying civil date.
    pub fn date(&self) -> Date {
        self.0
    }

    /// The following calendar day.
    pub fn next(&self) -> Option<Self> {
        self.0.tomorrow().ok().map(Self)
    }

    /// Moves by a signed number of calendar days.
    pub fn offset(&self, days: i64) -> Option<Self> {
        let span = Span::new().try_days(days).ok()?;
        self.0.checked_add(span).ok().map(Self)
    }

    /// Iterates over consecutive calendar days starting at (and including)
    /// this one. The iterator ends at the last representable date.
    pub fn days(self) -> impl Iterator<Item = DayKey> {
        self.0.series(Span::new().days(1)).map(Self)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DayKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_canonical(s).ok_or_else(|| format!("Invalid calendar day: {s}"))
    }
}

impl From<Date> for DayKey {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Any value that can be normalized into a [`DayKey`].
#[derive(Debug, Clone, Copy)]
pub enum DateLike<'a> {
    /// Free-form text: a canonical day, an RFC 3339 / RFC 9557 timestamp, or
    /// a civil datetime without offset.
    Text(&'a str),
    /// An absolute instant.
    Instant(Timestamp),
    /// A zoned datetime; only its instant is used.
    Zoned(&'a Zoned),
    /// A civil date, already a calendar day.
    Day(Date),
}

impl<'a> From<&'a str> for DateLike<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for DateLike<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<Timestamp> for DateLike<'_> {
    fn from(value: Timestamp) -> Self {
        Self::Instant(value)
    }
}

impl<'a> From<&'a Zoned> for DateLike<'a> {
    fn from(value: &'a Zoned) -> Self {
        Self::Zoned(value)
    }
}

impl From<Date> for DateLike<'_> {
    fn from(value: Date) -> Self {
        Self::Day(value)
    }
}

impl From<DayKey> for DateLike<'_> {
    fn from(value: DayKey) -> Self {
        Self::Day(value.date())
    }
}

/// Converts dates and instants into canonical day keys for one time zone.
///
/// The clock can be pinned with [`DateNormalizer::at`], which makes
/// [`DateNormalizer::today`] deterministic.
#[derive(Debug, Clone)]
pub struct DateNormalizer {
    time_zone: TimeZone,
    now: Option<Timestamp>,
}

impl DateNormalizer {
    /// A normalizer for the given time zone reading the system clock.
    pub fn new(time_zone: TimeZone) -> Self {
        Self {
            time_zone,
            now: None,
        }
    }

    /// A normalizer for the process's system time zone.
    pub fn system() -> Self {
        Self::new(TimeZone::system())
    }

    /// Pins the clock to a fixed instant.
    pub fn at(mut self, now: Timestamp) -> Self {
        self.now = Some(now);
        self
    }

    /// The time zone whose local fields define calendar days.
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// The current instant (pinned or from the system clock).
    pub fn now(&self) -> Timestamp {
        self.now.unwrap_or_else(Timestamp::now)
    }

    /// Today's day key.
    pub fn today(&self) -> DayKey {
        self.day_of(self.now())
    }

    /// The local calendar day containing `instant`.
    pub fn day_of(&self, instant: Timestamp) -> DayKey {
        DayKey(instant.to_zoned(self.time_zone.clone()).date())
    }

    /// Normalizes any date-like input into a day key.
    ///
    /// Returns `None` for empty or unparseable text; callers treat that as
    /// "matches no day".
    pub fn normalize<'a>(&self, input: impl Into<DateLike<'a>>) -> Option<DayKey> {
        match input.into() {
            DateLike::Text(text) => self.normalize_text(text),
            DateLike::Instant(instant) => Some(self.day_of(instant)),
            DateLike::Zoned(zoned) => Some(self.day_of(zoned.timestamp())),
            DateLike::Day(date) => Some(DayKey(date)),
        }
    }

    fn normalize_text(&self, text: &str) -> Option<DayKey> {
        if text.is_empty() {
            return None;
        }
        if let Some(day) = DayKey::parse_canonical(text) {
            return Some(day);
        }
        if let Ok(instant) = text.parse::<Timestamp>() {
            return Some(self.day_of(instant));
        }
        if let Ok(zoned) = text.parse::<Zoned>() {
            return Some(self.day_of(zoned.timestamp()));
        }
        // No offset at all: the wall clock is already local.
        text.parse::<DateTime>().ok().map(|dt| DayKey(dt.date()))
    }

    /// The instant of local noon on `day`, used to anchor back-logged
    /// sessions so they normalize back to the same day.
    pub fn local_noon(&self, day: DayKey) -> Option<Timestamp> {
        day.date()
            .at(12, 0, 0, 0)
            .to_zoned(self.time_zone.clone())
            .ok()
            .map(|zoned| zoned.timestamp())
    }
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
mod tests {
    use jiff::tz;

    use super::*;

    fn sao_paulo_offset() -> DateNormalizer {
        DateNormalizer::new(TimeZone::fixed(tz::offset(-3)))
    }

    #[test]
    fn test_canonical_day_is_returned_unchanged() {
        let normalizer = sao_paulo_offset();
        let day = normalizer.normalize("2024-03-09").unwrap();
        assert_eq!(day.to_string(), "2024-03-09");
        assert_eq!(normalizer.normalize(day), Some(day));
    }

    #[test]
    fn test_timestamp_uses_local_fields() {
        let normalizer = sao_paulo_offset();
        // 01:00 UTC is still the previous evening at UTC-3.
        let day = normalizer.normalize("2024-03-10T01:00:00Z").unwrap();
        assert_eq!(day.to_string(), "2024-03-09");

        let with_offset = normalizer.normalize("2024-03-10T01:00:00+02:00").unwrap();
        assert_eq!(with_offset.to_string(), "2024-03-09");
    }

    #[test]
    fn test_civil_datetime_is_taken_as_local() {
        let normalizer = sao_paulo_offset();
        let day = normalizer.normalize("2024-03-10T23:59:00").unwrap();
        assert_eq!(day.to_string(), "2024-03-10");
    }

    #[test]
    fn test_invalid_input_yields_sentinel() {
        let normalizer = sao_paulo_offset();
        assert_eq!(normalizer.normalize(""), None);
        assert_eq!(normalizer.normalize("yesterday"), None);
        assert_eq!(normalizer.normalize("2024-02-30"), None);
        assert_eq!(normalizer.normalize("2024-3-1"), None);
    }

    #[test]
    fn test_today_follows_pinned_clock() {
        let now: Timestamp = "2024-06-01T02:00:00Z".parse().unwrap();
        let normalizer = sao_paulo_offset().at(now);
        assert_eq!(normalizer.today().to_string(), "2024-05-31");
    }

    #[test]
    fn test_local_noon_round_trips_to_same_day() {
        let normalizer = DateNormalizer::new(TimeZone::fixed(tz::offset(11)));
        let day = DayKey::from_ymd(2024, 12, 31).unwrap();
        let noon = normalizer.local_noon(day).unwrap();
        assert_eq!(normalizer.day_of(noon), day);
    }

    #[test]
    fn test_day_arithmetic_crosses_month_and_year() {
        let day = DayKey::from_ymd(2023, 12, 31).unwrap();
        assert_eq!(day.next().unwrap().to_string(), "2024-01-01");
        assert_eq!(day.offset(60).unwrap().to_string(), "2024-02-29");
        assert_eq!(day.offset(-365).unwrap().to_string(), "2022-12-31");
        assert_eq!(day.offset(-1).unwrap().to_string(), "2023-12-30");
    }

    #[test]
    fn test_days_iterator_is_consecutive() {
        let start = DayKey::from_ymd(2024, 2, 27).unwrap();
        let days: Vec<String> = start.days().take(4).map(|d| d.to_string()).collect();
        assert_eq!(days, ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let day = DayKey::from_ymd(2024, 7, 4).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "\"2024-07-04\"");
        let back: DayKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, day);
        assert!(serde_json::from_str::<DayKey>("\"07/04/2024\"").is_err());
    }
}
