//! Purpose: Calendar-date and local date-time values with fixed ISO-8601 grammars.
//! Exports: `CalendarDate`, `LocalDateTime`.
//! Role: Typed date fields for deserialized list elements; one shared format
//! configuration applied wherever these types appear.
//! Invariants: Format descriptions are built once and never mutated afterwards.
//! Invariants: Local date-times carry no zone or UTC offset; offset-suffixed
//! input is rejected at parse time.

use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::sync::OnceLock;
use time::format_description::{self, OwnedFormatItem};
use time::{Date, PrimitiveDateTime};

const DATE_GRAMMAR: &str = "[year]-[month]-[day]";
const DATE_TIME_GRAMMAR: &str = "[year]-[month]-[day]T[hour]:[minute]:[second]";
const DATE_TIME_PARSE_GRAMMAR: &str =
    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]";

fn date_format() -> &'static OwnedFormatItem {
    static FORMAT: OnceLock<OwnedFormatItem> = OnceLock::new();
    FORMAT.get_or_init(|| {
        format_description::parse_owned::<2>(DATE_GRAMMAR)
            .expect("calendar date grammar is a valid format description")
    })
}

fn date_time_format() -> &'static OwnedFormatItem {
    static FORMAT: OnceLock<OwnedFormatItem> = OnceLock::new();
    FORMAT.get_or_init(|| {
        format_description::parse_owned::<2>(DATE_TIME_GRAMMAR)
            .expect("date-time grammar is a valid format description")
    })
}

fn date_time_parse_format() -> &'static OwnedFormatItem {
    static FORMAT: OnceLock<OwnedFormatItem> = OnceLock::new();
    FORMAT.get_or_init(|| {
        format_description::parse_owned::<2>(DATE_TIME_PARSE_GRAMMAR)
            .expect("date-time parse grammar is a valid format description")
    })
}

/// A date with year, month, and day components and no time-of-day or zone
/// information. Textual form is `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CalendarDate(Date);

impl CalendarDate {
    pub fn from_date(date: Date) -> Self {
        Self(date)
    }

    pub fn date(&self) -> Date {
        self.0
    }

    pub fn parse(text: &str) -> Result<Self, time::error::Parse> {
        Date::parse(text, date_format()).map(Self)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.0.format(date_format()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        CalendarDate::parse(&text)
            .map_err(|err| D::Error::custom(format!("invalid calendar date {text:?}: {err}")))
    }
}

/// A wall-clock date-time with no zone or UTC offset. Textual form is
/// `YYYY-MM-DDTHH:MM:SS` with an optional fractional-seconds suffix.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LocalDateTime(PrimitiveDateTime);

impl LocalDateTime {
    pub fn from_date_time(date_time: PrimitiveDateTime) -> Self {
        Self(date_time)
    }

    pub fn date_time(&self) -> PrimitiveDateTime {
        self.0
    }

    pub fn parse(text: &str) -> Result<Self, time::error::Parse> {
        PrimitiveDateTime::parse(text, date_time_parse_format()).map(Self)
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.0.format(date_time_format()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)?;
        // Fraction is emitted in 3/6/9-digit groups and only when non-zero.
        match self.0.nanosecond() {
            0 => Ok(()),
            nanos if nanos % 1_000_000 == 0 => write!(f, ".{:03}", nanos / 1_000_000),
            nanos if nanos % 1_000 == 0 => write!(f, ".{:06}", nanos / 1_000),
            nanos => write!(f, ".{nanos:09}"),
        }
    }
}

impl Serialize for LocalDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocalDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        LocalDateTime::parse(&text)
            .map_err(|err| D::Error::custom(format!("invalid local date-time {text:?}: {err}")))
    }
}
