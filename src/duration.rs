//! The `Duration` value object produced by the duration resolver, its units,
//! and the renderings it supports.

use crate::error::Error;
use crate::locale::Locale;
use std::fmt;
use std::str::FromStr;

const SECOND: u64 = 1_000;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const YEAR: u64 = 365 * DAY;
const DECADE: u64 = 10 * YEAR;
const CENTURY: u64 = 10 * DECADE;
const MILLENNIUM: u64 = 10 * CENTURY;

/// A unit of time a duration word can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Millennium,
    Century,
    Decade,
    Year,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Unit {
    /// Size of one unit in milliseconds (365-day years).
    pub const fn millis(self) -> u64 {
        match self {
            Unit::Millennium => MILLENNIUM,
            Unit::Century => CENTURY,
            Unit::Decade => DECADE,
            Unit::Year => YEAR,
            Unit::Week => WEEK,
            Unit::Day => DAY,
            Unit::Hour => HOUR,
            Unit::Minute => MINUTE,
            Unit::Second => SECOND,
            Unit::Millisecond => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Millennium => "millennium",
            Unit::Century => "century",
            Unit::Decade => "decade",
            Unit::Year => "year",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
        }
    }
}

/// A duration broken down by successive floor division.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Components {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
}

impl Components {
    fn from_millis(total: u64) -> Self {
        let mut left = total;
        let mut take = |size: u64| {
            let n = left / size;
            left -= n * size;
            n
        };
        let years = take(YEAR);
        let days = take(DAY);
        let hours = take(HOUR);
        let minutes = take(MINUTE);
        let seconds = take(SECOND);
        Components { years, days, hours, minutes, seconds, milliseconds: left }
    }

    fn get(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Year => self.years,
            Unit::Day => self.days,
            Unit::Hour => self.hours,
            Unit::Minute => self.minutes,
            Unit::Second => self.seconds,
            Unit::Millisecond => self.milliseconds,
            _ => 0,
        }
    }
}

/// Smallest component a verbose rendering goes down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specificity {
    Years,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl Specificity {
    const ORDER: [(Specificity, Unit); 6] = [
        (Specificity::Years, Unit::Year),
        (Specificity::Days, Unit::Day),
        (Specificity::Hours, Unit::Hour),
        (Specificity::Minutes, Unit::Minute),
        (Specificity::Seconds, Unit::Second),
        (Specificity::Milliseconds, Unit::Millisecond),
    ];

    pub fn unit(self) -> Unit {
        Self::ORDER.iter().find(|(s, _)| *s == self).map(|(_, u)| *u).unwrap_or(Unit::Millisecond)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Specificity::Years => "years",
            Specificity::Days => "days",
            Specificity::Hours => "hours",
            Specificity::Minutes => "minutes",
            Specificity::Seconds => "seconds",
            Specificity::Milliseconds => "milliseconds",
        }
    }
}

bitflags::bitflags! {
    /// Components shown by a compact rendering. The largest selected field
    /// absorbs everything above it ("hm" shows 26h for a day and two hours).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Fields: u8 {
        const HOURS        = 1 << 0;
        const MINUTES      = 1 << 1;
        const SECONDS      = 1 << 2;
        const MILLISECONDS = 1 << 3;

        const HM  = Self::HOURS.bits() | Self::MINUTES.bits();
        const HMS = Self::HM.bits() | Self::SECONDS.bits();
        const HMSMS = Self::HMS.bits() | Self::MILLISECONDS.bits();
    }
}

impl Fields {
    const LAYOUT: [(Fields, u64, &'static str); 4] = [
        (Fields::HOURS, HOUR, "h"),
        (Fields::MINUTES, MINUTE, "m"),
        (Fields::SECONDS, SECOND, "s"),
        (Fields::MILLISECONDS, 1, "ms"),
    ];
}

/// How to render a [`Duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// "1 hour, 30 minutes", stopping at the given component.
    Verbose(Specificity),
    /// `":"` — "1:30:00", "2:04:30" or "4:05" depending on magnitude.
    Clock,
    /// `":minutes"` — like [`Format::Clock`] without the seconds.
    ClockMinutes,
    /// `"hm"` / `"hms"` / `"hmsms"` — "1h 30m", "1h 30m 0s", "1h 30m 0s 250ms".
    Compact(Fields),
}

impl Default for Format {
    fn default() -> Self {
        Format::Verbose(Specificity::Milliseconds)
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format = match s.trim().to_ascii_lowercase().as_str() {
            "years" => Format::Verbose(Specificity::Years),
            "days" => Format::Verbose(Specificity::Days),
            "hours" => Format::Verbose(Specificity::Hours),
            "minutes" => Format::Verbose(Specificity::Minutes),
            "seconds" => Format::Verbose(Specificity::Seconds),
            "milliseconds" => Format::Verbose(Specificity::Milliseconds),
            ":" => Format::Clock,
            ":minutes" => Format::ClockMinutes,
            "hm" => Format::Compact(Fields::HM),
            "hms" => Format::Compact(Fields::HMS),
            "hmsms" => Format::Compact(Fields::HMSMS),
            _ => return Err(Error::InvalidFormat(s.to_string())),
        };
        Ok(format)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Verbose(s) => f.write_str(s.as_str()),
            Format::Clock => f.write_str(":"),
            Format::ClockMinutes => f.write_str(":minutes"),
            Format::Compact(fields) => {
                for (flag, _, suffix) in Fields::LAYOUT {
                    if fields.contains(flag) {
                        f.write_str(suffix)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// An immutable span of time measured in whole milliseconds.
///
/// Components are derived once at construction. Negative durations keep their
/// sign; their components describe the magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    millis: i64,
    components: Components,
}

impl Duration {
    pub fn from_millis(millis: i64) -> Self {
        Duration { millis, components: Components::from_millis(millis.unsigned_abs()) }
    }

    /// Round a resolver's floating point product to whole milliseconds.
    pub(crate) fn from_millis_f64(millis: f64) -> Self {
        Self::from_millis(millis.round() as i64)
    }

    pub fn as_millis(&self) -> i64 {
        self.millis
    }

    pub fn components(&self) -> Components {
        self.components
    }

    pub fn is_negative(&self) -> bool {
        self.millis < 0
    }

    /// Whole minutes, truncated toward zero.
    pub fn to_minutes(&self) -> i64 {
        self.millis / MINUTE as i64
    }

    /// `None` when the value does not fit a [`chrono::TimeDelta`].
    pub fn to_time_delta(&self) -> Option<chrono::TimeDelta> {
        chrono::TimeDelta::try_milliseconds(self.millis)
    }

    /// Render using the locale tagged `locale`, or the default locale when absent.
    pub fn format(&self, format: &Format, locale: Option<&str>) -> Result<String, Error> {
        let table = match locale {
            None => Locale::default_locale(),
            Some(tag) => Locale::lookup(tag).ok_or_else(|| Error::unsupported_locale(tag, "durations"))?,
        };
        Ok(self.format_in(format, table))
    }

    pub fn format_in(&self, format: &Format, locale: &Locale) -> String {
        let body = match format {
            Format::Verbose(cutoff) => self.verbose(*cutoff, locale),
            Format::Clock => self.clock(false),
            Format::ClockMinutes => self.clock(true),
            Format::Compact(fields) => self.compact(*fields),
        };
        if self.is_negative() { format!("-{body}") } else { body }
    }

    fn verbose(&self, cutoff: Specificity, locale: &Locale) -> String {
        let parts: Vec<String> = Specificity::ORDER
            .iter()
            .filter(|(s, _)| *s <= cutoff)
            .filter_map(|(_, unit)| {
                let n = self.components.get(*unit);
                (n > 0).then(|| format!("{} {}", n, locale.durations.noun(*unit, n)))
            })
            .collect();

        if parts.is_empty() {
            return locale.durations.noun(cutoff.unit(), 0);
        }
        parts.join(", ")
    }

    fn clock(&self, minutes_only: bool) -> String {
        let c = &self.components;
        let days = c.years * 365 + c.days;
        if days > 0 {
            format!("{}:{:02}:{:02}", days, c.hours, c.minutes)
        } else if c.hours > 0 {
            if minutes_only {
                format!("{}:{:02}", c.hours, c.minutes)
            } else {
                format!("{}:{:02}:{:02}", c.hours, c.minutes, c.seconds)
            }
        } else if minutes_only {
            c.minutes.to_string()
        } else {
            format!("{}:{:02}", c.minutes, c.seconds)
        }
    }

    fn compact(&self, fields: Fields) -> String {
        let mut left = self.millis.unsigned_abs();
        let mut parts = Vec::new();
        for (flag, size, suffix) in Fields::LAYOUT {
            if fields.contains(flag) {
                let n = left / size;
                left -= n * size;
                parts.push(format!("{n}{suffix}"));
            }
        }
        parts.join(" ")
    }
}

impl From<chrono::TimeDelta> for Duration {
    fn from(delta: chrono::TimeDelta) -> Self {
        Duration::from_millis(delta.num_milliseconds())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.millis)
    }
}
