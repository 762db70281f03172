use std::{fmt, str::FromStr};

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

/// Minute-precision wall clock time, parsed from `"HH:MM"` (24h).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid time of day, expected HH:MM")]
pub struct TimeOfDayParseError;

impl FromStr for TimeOfDay {
    type Err = TimeOfDayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s.trim().split_once(':').ok_or(TimeOfDayParseError)?;
        let hour = h.parse().map_err(|_| TimeOfDayParseError)?;
        let minute = m.parse().map_err(|_| TimeOfDayParseError)?;
        if hour > 23 || minute > 59 {
            return Err(TimeOfDayParseError);
        }
        Ok(Self { hour, minute })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Opening and closing time for a single day.
///
/// A close time at or before the open time is read as closing past
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHours {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl fmt::Display for DayHours {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}-{}", self.open, self.close)
    }
}

impl FromStr for DayHours {
    type Err = WeeklyHoursParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (open, close) = s.split_once('-').ok_or(WeeklyHoursParseError)?;
        Ok(Self {
            open: open.parse().map_err(|_| WeeklyHoursParseError)?,
            close: close.parse().map_err(|_| WeeklyHoursParseError)?,
        })
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid opening hours, expected day=HH:MM-HH:MM entries")]
pub struct WeeklyHoursParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// Weekly opening hours; an absent day means closed.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeeklyHours {
    pub mon : Option<DayHours>,
    pub tue : Option<DayHours>,
    pub wed : Option<DayHours>,
    pub thu : Option<DayHours>,
    pub fri : Option<DayHours>,
    pub sat : Option<DayHours>,
    pub sun : Option<DayHours>,
}

impl WeeklyHours {
    pub fn day(&self, day: Weekday) -> Option<DayHours> {
        match day {
            Weekday::Mon => self.mon,
            Weekday::Tue => self.tue,
            Weekday::Wed => self.wed,
            Weekday::Thu => self.thu,
            Weekday::Fri => self.fri,
            Weekday::Sat => self.sat,
            Weekday::Sun => self.sun,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut Option<DayHours> {
        match day {
            Weekday::Mon => &mut self.mon,
            Weekday::Tue => &mut self.tue,
            Weekday::Wed => &mut self.wed,
            Weekday::Thu => &mut self.thu,
            Weekday::Fri => &mut self.fri,
            Weekday::Sat => &mut self.sat,
            Weekday::Sun => &mut self.sun,
        }
    }

    pub fn is_empty(&self) -> bool {
        Weekday::iter().all(|day| self.day(day).is_none())
    }
}

// Compact textual form, e.g. "mon=11:00-22:00;sat=11:00-01:30".
// Days without an entry are closed.
impl fmt::Display for WeeklyHours {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let mut first = true;
        for day in Weekday::iter() {
            if let Some(hours) = self.day(day) {
                if !first {
                    f.write_str(";")?;
                }
                write!(f, "{day}={hours}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl FromStr for WeeklyHours {
    type Err = WeeklyHoursParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut hours = Self::default();
        for entry in s.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (day, day_hours) = entry.split_once('=').ok_or(WeeklyHoursParseError)?;
            let day = day.trim().parse().map_err(|_| WeeklyHoursParseError)?;
            *hours.day_mut(day) = Some(day_hours.parse()?);
        }
        Ok(hours)
    }
}
