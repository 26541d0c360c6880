use crate::errors::AppError;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Mon,
        DayOfWeek::Tue,
        DayOfWeek::Wed,
        DayOfWeek::Thu,
        DayOfWeek::Fri,
        DayOfWeek::Sat,
        DayOfWeek::Sun,
    ];

    pub fn short_name(&self) -> &'static str {
        match self {
            DayOfWeek::Mon => "Mon",
            DayOfWeek::Tue => "Tue",
            DayOfWeek::Wed => "Wed",
            DayOfWeek::Thu => "Thu",
            DayOfWeek::Fri => "Fri",
            DayOfWeek::Sat => "Sat",
            DayOfWeek::Sun => "Sun",
        }
    }

    /// Display order of the reminder-day chips.
    pub fn week(starts_on_sunday: bool) -> [DayOfWeek; 7] {
        let mut days = Self::ALL;
        if starts_on_sunday {
            days.rotate_right(1);
        }
        days
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for DayOfWeek {
    type Err = AppError;

    /// Accepts the short name or the full English name, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| lower.len() >= 3 && lower.starts_with(&d.short_name().to_lowercase()))
            .filter(|d| lower.len() == 3 || full_name(*d) == lower)
            .ok_or_else(|| AppError::InvalidDay(s.to_string()))
    }
}

fn full_name(day: DayOfWeek) -> &'static str {
    match day {
        DayOfWeek::Mon => "monday",
        DayOfWeek::Tue => "tuesday",
        DayOfWeek::Wed => "wednesday",
        DayOfWeek::Thu => "thursday",
        DayOfWeek::Fri => "friday",
        DayOfWeek::Sat => "saturday",
        DayOfWeek::Sun => "sunday",
    }
}
