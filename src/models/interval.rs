use crate::errors::AppError;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Streak interval picked in the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
pub enum Interval {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Daily => "Daily",
            Interval::Weekly => "Weekly",
            Interval::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "d" => Ok(Interval::Daily),
            "weekly" | "w" => Ok(Interval::Weekly),
            "monthly" | "m" => Ok(Interval::Monthly),
            _ => Err(AppError::InvalidInterval(s.to_string())),
        }
    }
}
