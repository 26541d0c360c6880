use crate::errors::AppError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Theming token for a habit row and its dot grid.
/// The terminal renderer maps it to an RGB triple; the core only compares tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeColor {
    Mint,
    Green,
    Brown,
    DarkGray,
    Purple,
    Red,
    Pink,
    Blue,
    Teal,
    Orange,
}

impl ThemeColor {
    /// Colors offered by the draft editor, in picker order.
    pub const PALETTE: [ThemeColor; 9] = [
        ThemeColor::Green,
        ThemeColor::Brown,
        ThemeColor::DarkGray,
        ThemeColor::Purple,
        ThemeColor::Red,
        ThemeColor::Pink,
        ThemeColor::Blue,
        ThemeColor::Teal,
        ThemeColor::Orange,
    ];

    /// Default selection of a fresh draft.
    pub fn affirmative() -> Self {
        Self::PALETTE[0]
    }

    pub fn in_palette(&self) -> bool {
        Self::PALETTE.contains(self)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeColor::Mint => "mint",
            ThemeColor::Green => "green",
            ThemeColor::Brown => "brown",
            ThemeColor::DarkGray => "dark-gray",
            ThemeColor::Purple => "purple",
            ThemeColor::Red => "red",
            ThemeColor::Pink => "pink",
            ThemeColor::Blue => "blue",
            ThemeColor::Teal => "teal",
            ThemeColor::Orange => "orange",
        }
    }

    /// Light-mode system colors.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ThemeColor::Mint => (0, 199, 190),
            ThemeColor::Green => (52, 199, 89),
            ThemeColor::Brown => (162, 132, 94),
            ThemeColor::DarkGray => (85, 85, 85),
            ThemeColor::Purple => (175, 82, 222),
            ThemeColor::Red => (255, 59, 48),
            ThemeColor::Pink => (255, 45, 85),
            ThemeColor::Blue => (0, 122, 255),
            ThemeColor::Teal => (48, 176, 199),
            ThemeColor::Orange => (255, 149, 0),
        }
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeColor {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        [ThemeColor::Mint]
            .into_iter()
            .chain(Self::PALETTE)
            .find(|c| c.name() == wanted || (wanted == "darkgray" && *c == ThemeColor::DarkGray))
            .ok_or_else(|| AppError::InvalidColor(s.to_string()))
    }
}
