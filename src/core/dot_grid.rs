//! Per-day indicators shown under each habit row.

use crate::models::color::ThemeColor;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dot {
    pub filled: bool,
    pub color: ThemeColor,
}

/// Build `total_dots` indicators, the first `completed_dots` of them filled.
///
/// The completed count is clamped into `0..=total_dots` here, independently of
/// whatever the habit stores, so an over-achieved habit never renders more
/// filled dots than its grid has. A non-positive total yields an empty grid.
pub fn render_dots(color: ThemeColor, total_dots: i32, completed_dots: i32) -> Vec<Dot> {
    let total = total_dots.max(0);
    let filled = completed_dots.clamp(0, total);

    (0..total)
        .map(|i| Dot {
            filled: i < filled,
            color,
        })
        .collect()
}

pub fn filled_count(dots: &[Dot]) -> usize {
    dots.iter().filter(|d| d.filled).count()
}
