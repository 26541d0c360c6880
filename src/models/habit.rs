use super::color::ThemeColor;
use super::habit_id::{HabitId, IdGenerator};
use crate::core::dot_grid::{self, Dot};
use serde::Serialize;

pub const DEFAULT_TARGET_DAYS: i32 = 30;

/// A tracked habit with its cumulative completion count and goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Habit {
    id: HabitId,
    pub title: String,
    pub icon: String,
    pub color: ThemeColor,
    pub completed_days: i32,
    target_days: i32,
}

impl Habit {
    /// New habit with no completed days and the default 30-day goal.
    /// The title is taken as-is; callers gate empty titles.
    pub fn create(
        ids: &mut dyn IdGenerator,
        title: impl Into<String>,
        icon: impl Into<String>,
        color: ThemeColor,
    ) -> Self {
        Self::with_progress(ids, title, icon, color, 0, DEFAULT_TARGET_DAYS)
    }

    /// Full constructor. `target_days <= 0` is corrected to 1;
    /// `completed_days` is stored unclamped.
    pub fn with_progress(
        ids: &mut dyn IdGenerator,
        title: impl Into<String>,
        icon: impl Into<String>,
        color: ThemeColor,
        completed_days: i32,
        target_days: i32,
    ) -> Self {
        Self {
            id: ids.next_id(),
            title: title.into(),
            icon: icon.into(),
            color,
            completed_days,
            target_days: target_days.max(1),
        }
    }

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn target_days(&self) -> i32 {
        self.target_days
    }

    /// Change the goal; values `<= 0` are corrected to 1 like in the constructor.
    pub fn set_target_days(&mut self, target_days: i32) {
        self.target_days = target_days.max(1);
    }

    pub fn progress_fraction(&self) -> f64 {
        progress_fraction(self.completed_days, self.target_days)
    }

    /// Whole percent, truncated.
    pub fn progress_percent(&self) -> u32 {
        (self.progress_fraction() * 100.0) as u32
    }

    pub fn dots(&self) -> Vec<Dot> {
        dot_grid::render_dots(self.color, self.target_days, self.completed_days)
    }
}

/// `completed / target` clamped to `[0, 1]`; 0 for a non-positive target.
pub fn progress_fraction(completed_days: i32, target_days: i32) -> f64 {
    if target_days <= 0 {
        return 0.0;
    }
    (f64::from(completed_days) / f64::from(target_days)).clamp(0.0, 1.0)
}
