//! Editor state for a habit that has not been committed yet.

use crate::models::{DayOfWeek, Habit, IdGenerator, Interval, ThemeColor};
use chrono::{Local, NaiveDate, NaiveTime};

pub const DEFAULT_ICON: &str = "#";

/// Receiver of committed drafts (the owner of the habit list).
pub trait HabitCommitSink {
    /// Called once per successful commit with the already-trimmed title.
    fn on_habit_committed(&mut self, title: &str, icon: &str, color: ThemeColor);
}

/// Transient state of the "New Habit" form.
///
/// A draft is either committed or dropped; both `commit` and `submit` consume it.
/// Only title, icon and color survive a commit: description, start date,
/// interval, reminder days and reminder time have no counterpart on `Habit`.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitDraft {
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub interval: Interval,
    selected_days: Vec<DayOfWeek>,
    pub reminder_time: NaiveTime,
    pub selected_color: ThemeColor,
    pub icon: String,
}

impl Default for HabitDraft {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl HabitDraft {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            start_date,
            interval: Interval::default(),
            selected_days: Vec::new(),
            reminder_time: default_reminder_time(),
            selected_color: ThemeColor::affirmative(),
            icon: DEFAULT_ICON.to_string(),
        }
    }

    /// Reminder days in the order they were first selected.
    pub fn selected_days(&self) -> &[DayOfWeek] {
        &self.selected_days
    }

    pub fn is_day_selected(&self, day: DayOfWeek) -> bool {
        self.selected_days.contains(&day)
    }

    /// Deselect `day` if present, otherwise append it.
    pub fn toggle_day(&mut self, day: DayOfWeek) {
        if self.is_day_selected(day) {
            self.selected_days.retain(|d| *d != day);
        } else {
            self.selected_days.push(day);
        }
    }

    pub fn trimmed_title(&self) -> &str {
        self.title.trim()
    }

    pub fn can_commit(&self) -> bool {
        !self.trimmed_title().is_empty()
    }

    pub fn should_show_time_picker(&self) -> bool {
        !self.selected_days.is_empty()
    }

    /// Turn the draft into a fresh habit; `None` when the title is blank.
    pub fn commit(self, ids: &mut dyn IdGenerator) -> Option<Habit> {
        if !self.can_commit() {
            return None;
        }
        Some(Habit::create(
            ids,
            self.trimmed_title(),
            self.icon.as_str(),
            self.selected_color,
        ))
    }

    /// Hand the draft to `sink`. Returns false, without calling the sink,
    /// when the title is blank.
    pub fn submit(self, sink: &mut dyn HabitCommitSink) -> bool {
        if !self.can_commit() {
            return false;
        }
        sink.on_habit_committed(self.trimmed_title(), &self.icon, self.selected_color);
        true
    }
}

fn default_reminder_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}
