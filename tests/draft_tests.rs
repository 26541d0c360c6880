use chrono::{NaiveDate, NaiveTime};
use streaks::core::draft::{HabitCommitSink, HabitDraft};
use streaks::models::{DayOfWeek, Interval, SequentialIds, ThemeColor};

fn draft() -> HabitDraft {
    HabitDraft::new(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
}

#[derive(Default)]
struct RecordingSink {
    calls: Vec<(String, String, ThemeColor)>,
}

impl HabitCommitSink for RecordingSink {
    fn on_habit_committed(&mut self, title: &str, icon: &str, color: ThemeColor) {
        self.calls.push((title.to_string(), icon.to_string(), color));
    }
}

#[test]
fn test_new_draft_defaults() {
    let d = draft();
    assert_eq!(d.title, "");
    assert_eq!(d.description, "");
    assert_eq!(d.start_date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    assert_eq!(d.interval, Interval::Daily);
    assert!(d.selected_days().is_empty());
    assert_eq!(d.reminder_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    assert_eq!(d.selected_color, ThemeColor::Green);
    assert_eq!(d.icon, "#");
    assert!(!d.can_commit());
}

#[test]
fn test_toggle_day_on_empty() {
    let mut d = draft();
    d.toggle_day(DayOfWeek::Mon);
    assert_eq!(d.selected_days(), &[DayOfWeek::Mon]);
}

#[test]
fn test_toggle_day_removes_selected() {
    let mut d = draft();
    d.toggle_day(DayOfWeek::Mon);
    d.toggle_day(DayOfWeek::Wed);
    d.toggle_day(DayOfWeek::Mon);
    assert_eq!(d.selected_days(), &[DayOfWeek::Wed]);
}

#[test]
fn test_toggle_day_appends_in_selection_order() {
    let mut d = draft();
    d.toggle_day(DayOfWeek::Fri);
    d.toggle_day(DayOfWeek::Mon);
    d.toggle_day(DayOfWeek::Tue);
    assert_eq!(
        d.selected_days(),
        &[DayOfWeek::Fri, DayOfWeek::Mon, DayOfWeek::Tue]
    );

    // re-selecting goes to the end
    d.toggle_day(DayOfWeek::Fri);
    d.toggle_day(DayOfWeek::Fri);
    assert_eq!(
        d.selected_days(),
        &[DayOfWeek::Mon, DayOfWeek::Tue, DayOfWeek::Fri]
    );
}

#[test]
fn test_time_picker_visibility() {
    let mut d = draft();
    assert!(!d.should_show_time_picker());
    d.toggle_day(DayOfWeek::Sat);
    assert!(d.should_show_time_picker());
    d.toggle_day(DayOfWeek::Sat);
    assert!(!d.should_show_time_picker());
}

#[test]
fn test_can_commit_rejects_whitespace() {
    let mut d = draft();
    d.title = "   ".into();
    assert!(!d.can_commit());
    d.title = "\n\t ".into();
    assert!(!d.can_commit());
    d.title = "  Run  ".into();
    assert!(d.can_commit());
}

#[test]
fn test_commit_trims_title() {
    let mut d = draft();
    d.title = "  Run  ".into();

    let habit = d.commit(&mut SequentialIds::new()).expect("committable");
    assert_eq!(habit.title, "Run");
}

#[test]
fn test_commit_blank_title_is_noop() {
    let mut d = draft();
    d.title = "   ".into();
    assert!(d.commit(&mut SequentialIds::new()).is_none());
}

#[test]
fn test_commit_drops_schedule_fields() {
    let mut d = draft();
    d.title = "Read".into();
    d.icon = "📚".into();
    d.selected_color = ThemeColor::Orange;
    d.description = "Twenty pages".into();
    d.interval = Interval::Weekly;
    d.toggle_day(DayOfWeek::Mon);
    d.toggle_day(DayOfWeek::Wed);
    d.reminder_time = NaiveTime::from_hms_opt(21, 30, 0).unwrap();

    let habit = d.commit(&mut SequentialIds::new()).expect("committable");
    assert_eq!(habit.title, "Read");
    assert_eq!(habit.icon, "📚");
    assert_eq!(habit.color, ThemeColor::Orange);
    assert_eq!(habit.completed_days, 0);
    assert_eq!(habit.target_days(), 30);
}

#[test]
fn test_submit_calls_sink_once_with_trimmed_title() {
    let mut sink = RecordingSink::default();
    let mut d = draft();
    d.title = "  Stretch ".into();
    d.icon = "🤸".into();
    d.selected_color = ThemeColor::Teal;

    assert!(d.submit(&mut sink));
    assert_eq!(
        sink.calls,
        vec![("Stretch".to_string(), "🤸".to_string(), ThemeColor::Teal)]
    );
}

#[test]
fn test_submit_blank_title_skips_sink() {
    let mut sink = RecordingSink::default();
    let mut d = draft();
    d.title = "    ".into();

    assert!(!d.submit(&mut sink));
    assert!(sink.calls.is_empty());
}
