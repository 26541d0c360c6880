use chrono::NaiveDate;
use std::env;
use std::fs;
use streaks::config::Config;
use streaks::core::board::HabitBoard;
use streaks::core::draft::HabitDraft;
use streaks::core::dot_grid::render_dots;
use streaks::models::{DayOfWeek, Habit, SequentialIds, ThemeColor};
use streaks::ui::render;
use streaks::utils::formatting::{display_width, pad_right, strip_ansi};

fn plain() -> Config {
    Config {
        color_output: false,
        ..Config::default()
    }
}

fn draft() -> HabitDraft {
    HabitDraft::new(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
}

#[test]
fn test_dot_grid_wraps_at_columns() {
    let dots = render_dots(ThemeColor::Mint, 30, 12);
    let lines = render::dot_grid_lines(&dots, &plain());

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], vec!["●"; 10].join(" "));
    assert_eq!(lines[1], "● ● ○ ○ ○ ○ ○ ○ ○ ○");
    assert_eq!(lines[2], vec!["○"; 10].join(" "));
}

#[test]
fn test_dot_grid_zero_columns_falls_back_to_one() {
    let cfg = Config {
        dots_per_row: 0,
        ..plain()
    };
    let dots = render_dots(ThemeColor::Red, 3, 1);
    assert_eq!(render::dot_grid_lines(&dots, &cfg), vec!["●", "○", "○"]);
}

#[test]
fn test_habit_list_rows_and_empty_state() {
    let board = HabitBoard::seeded(Box::new(SequentialIds::new()));
    let out = render::habit_list(board.habits(), &plain());

    assert!(out.contains("Run"));
    assert!(out.contains("12/30"));
    assert!(out.contains("40%"));
    assert!(out.contains("35%"));
    assert!(out.contains("38%"));
    assert!(out.contains("[h3]"));

    assert!(render::habit_list(&[], &plain()).contains("No habits yet"));
}

#[test]
fn test_title_column_aligned_for_narrow_and_wide_icons() {
    let mut ids = SequentialIds::new();
    let narrow = Habit::create(&mut ids, "Walk", "#", ThemeColor::Green);
    let wide = Habit::create(&mut ids, "Read", "📚", ThemeColor::Orange);

    let title_column = |h: &Habit| {
        let row = render::habit_row(h, &plain());
        let first = row.lines().next().unwrap().to_string();
        let idx = first.find(&h.title).unwrap();
        display_width(&first[..idx])
    };
    assert_eq!(title_column(&narrow), 3);
    assert_eq!(title_column(&wide), 3);
}

#[test]
fn test_coloured_output_keeps_text() {
    let board = HabitBoard::seeded(Box::new(SequentialIds::new()));
    let out = render::habit_list(board.habits(), &Config::default());

    assert!(out.contains("\x1b["));
    assert!(strip_ansi(&out).contains("Meditate"));
}

#[test]
fn test_draft_view_time_picker_and_gate() {
    let mut d = draft();
    let view = render::draft_view(&d, &plain());
    assert!(!view.contains("Pick a time"));
    assert!(view.contains("Add: disabled"));

    d.title = "Read".into();
    d.toggle_day(DayOfWeek::Wed);
    let view = render::draft_view(&d, &plain());
    assert!(view.contains("Pick a time  09:00"));
    assert!(view.contains("[Wed]"));
    assert!(view.contains("Add: enabled"));
}

#[test]
fn test_draft_view_week_start() {
    let d = draft();
    let monday_first = render::draft_view(&d, &plain());
    let sunday_cfg = Config {
        week_starts_on_sunday: true,
        ..plain()
    };
    let sunday_first = render::draft_view(&d, &sunday_cfg);

    let chips = |v: &str| {
        v.lines()
            .find(|l| l.contains("Mon") && l.contains("Sun"))
            .map(|l| l.trim().to_string())
            .unwrap()
    };
    assert!(chips(&monday_first).starts_with("Mon"));
    assert!(chips(&sunday_first).starts_with("Sun"));
}

#[test]
fn test_habits_json_includes_progress() {
    let board = HabitBoard::seeded(Box::new(SequentialIds::new()));
    let json = render::habits_json(board.habits()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let first = &value[0];
    assert_eq!(first["id"], "h1");
    assert_eq!(first["title"], "Run");
    assert_eq!(first["color"], "mint");
    assert_eq!(first["target_days"], 30);
    assert_eq!(first["progress_percent"], 40);
}

#[test]
fn test_activity_log_rendering() {
    let board = HabitBoard::seeded(Box::new(SequentialIds::new()));
    let out = render::activity_log(board.activity(), &plain());
    assert!(out.contains("seed (samples)"));
    assert!(out.contains("3 sample habits loaded"));
}

#[test]
fn test_padding_counts_wide_glyphs() {
    assert_eq!(display_width("📚"), 2);
    assert_eq!(display_width("\x1b[1mRun\x1b[0m"), 3);
    assert_eq!(display_width(&pad_right("📚", 4)), 4);
}

#[test]
fn test_config_defaults_and_partial_file() {
    let mut path = env::temp_dir();
    path.push("partial_streaks.conf");
    fs::write(&path, "week_starts_on_sunday: true\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert!(cfg.week_starts_on_sunday);
    assert_eq!(cfg.dots_per_row, 10);
    assert!(cfg.color_output);

    let mut missing = env::temp_dir();
    missing.push("does_not_exist_streaks.conf");
    fs::remove_file(&missing).ok();
    assert_eq!(Config::load_from(&missing).unwrap(), Config::default());
}

#[test]
fn test_config_invalid_yaml_is_error() {
    let mut path = env::temp_dir();
    path.push("broken_streaks.conf");
    fs::write(&path, "dots_per_row: [not, a, number]\n").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_config_init_file_does_not_overwrite() {
    let mut dir = env::temp_dir();
    dir.push("init_streaks_dir");
    fs::remove_dir_all(&dir).ok();
    let path = dir.join("streaks.conf");

    assert!(Config::init_file(&path).unwrap());
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    fs::write(&path, "dots_per_row: 7\n").unwrap();
    assert!(!Config::init_file(&path).unwrap());
    assert_eq!(Config::load_from(&path).unwrap().dots_per_row, 7);
}
