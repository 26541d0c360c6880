//! Text rendering of habit rows, the draft form and the activity log.

use crate::config::Config;
use crate::core::activity::ActivityLog;
use crate::core::draft::HabitDraft;
use crate::core::dot_grid::Dot;
use crate::errors::AppResult;
use crate::models::{DayOfWeek, Habit, ThemeColor};
use crate::utils::formatting::{pad_left, pad_right};
use ansi_term::{Colour, Style};
use serde::Serialize;

const FILLED: &str = "●";
const EMPTY: &str = "○";
const TITLE_WIDTH: usize = 16;
const ICON_WIDTH: usize = 2;

fn paint(cfg: &Config, style: Style, text: &str) -> String {
    if cfg.color_output {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

fn colour_of(color: ThemeColor) -> Colour {
    let (r, g, b) = color.rgb();
    Colour::RGB(r, g, b)
}

/// Dot grid split into rows of `cfg.columns()` indicators.
pub fn dot_grid_lines(dots: &[Dot], cfg: &Config) -> Vec<String> {
    dots.chunks(cfg.columns())
        .map(|row| {
            row.iter()
                .map(|d| {
                    let fg = Style::new().fg(colour_of(d.color));
                    if d.filled {
                        paint(cfg, fg, FILLED)
                    } else {
                        paint(cfg, fg.dimmed(), EMPTY)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn habit_row(habit: &Habit, cfg: &Config) -> String {
    let icon = paint(cfg, Style::new().on(colour_of(habit.color)), &habit.icon);
    let progress = format!("{}/{}", habit.completed_days, habit.target_days());

    let mut out = format!(
        "{} {}  {}  {}  [{}]\n",
        pad_right(&icon, ICON_WIDTH),
        pad_right(&paint(cfg, Style::new().bold(), &habit.title), TITLE_WIDTH),
        pad_left(&progress, 7),
        pad_left(&format!("{}%", habit.progress_percent()), 4),
        habit.id().short(),
    );
    for line in dot_grid_lines(&habit.dots(), cfg) {
        out.push_str("   ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn habit_list(habits: &[Habit], cfg: &Config) -> String {
    if habits.is_empty() {
        return "No habits yet\n   Use 'new' to create your first habit.\n".to_string();
    }
    habits
        .iter()
        .map(|h| habit_row(h, cfg))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct HabitJson<'a> {
    #[serde(flatten)]
    habit: &'a Habit,
    progress_fraction: f64,
    progress_percent: u32,
}

pub fn habits_json(habits: &[Habit]) -> AppResult<String> {
    let rows: Vec<HabitJson> = habits
        .iter()
        .map(|habit| HabitJson {
            habit,
            progress_fraction: habit.progress_fraction(),
            progress_percent: habit.progress_percent(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

fn day_chips(draft: &HabitDraft, cfg: &Config) -> String {
    DayOfWeek::week(cfg.week_starts_on_sunday)
        .iter()
        .map(|d| {
            if draft.is_day_selected(*d) {
                paint(
                    cfg,
                    Style::new().fg(Colour::White).on(Colour::Blue).bold(),
                    &format!("[{}]", d.short_name()),
                )
            } else {
                format!(" {} ", d.short_name())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn palette(draft: &HabitDraft, cfg: &Config) -> String {
    ThemeColor::PALETTE
        .iter()
        .map(|c| {
            let marker = if *c == draft.selected_color { "◉" } else { FILLED };
            paint(cfg, Style::new().fg(colour_of(*c)), marker)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The "New Habit" form, section by section.
pub fn draft_view(draft: &HabitDraft, cfg: &Config) -> String {
    let mut out = String::new();
    let title = if draft.title.is_empty() { "<empty>" } else { draft.title.as_str() };

    out.push_str("INFO\n");
    out.push_str(&format!("  Title        {title}\n"));
    if draft.description.is_empty() {
        out.push_str("  Description  -\n");
    } else {
        let opts = textwrap::Options::new(60)
            .initial_indent("  Description  ")
            .subsequent_indent("               ");
        out.push_str(&textwrap::fill(&draft.description, opts));
        out.push('\n');
    }
    out.push_str(&format!("  Start date   {}\n", draft.start_date.format("%Y-%m-%d")));

    out.push_str("STREAK GOAL & INTERVAL\n");
    out.push_str(&format!("  Interval     {}\n", draft.interval));

    out.push_str("REMINDER\n");
    out.push_str(&format!("  {}\n", day_chips(draft, cfg)));
    if draft.should_show_time_picker() {
        out.push_str(&format!(
            "  Pick a time  {}\n",
            draft.reminder_time.format("%H:%M")
        ));
    }

    out.push_str("THEME & ICON\n");
    out.push_str(&format!(
        "  Color        {} ({})\n",
        palette(draft, cfg),
        draft.selected_color
    ));
    out.push_str(&format!("  Icon         {}\n", draft.icon));

    let add = if draft.can_commit() { "enabled" } else { "disabled" };
    out.push_str(&format!("Add: {add}\n"));
    out
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "remove" => Colour::Red,
        "ignored" => Colour::Yellow,
        "seed" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn activity_log(log: &ActivityLog, cfg: &Config) -> String {
    let entries = log.entries();
    if entries.is_empty() {
        return "Activity log is empty.\n".to_string();
    }

    let labels: Vec<String> = entries
        .iter()
        .map(|e| {
            if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            }
        })
        .collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0).min(48);

    let mut out = String::new();
    for (i, (entry, label)) in entries.iter().zip(&labels).enumerate() {
        let op = paint(
            cfg,
            Style::new().fg(color_for_operation(&entry.operation)),
            &pad_right(label, width),
        );
        out.push_str(&format!(
            "{:>3}  {}  {}  {}\n",
            i + 1,
            entry.at.format("%H:%M:%S"),
            op,
            entry.message
        ));
    }
    out
}
