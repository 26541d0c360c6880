use crate::cli::commands::{id_source, list::print_board};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::board::HabitBoard;
use crate::core::draft::HabitDraft;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::{date, time::parse_optional_time};

/// Build a draft from the flags, commit it into the seeded board and show the result.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        icon,
        color,
        description,
        start,
        interval,
        days,
        time,
        json,
    } = &cli.command
    {
        //
        // 1. Fill the draft
        //
        let mut draft = HabitDraft::new(date::today());
        draft.title = title.clone();

        if let Some(i) = icon {
            draft.icon = i.clone();
        }
        if let Some(c) = color {
            if !c.in_palette() {
                return Err(AppError::InvalidColor(format!(
                    "{c} is not part of the palette"
                )));
            }
            draft.selected_color = *c;
        }
        if let Some(d) = description {
            draft.description = d.clone();
        }
        if let Some(s) = start {
            draft.start_date =
                date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
        }
        if let Some(i) = interval {
            draft.interval = *i;
        }
        for day in days {
            draft.toggle_day(*day);
        }
        if let Some(t) = parse_optional_time(time.as_ref())? {
            draft.reminder_time = t;
        }

        //
        // 2. Commit (gated on a non-blank title)
        //
        let mut board = HabitBoard::seeded(id_source(cli));
        if draft.can_commit() {
            let trimmed = draft.trimmed_title().to_string();
            draft.submit(&mut board);
            if !json {
                success(format!("Added habit '{trimmed}'"));
            }
        } else {
            warning("Add is disabled: the title is empty. Nothing was added.");
        }

        //
        // 3. Show the list
        //
        print_board(&board, cfg, *json)?;
    }

    Ok(())
}
