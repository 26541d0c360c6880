//! Line-oriented interactive session over one habit board.

use crate::config::Config;
use crate::core::board::HabitBoard;
use crate::core::draft::{DEFAULT_ICON, HabitDraft};
use crate::errors::{AppError, AppResult};
use crate::models::{DayOfWeek, IdGenerator, Interval, ThemeColor};
use crate::ui::messages::{error, info, success, warning};
use crate::ui::render;
use crate::utils::{date, time};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  list                      show all habits
  new                       open a new habit draft
  title <text>              set the draft title
  description <text>        set the draft description
  icon <glyph>              set the draft icon
  color <name>              pick a palette color
  interval <daily|weekly|monthly>
  start <YYYY-MM-DD>        set the start date
  day <mon..sun>            toggle a reminder day
  time <HH:MM>              set the reminder time
  show                      show the open draft
  commit                    add the draft as a new habit
  cancel                    discard the open draft
  remove <id>               remove a habit (unique id prefix is enough)
  log                       show the activity log
  quit                      leave the shell";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    board: HabitBoard,
    draft: Option<HabitDraft>,
    cfg: Config,
}

impl Session {
    pub fn new(cfg: Config, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            board: HabitBoard::seeded(ids),
            draft: None,
            cfg,
        }
    }

    pub fn board(&self) -> &HabitBoard {
        &self.board
    }

    pub fn draft(&self) -> Option<&HabitDraft> {
        self.draft.as_ref()
    }

    /// Read commands until `quit` or end of input. Bad commands are reported
    /// and the session goes on. `prompt` shows `streaks> ` before each line.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> AppResult<()> {
        info("Streaks shell. Type 'help' for the list of commands.");

        let mut lines = input.lines();
        loop {
            if prompt {
                print!("streaks> ");
                io::stdout().flush()?;
            }
            let Some(line) = lines.next() else { break };
            match self.execute(&line?) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => error(e),
            }
        }

        if self.draft.is_some() {
            info("Open draft discarded.");
        }
        Ok(())
    }

    pub fn execute(&mut self, line: &str) -> AppResult<Flow> {
        let line = line.trim();
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((c, rest)) => (c, rest.trim()),
            None => (line, ""),
        };

        match cmd.to_lowercase().as_str() {
            "" => {}
            "help" | "?" => println!("{HELP}"),
            "quit" | "exit" => return Ok(Flow::Quit),
            "list" | "ls" => print!("{}", render::habit_list(self.board.habits(), &self.cfg)),
            "log" => print!("{}", render::activity_log(self.board.activity(), &self.cfg)),
            "new" => self.open_draft()?,
            "title" => self.draft_mut()?.title = arg.to_string(),
            "description" | "desc" => self.draft_mut()?.description = arg.to_string(),
            "icon" => {
                let icon = if arg.is_empty() { DEFAULT_ICON } else { arg };
                self.draft_mut()?.icon = icon.to_string();
            }
            "color" => {
                let color: ThemeColor = arg.parse()?;
                if !color.in_palette() {
                    return Err(AppError::InvalidColor(format!(
                        "{arg} is not part of the palette"
                    )));
                }
                self.draft_mut()?.selected_color = color;
            }
            "interval" => {
                let interval: Interval = arg.parse()?;
                self.draft_mut()?.interval = interval;
            }
            "start" => {
                let d = date::parse_date(arg).ok_or_else(|| AppError::InvalidDate(arg.into()))?;
                self.draft_mut()?.start_date = d;
            }
            "day" => {
                let day: DayOfWeek = arg.parse()?;
                let draft = self.draft_mut()?;
                draft.toggle_day(day);
                let days: Vec<&str> = draft.selected_days().iter().map(|d| d.short_name()).collect();
                info(format!("Reminder days: [{}]", days.join(", ")));
            }
            "time" => {
                let t = time::parse_time(arg).ok_or_else(|| AppError::InvalidTime(arg.into()))?;
                self.draft_mut()?.reminder_time = t;
            }
            "show" => {
                let view = render::draft_view(self.draft_ref()?, &self.cfg);
                print!("{view}");
            }
            "commit" | "add" => self.commit_draft()?,
            "cancel" => {
                if self.draft.take().is_none() {
                    return Err(AppError::NoDraft);
                }
                info("Draft discarded.");
            }
            "remove" | "rm" => {
                let id = self.board.resolve_id(arg)?;
                if let Some(h) = self.board.remove(&id) {
                    success(format!("Removed habit '{}' ({})", h.title, id));
                }
            }
            other => return Err(AppError::InvalidCommand(other.to_string())),
        }
        Ok(Flow::Continue)
    }

    fn open_draft(&mut self) -> AppResult<()> {
        if self.draft.is_some() {
            return Err(AppError::DraftAlreadyOpen);
        }
        self.draft = Some(HabitDraft::new(date::today()));
        info("New habit draft opened.");
        Ok(())
    }

    fn draft_ref(&self) -> AppResult<&HabitDraft> {
        self.draft.as_ref().ok_or(AppError::NoDraft)
    }

    fn draft_mut(&mut self) -> AppResult<&mut HabitDraft> {
        self.draft.as_mut().ok_or(AppError::NoDraft)
    }

    /// A blank title keeps the draft open, like a disabled Add button.
    fn commit_draft(&mut self) -> AppResult<()> {
        let can_commit = self.draft_ref()?.can_commit();
        if !can_commit {
            warning("Add is disabled: the title is empty.");
            return Ok(());
        }

        if let Some(draft) = self.draft.take() {
            let title = draft.trimmed_title().to_string();
            draft.submit(&mut self.board);
            success(format!("Added habit '{title}'"));
        }
        Ok(())
    }
}
