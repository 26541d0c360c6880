use crate::cli::commands::id_source;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::board::HabitBoard;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = &cli.command {
        let board = HabitBoard::seeded(id_source(cli));
        print_board(&board, cfg, *json)?;
    }
    Ok(())
}

pub(crate) fn print_board(board: &HabitBoard, cfg: &Config, json: bool) -> AppResult<()> {
    if json {
        println!("{}", render::habits_json(board.habits())?);
    } else {
        header("Habits");
        print!("{}", render::habit_list(board.habits(), cfg));
    }
    Ok(())
}
