use crate::cli::commands::id_source;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use std::io::{self, IsTerminal};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut session = Session::new(cfg.clone(), id_source(cli));
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    session.run(stdin.lock(), prompt)
}
