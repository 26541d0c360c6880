pub mod add;
pub mod config;
pub mod init;
pub mod list;
pub mod shell;

use crate::cli::parser::Cli;
use crate::models::{IdGenerator, SequentialIds, UuidIds};

/// Id source for this run: deterministic in test mode.
pub(crate) fn id_source(cli: &Cli) -> Box<dyn IdGenerator> {
    if cli.test {
        Box::new(SequentialIds::new())
    } else {
        Box::new(UuidIds)
    }
}
