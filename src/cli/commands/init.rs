use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the configuration directory and writes a default configuration
/// file. In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli.config.clone().unwrap_or_else(Config::config_file);

    println!("⚙️  Initializing Streaks…");
    println!("📄 Config file : {}", path.display());

    if cli.test {
        info("Test mode: configuration file not written.");
        return Ok(());
    }

    if Config::init_file(&path)? {
        success(format!("Configuration written to {}", path.display()));
    } else {
        info(format!("Configuration already present at {}", path.display()));
    }
    Ok(())
}
