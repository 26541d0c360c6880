//! Streaks main entrypoint.

use streaks::run;
use streaks::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
