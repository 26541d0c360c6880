#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn streaks() -> Command {
    cargo_bin_cmd!("streaks")
}

/// Config file inside the system temp dir with plain (uncoloured) output
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_streaks.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::write(&cfg_path, "color_output: false\n").expect("write test config");
    cfg_path
}

/// Path inside the temp dir that is guaranteed not to exist yet
pub fn missing_path(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_streaks_dir", name));
    fs::remove_dir_all(&path).ok();
    path.join("streaks.conf")
}
