use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub week_starts_on_sunday: bool,
    #[serde(default = "default_dots_per_row")]
    pub dots_per_row: usize,
    #[serde(default = "default_color_output")]
    pub color_output: bool,
}

fn default_dots_per_row() -> usize {
    10
}
fn default_color_output() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_starts_on_sunday: false,
            dots_per_row: default_dots_per_row(),
            color_output: default_color_output(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.streaks`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".streaks")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("streaks.conf")
    }

    /// Grid width actually used by the renderer.
    pub fn columns(&self) -> usize {
        self.dots_per_row.max(1)
    }

    /// Load configuration from `path`, or return defaults if the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load from the override path when given, otherwise from the standard location
    pub fn load(custom: Option<&Path>) -> AppResult<Self> {
        match custom {
            Some(p) => Self::load_from(p),
            None => Self::load_from(&Self::config_file()),
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write a default configuration file. Existing files are left untouched.
    /// Returns true when a new file was written.
    pub fn init_file(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        let dir = path
            .parent()
            .ok_or_else(|| AppError::Config(format!("invalid config path {}", path.display())))?;
        fs::create_dir_all(dir)?;

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}
