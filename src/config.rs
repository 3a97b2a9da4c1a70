//! Configuration loading and management
//!
//! Handles parsing of the optional `config.toml` in the user config
//! directory. Everything has a default; a missing or unreadable file means
//! stock settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory holding the stores (default `~/.todone`)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// File name of the active store within the data directory
    #[serde(default = "default_todo_file")]
    pub todo_file: String,

    /// File name of the archive store within the data directory
    #[serde(default = "default_done_file")]
    pub done_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            todo_file: default_todo_file(),
            done_file: default_done_file(),
        }
    }
}

fn default_todo_file() -> String {
    crate::storage::TODO_FILE.to_string()
}

fn default_done_file() -> String {
    crate::storage::DONE_FILE.to_string()
}

impl Config {
    /// Load configuration from a `config.toml` file
    pub fn load(path: &PathBuf) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the user config directory, or return defaults
    pub fn load_default() -> Self {
        match config_file_path() {
            Some(path) if path.exists() => Self::load(&path).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &PathBuf) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> crate::error::Result<()> {
        validate_file_name("todo_file", &self.todo_file)?;
        validate_file_name("done_file", &self.done_file)?;
        if self.todo_file == self.done_file {
            return Err(crate::error::Error::InvalidConfig(
                "todo_file and done_file must differ".to_string(),
            ));
        }
        Ok(())
    }
}

fn validate_file_name(field: &str, name: &str) -> crate::error::Result<()> {
    if name.trim().is_empty() {
        return Err(crate::error::Error::InvalidConfig(format!(
            "{field} cannot be empty"
        )));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(crate::error::Error::InvalidConfig(format!(
            "{field}: '{name}' must be a bare file name"
        )));
    }
    Ok(())
}

/// Path of the user-level config file, if a config directory can be found
pub fn config_file_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "todone")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_stock_file_names() {
        let config = Config::default();
        assert_eq!(config.data_dir, None);
        assert_eq!(config.todo_file, "todo.txt");
        assert_eq!(config.done_file, "done.txt");
    }

    #[test]
    fn load_reads_overrides_and_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/tmp/tasks\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/tasks")));
        assert_eq!(config.todo_file, "todo.txt");
    }

    #[test]
    fn load_rejects_path_separators_in_file_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "todo_file = \"sub/todo.txt\"\n").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn load_rejects_identical_store_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "todo_file = \"tasks.txt\"\ndone_file = \"tasks.txt\"\n",
        )
        .unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn save_and_reload_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.data_dir = Some(PathBuf::from("/tmp/elsewhere"));
        config.save(&path).unwrap();

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded.data_dir, config.data_dir);
    }
}
