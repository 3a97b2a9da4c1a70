//! Storage layer for todone
//!
//! Manages the per-user data directory holding the two flat text stores:
//!
//! ```text
//! ~/.todone/                    # data directory (created on first use)
//!   todo.txt                    # active list, one task per line, rewritten
//!                               # in full after every mutation
//!   done.txt                    # completed log, append-only
//! ```
//!
//! The active store is rewritten atomically (temp file + rename) so a crash
//! mid-write never leaves a truncated list behind. The archive store is only
//! ever appended to.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

/// Default data directory name under the user's home directory
pub const DATA_DIR: &str = ".todone";

/// Default file name of the active store
pub const TODO_FILE: &str = "todo.txt";

/// Default file name of the archive store
pub const DONE_FILE: &str = "done.txt";

/// Storage manager for the todone stores
#[derive(Debug, Clone)]
pub struct Storage {
    /// Data directory holding both stores
    data_dir: PathBuf,
    /// File name of the active store within the data directory
    todo_file: String,
    /// File name of the archive store within the data directory
    done_file: String,
}

impl Storage {
    /// Create a new storage manager over the given data directory
    pub fn new(data_dir: PathBuf, todo_file: String, done_file: String) -> Self {
        Self {
            data_dir,
            todo_file,
            done_file,
        }
    }

    /// Create storage with the default store file names
    pub fn for_dir(data_dir: PathBuf) -> Self {
        Self::new(data_dir, TODO_FILE.to_string(), DONE_FILE.to_string())
    }

    /// Resolve storage from configuration and an optional explicit override.
    ///
    /// Resolution order for the data directory: the override (CLI flag or
    /// environment), then `data_dir` from config, then `~/.todone`.
    pub fn resolve(config: &Config, override_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match override_dir.or_else(|| config.data_dir.clone()) {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Ok(Self::new(
            data_dir,
            config.todo_file.clone(),
            config.done_file.clone(),
        ))
    }

    // =========================================================================
    // Path accessors
    // =========================================================================

    /// Path to the data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path to the active store
    pub fn todo_path(&self) -> PathBuf {
        self.data_dir.join(&self.todo_file)
    }

    /// Path to the archive store
    pub fn done_path(&self) -> PathBuf {
        self.data_dir.join(&self.done_file)
    }

    // =========================================================================
    // Bootstrap
    // =========================================================================

    /// Create the data directory and both store files if absent
    pub fn init(&self) -> Result<()> {
        if !self.data_dir.exists() {
            debug!(dir = %self.data_dir.display(), "creating data directory");
            fs::create_dir_all(&self.data_dir)?;
        }

        for path in [self.todo_path(), self.done_path()] {
            if !path.exists() {
                File::create(&path)?;
            }
        }

        Ok(())
    }

    /// Check whether the store files exist
    pub fn is_initialized(&self) -> bool {
        self.todo_path().exists() && self.done_path().exists()
    }

    // =========================================================================
    // Active store I/O
    // =========================================================================

    /// Read the active store as one task text per line.
    ///
    /// Blank lines cannot address a task and are dropped here; everything
    /// else is kept verbatim minus the line terminator.
    pub fn read_todo_lines(&self) -> Result<Vec<String>> {
        self.init()?;
        let content = fs::read_to_string(self.todo_path())?;
        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Rewrite the active store with the given task texts (atomic)
    pub fn write_todo_lines<'a, I>(&self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.init()?;

        let mut data = String::new();
        let mut count = 0usize;
        for line in lines {
            data.push_str(line);
            data.push('\n');
            count += 1;
        }

        write_atomic(&self.todo_path(), data.as_bytes())?;
        debug!(count, path = %self.todo_path().display(), "rewrote active store");
        Ok(())
    }

    // =========================================================================
    // Archive store I/O
    // =========================================================================

    /// Append one line to the archive store.
    ///
    /// The archive is never rewritten or truncated; completed tasks only
    /// accumulate.
    pub fn append_done_line(&self, line: &str) -> Result<()> {
        self.init()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.done_path())?;
        writeln!(file, "{}", line)?;
        file.sync_all()?;

        debug!(path = %self.done_path().display(), "appended archive line");
        Ok(())
    }
}

/// Write data atomically using temp file + rename.
///
/// Ensures the file is either fully written or not touched at all; a reader
/// never sees a partial rewrite.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Default data directory: `~/.todone`
pub fn default_data_dir() -> Result<PathBuf> {
    let base = directories::BaseDirs::new().ok_or(Error::HomeNotFound)?;
    Ok(base.home_dir().join(DATA_DIR))
}
