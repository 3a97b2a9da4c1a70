//! Command-line interface for todone
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.
//!
//! Item numbers on the command line are 1-based, matching what `todone
//! list` prints; they are translated to the store's 0-based indices here,
//! at the edge.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::storage::Storage;
use crate::store::TaskStore;

mod add;
mod done;
mod edit;
mod init;
mod list;
mod rm;
mod show;

/// todone - plain-text task lists
///
/// A CLI that keeps a personal task list in a flat text file, with optional
/// per-task project tags and an append-only log of completed items.
#[derive(Parser, Debug)]
#[command(name = "todone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory for the task stores (defaults to ~/.todone)
    #[arg(long, global = true, env = "TODONE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task to the end of the list
    Add {
        /// Task text; a leading "@project " token tags the task
        text: String,
    },

    /// List tasks, optionally filtered by project
    List {
        /// Only show tasks tagged with this project
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Show a single task
    Show {
        /// Item number as printed by `todone list`
        number: usize,

        /// Interpret the number within this project's listing
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Replace the text of a task
    Edit {
        /// Item number as printed by `todone list`
        number: usize,

        /// New task text
        text: String,

        /// Interpret the number within this project's listing
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Delete a task without completing it
    Rm {
        /// Item number as printed by `todone list`
        number: usize,

        /// Interpret the number within this project's listing
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Mark a task as completed and archive it
    Done {
        /// Item number as printed by `todone list`
        number: usize,

        /// Interpret the number within this project's listing
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Create the data directory and empty stores
    Init,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add { text } => add::run(add::AddOptions {
                text,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List { project } => list::run(list::ListOptions {
                project,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Show { number, project } => show::run(show::ShowOptions {
                number,
                project,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Edit {
                number,
                text,
                project,
            } => edit::run(edit::EditOptions {
                number,
                text,
                project,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Rm { number, project } => rm::run(rm::RmOptions {
                number,
                project,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Done { number, project } => done::run(done::DoneOptions {
                number,
                project,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Init => init::run(self.data_dir, self.json, self.quiet),
        }
    }
}

/// Open the task store for the resolved data directory
fn open_store(data_dir: Option<PathBuf>) -> Result<TaskStore> {
    let config = Config::load_default();
    let storage = Storage::resolve(&config, data_dir)?;
    TaskStore::open(storage)
}

/// Translate a 1-based item number from the command line to a 0-based index
fn item_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or(Error::InvalidItemNumber(number))
}
