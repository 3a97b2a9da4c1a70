//! todone init command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::Storage;

#[derive(Serialize)]
struct InitOutput {
    data_dir: PathBuf,
    todo_path: PathBuf,
    done_path: PathBuf,
    created: bool,
}

pub fn run(data_dir: Option<PathBuf>, json: bool, quiet: bool) -> Result<()> {
    let config = Config::load_default();
    let storage = Storage::resolve(&config, data_dir)?;

    let already = storage.is_initialized();
    storage.init()?;

    let output = InitOutput {
        data_dir: storage.data_dir().to_path_buf(),
        todo_path: storage.todo_path(),
        done_path: storage.done_path(),
        created: !already,
    };

    let header = if output.created {
        format!("Initialized task stores in {}", output.data_dir.display())
    } else {
        format!(
            "Task stores already present in {}",
            output.data_dir.display()
        )
    };
    let human = HumanOutput::new(header);

    emit_success(OutputOptions { json, quiet }, "init", &output, Some(&human))
}
