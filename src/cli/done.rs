//! todone done command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct DoneOptions {
    pub number: usize,
    pub project: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct DoneOutput {
    number: usize,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<String>,
    remaining: usize,
}

pub fn run(opts: DoneOptions) -> Result<()> {
    let mut store = super::open_store(opts.data_dir)?;
    let index = super::item_index(opts.number)?;

    let completed = store.complete(index, opts.project.as_deref())?;
    let output = DoneOutput {
        number: opts.number,
        text: completed.text,
        project: completed.project,
        remaining: store.len(),
    };

    let human = HumanOutput::new(format!("Completed: {}", output.text));

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "done",
        &output,
        Some(&human),
    )
}
