//! todone rm command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct RmOptions {
    pub number: usize,
    pub project: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct RmOutput {
    number: usize,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<String>,
    remaining: usize,
}

pub fn run(opts: RmOptions) -> Result<()> {
    let mut store = super::open_store(opts.data_dir)?;
    let index = super::item_index(opts.number)?;

    let removed = store.delete(index, opts.project.as_deref())?;
    let output = RmOutput {
        number: opts.number,
        text: removed.text,
        project: removed.project,
        remaining: store.len(),
    };

    let human = HumanOutput::new(format!("Deleted: {}", output.text));

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "rm",
        &output,
        Some(&human),
    )
}
