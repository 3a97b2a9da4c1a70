//! todone edit command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct EditOptions {
    pub number: usize,
    pub text: String,
    pub project: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct EditOutput {
    number: usize,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<String>,
}

pub fn run(opts: EditOptions) -> Result<()> {
    let mut store = super::open_store(opts.data_dir)?;
    let index = super::item_index(opts.number)?;

    let record = store.edit(index, opts.text, opts.project.as_deref())?;
    let output = EditOutput {
        number: opts.number,
        text: record.text,
        project: record.project,
    };

    let human = HumanOutput::new(format!("Updated task {}: {}", output.number, output.text));

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "edit",
        &output,
        Some(&human),
    )
}
