//! todone show command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct ShowOptions {
    pub number: usize,
    pub project: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct ShowOutput {
    number: usize,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<String>,
}

pub fn run(opts: ShowOptions) -> Result<()> {
    let store = super::open_store(opts.data_dir)?;
    let index = super::item_index(opts.number)?;

    let record = store.get(index, opts.project.as_deref())?;
    let output = ShowOutput {
        number: opts.number,
        text: record.text.clone(),
        project: record.project.clone(),
    };

    let human = HumanOutput::new(output.text.clone());

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "show",
        &output,
        Some(&human),
    )
}
