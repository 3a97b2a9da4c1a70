//! todone add command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct AddOptions {
    pub text: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct AddOutput {
    number: usize,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<String>,
}

pub fn run(opts: AddOptions) -> Result<()> {
    let mut store = super::open_store(opts.data_dir)?;

    let record = store.add(opts.text)?;
    let output = AddOutput {
        number: store.len(),
        text: record.text,
        project: record.project,
    };

    let mut human = HumanOutput::new(format!("Added task {}: {}", output.number, output.text));
    if let Some(project) = &output.project {
        human.push_line(format!("tagged @{project}"));
    }

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "add",
        &output,
        Some(&human),
    )
}
