//! todone list command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task;

pub struct ListOptions {
    pub project: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct ListItem {
    number: usize,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<String>,
}

#[derive(Serialize)]
struct ListOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<String>,
    count: usize,
    tasks: Vec<ListItem>,
}

pub fn run(opts: ListOptions) -> Result<()> {
    let store = super::open_store(opts.data_dir)?;
    let view = store.list(opts.project.as_deref());

    let filter_key = opts
        .project
        .as_deref()
        .map(|name| task::project_key(name).to_string());

    let tasks: Vec<ListItem> = view
        .iter()
        .enumerate()
        .map(|(index, record)| ListItem {
            number: index + 1,
            text: record.text.clone(),
            project: record.project.clone(),
        })
        .collect();

    let mut human = HumanOutput::bare();
    if tasks.is_empty() {
        match &filter_key {
            Some(key) => human.push_line(format!("No tasks in @{key}.")),
            None => human.push_line("No tasks."),
        }
    } else {
        for (index, record) in view.iter().enumerate() {
            // Project-filtered listings drop the tag the filter implies
            let text = if filter_key.is_some() {
                record.text_without_project()
            } else {
                record.text.as_str()
            };
            human.push_line(format!("{:>3}. {}", index + 1, text));
        }
    }

    let output = ListOutput {
        project: filter_key,
        count: tasks.len(),
        tasks,
    };

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "list",
        &output,
        Some(&human),
    )
}
