//! Shared output formatting for todone CLI commands.
//!
//! Every command emits either a human-readable rendering or, with `--json`,
//! an envelope with a stable schema version. Errors go through `emit_error`
//! so the front-end never panics on a failed operation.

use serde::Serialize;

use crate::error::{JsonError, Result};

pub const SCHEMA_VERSION: &str = "todone.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

/// Human-readable rendering of one command's result: an optional headline
/// plus plain lines (the task listing itself, mostly).
#[derive(Debug, Clone, Default)]
pub struct HumanOutput {
    header: Option<String>,
    lines: Vec<String>,
}

impl HumanOutput {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
            lines: Vec::new(),
        }
    }

    /// Output with no headline, for commands whose lines stand alone
    pub fn bare() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: Option<&HumanOutput>,
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    if let Some(human) = human {
        let rendered = format_human(human);
        if !rendered.is_empty() {
            println!("{}", rendered);
        }
    }

    Ok(())
}

pub fn emit_error(command: &str, err: &crate::error::Error, json: bool) -> Result<()> {
    let next_steps = error_next_steps(err);
    let hint = next_steps.first().map(|step| step.as_str());

    if json {
        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: JsonError,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            next_steps: Vec<String>,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: JsonError::from(err),
            next_steps,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    if let Some(hint) = hint {
        eprintln!("hint: {hint}");
    }
    Ok(())
}

pub fn format_human(output: &HumanOutput) -> String {
    let mut lines = Vec::new();
    if let Some(header) = &output.header {
        lines.push(header.clone());
    }
    for line in &output.lines {
        lines.push(line.clone());
    }
    lines.join("\n")
}

/// Best-effort command name for error envelopes, read straight from argv
/// because errors can fire before clap finishes parsing.
pub fn infer_command_name_from_args() -> String {
    std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with('-'))
        .unwrap_or_else(|| "todone".to_string())
}

fn error_next_steps(err: &crate::error::Error) -> Vec<String> {
    use crate::error::Error;

    match err {
        Error::OutOfRange { .. } | Error::InvalidItemNumber(_) => {
            vec!["todone list".to_string()]
        }
        Error::InvalidTask(_) => vec!["todone add \"<task text>\"".to_string()],
        Error::InvalidConfig(_) => vec!["fix config.toml then retry".to_string()],
        Error::HomeNotFound => {
            vec!["pass --data-dir or set TODONE_DATA_DIR".to_string()]
        }
        _ => Vec::new(),
    }
}
