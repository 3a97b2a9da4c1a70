//! Task records and project-tag parsing.
//!
//! A task is one line of free text in the active store. A task belongs to a
//! project when its text starts with `@<name> `: the marker, a non-empty
//! name, then a single space separating the tag from the rest of the text.
//! The project is derived from the text once when the record is built, so
//! list filtering never re-parses lines.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::{Error, Result};

/// Marker character that introduces a project tag.
pub const PROJECT_MARKER: char = '@';

/// Separator written between the task text and the completion timestamp in
/// the archive store.
pub const COMPLETED_SEPARATOR: &str = " COMPLETED:";

/// A single task held by the store.
///
/// `id` is a process-local sequence number assigned when the record enters
/// the store, at load or add. It is never persisted; it exists so a position
/// in a filtered view can be mapped back to the underlying record without
/// matching on text, which is ambiguous when two tasks read the same.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: u64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl TaskRecord {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        let text = text.into();
        let project = parse_project(&text);
        Self { id, text, project }
    }

    /// Replace the task text, re-deriving the project tag.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.project = parse_project(&self.text);
    }

    /// Task text with the project tag stripped, for project-filtered display.
    pub fn text_without_project(&self) -> &str {
        match &self.project {
            // marker + name + separating space
            Some(project) => &self.text[project.len() + 2..],
            None => &self.text,
        }
    }
}

/// Derive the project tag from raw task text.
///
/// Only a leading `@name ` token counts: `@work Buy milk` is tagged `work`,
/// while `@work` alone, `@ stray` and `plain text` carry no tag.
pub fn parse_project(text: &str) -> Option<String> {
    let rest = text.strip_prefix(PROJECT_MARKER)?;
    let name_end = rest.find(' ')?;
    if name_end == 0 {
        return None;
    }
    Some(rest[..name_end].to_string())
}

/// Strip the marker from a user-supplied project name, if present.
///
/// Users may say `work` or `@work`; both select the same project. The name
/// is compared case-sensitively against the derived tags.
pub fn project_key(name: &str) -> &str {
    name.strip_prefix(PROJECT_MARKER).unwrap_or(name)
}

/// Validate task text for add and edit.
///
/// The active store is line-oriented: blank text cannot address a task and
/// an embedded newline would split one task into two on reload.
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::InvalidTask("text is empty".to_string()));
    }
    if text.contains('\n') || text.contains('\r') {
        return Err(Error::InvalidTask(
            "text must be a single line".to_string(),
        ));
    }
    Ok(())
}

/// Format an archive line for a completed task.
pub fn archive_line(text: &str, completed_at: DateTime<Utc>) -> String {
    format!(
        "{}{}{}",
        text,
        COMPLETED_SEPARATOR,
        completed_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}
