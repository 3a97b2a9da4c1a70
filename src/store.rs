//! The task store: the in-memory list and its two persistent stores.
//!
//! The store reads the active store fully into memory when opened, hands out
//! views (the whole list or a project-filtered slice), and rewrites the
//! active store after every mutation. Completing a task removes it from the
//! active store first and only then appends one line to the archive, so an
//! interrupted complete can lose the archive line but never duplicate the
//! task.
//!
//! Indices given to `get`, `edit`, `delete` and `complete` are positions in
//! the view selected by the `project` argument, not raw positions in the
//! underlying list. Resolution goes view position -> record id -> underlying
//! position, so two tasks with identical text can never be confused.

use chrono::Utc;
use tracing::debug;

use crate::error::{Error, Result};
use crate::storage::Storage;
use crate::task::{self, TaskRecord};

/// Task list bound to a storage location
#[derive(Debug)]
pub struct TaskStore {
    storage: Storage,
    items: Vec<TaskRecord>,
    next_id: u64,
}

impl TaskStore {
    /// Open the store, reading the active list into memory
    pub fn open(storage: Storage) -> Result<Self> {
        let mut store = Self {
            storage,
            items: Vec::new(),
            next_id: 1,
        };
        store.reload()?;
        Ok(store)
    }

    /// Re-read the active store, replacing the in-memory list
    pub fn reload(&mut self) -> Result<()> {
        let lines = self.storage.read_todo_lines()?;
        self.items.clear();
        for line in lines {
            let id = self.take_id();
            self.items.push(TaskRecord::new(id, line));
        }
        debug!(count = self.items.len(), "loaded active store");
        Ok(())
    }

    /// Storage backing this store
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Number of tasks in the unfiltered list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All tasks, or one project's tasks, in insertion order.
    ///
    /// The project name may carry the `@` marker or not; its case is
    /// compared as given. An unknown project yields an empty view, not an
    /// error.
    pub fn list(&self, project: Option<&str>) -> Vec<&TaskRecord> {
        match project {
            None => self.items.iter().collect(),
            Some(name) => {
                let key = task::project_key(name);
                self.items
                    .iter()
                    .filter(|item| item.project.as_deref() == Some(key))
                    .collect()
            }
        }
    }

    /// Task at `index` within the view selected by `project`.
    ///
    /// The bound check is against the view, not the unfiltered list.
    pub fn get(&self, index: usize, project: Option<&str>) -> Result<&TaskRecord> {
        let view = self.list(project);
        let len = view.len();
        view.into_iter()
            .nth(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Append a task to the end of the unfiltered list and flush.
    ///
    /// Placement ignores project membership: new tasks always go to the
    /// tail, whatever their tag.
    pub fn add(&mut self, text: impl Into<String>) -> Result<TaskRecord> {
        let text = text.into();
        task::validate_text(&text)?;

        let id = self.take_id();
        self.items.push(TaskRecord::new(id, text));
        self.flush()?;

        Ok(self.items[self.items.len() - 1].clone())
    }

    /// Replace the text of the task at `index` in the selected view.
    ///
    /// The project tag is re-derived from the new text, so an edit can move
    /// a task into or out of a project.
    pub fn edit(
        &mut self,
        index: usize,
        text: impl Into<String>,
        project: Option<&str>,
    ) -> Result<TaskRecord> {
        let text = text.into();
        task::validate_text(&text)?;

        let pos = self.resolve(index, project)?;
        self.items[pos].set_text(text);
        self.flush()?;

        Ok(self.items[pos].clone())
    }

    /// Remove the task at `index` in the selected view and flush
    pub fn delete(&mut self, index: usize, project: Option<&str>) -> Result<TaskRecord> {
        let pos = self.resolve(index, project)?;
        let removed = self.items.remove(pos);
        self.flush()?;
        Ok(removed)
    }

    /// Complete the task at `index` in the selected view.
    ///
    /// Removes it from the active store exactly as `delete` does, then
    /// appends the archived line with the completion timestamp. A failed
    /// removal leaves the archive untouched.
    pub fn complete(&mut self, index: usize, project: Option<&str>) -> Result<TaskRecord> {
        let removed = self.delete(index, project)?;

        let line = task::archive_line(&removed.text, Utc::now());
        self.storage.append_done_line(&line)?;
        debug!(text = %removed.text, "archived completed task");

        Ok(removed)
    }

    /// Map a view position to a position in the underlying list
    fn resolve(&self, index: usize, project: Option<&str>) -> Result<usize> {
        let id = self.get(index, project)?.id;
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(Error::OutOfRange {
                index,
                len: self.items.len(),
            })
    }

    fn flush(&self) -> Result<()> {
        self.storage
            .write_todo_lines(self.items.iter().map(|item| item.text.as_str()))
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
