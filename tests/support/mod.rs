use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway data directory plus a command builder pointed at it.
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn todo_path(&self) -> PathBuf {
        self.dir.path().join("todo.txt")
    }

    pub fn done_path(&self) -> PathBuf {
        self.dir.path().join("done.txt")
    }

    pub fn write_todo(&self, contents: &str) {
        fs::write(self.todo_path(), contents).expect("write todo.txt");
    }

    pub fn read_todo(&self) -> String {
        fs::read_to_string(self.todo_path()).expect("read todo.txt")
    }

    pub fn read_done(&self) -> String {
        fs::read_to_string(self.done_path()).expect("read done.txt")
    }

    /// Command builder with the data directory pinned to this store.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("todone").expect("binary");
        cmd.env("TODONE_DATA_DIR", self.dir.path());
        cmd
    }
}
