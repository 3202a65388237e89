use anyhow::Context;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

const GIT_DIR: &str = ".git";

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A `.git` directory, or a `.git` file for linked worktrees
    pub fn has_git_dir(path: &Path) -> bool {
        path.join(GIT_DIR).exists()
    }

    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }

    /// Append `line` and a newline, creating the file when it does not exist yet.
    pub fn append_line(&self, file_name: &str, line: &str) -> anyhow::Result<()> {
        let file_path = self.file_path(file_name);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .with_context(|| format!("failed to open {:?} for appending", file_path))?;

        writeln!(file, "{}", line)
            .with_context(|| format!("failed to append to {:?}", file_path))?;

        Ok(())
    }

    pub fn read_file(&self, file_name: &str) -> anyhow::Result<String> {
        let file_path = self.file_path(file_name);

        let content = std::fs::read_to_string(&file_path)
            .with_context(|| format!("failed to read {:?}", file_path))?;

        Ok(content)
    }
}
