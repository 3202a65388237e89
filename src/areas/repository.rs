use crate::areas::git::{CommandRunner, GitCli};
use crate::areas::workspace::Workspace;
use crate::artifacts::history::error::GenerateError;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// An existing working tree that commits are generated into
pub struct Repository<R: CommandRunner = GitCli> {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    runner: R,
}

impl<R: CommandRunner> Repository<R> {
    /// Open `path` as a repository; it must already carry a `.git` entry.
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>, runner: R) -> anyhow::Result<Self> {
        if !Workspace::has_git_dir(path) {
            return Err(GenerateError::NotARepository {
                path: path.to_path_buf(),
            }
            .into());
        }

        let path = path.canonicalize()?;
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            workspace,
            runner,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}
