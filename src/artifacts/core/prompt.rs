use crate::artifacts::history::request::GenerateOptions;
use derive_new::new;
use std::io::{BufRead, Write};

pub const BANNER: &str = "--- Git History Generator ---";
pub const REPO_PATH_PROMPT: &str = "Enter Repo Path (absolute path): ";
pub const FILE_NAME_PROMPT: &str = "Enter File Name to modify (e.g., contribution.txt): ";
pub const TOTAL_COMMITS_PROMPT: &str = "Enter Total Number of Commits: ";
pub const START_DATE_PROMPT: &str = "Enter Start Date (YYYY-MM-DD): ";
pub const END_DATE_PROMPT: &str = "Enter End Date (YYYY-MM-DD): ";

/// Line-based question/answer loop over any reader and writer
#[derive(new)]
pub struct Prompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        let mut answer = String::new();
        if self.reader.read_line(&mut answer)? == 0 {
            anyhow::bail!("unexpected end of input while waiting for: {}", question.trim());
        }

        Ok(answer.trim().to_string())
    }

    /// Ask only for the values that were not given on the command line.
    ///
    /// The banner is printed once, before the first question.
    pub fn fill(&mut self, partial: PartialOptions) -> anyhow::Result<GenerateOptions> {
        if partial.is_complete() {
            return partial.into_options();
        }

        writeln!(self.writer, "{}", BANNER)?;

        let repo_path = self.answer_or_ask(partial.repo_path, REPO_PATH_PROMPT)?;
        let file_name = self.answer_or_ask(partial.file_name, FILE_NAME_PROMPT)?;
        let total_commits = self.answer_or_ask(partial.total_commits, TOTAL_COMMITS_PROMPT)?;
        let start_date = self.answer_or_ask(partial.start_date, START_DATE_PROMPT)?;
        let end_date = self.answer_or_ask(partial.end_date, END_DATE_PROMPT)?;

        Ok(GenerateOptions::new(
            repo_path,
            file_name,
            total_commits,
            start_date,
            end_date,
            partial.seed,
        ))
    }

    fn answer_or_ask(&mut self, given: Option<String>, question: &str) -> anyhow::Result<String> {
        match given {
            Some(value) => Ok(value),
            None => self.ask(question),
        }
    }
}

/// Options as they arrive from the command line, any of which may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct PartialOptions {
    pub repo_path: Option<String>,
    pub file_name: Option<String>,
    pub total_commits: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub seed: Option<u64>,
}

impl PartialOptions {
    pub fn is_complete(&self) -> bool {
        self.repo_path.is_some()
            && self.file_name.is_some()
            && self.total_commits.is_some()
            && self.start_date.is_some()
            && self.end_date.is_some()
    }

    fn into_options(self) -> anyhow::Result<GenerateOptions> {
        match self {
            PartialOptions {
                repo_path: Some(repo_path),
                file_name: Some(file_name),
                total_commits: Some(total_commits),
                start_date: Some(start_date),
                end_date: Some(end_date),
                seed,
            } => Ok(GenerateOptions::new(
                repo_path,
                file_name,
                total_commits,
                start_date,
                end_date,
                seed,
            )),
            _ => anyhow::bail!("missing generation options"),
        }
    }
}
