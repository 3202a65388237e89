use crate::artifacts::history::date_range::DateRange;
use crate::artifacts::history::error::GenerateError;
use derive_new::new;
use std::path::PathBuf;

/// Raw inputs as typed by the user, before any validation
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct GenerateOptions {
    pub repo_path: String,
    pub file_name: String,
    pub total_commits: String,
    pub start_date: String,
    pub end_date: String,
    pub seed: Option<u64>,
}

/// Validated generation request
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitRequest {
    repo_path: PathBuf,
    file_name: String,
    total_commits: i64,
    range: DateRange,
}

impl CommitRequest {
    pub fn repo_path(&self) -> &PathBuf {
        &self.repo_path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn total_commits(&self) -> i64 {
        self.total_commits
    }

    /// A negative count asks for nothing, so it yields no iterations
    pub fn commit_iterations(&self) -> usize {
        usize::try_from(self.total_commits).unwrap_or(0)
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }
}

pub fn parse_total_commits(value: &str) -> anyhow::Result<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        GenerateError::Input {
            value: value.to_string(),
        }
        .into()
    })
}

impl TryFrom<&GenerateOptions> for CommitRequest {
    type Error = anyhow::Error;

    fn try_from(options: &GenerateOptions) -> anyhow::Result<Self> {
        let total_commits = parse_total_commits(&options.total_commits)?;
        let range = DateRange::try_parse(&options.start_date, &options.end_date)?;

        Ok(CommitRequest::new(
            PathBuf::from(options.repo_path.trim()),
            options.file_name.trim().to_string(),
            total_commits,
            range,
        ))
    }
}
