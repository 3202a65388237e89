//! Commit timestamps
//!
//! A timestamp lives for a single iteration of the generator: it is turned into
//! the appended file line, the commit message and the date overrides handed to
//! `git`, then dropped.

use chrono::{NaiveDate, NaiveDateTime};

/// Format understood by `git` for `GIT_AUTHOR_DATE` / `GIT_COMMITTER_DATE`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const AUTHOR_DATE_ENV: &str = "GIT_AUTHOR_DATE";
pub const COMMITTER_DATE_ENV: &str = "GIT_COMMITTER_DATE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommitTimestamp(NaiveDateTime);

impl CommitTimestamp {
    pub fn from_parts(date: NaiveDate, hour: u32, minute: u32, second: u32) -> anyhow::Result<Self> {
        let timestamp = date.and_hms_opt(hour, minute, second).ok_or_else(|| {
            anyhow::anyhow!(
                "invalid time of day {:02}:{:02}:{:02}",
                hour,
                minute,
                second
            )
        })?;

        Ok(CommitTimestamp(timestamp))
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn as_datetime(&self) -> &NaiveDateTime {
        &self.0
    }

    pub fn file_line(&self) -> String {
        format!("Commit on {}", self)
    }

    pub fn commit_message(&self) -> String {
        format!("Backdated commit: {}", self)
    }

    /// Author and committer date overrides, both pinned to this instant
    pub fn date_overrides(&self) -> Vec<(String, String)> {
        let value = self.to_string();

        vec![
            (AUTHOR_DATE_ENV.to_string(), value.clone()),
            (COMMITTER_DATE_ENV.to_string(), value),
        ]
    }
}

impl std::fmt::Display for CommitTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}
