use crate::areas::git::CommandRunner;
use crate::areas::repository::Repository;
use crate::artifacts::history::request::CommitRequest;
use crate::artifacts::history::sampler::TimestampSampler;
use crate::artifacts::history::timestamp::CommitTimestamp;
use colored::Colorize;
use rand::Rng;
use std::io::Write;

impl<R: CommandRunner> Repository<R> {
    /// Create `total_commits` backdated commits, one sampled timestamp each.
    /// A negative count creates none.
    ///
    /// Every iteration appends a line to the target file, stages it and commits
    /// with both author and committer dates pinned to the sampled instant. The
    /// first failing `git` invocation ends the run; commits made before it stay
    /// in the history.
    ///
    /// # Returns
    ///
    /// The number of commits created
    pub async fn generate<G: Rng>(
        &self,
        request: &CommitRequest,
        sampler: &mut TimestampSampler<G>,
    ) -> anyhow::Result<usize> {
        let total = request.total_commits();

        writeln!(
            self.writer(),
            "Generating {} commits between {}...",
            total,
            request.range()
        )?;
        debug_log!(
            "[generate] iterating: {} commits over {} days into {:?}",
            total,
            request.range().day_count(),
            self.workspace().file_path(request.file_name())
        );

        for index in 0..request.commit_iterations() {
            let timestamp = sampler.sample(request.range())?;

            self.workspace()
                .append_line(request.file_name(), &timestamp.file_line())?;
            self.stage(request.file_name()).await?;
            self.commit_at(&timestamp).await?;

            writeln!(
                self.writer(),
                "[{}/{}] Committed on {}",
                index + 1,
                total,
                timestamp
            )?;
        }

        let created = request.commit_iterations();
        debug_log!("[generate] done: {} commits", created);

        writeln!(self.writer(), "\n{}", "Success! Commits generated.".green())?;
        writeln!(
            self.writer(),
            "Run 'git push' to update your remote repository."
        )?;

        Ok(created)
    }

    async fn stage(&self, file_name: &str) -> anyhow::Result<()> {
        let args = vec!["add".to_string(), "--".to_string(), file_name.to_string()];

        self.runner().run(self.path(), &args, &[]).await
    }

    async fn commit_at(&self, timestamp: &CommitTimestamp) -> anyhow::Result<()> {
        let args = vec![
            "commit".to_string(),
            "-m".to_string(),
            timestamp.commit_message(),
        ];

        self.runner()
            .run(self.path(), &args, &timestamp.date_overrides())
            .await
    }
}
