use crate::common::command::{backdate_generate, commit_count, commit_dates, git_repository_dir};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn generate_commits_on_a_single_day(
    git_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = git_repository_dir;

    backdate_generate(
        repository_dir.path(),
        "contribution.txt",
        "3",
        "2024-01-01",
        "2024-01-01",
    )
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "Generating 3 commits between 2024-01-01 and 2024-01-01...",
    ))
    .stdout(predicate::str::is_match(
        r"\[1/3\] Committed on 2024-01-01 \d{2}:\d{2}:\d{2}",
    )?)
    .stdout(predicate::str::contains("[3/3] Committed on 2024-01-01 "))
    .stdout(predicate::str::contains("Success! Commits generated."))
    .stdout(predicate::str::contains(
        "Run 'git push' to update your remote repository.",
    ));

    assert_eq!(commit_count(repository_dir.path())?, 3);

    // author and committer dates are pinned to the same instant
    let commits = commit_dates(repository_dir.path())?;
    assert_eq!(commits.len(), 3);
    for (author_date, committer_date, subject) in &commits {
        assert!(author_date.starts_with("2024-01-01 "));
        assert_eq!(author_date, committer_date);
        assert_eq!(subject, &format!("Backdated commit: {}", author_date));
    }

    // every commit appended exactly one line
    let content = std::fs::read_to_string(repository_dir.path().join("contribution.txt"))?;
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert!(line.starts_with("Commit on 2024-01-01 "));
    }

    // the appended lines are the committed timestamps
    let mut committed = commits
        .iter()
        .map(|(author_date, _, _)| format!("Commit on {}", author_date))
        .collect::<Vec<_>>();
    let mut appended = lines.iter().map(|line| line.to_string()).collect::<Vec<_>>();
    committed.sort();
    appended.sort();
    assert_eq!(committed, appended);

    Ok(())
}

#[rstest]
fn generate_commits_onto_an_existing_history(
    git_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = git_repository_dir;

    backdate_generate(
        repository_dir.path(),
        "contribution.txt",
        "2",
        "2022-05-10",
        "2022-05-10",
    )
    .assert()
    .success();

    backdate_generate(
        repository_dir.path(),
        "contribution.txt",
        "2",
        "2021-01-01",
        "2021-01-01",
    )
    .assert()
    .success();

    assert_eq!(commit_count(repository_dir.path())?, 4);

    let content = std::fs::read_to_string(repository_dir.path().join("contribution.txt"))?;
    assert_eq!(content.lines().count(), 4);

    Ok(())
}
