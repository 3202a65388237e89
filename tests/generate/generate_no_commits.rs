use crate::common::command::{backdate_generate, commit_count, git_repository_dir};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn generate_no_commits(git_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = git_repository_dir;

    backdate_generate(
        repository_dir.path(),
        "contribution.txt",
        "0",
        "2024-01-01",
        "2024-12-31",
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("Generating 0 commits"))
    .stdout(predicate::str::contains("Committed on").not())
    .stdout(predicate::str::contains("Success! Commits generated."));

    assert_eq!(commit_count(repository_dir.path())?, 0);
    assert!(!repository_dir.path().join("contribution.txt").exists());

    Ok(())
}

#[rstest]
fn negative_commit_count_generates_nothing(
    git_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = git_repository_dir;

    backdate_generate(
        repository_dir.path(),
        "contribution.txt",
        "-1",
        "2024-01-01",
        "2024-12-31",
    )
    .assert()
    .code(0)
    .stdout(predicate::str::contains(
        "Generating -1 commits between 2024-01-01 and 2024-12-31...",
    ))
    .stdout(predicate::str::contains("Committed on").not())
    .stderr(predicate::str::contains("Invalid number.").not());

    assert_eq!(commit_count(repository_dir.path())?, 0);
    assert!(!repository_dir.path().join("contribution.txt").exists());

    Ok(())
}
