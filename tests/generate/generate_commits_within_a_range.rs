use crate::common::command::{
    backdate_generate, commit_count, commit_dates, git_repository_dir, plain_dir, run_backdate_command,
    run_git_command,
};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Word;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::across_new_year("2023-12-30", "2024-01-02", 10)]
#[case::across_leap_day("2024-02-27", "2024-03-02", 12)]
#[case::whole_year("2019-01-01", "2019-12-31", 15)]
fn generate_commits_within_a_range(
    git_repository_dir: TempDir,
    #[case] start: &str,
    #[case] end: &str,
    #[case] count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = git_repository_dir;
    let file_name = format!("{}.txt", Word().fake::<String>());

    backdate_generate(
        repository_dir.path(),
        &file_name,
        &count.to_string(),
        start,
        end,
    )
    .assert()
    .success();

    assert_eq!(commit_count(repository_dir.path())?, count);

    for (author_date, committer_date, _) in commit_dates(repository_dir.path())? {
        let day = &author_date[..10];
        assert!(day >= start && day <= end, "{} is outside {}..{}", day, start, end);
        assert_eq!(author_date, committer_date);
    }

    let content = std::fs::read_to_string(repository_dir.path().join(&file_name))?;
    assert_eq!(content.lines().count(), count);

    Ok(())
}

#[rstest]
fn same_seed_generates_the_same_dates(
    git_repository_dir: TempDir,
    plain_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let first_dir = git_repository_dir;
    let second_dir = plain_dir;
    run_git_command(second_dir.path(), &["init", "--quiet"])
        .assert()
        .success();
    run_git_command(second_dir.path(), &["config", "user.name", "fake_user"])
        .assert()
        .success();
    run_git_command(
        second_dir.path(),
        &["config", "user.email", "fake_email@email.com"],
    )
    .assert()
    .success();
    run_git_command(second_dir.path(), &["config", "commit.gpgsign", "false"])
        .assert()
        .success();

    for dir in [&first_dir, &second_dir] {
        let repo = dir.path().to_string_lossy().to_string();
        run_backdate_command(&[
            "--repo",
            &repo,
            "--file",
            "contribution.txt",
            "--count",
            "6",
            "--start",
            "2020-01-01",
            "--end",
            "2020-12-31",
            "--seed",
            "1234",
        ])
        .assert()
        .success();
    }

    assert_eq!(
        commit_dates(first_dir.path())?,
        commit_dates(second_dir.path())?
    );

    Ok(())
}
