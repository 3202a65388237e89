use backdate::areas::git::GitCli;
use backdate::areas::repository::Repository;
use backdate::artifacts::core::prompt::{PartialOptions, Prompter};
use backdate::artifacts::history::error::GenerateError;
use backdate::artifacts::history::request::CommitRequest;
use backdate::artifacts::history::sampler::TimestampSampler;
use clap::Parser;
use colored::Colorize;
use is_terminal::IsTerminal;

#[derive(Parser)]
#[command(
    name = "backdate",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Generate backdated git commits",
    long_about = "This tool appends a line to a file inside an existing git repository and commits it, \
    over and over, with the author and committer dates set to random instants inside a date range. \
    Any value not given as a flag is asked for interactively.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, help = "Path to the git repository")]
    repo: Option<String>,
    #[arg(short, long, help = "File to append to, relative to the repository")]
    file: Option<String>,
    #[arg(
        short = 'n',
        long,
        allow_negative_numbers = true,
        help = "Total number of commits to create"
    )]
    count: Option<String>,
    #[arg(short, long, help = "First day of the range (YYYY-MM-DD)")]
    start: Option<String>,
    #[arg(short, long, help = "Last day of the range (YYYY-MM-DD)")]
    end: Option<String>,
    #[arg(long, help = "Seed for reproducible timestamps")]
    seed: Option<u64>,
}

impl From<Cli> for PartialOptions {
    fn from(cli: Cli) -> Self {
        PartialOptions::new(cli.repo, cli.file, cli.count, cli.start, cli.end, cli.seed)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(error) = run(cli).await {
        let code = match error.downcast_ref::<GenerateError>() {
            Some(kind) if kind.is_benign() => {
                eprintln!("{}", kind);
                kind.exit_code()
            }
            Some(kind) => {
                eprintln!("{}", kind.to_string().red());
                kind.exit_code()
            }
            None => {
                eprintln!("{} {:#}", "Error:".red(), error);
                1
            }
        };

        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let options = Prompter::new(std::io::stdin().lock(), std::io::stdout()).fill(cli.into())?;
    let request = CommitRequest::try_from(&options)?;

    let repository = Repository::open(
        request.repo_path(),
        Box::new(std::io::stdout()),
        GitCli::default(),
    )?;
    let mut sampler = TimestampSampler::from_seed(options.seed);

    repository.generate(&request, &mut sampler).await?;

    Ok(())
}
