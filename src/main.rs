use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vdiff::AlignmentPolicy;
use vdiff::areas::comparator::Comparator;

#[derive(Parser)]
#[command(
    name = "vdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two versions of a text file line by line",
    long_about = "This command compares an old and a new version of a text file, \
    classifies every line as unchanged, added or removed, and prints a summary report. \
    Lines longer than 80 characters are compared in 80-character chunks.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The old version of the file")]
    old: PathBuf,
    #[arg(index = 2, help = "The new version of the file")]
    new: PathBuf,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = AlignmentPolicy::Lcs,
        help = "How changed lines are computed"
    )]
    policy: AlignmentPolicy,
    #[arg(short, long, help = "Log diagnostics to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let comparator = Comparator::new(&cli.old, &cli.new, Box::new(std::io::stdout()));
    comparator.compare(cli.policy)?;

    Ok(())
}
