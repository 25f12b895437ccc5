use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use benchrun::display;
use benchrun::runner;
use benchrun::stats;

#[derive(Parser)]
#[command(
    name = "benchrun",
    version,
    about = "Run an executable repeatedly and report wall-clock timing statistics"
)]
struct Cli {
    /// Path to the executable under test
    executable: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    runner::validate_executable(&cli.executable)?;

    let samples = runner::run_benchmark(&cli.executable)?;

    // NUM_EXECUTIONS >= 2, so the summary is always defined here.
    if let Some(summary) = stats::summarize(&samples) {
        print!("{}", display::format_summary(&samples, &summary));
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
