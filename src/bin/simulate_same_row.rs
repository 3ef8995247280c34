use clap::Parser;
use same_row::{checked_trials, init_tracing, Report, DEFAULT_ROWS};

/// Probability that two people sit in the same row (rows of 5, 6 and 7 seats).
#[derive(Parser, Debug)]
#[command(author)]
struct Cli {
    /// number of Monte Carlo trials
    #[arg(short = 'n', long, default_value_t = 200_000, allow_negative_numbers = true)]
    trials: i64,

    /// random seed (optional)
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let trials = checked_trials(cli.trials)?;
    let report = Report::compute(&DEFAULT_ROWS, trials, cli.seed)?;
    print!("{}", report);
    Ok(())
}
