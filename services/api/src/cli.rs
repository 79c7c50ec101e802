use crate::commands::{run_aggregate, run_score, AggregateArgs, ScoreArgs};
use crate::server;
use candidate_eval::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Candidate Evaluation Scorer",
    about = "Score interviewer ratings and serve the candidate evaluation API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single set of interviewer ratings
    Score(ScoreArgs),
    /// Aggregate a candidate's evaluation history from a CSV export
    Aggregate(AggregateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// CSV of `candidate_id,applied_family` rows to preload into the candidate directory
    #[arg(long)]
    pub(crate) candidates: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Aggregate(args) => run_aggregate(args),
    }
}
