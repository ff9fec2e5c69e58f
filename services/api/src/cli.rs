use crate::demo::{
    run_analytics, run_import_check, run_report, AnalyticsArgs, ImportArgs, ReportArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use talent_insight::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "TalentInsight",
    about = "Serve and inspect candidate skill analytics from the command line",
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
    /// Print an analytics view and optionally write it as a Word document
    Analytics(AnalyticsArgs),
    /// Print the report for one candidate
    Report(ReportArgs),
    /// Validate an import file and list the candidates it would add
    Import(ImportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Start with an empty candidate store
    #[arg(long)]
    pub(crate) no_seed: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analytics(args) => run_analytics(args),
        Command::Report(args) => run_report(args),
        Command::Import(args) => run_import_check(args),
    }
}
