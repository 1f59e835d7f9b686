use crate::assess::{run_assess, run_questions, AssessArgs};
use crate::interview::{run_interview_command, InterviewArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use privacy_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Privacy Advisor",
    about = "Score digital privacy habits and recommend prioritized fixes",
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
    /// Assess an answer set stored as JSON and print the report
    Assess(AssessArgs),
    /// Walk through the questionnaire interactively, then print the report
    Interview(InterviewArgs),
    /// List the questionnaire in interview order
    Questions,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Interview(args) => run_interview_command(args),
        Command::Questions => run_questions(),
    }
}
