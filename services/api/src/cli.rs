use crate::demo::{run_dashboard_stats, run_demo, DemoArgs, StatsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use progtrack::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Program Performance Reporting",
    about = "Run the program performance reporting service and dashboards from the command line",
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
    /// Compute oversight dashboard statistics from agency exports
    Dashboard {
        #[command(subcommand)]
        command: DashboardCommand,
    },
    /// Run a CLI walkthrough covering periods, validation, and statistics
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum DashboardCommand {
    /// Aggregate a status export CSV into dashboard statistics
    Stats(StatsArgs),
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
        Command::Dashboard {
            command: DashboardCommand::Stats(args),
        } => run_dashboard_stats(args),
        Command::Demo(args) => run_demo(args),
    }
}
