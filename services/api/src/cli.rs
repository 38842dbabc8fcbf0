use crate::render::{
    run_insight, run_insight_catalog, run_listings, run_options, InsightRunArgs, ListingsArgs,
};
use crate::server;
use brickview::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "BrickView",
    about = "Explore real estate listings and run the BrickView insight catalog",
    version
)]
struct Cli {
    /// SQLite dataset to read (overrides APP_DATABASE_PATH)
    #[arg(long, global = true)]
    database: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Filter listings and print the table with its dashboard summary
    Listings(ListingsArgs),
    /// Browse or run the predefined analytical queries
    Insights {
        #[command(subcommand)]
        command: InsightsCommand,
    },
    /// Print the values each listing filter accepts
    Options,
}

#[derive(Subcommand, Debug)]
enum InsightsCommand {
    /// List every question in the catalog
    List,
    /// Run one question by number or exact label
    Run(InsightRunArgs),
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
    let database = cli.database;
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args, database).await,
        Command::Listings(args) => run_listings(args, database),
        Command::Insights {
            command: InsightsCommand::List,
        } => {
            run_insight_catalog();
            Ok(())
        }
        Command::Insights {
            command: InsightsCommand::Run(args),
        } => run_insight(args, database),
        Command::Options => run_options(database),
    }
}
