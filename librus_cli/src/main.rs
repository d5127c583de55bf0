mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "librus")]
#[command(about = "Read homework from the Librus Synergia school portal")]
struct Cli {
    /// Output format: table, json, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the credentials can log in
    Validate(commands::validate::ValidateArgs),
    /// List homework and events in a date window
    Homework(commands::homework::HomeworkArgs),
    /// Refresh homework periodically until interrupted
    Watch(commands::watch::WatchArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("librus_api=info".parse()?)
                .add_directive("librus=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);
    let client = commands::build_client();

    match &cli.command {
        Commands::Validate(args) => commands::validate::run(args, &client, &format).await?,
        Commands::Homework(args) => commands::homework::run(args, &client, &format).await?,
        Commands::Watch(args) => commands::watch::run(args, &client, &format).await?,
    }

    Ok(())
}
