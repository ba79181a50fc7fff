mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => commands::list(cli.output),
        Command::Show { cloud } => commands::show(&cloud, cli.output),
        Command::Parse { file } => commands::parse(&file, cli.output),
        Command::Discover { endpoint } => commands::discover(&endpoint, cli.output).await,
    }
}
