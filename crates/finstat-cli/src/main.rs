//! CLI application for financial statement processing.

mod commands;
mod logging;
mod upload;

use clap::{Parser, Subcommand};

use commands::{classify, config, run};

/// Financial statements - sort documents and compute turnover statistics
#[derive(Parser)]
#[command(name = "finstat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a document tree and write turnover statistics
    Run(run::RunArgs),

    /// Show how file names would be classified
    Classify(classify::ClassifyArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let config = commands::load_config(cli.config.as_deref())?;
            logging::init(cli.verbose, Some(&config.logging))?;
            run::run(args, config).await
        }
        Commands::Classify(args) => {
            logging::init(cli.verbose, None)?;
            let config = commands::load_config(cli.config.as_deref())?;
            classify::run(args, &config)
        }
        Commands::Config(args) => {
            logging::init(cli.verbose, None)?;
            config::run(args, cli.config.as_deref()).await
        }
    }
}
