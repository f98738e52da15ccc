mod cli;
mod commands;

use anyhow::Result;
use cc_config::Config;
use clap::Parser;

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config = Config::load()?;

    match cli.command {
        cli::Commands::Price {
            template,
            values,
            json,
            submission,
        } => commands::price::handle(&template, &values, json, submission, &config),
        cli::Commands::Template(cmd) => commands::template::handle(cmd),
        cli::Commands::Elements => commands::elements::handle(),
        cli::Commands::Config => commands::config::handle(&config),
    }
}
