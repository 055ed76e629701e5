use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod check;
mod cli;
mod config;
mod error;
mod output;
mod parser;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Only show logs with --verbose; stdout carries the rendered report
    let filter = if cli.verbose {
        EnvFilter::new("ideacheck=debug")
    } else {
        EnvFilter::new("ideacheck=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Parse(args) => cli::parse::execute(args, config_path),
        Commands::Request(args) => cli::request::execute(args),
        Commands::Response(args) => cli::response::execute(args, config_path),
        Commands::Schema => cli::schema::execute(),
    }
}
