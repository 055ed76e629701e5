pub mod parse;
pub mod request;
pub mod response;
pub mod schema;

use crate::config::{Config, OutputFormat};
use crate::error::IdeacheckError;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ideacheck")]
#[command(
    author,
    version,
    about = "Parse and render invention-check reports from the idea checker service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file (default: ideacheck.yaml when present)
    #[arg(short, long, global = true, env = "IDEACHECK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a raw report and render it
    Parse(ParseArgs),

    /// Validate an idea and print the request body for /check
    Request(RequestArgs),

    /// Interpret a /check response body and render the outcome
    Response(ResponseArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct ParseArgs {
    /// Raw report file (reads stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Override output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write rendered output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct RequestArgs {
    /// The idea text to check
    pub idea: String,
}

#[derive(Parser, Clone)]
pub struct ResponseArgs {
    /// Response body file (reads stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// HTTP status the response came with
    #[arg(short, long, default_value_t = 200)]
    pub status: u16,

    /// Override output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write rendered output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Resolve and validate the config shared by all commands
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = Config::resolve(path)?;
    config.validate()?;
    Ok(config)
}

/// Read a whole input file, or stdin for `None` and "-"
pub fn read_input(path: Option<&Path>) -> Result<String, IdeacheckError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
