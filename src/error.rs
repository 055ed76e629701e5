use std::path::PathBuf;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum IdeacheckError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unsupported config version {0}")]
    UnsupportedVersion(u32),

    #[error("parser.snippet_limit must be greater than zero")]
    ZeroSnippetLimit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter an idea.")]
    EmptyIdea,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("HTTP error! status: {status}, message: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output to '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write to stdout: {0}")]
    Stdout(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
