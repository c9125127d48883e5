//! Error type for the lineage CLI.

use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use lineage::LayoutError;

/// Errors surfaced to the user by the CLI.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("configuration file not found: {}", .0.display())]
    #[diagnostic(help("pass --config with an existing TOML file, or drop the flag to use defaults"))]
    MissingConfig(PathBuf),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid chart input: {0}")]
    #[diagnostic(help("the input must be a JSON array of {{\"table\", \"deps\", \"engine\"}} records"))]
    Input(#[from] serde_json::Error),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
