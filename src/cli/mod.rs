//! Terminal driver for the wizard: scripted runs from an answers file and
//! an interactive prompt flow. All wizard rules live in the library; this
//! layer only collects input and renders output.

pub mod output;
pub mod prompts;
mod runner;

pub use runner::run_cli;

use thiserror::Error;

use crate::errors::{ConfigError, GatewayError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown field key `{0}` in answers file")]
    UnknownField(String),
    #[error("field `{key}` expects {expected}")]
    InvalidAnswer {
        key: &'static str,
        expected: &'static str,
    },
    #[error("step `{0}` is incomplete; fill its required fields and retry")]
    BlockedStep(String),
    #[error("{0}")]
    Usage(String),
}
