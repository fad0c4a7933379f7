use std::io;
use std::path::PathBuf;

use fingerswipe_core::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum DriverError {
    #[error("invalid engine configuration: {0}")]
    #[diagnostic(help("max_points must be >= 3 and every threshold finite and non-negative"))]
    Config(#[from] ConfigError),

    #[error("cannot read config file {path}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config file {path} is not valid JSON")]
    ConfigSyntax {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: malformed observation frame: {source}")]
    Frame {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode swipe action")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
