use std::path::PathBuf;

use thiserror::Error;

/// Termdown error types
#[derive(Error, Debug)]
pub enum TermdownError {
    #[error("Unable to open input file \"{}\": {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for Termdown operations
pub type Result<T> = std::result::Result<T, TermdownError>;
