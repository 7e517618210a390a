use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::buffer::READ_UNIT;

/// Termdown configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal output settings
    pub display: Display,

    /// Input reading settings
    pub input: Input,
}

/// When to emit terminal styling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Style when stdout is a terminal, honoring NO_COLOR and CLICOLOR
    #[default]
    Auto,
    Always,
    Never,
}

/// Display configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    pub color: ColorMode,

    /// Terminal type to look up instead of $TERM
    pub term: Option<String>,
}

/// Input configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Input {
    /// Bytes requested per read
    pub read_unit: usize,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            read_unit: READ_UNIT,
        }
    }
}
