mod buffer;
mod capability;
mod cli;
mod config;
mod display;
mod entity;
mod error;
mod escape;
mod markdown;
mod renderer;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::cli::render::RenderArgs;
use crate::config::ColorMode;

/// Environment variable holding the log filter
const LOG_ENV: &str = "TERMDOWN_LOG";

#[derive(Parser)]
#[command(name = "termdown", version)]
#[command(about = "Render markdown as indented, styled terminal text", long_about = None)]
struct Cli {
    /// Markdown file to render (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// When to emit terminal styling
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Terminal type to use instead of $TERM
    #[arg(long)]
    term: Option<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = cli::render::run(RenderArgs {
        input: cli.input,
        config: cli.config,
        color: cli.color,
        term: cli.term,
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
