use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::buffer::{Buffer, OUTPUT_UNIT};
use crate::capability::{Capabilities, NoCapabilities, Terminfo};
use crate::config::{self, ColorMode, Config};
use crate::display::{should_use_colors, write_rendered};
use crate::error::{Result, TermdownError};
use crate::markdown;
use crate::renderer::Renderer;

/// Options for a render run
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    /// Markdown file to render; stdin when absent
    pub input: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub color: Option<ColorMode>,
    pub term: Option<String>,
}

/// Render a markdown document to stdout
pub fn run(args: RenderArgs) -> Result<()> {
    let config = config::resolve(args.config.as_deref(), args.color, args.term)?;

    let input = read_input(args.input.as_deref(), config.input.read_unit)?;
    debug!(bytes = input.len(), "read input");

    let caps = capabilities(&config);
    let output = render_bytes(input.as_bytes(), caps.as_ref()).into_bytes();
    drop(input);
    debug!(bytes = output.len(), "rendered document");

    write_rendered(io::stdout().lock(), &output);
    Ok(())
}

/// Render `input` into a fresh output buffer
pub fn render_bytes(input: &[u8], caps: &dyn Capabilities) -> Buffer {
    let renderer = Renderer::new(caps);
    let mut output = Buffer::new(OUTPUT_UNIT);
    markdown::render(&mut output, input, &renderer);
    output
}

fn capabilities(config: &Config) -> Box<dyn Capabilities> {
    if should_use_colors(config.display.color) {
        Box::new(Terminfo::new(config.display.term.clone()))
    } else {
        Box::new(NoCapabilities)
    }
}

/// Read the whole input from `path`, or stdin when `None`
fn read_input(path: Option<&Path>, read_unit: usize) -> Result<Buffer> {
    let mut input = Buffer::new(read_unit);

    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| TermdownError::Input {
                path: path.to_path_buf(),
                source,
            })?;
            input.fill_from(file)?;
        }
        None => {
            input.fill_from(io::stdin().lock())?;
        }
    }

    Ok(input)
}
