//! Terminal display module
//!
//! Decides whether output is styled and writes rendered documents out.

mod terminal;
mod writer;

pub use terminal::should_use_colors;
pub use writer::write_rendered;
