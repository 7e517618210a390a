//! Command-line interface module
//!
//! Reads a markdown document from a file or stdin, renders it for the
//! terminal and writes the result to stdout.

pub mod render;
