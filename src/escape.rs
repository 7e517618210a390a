//! Literal text copying with indentation after line ends

use crate::buffer::Buffer;

/// Prefix reinserted after every line end
pub const INDENT: &[u8] = b"    ";

/// A line end followed by the indent
pub const NEWLINE_INDENT: &[u8] = b"\n    ";

/// Copy `text` into `out`, replacing each `\n` with a newline and the indent.
///
/// Nothing else is escaped: control sequences in the source reach the
/// terminal as they are.
pub fn escape_text(out: &mut Buffer, text: &[u8]) {
    for &byte in text {
        if byte == b'\n' {
            out.put(NEWLINE_INDENT);
        } else {
            out.putc(byte);
        }
    }
}
