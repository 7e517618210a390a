//! Writing rendered output

use std::io::{ErrorKind, Write};

/// Write `rendered` followed by one trailing newline.
///
/// A writer that stops accepting bytes early is not an error: a warning
/// with the byte counts goes to stderr and the newline is still attempted.
/// Returns the number of rendered bytes written.
pub fn write_rendered<W: Write>(mut out: W, rendered: &[u8]) -> usize {
    let written = write_partial(&mut out, rendered);
    if written < rendered.len() {
        eprintln!(
            "Warning: only {} output bytes written, out of {}",
            written,
            rendered.len()
        );
    }

    if let Err(e) = out.write_all(b"\n").and_then(|()| out.flush()) {
        tracing::debug!(error = %e, "trailing newline not written");
    }
    written
}

/// Write as much of `bytes` as the writer accepts
fn write_partial<W: Write>(out: &mut W, bytes: &[u8]) -> usize {
    let mut written = 0;
    while written < bytes.len() {
        match out.write(&bytes[written..]) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => {
                tracing::debug!(error = %e, written, "output write failed");
                break;
            }
        }
    }
    written
}
