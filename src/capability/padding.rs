//! Padding expansion for capability strings
//!
//! Capability strings may carry delay markers of the form `$<5>`, `$<2*>`
//! or `$<1.5/>`. Output here goes to an in-memory buffer with no line
//! speed, so a delay expands to zero pad characters.

use crate::buffer::Buffer;

/// Copy `sequence` into `out` byte by byte, expanding delay markers.
pub fn put_padded(out: &mut Buffer, sequence: &[u8]) {
    let mut pos = 0;

    while pos < sequence.len() {
        if sequence[pos] == b'$' && sequence.get(pos + 1) == Some(&b'<') {
            if let Some(len) = delay_len(&sequence[pos + 2..]) {
                pos += 2 + len + 1;
                continue;
            }
        }
        out.putc(sequence[pos]);
        pos += 1;
    }
}

/// Length of a well-formed delay body before its closing `>`
fn delay_len(rest: &[u8]) -> Option<usize> {
    let end = rest.iter().position(|&b| b == b'>')?;
    let body = &rest[..end];

    let digits = body
        .iter()
        .take_while(|b| b.is_ascii_digit() || **b == b'.')
        .count();
    if digits == 0 || !body[..digits].iter().any(u8::is_ascii_digit) {
        return None;
    }

    body[digits..]
        .iter()
        .all(|b| matches!(b, b'*' | b'/'))
        .then_some(end)
}
