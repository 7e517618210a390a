//! Terminal capability adapter
//!
//! Resolves symbolic styling requests against a capability backend and
//! appends the resulting control bytes to an explicit target buffer.
//! Backends:
//! - `Terminfo`: the terminal database for `$TERM` (or an override)
//! - `FixedTable`: a fixed ANSI table, for exact-byte assertions
//! - `NoCapabilities`: plain output

mod database;
mod padding;
#[cfg(test)]
mod table;

pub use database::Terminfo;
#[cfg(test)]
pub use table::FixedTable;

use crate::buffer::Buffer;

/// A styling operation the renderer can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Bold,
    Underline,
    Reset,
    /// Foreground color, indexed in the `setf` palette
    Foreground(u8),
}

impl Capability {
    /// Terminal database name of the capability
    pub fn name(self) -> &'static str {
        match self {
            Capability::Bold => "bold",
            Capability::Underline => "smul",
            Capability::Reset => "sgr0",
            Capability::Foreground(_) => "setf",
        }
    }

    /// Parameter passed to the capability string, if any
    pub fn parameter(self) -> Option<u8> {
        match self {
            Capability::Foreground(color) => Some(color),
            _ => None,
        }
    }
}

/// Source of capability strings for the active terminal
pub trait Capabilities {
    /// Parameter-expanded bytes for `cap`, with padding markers still in
    /// place, or `None` when the terminal does not provide it.
    fn resolve(&self, cap: Capability) -> Option<Vec<u8>>;
}

/// Backend that never styles anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCapabilities;

impl Capabilities for NoCapabilities {
    fn resolve(&self, _cap: Capability) -> Option<Vec<u8>> {
        None
    }
}

/// Append the control bytes for `cap` to `out`.
///
/// A capability the backend cannot resolve appends nothing.
pub fn emit(out: &mut Buffer, caps: &dyn Capabilities, cap: Capability) {
    if let Some(sequence) = caps.resolve(cap) {
        padding::put_padded(out, &sequence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::OUTPUT_UNIT;

    #[test]
    fn test_capability_names() {
        assert_eq!(Capability::Bold.name(), "bold");
        assert_eq!(Capability::Underline.name(), "smul");
        assert_eq!(Capability::Reset.name(), "sgr0");
        assert_eq!(Capability::Foreground(3).name(), "setf");
        assert_eq!(Capability::Foreground(3).parameter(), Some(3));
        assert_eq!(Capability::Bold.parameter(), None);
    }

    #[test]
    fn test_emit_with_no_capabilities_is_noop() {
        let mut out = Buffer::new(OUTPUT_UNIT);
        emit(&mut out, &NoCapabilities, Capability::Bold);
        emit(&mut out, &NoCapabilities, Capability::Foreground(2));
        assert!(out.is_empty());
    }

    #[test]
    fn test_emit_appends_after_existing_content() {
        let mut out = Buffer::new(OUTPUT_UNIT);
        out.put(b"x");
        emit(&mut out, &FixedTable::ansi(), Capability::Underline);
        assert_eq!(out.as_bytes(), b"x\x1b[4m");
    }

    #[test]
    fn test_emit_strips_padding() {
        let table = FixedTable::ansi().with_entry("bold", b"\x1b[1m$<2>");
        let mut out = Buffer::new(OUTPUT_UNIT);
        emit(&mut out, &table, Capability::Bold);
        assert_eq!(out.as_bytes(), b"\x1b[1m");
    }
}
