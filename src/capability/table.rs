use std::collections::HashMap;

use super::{Capabilities, Capability};

/// Capability backend backed by a fixed table of byte strings.
///
/// Parameterized entries use `%d`, replaced by the decimal parameter.
#[derive(Debug, Clone, Default)]
pub struct FixedTable {
    entries: HashMap<&'static str, Vec<u8>>,
}

impl FixedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// ANSI sequences, with the color index passed through unchanged
    pub fn ansi() -> Self {
        Self::new()
            .with_entry("bold", b"\x1b[1m")
            .with_entry("smul", b"\x1b[4m")
            .with_entry("sgr0", b"\x1b[0m")
            .with_entry("setf", b"\x1b[3%dm")
    }

    pub fn with_entry(mut self, name: &'static str, sequence: &[u8]) -> Self {
        self.entries.insert(name, sequence.to_vec());
        self
    }
}

impl Capabilities for FixedTable {
    fn resolve(&self, cap: Capability) -> Option<Vec<u8>> {
        let template = self.entries.get(cap.name())?;

        let Some(param) = cap.parameter() else {
            return Some(template.clone());
        };

        let value = param.to_string();
        let mut expanded = Vec::with_capacity(template.len() + value.len());
        let mut rest = template.as_slice();
        while let Some(pos) = rest.windows(2).position(|w| w == b"%d") {
            expanded.extend_from_slice(&rest[..pos]);
            expanded.extend_from_slice(value.as_bytes());
            rest = &rest[pos + 2..];
        }
        expanded.extend_from_slice(rest);

        Some(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_entries() {
        let table = FixedTable::ansi();
        assert_eq!(table.resolve(Capability::Bold), Some(b"\x1b[1m".to_vec()));
        assert_eq!(
            table.resolve(Capability::Underline),
            Some(b"\x1b[4m".to_vec())
        );
        assert_eq!(table.resolve(Capability::Reset), Some(b"\x1b[0m".to_vec()));
    }

    #[test]
    fn test_parameter_substitution() {
        let table = FixedTable::ansi();
        assert_eq!(
            table.resolve(Capability::Foreground(2)),
            Some(b"\x1b[32m".to_vec())
        );

        let table = FixedTable::new().with_entry("setf", b"<%d|%d>");
        assert_eq!(
            table.resolve(Capability::Foreground(12)),
            Some(b"<12|12>".to_vec())
        );
    }

    #[test]
    fn test_missing_entry() {
        let table = FixedTable::new().with_entry("bold", b"B");
        assert_eq!(table.resolve(Capability::Underline), None);
        assert_eq!(table.resolve(Capability::Foreground(1)), None);
    }
}
