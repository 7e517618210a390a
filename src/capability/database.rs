use std::cell::OnceCell;

use ::terminfo::capability::Value;
use ::terminfo::expand::{Context, Expand, Parameter};
use ::terminfo::Database;
use tracing::debug;

use super::{Capabilities, Capability};

/// `setf` palette index to `setaf` (ANSI) palette index
const SETF_TO_SETAF: [u8; 8] = [0, 4, 2, 6, 1, 5, 3, 7];

/// Capability backend reading the system terminal database.
///
/// The database is loaded on first use. A terminal type that cannot be
/// loaded leaves every capability unresolved, so output degrades to plain
/// text instead of failing.
pub struct Terminfo {
    term: Option<String>,
    database: OnceCell<Option<Database>>,
}

impl Terminfo {
    /// Backend for `term`, or for `$TERM` when `None`
    pub fn new(term: Option<String>) -> Self {
        Self {
            term,
            database: OnceCell::new(),
        }
    }

    /// Backend over an already loaded database
    #[cfg(test)]
    pub(crate) fn with_database(database: Database) -> Self {
        Self {
            term: None,
            database: OnceCell::from(Some(database)),
        }
    }

    fn database(&self) -> Option<&Database> {
        self.database
            .get_or_init(|| {
                let loaded = match &self.term {
                    Some(name) => Database::from_name(name),
                    None => Database::from_env(),
                };

                match loaded {
                    Ok(database) => {
                        debug!(term = ?self.term, "loaded terminal database");
                        Some(database)
                    }
                    Err(e) => {
                        debug!(term = ?self.term, error = %e, "terminal database unavailable, styling disabled");
                        None
                    }
                }
            })
            .as_ref()
    }

    fn string(&self, name: &str) -> Option<&[u8]> {
        match self.database()?.raw(name)? {
            Value::String(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Template and parameter for `cap`, preferring `setf` and falling back
    /// to `setaf` with the color translated into ANSI order.
    fn template(&self, cap: Capability) -> Option<(&[u8], Option<u8>)> {
        if let Some(sequence) = self.string(cap.name()) {
            return Some((sequence, cap.parameter()));
        }

        match cap {
            Capability::Foreground(color) => {
                let sequence = self.string("setaf")?;
                let ansi = SETF_TO_SETAF
                    .get(usize::from(color))
                    .copied()
                    .unwrap_or(color);
                Some((sequence, Some(ansi)))
            }
            _ => None,
        }
    }
}

impl Capabilities for Terminfo {
    fn resolve(&self, cap: Capability) -> Option<Vec<u8>> {
        let (template, parameter) = self.template(cap)?;
        let parameters: Vec<Parameter> = parameter
            .map(|p| Parameter::Number(i32::from(p)))
            .into_iter()
            .collect();

        let mut sequence = Vec::with_capacity(template.len());
        match template.expand(&mut sequence, &parameters, &mut Context::default()) {
            Ok(()) => Some(sequence),
            Err(e) => {
                debug!(capability = cap.name(), error = %e, "capability expansion failed");
                None
            }
        }
    }
}
