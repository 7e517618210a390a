//! Configuration module
//!
//! Loads the optional TOML configuration file and merges command-line
//! overrides into it.

mod types;

pub use types::{ColorMode, Config};

use crate::error::{Result, TermdownError};
use std::fs;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        TermdownError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Load `path` if given, otherwise use defaults, then apply overrides
pub fn resolve(path: Option<&Path>, color: Option<ColorMode>, term: Option<String>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load(path)?,
        None => Config::default(),
    };

    if let Some(color) = color {
        config.display.color = color;
    }
    if term.is_some() {
        config.display.term = term;
    }

    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.input.read_unit == 0 {
        return Err(TermdownError::Config(
            "input.read_unit must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("termdown.toml");
        fs::write(
            &config_path,
            "[display]\ncolor = \"always\"\nterm = \"vt100\"\n\n[input]\nread_unit = 16\n",
        )
        .unwrap();

        let config = load(&config_path).unwrap();
        assert_eq!(config.display.color, ColorMode::Always);
        assert_eq!(config.display.term.as_deref(), Some("vt100"));
        assert_eq!(config.input.read_unit, 16);
    }

    #[test]
    fn test_load_missing_config() {
        let result = load(Path::new("/nonexistent/termdown.toml"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Cannot read config from"));
    }

    #[test]
    fn test_load_rejects_zero_read_unit() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("termdown.toml");
        fs::write(&config_path, "[input]\nread_unit = 0\n").unwrap();

        let err = load(&config_path).unwrap_err();
        assert!(err.to_string().contains("read_unit"));
    }

    #[test]
    fn test_load_malformed_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("termdown.toml");
        fs::write(&config_path, "[display\n").unwrap();

        let err = load(&config_path).unwrap_err();
        assert!(matches!(err, TermdownError::TomlParse(_)));
    }

    #[test]
    fn test_overrides_win() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("termdown.toml");
        fs::write(&config_path, "[display]\ncolor = \"always\"\nterm = \"vt100\"\n").unwrap();

        let config = resolve(
            Some(&config_path),
            Some(ColorMode::Never),
            Some("xterm".to_string()),
        )
        .unwrap();
        assert_eq!(config.display.color, ColorMode::Never);
        assert_eq!(config.display.term.as_deref(), Some("xterm"));
    }

    #[test]
    fn test_resolve_without_file() {
        let config = resolve(None, None, None).unwrap();
        assert_eq!(config, Config::default());
    }
}
