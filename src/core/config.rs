use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_prompt() -> String {
    "fx> ".to_string()
}

fn default_true() -> bool {
    true
}

/// Presentation settings for the shell. Rates are fixed and not configurable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_true")]
    pub show_rates_on_start: bool,
    #[serde(default)]
    pub show_history_on_exit: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            prompt: default_prompt(),
            show_rates_on_start: true,
            show_history_on_exit: false,
        }
    }
}

impl AppConfig {
    /// Loads the default config file, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "fxconv", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        // An empty document deserializes to null, treat it as all defaults.
        if config_str.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
prompt: "convert> "
show_rates_on_start: false
show_history_on_exit: true
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.prompt, "convert> ");
        assert!(!config.show_rates_on_start);
        assert!(config.show_history_on_exit);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_yaml::from_str("show_history_on_exit: true").unwrap();
        assert_eq!(config.prompt, "fx> ");
        assert!(config.show_rates_on_start);
        assert!(config.show_history_on_exit);
    }

    #[test]
    fn test_load_from_path() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "prompt: \"$ \"")?;
        let config = AppConfig::load_from_path(file.path())?;
        assert_eq!(config.prompt, "$ ");

        let empty = tempfile::NamedTempFile::new()?;
        assert_eq!(AppConfig::load_from_path(empty.path())?, AppConfig::default());
        Ok(())
    }

    #[test]
    fn test_load_from_path_errors() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let missing = dir.path().join("nope.yaml");
        let err = AppConfig::load_from_path(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));

        let bad = dir.path().join("bad.yaml");
        fs::write(&bad, "show_rates_on_start: [not, a, bool]")?;
        let err = AppConfig::load_from_path(&bad).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        Ok(())
    }
}
