use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from settings.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub conversion: ConversionConfig,
    #[serde(default)]
    pub antiword: AntiwordConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Whether document extraction is available. When false, `convert`
    /// is a passthrough and files are left untouched.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Settings handed to the legacy Word extractor. They map onto the
/// `ANTIWORDHOME` and `LC_ALL` variables of the antiword subprocess.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntiwordConfig {
    #[serde(default = "default_antiword_home")]
    pub home: PathBuf,
    #[serde(default = "default_antiword_locale")]
    pub locale: String,
}

fn default_antiword_home() -> PathBuf {
    PathBuf::from("/usr/share/antiword")
}

fn default_antiword_locale() -> String {
    "nl_NL@euro IS-8859-15".to_string()
}

impl Default for AntiwordConfig {
    fn default() -> Self {
        Self {
            home: default_antiword_home(),
            locale: default_antiword_locale(),
        }
    }
}

impl Config {
    /// Load configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration from default location or return defaults
    pub fn load() -> Result<Self> {
        let default_paths = [
            PathBuf::from("config/settings.toml"),
            PathBuf::from("~/.config/textconv/settings.toml"),
        ];

        for path in &default_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.conversion.enabled);
        assert_eq!(config.antiword.home, PathBuf::from("/usr/share/antiword"));
        assert_eq!(config.antiword.locale, "nl_NL@euro IS-8859-15");
    }

    #[test]
    fn test_config_from_file() {
        let temp_file = std::env::temp_dir().join("test_textconv_config.toml");
        std::fs::write(
            &temp_file,
            r#"
[conversion]
enabled = false

[antiword]
home = "/opt/antiword"
locale = "C.UTF-8"
"#,
        )
        .unwrap();

        let config = Config::from_file(&temp_file).unwrap();
        assert!(!config.conversion.enabled);
        assert_eq!(config.antiword.home, PathBuf::from("/opt/antiword"));
        assert_eq!(config.antiword.locale, "C.UTF-8");
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let temp_file = std::env::temp_dir().join("test_textconv_partial.toml");
        std::fs::write(
            &temp_file,
            r#"
[conversion]
enabled = true
"#,
        )
        .unwrap();

        let config = Config::from_file(&temp_file).unwrap();
        assert!(config.conversion.enabled);
        assert_eq!(config.antiword.home, PathBuf::from("/usr/share/antiword"));
    }
}
