use crate::convert::Unit;
use serde::{Deserialize, Serialize};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "plotcalc.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub converter: ConverterConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConverterConfig {
    // Unit assumed when the input carries none
    #[serde(default = "default_unit")]
    pub default_unit: Unit,

    // Print slots the display policy would hide
    #[serde(default)]
    pub show_hidden: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            default_unit: default_unit(),
            show_hidden: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn default_unit() -> Unit {
    Unit::SqFeet
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_defaults() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config.converter.default_unit, Unit::SqFeet);
        assert!(!config.converter.show_hidden);
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_full_config() {
        let config = Config::load_from_str(
            r#"
[converter]
default_unit = "acre"
show_hidden = true

[output]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.converter.default_unit, Unit::Acre);
        assert!(config.converter.show_hidden);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = Config::load_from_str(
            r#"
theme = "dark"

[converter]
default_unit = "gunta"
precision = 4
"#,
        )
        .unwrap();
        assert_eq!(config.converter.default_unit, Unit::Gunta);
    }

    #[test]
    fn test_invalid_unit_is_an_error() {
        let result = Config::load_from_str(
            r#"
[converter]
default_unit = "furlong"
"#,
        );
        assert!(result.is_err());
    }
}
