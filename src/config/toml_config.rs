use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ZoneEtlError};
use crate::utils::validation::{
    normalize_origin_list, validate_non_empty_string, validate_origin_list, validate_path,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based alternative to the CLI flags, for scripted runs.
///
/// ```toml
/// [run]
/// customer = "Acme Logistics"
/// origins = ["840", "915"]
///
/// [input]
/// zone_table = "zones.csv"
///
/// [output]
/// path = "./output"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub run: RunConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub customer: String,
    pub origins: Vec<String>,
    pub verbose: Option<bool>,
    pub monitor: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub zone_table: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ZoneEtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| ZoneEtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.run.origins = normalize_origin_list(&config.run.origins);
        Ok(config)
    }

    pub fn verbose(&self) -> bool {
        self.run.verbose.unwrap_or(false)
    }

    pub fn monitor(&self) -> bool {
        self.run.monitor.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.zone_table", &self.input.zone_table)?;
        validate_path("output.path", &self.output.path)?;
        validate_non_empty_string("run.customer", &self.run.customer)?;
        validate_origin_list("run.origins", &self.run.origins)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn zone_table_path(&self) -> &str {
        &self.input.zone_table
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn origins(&self) -> &[String] {
        &self.run.origins
    }

    fn customer_name(&self) -> &str {
        &self.run.customer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[run]
customer = "Acme Logistics"
origins = ["84", "915", "915"]

[input]
zone_table = "zones.csv"

[output]
path = "./output"
"#;

    #[test]
    fn test_parse_normalizes_origins() {
        let config = TomlConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(config.run.customer, "Acme Logistics");
        assert_eq!(
            config.run.origins,
            vec!["084".to_string(), "915".to_string()]
        );
        assert!(!config.verbose());
        assert!(!config.monitor());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let result = TomlConfig::from_toml_str("not valid toml [");
        assert!(matches!(result, Err(ZoneEtlError::ConfigError { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_origins() {
        let config = TomlConfig::from_toml_str(
            r#"
[run]
customer = "Acme"
origins = ["bogus"]

[input]
zone_table = "zones.csv"

[output]
path = "./output"
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }
}
