use crate::core::ConfigProvider;
use crate::utils::error::{DeliveryError, Result};
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// `appsettings.json` as written by operators.
///
/// ```json
/// { "FilePaths": { "LogFilePath": "logs/log.txt", "ResultFilePath": "results/result.csv" } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppSettings {
    pub file_paths: Option<FilePaths>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilePaths {
    pub log_file_path: Option<String>,
    pub result_file_path: Option<String>,
}

impl AppSettings {
    /// Reads and parses a settings file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DeliveryError::IoError)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| DeliveryError::ConfigError {
            message: format!("JSON parsing error: {}", e),
        })
    }

    /// Checks the required keys and produces the configuration for one run.
    pub fn resolve(&self, orders_file_path: &str) -> Result<RunConfig> {
        let file_paths = validate_required_field("FilePaths", &self.file_paths)?;
        let log_file_path =
            validate_required_field("FilePaths.LogFilePath", &file_paths.log_file_path)?;
        let result_file_path =
            validate_required_field("FilePaths.ResultFilePath", &file_paths.result_file_path)?;

        let config = RunConfig {
            log_file_path: log_file_path.clone(),
            result_file_path: result_file_path.clone(),
            orders_file_path: orders_file_path.to_string(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Paths used for the lifetime of a run, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub log_file_path: String,
    pub result_file_path: String,
    pub orders_file_path: String,
}

impl ConfigProvider for RunConfig {
    fn log_file_path(&self) -> &str {
        &self.log_file_path
    }

    fn result_file_path(&self) -> &str {
        &self.result_file_path
    }

    fn orders_file_path(&self) -> &str {
        &self.orders_file_path
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("FilePaths.LogFilePath", &self.log_file_path)?;
        validate_path("FilePaths.ResultFilePath", &self.result_file_path)?;
        validate_path("orders", &self.orders_file_path)?;
        Ok(())
    }
}
