use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Directories created at startup, relative to the working directory.
/// The configured log and result paths do not have to point inside them.
pub const OUTPUT_DIRECTORIES: [&str; 2] = ["logs", "results"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "delivery-filter")]
#[command(about = "Filters delivery orders by district and a 30-minute delivery window")]
pub struct CliArgs {
    /// Path to the JSON settings file
    #[arg(long, default_value = super::DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Path to the order CSV file
    #[arg(long, default_value = super::DEFAULT_ORDERS_PATH)]
    pub orders: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

pub fn create_output_directories(root: &Path) -> Result<()> {
    for dir in OUTPUT_DIRECTORIES {
        std::fs::create_dir_all(root.join(dir))?;
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    // Parent directories are not created; a missing one is a write failure.
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);
        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}
