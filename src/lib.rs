pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::app::pipelines::delivery_pipeline::DeliveryPipeline;
pub use crate::app::prompt::Prompter;
pub use crate::config::cli::LocalStorage;
pub use crate::config::{AppSettings, RunConfig};
pub use crate::core::{etl::DeliveryEngine, Order};
pub use crate::utils::error::{DeliveryError, Result};
pub use crate::utils::logger::{FileRunLog, MemoryRunLog};
