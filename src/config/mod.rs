pub mod cli;
pub mod settings;

pub use settings::{AppSettings, FilePaths, RunConfig};

pub const DEFAULT_CONFIG_PATH: &str = "appsettings.json";
pub const DEFAULT_ORDERS_PATH: &str = "orders.csv";
