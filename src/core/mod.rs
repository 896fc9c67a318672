pub mod districts;
pub mod etl;
pub mod filter;
pub mod parser;
pub mod repository;
pub mod writer;

pub use crate::domain::model::{
    DeliveryWindow, FilterCriteria, FilterOutcome, LoadedOrders, Order, RunSummary,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, RunLog, Storage};
pub use crate::utils::error::Result;
