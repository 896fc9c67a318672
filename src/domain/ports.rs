use crate::domain::model::{FilterCriteria, FilterOutcome, Order};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn log_file_path(&self) -> &str;
    fn result_file_path(&self) -> &str;
    fn orders_file_path(&self) -> &str;
}

/// Run log shared by every stage. Implementations never fail the caller.
pub trait RunLog: Send + Sync {
    fn log(&self, message: &str);
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Order>>;
    async fn transform(&self, orders: Vec<Order>, criteria: &FilterCriteria)
        -> Result<FilterOutcome>;
    /// Returns the written path, or `None` when the write failed and was logged.
    async fn load(&self, outcome: &FilterOutcome) -> Result<Option<String>>;
}
