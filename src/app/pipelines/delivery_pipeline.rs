use crate::core::filter;
use crate::core::repository::OrderRepository;
use crate::core::writer::render_result_csv;
use crate::core::{ConfigProvider, FilterCriteria, FilterOutcome, Order, Pipeline, RunLog, Storage};
use crate::utils::error::Result;
use std::sync::Arc;

/// Reads the order file, applies the two-stage filter and writes the result file.
pub struct DeliveryPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    log: Arc<dyn RunLog>,
}

impl<S: Storage, C: ConfigProvider> DeliveryPipeline<S, C> {
    pub fn new(storage: S, config: C, log: Arc<dyn RunLog>) -> Self {
        Self {
            storage,
            config,
            log,
        }
    }

    async fn write_result(&self, outcome: &FilterOutcome) -> Result<()> {
        let data = render_result_csv(&outcome.windowed)?;
        tracing::debug!("Writing result file ({} bytes)", data.len());
        self.storage
            .write_file(self.config.result_file_path(), &data)
            .await
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DeliveryPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Order>> {
        let repository = OrderRepository::new(&self.storage, self.log.as_ref());
        let loaded = repository.load(self.config.orders_file_path()).await;
        Ok(loaded.orders)
    }

    async fn transform(
        &self,
        orders: Vec<Order>,
        criteria: &FilterCriteria,
    ) -> Result<FilterOutcome> {
        Ok(filter::apply(&orders, criteria))
    }

    async fn load(&self, outcome: &FilterOutcome) -> Result<Option<String>> {
        let path = self.config.result_file_path().to_string();

        match self.write_result(outcome).await {
            Ok(()) => {
                self.log.log(&format!(
                    "Filtered {} orders, {} within the delivery window, result written to {}.",
                    outcome.matched.len(),
                    outcome.windowed.len(),
                    path
                ));
                Ok(Some(path))
            }
            Err(e) => {
                self.log
                    .log(&format!("Error writing result file {}: {}", path, e));
                tracing::error!("Could not write result file {}: {}", path, e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_timestamp;
    use crate::utils::error::DeliveryError;
    use crate::utils::logger::MemoryRunLog;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        read_only: bool,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
                read_only: false,
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                DeliveryError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            if self.read_only {
                return Err(DeliveryError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only storage",
                )));
            }
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig;

    impl ConfigProvider for MockConfig {
        fn log_file_path(&self) -> &str {
            "log.txt"
        }

        fn result_file_path(&self) -> &str {
            "result.csv"
        }

        fn orders_file_path(&self) -> &str {
            "orders.csv"
        }
    }

    fn criteria(district: &str) -> FilterCriteria {
        FilterCriteria::new(
            district,
            parse_timestamp("2024-03-01 00:00:00").unwrap(),
            parse_timestamp("2024-03-01 23:59:59").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_extract_transform_load() {
        let storage = MockStorage::new();
        storage.files.lock().await.insert(
            "orders.csv".to_string(),
            b"OrderId,Weight,District,DeliveryTime\n\
              1,2.5,Center,2024-03-01 10:00:00\n\
              2,1.5,North,2024-03-01 10:05:00\n\
              3,4,center,2024-03-01 10:20\n\
              4,1,Center,2024-03-01 11:00:00\n"
                .to_vec(),
        );
        let log = Arc::new(MemoryRunLog::new());
        let pipeline = DeliveryPipeline::new(storage.clone(), MockConfig, log.clone());

        let orders = pipeline.extract().await.unwrap();
        assert_eq!(orders.len(), 4);

        let outcome = pipeline.transform(orders, &criteria("Center")).await.unwrap();
        assert_eq!(outcome.matched.len(), 3);
        assert_eq!(outcome.windowed.len(), 2);

        let path = pipeline.load(&outcome).await.unwrap();
        assert_eq!(path.as_deref(), Some("result.csv"));

        let written = String::from_utf8(storage.get_file("result.csv").await.unwrap()).unwrap();
        assert_eq!(
            written,
            "OrderId,Weight,District,DeliveryTime\n\
             1,2.5,Center,2024-03-01 10:00:00\n\
             3,4,center,2024-03-01 10:20:00\n"
        );
        assert_eq!(log.count_containing("Filtered 3 orders, 2 within"), 1);
    }

    #[tokio::test]
    async fn test_extract_missing_file_is_empty() {
        let log = Arc::new(MemoryRunLog::new());
        let pipeline = DeliveryPipeline::new(MockStorage::new(), MockConfig, log.clone());

        let orders = pipeline.extract().await.unwrap();

        assert!(orders.is_empty());
        assert_eq!(log.count_containing("File not found"), 1);
    }

    #[tokio::test]
    async fn test_load_empty_outcome_writes_header() {
        let storage = MockStorage::new();
        let log = Arc::new(MemoryRunLog::new());
        let pipeline = DeliveryPipeline::new(storage.clone(), MockConfig, log);

        pipeline.load(&FilterOutcome::default()).await.unwrap();

        let written = storage.get_file("result.csv").await.unwrap();
        assert_eq!(written, b"OrderId,Weight,District,DeliveryTime\n".to_vec());
    }

    #[tokio::test]
    async fn test_load_write_failure_is_logged_not_returned() {
        let storage = MockStorage {
            read_only: true,
            ..MockStorage::new()
        };
        let log = Arc::new(MemoryRunLog::new());
        let pipeline = DeliveryPipeline::new(storage, MockConfig, log.clone());

        let path = pipeline.load(&FilterOutcome::default()).await.unwrap();

        assert!(path.is_none());
        assert_eq!(log.count_containing("Error writing result file result.csv"), 1);
    }
}
