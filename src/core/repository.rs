use crate::core::parser::parse_order;
use crate::domain::model::LoadedOrders;
use crate::domain::ports::{RunLog, Storage};

/// Loads orders from a CSV source through a [`Storage`].
///
/// Nothing here fails the caller: a missing or unreadable file yields an
/// empty set, and bad lines are skipped and reported in the run log.
pub struct OrderRepository<'a, S: Storage> {
    storage: &'a S,
    log: &'a dyn RunLog,
}

impl<'a, S: Storage> OrderRepository<'a, S> {
    pub fn new(storage: &'a S, log: &'a dyn RunLog) -> Self {
        Self { storage, log }
    }

    pub async fn load(&self, path: &str) -> LoadedOrders {
        tracing::info!("Loading orders from {}", path);

        match self.storage.read_file(path).await {
            Ok(bytes) => parse_lines(&String::from_utf8_lossy(&bytes), self.log),
            Err(e) if e.is_not_found() => {
                self.log.log(&format!("File not found: {}", path));
                tracing::warn!("Order file {} not found, continuing with no orders", path);
                LoadedOrders::default()
            }
            Err(e) => {
                self.log.log(&format!("Error reading CSV file {}: {}", path, e));
                tracing::warn!("Could not read {}: {}", path, e);
                LoadedOrders::default()
            }
        }
    }
}

/// Parses every line after the header. Input order is preserved in both lists.
pub fn parse_lines(content: &str, log: &dyn RunLog) -> LoadedOrders {
    let mut loaded = LoadedOrders::default();

    for line in content.lines().skip(1) {
        match parse_order(line, log) {
            Ok(order) => {
                log.log(&format!(
                    "Loaded order: {}, district: {}",
                    order.order_id(),
                    order.district()
                ));
                loaded.orders.push(order);
            }
            Err(failure) => {
                tracing::debug!("Skipping line ({}): {}", failure, line);
                loaded.failed_lines.push(line.to_string());
            }
        }
    }

    if loaded.failed_lines.is_empty() {
        log.log(&format!(
            "All {} orders loaded successfully.",
            loaded.orders.len()
        ));
    } else {
        for line in &loaded.failed_lines {
            log.log(&format!("Failed to load order from line: {}", line));
        }
    }

    tracing::info!(
        "Loaded {} orders, {} lines rejected",
        loaded.orders.len(),
        loaded.failed_lines.len()
    );

    loaded
}
