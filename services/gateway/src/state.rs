use crate::metrics::ServiceMetrics;
use rate_engine::RateTable;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RateTable>,
    pub metrics: Arc<ServiceMetrics>,
}

impl AppState {
    pub fn new(table: RateTable) -> Self {
        Self {
            table: Arc::new(table),
            metrics: Arc::new(ServiceMetrics::new()),
        }
    }
}
