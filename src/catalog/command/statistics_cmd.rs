use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::operations::Statistics;
use crate::core::command::{Command, CommandError};

pub struct StatisticsCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl StatisticsCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatisticsCommandResponse {
    pub statistics: Statistics,
    // None when the library is empty
    pub summary: Option<String>,
}

impl StatisticsCommandResponse {
    pub fn new(statistics: Statistics) -> Self {
        let summary = statistics.summary();
        Self {
            statistics,
            summary,
        }
    }
}

#[async_trait]
impl Command<(), StatisticsCommandResponse> for StatisticsCommand {
    async fn execute(&self, _req: ()) -> Result<StatisticsCommandResponse, CommandError> {
        self.catalog_service.statistics().await
            .map_err(CommandError::from).map(StatisticsCommandResponse::new)
    }
}
