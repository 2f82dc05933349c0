use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub title: String,
}

impl RemoveBookCommandRequest {
    pub fn new(title: String) -> Self {
        Self {
            title,
        }
    }
}

// removed is zero when no book had the title
#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub title: String,
    pub removed: usize,
}

impl RemoveBookCommandResponse {
    pub fn new(title: String, removed: usize) -> Self {
        Self {
            title,
            removed,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let removed = self.catalog_service.remove_book(req.title.as_str()).await
            .map_err(CommandError::from)?;
        Ok(RemoveBookCommandResponse::new(req.title, removed))
    }
}
