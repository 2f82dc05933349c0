use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Year arrives signed so that a negative value is reported as a validation
// failure instead of a parse error.
#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub genre: String,
    #[serde(default)]
    pub read: bool,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, year: i64, genre: &str, read: bool) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
            read,
        }
    }

    pub fn build_book(&self) -> Result<BookDto, CommandError> {
        let year = u32::try_from(self.year).map_err(|_| CommandError::validation(
            format!("year must be a non-negative integer, got {}", self.year).as_str(), Some("year".to_string())))?;
        Ok(BookDto::new(self.title.as_str(), self.author.as_str(), year, self.genre.as_str(), self.read))
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
