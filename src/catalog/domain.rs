pub mod operations;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::operations::Statistics;
use crate::core::library::LibraryResult;

// CatalogService runs one load/transform/save cycle per call against the
// persisted library.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, title: &str) -> LibraryResult<usize>;
    async fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn titles(&self) -> LibraryResult<Vec<String>>;
    async fn statistics(&self) -> LibraryResult<Statistics>;
}
