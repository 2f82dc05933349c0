use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<(), ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ()) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books().await
            .map_err(CommandError::from).map(|books| ListBooksCommandResponse { books })
    }
}

// ListTitlesCommand feeds the removal picker with titles in library order
pub struct ListTitlesCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListTitlesCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListTitlesCommandResponse {
    pub titles: Vec<String>,
}

#[async_trait]
impl Command<(), ListTitlesCommandResponse> for ListTitlesCommand {
    async fn execute(&self, _req: ()) -> Result<ListTitlesCommandResponse, CommandError> {
        self.catalog_service.titles().await
            .map_err(CommandError::from).map(|titles| ListTitlesCommandResponse { titles })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListTitlesCommand};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let mut config = Configuration::new("unused.json");
        config.store = RepositoryStore::InMemory;
        let svc = factory::create_catalog_service(&config);

        let res = ListBooksCommand::new(svc.clone()).execute(()).await.expect("should list books");
        assert!(res.books.is_empty());

        let emma = BookDto::new("Emma", "Austen", 1815, "Classic", false);
        let dune = BookDto::new("Dune", "Herbert", 1965, "SciFi", true);
        let _ = svc.add_book(&emma).await.expect("should add book");
        let _ = svc.add_book(&dune).await.expect("should add book");

        let res = ListBooksCommand::new(svc.clone()).execute(()).await.expect("should list books");
        assert_eq!(vec![emma, dune], res.books);

        let res = ListTitlesCommand::new(svc).execute(()).await.expect("should list titles");
        assert_eq!(vec!["Emma", "Dune"], res.titles);
    }
}
