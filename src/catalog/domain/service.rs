use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::operations;
use crate::catalog::domain::operations::Statistics;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
    // held across load..save so overlapping mutations cannot drop each other's books
    write_lock: Mutex<()>,
}

impl CatalogServiceImpl {
    pub fn new(book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            book_repository,
            events_publisher,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _guard = self.write_lock.lock().await;
        let library = self.book_repository.load().await?;
        let library = operations::add(library, BookEntity::from(book));
        let _ = self.book_repository.save(&library).await?;
        info!(title = book.title.as_str(), total = library.len(), "added book");
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "books", book.title.as_str(), &HashMap::new(), book)?).await?;
        Ok(book.clone())
    }

    async fn remove_book(&self, title: &str) -> LibraryResult<usize> {
        let _guard = self.write_lock.lock().await;
        let library = self.book_repository.load().await?;
        let before = library.len();
        let library = operations::remove(library, title);
        let _ = self.book_repository.save(&library).await?;
        let removed = before - library.len();
        info!(title, removed, location = self.book_repository.location().as_str(), "removed books");
        if removed > 0 {
            let _ = self.events_publisher.publish(&DomainEvent::deleted(
                "books", title, &HashMap::new(), &removed)?).await?;
        }
        Ok(removed)
    }

    async fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>> {
        let library = self.book_repository.load().await?;
        Ok(operations::search(&library, query).iter().map(BookDto::from).collect())
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let library = self.book_repository.load().await?;
        Ok(library.iter().map(BookDto::from).collect())
    }

    async fn titles(&self) -> LibraryResult<Vec<String>> {
        let library = self.book_repository.load().await?;
        Ok(operations::titles(&library))
    }

    async fn statistics(&self) -> LibraryResult<Statistics> {
        let library = self.book_repository.load().await?;
        Ok(operations::statistics(&library))
    }
}
