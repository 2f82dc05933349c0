use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[derive(Debug)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }

    async fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        *books = entities.to_vec();
        Ok(books.len())
    }
}

impl BookRepository for MemoryBookRepository {
    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_round_trip_books() {
        let repo = MemoryBookRepository::new(vec![]);
        let books = vec![
            BookEntity::new("Dune", "Herbert", 1965, "SciFi", true),
            BookEntity::new("Emma", "Austen", 1815, "Classic", false),
        ];
        assert_eq!(2, repo.save(&books).await.expect("should save"));
        assert_eq!(books, repo.load().await.expect("should load"));
        let _ = repo.save(&[]).await.expect("should save");
        assert!(repo.load().await.expect("should load").is_empty());
    }
}
