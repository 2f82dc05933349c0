pub mod file_book_repository;
pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {
    // where the books live, for logs and error messages
    fn location(&self) -> String;
}
