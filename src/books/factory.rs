use crate::books::repository::BookRepository;
use crate::books::repository::file_book_repository::FileBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub fn create_book_repository(config: &Configuration) -> Box<dyn BookRepository> {
    match config.store {
        RepositoryStore::LocalFile => {
            Box::new(FileBookRepository::new(config.library_file.as_path()))
        }
        RepositoryStore::InMemory => {
            Box::new(MemoryBookRepository::new(vec![]))
        }
    }
}
