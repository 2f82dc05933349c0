use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::library::ReadStatus;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub year: u32,
    pub genre: String,
    pub read: bool,
}

impl BookDto {
    pub fn new(title: &str, author: &str, year: u32, genre: &str, read: bool) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
            read,
        }
    }

    pub fn read_status(&self) -> ReadStatus {
        ReadStatus::from(self.read)
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn is_read(&self) -> bool {
        self.read
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" by {} ({}) - {} [{}]",
               self.title, self.author, self.year, self.genre, self.read_status())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            genre: other.genre.to_string(),
            read: other.read,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            genre: other.genre.to_string(),
            read: other.read,
        }
    }
}
