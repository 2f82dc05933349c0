use serde::{Deserialize, Serialize};
use crate::books::domain::Book;

// BookEntity is a single record of the persisted library file. Field names
// are capitalized on disk, so files written by earlier versions of the
// library keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntity {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Read")]
    pub read: bool,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, year: u32, genre: &str, read: bool) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
            read,
        }
    }
}

impl Book for BookEntity {
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
