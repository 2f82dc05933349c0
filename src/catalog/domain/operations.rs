//! Pure operations over an in-memory library snapshot. None of them fail and
//! none of them touch storage.

use serde::{Deserialize, Serialize};
use crate::books::domain::Book;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    /// `None` for an empty library.
    pub percent_read: Option<f64>,
}

impl Statistics {
    /// Read count with its percentage, e.g. `2 (66.67%)`.
    pub fn summary(&self) -> Option<String> {
        self.percent_read.map(|percent| format!("{} ({:.2}%)", self.read, percent))
    }
}

/// Appends `book` at the end. Duplicates are allowed.
pub fn add<B: Book>(mut library: Vec<B>, book: B) -> Vec<B> {
    library.push(book);
    library
}

/// Drops every book whose title equals `title` exactly, keeping the order of
/// the rest. Nothing matching is not an error.
pub fn remove<B: Book>(library: Vec<B>, title: &str) -> Vec<B> {
    library.into_iter().filter(|book| book.title() != title).collect()
}

/// Case-insensitive substring match on title or author. An empty query
/// matches every book.
pub fn search<B: Book + Clone>(library: &[B], query: &str) -> Vec<B> {
    let query = query.to_lowercase();
    library.iter()
        .filter(|book| book.title().to_lowercase().contains(query.as_str())
            || book.author().to_lowercase().contains(query.as_str()))
        .cloned()
        .collect()
}

pub fn titles<B: Book>(library: &[B]) -> Vec<String> {
    library.iter().map(|book| book.title().to_string()).collect()
}

pub fn statistics<B: Book>(library: &[B]) -> Statistics {
    let total = library.len();
    let read = library.iter().filter(|book| book.is_read()).count();
    let percent_read = if total == 0 {
        None
    } else {
        Some(round2(read as f64 / total as f64 * 100.0))
    };
    Statistics {
        total,
        read,
        unread: total - read,
        percent_read,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
