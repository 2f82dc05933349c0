use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, warn};

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

const INDENT: &[u8] = b"    ";

// FileBookRepository keeps the whole library as a JSON array in one file.
// A save writes a sibling temp file first and renames it over the library,
// so a failed save never leaves a half-written library behind.
#[derive(Debug)]
pub struct FileBookRepository {
    path: PathBuf,
}

impl FileBookRepository {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn encode(entities: &[BookEntity]) -> LibraryResult<Vec<u8>> {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        entities.serialize(&mut serializer)?;
        Ok(buf)
    }
}

#[async_trait]
impl Repository<BookEntity> for FileBookRepository {
    async fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = ?self.path, "library file does not exist yet");
                return Ok(vec![]);
            }
            Err(err) => return Err(LibraryError::from(err)),
        };
        let books: Vec<BookEntity> = serde_json::from_slice(&bytes).map_err(|err| {
            warn!(path = ?self.path, "library file is not well-formed: {}", err);
            LibraryError::from(err)
        })?;
        debug!(path = ?self.path, count = books.len(), "loaded library");
        Ok(books)
    }

    async fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        let buf = Self::encode(entities)?;
        let temp = self.temp_path();
        if let Err(err) = tokio::fs::write(&temp, &buf).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(LibraryError::from(err));
        }
        if let Err(err) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(LibraryError::from(err));
        }
        debug!(path = ?self.path, count = entities.len(), "saved library");
        Ok(entities.len())
    }
}

impl BookRepository for FileBookRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::file_book_repository::FileBookRepository;
    use crate::core::library::{LibraryError, REASON_MALFORMED};
    use crate::core::repository::Repository;

    fn build_repo() -> (TempDir, FileBookRepository) {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let repo = FileBookRepository::new(dir.path().join("library.json").as_path());
        (dir, repo)
    }

    fn books() -> Vec<BookEntity> {
        vec![
            BookEntity::new("Dune", "Herbert", 1965, "SciFi", true),
            BookEntity::new("Emma", "Austen", 1815, "Classic", false),
            BookEntity::new("Dune", "Herbert", 1965, "SciFi", false),
        ]
    }

    #[tokio::test]
    async fn test_should_load_empty_when_missing() {
        let (_dir, repo) = build_repo();
        let loaded = repo.load().await.expect("should load");
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_should_round_trip_books() {
        let (_dir, repo) = build_repo();
        assert_eq!(3, repo.save(&books()).await.expect("should save"));
        let loaded = repo.load().await.expect("should load");
        assert_eq!(books(), loaded);
    }

    #[tokio::test]
    async fn test_should_overwrite_previous_content() {
        let (_dir, repo) = build_repo();
        let _ = repo.save(&books()).await.expect("should save");
        let _ = repo.save(&[]).await.expect("should save");
        let loaded = repo.load().await.expect("should load");
        assert!(loaded.is_empty());
        assert!(!repo.temp_path().exists());
    }

    #[tokio::test]
    async fn test_should_write_indented_json() {
        let (dir, repo) = build_repo();
        let _ = repo.save(&books()[..1]).await.expect("should save");
        let text = std::fs::read_to_string(dir.path().join("library.json")).expect("should read");
        assert!(text.starts_with("[\n    {\n        \"Title\": \"Dune\""));
    }

    #[tokio::test]
    async fn test_should_load_files_with_other_formatting() {
        let (dir, repo) = build_repo();
        std::fs::write(dir.path().join("library.json"),
                       r#"[{"Title":"Dune","Author":"Herbert","Year":1965,"Genre":"SciFi","Read":true}]"#)
            .expect("should write");
        let loaded = repo.load().await.expect("should load");
        assert_eq!(vec![BookEntity::new("Dune", "Herbert", 1965, "SciFi", true)], loaded);
    }

    #[tokio::test]
    async fn test_should_fail_on_malformed_file() {
        let (dir, repo) = build_repo();
        std::fs::write(dir.path().join("library.json"), "{ not a library").expect("should write");
        let err = repo.load().await.expect_err("should fail");
        assert!(matches!(err, LibraryError::Storage { .. }));
        assert_eq!(Some(REASON_MALFORMED), err.reason_code());
    }

    #[tokio::test]
    async fn test_should_fail_on_wrong_shape() {
        let (dir, repo) = build_repo();
        std::fs::write(dir.path().join("library.json"), r#"[{"Title":"Dune"}]"#).expect("should write");
        assert!(repo.load().await.is_err());
    }

    #[tokio::test]
    async fn test_should_keep_previous_file_when_save_fails() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("missing").join("library.json");
        let repo = FileBookRepository::new(path.as_path());
        let err = repo.save(&books()).await.expect_err("should fail without parent dir");
        assert!(matches!(err, LibraryError::Storage { .. }));
        assert!(!path.exists());
    }
}
