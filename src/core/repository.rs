use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::gateway::GatewayPublisherVia;

// Repository persists a whole collection at once: there are no partial
// updates, every save replaces everything stored before it.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // loads all entities in stored order, empty when nothing was stored yet
    async fn load(&self) -> LibraryResult<Vec<Entity>>;

    // overwrites the stored collection, returns number of entities written
    async fn save(&self, entities: &[Entity]) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    LocalFile,
    InMemory,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia {
        match self {
            RepositoryStore::LocalFile => { GatewayPublisherVia::Logs }
            RepositoryStore::InMemory => { GatewayPublisherVia::Memory }
        }
    }
}

impl From<String> for RepositoryStore {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" => RepositoryStore::InMemory,
            _ => RepositoryStore::LocalFile,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_parse_store() {
        assert_eq!(RepositoryStore::InMemory, RepositoryStore::from("memory".to_string()));
        assert_eq!(RepositoryStore::InMemory, RepositoryStore::from("InMemory".to_string()));
        assert_eq!(RepositoryStore::LocalFile, RepositoryStore::from("file".to_string()));
        assert_eq!(RepositoryStore::LocalFile, RepositoryStore::from("".to_string()));
    }

    #[tokio::test]
    async fn test_should_pick_publisher() {
        assert_eq!(GatewayPublisherVia::Logs, RepositoryStore::LocalFile.gateway_publisher());
        assert_eq!(GatewayPublisherVia::Memory, RepositoryStore::InMemory.gateway_publisher());
    }
}
