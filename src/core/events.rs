use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// DomainEventType defines type of event for library changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Deleted,
}

// DomainEvent records a single mutation of the library
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    pub created_at: DateTime<Utc>,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, key, DomainEventType::Added, metadata, json))
    }

    pub fn deleted<T: Serialize>(name: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, key, DomainEventType::Deleted, metadata, json))
    }

    fn build(name: &str, key: &str, kind: DomainEventType, metadata: &HashMap<String, String>, json: String) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            key: key.to_string(),
            kind,
            metadata: metadata.clone(),
            json_data: json,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};

    #[tokio::test]
    async fn test_should_build_added() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::added("books", "Dune", &HashMap::from([("k".to_string(), "v".to_string())]), &data).expect("build event");
        assert_eq!("books", event.name.as_str());
        assert_eq!("Dune", event.key.as_str());
        assert_eq!(DomainEventType::Added, event.kind);
        assert_eq!(36, event.event_id.len());
    }

    #[tokio::test]
    async fn test_should_build_deleted() {
        let event = DomainEvent::deleted("books", "Dune", &HashMap::new(), &2usize).expect("build event");
        assert_eq!("Dune", event.key.as_str());
        assert_eq!("2", event.json_data.as_str());
        assert_eq!(DomainEventType::Deleted, event.kind);
    }
}
