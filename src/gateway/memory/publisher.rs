use std::sync::Mutex;
use async_trait::async_trait;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps (kind, key) of published events for in-memory runs
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    published: Mutex<Vec<(DomainEventType, String)>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> usize {
        self.published.lock().map(|events| events.len()).unwrap_or_default()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.published.lock()
            .map_err(|err| LibraryError::storage(format!("event buffer poisoned {:?}", err).as_str(), None))?
            .push((event.kind, event.key.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[tokio::test]
    async fn test_should_collect_events() {
        let publisher = MemoryPublisher::new();
        let added = DomainEvent::added("books", "Dune", &HashMap::new(), &"Dune").expect("build event");
        let deleted = DomainEvent::deleted("books", "Dune", &HashMap::new(), &1usize).expect("build event");
        let _ = publisher.publish(&added).await.expect("should publish");
        let _ = publisher.publish(&deleted).await.expect("should publish");
        assert_eq!(2, publisher.published());
    }
}
