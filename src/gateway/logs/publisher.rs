use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes domain events to the tracing subscriber as an audit trail
#[derive(Debug)]
pub struct LogPublisher {
    topic: String,
}

impl LogPublisher {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
        }
    }

    pub fn topic(&self) -> &str {
        self.topic.as_str()
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!(topic = self.topic.as_str(), kind = ?event.kind, key = event.key.as_str(), "{}", json);
        Ok(())
    }
}
