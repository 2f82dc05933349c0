use std::sync::Arc;
use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}

// lets a caller keep a handle on a publisher it hands to a service
#[async_trait]
impl<P: EventPublisher + ?Sized> EventPublisher for Arc<P> {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        (**self).publish(event).await
    }
}
