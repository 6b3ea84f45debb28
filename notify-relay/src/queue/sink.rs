//! The outbound seam: anything that accepts a message body and hands back
//! the identifier the queue assigned to it.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to connect to RabbitMQ: {0}")]
    Connect(#[source] lapin::Error),

    #[error("failed to prepare channel: {0}")]
    Channel(#[source] lapin::Error),

    #[error("failed to publish message: {0}")]
    Publish(#[source] lapin::Error),

    #[error("broker rejected message")]
    Rejected,
}

/// Destination queue for relayed records.
///
/// Implementations are shared by every in-flight request and must be safe
/// to call concurrently.
#[async_trait]
pub trait QueueSink: Send + Sync {
    /// Publish one message body, returning its message identifier.
    async fn publish(&self, body: String) -> Result<String, SinkError>;
}
