//! Notify Relay - object-storage webhook relay.
//!
//! Accepts bucket notifications or audit-log entries posted by a storage
//! gateway, decodes them into one of two fixed shapes and publishes each
//! request as one message on a durable RabbitMQ queue.
//!
//! ## Architecture
//!
//! ```text
//! Storage gateway → POST / → decode (EVENT | AUDIT) → re-encode → Queue
//! ```

pub mod config;
pub mod error;
pub mod queue;
pub mod schema;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use error::RelayError;
pub use queue::{Publisher, QueueSink, SinkError};
pub use schema::{AuditLog, RelayMode, RelayRecord, StorageEventRecords};
pub use web::{router, AppState};
