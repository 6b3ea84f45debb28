//! Queue module for RabbitMQ operations.
//!
//! This module provides:
//! - The `QueueSink` seam the relay publishes through
//! - An async RabbitMQ `Publisher` implementing it

pub mod publisher;
pub mod sink;

pub use publisher::Publisher;
pub use sink::{QueueSink, SinkError};
