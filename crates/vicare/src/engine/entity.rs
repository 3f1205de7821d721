//! Entity abstraction for the engine
//!
//! Every polled entity (sensors today) implements the Entity trait.

use std::error::Error;

use async_trait::async_trait;

/// Base trait that all entities must implement
#[async_trait]
pub trait Entity: Send + Sync {
    /// Serialize current state to JSON for Engine storage
    fn state_json(&self) -> serde_json::Value;

    /// Return the platform type of this entity (e.g. "sensor")
    fn platform(&self) -> &'static str;

    /// Stable identifier, used by the engine to key registered entities
    fn unique_id(&self) -> String;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Whether the entity currently holds a usable state
    fn available(&self) -> bool;

    /// Refresh the entity from its backing device.
    ///
    /// Errors returned here are failures the entity did not know how to
    /// absorb. The engine reports the entity unavailable until the next
    /// successful update.
    async fn update(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;
}
