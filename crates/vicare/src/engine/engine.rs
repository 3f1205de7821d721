use std::future::Future;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

use super::entity::Entity;
use super::integration::EntitySink;
use super::state::EntityState;
use super::state::State;

/// An entity owned by the engine, plus the outcome of its last update.
struct Registered {
    entity: Box<dyn Entity>,

    /// Set when the last update returned an error the entity did not absorb
    update_failed: bool,
}

/// Engine
///
/// Owns every registered entity and drives the polling schedule. Entities are
/// refreshed one after another, in registration order, on each cycle.
pub struct Engine {
    entities: Vec<Registered>,
}

impl Engine {
    /// Create a new Engine instance
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Register a single entity
    ///
    /// Returns false (and drops the entity) if an entity with the same
    /// unique id is already registered.
    pub fn register(&mut self, entity: Box<dyn Entity>) -> bool {
        let unique_id = entity.unique_id();
        if self
            .entities
            .iter()
            .any(|r| r.entity.unique_id() == unique_id)
        {
            warn!("Entity {} is already registered, ignoring", unique_id);
            return false;
        }

        info!(
            "Entity registered: {} ({}, {})",
            unique_id,
            entity.platform(),
            entity.name()
        );
        self.entities.push(Registered {
            entity,
            update_failed: false,
        });
        true
    }

    /// Run one polling cycle over every registered entity
    pub async fn poll(&mut self) {
        debug!("Polling {} entities", self.entities.len());

        for registered in &mut self.entities {
            match registered.entity.update().await {
                Ok(()) => registered.update_failed = false,
                Err(e) => {
                    warn!(
                        "Update of {} failed, retrying next cycle: {}",
                        registered.entity.unique_id(),
                        e
                    );
                    registered.update_failed = true;
                }
            }
        }
    }

    /// Poll every `interval` until Ctrl+C is received
    pub async fn run(&mut self, interval: Duration) {
        let shutdown = async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received shutdown signal"),
                Err(e) => error!("Failed to listen for shutdown signal: {}", e),
            }
        };
        self.run_until(interval, shutdown).await;
    }

    /// Poll every `interval` until `shutdown` completes
    ///
    /// The first cycle runs immediately.
    pub async fn run_until(&mut self, interval: Duration, shutdown: impl Future<Output = ()>) {
        info!("Engine starting, polling every {:?}", interval);

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = ticker.tick() => self.poll().await,
                _ = &mut shutdown => break,
            }
        }

        info!("Engine shutting down");
    }

    /// Get a snapshot of the current engine state.
    pub fn state_snapshot(&self) -> State {
        let entities = self
            .entities
            .iter()
            .map(|r| {
                let state = EntityState {
                    platform: r.entity.platform(),
                    available: !r.update_failed && r.entity.available(),
                    attributes: r.entity.state_json(),
                };
                (r.entity.unique_id(), state)
            })
            .collect();

        State { entities }
    }
}

impl EntitySink for Engine {
    fn add_entities(&mut self, entities: Vec<Box<dyn Entity>>) {
        for entity in entities {
            self.register(entity);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
