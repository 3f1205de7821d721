use std::collections::BTreeMap;

use serde::Serialize;

/// Snapshot of one registered entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityState {
    pub platform: &'static str,

    /// False before the first successful update, and for any cycle in which
    /// the entity's update failed.
    pub available: bool,

    /// Entity-specific JSON (see `Entity::state_json`)
    pub attributes: serde_json::Value,
}

/// Centralized snapshot of the entire engine state, keyed by unique id.
///
/// Entities are ordered by unique id here, not by registration order. The
/// engine itself polls in registration order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct State {
    pub entities: BTreeMap<String, EntityState>,
}
