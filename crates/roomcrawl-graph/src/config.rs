//! Graph configuration.

use serde::{Deserialize, Serialize};

use crate::GraphError;

/// Room names the generator draws from when no other pool is given.
pub const DEFAULT_NAME_POOL: &[&str] = &[
    "Lion", "Wolf", "Kraken", "Dragon", "Stag", "Hawk", "Dog", "Bear", "Crow", "Trout",
];

/// Shape of a room set.
///
/// Passed to the generator when building a set and to resolution when
/// reading one back, so both sides agree on the room count and degree
/// bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Number of rooms in a set.
    pub room_count: usize,

    /// Fewest connections a room may have in a finished set.
    pub min_connections: usize,

    /// Most connections a room may have. Only ever a rejection guard
    /// during generation, never a target.
    pub max_connections: usize,

    /// Upper limit on random pair draws before generation gives up.
    pub max_draws: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            room_count: 7,
            min_connections: 3,
            max_connections: 6,
            max_draws: 10_000,
        }
    }
}

impl GraphConfig {
    /// Create a config for `room_count` rooms with the default bounds.
    pub fn with_rooms(room_count: usize) -> Self {
        Self {
            room_count,
            ..Default::default()
        }
    }

    /// Check that a graph with this shape can exist at all.
    ///
    /// A start and an end room are always required, and every room
    /// needs `min_connections` distinct neighbours.
    pub fn validated(self) -> Result<Self, GraphError> {
        if self.room_count < 2 {
            return Err(GraphError::InvalidConfig(format!(
                "room_count must be at least 2, got {}",
                self.room_count
            )));
        }
        if self.min_connections == 0 {
            return Err(GraphError::InvalidConfig(
                "min_connections must be at least 1".into(),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(GraphError::InvalidConfig(format!(
                "min_connections ({}) exceeds max_connections ({})",
                self.min_connections, self.max_connections
            )));
        }
        if self.room_count - 1 < self.min_connections {
            return Err(GraphError::InvalidConfig(format!(
                "{} rooms cannot give each room {} distinct neighbours",
                self.room_count, self.min_connections
            )));
        }
        if self.max_draws == 0 {
            return Err(GraphError::InvalidConfig(
                "max_draws must be at least 1".into(),
            ));
        }
        Ok(self)
    }

    /// Returns `true` if `degree` is within the finished-graph bounds.
    pub fn degree_in_bounds(&self, degree: usize) -> bool {
        (self.min_connections..=self.max_connections).contains(&degree)
    }
}
