//! Top-level configuration.

use roomcrawl_clock::ClockConfig;
use roomcrawl_codec::StoreConfig;
use roomcrawl_graph::{DEFAULT_NAME_POOL, GraphConfig};
use serde::{Deserialize, Serialize};

/// Settings for the traversal engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Input that asks for the time instead of naming a room.
    ///
    /// A room with this exact name can never be entered: the keyword
    /// always wins.
    pub time_keyword: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_keyword: "time".to_string(),
        }
    }
}

/// Everything both binaries need, with the stock defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlConfig {
    pub graph: GraphConfig,
    /// Room names the generator draws from.
    pub names: Vec<String>,
    pub store: StoreConfig,
    pub clock: ClockConfig,
    pub engine: EngineConfig,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            graph: GraphConfig::default(),
            names: DEFAULT_NAME_POOL.iter().map(|n| n.to_string()).collect(),
            store: StoreConfig::default(),
            clock: ClockConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::default();
        assert_eq!(config.graph.room_count, 7);
        assert_eq!(config.names.len(), 10);
        assert_eq!(config.engine.time_keyword, "time");
        assert_eq!(config.store.prefix, "roomcrawl");
    }
}
