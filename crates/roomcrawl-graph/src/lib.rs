//! Room graph model and generator for roomcrawl.
//!
//! A room set is a small undirected graph: one start room, one end room,
//! and the rest "mid" rooms, every room connected to between
//! `min_connections` and `max_connections` others.
//!
//! # Key types
//!
//! - [`RoomSet`]: the arena of rooms, connections stored as [`RoomId`]s
//! - [`RoomRecord`]: the name-based form shared with the codec
//! - [`Generator`]: builds a random room set satisfying the degree bounds
//! - [`GraphConfig`]: room count, degree bounds, draw cap
//! - [`GraphError`]: configuration and integrity failures

mod config;
mod error;
mod generator;
mod room;
mod set;

pub use config::{DEFAULT_NAME_POOL, GraphConfig};
pub use error::GraphError;
pub use generator::Generator;
pub use room::{Room, RoomId, RoomKind, RoomRecord, check_name};
pub use set::RoomSet;
