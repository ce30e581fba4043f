//! # roomcrawl
//!
//! A text adventure played over a randomly generated room graph.
//!
//! Two binaries share this crate: `buildrooms` generates a room set and
//! saves it as a directory of room files; `adventure` loads the newest
//! room set and lets the player walk from the start room to the end room.
//! Typing `time` during play asks the [`TimeService`] for the current time.
//!
//! ```text
//! Generator → RoomStore (save) → disk → RoomStore (load) → Engine → FileClock
//! ```

mod app;
mod config;
mod engine;
mod error;

pub use app::{build_rooms, init_tracing, load_rooms};
pub use config::{CrawlConfig, EngineConfig};
pub use engine::{Engine, PlayState, Summary, TraversalState, Turn};
pub use error::CrawlError;

pub use roomcrawl_clock::{ClockConfig, ClockError, FileClock, TimeService};
pub use roomcrawl_codec::{CodecError, RoomCodec, RoomStore, StoreConfig, StoreError, TextCodec};
pub use roomcrawl_graph::{
    DEFAULT_NAME_POOL, Generator, GraphConfig, GraphError, Room, RoomId, RoomKind, RoomRecord,
    RoomSet,
};

/// Everything the binaries need.
pub mod prelude {
    pub use crate::{
        CrawlConfig, CrawlError, Engine, FileClock, RoomSet, TimeService, build_rooms,
        init_tracing, load_rooms,
    };
}
