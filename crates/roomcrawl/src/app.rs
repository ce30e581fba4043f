//! Wiring shared by the two binaries.

use std::path::PathBuf;

use rand::Rng;
use roomcrawl_codec::RoomStore;
use roomcrawl_graph::{Generator, RoomSet};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::{CrawlConfig, CrawlError};

/// Installs a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Game output goes to stdout, so logs never interleave with the transcript.
///
/// # Errors
/// If a global subscriber is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
}

/// Generates a room set and saves it. Returns the directory written.
pub fn build_rooms<R: Rng>(config: &CrawlConfig, rng: &mut R) -> Result<PathBuf, CrawlError> {
    let generator = Generator::new(config.graph.clone())?;
    let names: Vec<&str> = config.names.iter().map(String::as_str).collect();
    let rooms = generator.generate(&names, rng)?;
    let dir = RoomStore::new(config.store.clone()).save(&rooms)?;
    Ok(dir)
}

/// Loads the most recently saved room set.
pub fn load_rooms(config: &CrawlConfig) -> Result<RoomSet, CrawlError> {
    let rooms = RoomStore::new(config.store.clone()).load(&config.graph)?;
    Ok(rooms)
}
