//! Generates a room set and writes it to `roomcrawl.rooms.<pid>/`.

use roomcrawl::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let config = CrawlConfig::default();
    let dir = build_rooms(&config, &mut rand::rng())?;
    println!("{}", dir.display());
    Ok(())
}
