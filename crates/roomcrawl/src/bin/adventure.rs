//! Plays the most recently generated room set on stdin/stdout.

use roomcrawl::prelude::*;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let config = CrawlConfig::default();
    let rooms = load_rooms(&config)?;
    let clock = FileClock::new(config.clock.clone());

    let mut engine = Engine::new(rooms, clock, config.engine.clone());
    engine
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;
    Ok(())
}
