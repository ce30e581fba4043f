//! The traversal engine: walks the player from the start room to the end
//! room, one line of input per turn.
//!
//! Each turn shows the current room and its connections, then reads a
//! line. The line is one of:
//!   1. the time keyword → ask the [`TimeService`], print the answer
//!   2. the name of a connected room → move there
//!   3. anything else → complain and ask again
//!
//! Only moves count as steps. Entering the end room finishes the game.

use roomcrawl_clock::TimeService;
use roomcrawl_graph::{RoomId, RoomKind, RoomSet};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{CrawlError, EngineConfig};

const NOT_UNDERSTOOD: &str = "HUH? I DON'T UNDERSTAND THAT ROOM. TRY AGAIN.\n";
const NO_TIME: &str = "SORRY, I COULDN'T TELL THE TIME. TRY AGAIN.\n\n";

// ---------------------------------------------------------------------------
// PlayState
// ---------------------------------------------------------------------------

/// Whether the game is still running.
///
/// ```text
/// InProgress → Finished
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    InProgress,
    Finished,
}

impl PlayState {
    /// Returns `true` once the end room has been reached.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

// ---------------------------------------------------------------------------
// TraversalState
// ---------------------------------------------------------------------------

/// What a single room choice did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Moved to a mid (or start) room.
    Moved(RoomId),
    /// Moved into the end room.
    Finished(RoomId),
    /// No connected room has that name. Nothing changed.
    Unrecognized,
}

/// The player's position and the rooms entered so far.
///
/// The path never includes the start room as its first entry; it holds
/// every room entered by a move, in order, so revisits appear again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    current: RoomId,
    path: Vec<RoomId>,
    state: PlayState,
}

impl TraversalState {
    /// Places the player in the start room.
    pub fn new(rooms: &RoomSet) -> Self {
        Self {
            current: rooms.start().id,
            path: Vec::new(),
            state: PlayState::InProgress,
        }
    }

    /// Moves to the connected room called `choice`, if there is one.
    ///
    /// Once finished, every choice is [`Turn::Unrecognized`].
    pub fn advance(&mut self, rooms: &RoomSet, choice: &str) -> Turn {
        if self.state.is_finished() {
            return Turn::Unrecognized;
        }

        let Some(next) = rooms.neighbors(self.current).find(|r| r.name == choice) else {
            return Turn::Unrecognized;
        };

        self.current = next.id;
        self.path.push(next.id);
        tracing::debug!(room = %next.name, steps = self.path.len(), "moved");

        if next.kind == RoomKind::End {
            self.state = PlayState::Finished;
            Turn::Finished(next.id)
        } else {
            Turn::Moved(next.id)
        }
    }

    /// The room the player is in.
    pub fn current(&self) -> RoomId {
        self.current
    }

    /// Rooms entered so far, in order.
    pub fn path(&self) -> &[RoomId] {
        &self.path
    }

    /// Number of moves made.
    pub fn step_count(&self) -> usize {
        self.path.len()
    }

    pub fn play_state(&self) -> PlayState {
        self.state
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub steps: usize,
    /// Names of the rooms entered, in order. Ends with the end room.
    pub path: Vec<String>,
}

/// Runs one game over a resolved room set.
pub struct Engine<T: TimeService> {
    rooms: RoomSet,
    clock: T,
    config: EngineConfig,
    traversal: TraversalState,
}

impl<T: TimeService> Engine<T> {
    /// Creates an engine with the player in the start room.
    pub fn new(rooms: RoomSet, clock: T, config: EngineConfig) -> Self {
        let traversal = TraversalState::new(&rooms);
        Self {
            rooms,
            clock,
            config,
            traversal,
        }
    }

    pub fn rooms(&self) -> &RoomSet {
        &self.rooms
    }

    pub fn traversal(&self) -> &TraversalState {
        &self.traversal
    }

    /// Plays until the end room is reached.
    ///
    /// Reads one choice per line from `input` and writes the transcript
    /// to `output`. Unknown rooms and failed time queries are reported
    /// to the player and the turn is retried.
    ///
    /// # Errors
    /// [`CrawlError::InputClosed`] if `input` ends first, or
    /// [`CrawlError::Io`] if reading or writing fails.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<Summary, CrawlError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!(start = %self.rooms.start().name, "game started");
        let mut lines = input.lines();

        while !self.traversal.play_state().is_finished() {
            self.prompt(&mut output).await?;

            let Some(line) = lines.next_line().await? else {
                tracing::info!(steps = self.traversal.step_count(), "input closed mid-game");
                return Err(CrawlError::InputClosed);
            };
            output.write_all(b"\n").await?;

            let choice = line.trim();
            if choice == self.config.time_keyword {
                self.tell_time(&mut output).await?;
                continue;
            }

            if self.traversal.advance(&self.rooms, choice) == Turn::Unrecognized {
                tracing::debug!(%choice, "unrecognized room");
                output.write_all(NOT_UNDERSTOOD.as_bytes()).await?;
            }
        }

        let summary = self.summary();
        self.congratulate(&summary, &mut output).await?;
        tracing::info!(steps = summary.steps, "game finished");
        Ok(summary)
    }

    /// The game so far, as names.
    pub fn summary(&self) -> Summary {
        Summary {
            steps: self.traversal.step_count(),
            path: self
                .traversal
                .path()
                .iter()
                .map(|&id| self.rooms.get(id).name.clone())
                .collect(),
        }
    }

    async fn prompt<W: AsyncWrite + Unpin>(&self, output: &mut W) -> Result<(), CrawlError> {
        let current = self.traversal.current();
        let names: Vec<&str> = self
            .rooms
            .neighbors(current)
            .map(|r| r.name.as_str())
            .collect();
        let text = format!(
            "CURRENT LOCATION: {}\nPOSSIBLE CONNECTIONS: {}.\nWHERE TO? >",
            self.rooms.get(current).name,
            names.join(", ")
        );
        output.write_all(text.as_bytes()).await?;
        output.flush().await?;
        Ok(())
    }

    async fn tell_time<W: AsyncWrite + Unpin>(&self, output: &mut W) -> Result<(), CrawlError> {
        match self.clock.query().await {
            Ok(time) => {
                output.write_all(format!("{time}\n\n").as_bytes()).await?;
            }
            Err(e) => {
                tracing::warn!(error = %e, "time query failed");
                output.write_all(NO_TIME.as_bytes()).await?;
            }
        }
        Ok(())
    }

    async fn congratulate<W: AsyncWrite + Unpin>(
        &self,
        summary: &Summary,
        output: &mut W,
    ) -> Result<(), CrawlError> {
        let mut text = format!(
            "YOU HAVE FOUND THE END ROOM. CONGRATULATIONS!\n\
             YOU TOOK {} STEPS. YOUR PATH TO VICTORY WAS:\n",
            summary.steps
        );
        for name in &summary.path {
            text.push_str(name);
            text.push('\n');
        }
        output.write_all(text.as_bytes()).await?;
        output.flush().await?;
        Ok(())
    }
}
