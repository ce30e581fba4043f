//! Rooms, room kinds, and the name-based record form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GraphError;

/// Index of a room inside its [`RoomSet`](crate::RoomSet).
///
/// Only meaningful for the set that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room-{}", self.0)
    }
}

/// The role a room plays in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    /// Where the player begins.
    Start,
    /// The goal. Entering it ends the game.
    End,
    /// Everything else.
    Mid,
}

impl RoomKind {
    /// The tag written to room files.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Start => "START_ROOM",
            Self::End => "END_ROOM",
            Self::Mid => "MID_ROOM",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RoomKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "START_ROOM" => Ok(Self::Start),
            "END_ROOM" => Ok(Self::End),
            "MID_ROOM" => Ok(Self::Mid),
            other => Err(format!("unknown room type {other:?}")),
        }
    }
}

/// Checks that `name` can be written to a room file and read back unchanged.
///
/// The name doubles as the room's file name, so it must be non-empty,
/// already trimmed, free of control characters, `:`, `/` and `\`, and
/// not `.` or `..`.
pub fn check_name(name: &str) -> Result<(), GraphError> {
    let invalid = |reason: &str| GraphError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    if name.is_empty() {
        return Err(invalid("empty"));
    }
    if name.trim() != name {
        return Err(invalid("leading or trailing whitespace"));
    }
    if name == "." || name == ".." {
        return Err(invalid("reserved file name"));
    }
    if let Some(c) = name
        .chars()
        .find(|&c| c.is_control() || matches!(c, ':' | '/' | '\\'))
    {
        return Err(invalid(&format!("contains {c:?}")));
    }
    Ok(())
}

/// A room inside a resolved set. Connections are ids into the same set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub kind: RoomKind,
    pub connections: Vec<RoomId>,
}

impl Room {
    /// Number of connections.
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    /// Returns `true` if this room connects to `other`.
    pub fn is_connected_to(&self, other: RoomId) -> bool {
        self.connections.contains(&other)
    }
}

/// A room as it appears on disk: connections are plain names, resolved
/// against the whole set later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord {
    pub name: String,
    pub kind: RoomKind,
    pub connections: Vec<String>,
}
