//! Error types for the graph layer.

/// Errors that can occur while generating or resolving a room set.
///
/// The first group are configuration errors: the requested graph cannot
/// be built. The rest are integrity errors: a set of rooms breaks one of
/// the graph invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The configuration is unusable (bounds out of order, too few rooms).
    #[error("invalid graph configuration: {0}")]
    InvalidConfig(String),

    /// The name pool can't supply enough distinct names.
    #[error("name pool has {available} distinct names, {required} needed")]
    PoolTooSmall { required: usize, available: usize },

    /// The generator hit its draw cap before every room had enough connections.
    #[error("gave up after {draws} draws without satisfying degree bounds")]
    Exhausted { draws: usize },

    /// A room name that can't be stored as a room file and read back.
    #[error("invalid room name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// Two rooms share a name.
    #[error("duplicate room name {0:?}")]
    DuplicateName(String),

    /// A connection names a room that isn't in the set.
    #[error("room {room:?} connects to unknown room {target:?}")]
    DanglingConnection { room: String, target: String },

    /// A room connects to itself.
    #[error("room {0:?} connects to itself")]
    SelfConnection(String),

    /// A room lists the same connection twice.
    #[error("room {room:?} lists {target:?} more than once")]
    DuplicateConnection { room: String, target: String },

    /// A connection is present in one direction only.
    #[error("room {room:?} connects to {target:?} but not the other way round")]
    Asymmetric { room: String, target: String },

    /// A room's connection count is outside the configured bounds.
    #[error("room {room:?} has {degree} connections, expected {min}..={max}")]
    DegreeOutOfRange {
        room: String,
        degree: usize,
        min: usize,
        max: usize,
    },

    /// There isn't exactly one start room.
    #[error("expected exactly one start room, found {0}")]
    StartCount(usize),

    /// There isn't exactly one end room.
    #[error("expected exactly one end room, found {0}")]
    EndCount(usize),

    /// The set doesn't have the configured number of rooms.
    #[error("expected {expected} rooms, found {found}")]
    RoomCount { expected: usize, found: usize },
}

impl GraphError {
    /// Returns `true` for errors caused by the configuration rather than
    /// by the rooms themselves.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig(_) | Self::PoolTooSmall { .. } | Self::Exhausted { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_classified() {
        assert!(GraphError::Exhausted { draws: 10 }.is_configuration());
        assert!(
            GraphError::PoolTooSmall {
                required: 7,
                available: 3
            }
            .is_configuration()
        );
        assert!(!GraphError::DuplicateName("Lion".into()).is_configuration());
    }

    #[test]
    fn test_display_names_the_rooms() {
        let err = GraphError::DanglingConnection {
            room: "Lion".into(),
            target: "Unicorn".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Lion"));
        assert!(msg.contains("Unicorn"));
    }
}
