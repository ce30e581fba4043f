//! Error types for the codec and store.

use std::path::PathBuf;

use roomcrawl_graph::GraphError;

/// A room file, or a set of them, is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The record has no `ROOM NAME` line.
    #[error("room record has no ROOM NAME line")]
    MissingName,

    /// The record has no `ROOM TYPE` line.
    #[error("room {0:?} has no ROOM TYPE line")]
    MissingType(String),

    /// A line appeared before the `ROOM NAME` line.
    #[error("line {line}: {content:?} appears before ROOM NAME")]
    NameNotFirst { line: usize, content: String },

    /// A field that may appear once appeared twice.
    #[error("line {line}: repeated {field} line")]
    RepeatedField { line: usize, field: &'static str },

    /// The line doesn't start with a known token.
    #[error("line {line}: unrecognized line {content:?}")]
    UnknownLine { line: usize, content: String },

    /// A field has an empty value.
    #[error("line {line}: empty {field} value")]
    EmptyValue { line: usize, field: &'static str },

    /// The `ROOM TYPE` value isn't one of the known tags.
    #[error("line {line}: {reason}")]
    InvalidKind { line: usize, reason: String },

    /// Connection lines must be numbered 1, 2, 3, ... in order.
    #[error("line {line}: expected CONNECTION {expected}, found {found:?}")]
    ConnectionIndex {
        line: usize,
        expected: usize,
        found: String,
    },

    /// The decoded rooms don't form a valid room set.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors from writing or locating a stored room set.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing a file or directory failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No room set directory exists under the base directory.
    #[error("no room set found in {}", .0.display())]
    NoRoomSet(PathBuf),

    /// The newest room set directory has the wrong number of files.
    #[error("{} holds {found} room files, expected {expected}", .dir.display())]
    WrongFileCount {
        dir: PathBuf,
        expected: usize,
        found: usize,
    },

    /// A room file failed to decode.
    #[error("{}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// The decoded room set is invalid.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
