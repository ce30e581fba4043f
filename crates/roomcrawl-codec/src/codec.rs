//! Codec trait and the line-oriented text implementation.
//!
//! The codec works one room at a time. Connections are written as plain
//! room names, so decoding a single file can't tell whether they point
//! anywhere; [`RoomCodec::decode`] resolves a whole set of records at
//! once and rejects names that match no room.

use roomcrawl_graph::{GraphConfig, RoomKind, RoomRecord, RoomSet};

use crate::CodecError;

const NAME_TOKEN: &str = "ROOM NAME";
const TYPE_TOKEN: &str = "ROOM TYPE";
const CONNECTION_TOKEN: &str = "CONNECTION";

/// Converts rooms to and from their persisted form.
pub trait RoomCodec: Send + Sync + 'static {
    /// Serializes one room.
    fn encode_room(&self, record: &RoomRecord) -> String;

    /// Parses one room.
    ///
    /// # Errors
    /// Returns a [`CodecError`] if a name or type line is missing, or a
    /// line can't be classified.
    fn decode_room(&self, text: &str) -> Result<RoomRecord, CodecError>;

    /// Serializes every room in the set, in id order.
    fn encode(&self, set: &RoomSet) -> Vec<String> {
        set.to_records()
            .iter()
            .map(|record| self.encode_room(record))
            .collect()
    }

    /// Parses one block per room and resolves them into a room set.
    ///
    /// Blocks may come in any order.
    fn decode<S: AsRef<str>>(
        &self,
        blocks: &[S],
        config: &GraphConfig,
    ) -> Result<RoomSet, CodecError> {
        let records = blocks
            .iter()
            .map(|block| self.decode_room(block.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RoomSet::resolve(records, config)?)
    }
}

// ---------------------------------------------------------------------------
// TextCodec
// ---------------------------------------------------------------------------

/// A [`RoomCodec`] for the `ROOM NAME` / `CONNECTION n` / `ROOM TYPE`
/// file format.
///
/// Lines are told apart by their leading token, not their position,
/// except that the name line must come first. Blank lines are skipped.
///
/// ```rust
/// use roomcrawl_codec::{RoomCodec, TextCodec};
/// use roomcrawl_graph::{RoomKind, RoomRecord};
///
/// let record = RoomRecord {
///     name: "Lion".into(),
///     kind: RoomKind::Start,
///     connections: vec!["Wolf".into(), "Hawk".into(), "Bear".into()],
/// };
/// let text = TextCodec.encode_room(&record);
/// assert!(text.starts_with("ROOM NAME: Lion\nCONNECTION 1: Wolf\n"));
/// assert_eq!(TextCodec.decode_room(&text).unwrap(), record);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

/// What a single line of a room file holds.
enum Line<'a> {
    Name(&'a str),
    Connection { index: &'a str, target: &'a str },
    Kind(&'a str),
}

impl<'a> Line<'a> {
    /// Classifies a non-blank line by its leading token.
    fn classify(line: &'a str) -> Option<Self> {
        let (key, value) = line.split_once(':')?;
        let key = key.trim();
        let value = value.trim();
        if key == NAME_TOKEN {
            Some(Self::Name(value))
        } else if key == TYPE_TOKEN {
            Some(Self::Kind(value))
        } else {
            let index = key.strip_prefix(CONNECTION_TOKEN)?;
            // "CONNECTIONS 1" is not a connection line.
            if !index.starts_with(char::is_whitespace) {
                return None;
            }
            Some(Self::Connection {
                index: index.trim(),
                target: value,
            })
        }
    }
}

impl RoomCodec for TextCodec {
    fn encode_room(&self, record: &RoomRecord) -> String {
        let mut out = format!("{NAME_TOKEN}: {}\n", record.name);
        for (i, target) in record.connections.iter().enumerate() {
            out.push_str(&format!("{CONNECTION_TOKEN} {}: {target}\n", i + 1));
        }
        out.push_str(&format!("{TYPE_TOKEN}: {}\n", record.kind.tag()));
        out
    }

    fn decode_room(&self, text: &str) -> Result<RoomRecord, CodecError> {
        let mut name: Option<String> = None;
        let mut kind: Option<RoomKind> = None;
        let mut connections = Vec::new();

        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let parsed = Line::classify(line).ok_or_else(|| CodecError::UnknownLine {
                line: line_no,
                content: line.to_string(),
            })?;

            if name.is_none() && !matches!(parsed, Line::Name(_)) {
                return Err(CodecError::NameNotFirst {
                    line: line_no,
                    content: line.to_string(),
                });
            }

            match parsed {
                Line::Name(value) => {
                    if name.is_some() {
                        return Err(CodecError::RepeatedField {
                            line: line_no,
                            field: NAME_TOKEN,
                        });
                    }
                    if value.is_empty() {
                        return Err(CodecError::EmptyValue {
                            line: line_no,
                            field: NAME_TOKEN,
                        });
                    }
                    name = Some(value.to_string());
                }
                Line::Connection { index, target } => {
                    let expected = connections.len() + 1;
                    if index.parse::<usize>() != Ok(expected) {
                        return Err(CodecError::ConnectionIndex {
                            line: line_no,
                            expected,
                            found: index.to_string(),
                        });
                    }
                    if target.is_empty() {
                        return Err(CodecError::EmptyValue {
                            line: line_no,
                            field: CONNECTION_TOKEN,
                        });
                    }
                    connections.push(target.to_string());
                }
                Line::Kind(value) => {
                    if kind.is_some() {
                        return Err(CodecError::RepeatedField {
                            line: line_no,
                            field: TYPE_TOKEN,
                        });
                    }
                    kind = Some(value.parse().map_err(|reason| CodecError::InvalidKind {
                        line: line_no,
                        reason,
                    })?);
                }
            }
        }

        let name = name.ok_or(CodecError::MissingName)?;
        let kind = kind.ok_or_else(|| CodecError::MissingType(name.clone()))?;
        Ok(RoomRecord {
            name,
            kind,
            connections,
        })
    }
}
