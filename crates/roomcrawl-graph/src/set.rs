//! The room set: an arena of rooms indexed by id and by name.

use std::collections::{HashMap, HashSet};

use crate::{GraphConfig, GraphError, Room, RoomId, RoomKind, RoomRecord, check_name};

/// A complete room graph for one game.
///
/// Rooms live in a `Vec` and refer to each other by [`RoomId`], so the
/// set can be cloned or rebuilt without any reference going stale. Every
/// set has exactly one start room and one end room, and names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSet {
    rooms: Vec<Room>,
    index: HashMap<String, RoomId>,
    start: RoomId,
    end: RoomId,
}

impl RoomSet {
    /// Builds a set from rooms whose ids already match their position.
    ///
    /// Checks names, name uniqueness and the start/end counts. Degree and
    /// symmetry are checked by [`validate`](Self::validate).
    pub(crate) fn from_rooms(rooms: Vec<Room>) -> Result<Self, GraphError> {
        let mut index = HashMap::with_capacity(rooms.len());
        for (i, room) in rooms.iter().enumerate() {
            debug_assert_eq!(room.id, RoomId(i));
            check_name(&room.name)?;
            if index.insert(room.name.clone(), room.id).is_some() {
                return Err(GraphError::DuplicateName(room.name.clone()));
            }
        }

        let of_kind = |kind: RoomKind| -> Vec<RoomId> {
            rooms
                .iter()
                .filter(|r| r.kind == kind)
                .map(|r| r.id)
                .collect()
        };
        let starts = of_kind(RoomKind::Start);
        let ends = of_kind(RoomKind::End);
        let &[start] = starts.as_slice() else {
            return Err(GraphError::StartCount(starts.len()));
        };
        let &[end] = ends.as_slice() else {
            return Err(GraphError::EndCount(ends.len()));
        };

        Ok(Self {
            rooms,
            index,
            start,
            end,
        })
    }

    /// Rebuilds a set from name-based records.
    ///
    /// Records may arrive in any order: every connection name is looked
    /// up against the whole set. A name with no matching room, or any
    /// broken invariant, fails the whole set.
    pub fn resolve(records: Vec<RoomRecord>, config: &GraphConfig) -> Result<Self, GraphError> {
        let mut names: HashMap<&str, RoomId> = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if names.insert(record.name.as_str(), RoomId(i)).is_some() {
                return Err(GraphError::DuplicateName(record.name.clone()));
            }
        }

        let mut rooms = Vec::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let connections = record
                .connections
                .iter()
                .map(|target| {
                    names
                        .get(target.as_str())
                        .copied()
                        .ok_or_else(|| GraphError::DanglingConnection {
                            room: record.name.clone(),
                            target: target.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rooms.push(Room {
                id: RoomId(i),
                name: record.name.clone(),
                kind: record.kind,
                connections,
            });
        }

        let set = Self::from_rooms(rooms)?;
        set.validate(config)?;
        tracing::debug!(
            rooms = set.len(),
            edges = set.edge_count(),
            start = %set.start().name,
            "room set resolved"
        );
        Ok(set)
    }

    /// Checks every graph invariant against `config`.
    ///
    /// Room count, no self or duplicate connections, symmetric
    /// connections, and every degree within bounds.
    pub fn validate(&self, config: &GraphConfig) -> Result<(), GraphError> {
        if self.rooms.len() != config.room_count {
            return Err(GraphError::RoomCount {
                expected: config.room_count,
                found: self.rooms.len(),
            });
        }

        for room in &self.rooms {
            let mut seen = HashSet::with_capacity(room.connections.len());
            for &target in &room.connections {
                let other = self.get(target);
                if target == room.id {
                    return Err(GraphError::SelfConnection(room.name.clone()));
                }
                if !seen.insert(target) {
                    return Err(GraphError::DuplicateConnection {
                        room: room.name.clone(),
                        target: other.name.clone(),
                    });
                }
                if !other.is_connected_to(room.id) {
                    return Err(GraphError::Asymmetric {
                        room: room.name.clone(),
                        target: other.name.clone(),
                    });
                }
            }
            if !config.degree_in_bounds(room.degree()) {
                return Err(GraphError::DegreeOutOfRange {
                    room: room.name.clone(),
                    degree: room.degree(),
                    min: config.min_connections,
                    max: config.max_connections,
                });
            }
        }
        Ok(())
    }

    /// Converts the set back to name-based records, in id order.
    pub fn to_records(&self) -> Vec<RoomRecord> {
        self.rooms
            .iter()
            .map(|room| RoomRecord {
                name: room.name.clone(),
                kind: room.kind,
                connections: room
                    .connections
                    .iter()
                    .map(|&id| self.get(id).name.clone())
                    .collect(),
            })
            .collect()
    }

    /// The start room.
    pub fn start(&self) -> &Room {
        self.get(self.start)
    }

    /// The end room.
    pub fn end(&self) -> &Room {
        self.get(self.end)
    }

    /// Looks up a room by id.
    ///
    /// # Panics
    /// If `id` was not issued by this set.
    pub fn get(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// Looks up a room by name.
    pub fn find(&self, name: &str) -> Option<&Room> {
        self.index.get(name).map(|&id| self.get(id))
    }

    /// The rooms reachable from `id`, in connection order.
    pub fn neighbors(&self, id: RoomId) -> impl Iterator<Item = &Room> {
        self.get(id).connections.iter().map(|&c| self.get(c))
    }

    /// Number of undirected connections in the set.
    pub fn edge_count(&self) -> usize {
        self.rooms.iter().map(Room::degree).sum::<usize>() / 2
    }

    /// All rooms in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if the set has no rooms. Never true for a built set.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, kind: RoomKind, connections: &[&str]) -> RoomRecord {
        RoomRecord {
            name: name.into(),
            kind,
            connections: connections.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Four rooms, all pairwise connected (degree 3 each).
    fn square() -> Vec<RoomRecord> {
        vec![
            record("Lion", RoomKind::Start, &["Wolf", "Hawk", "Bear"]),
            record("Wolf", RoomKind::End, &["Lion", "Hawk", "Bear"]),
            record("Hawk", RoomKind::Mid, &["Lion", "Wolf", "Bear"]),
            record("Bear", RoomKind::Mid, &["Lion", "Wolf", "Hawk"]),
        ]
    }

    fn config() -> GraphConfig {
        GraphConfig::with_rooms(4)
    }

    #[test]
    fn test_resolve_binds_names_to_ids() {
        let set = RoomSet::resolve(square(), &config()).unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(set.start().name, "Lion");
        assert_eq!(set.end().name, "Wolf");
        let names: Vec<&str> = set
            .neighbors(set.start().id)
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["Wolf", "Hawk", "Bear"]);
        assert_eq!(set.edge_count(), 6);
    }

    #[test]
    fn test_resolve_is_order_independent() {
        let mut reversed = square();
        reversed.reverse();
        let set = RoomSet::resolve(reversed, &config()).unwrap();
        assert_eq!(set.start().name, "Lion");
        assert_eq!(set.find("Hawk").unwrap().degree(), 3);
    }

    #[test]
    fn test_resolve_rejects_dangling_connection() {
        let mut records = square();
        records[2].connections[2] = "Unicorn".into();
        let err = RoomSet::resolve(records, &config()).unwrap_err();
        assert_eq!(
            err,
            GraphError::DanglingConnection {
                room: "Hawk".into(),
                target: "Unicorn".into()
            }
        );
    }

    #[test]
    fn test_resolve_rejects_duplicate_name() {
        let mut records = square();
        records[3].name = "Hawk".into();
        assert_eq!(
            RoomSet::resolve(records, &config()).unwrap_err(),
            GraphError::DuplicateName("Hawk".into())
        );
    }

    #[test]
    fn test_resolve_rejects_asymmetric_connection() {
        let mut records = square();
        records[3].connections.retain(|c| c != "Hawk");
        let err = RoomSet::resolve(records, &GraphConfig {
            room_count: 4,
            min_connections: 2,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, GraphError::Asymmetric { .. }));
    }

    #[test]
    fn test_resolve_rejects_self_connection() {
        let mut records = square();
        records[0].connections[0] = "Lion".into();
        let err = RoomSet::resolve(records, &config()).unwrap_err();
        assert_eq!(err, GraphError::SelfConnection("Lion".into()));
    }

    #[test]
    fn test_resolve_rejects_duplicate_connection() {
        let mut records = square();
        records[0].connections.push("Wolf".into());
        let err = RoomSet::resolve(records, &config()).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateConnection { .. }));
    }

    #[test]
    fn test_resolve_rejects_low_degree() {
        let records = square();
        let err = RoomSet::resolve(records, &GraphConfig {
            room_count: 4,
            min_connections: 4,
            max_connections: 6,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, GraphError::DegreeOutOfRange { degree: 3, .. }));
    }

    #[test]
    fn test_resolve_rejects_high_degree() {
        // Lion connects to all seven other rooms.
        let others = ["Wolf", "Hawk", "Bear", "Crow", "Stag", "Dog", "Trout"];
        let mut records = vec![record("Lion", RoomKind::Start, &others)];
        for (i, name) in others.iter().enumerate() {
            let kind = if i == 0 { RoomKind::End } else { RoomKind::Mid };
            records.push(record(name, kind, &["Lion"]));
        }
        let err = RoomSet::resolve(records, &GraphConfig {
            room_count: 8,
            min_connections: 1,
            max_connections: 6,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            GraphError::DegreeOutOfRange {
                room: "Lion".into(),
                degree: 7,
                min: 1,
                max: 6,
            }
        );
    }

    #[test]
    fn test_resolve_rejects_unstorable_name() {
        let mut records = square();
        records[3].name = " Bear".into();
        for record in &mut records[..3] {
            for target in &mut record.connections {
                if target == "Bear" {
                    *target = " Bear".into();
                }
            }
        }
        assert!(matches!(
            RoomSet::resolve(records, &config()).unwrap_err(),
            GraphError::InvalidName { .. }
        ));
    }

    #[test]
    fn test_resolve_rejects_second_start() {
        let mut records = square();
        records[2].kind = RoomKind::Start;
        assert_eq!(
            RoomSet::resolve(records, &config()).unwrap_err(),
            GraphError::StartCount(2)
        );
    }

    #[test]
    fn test_resolve_rejects_missing_end() {
        let mut records = square();
        records[1].kind = RoomKind::Mid;
        assert_eq!(
            RoomSet::resolve(records, &config()).unwrap_err(),
            GraphError::EndCount(0)
        );
    }

    #[test]
    fn test_resolve_checks_room_count() {
        let err = RoomSet::resolve(square(), &GraphConfig::default()).unwrap_err();
        assert_eq!(
            err,
            GraphError::RoomCount {
                expected: 7,
                found: 4
            }
        );
    }

    #[test]
    fn test_to_records_round_trips() {
        let set = RoomSet::resolve(square(), &config()).unwrap();
        assert_eq!(set.to_records(), square());
    }
}
