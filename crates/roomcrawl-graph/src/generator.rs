//! Random room set generation by rejection sampling.
//!
//! Rooms get shuffled names from a pool; then random pairs of rooms are
//! drawn and connected until every room has at least `min_connections`.
//! A draw is rejected when either room is already at `max_connections`,
//! when both picks are the same room, or when the pair is already
//! connected.
//!
//! Nothing bounds the number of rejected draws in general, so the
//! generator gives up with [`GraphError::Exhausted`] after
//! `max_draws` draws instead of spinning forever.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::{GraphConfig, GraphError, Room, RoomId, RoomKind, RoomSet, check_name};

/// Builds random room sets for a fixed [`GraphConfig`].
#[derive(Debug, Clone)]
pub struct Generator {
    config: GraphConfig,
}

impl Generator {
    /// Create a generator. Fails if the config describes an impossible graph.
    pub fn new(config: GraphConfig) -> Result<Self, GraphError> {
        Ok(Self {
            config: config.validated()?,
        })
    }

    /// Generate a room set with names drawn from `pool`.
    ///
    /// The first shuffled name becomes the start room, the second the end
    /// room, and the rest mid rooms. Duplicate names in `pool` count once.
    /// Every name must pass [`check_name`].
    pub fn generate<R: Rng>(&self, pool: &[&str], rng: &mut R) -> Result<RoomSet, GraphError> {
        let n = self.config.room_count;

        let mut names: Vec<&str> = Vec::with_capacity(pool.len());
        for &name in pool {
            check_name(name)?;
            if !names.contains(&name) {
                names.push(name);
            }
        }
        if names.len() < n {
            return Err(GraphError::PoolTooSmall {
                required: n,
                available: names.len(),
            });
        }
        names.shuffle(rng);

        let mut adjacency: Vec<Vec<RoomId>> = vec![Vec::new(); n];
        let mut draws = 0usize;
        while !self.is_full(&adjacency) {
            if draws == self.config.max_draws {
                return Err(GraphError::Exhausted { draws });
            }
            draws += 1;

            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            if self.can_connect(&adjacency, a, b) {
                adjacency[a].push(RoomId(b));
                adjacency[b].push(RoomId(a));
            } else {
                trace!(a, b, "draw rejected");
            }
        }

        let rooms = adjacency
            .into_iter()
            .enumerate()
            .map(|(i, connections)| Room {
                id: RoomId(i),
                name: names[i].to_string(),
                kind: match i {
                    0 => RoomKind::Start,
                    1 => RoomKind::End,
                    _ => RoomKind::Mid,
                },
                connections,
            })
            .collect();

        let set = RoomSet::from_rooms(rooms)?;
        set.validate(&self.config)?;
        debug!(
            rooms = n,
            edges = set.edge_count(),
            draws,
            start = %set.start().name,
            end = %set.end().name,
            "room set generated"
        );
        Ok(set)
    }

    /// Every room has reached the lower degree bound.
    fn is_full(&self, adjacency: &[Vec<RoomId>]) -> bool {
        adjacency
            .iter()
            .all(|c| c.len() >= self.config.min_connections)
    }

    fn can_connect(&self, adjacency: &[Vec<RoomId>], a: usize, b: usize) -> bool {
        let max = self.config.max_connections;
        a != b
            && adjacency[a].len() < max
            && adjacency[b].len() < max
            && !adjacency[a].contains(&RoomId(b))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::DEFAULT_NAME_POOL;

    #[test]
    fn test_generator_rejects_invalid_config() {
        assert!(Generator::new(GraphConfig::with_rooms(1)).is_err());
    }

    #[test]
    fn test_first_two_rooms_are_start_and_end() {
        let generator = Generator::new(GraphConfig::default()).unwrap();
        let set = generator
            .generate(DEFAULT_NAME_POOL, &mut StdRng::seed_from_u64(7))
            .unwrap();
        assert_eq!(set.start().id, RoomId(0));
        assert_eq!(set.end().id, RoomId(1));
        assert!(set.iter().skip(2).all(|r| r.kind == RoomKind::Mid));
    }

    #[test]
    fn test_pool_too_small() {
        let generator = Generator::new(GraphConfig::default()).unwrap();
        let err = generator
            .generate(&["A", "B", "C", "A", "B"], &mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::PoolTooSmall {
                required: 7,
                available: 3
            }
        );
    }

    #[test]
    fn test_rejects_names_that_cannot_be_stored() {
        let generator = Generator::new(GraphConfig::with_rooms(4)).unwrap();
        for bad in [" Lion", "Lion\nROOM TYPE: END_ROOM", "Lion:Wolf", "../Lion", "Li\\on", ""] {
            let pool = [bad, "Wolf", "Hawk", "Bear", "Crow"];
            let err = generator
                .generate(&pool, &mut StdRng::seed_from_u64(5))
                .unwrap_err();
            assert!(
                matches!(&err, GraphError::InvalidName { name, .. } if name == bad),
                "{bad:?}: {err}"
            );
        }
    }

    #[test]
    fn test_exhausts_draw_cap() {
        let config = GraphConfig {
            max_draws: 1,
            ..Default::default()
        };
        let generator = Generator::new(config).unwrap();
        let err = generator
            .generate(DEFAULT_NAME_POOL, &mut StdRng::seed_from_u64(3))
            .unwrap_err();
        assert_eq!(err, GraphError::Exhausted { draws: 1 });
    }

    #[test]
    fn test_can_connect_guards() {
        let generator = Generator::new(GraphConfig::with_rooms(4)).unwrap();
        let mut adjacency = vec![Vec::new(); 4];
        assert!(!generator.can_connect(&adjacency, 2, 2));
        assert!(generator.can_connect(&adjacency, 0, 1));
        adjacency[0].push(RoomId(1));
        adjacency[1].push(RoomId(0));
        assert!(!generator.can_connect(&adjacency, 0, 1));
        assert!(!generator.can_connect(&adjacency, 1, 0));
    }

    #[test]
    fn test_can_connect_respects_max_degree() {
        let config = GraphConfig {
            room_count: 4,
            min_connections: 1,
            max_connections: 1,
            ..Default::default()
        };
        let generator = Generator::new(config).unwrap();
        let adjacency = vec![vec![RoomId(1)], vec![RoomId(0)], vec![], vec![]];
        assert!(!generator.can_connect(&adjacency, 0, 2));
        assert!(generator.can_connect(&adjacency, 2, 3));
    }
}
