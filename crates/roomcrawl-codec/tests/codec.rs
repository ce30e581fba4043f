//! Integration tests for encoding and decoding whole room sets.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use roomcrawl_codec::{CodecError, RoomCodec, TextCodec};
use roomcrawl_graph::{DEFAULT_NAME_POOL, Generator, GraphConfig, GraphError, RoomSet};

// =========================================================================
// Helpers
// =========================================================================

fn generated(seed: u64) -> RoomSet {
    Generator::new(GraphConfig::default())
        .unwrap()
        .generate(DEFAULT_NAME_POOL, &mut StdRng::seed_from_u64(seed))
        .unwrap()
}

fn connection_names(set: &RoomSet, name: &str) -> HashSet<String> {
    let room = set.find(name).unwrap();
    set.neighbors(room.id).map(|r| r.name.clone()).collect()
}

// =========================================================================
// Round trip
// =========================================================================

#[test]
fn test_decode_encode_preserves_rooms() {
    let config = GraphConfig::default();
    for seed in 0..50 {
        let original = generated(seed);
        let mut blocks = TextCodec.encode(&original);
        // Storage hands files back in arbitrary order.
        blocks.reverse();
        let decoded = TextCodec.decode(&blocks, &config).unwrap();

        assert_eq!(decoded.len(), original.len());
        assert_eq!(decoded.start().name, original.start().name);
        assert_eq!(decoded.end().name, original.end().name);
        for room in original.iter() {
            let copy = decoded.find(&room.name).unwrap();
            assert_eq!(copy.kind, room.kind);
            assert_eq!(
                connection_names(&decoded, &room.name),
                connection_names(&original, &room.name)
            );
        }
    }
}

#[test]
fn test_encode_writes_one_block_per_room() {
    let set = generated(9);
    let blocks = TextCodec.encode(&set);
    assert_eq!(blocks.len(), 7);
    for (room, block) in set.iter().zip(&blocks) {
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], format!("ROOM NAME: {}", room.name));
        assert_eq!(lines.len(), room.degree() + 2);
        assert_eq!(
            *lines.last().unwrap(),
            format!("ROOM TYPE: {}", room.kind.tag())
        );
    }
}

// =========================================================================
// Malformed input
// =========================================================================

#[test]
fn test_missing_type_line_fails_decode() {
    let set = generated(5);
    let mut blocks = TextCodec.encode(&set);
    let mid = set.iter().nth(3).unwrap().name.clone();
    blocks[3] = blocks[3]
        .lines()
        .filter(|l| !l.starts_with("ROOM TYPE"))
        .map(|l| format!("{l}\n"))
        .collect();

    let err = TextCodec
        .decode(&blocks, &GraphConfig::default())
        .unwrap_err();
    assert_eq!(err, CodecError::MissingType(mid));
}

#[test]
fn test_dangling_connection_fails_decode() {
    let set = generated(6);
    let mut blocks = TextCodec.encode(&set);
    let victim = set.iter().nth(2).unwrap();
    let target = &set.get(victim.connections[0]).name;
    blocks[2] = blocks[2].replace(&format!("CONNECTION 1: {target}"), "CONNECTION 1: Unicorn");

    let err = TextCodec
        .decode(&blocks, &GraphConfig::default())
        .unwrap_err();
    assert_eq!(
        err,
        CodecError::Graph(GraphError::DanglingConnection {
            room: victim.name.clone(),
            target: "Unicorn".into()
        })
    );
}

#[test]
fn test_missing_room_file_fails_decode() {
    let set = generated(8);
    let blocks = TextCodec.encode(&set);
    let err = TextCodec
        .decode(&blocks[1..], &GraphConfig::default())
        .unwrap_err();
    // Someone still points at the dropped room.
    assert!(matches!(
        err,
        CodecError::Graph(GraphError::DanglingConnection { .. })
    ));
}

#[test]
fn test_duplicate_room_file_fails_decode() {
    let set = generated(10);
    let mut blocks = TextCodec.encode(&set);
    blocks.push(blocks[4].clone());
    let err = TextCodec
        .decode(&blocks, &GraphConfig::default())
        .unwrap_err();
    assert_eq!(
        err,
        CodecError::Graph(GraphError::DuplicateName(set.iter().nth(4).unwrap().name.clone()))
    );
}
