//! Snapshot ordering and JSON shape.

use serde_json::json;

use tetris_stack_core::{PieceGenerator, PieceKind, Rack, RackConfig, Snapshot};

#[test]
fn snapshot_orders_queue_front_first_and_reserve_top_first() {
    let mut rack = Rack::new(RackConfig::default(), PieceGenerator::seeded(5));
    rack.reserve().unwrap();
    rack.reserve().unwrap();

    let snapshot = rack.snapshot();
    let queue: Vec<u64> = snapshot.queue.iter().map(|p| p.id).collect();
    let reserve: Vec<u64> = snapshot.reserve.iter().map(|p| p.id).collect();
    assert_eq!(queue, vec![2, 3, 4, 5, 6]);
    assert_eq!(reserve, vec![1, 0]);
}

#[test]
fn snapshot_does_not_mutate() {
    let rack = Rack::new(RackConfig::default(), PieceGenerator::seeded(5));
    let first = rack.snapshot();
    let second = rack.snapshot();
    assert_eq!(first, second);
    assert_eq!(rack.generator().next_id(), 5);
}

#[test]
fn snapshot_json_shape() {
    let config = RackConfig {
        queue_capacity: 2,
        reserve_capacity: 2,
    };
    let mut rack = Rack::new(config, PieceGenerator::seeded(9));
    rack.reserve().unwrap();

    let snapshot = rack.snapshot();
    let value = serde_json::to_value(&snapshot).unwrap();
    let kind = |p: &tetris_stack_core::Piece| serde_json::to_value(p.kind).unwrap();

    assert_eq!(
        value,
        json!({
            "queue": [
                { "kind": kind(&snapshot.queue[0]), "id": 1 },
                { "kind": kind(&snapshot.queue[1]), "id": 2 },
            ],
            "reserve": [
                { "kind": kind(&snapshot.reserve[0]), "id": 0 },
            ],
        })
    );

    let back: Snapshot = serde_json::from_value(value).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn piece_kind_serializes_as_letter() {
    assert_eq!(serde_json::to_string(&PieceKind::T).unwrap(), "\"T\"");
    let kind: PieceKind = serde_json::from_str("\"L\"").unwrap();
    assert_eq!(kind, PieceKind::L);
}

#[test]
fn config_fills_missing_fields_with_defaults() {
    let config: RackConfig = serde_json::from_str(r#"{ "queue_capacity": 8 }"#).unwrap();
    assert_eq!(config.queue_capacity, 8);
    assert_eq!(config.reserve_capacity, 3);
}
