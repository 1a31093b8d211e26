use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    center_weights, combined_weights, edge_weights, AiPlayer, AttackResult, Board, Cell, Coord,
};

#[test]
fn test_hit_enqueues_orthogonal_neighbors_in_order() {
    let mut ai = AiPlayer::new(10);
    ai.record_attack(Coord::new(5, 5), AttackResult::Hit(1));
    assert_eq!(
        ai.potential_targets(),
        &[
            Coord::new(4, 5),
            Coord::new(6, 5),
            Coord::new(5, 4),
            Coord::new(5, 6)
        ]
    );
}

#[test]
fn test_corner_hit_enqueues_only_in_bounds_neighbors() {
    let mut ai = AiPlayer::new(10);
    ai.record_attack(Coord::new(0, 0), AttackResult::Hit(1));
    assert_eq!(
        ai.potential_targets(),
        &[Coord::new(1, 0), Coord::new(0, 1)]
    );
}

#[test]
fn test_miss_does_not_enqueue() {
    let mut ai = AiPlayer::new(10);
    ai.record_attack(Coord::new(5, 5), AttackResult::Miss);
    assert!(ai.potential_targets().is_empty());
}

#[test]
fn test_sink_clears_hunt_queue() {
    let mut ai = AiPlayer::new(10);
    ai.record_attack(Coord::new(5, 5), AttackResult::Hit(1));
    assert!(!ai.potential_targets().is_empty());
    ai.record_attack(Coord::new(5, 6), AttackResult::Sunk(1));
    assert!(ai.potential_targets().is_empty());
}

#[test]
fn test_duplicate_candidates_not_queued() {
    let mut ai = AiPlayer::new(10);
    ai.record_attack(Coord::new(5, 5), AttackResult::Hit(1));
    ai.record_attack(Coord::new(5, 7), AttackResult::Hit(1));
    let shared = Coord::new(5, 6);
    let occurrences = ai
        .potential_targets()
        .iter()
        .filter(|&&c| c == shared)
        .count();
    assert_eq!(occurrences, 1);
}

#[test]
fn test_hunt_prefers_candidate_adjacent_to_most_hits() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut ai = AiPlayer::new(10);
    ai.record_attack(Coord::new(5, 5), AttackResult::Hit(1));
    ai.record_attack(Coord::new(7, 5), AttackResult::Hit(1));
    // (6, 5) sits between the two known hits and must be chosen first
    assert_eq!(ai.select_target(&mut rng), Coord::new(6, 5));
}

#[test]
fn test_hunt_ties_resolve_to_first_inserted() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut ai = AiPlayer::new(10);
    ai.record_attack(Coord::new(5, 5), AttackResult::Hit(1));
    // every candidate touches exactly one hit, so insertion order decides
    assert_eq!(ai.select_target(&mut rng), Coord::new(4, 5));
}

#[test]
fn test_search_never_repeats_until_board_exhausted() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut ai = AiPlayer::new(5);
    let mut seen = HashSet::new();
    for _ in 0..25 {
        let coord = ai.select_target(&mut rng);
        assert!(seen.insert(coord), "repeated coordinate {coord}");
        assert!(coord.x < 5 && coord.y < 5);
        ai.record_attack(coord, AttackResult::Miss);
    }
    assert_eq!(ai.attacked_count(), 25);
}

#[test]
fn test_rejected_target_not_reselected() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut ai = AiPlayer::new(3);
    let first = ai.select_target(&mut rng);
    ai.record_rejected(first);
    for _ in 0..8 {
        let next = ai.select_target(&mut rng);
        assert_ne!(next, first);
        ai.record_attack(next, AttackResult::Miss);
    }
}

#[test]
fn test_weight_vectors_match_heuristic() {
    assert_eq!(center_weights(10), vec![0, 1, 2, 3, 4, 5, 4, 3, 2, 1]);
    assert_eq!(edge_weights(10), vec![4, 1, 1, 1, 1, 3, 1, 1, 1, 4]);
    let combined = combined_weights(10);
    assert_eq!(combined, vec![4, 2, 3, 4, 5, 8, 5, 4, 3, 5]);
    assert!(combined.iter().all(|&w| w > 0));
}

#[test]
fn test_weight_vectors_positive_for_small_boards() {
    for size in 2..=6 {
        assert!(combined_weights(size).iter().all(|&w| w > 0));
    }
}

#[test]
fn test_fleet_placement_consumes_pool() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = Board::new(10);
    let ai = AiPlayer::new(10);
    ai.place_ships(&mut rng, &mut board, vec![5, 4, 3, 3, 2]);

    assert_eq!(board.ships().len(), 5);
    assert_eq!(board.remaining(), 5);

    let mut placed: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
    placed.sort_unstable();
    assert_eq!(placed, vec![2, 3, 3, 4, 5]);

    let occupied = (0..10)
        .flat_map(|y| (0..10).map(move |x| Coord::new(x, y)))
        .filter(|&c| matches!(board.grid().get(c), Some(Cell::Occupied(_))))
        .count();
    assert_eq!(occupied, 17, "ships must not overlap");
}
