//! Automated opponent: weighted-random search plus adjacency hunting.

use std::collections::HashSet;

use log::{debug, trace};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use crate::board::Board;
use crate::common::AttackResult;
use crate::grid::Coord;
use crate::ship::Direction;

/// Per-axis weights peaking at the center index: `c - |c - i|` with
/// `c = size / 2`.
pub fn center_weights(size: usize) -> Vec<u32> {
    let center = size / 2;
    (0..size)
        .map(|i| (center - center.abs_diff(i)) as u32)
        .collect()
}

/// Per-axis weights favoring the first and last indices, with a small bump
/// at the middle.
pub fn edge_weights(size: usize) -> Vec<u32> {
    let mut weights = vec![1u32; size];
    weights[0] += 3;
    weights[size - 1] += 3;
    weights[size / 2] += 2;
    weights
}

/// Sampling weights for one axis: center and edge vectors added pointwise.
/// Non-zero at every index for any size of at least 2.
pub fn combined_weights(size: usize) -> Vec<u32> {
    center_weights(size)
        .into_iter()
        .zip(edge_weights(size))
        .map(|(a, b)| a + b)
        .collect()
}

/// Automated opponent. Tracks every coordinate it has fired at, the hits it
/// knows about, and an insertion-ordered queue of candidate cells derived
/// from unsunk hits.
pub struct AiPlayer {
    size: usize,
    weights: Vec<u32>,
    attacked: HashSet<Coord>,
    hits: HashSet<Coord>,
    potential_targets: Vec<Coord>,
}

impl AiPlayer {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            weights: combined_weights(size),
            attacked: HashSet::new(),
            hits: HashSet::new(),
            potential_targets: Vec::new(),
        }
    }

    /// Coordinates queued for hunting, in insertion order.
    pub fn potential_targets(&self) -> &[Coord] {
        &self.potential_targets
    }

    /// Number of coordinates fired at so far.
    pub fn attacked_count(&self) -> usize {
        self.attacked.len()
    }

    /// Place one ship per id `1..=count`, drawing each length at random from
    /// `lengths` until the pool is empty. Rejected placements resample;
    /// every accepted placement removes exactly one length instance. The
    /// caller hands over its own pool copy, never a shared one.
    pub fn place_ships<R: Rng>(&self, rng: &mut R, board: &mut Board, mut lengths: Vec<usize>) {
        let count = lengths.len();
        for id in 1..=count {
            loop {
                let anchor = Coord::new(
                    rng.random_range(0..self.size),
                    rng.random_range(0..self.size),
                );
                let direction = if rng.random() {
                    Direction::Horizontal
                } else {
                    Direction::Vertical
                };
                let slot = rng.random_range(0..lengths.len());
                match board.place_ship(lengths[slot], anchor, direction, id as u8) {
                    Ok(()) => {
                        lengths.remove(slot);
                        break;
                    }
                    Err(err) => trace!("ai placement resample: {err}"),
                }
            }
        }
        debug!("ai fleet placed: {count} ships");
    }

    /// Choose the next attack coordinate.
    ///
    /// Hunt mode consumes the queued candidate adjacent to the most known
    /// hits, earliest queued on ties; search mode samples both axes from the
    /// combined weight distribution, rejecting coordinates already fired at.
    pub fn select_target<R: Rng>(&mut self, rng: &mut R) -> Coord {
        while let Some(coord) = self.pop_best_candidate() {
            // Candidates attacked since being queued are stale; drop them
            // rather than re-firing.
            if !self.attacked.contains(&coord) {
                debug!("ai hunt target {coord}");
                return coord;
            }
        }
        let coord = self.weighted_random_target(rng);
        debug!("ai search target {coord}");
        coord
    }

    /// Record the outcome of an attack at `coord`. Hits feed the hunt
    /// queue; a sink abandons the hunt entirely, since the sunk ship
    /// accounts for the hits that drove it.
    pub fn record_attack(&mut self, coord: Coord, result: AttackResult) {
        self.attacked.insert(coord);
        match result {
            AttackResult::Miss => {}
            AttackResult::Hit(_) => {
                self.hits.insert(coord);
                self.enqueue_neighbors(coord);
            }
            AttackResult::Sunk(_) => {
                self.hits.insert(coord);
                self.potential_targets.clear();
            }
        }
    }

    /// Record a coordinate the board rejected so it is never selected again.
    pub fn record_rejected(&mut self, coord: Coord) {
        self.attacked.insert(coord);
    }

    fn pop_best_candidate(&mut self) -> Option<Coord> {
        if self.potential_targets.is_empty() {
            return None;
        }
        let mut best = 0;
        let mut best_hits = self.count_adjacent_hits(self.potential_targets[0]);
        for (i, &coord) in self.potential_targets.iter().enumerate().skip(1) {
            let n = self.count_adjacent_hits(coord);
            if n > best_hits {
                best = i;
                best_hits = n;
            }
        }
        Some(self.potential_targets.remove(best))
    }

    fn count_adjacent_hits(&self, coord: Coord) -> usize {
        coord.neighbors().filter(|c| self.hits.contains(c)).count()
    }

    fn weighted_random_target<R: Rng>(&self, rng: &mut R) -> Coord {
        // Both axes share the combined weight vector and are sampled
        // independently. Rejection terminates because the attacked set stays
        // a strict subset of the grid while the game is live.
        match WeightedIndex::new(self.weights.iter().copied()) {
            Ok(dist) => loop {
                let coord = Coord::new(dist.sample(rng), dist.sample(rng));
                if !self.attacked.contains(&coord) {
                    return coord;
                }
            },
            // Degenerate weight vectors fall back to uniform sampling.
            Err(_) => loop {
                let coord = Coord::new(
                    rng.random_range(0..self.size),
                    rng.random_range(0..self.size),
                );
                if !self.attacked.contains(&coord) {
                    return coord;
                }
            },
        }
    }

    fn enqueue_neighbors(&mut self, coord: Coord) {
        for n in coord.neighbors() {
            if n.x < self.size
                && n.y < self.size
                && !self.attacked.contains(&n)
                && !self.potential_targets.contains(&n)
            {
                self.potential_targets.push(n);
            }
        }
    }
}
