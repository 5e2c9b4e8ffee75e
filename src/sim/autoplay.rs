//! Idle/demo player
//!
//! Picks selection rectangles the way a casual player would: small boxes whose
//! sum hits one of the divisors, with the occasional blunder.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::board::Cell;
use super::evaluate::matching_divisors;
use super::state::GameState;

/// Largest rectangle (in cells) the autoplayer considers
pub const MAX_AREA: u32 = 6;

/// Seeded rectangle picker
#[derive(Debug, Clone)]
pub struct AutoPlayer {
    rng: Pcg32,
    blunder_chance: f64,
}

impl AutoPlayer {
    pub fn new(seed: u64, blunder_chance: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            blunder_chance: blunder_chance.clamp(0.0, 1.0),
        }
    }

    /// Corners of the next rectangle to drag, or None if no selection can start
    pub fn next_move(&mut self, state: &GameState) -> Option<(Cell, Cell)> {
        if state.is_game_over() || !state.in_transit().is_empty() {
            return None;
        }

        let (scoring, duds) = candidate_rects(state);
        let blunder = self.rng.random_bool(self.blunder_chance);
        let pool = if (blunder && !duds.is_empty()) || scoring.is_empty() {
            &duds
        } else {
            &scoring
        };
        if pool.is_empty() {
            return None;
        }
        let pick = pool[self.rng.random_range(0..pool.len())];
        Some(pick)
    }
}

/// Split every small rectangle holding at least one tile into
/// `(scoring, non_scoring)`
fn candidate_rects(state: &GameState) -> (Vec<(Cell, Cell)>, Vec<(Cell, Cell)>) {
    let pool = state.pool();
    let (width, height) = (pool.width(), pool.height());

    // Dense value grid, 0 = empty cell
    let mut values = vec![0u32; pool.capacity()];
    for tile in pool.tiles() {
        values[(tile.cell.row * width + tile.cell.col) as usize] = tile.value;
    }

    let mut scoring = Vec::new();
    let mut duds = Vec::new();
    for w in 1..=MAX_AREA.min(width) {
        for h in 1..=(MAX_AREA / w).min(height) {
            for col in 0..=(width - w) {
                for row in 0..=(height - h) {
                    let sum: u32 = (row..row + h)
                        .flat_map(|r| (col..col + w).map(move |c| (r * width + c) as usize))
                        .map(|i| values[i])
                        .sum();
                    if sum == 0 {
                        continue;
                    }
                    let rect = (Cell::new(col, row), Cell::new(col + w - 1, row + h - 1));
                    if matching_divisors(sum).is_empty() {
                        duds.push(rect);
                    } else {
                        scoring.push(rect);
                    }
                }
            }
        }
    }
    (scoring, duds)
}
