//! Selection evaluation: sum a tile set and find the divisors it satisfies

use serde::{Deserialize, Serialize};

use super::board::Tile;
use crate::consts::DIVISORS;

/// Result of evaluating a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub sum: u32,
    /// Matching divisors, ascending
    pub divisors: Vec<u32>,
}

impl Evaluation {
    /// Smallest matching divisor (the deterministic tie-break)
    pub fn chosen_divisor(&self) -> Option<u32> {
        self.divisors.first().copied()
    }

    pub fn is_match(&self) -> bool {
        !self.divisors.is_empty()
    }
}

/// Divisors from [`DIVISORS`] that divide `sum`, ascending.
///
/// A zero sum matches nothing: an empty selection is never a valid claim.
pub fn matching_divisors(sum: u32) -> Vec<u32> {
    if sum == 0 {
        return Vec::new();
    }
    DIVISORS.iter().copied().filter(|d| sum % d == 0).collect()
}

/// Sum the tiles and list the divisors the sum satisfies
pub fn evaluate<'a, I>(tiles: I) -> Evaluation
where
    I: IntoIterator<Item = &'a Tile>,
{
    let sum = tiles.into_iter().map(|t| t.value).sum();
    Evaluation {
        sum,
        divisors: matching_divisors(sum),
    }
}
