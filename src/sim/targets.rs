//! Per-divisor target lanes and prime escalation
//!
//! Each divisor collects tiles into its own lane. A lane's target is a prime;
//! once the lane has consumed `NUMBERS_PER_TARGET` tiles it escalates to the
//! next prime above the highest prime held by *any* lane, which keeps the four
//! lanes in step with each other.

use serde::{Deserialize, Serialize};

use super::prime::next_prime;
use crate::consts::{CYCLE_REWARD, DIVISORS, ESCALATION_REWARD, NUMBERS_PER_TARGET};

/// Progress for one divisor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRecord {
    pub divisor: u32,
    pub current_prime: u32,
    /// Threshold for `accumulated_value` (always equals `current_prime`)
    pub target: u32,
    /// Sum collected since the last cycle completion or escalation
    pub accumulated_value: u32,
    /// Tiles collected into this lane over the whole run
    pub cycle_count: u32,
    /// Tiles collected since the last escalation
    pub lifetime_count: u32,
}

impl TargetRecord {
    pub fn new(divisor: u32) -> Self {
        Self {
            divisor,
            current_prime: divisor,
            target: divisor,
            accumulated_value: 0,
            cycle_count: 0,
            lifetime_count: 0,
        }
    }

    /// HUD counter text
    pub fn label(&self) -> String {
        format!("Div by {}: {}/{}", self.current_prime, self.accumulated_value, self.target)
    }

    /// Fill of the progress bar, 0.0..=1.0
    pub fn progress(&self) -> f32 {
        (self.accumulated_value as f32 / self.target as f32).min(1.0)
    }

    /// How close the lane is to its next escalation, 0..=100
    pub fn escalation_percent(&self) -> u32 {
        (self.lifetime_count * 100 / NUMBERS_PER_TARGET).min(100)
    }
}

/// A lane moved to a new prime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Escalation {
    pub old_prime: u32,
    pub new_prime: u32,
}

/// Result of committing a selection to a lane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetUpdate {
    /// Lane state after the commit
    pub record: TargetRecord,
    pub escalation: Option<Escalation>,
    pub cycle_completed: bool,
    /// Health rewards earned, in the order they were granted
    pub rewards: Vec<i32>,
}

/// The four divisor lanes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetTracker {
    records: Vec<TargetRecord>,
}

impl Default for TargetTracker {
    fn default() -> Self {
        Self {
            records: DIVISORS.iter().map(|&d| TargetRecord::new(d)).collect(),
        }
    }
}

impl TargetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lanes, in ascending divisor order
    pub fn records(&self) -> &[TargetRecord] {
        &self.records
    }

    pub fn get(&self, divisor: u32) -> Option<&TargetRecord> {
        self.records.iter().find(|r| r.divisor == divisor)
    }

    /// Highest prime held by any lane
    pub fn max_prime(&self) -> u32 {
        self.records
            .iter()
            .map(|r| r.current_prime)
            .max()
            .unwrap_or(0)
    }

    #[cfg(test)]
    pub(crate) fn record_mut(&mut self, divisor: u32) -> &mut TargetRecord {
        self.records
            .iter_mut()
            .find(|r| r.divisor == divisor)
            .expect("lane exists")
    }

    /// Add a validated selection to a lane.
    ///
    /// Panics if `divisor` is not a lane or does not divide `sum`.
    pub fn commit(&mut self, divisor: u32, sum: u32, tile_count: u32) -> TargetUpdate {
        assert!(
            sum % divisor == 0,
            "commit of sum {} to divisor {} which does not divide it",
            sum,
            divisor
        );
        let max_prime = self.max_prime();
        let record = self
            .records
            .iter_mut()
            .find(|r| r.divisor == divisor)
            .unwrap_or_else(|| panic!("no target lane for divisor {}", divisor));

        record.accumulated_value += sum;
        record.cycle_count += tile_count;
        record.lifetime_count += tile_count;

        let mut rewards = Vec::new();

        let escalation = if record.lifetime_count >= NUMBERS_PER_TARGET {
            let old_prime = record.current_prime;
            let new_prime = next_prime(max_prime);
            record.current_prime = new_prime;
            record.target = new_prime;
            record.lifetime_count = 0;
            record.accumulated_value = 0;
            rewards.push(ESCALATION_REWARD);
            log::info!("Target {} escalated: {} -> {}", divisor, old_prime, new_prime);
            Some(Escalation {
                old_prime,
                new_prime,
            })
        } else {
            None
        };

        // Checked against the target as it stands after any escalation
        let cycle_completed = record.accumulated_value >= record.target;
        if cycle_completed {
            record.accumulated_value = 0;
            rewards.push(CYCLE_REWARD);
        }

        TargetUpdate {
            record: record.clone(),
            escalation,
            cycle_completed,
            rewards,
        }
    }
}
