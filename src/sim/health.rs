//! Health meter

use serde::{Deserialize, Serialize};

use crate::consts::{HEALTH_MAX, HEALTH_MIN};

/// Outcome of a single health change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthChange {
    pub old: i32,
    pub new: i32,
}

impl HealthChange {
    /// True when this change emptied the meter
    pub fn depleted(&self) -> bool {
        self.new == HEALTH_MIN
    }
}

/// Health clamped to `[HEALTH_MIN, HEALTH_MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    value: i32,
}

impl Default for Health {
    fn default() -> Self {
        Self { value: HEALTH_MAX }
    }
}

impl Health {
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn is_depleted(&self) -> bool {
        self.value == HEALTH_MIN
    }

    /// Apply a signed delta, clamping to range
    pub fn apply(&mut self, delta: i32) -> HealthChange {
        let old = self.value;
        self.value = old.saturating_add(delta).clamp(HEALTH_MIN, HEALTH_MAX);
        HealthChange { old, new: self.value }
    }
}
