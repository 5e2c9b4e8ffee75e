//! Neon Numbers - a divisor-matching arcade number puzzle
//!
//! Core modules:
//! - `sim`: Deterministic game engine (tile pool, selection evaluation, targets, health)
//! - `settings`: Board geometry and run configuration

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game rule constants
pub mod consts {
    /// Divisors the player collects into, in ascending order
    pub const DIVISORS: [u32; 4] = [3, 5, 7, 11];

    /// Smallest tile value (inclusive)
    pub const TILE_VALUE_MIN: u32 = 10;
    /// Largest tile value (exclusive)
    pub const TILE_VALUE_MAX: u32 = 57;

    /// Tiles a lane must consume before its prime escalates
    pub const NUMBERS_PER_TARGET: u32 = 50;

    /// Health bounds
    pub const HEALTH_MAX: i32 = 100;
    pub const HEALTH_MIN: i32 = 0;

    /// Penalty when the selected sum matches no divisor
    pub const NO_DIVISOR_PENALTY: i32 = -10;
    /// Penalty when the chosen divisor fails the recheck before commit
    pub const WRONG_DIVISOR_PENALTY: i32 = -5;
    /// Reward when a lane's accumulated value reaches its target
    pub const CYCLE_REWARD: i32 = 5;
    /// Reward when a lane escalates to a new prime
    pub const ESCALATION_REWARD: i32 = 15;
}
