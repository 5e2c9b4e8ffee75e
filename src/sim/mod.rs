//! Deterministic game engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (tiles by id, cells ordered)
//! - No rendering, input mapping or animation timing beyond tick counts

pub mod autoplay;
pub mod board;
pub mod evaluate;
pub mod health;
pub mod prime;
pub mod state;
pub mod targets;

pub use autoplay::AutoPlayer;
pub use board::{Cell, Tile, TileId, TilePool};
pub use evaluate::{Evaluation, evaluate, matching_divisors};
pub use health::{Health, HealthChange};
pub use prime::{is_prime, next_prime};
pub use state::{
    BoardSnapshot, GameEvent, GamePhase, GameState, RejectReason, RunStats, Selection,
    SelectionError, SelectionOutcome, TransitTile,
};
pub use targets::{Escalation, TargetRecord, TargetTracker, TargetUpdate};
