//! Game session state and the selection lifecycle
//!
//! `Idle -> Selecting -> Resolving -> (Idle | GameOver)`. Resolution is a
//! single synchronous call: the commit, tile removal and replenishment are all
//! applied before the outcome is returned, so a renderer never sees a
//! half-applied selection. Consumed tiles are parked in an in-transit list for
//! the presentation layer to animate; `tick` retires them.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Cell, Tile, TileId, TilePool};
use super::evaluate::evaluate;
use super::health::{Health, HealthChange};
use super::targets::{TargetRecord, TargetTracker};
use crate::consts::{NO_DIVISOR_PENALTY, WRONG_DIVISOR_PENALTY};
use crate::settings::Settings;

/// Current phase of the selection lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a selection to start
    Idle,
    /// Player is dragging a selection
    Selecting,
    /// Selection ended, being applied
    Resolving,
    /// Health ran out (terminal)
    GameOver,
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TileRemoved(TileId),
    TileAdded(Tile),
    /// A consumed tile finished its flight to the divisor's drop zone
    TileArrived { id: TileId, divisor: u32 },
    TargetEscalated {
        divisor: u32,
        old_prime: u32,
        new_prime: u32,
    },
    TargetCycleCompleted(u32),
    HealthChanged { old: i32, new: i32 },
    /// Whole board was cleared and refilled after a rejected selection
    BoardReset,
    GameOver,
}

/// Why a finished selection was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The sum matched no divisor (includes the empty selection)
    NoDivisor { sum: u32 },
    /// The chosen divisor failed the recheck before commit
    DivisorMismatch { divisor: u32, sum: u32 },
}

impl RejectReason {
    pub fn penalty(&self) -> i32 {
        match self {
            RejectReason::NoDivisor { .. } => NO_DIVISOR_PENALTY,
            RejectReason::DivisorMismatch { .. } => WRONG_DIVISOR_PENALTY,
        }
    }
}

/// Result of ending a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    Rejected(RejectReason),
    Committed {
        divisor: u32,
        sum: u32,
        events: Vec<GameEvent>,
    },
}

/// Selection calls made out of sequence by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// The session has ended
    GameOver,
    /// No selection is in progress
    NotSelecting,
    /// Tiles from the previous commit are still flying
    TilesInTransit,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::GameOver => write!(f, "game is over"),
            SelectionError::NotSelecting => write!(f, "no selection in progress"),
            SelectionError::TilesInTransit => write!(f, "tiles are still in transit"),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Marked tiles and their running sum
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub ids: Vec<TileId>,
    pub sum: u32,
}

/// A consumed tile on its way to a drop zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitTile {
    pub tile: Tile,
    pub divisor: u32,
    pub ticks_remaining: u32,
}

/// Everything a renderer needs to draw the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: u32,
    pub height: u32,
    pub tiles: Vec<Tile>,
    pub occupied_cells: Vec<Cell>,
    pub in_transit: Vec<TransitTile>,
}

/// Run counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub committed: u32,
    pub rejected: u32,
    pub tiles_collected: u32,
    pub escalations: u32,
    pub cycles_completed: u32,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    phase: GamePhase,
    pool: TilePool,
    targets: TargetTracker,
    health: Health,
    selection: Selection,
    transit: Vec<TransitTile>,
    transit_ticks: u32,
    hover_radius: u32,
    stats: RunStats,
    /// Notifications not handed back in a `Committed` outcome, oldest first
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session on the default board
    pub fn new(seed: u64) -> Self {
        Self::with_settings(&Settings::default(), seed)
    }

    /// Create a session and fill the board.
    ///
    /// Panics if `settings` fail [`Settings::validate`].
    pub fn with_settings(settings: &Settings, seed: u64) -> Self {
        if let Err(e) = settings.validate() {
            panic!("{e}");
        }
        let mut pool = TilePool::new(settings.grid_width, settings.grid_height, seed);
        pool.initialize(pool.capacity());

        log::info!(
            "New game: {}x{} board, seed {}",
            settings.grid_width,
            settings.grid_height,
            seed
        );

        Self {
            seed,
            phase: GamePhase::Idle,
            pool,
            targets: TargetTracker::new(),
            health: Health::default(),
            selection: Selection::default(),
            transit: Vec::new(),
            transit_ticks: settings.transit_ticks,
            hover_radius: settings.hover_radius,
            stats: RunStats::default(),
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn health(&self) -> i32 {
        self.health.value()
    }

    pub fn targets(&self) -> &[TargetRecord] {
        self.targets.records()
    }

    /// Lane for one divisor
    pub fn target(&self, divisor: u32) -> Option<&TargetRecord> {
        self.targets.get(divisor)
    }

    pub fn pool(&self) -> &TilePool {
        &self.pool
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Tiles marked by the selection in progress
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn in_transit(&self) -> &[TransitTile] {
        &self.transit
    }

    pub fn board(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: self.pool.width(),
            height: self.pool.height(),
            tiles: self.pool.tiles().to_vec(),
            occupied_cells: self.pool.occupied_cells().iter().copied().collect(),
            in_transit: self.transit.clone(),
        }
    }

    /// Take all queued events.
    ///
    /// The queue holds board resets, arrivals, health changes from rejected
    /// selections and game over; a commit's own events come back only in its
    /// `Committed` outcome. Hosts drain this once per frame, since a single
    /// board reset queues a removal and an addition for every cell.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a new selection, abandoning any selection in progress
    pub fn start_selection(&mut self) -> Result<(), SelectionError> {
        if self.is_game_over() {
            return Err(SelectionError::GameOver);
        }
        if !self.transit.is_empty() {
            log::warn!(
                "Selection refused: {} tiles still in transit",
                self.transit.len()
            );
            return Err(SelectionError::TilesInTransit);
        }
        self.pool.clear_selection();
        self.selection = Selection::default();
        self.phase = GamePhase::Selecting;
        Ok(())
    }

    /// Replace the marked set with `candidates`.
    ///
    /// In-transit tiles are skipped. Panics on ids that were never live.
    /// Returns the number of tiles now marked.
    pub fn update_selection(&mut self, candidates: &[TileId]) -> Result<usize, SelectionError> {
        if self.is_game_over() {
            return Err(SelectionError::GameOver);
        }
        if self.phase != GamePhase::Selecting {
            return Err(SelectionError::NotSelecting);
        }

        let mut wanted = BTreeSet::new();
        for &id in candidates {
            if self.pool.get(id).is_some() {
                wanted.insert(id);
            } else if !self.transit.iter().any(|t| t.tile.id == id) {
                panic!("selection references unknown tile id {}", id);
            }
        }

        let mut selection = Selection::default();
        let live: Vec<TileId> = self.pool.tiles().iter().map(|t| t.id).collect();
        for id in live {
            let marked = wanted.contains(&id);
            if let Some(tile) = self.pool.get_mut(id) {
                tile.selected = marked;
                if marked {
                    selection.ids.push(id);
                    selection.sum += tile.value;
                }
            }
        }
        let count = selection.ids.len();
        self.selection = selection;
        Ok(count)
    }

    /// Mark every live tile in the inclusive rectangle spanned by two cells
    pub fn select_rect(&mut self, a: Cell, b: Cell) -> Result<usize, SelectionError> {
        let (min_col, max_col) = (a.col.min(b.col), a.col.max(b.col));
        let (min_row, max_row) = (a.row.min(b.row), a.row.max(b.row));
        let ids: Vec<TileId> = self
            .pool
            .tiles()
            .iter()
            .filter(|t| {
                (min_col..=max_col).contains(&t.cell.col)
                    && (min_row..=max_row).contains(&t.cell.row)
            })
            .map(|t| t.id)
            .collect();
        self.update_selection(&ids)
    }

    /// Finish the selection and apply it
    pub fn end_selection(&mut self) -> Result<SelectionOutcome, SelectionError> {
        if self.is_game_over() {
            return Err(SelectionError::GameOver);
        }
        if self.phase != GamePhase::Selecting {
            return Err(SelectionError::NotSelecting);
        }
        self.phase = GamePhase::Resolving;

        let selection = std::mem::take(&mut self.selection);
        let eval = evaluate(self.pool.selected());
        log::debug!(
            "Selection of {} tiles, sum {}, divisors {:?}",
            selection.ids.len(),
            eval.sum,
            eval.divisors
        );

        let outcome = match eval.chosen_divisor() {
            None => self.reject(RejectReason::NoDivisor { sum: eval.sum }),
            Some(divisor) if eval.sum % divisor != 0 => self.reject(RejectReason::DivisorMismatch {
                divisor,
                sum: eval.sum,
            }),
            Some(divisor) => self.commit(divisor, eval.sum, &selection.ids),
        };

        self.phase = if self.health.is_depleted() {
            log::info!("Game over (seed {})", self.seed);
            self.events.push(GameEvent::GameOver);
            GamePhase::GameOver
        } else {
            GamePhase::Idle
        };

        Ok(outcome)
    }

    /// Advance in-transit tiles by one animation tick
    pub fn tick(&mut self) {
        let mut arrived = Vec::new();
        self.transit.retain_mut(|t| {
            t.ticks_remaining = t.ticks_remaining.saturating_sub(1);
            if t.ticks_remaining == 0 {
                arrived.push(GameEvent::TileArrived {
                    id: t.tile.id,
                    divisor: t.divisor,
                });
                false
            } else {
                true
            }
        });
        self.events.extend(arrived);
    }

    /// Ids of tiles near `cell` that may shake under the cursor.
    ///
    /// Empty while anything is in transit.
    pub fn hover_candidates(&self, cell: Cell) -> Vec<TileId> {
        if !self.transit.is_empty() || self.is_game_over() {
            return Vec::new();
        }
        self.pool
            .tiles()
            .iter()
            .filter(|t| !t.in_transit && t.cell.distance(cell) <= self.hover_radius)
            .map(|t| t.id)
            .collect()
    }

    fn apply_health(&mut self, delta: i32, events: &mut Vec<GameEvent>) -> HealthChange {
        let change = self.health.apply(delta);
        events.push(GameEvent::HealthChanged {
            old: change.old,
            new: change.new,
        });
        change
    }

    fn reject(&mut self, reason: RejectReason) -> SelectionOutcome {
        let mut events = Vec::new();
        let change = self.apply_health(reason.penalty(), &mut events);
        log::info!(
            "Selection rejected ({:?}), health {} -> {}",
            reason,
            change.old,
            change.new
        );

        let (removed, added) = self.pool.initialize(self.pool.capacity());
        events.extend(removed.into_iter().map(|t| GameEvent::TileRemoved(t.id)));
        events.extend(added.into_iter().map(GameEvent::TileAdded));
        events.push(GameEvent::BoardReset);

        self.stats.rejected += 1;
        self.events.extend(events);
        SelectionOutcome::Rejected(reason)
    }

    fn commit(&mut self, divisor: u32, sum: u32, ids: &[TileId]) -> SelectionOutcome {
        let mut events = Vec::new();
        let count = ids.len() as u32;

        let update = self.targets.commit(divisor, sum, count);
        if let Some(esc) = update.escalation {
            events.push(GameEvent::TargetEscalated {
                divisor,
                old_prime: esc.old_prime,
                new_prime: esc.new_prime,
            });
            self.stats.escalations += 1;
        }
        if update.cycle_completed {
            events.push(GameEvent::TargetCycleCompleted(divisor));
            self.stats.cycles_completed += 1;
        }
        for &reward in &update.rewards {
            self.apply_health(reward, &mut events);
        }

        for mut tile in self.pool.remove(ids) {
            events.push(GameEvent::TileRemoved(tile.id));
            tile.selected = false;
            tile.in_transit = true;
            if self.transit_ticks == 0 {
                events.push(GameEvent::TileArrived {
                    id: tile.id,
                    divisor,
                });
            } else {
                self.transit.push(TransitTile {
                    tile,
                    divisor,
                    ticks_remaining: self.transit_ticks,
                });
            }
        }
        let added = self.pool.replenish(ids.len());
        events.extend(added.into_iter().map(GameEvent::TileAdded));

        self.stats.committed += 1;
        self.stats.tiles_collected += count;
        log::debug!("Committed {} tiles (sum {}) to divisor {}", count, sum, divisor);

        SelectionOutcome::Committed {
            divisor,
            sum,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CYCLE_REWARD, ESCALATION_REWARD, NUMBERS_PER_TARGET};

    /// Session on a `4x4` board holding exactly the given `(col, row, value)` tiles.
    ///
    /// Values skip the range check so sums like 22 from four tiles can be staged.
    fn staged(tiles: &[(u32, u32, u32)], transit_ticks: u32) -> GameState {
        let settings = Settings {
            grid_width: 4,
            grid_height: 4,
            transit_ticks,
            ..Default::default()
        };
        let mut state = GameState::with_settings(&settings, 1234);
        state.pool = TilePool::new(4, 4, 1234);
        for &(col, row, value) in tiles {
            state.pool.insert(Cell::new(col, row), value);
        }
        state
    }

    fn ids_at(state: &GameState, cells: &[(u32, u32)]) -> Vec<TileId> {
        cells
            .iter()
            .map(|&(c, r)| state.pool.tile_at(Cell::new(c, r)).expect("tile").id)
            .collect()
    }

    fn play(state: &mut GameState, ids: &[TileId]) -> SelectionOutcome {
        state.start_selection().unwrap();
        state.update_selection(ids).unwrap();
        state.end_selection().unwrap()
    }

    #[test]
    fn test_new_game_fills_board() {
        let state = GameState::new(42);
        assert_eq!(state.phase(), GamePhase::Idle);
        assert_eq!(state.health(), 100);
        assert_eq!(state.pool().len(), 240);
        let board = state.board();
        assert_eq!(board.tiles.len(), board.occupied_cells.len());
        assert!(board.in_transit.is_empty());
        assert_eq!(state.targets().len(), 4);
    }

    #[test]
    fn test_fifteen_commits_to_three() {
        let mut state = staged(&[(0, 0, 15), (1, 0, 20)], 0);
        let ids = ids_at(&state, &[(0, 0)]);

        let outcome = play(&mut state, &ids);
        let SelectionOutcome::Committed { divisor, sum, events } = outcome else {
            panic!("expected a commit");
        };
        assert_eq!((divisor, sum), (3, 15));
        assert!(events.contains(&GameEvent::TileRemoved(ids[0])));
        assert!(events.iter().any(|e| matches!(e, GameEvent::TileAdded(_))));
        assert_eq!(state.pool().len(), 2);
        assert!(state.pool().get(ids[0]).is_none());
        assert_eq!(state.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_twenty_two_counts_four_tiles_for_eleven() {
        let mut state = staged(&[(0, 0, 4), (1, 0, 5), (2, 0, 6), (3, 0, 7)], 0);
        let ids = ids_at(&state, &[(0, 0), (1, 0), (2, 0), (3, 0)]);

        let outcome = play(&mut state, &ids);
        assert!(matches!(outcome, SelectionOutcome::Committed { divisor: 11, sum: 22, .. }));

        let eleven = state.target(11).unwrap();
        assert_eq!(eleven.lifetime_count, 4);
        assert_eq!(eleven.cycle_count, 4);
        // 22 >= 11 completes the cycle
        assert_eq!(eleven.accumulated_value, 0);
        assert_eq!(state.stats().cycles_completed, 1);
    }

    #[test]
    fn test_empty_selection_resets_board() {
        let mut state = GameState::new(7);
        let before: Vec<TileId> = state.pool().tiles().iter().map(|t| t.id).collect();

        let outcome = play(&mut state, &[]);
        assert_eq!(outcome, SelectionOutcome::Rejected(RejectReason::NoDivisor { sum: 0 }));
        assert_eq!(state.health(), 90);
        assert_eq!(state.pool().len(), state.pool().capacity());
        assert!(state.pool().tiles().iter().all(|t| !before.contains(&t.id)));

        let events = state.drain_events();
        assert!(events.contains(&GameEvent::BoardReset));
        assert!(events.contains(&GameEvent::HealthChanged { old: 100, new: 90 }));
        assert_eq!(state.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_unmatched_sum_penalised() {
        let mut state = staged(&[(0, 0, 13), (1, 1, 10)], 0);
        let ids = ids_at(&state, &[(0, 0), (1, 1)]);

        let outcome = play(&mut state, &ids);
        assert_eq!(outcome, SelectionOutcome::Rejected(RejectReason::NoDivisor { sum: 23 }));
        assert_eq!(state.health(), 90);
        assert_eq!(state.pool().len(), 16);
        assert_eq!(state.stats().rejected, 1);
    }

    #[test]
    fn test_escalation_through_session() {
        let mut state = staged(&[(0, 0, 12), (3, 3, 40)], 0);
        state.health.apply(-50);
        // Lane 3 one tile short of escalating, lane 11 already moved to 13
        state.targets.record_mut(3).lifetime_count = NUMBERS_PER_TARGET - 1;
        let eleven = state.targets.record_mut(11);
        eleven.current_prime = 13;
        eleven.target = 13;
        let ids = ids_at(&state, &[(0, 0)]);

        let outcome = play(&mut state, &ids);
        let SelectionOutcome::Committed { events, .. } = outcome else {
            panic!("expected a commit");
        };
        assert!(events.contains(&GameEvent::TargetEscalated {
            divisor: 3,
            old_prime: 3,
            new_prime: 17
        }));
        let three = state.target(3).unwrap();
        assert_eq!(three.current_prime, 17);
        assert_eq!(three.lifetime_count, 0);
        assert_eq!(three.accumulated_value, 0);
        assert_eq!(state.health(), 50 + ESCALATION_REWARD);
    }

    #[test]
    fn test_cycle_reward_heals() {
        let mut state = staged(&[(0, 0, 21)], 0);
        state.health.apply(-30);
        let ids = ids_at(&state, &[(0, 0)]);

        play(&mut state, &ids);
        assert_eq!(state.health(), 70 + CYCLE_REWARD);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut state = GameState::new(3);
        for _ in 0..10 {
            play(&mut state, &[]);
        }
        assert!(state.is_game_over());
        assert_eq!(state.health(), 0);
        assert!(state.drain_events().contains(&GameEvent::GameOver));

        assert_eq!(state.start_selection(), Err(SelectionError::GameOver));
        assert_eq!(state.update_selection(&[]), Err(SelectionError::GameOver));
        assert_eq!(state.end_selection(), Err(SelectionError::GameOver));
        assert_eq!(state.stats().committed, 0);
    }

    #[test]
    fn test_commit_events_are_not_queued_twice() {
        let mut state = staged(&[(0, 0, 30), (1, 0, 11)], 2);
        let ids = ids_at(&state, &[(0, 0)]);

        let SelectionOutcome::Committed { events, .. } = play(&mut state, &ids) else {
            panic!("expected a commit");
        };
        assert!(events.contains(&GameEvent::TileRemoved(ids[0])));
        assert!(events.contains(&GameEvent::TargetCycleCompleted(3)));
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_target_lookup() {
        let state = GameState::new(4);
        assert_eq!(state.target(7).map(|r| r.current_prime), Some(7));
        assert!(state.target(13).is_none());
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_oversized_grid_rejected() {
        let settings = Settings {
            grid_width: 70_000,
            grid_height: 70_000,
            ..Default::default()
        };
        GameState::with_settings(&settings, 1);
    }

    #[test]
    fn test_transit_blocks_new_selection() {
        let mut state = staged(&[(0, 0, 30), (1, 0, 11)], 2);
        let ids = ids_at(&state, &[(0, 0)]);
        play(&mut state, &ids);

        assert_eq!(state.in_transit().len(), 1);
        assert!(state.in_transit()[0].tile.in_transit);
        assert_eq!(state.start_selection(), Err(SelectionError::TilesInTransit));
        assert!(state.hover_candidates(Cell::new(1, 0)).is_empty());
        // Removal is already visible to the renderer
        assert!(state.pool().get(ids[0]).is_none());

        state.drain_events();
        state.tick();
        assert!(state.drain_events().is_empty());
        state.tick();
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::TileArrived { id: ids[0], divisor: 3 }]
        );
        assert!(state.start_selection().is_ok());
    }

    #[test]
    fn test_in_transit_ids_are_ignored_by_selection() {
        let mut state = staged(&[(0, 0, 30), (1, 0, 33)], 5);
        let flying = ids_at(&state, &[(0, 0)]);
        let other = ids_at(&state, &[(1, 0)]);
        play(&mut state, &flying);

        // Force the selection open while the tile is still flying
        state.phase = GamePhase::Selecting;
        let marked = state.update_selection(&[flying[0], other[0]]).unwrap();
        assert_eq!(marked, 1);
        assert_eq!(state.selection().ids, other);
        assert_eq!(state.selection().sum, 33);
    }

    #[test]
    #[should_panic(expected = "unknown tile id")]
    fn test_unknown_tile_panics() {
        let mut state = GameState::new(1);
        state.start_selection().unwrap();
        let _ = state.update_selection(&[u32::MAX]);
    }

    #[test]
    fn test_update_requires_selection() {
        let mut state = GameState::new(1);
        assert_eq!(state.update_selection(&[]), Err(SelectionError::NotSelecting));
        assert_eq!(state.end_selection(), Err(SelectionError::NotSelecting));
    }

    #[test]
    fn test_new_selection_abandons_old() {
        let mut state = GameState::new(8);
        let first = state.pool().tiles()[0].id;
        state.start_selection().unwrap();
        state.update_selection(&[first]).unwrap();
        assert!(state.pool().get(first).unwrap().selected);

        state.start_selection().unwrap();
        assert!(!state.pool().get(first).unwrap().selected);
        assert!(state.selection().ids.is_empty());
    }

    #[test]
    fn test_select_rect_marks_inclusive_box() {
        let mut state = GameState::new(21);
        state.start_selection().unwrap();
        let count = state.select_rect(Cell::new(3, 2), Cell::new(1, 1)).unwrap();
        assert_eq!(count, 6);
        let expected: u32 = state
            .pool()
            .tiles()
            .iter()
            .filter(|t| (1..=3).contains(&t.cell.col) && (1..=2).contains(&t.cell.row))
            .map(|t| t.value)
            .sum();
        assert_eq!(state.selection().sum, expected);
    }

    #[test]
    fn test_hover_radius() {
        let state = GameState::new(2);
        let near = state.hover_candidates(Cell::new(0, 0));
        // 4x4 corner block with the default radius of 3
        assert_eq!(near.len(), 16);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        for state in [&mut a, &mut b] {
            for _ in 0..3 {
                state.start_selection().unwrap();
                state.select_rect(Cell::new(0, 0), Cell::new(1, 1)).unwrap();
                state.end_selection().unwrap();
                while !state.in_transit().is_empty() {
                    state.tick();
                }
            }
        }
        assert_eq!(a.board(), b.board());
        assert_eq!(a.targets(), b.targets());
        assert_eq!(a.health(), b.health());
    }
}
