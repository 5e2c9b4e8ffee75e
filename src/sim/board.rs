//! Tile pool: the live numbered tiles and the cells they occupy
//!
//! Every insertion and removal updates the occupied-cell set in the same call,
//! so the set always matches the live tiles' cells.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{TILE_VALUE_MAX, TILE_VALUE_MIN};

/// Opaque tile handle, unique for the lifetime of a pool
pub type TileId = u32;

/// A grid cell (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Chebyshev distance (king moves)
    pub fn distance(&self, other: Cell) -> u32 {
        self.col.abs_diff(other.col).max(self.row.abs_diff(other.row))
    }
}

/// A numbered tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub value: u32,
    pub cell: Cell,
    /// Marked by the selection in progress
    pub selected: bool,
    /// Flying to a drop zone; selection and hover must leave it alone
    pub in_transit: bool,
}

/// Owns the live tiles and the occupied-cell set
#[derive(Debug, Clone)]
pub struct TilePool {
    width: u32,
    height: u32,
    /// Live tiles (sorted by id for determinism)
    tiles: Vec<Tile>,
    occupied: BTreeSet<Cell>,
    rng: Pcg32,
    next_id: TileId,
}

impl TilePool {
    /// Create an empty pool for a `width x height` grid
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        assert!(width > 0 && height > 0, "grid must have at least one cell");
        assert!(
            width.checked_mul(height).is_some(),
            "grid {}x{} has too many cells",
            width,
            height
        );
        Self {
            width,
            height,
            tiles: Vec::new(),
            occupied: BTreeSet::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells
    pub fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn occupied_cells(&self) -> &BTreeSet<Cell> {
        &self.occupied
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.index_of(id).map(|i| &self.tiles[i])
    }

    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.index_of(id).map(|i| &mut self.tiles[i])
    }

    pub fn tile_at(&self, cell: Cell) -> Option<&Tile> {
        if !self.occupied.contains(&cell) {
            return None;
        }
        self.tiles.iter().find(|t| t.cell == cell)
    }

    pub fn contains_cell(&self, cell: Cell) -> bool {
        cell.col < self.width && cell.row < self.height
    }

    /// Remove every tile and fill up to `count` random cells with fresh tiles.
    ///
    /// Returns `(removed, added)`.
    pub fn initialize(&mut self, count: usize) -> (Vec<Tile>, Vec<Tile>) {
        let removed = std::mem::take(&mut self.tiles);
        self.occupied.clear();
        let added = self.replenish(count);
        (removed, added)
    }

    /// Add up to `count` tiles into free cells; fewer when the grid fills up
    pub fn replenish(&mut self, count: usize) -> Vec<Tile> {
        let mut free: Vec<Cell> = (0..self.width)
            .flat_map(|col| (0..self.height).map(move |row| Cell::new(col, row)))
            .filter(|cell| !self.occupied.contains(cell))
            .collect();
        free.shuffle(&mut self.rng);

        free.into_iter()
            .take(count)
            .map(|cell| {
                let value = self.rng.random_range(TILE_VALUE_MIN..TILE_VALUE_MAX);
                self.insert(cell, value)
            })
            .collect()
    }

    /// Put a tile with a chosen value on a free cell.
    ///
    /// Panics if the value is outside the tile range, the cell is outside the
    /// grid, or the cell is already occupied.
    pub fn place(&mut self, cell: Cell, value: u32) -> Tile {
        assert!(
            (TILE_VALUE_MIN..TILE_VALUE_MAX).contains(&value),
            "value {} outside tile range {}..{}",
            value,
            TILE_VALUE_MIN,
            TILE_VALUE_MAX
        );
        self.insert(cell, value)
    }

    /// `place` without the value range check, for staging boards in tests
    pub(super) fn insert(&mut self, cell: Cell, value: u32) -> Tile {
        assert!(
            self.contains_cell(cell),
            "cell {:?} outside {}x{} grid",
            cell,
            self.width,
            self.height
        );
        assert!(self.occupied.insert(cell), "cell {:?} already occupied", cell);

        let tile = Tile {
            id: self.next_id,
            value,
            cell,
            selected: false,
            in_transit: false,
        };
        self.next_id += 1;
        // Ids grow monotonically, so pushing keeps the list sorted
        self.tiles.push(tile.clone());
        tile
    }

    /// Remove the given tiles and free their cells.
    ///
    /// Panics on unknown or repeated ids.
    pub fn remove(&mut self, ids: &[TileId]) -> Vec<Tile> {
        let unique: BTreeSet<TileId> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len(), "duplicate tile id in {:?}", ids);

        ids.iter()
            .map(|&id| {
                let index = self
                    .index_of(id)
                    .unwrap_or_else(|| panic!("unknown tile id {}", id));
                let tile = self.tiles.remove(index);
                let freed = self.occupied.remove(&tile.cell);
                assert!(freed, "tile {} cell {:?} was not marked occupied", id, tile.cell);
                tile
            })
            .collect()
    }

    /// Clear the `selected` mark on every tile
    pub fn clear_selection(&mut self) {
        for tile in &mut self.tiles {
            tile.selected = false;
        }
    }

    /// Tiles currently marked as selected
    pub fn selected(&self) -> Vec<&Tile> {
        self.tiles.iter().filter(|t| t.selected).collect()
    }

    fn index_of(&self, id: TileId) -> Option<usize> {
        self.tiles.binary_search_by_key(&id, |t| t.id).ok()
    }
}
