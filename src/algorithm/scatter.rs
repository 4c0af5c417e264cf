//! Seeded random tile scattering
//!
//! Fills a grid with random tiles that pass the placement check, growing
//! outward from tiles already on the board. Used by the console to set up a
//! board to experiment with.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::placement::potential_adjacency;
use crate::io::configuration::SCATTER_ATTEMPTS_PER_TILE;
use crate::spatial::grid::Grid;
use crate::spatial::tile::{Color, Shape, Tile};

/// Seeded source of random placements
#[derive(Debug, Clone)]
pub struct Scatter {
    rng: StdRng,
    attempts_per_tile: usize,
}

impl Scatter {
    /// Create a scatter source with the default attempt budget
    pub fn new(seed: u64) -> Self {
        Self::with_attempts(seed, SCATTER_ATTEMPTS_PER_TILE)
    }

    /// Create a scatter source trying up to `attempts_per_tile` draws per tile
    pub fn with_attempts(seed: u64, attempts_per_tile: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            attempts_per_tile,
        }
    }

    /// Draw a uniformly random tile
    pub fn random_tile(&mut self) -> Tile {
        let color = Color::ALL.choose(&mut self.rng).copied().unwrap_or(Color::Red);
        let shape = Shape::ALL.choose(&mut self.rng).copied().unwrap_or(Shape::Circle);
        Tile::new(color, shape)
    }

    /// Place up to `count` random tiles and return how many were placed
    ///
    /// A draw is kept when the cell is empty, the placement is valid and,
    /// unless the grid is empty, the tile has a compatible neighbour. Gives up
    /// on a tile after the attempt budget is spent.
    pub fn scatter(&mut self, grid: &mut Grid, count: usize) -> usize {
        let mut placed = 0;

        for _ in 0..count {
            if !self.place_one(grid) {
                log::debug!("No placement found after {} attempts", self.attempts_per_tile);
                break;
            }
            placed += 1;
        }

        log::info!("Scattered {placed} of {count} requested tiles");
        placed
    }

    fn place_one(&mut self, grid: &mut Grid) -> bool {
        let first = grid.is_empty();

        for _ in 0..self.attempts_per_tile {
            let tile = self.random_tile();
            let row = self.rng.random_range(0..grid.rows()) as i32;
            let column = self.rng.random_range(0..grid.columns()) as i32;

            if !grid.is_valid_placement(&tile, row, column) {
                continue;
            }
            if !first && !potential_adjacency(grid, &tile, row, column).any() {
                continue;
            }
            if grid.place(tile, row, column).is_ok() {
                return true;
            }
        }

        false
    }
}
