//! Placement validity rule
//!
//! A placement is checked only along the axes where the candidate has a
//! compatible neighbour. Along each such axis the line it would join must not
//! contain the same tile twice. A candidate with no compatible neighbour on
//! either axis is accepted, isolated or not.

use std::collections::HashSet;
use std::fmt;

use crate::spatial::grid::Grid;
use crate::spatial::line::{Axis, LineGroup, Overlay};
use crate::spatial::tile::Tile;

/// Outcome of a placement check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The tile may be placed
    Accepted,
    /// The cell is outside the grid
    OffBoard,
    /// The cell already holds a tile
    Occupied,
    /// The line along `axis` would contain `tile` twice
    Duplicate {
        /// Line that failed the check
        axis: Axis,
        /// Tile that appears more than once
        tile: Tile,
    },
}

impl Verdict {
    /// Check whether the placement is allowed
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => f.write_str("valid placement"),
            Self::OffBoard => f.write_str("position is outside the board"),
            Self::Occupied => f.write_str("position already holds a tile"),
            Self::Duplicate { axis, tile } => {
                write!(f, "{axis} would contain {tile} more than once")
            }
        }
    }
}

/// Axes on which a candidate touches a compatible neighbour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Adjacency {
    /// Left or right neighbour is compatible
    pub horizontal: bool,
    /// Upper or lower neighbour is compatible
    pub vertical: bool,
}

impl Adjacency {
    /// Check whether either axis engages
    pub const fn any(self) -> bool {
        self.horizontal || self.vertical
    }

    /// Whether the given axis engages
    pub const fn on(self, axis: Axis) -> bool {
        match axis {
            Axis::Row => self.horizontal,
            Axis::Column => self.vertical,
        }
    }
}

/// Find which axes show a compatible neighbour for `tile` at a cell
///
/// Empty and off-board neighbours never count.
pub fn potential_adjacency(grid: &Grid, tile: &Tile, row: i32, column: i32) -> Adjacency {
    let compatible = |axis: Axis| {
        [axis.backward(), axis.forward()].into_iter().any(|[dr, dc]| {
            tile.compatible_with(grid.cell(row + dr, column + dc).as_ref())
        })
    };

    Adjacency {
        horizontal: compatible(Axis::Row),
        vertical: compatible(Axis::Column),
    }
}

/// First tile that repeats an earlier tile in the sequence
///
/// Any repeat counts, not only neighbouring ones.
pub fn first_duplicate(tiles: impl IntoIterator<Item = Tile>) -> Option<Tile> {
    let mut seen = HashSet::new();
    tiles.into_iter().find(|tile| !seen.insert(*tile))
}

/// Decide whether `tile` may be placed at a cell, and why not
///
/// Lines are read with the candidate overlaid on the target cell; the grid
/// itself is only borrowed.
pub fn evaluate_placement(grid: &Grid, tile: &Tile, row: i32, column: i32) -> Verdict {
    if grid.off_board(row, column) {
        return Verdict::OffBoard;
    }
    if grid.cell(row, column).is_some() {
        return Verdict::Occupied;
    }

    let adjacency = potential_adjacency(grid, tile, row, column);
    let overlay = Overlay {
        position: [row, column],
        tile: *tile,
    };

    for axis in [Axis::Row, Axis::Column] {
        if !adjacency.on(axis) {
            continue;
        }

        let line = LineGroup::new(grid, Some(overlay), [row, column], axis);
        if let Some(duplicate) = first_duplicate(line) {
            log::trace!("Rejected {tile} at ({row}, {column}): {axis} repeats {duplicate}");
            return Verdict::Duplicate {
                axis,
                tile: duplicate,
            };
        }
    }

    Verdict::Accepted
}
