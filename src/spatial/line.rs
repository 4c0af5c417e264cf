//! Line extraction along a row or column
//!
//! A line group is the maximal run of occupied cells through a reference cell.
//! Traversal order is fixed: the reference tile, then the cells before it
//! (left or up), then the cells after it (right or down). Each direction stops
//! at the first empty cell or the board edge.

use std::fmt;
use std::iter::FusedIterator;

use crate::spatial::grid::Grid;
use crate::spatial::tile::Tile;

/// Direction of a line through the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal line, varying the column
    Row,
    /// Vertical line, varying the row
    Column,
}

impl Axis {
    /// Unit step `[row, column]` towards the start of the line
    pub const fn backward(self) -> [i32; 2] {
        match self {
            Self::Row => [0, -1],
            Self::Column => [-1, 0],
        }
    }

    /// Unit step `[row, column]` towards the end of the line
    pub const fn forward(self) -> [i32; 2] {
        match self {
            Self::Row => [0, 1],
            Self::Column => [1, 0],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// A tentative tile standing in for one cell of the grid
///
/// Lets the validity check read lines as if the tile were placed without
/// writing to grid storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    /// Cell the tile would occupy
    pub position: [i32; 2],
    /// Tile under evaluation
    pub tile: Tile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Center,
    Backward(i32),
    Forward(i32),
    Done,
}

/// Lazy, restartable traversal of a line group
///
/// Clone the iterator before consuming it to walk the same line again.
#[derive(Debug, Clone)]
pub struct LineGroup<'a> {
    grid: &'a Grid,
    overlay: Option<Overlay>,
    origin: [i32; 2],
    axis: Axis,
    phase: Phase,
}

impl<'a> LineGroup<'a> {
    /// Start a traversal at `origin`
    ///
    /// The caller guarantees that `origin` holds a tile, either in the grid or
    /// through the overlay.
    pub(crate) const fn new(
        grid: &'a Grid,
        overlay: Option<Overlay>,
        origin: [i32; 2],
        axis: Axis,
    ) -> Self {
        Self {
            grid,
            overlay,
            origin,
            axis,
            phase: Phase::Center,
        }
    }

    /// Axis this group runs along
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Reference cell of the group
    pub const fn origin(&self) -> [i32; 2] {
        self.origin
    }

    fn tile_at(&self, position: [i32; 2]) -> Option<Tile> {
        match self.overlay {
            Some(overlay) if overlay.position == position => Some(overlay.tile),
            _ => self.grid.cell(position[0], position[1]),
        }
    }

    fn step(&self, step: [i32; 2], distance: i32) -> [i32; 2] {
        [
            self.origin[0] + step[0] * distance,
            self.origin[1] + step[1] * distance,
        ]
    }
}

impl Iterator for LineGroup<'_> {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        loop {
            match self.phase {
                Phase::Center => {
                    self.phase = Phase::Backward(1);
                    let tile = self.tile_at(self.origin);
                    if tile.is_some() {
                        return tile;
                    }
                    // An empty origin has no line at all
                    self.phase = Phase::Done;
                }
                Phase::Backward(distance) => {
                    let position = self.step(self.axis.backward(), distance);
                    if let Some(tile) = self.tile_at(position) {
                        self.phase = Phase::Backward(distance + 1);
                        return Some(tile);
                    }
                    self.phase = Phase::Forward(1);
                }
                Phase::Forward(distance) => {
                    let position = self.step(self.axis.forward(), distance);
                    if let Some(tile) = self.tile_at(position) {
                        self.phase = Phase::Forward(distance + 1);
                        return Some(tile);
                    }
                    self.phase = Phase::Done;
                }
                Phase::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let longest = match self.axis {
            Axis::Row => self.grid.columns(),
            Axis::Column => self.grid.rows(),
        };
        match self.phase {
            Phase::Done => (0, Some(0)),
            _ => (0, Some(longest)),
        }
    }
}

impl FusedIterator for LineGroup<'_> {}
