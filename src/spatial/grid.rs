//! Fixed-size tile grid with placement, removal and line queries
//!
//! Cells hold at most one tile. Dimensions are fixed at construction; a
//! resize means building a new grid. All indexed access goes through
//! [`Grid::off_board`], so out-of-range coordinates never reach storage.

use ndarray::Array2;

use crate::algorithm::placement::evaluate_placement;
use crate::io::error::{GridError, PlacementFault, Result};
use crate::spatial::line::{Axis, LineGroup};
use crate::spatial::tile::Tile;

/// Rectangular board of optional tiles
///
/// Coordinates are signed `(row, column)` pairs so that neighbours of edge
/// cells can be named and rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Option<Tile>>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is zero, exceeds the
    /// `i32` coordinate range, or the cell storage would not fit in memory
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if !Self::addressable(rows, columns) {
            return Err(GridError::InvalidDimension { rows, columns });
        }

        Ok(Self {
            cells: Array2::from_elem((rows, columns), None),
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(None);
        log::debug!("Cleared {}x{} grid", self.rows(), self.columns());
    }

    /// Check whether a coordinate lies outside the grid
    pub fn off_board(&self, row: i32, column: i32) -> bool {
        row < 0 || column < 0 || row as usize >= self.rows() || column as usize >= self.columns()
    }

    /// Store a tile without checking compatibility
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlacement` if the coordinate is off the board or the
    /// cell already holds a tile. The grid is left untouched in both cases.
    pub fn place(&mut self, tile: Tile, row: i32, column: i32) -> Result<()> {
        let Some(cell) = self.cell_mut(row, column) else {
            return Err(GridError::InvalidPlacement {
                row,
                column,
                fault: PlacementFault::OffBoard,
            });
        };

        if cell.is_some() {
            return Err(GridError::InvalidPlacement {
                row,
                column,
                fault: PlacementFault::Occupied,
            });
        }

        *cell = Some(tile);
        log::debug!("Placed {tile} at ({row}, {column})");
        Ok(())
    }

    /// Look at a cell without changing it
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate is off the board
    pub fn peek(&self, row: i32, column: i32) -> Result<Option<Tile>> {
        self.index(row, column)
            .and_then(|index| self.cells.get(index).copied())
            .ok_or(GridError::OutOfBounds { row, column })
    }

    /// Detach and return the content of a cell, leaving it empty
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate is off the board
    pub fn remove(&mut self, row: i32, column: i32) -> Result<Option<Tile>> {
        let cell = self
            .cell_mut(row, column)
            .ok_or(GridError::OutOfBounds { row, column })?;

        let removed = cell.take();
        if let Some(tile) = removed {
            log::debug!("Removed {tile} from ({row}, {column})");
        }
        Ok(removed)
    }

    /// Check whether a tile could legally be placed at a cell
    ///
    /// Pure query: lines are read as if the tile were in place, but nothing is
    /// written. See [`evaluate_placement`] for the rule and the reason behind
    /// a rejection.
    pub fn is_valid_placement(&self, tile: &Tile, row: i32, column: i32) -> bool {
        evaluate_placement(self, tile, row, column).is_accepted()
    }

    /// Tiles of the horizontal run through an occupied cell
    ///
    /// Yields the tile at the cell, then leftwards, then rightwards.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGroup` if the cell is off the board or empty
    pub fn row_group(&self, row: i32, column: i32) -> Result<LineGroup<'_>> {
        self.group(row, column, Axis::Row)
    }

    /// Tiles of the vertical run through an occupied cell
    ///
    /// Yields the tile at the cell, then upwards, then downwards.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGroup` if the cell is off the board or empty
    pub fn column_group(&self, row: i32, column: i32) -> Result<LineGroup<'_>> {
        self.group(row, column, Axis::Column)
    }

    /// Line group along either axis
    ///
    /// # Errors
    ///
    /// Returns `InvalidGroup` if the cell is off the board or empty
    pub fn group(&self, row: i32, column: i32, axis: Axis) -> Result<LineGroup<'_>> {
        if self.cell(row, column).is_none() {
            return Err(GridError::InvalidGroup { row, column, axis });
        }
        Ok(LineGroup::new(self, None, [row, column], axis))
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check whether no cell holds a tile
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Occupied cells as `(row, column, tile)` in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, Tile)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|((row, column), cell)| {
                (*cell).map(|tile| (row as i32, column as i32, tile))
            })
    }

    /// Tile at a cell, or `None` when empty or off the board
    pub(crate) fn cell(&self, row: i32, column: i32) -> Option<Tile> {
        self.index(row, column)
            .and_then(|index| self.cells.get(index).copied().flatten())
    }

    fn cell_mut(&mut self, row: i32, column: i32) -> Option<&mut Option<Tile>> {
        let index = self.index(row, column)?;
        self.cells.get_mut(index)
    }

    fn addressable(rows: usize, columns: usize) -> bool {
        let largest = i32::MAX as usize;
        let in_range = |length: usize| (1..=largest).contains(&length);

        in_range(rows)
            && in_range(columns)
            && rows
                .checked_mul(columns)
                .and_then(|cells| cells.checked_mul(size_of::<Option<Tile>>()))
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
    }

    fn index(&self, row: i32, column: i32) -> Option<(usize, usize)> {
        (!self.off_board(row, column)).then_some((row as usize, column as usize))
    }
}
