//! Spatial data structures
//!
//! This module contains the board-side types:
//! - Tile values and the compatibility rule
//! - The fixed-size grid
//! - Line group traversal along rows and columns

/// Fixed-size grid storage, placement and line queries
pub mod grid;
/// Row and column line traversal
pub mod line;
/// Tile values, colors and shapes
pub mod tile;

pub use grid::Grid;
pub use line::{Axis, LineGroup};
pub use tile::{Color, Shape, Tile};
