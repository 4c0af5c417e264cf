//! Tile placement grid engine for Qwirkle-like color and shape matching games
//!
//! Tiles are color/shape pairs stored on a fixed-size grid. The grid answers
//! whether a tile may be placed at a cell by checking the rows and columns the
//! tile would join, without modifying itself.

#![forbid(unsafe_code)]

/// Placement validity rule and random board generation
pub mod algorithm;
/// Console, configuration and error handling
pub mod io;
/// Tiles, the grid and line traversal
pub mod spatial;

pub use algorithm::placement::{Verdict, evaluate_placement};
pub use io::error::{GridError, PlacementFault, Result};
pub use spatial::{Axis, Color, Grid, LineGroup, Shape, Tile};
