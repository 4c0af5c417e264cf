//! Error types for grid operations and the console

use std::fmt;

use crate::spatial::line::Axis;

/// Why a raw placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementFault {
    /// Coordinate outside the grid
    OffBoard,
    /// Cell already holds a tile
    Occupied,
}

/// Main error type for all grid and console operations
#[derive(Debug)]
pub enum GridError {
    /// Grid requested with a zero or unaddressable dimension
    InvalidDimension {
        /// Requested row count
        rows: usize,
        /// Requested column count
        columns: usize,
    },

    /// Raw placement refused
    ///
    /// Both an off-board coordinate and an occupied cell land here; `fault`
    /// tells them apart.
    InvalidPlacement {
        /// Target row
        row: i32,
        /// Target column
        column: i32,
        /// Which condition failed
        fault: PlacementFault,
    },

    /// Line group requested at an off-board or empty cell
    InvalidGroup {
        /// Queried row
        row: i32,
        /// Queried column
        column: i32,
        /// Requested line direction
        axis: Axis,
    },

    /// Cell lookup or removal outside the grid
    OutOfBounds {
        /// Queried row
        row: i32,
        /// Queried column
        column: i32,
    },

    /// Console argument failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Console input that names no known command
    UnknownCommand {
        /// The unrecognised command word
        command: String,
    },

    /// Reading from or writing to the terminal failed
    Console {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, columns } => {
                write!(
                    f,
                    "Invalid grid dimensions {rows}x{columns}: both must be positive and addressable"
                )
            }
            Self::InvalidPlacement { row, column, fault } => match fault {
                PlacementFault::OffBoard => write!(
                    f,
                    "Cannot place tile at ({row}, {column}): outside the board dimensions"
                ),
                PlacementFault::Occupied => write!(
                    f,
                    "Cannot place tile at ({row}, {column}): position holds another tile"
                ),
            },
            Self::InvalidGroup { row, column, axis } => {
                write!(
                    f,
                    "Cannot get tiles in {axis} group from ({row}, {column}): no tile there"
                )
            }
            Self::OutOfBounds { row, column } => {
                write!(f, "Position ({row}, {column}) is outside the board")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownCommand { command } => {
                write!(f, "Unknown command '{command}'")
            }
            Self::Console { operation, source } => {
                write!(f, "Console error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Console { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::Console {
            operation: "unknown",
            source: err,
        }
    }
}

/// Attach the failing terminal operation to an I/O result
pub trait ConsoleContext<T> {
    /// Wrap an I/O error as a `Console` error for `operation`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation name attached
    fn during(self, operation: &'static str) -> Result<T>;
}

impl<T> ConsoleContext<T> for std::io::Result<T> {
    fn during(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| GridError::Console { operation, source })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
