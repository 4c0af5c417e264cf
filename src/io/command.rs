//! Console command parsing
//!
//! One command per line: a case-insensitive command word followed by
//! whitespace-separated arguments.

use std::str::FromStr;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::line::Axis;
use crate::spatial::tile::{Color, Shape, Tile};

/// Help table entry: command word, usage line, description
pub type CommandHelp = (&'static str, &'static str, &'static str);

/// Every console command with its usage, in help order
pub const COMMANDS: [CommandHelp; 13] = [
    ("resize", "resize <rows> <columns>", "Replace the board with an empty one"),
    ("board", "board", "Print the board"),
    ("place", "place <color> <shape> <row> <column>", "Place a tile if the placement is valid"),
    ("force", "force <color> <shape> <row> <column>", "Place a tile without checking it"),
    ("check", "check <color> <shape> <row> <column>", "Tell whether a placement is valid"),
    ("remove", "remove <row> <column>", "Take a tile off the board"),
    ("peek", "peek <row> <column>", "Show the tile at a position"),
    ("row", "row <row> <column>", "List the row group through a tile"),
    ("column", "column <row> <column>", "List the column group through a tile"),
    ("clear", "clear", "Remove every tile"),
    ("scatter", "scatter <count>", "Place random valid tiles"),
    ("help", "help", "Show this list"),
    ("exit", "exit | quit", "Leave the console"),
];

/// A parsed console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Replace the grid with an empty one of new dimensions
    Resize {
        /// New row count
        rows: usize,
        /// New column count
        columns: usize,
    },
    /// Print the grid
    Board,
    /// Validity-checked placement
    Place {
        /// Tile to place
        tile: Tile,
        /// Target row
        row: i32,
        /// Target column
        column: i32,
    },
    /// Unchecked placement
    Force {
        /// Tile to place
        tile: Tile,
        /// Target row
        row: i32,
        /// Target column
        column: i32,
    },
    /// Report the placement verdict without placing
    Check {
        /// Candidate tile
        tile: Tile,
        /// Candidate row
        row: i32,
        /// Candidate column
        column: i32,
    },
    /// Remove the tile at a cell
    Remove {
        /// Cell row
        row: i32,
        /// Cell column
        column: i32,
    },
    /// Show the tile at a cell
    Peek {
        /// Cell row
        row: i32,
        /// Cell column
        column: i32,
    },
    /// List a line group
    Group {
        /// Line direction
        axis: Axis,
        /// Reference row
        row: i32,
        /// Reference column
        column: i32,
    },
    /// Empty the grid
    Clear,
    /// Place random valid tiles
    Scatter {
        /// Number of tiles requested
        count: usize,
    },
    /// List commands
    Help,
    /// End the session
    Exit,
}

impl Command {
    /// Parse one input line
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCommand` for an unrecognised command word and
    /// `InvalidParameter` when the arguments do not fit the command
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let word = word.to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match (word.as_str(), args.as_slice()) {
            ("resize", &[rows, columns]) => Self::Resize {
                rows: dimension("rows", rows)?,
                columns: dimension("columns", columns)?,
            },
            ("board", &[]) => Self::Board,
            ("place", &[color, shape, row, column]) => Self::Place {
                tile: Tile::new(Color::from_str(color)?, Shape::from_str(shape)?),
                row: number("row", row)?,
                column: number("column", column)?,
            },
            ("force", &[color, shape, row, column]) => Self::Force {
                tile: Tile::new(Color::from_str(color)?, Shape::from_str(shape)?),
                row: number("row", row)?,
                column: number("column", column)?,
            },
            ("check", &[color, shape, row, column]) => Self::Check {
                tile: Tile::new(Color::from_str(color)?, Shape::from_str(shape)?),
                row: number("row", row)?,
                column: number("column", column)?,
            },
            ("remove", &[row, column]) => Self::Remove {
                row: number("row", row)?,
                column: number("column", column)?,
            },
            ("peek", &[row, column]) => Self::Peek {
                row: number("row", row)?,
                column: number("column", column)?,
            },
            ("row", &[row, column]) => Self::Group {
                axis: Axis::Row,
                row: number("row", row)?,
                column: number("column", column)?,
            },
            ("column", &[row, column]) => Self::Group {
                axis: Axis::Column,
                row: number("row", row)?,
                column: number("column", column)?,
            },
            ("clear", &[]) => Self::Clear,
            ("scatter", &[count]) => Self::Scatter {
                count: number("count", count)?,
            },
            ("help", _) => Self::Help,
            ("exit" | "quit", _) => Self::Exit,
            (known, _) => {
                return Err(match usage(known) {
                    Some(usage) => invalid_parameter(
                        "arguments",
                        &args.join(" "),
                        &format!("usage: {usage}"),
                    ),
                    None => GridError::UnknownCommand {
                        command: known.to_string(),
                    },
                });
            }
        };

        Ok(Some(command))
    }
}

/// Usage line for a command word
pub fn usage(word: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .find(|(name, _, _)| *name == word)
        .map(|(_, usage, _)| *usage)
}

fn number<T: FromStr>(parameter: &'static str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_parse_error| invalid_parameter(parameter, &value, &"expected a whole number"))
}

fn dimension(parameter: &'static str, value: &str) -> Result<usize> {
    checked_dimension(parameter, number(parameter, value)?)
}

/// Accept a grid dimension between 1 and `MAX_GRID_DIMENSION`
///
/// # Errors
///
/// Returns `InvalidParameter` naming `parameter` when the value is out of range
pub fn checked_dimension(parameter: &'static str, value: usize) -> Result<usize> {
    if value == 0 || value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(value)
}
