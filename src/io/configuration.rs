//! Console defaults and engine tuning constants

/// Rows of the grid a session starts with
pub const DEFAULT_ROWS: usize = 5;
/// Columns of the grid a session starts with
pub const DEFAULT_COLUMNS: usize = 5;

/// Fixed seed for reproducible scattering
pub const DEFAULT_SEED: u64 = 42;

/// Largest dimension the console accepts, at startup and for `resize`
///
/// Keeps the console from allocating a board too large to print.
pub const MAX_GRID_DIMENSION: usize = 1_000;

/// Random draws tried per tile before scattering gives up
pub const SCATTER_ATTEMPTS_PER_TILE: usize = 256;

// Console text
/// Prompt printed before each command
pub const PROMPT: &str = "> ";
/// Printed once when a session starts
pub const WELCOME: &str = "Welcome to the Qwirkle grid console.";
/// Printed after the welcome line
pub const WELCOME_HINT: &str = "Enter a command or enter 'help' for a list of commands.";
/// Printed for unknown commands
pub const INVALID_COMMAND: &str = "Invalid command. Enter 'help' for list of commands.";
/// Rendered in place of an empty cell
pub const EMPTY_CELL: char = ' ';
