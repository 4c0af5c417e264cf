//! Command-line arguments and the interactive console session

use std::io::{BufRead, Write};

use clap::Parser;
use log::LevelFilter;

use crate::algorithm::placement::evaluate_placement;
use crate::algorithm::scatter::Scatter;
use crate::io::command::{COMMANDS, Command, checked_dimension};
use crate::io::configuration::{
    DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SEED, INVALID_COMMAND, PROMPT, WELCOME, WELCOME_HINT,
};
use crate::io::error::{ConsoleContext, GridError, Result};
use crate::io::render::BoardRenderer;
use crate::spatial::grid::Grid;

#[derive(Parser, Debug)]
#[command(name = "qwirkle")]
#[command(
    author,
    version,
    about = "Interactive console for the Qwirkle tile placement grid"
)]
/// Command-line arguments for the console
pub struct Cli {
    /// Rows of the starting grid
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Columns of the starting grid
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Random seed for the scatter command
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Render the board without terminal colors
    #[arg(short, long)]
    pub plain: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level selected by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Check if the board should be drawn with terminal colors
    pub const fn styled(&self) -> bool {
        !self.plain
    }
}

/// Whether the session continues after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command
    Continue,
    /// Stop reading input
    Exit,
}

/// Interactive session over a grid
///
/// Engine errors are reported on the output and the session carries on; only
/// terminal I/O failures end it.
pub struct Console<R, W> {
    grid: Grid,
    scatter: Scatter,
    renderer: BoardRenderer,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a session from parsed arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a starting dimension is zero or above
    /// `MAX_GRID_DIMENSION`, the same range `resize` accepts
    pub fn from_cli(cli: &Cli, input: R, output: W) -> Result<Self> {
        let rows = checked_dimension("rows", cli.rows)?;
        let columns = checked_dimension("columns", cli.columns)?;

        Ok(Self::new(
            Grid::new(rows, columns)?,
            Scatter::new(cli.seed),
            BoardRenderer::new(cli.styled()),
            input,
            output,
        ))
    }

    /// Create a session over an existing grid
    pub const fn new(
        grid: Grid,
        scatter: Scatter,
        renderer: BoardRenderer,
        input: R,
        output: W,
    ) -> Self {
        Self {
            grid,
            scatter,
            renderer,
            input,
            output,
        }
    }

    /// Grid the session operates on
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Output sink the session writes to
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Run until `exit`, `quit` or end of input
    ///
    /// # Errors
    ///
    /// Returns a `Console` error if reading input or writing output fails
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{WELCOME}").during("write banner")?;
        writeln!(self.output, "{WELCOME_HINT}").during("write banner")?;

        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}").during("write prompt")?;
            self.output.flush().during("flush prompt")?;

            line.clear();
            if self.input.read_line(&mut line).during("read command")? == 0 {
                break;
            }

            if self.handle_line(&line)? == Flow::Exit {
                break;
            }
        }

        Ok(())
    }

    /// Parse and execute one input line, reporting command errors
    ///
    /// # Errors
    ///
    /// Returns a `Console` error if writing output fails
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let outcome = Command::parse(line).and_then(|command| match command {
            Some(command) => self.execute(command),
            None => Ok(Flow::Continue),
        });

        match outcome {
            Ok(flow) => Ok(flow),
            Err(error @ GridError::Console { .. }) => Err(error),
            Err(GridError::UnknownCommand { command }) => {
                log::debug!("Unknown command '{command}'");
                writeln!(self.output, "{INVALID_COMMAND}").during("write error")?;
                Ok(Flow::Continue)
            }
            Err(error) => {
                log::warn!("{error}");
                writeln!(self.output, "Error: {error}").during("write error")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute a parsed command
    ///
    /// # Errors
    ///
    /// Returns engine errors for the command and `Console` errors for output
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Resize { rows, columns } => {
                self.grid = Grid::new(rows, columns)?;
                log::info!("Resized board to {rows}x{columns}");
            }
            Command::Board => {
                let board = self.renderer.render(&self.grid)?;
                write!(self.output, "{board}").during("write board")?;
            }
            Command::Place { tile, row, column } => {
                let verdict = evaluate_placement(&self.grid, &tile, row, column);
                let written = if verdict.is_accepted() {
                    self.grid.place(tile, row, column)?;
                    writeln!(self.output, "Placed {tile} at ({row}, {column}).")
                } else {
                    log::debug!("Refused {tile} at ({row}, {column}): {verdict}");
                    writeln!(
                        self.output,
                        "Cannot place {tile} at ({row}, {column}): {verdict}."
                    )
                };
                written.during("write placement")?;
            }
            Command::Force { tile, row, column } => {
                self.grid.place(tile, row, column)?;
                writeln!(self.output, "Placed {tile} at ({row}, {column}) unchecked.")
                    .during("write placement")?;
            }
            Command::Check { tile, row, column } => {
                let verdict = evaluate_placement(&self.grid, &tile, row, column);
                writeln!(self.output, "{tile} at ({row}, {column}): {verdict}.")
                    .during("write verdict")?;
            }
            Command::Remove { row, column } => match self.grid.remove(row, column)? {
                Some(tile) => writeln!(self.output, "Removed {tile} from ({row}, {column}).")
                    .during("write removal")?,
                None => writeln!(self.output, "Nothing at ({row}, {column}).")
                    .during("write removal")?,
            },
            Command::Peek { row, column } => {
                let cell = self.grid.peek(row, column)?;
                let text = cell.map_or_else(
                    || "empty".to_string(),
                    |tile| self.renderer.tiles([tile]),
                );
                writeln!(self.output, "({row}, {column}): {text}").during("write cell")?;
            }
            Command::Group { axis, row, column } => {
                let group = self.grid.group(row, column, axis)?;
                let text = self.renderer.tiles(group);
                writeln!(self.output, "{axis} group: {text}").during("write group")?;
            }
            Command::Clear => {
                self.grid.clear();
                writeln!(self.output, "Board cleared.").during("write clear")?;
            }
            Command::Scatter { count } => {
                let placed = self.scatter.scatter(&mut self.grid, count);
                writeln!(self.output, "Scattered {placed} of {count} tiles.")
                    .during("write scatter")?;
            }
            Command::Help => self.write_help()?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn write_help(&mut self) -> Result<()> {
        let width = COMMANDS
            .iter()
            .map(|(_, usage, _)| usage.len())
            .max()
            .unwrap_or_default();

        writeln!(self.output, "Commands:").during("write help")?;
        for (_, usage, description) in COMMANDS {
            writeln!(self.output, "  {usage:<width$}  {description}").during("write help")?;
        }
        writeln!(
            self.output,
            "Colors: red orange yellow green blue purple. \
             Shapes: circle square diamond starburst clover cross."
        )
        .during("write help")?;
        Ok(())
    }
}
