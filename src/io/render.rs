//! Text rendering of the grid for the console
//!
//! Colors become cell backgrounds and shapes become glyphs. Only the read
//! contract of [`Grid`] is used: dimensions and `peek`.

use crossterm::style::{Color as TermColor, ContentStyle, StyledContent, Stylize};

use crate::io::configuration::EMPTY_CELL;
use crate::io::error::Result;
use crate::spatial::grid::Grid;
use crate::spatial::tile::{Color, Shape, Tile};

/// Glyph drawn for a shape
pub const fn glyph(shape: Shape) -> char {
    match shape {
        Shape::Circle => '●',
        Shape::Square => '▪',
        Shape::Diamond => '♦',
        Shape::Starburst => '*',
        Shape::Clover => '♣',
        Shape::Cross => 'X',
    }
}

/// Terminal style for a tile color
pub fn style(color: Color) -> ContentStyle {
    match color {
        Color::Red => ContentStyle::new().on(TermColor::DarkRed),
        Color::Orange => ContentStyle::new()
            .with(TermColor::Yellow)
            .on(TermColor::Red),
        Color::Yellow => ContentStyle::new().on(TermColor::DarkYellow),
        Color::Green => ContentStyle::new().on(TermColor::DarkGreen),
        Color::Blue => ContentStyle::new().on(TermColor::Blue),
        Color::Purple => ContentStyle::new().on(TermColor::DarkMagenta),
    }
}

/// Styled glyph for a tile
pub fn styled_tile(tile: &Tile) -> StyledContent<char> {
    style(tile.color()).apply(glyph(tile.shape()))
}

/// Board renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardRenderer {
    /// Emit terminal color sequences
    pub styled: bool,
}

impl BoardRenderer {
    /// Create a renderer
    pub const fn new(styled: bool) -> Self {
        Self { styled }
    }

    /// Render a single cell
    pub fn cell(&self, tile: Option<&Tile>) -> String {
        match tile {
            None => EMPTY_CELL.to_string(),
            Some(tile) if self.styled => styled_tile(tile).to_string(),
            Some(tile) => glyph(tile.shape()).to_string(),
        }
    }

    /// Render the size line and the framed board
    ///
    /// # Errors
    ///
    /// Propagates lookup errors from the grid, which cannot occur for
    /// coordinates inside its dimensions
    pub fn render(&self, grid: &Grid) -> Result<String> {
        let border = format!("+{}+\n", "-".repeat(grid.columns()));
        let mut out = format!(
            "Board Size: {} rows and {} columns.\n",
            grid.rows(),
            grid.columns()
        );
        out.push_str(&border);

        for row in 0..grid.rows() as i32 {
            out.push('|');
            for column in 0..grid.columns() as i32 {
                let tile = grid.peek(row, column)?;
                out.push_str(&self.cell(tile.as_ref()));
            }
            out.push_str("|\n");
        }

        out.push_str(&border);
        Ok(out)
    }

    /// Render a sequence of tiles as `Color/Shape` names separated by commas
    pub fn tiles(&self, tiles: impl IntoIterator<Item = Tile>) -> String {
        tiles
            .into_iter()
            .map(|tile| {
                if self.styled {
                    format!("{} {tile}", styled_tile(&tile))
                } else {
                    tile.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
