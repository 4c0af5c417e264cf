//! Tests for board rendering

#[cfg(test)]
mod tests {
    use qwirkle::io::render::{BoardRenderer, glyph, styled_tile};
    use qwirkle::{Color, Grid, Shape, Tile};
    use std::collections::HashSet;

    #[test]
    fn test_each_shape_has_its_own_glyph() {
        let glyphs: HashSet<char> = Shape::ALL.into_iter().map(glyph).collect();
        assert_eq!(glyphs.len(), Shape::ALL.len());
        assert_eq!(glyph(Shape::Circle), '●');
        assert_eq!(glyph(Shape::Cross), 'X');
    }

    // Tests plain rendering frames the board with borders as wide as the columns
    // Verified by sizing the border from the row count
    #[test]
    fn test_plain_render_of_wide_board() -> qwirkle::Result<()> {
        let mut grid = Grid::new(2, 3)?;
        grid.place(Tile::new(Color::Red, Shape::Circle), 0, 1)?;
        grid.place(Tile::new(Color::Green, Shape::Clover), 1, 2)?;

        let text = BoardRenderer::new(false).render(&grid)?;

        assert_eq!(
            text,
            "Board Size: 2 rows and 3 columns.\n+---+\n| ● |\n|  ♣|\n+---+\n"
        );
        Ok(())
    }

    #[test]
    fn test_styled_render_uses_escape_sequences() -> qwirkle::Result<()> {
        let mut grid = Grid::new(1, 1)?;
        grid.place(Tile::new(Color::Blue, Shape::Diamond), 0, 0)?;

        let text = BoardRenderer::new(true).render(&grid)?;

        assert!(text.contains('\u{1b}'));
        assert!(text.contains('♦'));
        Ok(())
    }

    #[test]
    fn test_empty_cell_is_blank() {
        assert_eq!(BoardRenderer::new(true).cell(None), " ");
        assert_eq!(BoardRenderer::default().cell(None), " ");
    }

    #[test]
    fn test_styled_tile_keeps_glyph() {
        let rendered = styled_tile(&Tile::new(Color::Orange, Shape::Square)).to_string();
        assert!(rendered.contains('▪'));
    }

    #[test]
    fn test_tile_list() {
        let tiles = [
            Tile::new(Color::Red, Shape::Circle),
            Tile::new(Color::Red, Shape::Square),
        ];

        assert_eq!(
            BoardRenderer::new(false).tiles(tiles),
            "Red/Circle, Red/Square"
        );
    }
}
