//! Tests for grid storage, bounds handling and line group queries

#[cfg(test)]
mod tests {
    use qwirkle::{Axis, Color, Grid, GridError, PlacementFault, Shape, Tile};

    const RED_CIRCLE: Tile = Tile::new(Color::Red, Shape::Circle);
    const RED_SQUARE: Tile = Tile::new(Color::Red, Shape::Square);
    const RED_DIAMOND: Tile = Tile::new(Color::Red, Shape::Diamond);
    const RED_CLOVER: Tile = Tile::new(Color::Red, Shape::Clover);
    const BLUE_STAR: Tile = Tile::new(Color::Blue, Shape::Starburst);

    // Tests zero dimensions are rejected on either axis
    // Verified by only checking rows
    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            Grid::new(0, 3),
            Err(GridError::InvalidDimension {
                rows: 0,
                columns: 3
            })
        ));
        assert!(matches!(
            Grid::new(3, 0),
            Err(GridError::InvalidDimension { .. })
        ));
    }

    // Tests sizes beyond the coordinate range fail instead of panicking
    // Verified by handing the sizes straight to the storage allocator
    #[test]
    fn test_new_rejects_unaddressable_dimensions() {
        assert!(matches!(
            Grid::new(usize::MAX, 2),
            Err(GridError::InvalidDimension {
                rows: usize::MAX,
                columns: 2
            })
        ));
        assert!(matches!(
            Grid::new(1, i32::MAX as usize + 1),
            Err(GridError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Grid::new(usize::MAX, usize::MAX),
            Err(GridError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_new_grid_is_empty() -> qwirkle::Result<()> {
        let grid = Grid::new(2, 4)?;

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 4);
        assert!(grid.is_empty());
        assert_eq!(grid.occupied_count(), 0);
        for row in 0..2 {
            for column in 0..4 {
                assert_eq!(grid.peek(row, column)?, None);
            }
        }
        Ok(())
    }

    // Tests the bounds predicate at every edge
    // Verified by using > instead of >= for the upper bound
    #[test]
    fn test_off_board_edges() -> qwirkle::Result<()> {
        let grid = Grid::new(3, 5)?;

        assert!(!grid.off_board(0, 0));
        assert!(!grid.off_board(2, 4));
        assert!(grid.off_board(-1, 0));
        assert!(grid.off_board(0, -1));
        assert!(grid.off_board(3, 0));
        assert!(grid.off_board(0, 5));
        Ok(())
    }

    #[test]
    fn test_place_then_peek_returns_tile() -> qwirkle::Result<()> {
        let mut grid = Grid::new(3, 3)?;

        grid.place(RED_CIRCLE, 1, 2)?;

        assert_eq!(grid.peek(1, 2)?, Some(RED_CIRCLE));
        assert_eq!(grid.occupied_count(), 1);
        assert!(!grid.is_empty());
        Ok(())
    }

    // Tests placement on an occupied cell fails and leaves the grid unchanged
    // Verified by writing before the occupancy check
    #[test]
    fn test_place_on_occupied_cell_fails() -> qwirkle::Result<()> {
        let mut grid = Grid::new(3, 3)?;
        grid.place(RED_CIRCLE, 1, 1)?;
        let snapshot = grid.clone();

        let result = grid.place(RED_SQUARE, 1, 1);

        assert!(matches!(
            result,
            Err(GridError::InvalidPlacement {
                row: 1,
                column: 1,
                fault: PlacementFault::Occupied
            })
        ));
        assert_eq!(grid, snapshot);
        Ok(())
    }

    #[test]
    fn test_place_off_board_fails() -> qwirkle::Result<()> {
        let mut grid = Grid::new(3, 3)?;
        let snapshot = grid.clone();

        for (row, column) in [(-1, 0), (0, -1), (3, 0), (0, 3)] {
            assert!(matches!(
                grid.place(RED_CIRCLE, row, column),
                Err(GridError::InvalidPlacement {
                    fault: PlacementFault::OffBoard,
                    ..
                })
            ));
        }
        assert_eq!(grid, snapshot);
        Ok(())
    }

    // Tests remove detaches the tile and a second remove finds nothing
    // Verified by returning the tile without clearing the cell
    #[test]
    fn test_remove_twice() -> qwirkle::Result<()> {
        let mut grid = Grid::new(3, 3)?;
        grid.place(BLUE_STAR, 0, 2)?;

        assert_eq!(grid.remove(0, 2)?, Some(BLUE_STAR));
        assert_eq!(grid.peek(0, 2)?, None);
        assert_eq!(grid.remove(0, 2)?, None);
        Ok(())
    }

    #[test]
    fn test_peek_and_remove_off_board_fail() -> qwirkle::Result<()> {
        let mut grid = Grid::new(2, 2)?;

        assert!(matches!(
            grid.peek(2, 0),
            Err(GridError::OutOfBounds { row: 2, column: 0 })
        ));
        assert!(matches!(
            grid.remove(0, -1),
            Err(GridError::OutOfBounds { row: 0, column: -1 })
        ));
        Ok(())
    }

    #[test]
    fn test_clear_keeps_dimensions() -> qwirkle::Result<()> {
        let mut grid = Grid::new(2, 3)?;
        grid.place(RED_CIRCLE, 0, 0)?;
        grid.place(RED_SQUARE, 1, 2)?;

        grid.clear();

        assert!(grid.is_empty());
        assert_eq!((grid.rows(), grid.columns()), (2, 3));
        grid.place(RED_CIRCLE, 0, 0)?;
        Ok(())
    }

    #[test]
    fn test_occupied_is_row_major() -> qwirkle::Result<()> {
        let mut grid = Grid::new(3, 3)?;
        grid.place(RED_SQUARE, 2, 0)?;
        grid.place(RED_CIRCLE, 0, 1)?;

        let occupied: Vec<_> = grid.occupied().collect();

        assert_eq!(occupied, vec![(0, 1, RED_CIRCLE), (2, 0, RED_SQUARE)]);
        Ok(())
    }

    // Tests row group order: center, then leftwards, then rightwards
    // Verified by scanning rightwards first
    #[test]
    fn test_row_group_order() -> qwirkle::Result<()> {
        let mut grid = Grid::new(3, 5)?;
        grid.place(RED_CIRCLE, 1, 0)?;
        grid.place(RED_SQUARE, 1, 1)?;
        grid.place(RED_DIAMOND, 1, 2)?;
        grid.place(RED_CLOVER, 1, 3)?;

        let group: Vec<Tile> = grid.row_group(1, 2)?.collect();

        assert_eq!(group, vec![RED_DIAMOND, RED_SQUARE, RED_CIRCLE, RED_CLOVER]);
        Ok(())
    }

    // Tests column group order: center, then upwards, then downwards
    #[test]
    fn test_column_group_order() -> qwirkle::Result<()> {
        let mut grid = Grid::new(4, 2)?;
        grid.place(RED_CIRCLE, 0, 1)?;
        grid.place(RED_SQUARE, 1, 1)?;
        grid.place(RED_DIAMOND, 2, 1)?;
        grid.place(RED_CLOVER, 3, 1)?;

        let group: Vec<Tile> = grid.column_group(1, 1)?.collect();

        assert_eq!(group, vec![RED_SQUARE, RED_CIRCLE, RED_DIAMOND, RED_CLOVER]);
        Ok(())
    }

    // Tests scanning stops at the first gap in each direction
    // Verified by skipping over empty cells
    #[test]
    fn test_group_stops_at_gap() -> qwirkle::Result<()> {
        let mut grid = Grid::new(1, 5)?;
        grid.place(RED_CIRCLE, 0, 0)?;
        grid.place(RED_SQUARE, 0, 2)?;
        grid.place(RED_DIAMOND, 0, 3)?;

        let group: Vec<Tile> = grid.row_group(0, 2)?.collect();

        assert_eq!(group, vec![RED_SQUARE, RED_DIAMOND]);
        Ok(())
    }

    #[test]
    fn test_group_on_empty_or_off_board_cell_fails() -> qwirkle::Result<()> {
        let grid = Grid::new(3, 3)?;

        assert!(matches!(
            grid.row_group(1, 1),
            Err(GridError::InvalidGroup {
                axis: Axis::Row,
                ..
            })
        ));
        assert!(matches!(
            grid.column_group(-1, 1),
            Err(GridError::InvalidGroup {
                axis: Axis::Column,
                ..
            })
        ));
        Ok(())
    }

    // Tests the literal acceptance rule on the reference 3x3 board
    #[test]
    fn test_is_valid_placement_reference_board() -> qwirkle::Result<()> {
        let mut grid = Grid::new(3, 3)?;
        grid.place(RED_CIRCLE, 1, 1)?;

        assert!(grid.is_valid_placement(&RED_SQUARE, 1, 0));
        assert!(grid.is_valid_placement(&BLUE_STAR, 0, 0));
        assert!(!grid.is_valid_placement(&RED_SQUARE, 1, 1));
        assert!(!grid.is_valid_placement(&RED_SQUARE, 3, 1));
        Ok(())
    }

    // Tests an identical neighbour alone engages no axis, so no line is checked
    // Verified by treating identical tiles as compatible
    #[test]
    fn test_identical_neighbour_alone_is_accepted() -> qwirkle::Result<()> {
        let mut grid = Grid::new(3, 3)?;
        grid.place(RED_CIRCLE, 1, 1)?;

        assert!(grid.is_valid_placement(&RED_CIRCLE, 1, 0));
        Ok(())
    }

    // Tests a duplicate is caught once a compatible neighbour engages the row
    #[test]
    fn test_duplicate_behind_compatible_neighbour_is_rejected() -> qwirkle::Result<()> {
        let mut grid = Grid::new(3, 3)?;
        grid.place(RED_CIRCLE, 1, 0)?;
        grid.place(RED_SQUARE, 1, 1)?;

        assert!(!grid.is_valid_placement(&RED_CIRCLE, 1, 2));
        assert!(grid.is_valid_placement(&RED_DIAMOND, 1, 2));
        Ok(())
    }

    // Tests the validity check leaves the grid exactly as it was
    #[test]
    fn test_is_valid_placement_does_not_mutate() -> qwirkle::Result<()> {
        let mut grid = Grid::new(3, 3)?;
        grid.place(RED_CIRCLE, 1, 1)?;
        let snapshot = grid.clone();

        for tile in Tile::all() {
            for row in -1..=3 {
                for column in -1..=3 {
                    let _ = grid.is_valid_placement(&tile, row, column);
                }
            }
        }

        assert_eq!(grid, snapshot);
        Ok(())
    }
}
