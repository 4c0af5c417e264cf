//! Tests for console defaults and tuning constants

#[cfg(test)]
mod tests {
    use qwirkle::io::configuration::{
        DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SEED, EMPTY_CELL, MAX_GRID_DIMENSION, PROMPT,
        SCATTER_ATTEMPTS_PER_TILE,
    };

    // Tests the starting board matches the classic 5x5 console board
    // Verified by changing default values
    #[test]
    fn test_default_board_size() {
        assert_eq!(DEFAULT_ROWS, 5);
        assert_eq!(DEFAULT_COLUMNS, 5);
    }

    // Tests defaults fall inside the range the resize command accepts
    #[test]
    fn test_defaults_within_console_limit() {
        assert!((1..=MAX_GRID_DIMENSION).contains(&DEFAULT_ROWS));
        assert!((1..=MAX_GRID_DIMENSION).contains(&DEFAULT_COLUMNS));
    }

    #[test]
    fn test_scatter_settings() {
        assert_eq!(DEFAULT_SEED, 42);
        assert!(SCATTER_ATTEMPTS_PER_TILE > 0);
    }

    #[test]
    fn test_console_text() {
        assert_eq!(PROMPT, "> ");
        assert_eq!(EMPTY_CELL, ' ');
    }
}
