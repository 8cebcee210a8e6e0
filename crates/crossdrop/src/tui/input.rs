//! Cursor movement for keyboard navigation.

use crossdrop_puzzle::Coord;
use crossterm::event::KeyCode;

/// Moves the grid cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Coord, key: KeyCode, rows: usize, cols: usize) -> Coord {
    match key {
        KeyCode::Up => Coord::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down if cursor.row + 1 < rows => Coord::new(cursor.row + 1, cursor.col),
        KeyCode::Left => Coord::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right if cursor.col + 1 < cols => Coord::new(cursor.row, cursor.col + 1),
        _ => cursor,
    }
}

/// Moves the pool selection, wrapping around at both ends.
pub fn move_selection(selected: usize, key: KeyCode, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    match key {
        KeyCode::Up => (selected + len - 1) % len,
        KeyCode::Down => (selected + 1) % len,
        _ => selected.min(len - 1),
    }
}
