//! Blank-tile moves and neighbor generation.

use super::board::{Board, SIDE};

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// All directions, in the order neighbors are generated.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// `(row, col)` offset of the move.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
        }
    }
}

impl Board {
    /// Slides the blank one cell in `direction`.
    ///
    /// Returns `None` when the move would leave the board or the board has
    /// no blank. `self` is never modified.
    pub fn slide_blank(&self, direction: Direction) -> Option<Board> {
        let (row, col) = self.blank_position()?;
        let (dr, dc) = direction.delta();
        let new_row = row.checked_add_signed(dr).filter(|&r| r < SIDE)?;
        let new_col = col.checked_add_signed(dc).filter(|&c| c < SIDE)?;
        Some(self.swapped(row * SIDE + col, new_row * SIDE + new_col))
    }
}

/// Every board reachable by one legal blank move.
///
/// Corner blanks give 2 neighbors, edge blanks 3, the center 4. A board
/// without a blank has none.
///
/// # Examples
///
/// ```
/// use eight_puzzle_search::puzzle::{neighbors, Board};
///
/// // Blank in the bottom-right corner: it can only go left or up.
/// assert_eq!(neighbors(&Board::GOAL).len(), 2);
/// ```
pub fn neighbors(board: &Board) -> Vec<Board> {
    Direction::ALL
        .iter()
        .filter_map(|&direction| board.slide_blank(direction))
        .collect()
}
