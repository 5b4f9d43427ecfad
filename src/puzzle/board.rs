//! The 3×3 board.

use crate::error::PuzzleError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::ops::Index;

/// Board side length.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Label of the blank cell.
pub const BLANK: u8 = 0;

/// An 8-puzzle arrangement, stored row-major.
///
/// `Board` is `Copy`: every move, crossover or mutation produces a new value
/// and never aliases the board it was derived from.
///
/// Boards built through the public constructors are always permutations of
/// `0..=8`. The genetic engine's crossover can produce label sequences with
/// repeated or missing labels; [`is_permutation`](Board::is_permutation)
/// tells the two apart.
///
/// # Examples
///
/// ```
/// use eight_puzzle_search::puzzle::Board;
///
/// let board = Board::from_rows([[1, 2, 3], [4, 5, 6], [0, 7, 8]]).unwrap();
/// assert_eq!(board.blank_position(), Some((2, 0)));
/// assert!(!board.is_goal());
/// assert!(Board::GOAL.is_goal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[u8; 9]", into = "[u8; 9]")
)]
pub struct Board {
    tiles: [u8; CELLS],
}

impl Board {
    /// The solved arrangement: `[[1, 2, 3], [4, 5, 6], [7, 8, 0]]`.
    pub const GOAL: Board = Board {
        tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
    };

    /// Creates a board from a flat row-major tile array.
    ///
    /// # Errors
    /// Returns [`PuzzleError`] unless `tiles` is a permutation of `0..=8`.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, PuzzleError> {
        let mut seen = [false; CELLS];
        for &tile in &tiles {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(PuzzleError::LabelOutOfRange(tile))?;
            if *slot {
                return Err(PuzzleError::DuplicateLabel(tile));
            }
            *slot = true;
        }
        Ok(Self { tiles })
    }

    /// Creates a board from three rows of three labels.
    pub fn from_rows(rows: [[u8; SIDE]; SIDE]) -> Result<Self, PuzzleError> {
        let mut tiles = [0u8; CELLS];
        for (r, row) in rows.iter().enumerate() {
            tiles[r * SIDE..(r + 1) * SIDE].copy_from_slice(row);
        }
        Self::new(tiles)
    }

    /// Wraps a label sequence without checking it.
    ///
    /// Only the genetic operators use this; their offspring are scored and
    /// bred whether or not they are legal boards.
    pub(crate) const fn from_tiles_unchecked(tiles: [u8; CELLS]) -> Self {
        Self { tiles }
    }

    /// A uniformly shuffled arrangement of the goal labels.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut tiles = Self::GOAL.tiles;
        tiles.shuffle(rng);
        Self { tiles }
    }

    /// Row-major tile labels.
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// The board as three rows.
    pub fn rows(&self) -> [[u8; SIDE]; SIDE] {
        let mut rows = [[0u8; SIDE]; SIDE];
        for (i, &tile) in self.tiles.iter().enumerate() {
            rows[i / SIDE][i % SIDE] = tile;
        }
        rows
    }

    /// Label at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not below [`SIDE`].
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < SIDE && col < SIDE, "cell ({row}, {col}) is off the board");
        self.tiles[row * SIDE + col]
    }

    pub fn is_goal(&self) -> bool {
        *self == Self::GOAL
    }

    /// Whether every label `0..=8` occurs exactly once.
    pub fn is_permutation(&self) -> bool {
        Self::new(self.tiles).is_ok()
    }

    /// `(row, col)` of the blank, or `None` if the board has no blank.
    pub fn blank_position(&self) -> Option<(usize, usize)> {
        self.tiles
            .iter()
            .position(|&t| t == BLANK)
            .map(|i| (i / SIDE, i % SIDE))
    }

    /// Returns a copy with the cells at flat indices `a` and `b` exchanged.
    pub(crate) fn swapped(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.tiles;
        tiles.swap(a, b);
        Self { tiles }
    }
}

impl Index<usize> for Board {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.tiles[index]
    }
}

impl TryFrom<[u8; CELLS]> for Board {
    type Error = PuzzleError;

    fn try_from(tiles: [u8; CELLS]) -> Result<Self, PuzzleError> {
        Self::new(tiles)
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = PuzzleError;

    fn try_from(tiles: &[u8]) -> Result<Self, PuzzleError> {
        let tiles: [u8; CELLS] = tiles
            .try_into()
            .map_err(|_| PuzzleError::WrongLength(tiles.len()))?;
        Self::new(tiles)
    }
}

impl From<Board> for [u8; CELLS] {
    fn from(board: Board) -> Self {
        board.tiles
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_goal_layout() {
        assert_eq!(Board::GOAL.rows(), [[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        assert_eq!(Board::GOAL.blank_position(), Some((2, 2)));
        assert!(Board::GOAL.is_permutation());
    }

    #[test]
    fn test_rows_round_trip() {
        let rows = [[1, 2, 3], [4, 5, 6], [0, 7, 8]];
        let board = Board::from_rows(rows).unwrap();
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 5, 6, 0, 7, 8]);
        assert_eq!(board.rows(), rows);
        assert_eq!(board.get(2, 0), 0);
        assert_eq!(board[8], 8);
    }

    #[test]
    fn test_rejects_bad_labels() {
        assert_eq!(
            Board::new([1, 2, 3, 4, 5, 6, 7, 8, 9]),
            Err(PuzzleError::LabelOutOfRange(9))
        );
        assert_eq!(
            Board::new([1, 1, 3, 4, 5, 6, 7, 8, 0]),
            Err(PuzzleError::DuplicateLabel(1))
        );
    }

    #[test]
    fn test_try_from_slice_length() {
        let short: &[u8] = &[1, 2, 3];
        assert_eq!(Board::try_from(short), Err(PuzzleError::WrongLength(3)));
        let ok: &[u8] = &[1, 2, 3, 0, 5, 6, 4, 7, 8];
        assert!(Board::try_from(ok).is_ok());
    }

    #[test]
    fn test_unchecked_may_be_invalid() {
        let board = Board::from_tiles_unchecked([1, 1, 1, 4, 5, 6, 7, 8, 0]);
        assert!(!board.is_permutation());
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = create_rng(Some(42));
        for _ in 0..100 {
            assert!(Board::random(&mut rng).is_permutation());
        }
    }

    #[test]
    fn test_swapped_leaves_source() {
        let board = Board::GOAL;
        let other = board.swapped(0, 8);
        assert_eq!(board, Board::GOAL);
        assert_eq!(other.tiles(), &[0, 2, 3, 4, 5, 6, 7, 8, 1]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Board::GOAL.to_string(), "1 2 3\n4 5 6\n7 8 0");
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_get_out_of_bounds() {
        Board::GOAL.get(3, 0);
    }
}
