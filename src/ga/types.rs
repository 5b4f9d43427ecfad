//! Population members.

use crate::puzzle::{misplaced_tiles, Board};

/// A board paired with its fitness.
///
/// Scored once at construction. Operators never modify a candidate; they
/// build new boards, which become new candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub board: Board,

    /// Misplaced-tile count. Lower is better; 0 is the goal.
    pub fitness: u32,
}

impl Candidate {
    /// Scores `board` and wraps it.
    pub fn new(board: Board) -> Self {
        Self {
            fitness: misplaced_tiles(&board),
            board,
        }
    }

    pub fn is_goal(&self) -> bool {
        self.fitness == 0
    }
}

impl From<Board> for Candidate {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}
