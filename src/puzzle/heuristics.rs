//! Scoring functions. Lower is better; zero means solved.

use super::board::{Board, BLANK, CELLS, SIDE};

/// Number of cells whose label differs from the goal, blank included.
///
/// Ranges over `0..=9`. This is the genetic engine's fitness.
pub fn misplaced_tiles(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .zip(Board::GOAL.tiles())
        .filter(|(a, b)| a != b)
        .count() as u32
}

/// Sum of grid distances between each numbered tile and its goal cell.
///
/// The blank is not counted. For a legal board this is a lower bound on the
/// number of moves to the goal. This is the annealing engine's cost.
pub fn manhattan_distance(board: &Board) -> u32 {
    let mut distance = 0;
    for (index, &tile) in board.tiles().iter().enumerate() {
        if tile == BLANK || tile as usize >= CELLS {
            continue;
        }
        let (row, col) = (index / SIDE, index % SIDE);
        let target = tile as usize - 1;
        let (target_row, target_col) = (target / SIDE, target % SIDE);
        distance += row.abs_diff(target_row) + col.abs_diff(target_col);
    }
    distance as u32
}
