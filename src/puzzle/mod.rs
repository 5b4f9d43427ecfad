//! The 8-puzzle domain model.
//!
//! Shared by both engines: the [`Board`] value type, the goal constant,
//! blank-tile moves, and the two scoring functions.
//!
//! - [`misplaced_tiles`]: fitness for the genetic engine
//! - [`manhattan_distance`]: cost for the annealing engine
//! - [`neighbors`]: legal one-move successors

mod board;
mod heuristics;
mod moves;

pub use board::{Board, BLANK, CELLS, SIDE};
pub use heuristics::{manhattan_distance, misplaced_tiles};
pub use moves::{neighbors, Direction};
