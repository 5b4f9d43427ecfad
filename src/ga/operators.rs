//! Crossover and mutation over 9-label boards.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: prefix of one parent, suffix of the other.
//!   Does **not** preserve the permutation property.
//! - [`repair_duplicates`]: turns any label sequence back into a legal board.
//! - [`Crossover`]: chooses between the raw and the repaired variant.
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct random positions.

use crate::puzzle::{Board, CELLS};
use rand::seq::index;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Recombination operator used by the genetic engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Single-point crossover with no repair.
    ///
    /// Offspring may repeat some labels and miss others. They are still
    /// scored and bred from, so the search moves over label sequences
    /// rather than legal boards.
    #[default]
    SinglePoint,

    /// Single-point crossover followed by [`repair_duplicates`].
    ///
    /// Every offspring is a legal board.
    SinglePointRepaired,
}

impl Crossover {
    /// Produces one child from two parents using a random cut point.
    pub fn apply<R: Rng + ?Sized>(&self, parent_a: &Board, parent_b: &Board, rng: &mut R) -> Board {
        let child = single_point_crossover(parent_a, parent_b, random_cut_point(rng));
        match self {
            Crossover::SinglePoint => child,
            Crossover::SinglePointRepaired => repair_duplicates(&child),
        }
    }
}

/// Uniform cut point in `1..=7`, so both parents contribute at least one cell.
pub fn random_cut_point<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.random_range(1..CELLS - 1)
}

/// Child made of `parent_a[..cut]` followed by `parent_b[cut..]`.
///
/// # Panics
/// Panics if `cut > 9`.
pub fn single_point_crossover(parent_a: &Board, parent_b: &Board, cut: usize) -> Board {
    assert!(cut <= CELLS, "cut point {cut} is past the end of the board");
    let mut tiles = *parent_a.tiles();
    tiles[cut..].copy_from_slice(&parent_b.tiles()[cut..]);
    Board::from_tiles_unchecked(tiles)
}

/// Replaces repeated labels with the missing ones.
///
/// Scans left to right: the first occurrence of each label stays where it
/// is, later occurrences (and anything outside `0..=8`) are overwritten by
/// the missing labels in ascending order. A legal board comes back
/// unchanged.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn repair_duplicates(board: &Board) -> Board {
    let mut tiles = *board.tiles();
    let mut seen = [false; CELLS];
    let mut repeats = Vec::new();

    for (i, &tile) in tiles.iter().enumerate() {
        match seen.get_mut(tile as usize) {
            Some(slot) if !*slot => *slot = true,
            _ => repeats.push(i),
        }
    }

    let missing = (0..CELLS as u8).filter(|&label| !seen[label as usize]);
    for (i, label) in repeats.into_iter().zip(missing) {
        tiles[i] = label;
    }
    Board::from_tiles_unchecked(tiles)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Returns a copy of `board` with two distinct random positions exchanged.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Board {
    let picked = index::sample(rng, CELLS, 2);
    board.swapped(picked.index(0), picked.index(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn board(tiles: [u8; 9]) -> Board {
        Board::from_tiles_unchecked(tiles)
    }

    #[test]
    fn test_crossover_splices_at_cut() {
        let a = board([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let b = board([8, 7, 6, 5, 4, 3, 2, 1, 0]);
        let child = single_point_crossover(&a, &b, 3);
        assert_eq!(child.tiles(), &[1, 2, 3, 5, 4, 3, 2, 1, 0]);
        assert!(!child.is_permutation());
    }

    #[test]
    fn test_cut_point_range() {
        let mut rng = create_rng(Some(42));
        let mut hit = [false; CELLS];
        for _ in 0..2000 {
            let cut = random_cut_point(&mut rng);
            assert!((1..=7).contains(&cut), "cut {cut} out of range");
            hit[cut] = true;
        }
        assert!(hit[1..=7].iter().all(|&h| h), "every cut in 1..=7 should occur");
    }

    #[test]
    fn test_repair_fills_missing_in_order() {
        let child = board([1, 2, 3, 5, 4, 3, 2, 1, 0]);
        let repaired = repair_duplicates(&child);
        // 3, 2, 1 repeat at indices 5, 6, 7; 6, 7, 8 are missing.
        assert_eq!(repaired.tiles(), &[1, 2, 3, 5, 4, 6, 7, 8, 0]);
        assert!(repaired.is_permutation());
    }

    #[test]
    fn test_repair_keeps_legal_board() {
        let legal = Board::new([4, 1, 2, 0, 8, 7, 6, 3, 5]).unwrap();
        assert_eq!(repair_duplicates(&legal), legal);
    }

    #[test]
    fn test_repaired_crossover_is_legal() {
        let mut rng = create_rng(Some(9));
        for _ in 0..200 {
            let a = Board::random(&mut rng);
            let b = Board::random(&mut rng);
            let child = Crossover::SinglePointRepaired.apply(&a, &b, &mut rng);
            assert!(child.is_permutation());
        }
    }

    #[test]
    fn test_swap_mutation_leaves_parent() {
        let mut rng = create_rng(Some(1));
        let parent = Board::GOAL;
        let child = swap_mutation(&parent, &mut rng);
        assert_eq!(parent, Board::GOAL);
        assert_ne!(child, parent);
    }

    proptest! {
        #[test]
        fn prop_crossover_prefix_and_suffix(
            a in proptest::array::uniform9(0u8..9),
            b in proptest::array::uniform9(0u8..9),
            cut in 1usize..=7,
        ) {
            let child = single_point_crossover(&board(a), &board(b), cut);
            prop_assert_eq!(&child.tiles()[..cut], &a[..cut]);
            prop_assert_eq!(&child.tiles()[cut..], &b[cut..]);
        }

        #[test]
        fn prop_swap_touches_exactly_two_cells(seed in any::<u64>()) {
            let mut rng = create_rng(Some(seed));
            let parent = Board::random(&mut rng);
            let child = swap_mutation(&parent, &mut rng);
            let changed: Vec<usize> = (0..CELLS).filter(|&i| child[i] != parent[i]).collect();
            prop_assert_eq!(changed.len(), 2);
            prop_assert_eq!(child[changed[0]], parent[changed[1]]);
            prop_assert_eq!(child[changed[1]], parent[changed[0]]);
        }

        #[test]
        fn prop_repair_yields_permutation(tiles in proptest::array::uniform9(0u8..12)) {
            prop_assert!(repair_duplicates(&board(tiles)).is_permutation());
        }
    }
}
