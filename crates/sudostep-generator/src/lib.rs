//! Minimal-puzzle generation.
//!
//! # Overview
//!
//! Puzzles are generated by removal: fill a grid completely at random, then
//! repeatedly clear one symmetry pair of cells at a time, keeping the
//! removal only when the board still has a unique solution (confirmed by
//! brute force with a two-solution cap). When every pair has been tried the
//! puzzle is *minimal*: no further pair can go without breaking uniqueness.
//!
//! All randomness flows through the caller's [`Rng`], so a fixed RNG state
//! reproduces the exact same puzzle; the farm records each worker's seed
//! for that reason.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64;
//! use sudostep_generator::{Symmetry, minimal_puzzle};
//!
//! let mut rng = Pcg64::seed_from_u64(7);
//! let puzzle = minimal_puzzle(Symmetry::Rotational, &mut rng);
//! assert_eq!(puzzle.solution_count(2), 1);
//! ```

use rand::{Rng, seq::SliceRandom as _};
use sudostep_core::{Board, Cell};

/// The symmetry of the generated givens pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    /// No symmetry: cells are removed one at a time.
    None,
    /// 180° rotational symmetry around the centre cell.
    Rotational,
    /// Left-right mirror symmetry.
    Mirror,
}

/// The cell pairs the generator removes together under a symmetry.
///
/// A self-paired cell (the centre under rotation) appears as `(c, c)`.
#[must_use]
pub fn symmetry_pairs(symmetry: Symmetry) -> Vec<(Cell, Cell)> {
    match symmetry {
        Symmetry::None => Cell::ALL.iter().map(|&cell| (cell, cell)).collect(),
        Symmetry::Rotational => (0..41u8)
            .map(|i| (Cell::from_index(i), Cell::from_index(80 - i)))
            .collect(),
        Symmetry::Mirror => {
            let mut pairs = Vec::with_capacity(45);
            for row in 0..9 {
                for col in 0..5 {
                    pairs.push((Cell::new(row, col), Cell::new(row, 8 - col)));
                }
            }
            pairs
        }
    }
}

/// Generates a minimal puzzle of the requested symmetry.
///
/// The board starts out as a random filled grid; symmetry pairs are then
/// tried in shuffled order, each removal committed only while the solution
/// stays unique. The returned board's candidate masks are pruned against
/// the surviving givens.
pub fn minimal_puzzle<R: Rng + ?Sized>(symmetry: Symmetry, rng: &mut R) -> Board {
    let mut current = Board::random_filled(rng);
    let mut pairs = symmetry_pairs(symmetry);
    pairs.shuffle(rng);
    while let Some((first, second)) = pairs.pop() {
        let mut trial = current.clone();
        trial.set_unknown(first);
        trial.set_unknown(second);
        if trial.solution_count(2) == 1 {
            current.set_unknown(first);
            current.set_unknown(second);
        }
    }
    current.prune_candidates();
    current
}
