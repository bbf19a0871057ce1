//! Step soundness over generated puzzles.
//!
//! Every step the ladder takes on a puzzle with a known unique solution
//! must keep every solution digit, strictly shrink the candidate count, and
//! be idempotent.

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sudostep_core::{Board, Cell};
use sudostep_generator::{Symmetry, minimal_puzzle};
use sudostep_solver::next_step;

// Bits in unfilled cells: committing a cell retires its mask even when its
// peers were already pruned.
fn candidate_bits(board: &Board) -> usize {
    board
        .unfilled()
        .iter()
        .map(|cell| board.candidates(cell).len())
        .sum()
}

fn check_puzzle(seed: u64, symmetry: Symmetry) {
    let mut rng = Pcg64::seed_from_u64(seed);
    let puzzle = minimal_puzzle(symmetry, &mut rng);
    let mut solution = puzzle.clone();
    assert_eq!(solution.brute_force(2), 1, "seed {seed}: not unique");

    let mut board = puzzle;
    let mut applied = 0;
    while let Some(step) = next_step(&board) {
        let before = candidate_bits(&board);
        let mut after = board.clone();
        step.apply_to(&mut after);

        // Soundness: the solution digit survives in every cell.
        for cell in Cell::ALL {
            let digit = solution.candidates(cell).first().expect("solved cell");
            assert!(
                after.candidates(cell).contains(digit),
                "seed {seed}: step `{step}` removed the solution digit {digit} at {cell}"
            );
        }

        // Monotonicity: a found step strictly shrinks the board.
        assert!(
            candidate_bits(&after) < before,
            "seed {seed}: step `{step}` made no progress"
        );

        // Idempotence.
        let mut twice = after.clone();
        step.apply_to(&mut twice);
        assert_eq!(after, twice, "seed {seed}: step `{step}` not idempotent");

        board = after;
        applied += 1;
        assert!(applied < 1000, "seed {seed}: runaway ladder");
    }
}

#[test]
fn test_ladder_steps_are_sound_on_generated_puzzles() {
    for seed in 0..4 {
        check_puzzle(seed, Symmetry::Rotational);
    }
    for seed in 4..8 {
        check_puzzle(seed, Symmetry::Mirror);
    }
}

// A broader sweep for when there is time to burn:
// `cargo test -p sudostep-solver -- --ignored`.
#[test]
#[ignore = "sweeps many seeds; slow"]
fn test_ladder_steps_are_sound_extended() {
    for seed in 100..164 {
        check_puzzle(seed, Symmetry::Rotational);
    }
}
