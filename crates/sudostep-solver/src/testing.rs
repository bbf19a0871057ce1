//! Test utilities for strategy implementations.

use sudostep_core::{Board, Cell, Digit, DigitSet};

use crate::Step;

/// Total candidate bits across the unfilled cells of a board.
pub fn open_candidate_bits(board: &Board) -> usize {
    board
        .unfilled()
        .iter()
        .map(|cell| board.candidates(cell).len())
        .sum()
}

/// A fluent harness for verifying what a step does to a board.
///
/// Tracks the initial and current state so assertions can compare the two;
/// all methods return `self` for chaining and panic with `#[track_caller]`
/// locations on failure.
#[derive(Debug)]
pub struct StepTester {
    initial: Board,
    current: Board,
}

impl StepTester {
    /// Creates a tester from an initial board.
    pub fn new(initial: Board) -> Self {
        let current = initial.clone();
        Self { initial, current }
    }

    /// Creates a tester from a short-form board string.
    ///
    /// # Panics
    ///
    /// Panics if the string does not parse.
    #[track_caller]
    pub fn from_short(s: &str) -> Self {
        Self::new(Board::from_short(s).expect("valid short board"))
    }

    /// Applies a step to the current board.
    pub fn apply(mut self, step: &Step) -> Self {
        step.apply_to(&mut self.current);
        self
    }

    /// The current board state.
    pub fn board(&self) -> &Board {
        &self.current
    }

    /// Asserts that the cell is now committed to `digit` and was not
    /// committed before.
    #[track_caller]
    pub fn assert_committed(self, cell: Cell, digit: Digit) -> Self {
        assert!(
            !self.initial.is_filled(cell),
            "{cell} was already committed in the initial board"
        );
        assert!(
            self.current.is_filled(cell),
            "expected {cell} to be committed, candidates are {}",
            self.current.candidates(cell)
        );
        assert_eq!(
            self.current.candidates(cell),
            DigitSet::single(digit),
            "expected {cell} to hold {digit}"
        );
        self
    }

    /// Asserts that all of `digits` were present at `cell` initially and
    /// are gone now.
    #[track_caller]
    pub fn assert_removed(self, cell: Cell, digits: impl IntoIterator<Item = Digit>) -> Self {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);
        assert!(
            digits.is_subset(initial),
            "expected {digits} at {cell} initially, but candidates were {initial}"
        );
        assert!(
            current.is_disjoint(digits),
            "expected {digits} removed from {cell}, but candidates are {current}"
        );
        self
    }

    /// Asserts that the cell's candidates are unchanged.
    #[track_caller]
    pub fn assert_no_change(self, cell: Cell) -> Self {
        assert_eq!(
            self.initial.candidates(cell),
            self.current.candidates(cell),
            "expected no change at {cell}"
        );
        self
    }

    /// Asserts that the current board has strictly fewer open candidate
    /// bits (bits in unfilled cells) than the initial one.
    #[track_caller]
    pub fn assert_progress(self) -> Self {
        let before = open_candidate_bits(&self.initial);
        let after = open_candidate_bits(&self.current);
        assert!(
            after < before,
            "expected strictly fewer open candidate bits ({after} vs {before})"
        );
        self
    }
}
