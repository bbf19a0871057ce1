//! Difficulty grading and step-by-step logical solving.

use std::fmt::{self, Display};

use sudostep_core::{Board, CellSet};

use crate::{
    Step,
    strategy::{
        aic::Aic,
        als::{AlsXyWing, AlsXz},
        chains::{LengthRange, XChain, XyChain},
        coloring::{RemotePair, SimpleColors},
        fish::Fish,
        intersection::Intersection,
        singles::{HiddenSingle, NakedSingle},
        subsets::{HiddenSubset, NakedSubset},
        sue_de_coq::SueDeCoq,
        wings::{WWing, XyWing, XyzWing},
    },
};

/// Upper bound handed to the chain engine by the ladder.
const CHAIN_MAX_LENGTH: usize = 1024;

/// The seven difficulty bands, labelled by the hardest strategy tier a
/// puzzle needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    /// Full houses and box hidden singles only.
    Trivial,
    /// All singles and intersections.
    Casual,
    /// Pairs and X-Wings.
    Beginner,
    /// Triples, finned fish, wings, short chains.
    Intermediate,
    /// Quadruples, colours, jellyfish, medium chains.
    Advanced,
    /// Long chains, the chain engine, Sue-de-Coq, ALS-XZ.
    Expert,
    /// Beyond the ladder.
    Master,
}

impl Grade {
    /// All bands, easiest first.
    pub const ALL: [Grade; 7] = [
        Grade::Trivial,
        Grade::Casual,
        Grade::Beginner,
        Grade::Intermediate,
        Grade::Advanced,
        Grade::Expert,
        Grade::Master,
    ];

    /// The band's lowercase name, used for the output file stems.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Grade::Trivial => "trivial",
            Grade::Casual => "casual",
            Grade::Beginner => "beginner",
            Grade::Intermediate => "intermediate",
            Grade::Advanced => "advanced",
            Grade::Expert => "expert",
            Grade::Master => "master",
        }
    }

    /// The band's position, 0-6.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn apply_first(board: &mut Board, finders: &[&dyn Fn(&Board) -> Option<Step>]) -> bool {
    for finder in finders {
        if let Some(step) = finder(board) {
            step.apply_to(board);
            return true;
        }
    }
    false
}

/// Labels a puzzle by the deepest strategy tier a fixed ladder needs to
/// solve it. A board the ladder cannot finish is [`Grade::Master`].
#[must_use]
pub fn grade(board: &Board) -> Grade {
    let mut board = board.clone();
    let mut grade = Grade::Trivial;
    while board.filled() != CellSet::FULL {
        if apply_first(
            &mut board,
            &[
                &|b| NakedSingle::find(b, true),
                &|b| HiddenSingle::find(b, true),
            ],
        ) {
            continue;
        }
        grade = grade.max(Grade::Casual);
        if apply_first(
            &mut board,
            &[
                &|b| HiddenSingle::find(b, false),
                &|b| NakedSingle::find(b, false),
                &|b| HiddenSubset::find(b, 1),
                &Intersection::find,
            ],
        ) {
            continue;
        }
        grade = grade.max(Grade::Beginner);
        if apply_first(
            &mut board,
            &[
                &|b| NakedSubset::find(b, 2),
                &|b| HiddenSubset::find(b, 2),
                &|b| Fish::find(b, 2, false),
            ],
        ) {
            continue;
        }
        grade = grade.max(Grade::Intermediate);
        if apply_first(
            &mut board,
            &[
                &|b| NakedSubset::find(b, 3),
                &|b| HiddenSubset::find(b, 3),
                &|b| Fish::find(b, 2, true),
                &XyWing::find,
                &XyzWing::find,
                &WWing::find,
                &|b| Fish::find(b, 3, false),
                &|b| Fish::find(b, 3, true),
                &|b| XChain::find(b, LengthRange::at_most(3)),
                &|b| XyChain::find(b, LengthRange::at_most(3)),
            ],
        ) {
            continue;
        }
        grade = grade.max(Grade::Advanced);
        if apply_first(
            &mut board,
            &[
                &|b| NakedSubset::find(b, 4),
                &|b| HiddenSubset::find(b, 4),
                &RemotePair::find,
                &SimpleColors::find,
                &|b| Fish::find(b, 4, false),
                &|b| Fish::find(b, 4, true),
                &|b| XChain::find(b, LengthRange::between(5, 5)),
                &|b| XyChain::find(b, LengthRange::between(4, 5)),
            ],
        ) {
            continue;
        }
        grade = grade.max(Grade::Expert);
        if apply_first(
            &mut board,
            &[
                &|b| XChain::find(b, LengthRange::at_least(7)),
                &|b| XyChain::find(b, LengthRange::at_least(6)),
                &|b| Aic::find(b, CHAIN_MAX_LENGTH),
                &|b| SueDeCoq::find(b, false),
                &AlsXz::find,
            ],
        ) {
            continue;
        }
        return Grade::Master;
    }
    grade
}

/// Runs the full strategy ladder (the grading ladder plus extended
/// Sue-de-Coq and ALS-XY-Wing) until the board is solved or no strategy
/// applies, returning the applied steps.
///
/// Every returned step removes at least one candidate bit or commits a
/// cell, so the loop is bounded by the board's candidate count.
pub fn solve_logically(board: &mut Board) -> Vec<Step> {
    let mut steps = Vec::new();
    while board.filled() != CellSet::FULL {
        let found = next_step(board);
        let Some(step) = found else { break };
        step.apply_to(board);
        steps.push(step);
    }
    steps
}

/// The next step the full ladder would take, without applying it.
#[must_use]
pub fn next_step(board: &Board) -> Option<Step> {
    let finders: &[&dyn Fn(&Board) -> Option<Step>] = &[
        &|b| NakedSingle::find(b, true),
        &|b| HiddenSingle::find(b, true),
        &|b| HiddenSingle::find(b, false),
        &|b| NakedSingle::find(b, false),
        &Intersection::find,
        &|b| NakedSubset::find(b, 2),
        &|b| HiddenSubset::find(b, 2),
        &|b| Fish::find(b, 2, false),
        &|b| NakedSubset::find(b, 3),
        &|b| HiddenSubset::find(b, 3),
        &|b| Fish::find(b, 2, true),
        &XyWing::find,
        &XyzWing::find,
        &WWing::find,
        &|b| Fish::find(b, 3, false),
        &|b| Fish::find(b, 3, true),
        &|b| XChain::find(b, LengthRange::at_most(3)),
        &|b| XyChain::find(b, LengthRange::at_most(3)),
        &|b| NakedSubset::find(b, 4),
        &|b| HiddenSubset::find(b, 4),
        &RemotePair::find,
        &SimpleColors::find,
        &|b| Fish::find(b, 4, false),
        &|b| Fish::find(b, 4, true),
        &|b| XChain::find(b, LengthRange::between(5, 5)),
        &|b| XyChain::find(b, LengthRange::between(4, 5)),
        &|b| SueDeCoq::find(b, false),
        &|b| Aic::find(b, CHAIN_MAX_LENGTH),
        &|b| SueDeCoq::find(b, true),
        &AlsXz::find,
        &AlsXyWing::find,
    ];
    for finder in finders {
        if let Some(step) = finder(board) {
            return Some(step);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str =
        "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
    const CLASSIC: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    #[test]
    fn test_grade_easy_puzzles() {
        let board = Board::from_short(EASY).unwrap();
        let grade = grade(&board);
        assert!(grade <= Grade::Casual, "got {grade}");
    }

    #[test]
    fn test_grade_is_low_for_singles_only_puzzle() {
        let board = Board::from_short(CLASSIC).unwrap();
        assert!(grade(&board) <= Grade::Casual);
    }

    #[test]
    fn test_solve_logically_solves_easy_puzzle() {
        let mut board = Board::from_short(EASY).unwrap();
        let steps = solve_logically(&mut board);
        assert!(board.is_solved());
        assert!(!steps.is_empty());
    }

    #[test]
    fn test_solved_board_grades_trivial() {
        let mut board = Board::from_short(CLASSIC).unwrap();
        assert_eq!(board.brute_force(1), 1);
        assert_eq!(grade(&board), Grade::Trivial);
    }

    #[test]
    fn test_grade_ordering() {
        assert!(Grade::Trivial < Grade::Casual);
        assert!(Grade::Expert < Grade::Master);
        assert_eq!(Grade::ALL[6], Grade::Master);
        assert_eq!(Grade::Master.index(), 6);
        assert_eq!(Grade::Advanced.name(), "advanced");
    }
}
