//! Naked and hidden subsets.

use std::fmt::{self, Display};

use sudostep_core::{Board, DigitSet, House, SpotSet};

use crate::Step;

use super::for_each_combination;

fn tuple_name(size: usize) -> &'static str {
    match size {
        1 => "Single",
        2 => "Pair",
        3 => "Triple",
        4 => "Quadruple",
        _ => "Tuple",
    }
}

/// `size` cells of a house whose candidates fit in `size` digits.
///
/// Those digits are locked into the subset cells and leave the rest of the
/// house.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NakedSubset {
    /// The house containing the subset.
    pub house: House,
    /// The spots of the subset cells within the house.
    pub spots: SpotSet,
    /// The locked candidates.
    pub candidates: DigitSet,
}

impl NakedSubset {
    /// Finds a naked subset of the given size (2-4).
    #[must_use]
    pub fn find(board: &Board, size: usize) -> Option<Step> {
        if !(2..=4).contains(&size) {
            return None;
        }
        for house in House::ALL {
            let unfilled: Vec<u8> = (0u8..9)
                .filter(|&spot| !board.is_filled(house.cell_at(spot)))
                .collect();
            let mut result = None;
            for_each_combination(&unfilled, size, &mut |spots| {
                let mut candidates = DigitSet::EMPTY;
                for &spot in spots {
                    candidates |= board.candidates(house.cell_at(spot));
                }
                if candidates.len() > size {
                    return false;
                }
                let chosen: SpotSet = spots.iter().copied().collect();
                // Found a naked set; only report it if it removes something.
                let strips_others = unfilled.iter().any(|&spot| {
                    !chosen.contains(spot)
                        && !board.candidates(house.cell_at(spot)).is_disjoint(candidates)
                });
                if strips_others {
                    result = Some(Self {
                        house,
                        spots: chosen,
                        candidates,
                    });
                }
                result.is_some()
            });
            if let Some(found) = result {
                return Some(Step::NakedSubset(found));
            }
        }
        None
    }

    /// Removes the locked candidates from the rest of the house.
    pub fn apply_to(&self, board: &mut Board) {
        for spot in !self.spots {
            let cell = self.house.cell_at(spot);
            if !board.is_filled(cell) {
                for digit in self.candidates {
                    board.eliminate(cell, digit);
                }
            }
        }
    }
}

impl Display for NakedSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Naked {}: in {}, {}={}",
            tuple_name(self.spots.len()),
            self.house,
            self.house.cells_in(self.spots),
            self.candidates
        )
    }
}

/// `size` digits of a house confined to `size` cells.
///
/// Everything else is stripped from those cells. Size 1 is the hidden
/// single; applying it commits the digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenSubset {
    /// The house containing the subset.
    pub house: House,
    /// The spots of the subset cells within the house.
    pub spots: SpotSet,
    /// The digits confined to those cells.
    pub candidates: DigitSet,
}

impl HiddenSubset {
    /// Finds a hidden subset of the given size (1-4).
    #[must_use]
    pub fn find(board: &Board, size: usize) -> Option<Step> {
        if !(1..=4).contains(&size) {
            return None;
        }
        for house in House::ALL {
            let unfilled: Vec<u8> = (0u8..9)
                .filter(|&spot| !board.is_filled(house.cell_at(spot)))
                .collect();
            let mut result = None;
            for_each_combination(&unfilled, size, &mut |spots| {
                let chosen: SpotSet = spots.iter().copied().collect();
                // The complement of a hidden subset is a naked subset of the
                // remaining cells, filled ones included.
                let mut in_candidates = DigitSet::EMPTY;
                let mut out_candidates = DigitSet::EMPTY;
                for spot in 0u8..9 {
                    let mask = board.candidates(house.cell_at(spot));
                    if chosen.contains(spot) {
                        in_candidates |= mask;
                    } else {
                        out_candidates |= mask;
                    }
                }
                if out_candidates.len() == 9 - size && !in_candidates.is_disjoint(out_candidates) {
                    result = Some(Self {
                        house,
                        spots: chosen,
                        candidates: !out_candidates,
                    });
                }
                result.is_some()
            });
            if let Some(found) = result {
                return Some(Step::HiddenSubset(found));
            }
        }
        None
    }

    /// Strips foreign candidates from the subset cells; a size-1 subset
    /// commits its digit.
    pub fn apply_to(&self, board: &mut Board) {
        for spot in self.spots {
            board.retain(self.house.cell_at(spot), self.candidates);
        }
        if self.spots.len() == 1 {
            if let (Some(spot), Some(digit)) = (self.spots.first(), self.candidates.first()) {
                board.place(self.house.cell_at(spot), digit);
            }
        }
    }
}

impl Display for HiddenSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hidden {}: in {}, {}={}",
            tuple_name(self.spots.len()),
            self.house,
            self.house.cells_in(self.spots),
            self.candidates
        )
    }
}

#[cfg(test)]
mod tests {
    use sudostep_core::{Cell, Digit};

    use super::*;
    use crate::testing::StepTester;

    const PUZZLE: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    #[test]
    fn test_naked_pair_on_classic_board() {
        let board = Board::from_short(PUZZLE).unwrap();
        let step = NakedSubset::find(&board, 2).unwrap();
        let Step::NakedSubset(ref subset) = step else {
            panic!("wrong variant: {step}");
        };
        assert_eq!(subset.spots.len(), 2);
        assert_eq!(subset.candidates.len(), 2);

        // Applying it must cost at least one peer a candidate bit.
        StepTester::new(board).apply(&step).assert_progress();
    }

    #[test]
    fn test_naked_pair_synthetic() {
        let mut board = Board::empty();
        let pair = DigitSet::from_iter([Digit::new(0), Digit::new(1)]);
        board.retain(Cell::new(0, 0), pair);
        board.retain(Cell::new(0, 1), pair);

        let step = NakedSubset::find(&board, 2).unwrap();
        let Step::NakedSubset(ref subset) = step else {
            panic!("wrong variant: {step}");
        };
        assert_eq!(subset.house, House::row(0));
        assert_eq!(subset.candidates, pair);

        StepTester::new(board)
            .apply(&step)
            .assert_removed(Cell::new(0, 5), [Digit::new(0), Digit::new(1)])
            .assert_no_change(Cell::new(0, 0))
            .assert_no_change(Cell::new(1, 5));
    }

    #[test]
    fn test_naked_triple_synthetic() {
        let mut board = Board::empty();
        let triple = DigitSet::from_iter([Digit::new(2), Digit::new(4), Digit::new(6)]);
        // Two cells carry subsets of the triple; the union still has 3 digits.
        board.retain(Cell::new(3, 0), DigitSet::from_iter([Digit::new(2), Digit::new(4)]));
        board.retain(Cell::new(4, 0), DigitSet::from_iter([Digit::new(4), Digit::new(6)]));
        board.retain(Cell::new(5, 0), DigitSet::from_iter([Digit::new(2), Digit::new(6)]));

        let step = NakedSubset::find(&board, 3).unwrap();
        let Step::NakedSubset(ref subset) = step else {
            panic!("wrong variant: {step}");
        };
        assert_eq!(subset.candidates, triple);
        assert_eq!(subset.house, House::column(0));

        StepTester::new(board)
            .apply(&step)
            .assert_removed(Cell::new(0, 0), [Digit::new(2), Digit::new(4), Digit::new(6)]);
    }

    #[test]
    fn test_no_naked_subset_without_eliminations() {
        let mut board = Board::empty();
        let pair = DigitSet::from_iter([Digit::new(0), Digit::new(1)]);
        board.retain(Cell::new(0, 0), pair);
        board.retain(Cell::new(0, 1), pair);
        // Strip the pair digits from the rest of their houses by hand.
        for cell in Cell::new(0, 0).peers() | Cell::new(0, 1).peers() {
            if cell != Cell::new(0, 0) && cell != Cell::new(0, 1) {
                board.retain(cell, !pair);
            }
        }
        assert!(NakedSubset::find(&board, 2).is_none());
    }

    #[test]
    fn test_hidden_pair_synthetic() {
        let mut board = Board::empty();
        let pair = DigitSet::from_iter([Digit::new(7), Digit::new(8)]);
        // 8 and 9 appear in row 5 only at c1 and c2.
        for col in 2..9 {
            board.retain(Cell::new(4, col), !pair);
        }

        let step = HiddenSubset::find(&board, 2).unwrap();
        let Step::HiddenSubset(ref subset) = step else {
            panic!("wrong variant: {step}");
        };
        assert_eq!(subset.house, House::row(4));
        assert_eq!(subset.candidates, pair);
        assert_eq!(subset.spots, SpotSet::from_iter([0u8, 1]));

        StepTester::new(board)
            .apply(&step)
            .assert_removed(Cell::new(4, 0), (0..7).map(Digit::new))
            .assert_removed(Cell::new(4, 1), (0..7).map(Digit::new));
    }

    #[test]
    fn test_hidden_single_as_size_one_subset_commits() {
        let mut board = Board::empty();
        let digit = Digit::new(3);
        for col in 1..9 {
            board.eliminate(Cell::new(6, col), digit);
        }
        let step = HiddenSubset::find(&board, 1).unwrap();
        StepTester::new(board)
            .apply(&step)
            .assert_committed(Cell::new(6, 0), digit);
    }

    #[test]
    fn test_step_idempotence() {
        let board = Board::from_short(PUZZLE).unwrap();
        let step = NakedSubset::find(&board, 2).unwrap();
        let mut once = board.clone();
        step.apply_to(&mut once);
        let mut twice = once.clone();
        step.apply_to(&mut twice);
        assert_eq!(once, twice);
    }
}
