//! Naked and hidden singles.

use std::fmt::{self, Display};

use sudostep_core::{Board, Cell, Digit, House};

use crate::Step;

/// An unfilled cell whose candidate mask is down to one digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NakedSingle {
    /// The cell to commit.
    pub cell: Cell,
    /// Its last remaining candidate.
    pub digit: Digit,
}

impl NakedSingle {
    /// Finds a naked single.
    ///
    /// With `full_house_only`, only singles whose row, column, or box has
    /// exactly one unfilled cell are reported (the "full house" special
    /// case, the cheapest deduction there is).
    #[must_use]
    pub fn find(board: &Board, full_house_only: bool) -> Option<Step> {
        for cell in board.unfilled() {
            let mask = board.candidates(cell);
            if mask.len() != 1 {
                continue;
            }
            if full_house_only && !in_full_house(board, cell) {
                continue;
            }
            return Some(Step::NakedSingle(Self {
                cell,
                digit: mask.first()?,
            }));
        }
        None
    }

    /// Commits the digit.
    pub fn apply_to(&self, board: &mut Board) {
        board.place(self.cell, self.digit);
    }
}

fn in_full_house(board: &Board, cell: Cell) -> bool {
    let houses = [
        House::row(cell.row()),
        House::column(cell.col()),
        House::block(cell.box_index()),
    ];
    houses
        .into_iter()
        .any(|house| house.cell_set().difference(board.filled()).len() == 1)
}

impl Display for NakedSingle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Naked Single: {}={}", self.cell, self.digit)
    }
}

/// A digit with a single remaining position in some house.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenSingle {
    /// The house pinning the digit down.
    pub house: House,
    /// The only cell of the house that still carries the digit.
    pub cell: Cell,
    /// The digit to commit.
    pub digit: Digit,
}

impl HiddenSingle {
    /// Finds a hidden single, optionally looking at box houses only.
    #[must_use]
    pub fn find(board: &Board, box_only: bool) -> Option<Step> {
        let houses = if box_only {
            &House::ALL[18..]
        } else {
            &House::ALL[..]
        };
        for &house in houses {
            for digit in Digit::ALL {
                let spots = board.house_pattern(house, digit);
                if spots.len() != 1 {
                    continue;
                }
                let cell = house.cell_at(spots.first()?);
                return Some(Step::HiddenSingle(Self { house, cell, digit }));
            }
        }
        None
    }

    /// Commits the digit.
    pub fn apply_to(&self, board: &mut Board) {
        board.place(self.cell, self.digit);
    }
}

impl Display for HiddenSingle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hidden Single: in {}, {}={}",
            self.house, self.cell, self.digit
        )
    }
}
