//! Fish: X-Wing, Swordfish, Jellyfish, plain and finned.

use std::fmt::{self, Display};

use sudostep_core::{Board, Cell, CellSet, Digit, House, HouseSet, SpotSet};

use crate::Step;

use super::for_each_combination;

fn fish_name(size: usize) -> &'static str {
    match size {
        2 => "X-Wing",
        3 => "Swordfish",
        4 => "Jellyfish",
        _ => "Fish",
    }
}

/// A fish on one digit: `size` base lines whose candidates are covered by
/// `size` cross lines, eliminating the digit from the covered positions
/// outside the base.
///
/// In the finned form the base candidates sticking out of the cover are
/// confined to one box, and eliminations are restricted to the cover
/// positions inside that box (the cells that see every fin).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fish {
    /// The base houses (all rows or all columns).
    pub base: HouseSet,
    /// The cover houses (the opposite orientation).
    pub cover: HouseSet,
    /// The fish digit.
    pub digit: Digit,
    /// The fin cells; empty for a plain fish.
    pub fins: CellSet,
    /// The cells losing the digit.
    pub eliminations: CellSet,
}

impl Fish {
    /// Finds a plain or finned fish of the given size (2-4).
    #[must_use]
    pub fn find(board: &Board, size: usize, finned: bool) -> Option<Step> {
        if !(2..=4).contains(&size) {
            return None;
        }
        for digit in Digit::ALL {
            let rows = board.row_patterns(digit);
            let cols = board.col_patterns(digit);
            for row_based in [true, false] {
                let (base_patterns, cover_patterns) = if row_based {
                    (&rows, &cols)
                } else {
                    (&cols, &rows)
                };
                let found = if finned {
                    find_finned(base_patterns, cover_patterns, row_based, size, digit)
                } else {
                    find_vanilla(base_patterns, cover_patterns, row_based, size, digit)
                };
                if let Some(fish) = found {
                    return Some(Step::Fish(fish));
                }
            }
        }
        None
    }

    /// Removes the digit from the eliminated cells.
    pub fn apply_to(&self, board: &mut Board) {
        for cell in self.eliminations {
            board.eliminate(cell, self.digit);
        }
    }
}

impl Display for Fish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.fins.is_empty() {
            write!(f, "Finned ")?;
        }
        write!(
            f,
            "{}: {} in {}->{},",
            fish_name(self.base.len()),
            self.digit,
            self.base,
            self.cover
        )?;
        if !self.fins.is_empty() {
            write!(f, " fins {},", self.fins)?;
        }
        write!(f, " {}!={}", self.eliminations, self.digit)
    }
}

fn position_cell(row_based: bool, position: u8, cover: u8) -> Cell {
    if row_based {
        Cell::new(position, cover)
    } else {
        Cell::new(cover, position)
    }
}

fn house_set(row_based: bool, spots: SpotSet) -> HouseSet {
    spots
        .iter()
        .map(|i| if row_based { House::row(i) } else { House::column(i) })
        .collect()
}

fn find_vanilla(
    base_patterns: &[SpotSet; 9],
    cover_patterns: &[SpotSet; 9],
    row_based: bool,
    size: usize,
    digit: Digit,
) -> Option<Fish> {
    // A base line with one candidate is a hidden single, with none a placed
    // digit; neither belongs in a base set.
    let bases: Vec<u8> = (0u8..9)
        .filter(|&i| base_patterns[i as usize].len() >= 2)
        .collect();
    let mut result = None;
    for_each_combination(&bases, size, &mut |combo| {
        let mut cover = SpotSet::EMPTY;
        for &i in combo {
            cover |= base_patterns[i as usize];
        }
        if cover.len() != size {
            return false;
        }
        let base_spots: SpotSet = combo.iter().copied().collect();
        let mut eliminations = CellSet::EMPTY;
        for j in cover {
            for i in cover_patterns[j as usize].difference(base_spots) {
                eliminations.insert(position_cell(row_based, i, j));
            }
        }
        if eliminations.is_empty() {
            return false;
        }
        result = Some(Fish {
            base: house_set(row_based, base_spots),
            cover: house_set(!row_based, cover),
            digit,
            fins: CellSet::EMPTY,
            eliminations,
        });
        true
    });
    result
}

fn find_finned(
    base_patterns: &[SpotSet; 9],
    cover_patterns: &[SpotSet; 9],
    row_based: bool,
    size: usize,
    digit: Digit,
) -> Option<Fish> {
    let bases: Vec<u8> = (0u8..9)
        .filter(|&i| base_patterns[i as usize].len() >= 2)
        .collect();
    let mut result = None;
    for_each_combination(&bases, size, &mut |combo| {
        for fin_box in 0u8..9 {
            let box_row = fin_box / 3;
            let box_col = fin_box % 3;
            // Base positions falling inside the fin box, and the stretch of
            // base lines the box covers.
            let (box_positions, box_lines) = if row_based {
                (SpotSet::band(box_col), SpotSet::band(box_row))
            } else {
                (SpotSet::band(box_row), SpotSet::band(box_col))
            };

            // First treat every base candidate in the box as a fin.
            let mut cover = SpotSet::EMPTY;
            for &i in combo {
                let mut pattern = base_patterns[i as usize];
                if box_lines.contains(i) {
                    pattern = pattern.difference(box_positions);
                }
                cover |= pattern;
            }
            // What is left must be a valid fish whose cover reaches the box.
            if cover.len() != size {
                continue;
            }
            let cover_in_box = cover & box_positions;
            if cover_in_box.is_empty() {
                continue;
            }

            let base_spots: SpotSet = combo.iter().copied().collect();
            let mut eliminations = CellSet::EMPTY;
            for j in cover_in_box {
                let positions = cover_patterns[j as usize]
                    .difference(base_spots)
                    .intersection(box_lines);
                for i in positions {
                    eliminations.insert(position_cell(row_based, i, j));
                }
            }
            if eliminations.is_empty() {
                continue;
            }

            let mut fins = CellSet::EMPTY;
            for &i in combo {
                for j in base_patterns[i as usize].difference(cover) {
                    fins.insert(position_cell(row_based, j, i));
                }
            }
            result = Some(Fish {
                base: house_set(row_based, base_spots),
                cover: house_set(!row_based, cover),
                digit,
                fins,
                eliminations,
            });
            return true;
        }
        false
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StepTester;

    // A grid state with a classic X-Wing among its fish.
    const XWING_BOARD: &str =
        "1.....569492.561.8.561.924...964.8.1.64.1....218.356.4.4.5...169.1.64.85.6.9.1.2.";

    #[test]
    fn test_x_wing_on_reference_board() {
        let board = Board::from_short(XWING_BOARD).unwrap();
        let step = Fish::find(&board, 2, false).unwrap();
        let Step::Fish(ref fish) = step else {
            panic!("wrong variant: {step}");
        };
        assert_eq!(fish.base.len(), 2);
        assert_eq!(fish.cover.len(), 2);
        assert!(fish.fins.is_empty());
        assert!(!fish.eliminations.is_empty());

        StepTester::new(board).apply(&step).assert_progress();
    }

    #[test]
    fn test_column_x_wing_synthetic() {
        let mut board = Board::empty();
        let digit = Digit::new(2);
        // 3 in columns 3 and 8 only at rows 1 and 5.
        for row in 0..9 {
            if row != 0 && row != 4 {
                board.eliminate(Cell::new(row, 2), digit);
                board.eliminate(Cell::new(row, 7), digit);
            }
        }

        let step = Fish::find(&board, 2, false).unwrap();
        let Step::Fish(ref fish) = step else {
            panic!("wrong variant: {step}");
        };
        assert!(fish.base.contains(House::column(2)));
        assert!(fish.base.contains(House::column(7)));
        assert!(fish.cover.contains(House::row(0)));
        assert!(fish.cover.contains(House::row(4)));
        // Every other cell of rows 1 and 5 loses the digit.
        assert_eq!(fish.eliminations.len(), 14);

        StepTester::new(board)
            .apply(&step)
            .assert_removed(Cell::new(0, 0), [digit])
            .assert_removed(Cell::new(4, 6), [digit])
            .assert_no_change(Cell::new(0, 2));
    }

    #[test]
    fn test_finned_x_wing_synthetic() {
        let mut board = Board::empty();
        let digit = Digit::new(0);
        let keep = CellSet::from_iter([
            Cell::new(0, 0),
            Cell::new(0, 4),
            Cell::new(3, 0),
            Cell::new(3, 4),
            Cell::new(3, 5), // the fin
            Cell::new(4, 4),
            Cell::new(5, 4),
        ]);
        for cell in !keep {
            board.eliminate(cell, digit);
        }

        // The fin breaks the plain fish.
        assert!(Fish::find(&board, 2, false).is_none());

        let step = Fish::find(&board, 2, true).unwrap();
        let Step::Fish(ref fish) = step else {
            panic!("wrong variant: {step}");
        };
        assert_eq!(fish.digit, digit);
        assert_eq!(fish.fins, CellSet::single(Cell::new(3, 5)));
        assert_eq!(
            fish.eliminations,
            CellSet::from_iter([Cell::new(4, 4), Cell::new(5, 4)])
        );

        StepTester::new(board)
            .apply(&step)
            .assert_removed(Cell::new(4, 4), [digit])
            .assert_removed(Cell::new(5, 4), [digit]);
    }

    #[test]
    fn test_rejects_bad_sizes() {
        let board = Board::from_short(XWING_BOARD).unwrap();
        assert!(Fish::find(&board, 1, false).is_none());
        assert!(Fish::find(&board, 5, false).is_none());
    }
}
