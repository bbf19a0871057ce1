//! Box-line intersections (pointing and claiming).

use std::fmt::{self, Display};

use sudostep_core::{Board, Digit, House, SpotSet};

use crate::Step;

/// All of a digit's positions in the base house lie inside a box-line
/// intersection, so the digit leaves the rest of the cover house.
///
/// Base box / cover line is the pointing form; base line / cover box is the
/// claiming form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection {
    /// The house whose digit positions are confined.
    pub base: House,
    /// The house losing the digit outside the intersection.
    pub cover: House,
    /// The digit being confined.
    pub digit: Digit,
    /// The digit's spots within the base house.
    pub base_spots: SpotSet,
    /// The cover-house spots that lose the digit.
    pub cover_eliminations: SpotSet,
}

impl Intersection {
    /// Finds a pointing or claiming intersection.
    #[must_use]
    pub fn find(board: &Board) -> Option<Step> {
        for digit in Digit::ALL {
            let rows = board.row_patterns(digit);
            let cols = board.col_patterns(digit);
            let boxes = board.box_patterns(digit);
            for b in 0..9u8 {
                let box_pattern = boxes[b as usize];
                if box_pattern.is_empty() {
                    continue;
                }
                let box_row = b / 3;
                let box_col = b % 3;
                // Rows crossing this box.
                for r in 0..3u8 {
                    let row = box_row * 3 + r;
                    let row_pattern = rows[row as usize];
                    if row_pattern.is_empty() {
                        continue;
                    }
                    let box_part = SpotSet::band(r);
                    let row_part = SpotSet::band(box_col);
                    let box_is_base = box_pattern.is_subset(box_part);
                    let row_is_base = row_pattern.is_subset(row_part);
                    if box_is_base != row_is_base {
                        let found = if box_is_base {
                            Self {
                                base: House::block(b),
                                cover: House::row(row),
                                digit,
                                base_spots: box_pattern,
                                cover_eliminations: row_pattern.difference(row_part),
                            }
                        } else {
                            Self {
                                base: House::row(row),
                                cover: House::block(b),
                                digit,
                                base_spots: row_pattern,
                                cover_eliminations: box_pattern.difference(box_part),
                            }
                        };
                        return Some(Step::Intersection(found));
                    }
                }
                // Columns crossing this box.
                for c in 0..3u8 {
                    let col = box_col * 3 + c;
                    let col_pattern = cols[col as usize];
                    if col_pattern.is_empty() {
                        continue;
                    }
                    let box_part = SpotSet::box_column(c);
                    let col_part = SpotSet::band(box_row);
                    let box_is_base = box_pattern.is_subset(box_part);
                    let col_is_base = col_pattern.is_subset(col_part);
                    if box_is_base != col_is_base {
                        let found = if box_is_base {
                            Self {
                                base: House::block(b),
                                cover: House::column(col),
                                digit,
                                base_spots: box_pattern,
                                cover_eliminations: col_pattern.difference(col_part),
                            }
                        } else {
                            Self {
                                base: House::column(col),
                                cover: House::block(b),
                                digit,
                                base_spots: col_pattern,
                                cover_eliminations: box_pattern.difference(box_part),
                            }
                        };
                        return Some(Step::Intersection(found));
                    }
                }
            }
        }
        None
    }

    /// Removes the digit from the cover house outside the intersection.
    pub fn apply_to(&self, board: &mut Board) {
        for spot in self.cover_eliminations {
            board.eliminate(self.cover.cell_at(spot), self.digit);
        }
    }
}

impl Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Intersection: {}->{}, {}={}",
            self.base,
            self.cover,
            self.base.cells_in(self.base_spots),
            self.digit
        )
    }
}
