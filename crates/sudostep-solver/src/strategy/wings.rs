//! XY-Wing, XYZ-Wing, and W-Wing.

use std::fmt::{self, Display};

use sudostep_core::{Board, Cell, CellSet, Digit};

use crate::Step;

/// A bivalue pivot `{x,y}` with bivalue pincers `{x,z}` and `{y,z}`.
///
/// One of the pincers holds `z`, so `z` leaves every cell seeing both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XyWing {
    /// The pivot cell.
    pub pivot: Cell,
    /// The two pincer cells.
    pub pincers: [Cell; 2],
    /// The digit being eliminated.
    pub digit: Digit,
    /// The cells losing the digit.
    pub eliminations: CellSet,
}

impl XyWing {
    /// Finds an XY-Wing.
    #[must_use]
    pub fn find(board: &Board) -> Option<Step> {
        let patterns = board.all_digit_patterns();
        let bivalue = board.cells_with_candidate_count(2);
        for pivot in bivalue {
            let bivalue_peers = pivot.peers() & bivalue;
            if bivalue_peers.len() < 2 {
                continue;
            }
            let mask = board.candidates(pivot);
            let mut digits = mask.iter();
            let (Some(x), Some(y)) = (digits.next(), digits.next()) else {
                continue;
            };
            let not_xy = !mask;
            // z must differ from both pivot digits.
            let xz_pattern = bivalue_peers & patterns[x.index()].difference(patterns[y.index()]);
            let yz_pattern = bivalue_peers & patterns[y.index()].difference(patterns[x.index()]);
            for first in xz_pattern {
                let z_mask = board.candidates(first) & not_xy;
                let Some(z) = z_mask.first() else { continue };
                for second in yz_pattern {
                    if board.candidates(second) & not_xy != z_mask {
                        continue;
                    }
                    let eliminations = first.peers() & second.peers() & patterns[z.index()];
                    if !eliminations.is_empty() {
                        return Some(Step::XyWing(Self {
                            pivot,
                            pincers: [first, second],
                            digit: z,
                            eliminations,
                        }));
                    }
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

impl Display for XyWing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "XY-Wing: {}->{},{}, {}!={}",
            self.pivot, self.pincers[0], self.pincers[1], self.eliminations, self.digit
        )
    }
}

/// A trivalue pivot `{x,y,z}` with bivalue pincers `{x,z}` and `{y,z}`.
///
/// `z` leaves every cell seeing all three of pivot and pincers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XyzWing {
    /// The pivot cell.
    pub pivot: Cell,
    /// The two pincer cells.
    pub pincers: [Cell; 2],
    /// The digit being eliminated.
    pub digit: Digit,
    /// The cells losing the digit.
    pub eliminations: CellSet,
}

impl XyzWing {
    /// Finds an XYZ-Wing.
    #[must_use]
    pub fn find(board: &Board) -> Option<Step> {
        let patterns = board.all_digit_patterns();
        let bivalue = board.cells_with_candidate_count(2);
        let trivalue = board.cells_with_candidate_count(3);
        for pivot in trivalue {
            let bivalue_peers = pivot.peers() & bivalue;
            if bivalue_peers.len() < 2 {
                continue;
            }
            let xyz_mask = board.candidates(pivot);
            for first in bivalue_peers {
                let xz_mask = board.candidates(first);
                if !xz_mask.is_subset(xyz_mask) {
                    continue;
                }
                let y_mask = xyz_mask.difference(xz_mask);
                let Some(y) = y_mask.first() else { continue };
                for second in bivalue_peers & patterns[y.index()] {
                    let yz_mask = board.candidates(second);
                    if !yz_mask.is_subset(xyz_mask) {
                        continue;
                    }
                    let z_mask = xz_mask & yz_mask;
                    let Some(z) = z_mask.first() else { continue };
                    let eliminations =
                        first.peers() & second.peers() & pivot.peers() & patterns[z.index()];
                    if !eliminations.is_empty() {
                        return Some(Step::XyzWing(Self {
                            pivot,
                            pincers: [first, second],
                            digit: z,
                            eliminations,
                        }));
                    }
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

impl Display for XyzWing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "XYZ-Wing: {}->{},{}, {}!={}",
            self.pivot, self.pincers[0], self.pincers[1], self.eliminations, self.digit
        )
    }
}

/// Two identical bivalue cells `{x,y}` that do not see each other, joined
/// through a strong link on `y` between cells seeing one end each.
///
/// Whichever end is not `y` must be `x`, so `x` leaves the common peers of
/// the two ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WWing {
    /// The two bivalue end cells.
    pub ends: [Cell; 2],
    /// The strongly linked cells, seeing `ends[0]` and `ends[1]` in order.
    pub link: [Cell; 2],
    /// The strongly linked digit.
    pub link_digit: Digit,
    /// The digit being eliminated.
    pub digit: Digit,
    /// The cells losing the digit.
    pub eliminations: CellSet,
}

impl WWing {
    /// Finds a W-Wing.
    #[must_use]
    pub fn find(board: &Board) -> Option<Step> {
        let patterns = board.all_digit_patterns();
        let bivalue = board.cells_with_candidate_count(2);
        for first_end in bivalue {
            let mask = board.candidates(first_end);
            let mut digits = mask.iter();
            let (Some(a), Some(b)) = (digits.next(), digits.next()) else {
                continue;
            };
            // The other end carries the same pair and must not see this one
            // (that would just be a naked pair).
            let mut second_ends = bivalue
                & patterns[a.index()]
                & patterns[b.index()].difference(first_end.peers());
            second_ends.remove(first_end);
            for second_end in second_ends {
                let common_peers = first_end.peers() & second_end.peers();
                for eliminated in [a, b] {
                    let eliminations = common_peers & patterns[eliminated.index()];
                    if eliminations.is_empty() {
                        continue;
                    }
                    let linked = if eliminated == a { b } else { a };
                    let linked_pattern = patterns[linked.index()];
                    for first_link in first_end.peers() & linked_pattern {
                        for second_link in second_end.peers() & linked_pattern {
                            // The link cells must see each other, with no
                            // third copy of the linked digit watching both.
                            if !first_link.sees(second_link)
                                || !(first_link.peers() & second_link.peers() & linked_pattern)
                                    .is_empty()
                            {
                                continue;
                            }
                            return Some(Step::WWing(Self {
                                ends: [first_end, second_end],
                                link: [first_link, second_link],
                                link_digit: linked,
                                digit: eliminated,
                                eliminations,
                            }));
                        }
                    }
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

impl Display for WWing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "W-Wing: linked by {}, {}-{}={}-{}, {}!={}",
            self.link_digit,
            self.ends[0],
            self.link[0],
            self.link[1],
            self.ends[1],
            self.eliminations,
            self.digit
        )
    }
}
