//! Almost-locked-set patterns: ALS-XZ and ALS-XY-Wing.

use std::fmt::{self, Display};

use sudostep_core::{Board, Cell, CellSet, Digit, DigitSet, House};

use crate::{Eliminations, Step};

use super::peers_of_all;

/// An almost-locked set: `k` unfilled cells of one house carrying `k+1`
/// candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Als {
    pub cells: CellSet,
    pub candidates: DigitSet,
}

/// Enumerates every ALS of the board, house by house.
///
/// Subset unions are built incrementally: the union for a cell mask is the
/// newest cell's mask or-ed with the union of the mask below it.
pub(crate) fn find_all_als(board: &Board) -> Vec<Als> {
    let mut result = Vec::new();
    let mut cache: Vec<DigitSet> = vec![DigitSet::EMPTY; 1 << 9];
    for house in House::ALL {
        let unfilled: Vec<Cell> = house
            .cells()
            .into_iter()
            .filter(|&cell| !board.is_filled(cell))
            .collect();
        cache[0] = DigitSet::EMPTY;
        for (i, &cell) in unfilled.iter().enumerate() {
            let msb = 1usize << i;
            let msb_candidates = board.candidates(cell);
            for mask in msb..(msb << 1) {
                let candidates = msb_candidates | cache[mask - msb];
                cache[mask] = candidates;
                if candidates.len() == mask.count_ones() as usize + 1 {
                    result.push(Als {
                        cells: cells_from_mask(&unfilled, mask),
                        candidates,
                    });
                }
            }
        }
    }
    result
}

fn cells_from_mask(cells: &[Cell], mask: usize) -> CellSet {
    let mut set = CellSet::EMPTY;
    for (i, &cell) in cells.iter().enumerate() {
        if mask & (1 << i) != 0 {
            set.insert(cell);
        }
    }
    set
}

/// Returns `digit` if it is a restricted common candidate of the two sets:
/// every cell of either set carrying it sees every such cell of the other.
fn is_restricted(patterns: &[CellSet; 9], first: &Als, second: &Als, digit: Digit) -> bool {
    let first_cells = first.cells & patterns[digit.index()];
    let second_cells = second.cells & patterns[digit.index()];
    peers_of_all(first_cells).is_superset(second_cells)
        && peers_of_all(second_cells).is_superset(first_cells)
}

/// Two ALSs joined by a restricted common candidate `x`: one of them locks,
/// so any other common candidate `z` leaves the cells seeing every
/// `z`-carrier of both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlsXz {
    /// The two almost-locked sets.
    pub als: [CellSet; 2],
    /// Their candidate sets.
    pub candidates: [DigitSet; 2],
    /// The restricted common candidate.
    pub rcc: Digit,
    /// The eliminations, per digit.
    pub eliminations: Eliminations,
}

impl AlsXz {
    /// Finds an ALS-XZ.
    #[must_use]
    pub fn find(board: &Board) -> Option<Step> {
        let patterns = board.all_digit_patterns();
        let als = find_all_als(board);
        for i in 0..als.len() {
            for j in (i + 1)..als.len() {
                // Two common candidates minimum: one restricted, one to
                // eliminate.
                let common = als[i].candidates & als[j].candidates;
                if common.len() < 2 {
                    continue;
                }
                let overlap = als[i].cells & als[j].cells;
                let overlap_candidates = board.candidates_in(overlap);
                let rcc_candidates = common.difference(overlap_candidates);
                if rcc_candidates.is_empty() {
                    continue;
                }
                for rcc in rcc_candidates {
                    if !is_restricted(&patterns, &als[i], &als[j], rcc) {
                        continue;
                    }
                    let both = als[i].cells | als[j].cells;
                    let mut eliminations = Eliminations::new();
                    for z in common ^ DigitSet::single(rcc) {
                        let carriers = both & patterns[z.index()];
                        eliminations.add(z, peers_of_all(carriers) & patterns[z.index()]);
                    }
                    if !eliminations.is_empty() {
                        return Some(Step::AlsXz(Self {
                            als: [als[i].cells, als[j].cells],
                            candidates: [als[i].candidates, als[j].candidates],
                            rcc,
                            eliminations,
                        }));
                    }
                }
            }
        }
        None
    }

    /// Applies the per-digit eliminations.
    pub fn apply_to(&self, board: &mut Board) {
        self.eliminations.apply_to(board);
    }
}

impl Display for AlsXz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ALS-XZ: {}={}, {}={}, RCC={} => {}",
            self.als[0],
            self.candidates[0],
            self.als[1],
            self.candidates[1],
            self.rcc,
            self.eliminations
        )
    }
}

/// Three ALSs: a pivot joined to two pincers through distinct restricted
/// common candidates `x` and `y`.
///
/// At least one pincer locks, so any candidate common to both pincers other
/// than `x`/`y` leaves the cells seeing every carrier in them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlsXyWing {
    /// The pincer, pivot, pincer sets, in that order.
    pub als: [CellSet; 3],
    /// The restricted common candidates pivot↔first and pivot↔second.
    pub rccs: [Digit; 2],
    /// The eliminations, per digit.
    pub eliminations: Eliminations,
}

impl AlsXyWing {
    /// Finds an ALS-XY-Wing.
    #[must_use]
    pub fn find(board: &Board) -> Option<Step> {
        let patterns = board.all_digit_patterns();
        let als = find_all_als(board);
        for (pivot_index, pivot) in als.iter().enumerate() {
            // Partners joined to the pivot by exactly one RCC.
            let mut partners: Vec<(usize, Digit)> = Vec::new();
            for (i, other) in als.iter().enumerate() {
                if i == pivot_index {
                    continue;
                }
                if let Some(rcc) = single_rcc(board, &patterns, pivot, other) {
                    partners.push((i, rcc));
                }
            }
            for (a, &(first, x)) in partners.iter().enumerate() {
                for &(second, y) in &partners[(a + 1)..] {
                    if x == y || !als[first].cells.is_disjoint(als[second].cells) {
                        continue;
                    }
                    let xy = DigitSet::from_iter([x, y]);
                    let common = (als[first].candidates & als[second].candidates).difference(xy);
                    let both = als[first].cells | als[second].cells;
                    let mut eliminations = Eliminations::new();
                    for z in common {
                        let carriers = both & patterns[z.index()];
                        eliminations.add(z, peers_of_all(carriers) & patterns[z.index()]);
                    }
                    if !eliminations.is_empty() {
                        return Some(Step::AlsXyWing(Self {
                            als: [als[first].cells, pivot.cells, als[second].cells],
                            rccs: [x, y],
                            eliminations,
                        }));
                    }
                }
            }
        }
        None
    }

    /// Applies the per-digit eliminations.
    pub fn apply_to(&self, board: &mut Board) {
        self.eliminations.apply_to(board);
    }
}

/// The single restricted common candidate between two ALSs, or `None` when
/// there is none or more than one.
fn single_rcc(board: &Board, patterns: &[CellSet; 9], first: &Als, second: &Als) -> Option<Digit> {
    let common = first.candidates & second.candidates;
    if common.is_empty() {
        return None;
    }
    let overlap_candidates = board.candidates_in(first.cells & second.cells);
    let mut found = None;
    for rcc in common.difference(overlap_candidates) {
        if is_restricted(patterns, first, second, rcc) {
            if found.is_some() {
                return None;
            }
            found = Some(rcc);
        }
    }
    found
}

impl Display for AlsXyWing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ALS-XY-Wing: {}-{}-{} via {},{} => {}",
            self.als[0], self.als[1], self.als[2], self.rccs[0], self.rccs[1], self.eliminations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StepTester;

    fn digits(values: &[u8]) -> DigitSet {
        values.iter().map(|&v| Digit::new(v - 1)).collect()
    }

    #[test]
    fn test_find_all_als_counts_simple_sets() {
        let mut board = Board::empty();
        board.retain(Cell::new(0, 0), digits(&[1, 2]));
        let als = find_all_als(&board);
        // The bivalue cell shows up as a one-cell ALS (once per house).
        let single = CellSet::single(Cell::new(0, 0));
        assert_eq!(als.iter().filter(|a| a.cells == single).count(), 3);
        for a in &als {
            assert_eq!(a.candidates.len(), a.cells.len() + 1);
        }
    }

    #[test]
    fn test_als_xz() {
        let mut board = Board::empty();
        // A = r1c1{1,2}; B = r1c5{2,3} + r1c6{1,3}. Both 1 and 2 are
        // restricted, so the first RCC eliminates the other digit along the
        // row.
        board.retain(Cell::new(0, 0), digits(&[1, 2]));
        board.retain(Cell::new(0, 4), digits(&[2, 3]));
        board.retain(Cell::new(0, 5), digits(&[1, 3]));

        let step = AlsXz::find(&board).unwrap();
        let Step::AlsXz(ref als) = step else {
            panic!("wrong variant: {step}");
        };
        assert_eq!(als.rcc, Digit::new(0));
        let eliminated = als.eliminations.of(Digit::new(1));
        assert!(eliminated.contains(Cell::new(0, 1)));
        assert!(!eliminated.contains(Cell::new(0, 4)));

        StepTester::new(board)
            .apply(&step)
            .assert_removed(Cell::new(0, 1), [Digit::new(1)]);
    }

    #[test]
    fn test_als_xy_wing() {
        let mut board = Board::empty();
        // Single-cell ALSs shaped like an XY-Wing: pivot r1c1{4,8} with
        // pincers r1c5{4,7} and r3c1{7,8} eliminate 7 from r3c5.
        board.retain(Cell::new(0, 0), digits(&[4, 8]));
        board.retain(Cell::new(0, 4), digits(&[4, 7]));
        board.retain(Cell::new(2, 0), digits(&[7, 8]));

        let step = AlsXyWing::find(&board).unwrap();
        StepTester::new(board).apply(&step).assert_progress();
    }

    #[test]
    fn test_no_als_pattern_on_empty_board() {
        assert!(AlsXz::find(&Board::empty()).is_none());
        assert!(AlsXyWing::find(&Board::empty()).is_none());
    }
}
