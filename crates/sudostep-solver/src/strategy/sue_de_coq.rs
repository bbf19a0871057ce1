//! Sue-de-Coq (two-sector disjoint subsets), basic and extended.

use std::fmt::{self, Display};

use sudostep_core::{Board, Cell, CellSet, DigitSet, LINE_BOX_INTERSECTIONS};

use crate::Step;

/// A Sue-de-Coq: intersection cells holding `|C|+extras` candidates, split
/// between a line set and a box set that cannot both miss.
///
/// The basic form uses one bivalue cell on each side; the extended form
/// uses almost-locked sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SueDeCoq {
    /// The chosen unfilled cells of the line∩box intersection.
    pub intersection_cells: CellSet,
    /// The line-side set.
    pub line_cells: CellSet,
    /// The box-side set.
    pub box_cells: CellSet,
    /// Candidates of the intersection cells.
    pub intersection_candidates: DigitSet,
    /// Candidates of the line-side set.
    pub line_candidates: DigitSet,
    /// Candidates of the box-side set.
    pub box_candidates: DigitSet,
    /// Line cells losing candidates.
    pub line_eliminations: CellSet,
    /// Box cells losing candidates.
    pub box_eliminations: CellSet,
}

impl SueDeCoq {
    /// The candidates stripped from the rest of the line.
    #[must_use]
    pub fn line_eliminated_candidates(&self) -> DigitSet {
        self.line_candidates
            | self
                .intersection_candidates
                .difference(self.box_candidates)
    }

    /// The candidates stripped from the rest of the box.
    #[must_use]
    pub fn box_eliminated_candidates(&self) -> DigitSet {
        self.box_candidates
            | self
                .intersection_candidates
                .difference(self.line_candidates)
    }

    /// Finds a Sue-de-Coq.
    ///
    /// The basic form restricts the side sets to single bivalue cells and
    /// the intersection to exactly two extra candidates; the extended form
    /// allows almost-locked sets on both sides.
    #[must_use]
    pub fn find(board: &Board, extended: bool) -> Option<Step> {
        for inter in LINE_BOX_INTERSECTIONS {
            let unfilled = inter.cells() & board.unfilled();
            let n = unfilled.len();
            if n < 2 {
                continue;
            }
            let cells: Vec<Cell> = unfilled.iter().collect();
            for common_mask in 3u32..(1 << n) {
                let size = common_mask.count_ones() as usize;
                if size < 2 {
                    continue;
                }
                let common_cells = cells_from_mask(&cells, common_mask);
                let common_candidates = board.candidates_in(common_cells);
                // The intersection cells must form at least an AALS; the
                // basic form allows at most one.
                let extras = common_candidates.len().saturating_sub(size);
                if extras < 2 || (!extended && extras != 2) {
                    continue;
                }
                let remain = board.unfilled().difference(common_cells);
                let line_remain = inter.line.cell_set() & remain;
                let box_remain = inter.block.cell_set() & remain;
                let found = if extended {
                    find_als_sides(
                        board,
                        common_cells,
                        common_candidates,
                        extras,
                        line_remain,
                        box_remain,
                    )
                } else {
                    find_bivalue_sides(
                        board,
                        common_cells,
                        common_candidates,
                        line_remain,
                        box_remain,
                    )
                };
                if let Some(step) = found {
                    return Some(Step::SueDeCoq(step));
                }
            }
        }
        None
    }

    /// Strips the eliminated candidate sets from the line and box cells.
    pub fn apply_to(&self, board: &mut Board) {
        let line_gone = !self.line_eliminated_candidates();
        let box_gone = !self.box_eliminated_candidates();
        for cell in self.line_eliminations {
            board.retain(cell, line_gone);
        }
        for cell in self.box_eliminations {
            board.retain(cell, box_gone);
        }
    }
}

impl Display for SueDeCoq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sue de Coq: {}={}, {}={}, {}={} =>",
            self.intersection_cells,
            self.intersection_candidates,
            self.line_cells,
            self.line_candidates,
            self.box_cells,
            self.box_candidates
        )?;
        let mut first = true;
        if !self.line_eliminations.is_empty() {
            write!(
                f,
                " {}!={}",
                self.line_eliminations,
                self.line_eliminated_candidates()
            )?;
            first = false;
        }
        if !self.box_eliminations.is_empty() {
            if !first {
                write!(f, ",")?;
            }
            write!(
                f,
                " {}!={}",
                self.box_eliminations,
                self.box_eliminated_candidates()
            )?;
        }
        Ok(())
    }
}

fn cells_from_mask(cells: &[Cell], mask: u32) -> CellSet {
    let mut set = CellSet::EMPTY;
    for (i, &cell) in cells.iter().enumerate() {
        if mask & (1 << i) != 0 {
            set.insert(cell);
        }
    }
    set
}

/// The subset of `unfiltered` whose masks intersect `candidates`.
fn cells_losing(board: &Board, unfiltered: CellSet, candidates: DigitSet) -> CellSet {
    let mut losing = unfiltered;
    for cell in unfiltered {
        if board.candidates(cell).is_disjoint(candidates) {
            losing.remove(cell);
        }
    }
    losing
}

fn find_bivalue_sides(
    board: &Board,
    common_cells: CellSet,
    common_candidates: DigitSet,
    line_remain: CellSet,
    box_remain: CellSet,
) -> Option<SueDeCoq> {
    for line_cell in line_remain {
        let line_candidates = board.candidates(line_cell);
        if !line_candidates.is_subset(common_candidates) || line_candidates.len() != 2 {
            continue;
        }
        for box_cell in box_remain {
            let box_candidates = board.candidates(box_cell);
            if !line_candidates.is_disjoint(box_candidates)
                || !box_candidates.is_subset(common_candidates)
                || box_candidates.len() != 2
            {
                continue;
            }
            let step = SueDeCoq {
                intersection_cells: common_cells,
                line_cells: CellSet::single(line_cell),
                box_cells: CellSet::single(box_cell),
                intersection_candidates: common_candidates,
                line_candidates,
                box_candidates,
                line_eliminations: CellSet::EMPTY,
                box_eliminations: CellSet::EMPTY,
            };
            let mut line_targets = line_remain;
            line_targets.remove(line_cell);
            let mut box_targets = box_remain;
            box_targets.remove(box_cell);
            let line_eliminations =
                cells_losing(board, line_targets, step.line_eliminated_candidates());
            let box_eliminations =
                cells_losing(board, box_targets, step.box_eliminated_candidates());
            if !line_eliminations.is_empty() || !box_eliminations.is_empty() {
                return Some(SueDeCoq {
                    line_eliminations,
                    box_eliminations,
                    ..step
                });
            }
        }
    }
    None
}

/// Almost-locked subsets of `cells` whose candidates overlap the
/// intersection candidates by 2..=`extras` digits.
fn als_candidates_of(
    board: &Board,
    cells: &[Cell],
    common_candidates: DigitSet,
    extras: usize,
) -> Vec<(CellSet, DigitSet)> {
    let mut result = Vec::new();
    for mask in 1u32..(1 << cells.len()) {
        let mut candidates = DigitSet::EMPTY;
        for (i, &cell) in cells.iter().enumerate() {
            if mask & (1 << i) != 0 {
                candidates |= board.candidates(cell);
            }
        }
        if candidates.len() != mask.count_ones() as usize + 1 {
            continue;
        }
        let overlap = candidates & common_candidates;
        if overlap.len() < 2 || overlap.len() > extras {
            continue;
        }
        result.push((cells_from_mask(cells, mask), candidates));
    }
    result
}

fn find_als_sides(
    board: &Board,
    common_cells: CellSet,
    common_candidates: DigitSet,
    extras: usize,
    line_remain: CellSet,
    box_remain: CellSet,
) -> Option<SueDeCoq> {
    let line_cells: Vec<Cell> = line_remain.iter().collect();
    let box_cells: Vec<Cell> = box_remain.iter().collect();
    let line_sets = als_candidates_of(board, &line_cells, common_candidates, extras);
    let box_sets = als_candidates_of(board, &box_cells, common_candidates, extras);
    for &(line_set, line_candidates) in &line_sets {
        for &(box_set, box_candidates) in &box_sets {
            // No intersection candidate may appear on both sides.
            if !(line_candidates & box_candidates & common_candidates).is_empty() {
                continue;
            }
            let in_common = (line_candidates & common_candidates).len()
                + (box_candidates & common_candidates).len();
            if in_common != extras + 2 {
                continue;
            }
            let step = SueDeCoq {
                intersection_cells: common_cells,
                line_cells: line_set,
                box_cells: box_set,
                intersection_candidates: common_candidates,
                line_candidates,
                box_candidates,
                line_eliminations: CellSet::EMPTY,
                box_eliminations: CellSet::EMPTY,
            };
            let line_eliminations = cells_losing(
                board,
                line_remain.difference(line_set),
                step.line_eliminated_candidates(),
            );
            let box_eliminations = cells_losing(
                board,
                box_remain.difference(box_set),
                step.box_eliminated_candidates(),
            );
            if !line_eliminations.is_empty() || !box_eliminations.is_empty() {
                return Some(SueDeCoq {
                    line_eliminations,
                    box_eliminations,
                    ..step
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use sudostep_core::Digit;

    use super::*;
    use crate::testing::StepTester;

    fn digits(values: &[u8]) -> DigitSet {
        values.iter().map(|&v| Digit::new(v - 1)).collect()
    }

    fn sdc_board() -> Board {
        let mut board = Board::empty();
        // Intersection cells r1c1, r1c2 hold {1,2,3,4}; the line set r1c6
        // is {1,2} and the box set r2c2 is {3,4}.
        board.retain(Cell::new(0, 0), digits(&[1, 2, 3]));
        board.retain(Cell::new(0, 1), digits(&[2, 3, 4]));
        board.retain(Cell::new(0, 5), digits(&[1, 2]));
        board.retain(Cell::new(1, 1), digits(&[3, 4]));
        board
    }

    #[test]
    fn test_basic_sue_de_coq() {
        let board = sdc_board();
        let step = SueDeCoq::find(&board, false).unwrap();
        let Step::SueDeCoq(ref sdc) = step else {
            panic!("wrong variant: {step}");
        };
        assert_eq!(
            sdc.intersection_cells,
            CellSet::from_iter([Cell::new(0, 0), Cell::new(0, 1)])
        );
        assert_eq!(sdc.line_cells, CellSet::single(Cell::new(0, 5)));
        assert_eq!(sdc.box_cells, CellSet::single(Cell::new(1, 1)));
        assert_eq!(sdc.line_eliminated_candidates(), digits(&[1, 2]));
        assert_eq!(sdc.box_eliminated_candidates(), digits(&[3, 4]));

        StepTester::new(board)
            .apply(&step)
            // Rest of the line loses {1,2}.
            .assert_removed(Cell::new(0, 7), [Digit::new(0), Digit::new(1)])
            // Rest of the box loses {3,4}.
            .assert_removed(Cell::new(2, 2), [Digit::new(2), Digit::new(3)])
            // The leftover intersection cell is in both sectors.
            .assert_removed(Cell::new(0, 2), (0..4).map(Digit::new));
    }

    #[test]
    fn test_extended_covers_bivalue_form() {
        let board = sdc_board();
        let step = SueDeCoq::find(&board, true).unwrap();
        StepTester::new(board).apply(&step).assert_progress();
    }

    #[test]
    fn test_no_sue_de_coq_on_empty_board() {
        assert!(SueDeCoq::find(&Board::empty(), false).is_none());
        assert!(SueDeCoq::find(&Board::empty(), true).is_none());
    }
}
