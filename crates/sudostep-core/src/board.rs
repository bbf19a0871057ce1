//! The board: 81 candidate masks plus a filled mask.

use std::fmt::{self, Display};

use rand::Rng;

use crate::{
    cell::{Cell, CellSet},
    digit::{Digit, DigitSet},
    house::{House, SpotSet},
};

/// Errors raised while parsing a textual board representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The text does not describe exactly 81 cells.
    #[display("board text describes {_0} cells, expected 81")]
    WrongLength(#[error(not(source))] usize),
    /// A character that is not a digit, `.`, or a parenthesis.
    #[display("unexpected character {_0:?} in board text")]
    UnexpectedChar(#[error(not(source))] char),
    /// A candidate list was opened but never closed.
    #[display("unmatched '(' in board text")]
    UnmatchedParenthesis,
    /// A candidate list `()` with no digits in it.
    #[display("empty candidate list in board text")]
    EmptyCandidateList,
}

/// A 9×9 Sudoku board.
///
/// Every cell carries a [`DigitSet`] candidate mask; the `filled` pattern
/// records which cells have been committed. For a filled cell the mask has
/// exactly one bit set and that bit is absent from every unfilled peer; for
/// an unfilled cell at least one bit is set on any consistent board.
///
/// Boards are value types: strategy finders take `&Board`, and only applying
/// a step (or one of the mutators below) changes a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [DigitSet; 81],
    filled: CellSet,
}

impl Board {
    /// Creates a board where every cell still carries all nine candidates.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
            filled: CellSet::EMPTY,
        }
    }

    /// The candidate mask of a cell.
    #[must_use]
    #[inline]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Returns `true` if the cell has been committed.
    #[must_use]
    #[inline]
    pub fn is_filled(&self, cell: Cell) -> bool {
        self.filled.contains(cell)
    }

    /// The set of committed cells.
    #[must_use]
    #[inline]
    pub fn filled(&self) -> CellSet {
        self.filled
    }

    /// The set of cells not yet committed.
    #[must_use]
    #[inline]
    pub fn unfilled(&self) -> CellSet {
        !self.filled
    }

    /// The unfilled cells still carrying `digit`, in a single pass.
    #[must_use]
    pub fn digit_pattern(&self, digit: Digit) -> CellSet {
        let mut pattern = CellSet::EMPTY;
        for cell in self.unfilled() {
            if self.cells[cell.index()].contains(digit) {
                pattern.insert(cell);
            }
        }
        pattern
    }

    /// [`digit_pattern`](Self::digit_pattern) for all nine digits at once.
    #[must_use]
    pub fn all_digit_patterns(&self) -> [CellSet; 9] {
        let mut patterns = [CellSet::EMPTY; 9];
        for cell in self.unfilled() {
            for digit in self.cells[cell.index()] {
                patterns[digit.index()].insert(cell);
            }
        }
        patterns
    }

    /// The unfilled cells whose candidate mask has exactly `n` digits.
    #[must_use]
    pub fn cells_with_candidate_count(&self, n: usize) -> CellSet {
        let mut pattern = CellSet::EMPTY;
        for cell in self.unfilled() {
            if self.cells[cell.index()].len() == n {
                pattern.insert(cell);
            }
        }
        pattern
    }

    /// The spots of `house` whose (unfilled) cells still carry `digit`.
    #[must_use]
    pub fn house_pattern(&self, house: House, digit: Digit) -> SpotSet {
        let mut spots = SpotSet::EMPTY;
        for (spot, cell) in (0u8..).zip(house.cells()) {
            if !self.is_filled(cell) && self.cells[cell.index()].contains(digit) {
                spots.insert(spot);
            }
        }
        spots
    }

    /// Per-row spot patterns for `digit`: bit `c` of entry `r` is set when
    /// the unfilled cell `(r, c)` still carries the digit.
    #[must_use]
    pub fn row_patterns(&self, digit: Digit) -> [SpotSet; 9] {
        let mut rows = [SpotSet::EMPTY; 9];
        for cell in self.digit_pattern(digit) {
            rows[cell.row() as usize].insert(cell.col());
        }
        rows
    }

    /// Per-column spot patterns for `digit`: bit `r` of entry `c`.
    #[must_use]
    pub fn col_patterns(&self, digit: Digit) -> [SpotSet; 9] {
        let mut cols = [SpotSet::EMPTY; 9];
        for cell in self.digit_pattern(digit) {
            cols[cell.col() as usize].insert(cell.row());
        }
        cols
    }

    /// Per-box spot patterns for `digit`: bit `s` (box spot) of entry `b`.
    #[must_use]
    pub fn box_patterns(&self, digit: Digit) -> [SpotSet; 9] {
        let mut boxes = [SpotSet::EMPTY; 9];
        for cell in self.digit_pattern(digit) {
            boxes[cell.box_index() as usize].insert(cell.box_spot());
        }
        boxes
    }

    /// The union of candidate masks over a set of cells.
    #[must_use]
    pub fn candidates_in(&self, cells: CellSet) -> DigitSet {
        let mut union = DigitSet::EMPTY;
        for cell in cells {
            union |= self.cells[cell.index()];
        }
        union
    }

    /// Commits `digit` at `cell`: the mask becomes a single bit, the cell is
    /// marked filled, and the digit is stripped from every unfilled peer.
    ///
    /// Idempotent.
    pub fn place(&mut self, cell: Cell, digit: Digit) {
        self.cells[cell.index()] = DigitSet::single(digit);
        self.filled.insert(cell);
        for peer in cell.peers().difference(self.filled) {
            self.cells[peer.index()].remove(digit);
        }
    }

    /// Removes `digit` from the candidates of `cell`.
    ///
    /// Returns `true` if the candidate was present.
    pub fn eliminate(&mut self, cell: Cell, digit: Digit) -> bool {
        self.cells[cell.index()].remove(digit)
    }

    /// Intersects the candidates of `cell` with `digits`.
    ///
    /// Returns `true` if any candidate was removed.
    pub fn retain(&mut self, cell: Cell, digits: DigitSet) -> bool {
        let old = self.cells[cell.index()];
        self.cells[cell.index()] &= digits;
        old != self.cells[cell.index()]
    }

    /// Clears a committed cell back to the full candidate mask.
    ///
    /// Used by the generator while thinning; the board's other candidate
    /// masks are left untouched (call [`prune_candidates`](Self::prune_candidates)
    /// once thinning is done).
    pub fn set_unknown(&mut self, cell: Cell) {
        self.cells[cell.index()] = DigitSet::FULL;
        self.filled.remove(cell);
    }

    /// Strips every committed digit from the candidate masks of its unfilled
    /// peers, without committing anything new.
    pub fn prune_candidates(&mut self) {
        for cell in self.filled {
            if let Some(digit) = self.cells[cell.index()].first() {
                for peer in cell.peers().difference(self.filled) {
                    self.cells[peer.index()].remove(digit);
                }
            }
        }
    }

    /// Repeatedly commits every unfilled cell whose mask has exactly one bit
    /// and strips that digit from its peers.
    ///
    /// Returns `false` when some peer's mask becomes empty: a contradiction,
    /// which is a normal negative signal during search, not an error.
    pub fn propagate_singles(&mut self) -> bool {
        loop {
            let mut progressed = false;
            for cell in Cell::ALL {
                if self.filled.contains(cell) || self.cells[cell.index()].len() != 1 {
                    continue;
                }
                progressed = true;
                self.filled.insert(cell);
                let Some(digit) = self.cells[cell.index()].first() else {
                    continue;
                };
                for peer in cell.peers().difference(self.filled) {
                    let mask = &mut self.cells[peer.index()];
                    mask.remove(digit);
                    if mask.is_empty() {
                        return false;
                    }
                }
            }
            if !progressed {
                return true;
            }
        }
    }

    /// Returns `true` if every cell is committed and every house contains
    /// each digit exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        if self.filled != CellSet::FULL {
            return false;
        }
        House::ALL.iter().all(|house| {
            let mut seen = DigitSet::EMPTY;
            for cell in house.cells() {
                let mask = self.cells[cell.index()];
                if mask.len() != 1 {
                    return false;
                }
                seen |= mask;
            }
            seen == DigitSet::FULL
        })
    }

    /// Brute-force solve with deterministic (lowest-bit-first) candidate
    /// order.
    ///
    /// Propagates singles, then recurses on the unfilled cell with the fewest
    /// candidates (tie-break: lowest index). Stops as soon as `max_solutions`
    /// solutions have been found and returns the number found; the board is
    /// left at the last solution reached (unchanged if none).
    pub fn brute_force(&mut self, max_solutions: usize) -> usize {
        self.brute_force_impl(max_solutions, &mut pick_lowest)
    }

    /// Brute-force solve with uniformly random candidate order.
    ///
    /// Identical search to [`brute_force`](Self::brute_force) except the
    /// candidate tried first in each cell is drawn from `rng`; the result is
    /// bit-for-bit reproducible for a fixed RNG state.
    pub fn brute_force_randomized<R: Rng + ?Sized>(
        &mut self,
        max_solutions: usize,
        rng: &mut R,
    ) -> usize {
        self.brute_force_impl(max_solutions, &mut |set| pick_random(set, rng))
    }

    /// Counts solutions up to `limit` without touching this board.
    #[must_use]
    pub fn solution_count(&self, limit: usize) -> usize {
        self.clone().brute_force(limit)
    }

    fn brute_force_impl(
        &mut self,
        max_solutions: usize,
        pick: &mut dyn FnMut(DigitSet) -> Digit,
    ) -> usize {
        if max_solutions == 0 {
            return 0;
        }
        // Re-derive every single from the masks so boards whose givens were
        // never propagated (e.g. mid-thinning) solve correctly.
        let mut start = self.clone();
        start.filled = CellSet::EMPTY;
        let mut search = BruteForce {
            max_solutions,
            found: 0,
            solution: None,
            pick,
        };
        search.recurse(start);
        if let Some(solution) = search.solution {
            *self = solution;
        }
        search.found
    }

    /// Fills a board completely at random, driven by `rng`.
    ///
    /// Sequential backtracking fill: cells are visited in index order, each
    /// takes a uniformly random digit among those not yet used by an earlier
    /// peer, and exhausted cells unwind to the previous choice point. The
    /// output is a valid fully-filled board and depends only on the RNG
    /// stream.
    pub fn random_filled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut chosen = [DigitSet::EMPTY; 81];
        let mut remaining = [DigitSet::EMPTY; 81];
        let mut cur = 0usize;
        while cur < 81 {
            #[expect(clippy::cast_possible_truncation)]
            let cell = Cell::from_index(cur as u8);
            let mut allowed = DigitSet::FULL;
            for peer in cell.peers() {
                if peer.index() < cur {
                    allowed = allowed.difference(chosen[peer.index()]);
                }
            }
            remaining[cur] = allowed;
            while remaining[cur].is_empty() {
                cur -= 1;
                remaining[cur] = remaining[cur].difference(chosen[cur]);
            }
            chosen[cur] = DigitSet::single(pick_random(remaining[cur], rng));
            cur += 1;
        }
        Self {
            cells: chosen,
            filled: CellSet::FULL,
        }
    }

    /// Parses the short representation: 81 characters, `'1'..'9'` for a
    /// given, `'.'` for an unknown cell.
    ///
    /// Givens are committed and pruned from their peers' candidate masks.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on wrong length or an unexpected character.
    pub fn from_short(s: &str) -> Result<Self, ParseError> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseError::WrongLength(len));
        }
        let mut board = Self::empty();
        for (cell, ch) in Cell::ALL.into_iter().zip(s.chars()) {
            match ch {
                '.' => {}
                '1'..='9' => {
                    let digit = Digit::new(ch as u8 - b'1');
                    board.cells[cell.index()] = DigitSet::single(digit);
                    board.filled.insert(cell);
                }
                other => return Err(ParseError::UnexpectedChar(other)),
            }
        }
        board.prune_candidates();
        Ok(board)
    }

    /// Emits the short representation. Only committed cells appear as
    /// digits; all candidate information is dropped.
    #[must_use]
    pub fn to_short(&self) -> String {
        Cell::ALL
            .iter()
            .map(|&cell| {
                if self.is_filled(cell) {
                    self.cells[cell.index()]
                        .first()
                        .map_or('.', |d| char::from(b'0' + d.value()))
                } else {
                    '.'
                }
            })
            .collect()
    }

    /// Parses the full representation: 81 cells, each either a digit
    /// (committed) or a parenthesised candidate list such as `(137)`.
    ///
    /// No pruning is performed; the masks are taken exactly as written, so
    /// `to_full` round-trips.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on wrong cell count, unexpected characters,
    /// an unterminated list, or an empty list.
    pub fn from_full(s: &str) -> Result<Self, ParseError> {
        let mut board = Self::empty();
        let mut chars = s.chars();
        let mut count = 0usize;
        while let Some(ch) = chars.next() {
            if count == 81 {
                return Err(ParseError::WrongLength(count + 1));
            }
            #[expect(clippy::cast_possible_truncation)]
            let cell = Cell::from_index(count as u8);
            match ch {
                '1'..='9' => {
                    board.cells[cell.index()] = DigitSet::single(Digit::new(ch as u8 - b'1'));
                    board.filled.insert(cell);
                }
                '(' => {
                    let mut set = DigitSet::EMPTY;
                    loop {
                        match chars.next() {
                            Some(')') => break,
                            Some(d @ '1'..='9') => {
                                set.insert(Digit::new(d as u8 - b'1'));
                            }
                            Some(other) => return Err(ParseError::UnexpectedChar(other)),
                            None => return Err(ParseError::UnmatchedParenthesis),
                        }
                    }
                    if set.is_empty() {
                        return Err(ParseError::EmptyCandidateList);
                    }
                    board.cells[cell.index()] = set;
                }
                other => return Err(ParseError::UnexpectedChar(other)),
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseError::WrongLength(count));
        }
        Ok(board)
    }

    /// Emits the full representation, candidates in ascending order.
    #[must_use]
    pub fn to_full(&self) -> String {
        let mut out = String::with_capacity(81 * 4);
        for cell in Cell::ALL {
            let mask = self.cells[cell.index()];
            if self.is_filled(cell) {
                if let Some(digit) = mask.first() {
                    out.push(char::from(b'0' + digit.value()));
                }
            } else {
                out.push('(');
                for digit in mask {
                    out.push(char::from(b'0' + digit.value()));
                }
                out.push(')');
            }
        }
        out
    }
}

impl Display for Board {
    /// Formats as the short representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_short())
    }
}

fn pick_lowest(set: DigitSet) -> Digit {
    // Callers guarantee a non-empty set.
    set.first().unwrap_or(Digit::new(0))
}

fn pick_random<R: Rng + ?Sized>(set: DigitSet, rng: &mut R) -> Digit {
    set.nth(rng.random_range(0..set.len()))
        .unwrap_or(Digit::new(0))
}

struct BruteForce<'a> {
    max_solutions: usize,
    found: usize,
    solution: Option<Board>,
    pick: &'a mut dyn FnMut(DigitSet) -> Digit,
}

impl BruteForce<'_> {
    fn recurse(&mut self, mut state: Board) {
        if !state.propagate_singles() {
            return;
        }
        if state.filled == CellSet::FULL {
            self.found += 1;
            self.solution = Some(state);
            return;
        }
        // MRV: the unfilled cell with the fewest candidates, lowest index on ties.
        let mut best = None;
        let mut best_len = 10;
        for cell in state.unfilled() {
            let len = state.cells[cell.index()].len();
            if len < best_len {
                best_len = len;
                best = Some(cell);
                if len == 2 {
                    break;
                }
            }
        }
        let Some(cell) = best else { return };
        let mut candidates = state.cells[cell.index()];
        while !candidates.is_empty() {
            let digit = (self.pick)(candidates);
            let mut next = state.clone();
            next.cells[cell.index()] = DigitSet::single(digit);
            self.recurse(next);
            if self.found >= self.max_solutions {
                return;
            }
            candidates.remove(digit);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    const PUZZLE: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    // An 81-cell mid-solve position captured from a real solve.
    const FULL_REPR: &str = "7(2359)(29)(125)68(13)(135)4(568)(245)(246)(1257)(145)39(1567)\
        (1578)(3568)1(46)(57)(45)92(3567)(3578)(15)(25)397684(12)478321596(19)6(129)4857(123)\
        (123)(139)(349)56(13)(27)(14)8(27)(136)(34)78(135)(24)(146)(125)928(146)(15)9(47)(1346)\
        (1357)(357)";

    #[test]
    fn test_short_round_trip() {
        let board = Board::from_short(PUZZLE).unwrap();
        assert_eq!(board.to_short(), PUZZLE);
        assert_eq!(board.to_string(), PUZZLE);
    }

    #[test]
    fn test_short_parse_marks_and_prunes_givens() {
        let board = Board::from_short(PUZZLE).unwrap();
        assert!(board.is_filled(Cell::new(0, 0)));
        assert_eq!(board.candidates(Cell::new(0, 0)).len(), 1);
        // 5 and 3 pruned from the rest of row 1.
        let mask = board.candidates(Cell::new(0, 2));
        assert!(!mask.contains(Digit::new(4)));
        assert!(!mask.contains(Digit::new(2)));
    }

    #[test]
    fn test_short_parse_errors() {
        assert_eq!(Board::from_short("123"), Err(ParseError::WrongLength(3)));
        let bad = format!("x{}", &PUZZLE[1..]);
        assert_eq!(
            Board::from_short(&bad),
            Err(ParseError::UnexpectedChar('x'))
        );
    }

    #[test]
    fn test_full_round_trip() {
        let board = Board::from_full(FULL_REPR).unwrap();
        assert_eq!(board.to_full(), FULL_REPR);
    }

    #[test]
    fn test_full_round_trip_of_parsed_short() {
        let board = Board::from_short(PUZZLE).unwrap();
        let reparsed = Board::from_full(&board.to_full()).unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn test_full_parse_errors() {
        assert_eq!(
            Board::from_full("(12"),
            Err(ParseError::UnmatchedParenthesis)
        );
        assert_eq!(
            Board::from_full("()"),
            Err(ParseError::EmptyCandidateList)
        );
        assert_eq!(Board::from_full("1"), Err(ParseError::WrongLength(1)));
        assert_eq!(
            Board::from_full("(1x)"),
            Err(ParseError::UnexpectedChar('x'))
        );
    }

    #[test]
    fn test_propagate_singles_solves_easy_puzzle() {
        // This one falls to naked singles alone.
        let mut board = Board::from_short(
            "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
        )
        .unwrap();
        assert!(board.propagate_singles());
        assert!(board.is_solved());
    }

    #[test]
    fn test_propagate_singles_detects_contradiction() {
        let mut board = Board::empty();
        // Two cells in one row forced to the same digit.
        board.cells[0] = DigitSet::single(Digit::new(0));
        board.cells[1] = DigitSet::single(Digit::new(0));
        assert!(!board.propagate_singles());
    }

    #[test]
    fn test_brute_force_unique_solution() {
        let mut board = Board::from_short(PUZZLE).unwrap();
        assert_eq!(board.brute_force(2), 1);
        assert!(board.is_solved());
        assert_eq!(board.to_short(), SOLUTION);
    }

    #[test]
    fn test_brute_force_counts_multiple_solutions() {
        let board = Board::empty();
        assert_eq!(board.solution_count(2), 2);
        assert_eq!(board.solution_count(5), 5);
    }

    #[test]
    fn test_brute_force_no_solution() {
        // Row 1 forces its last cell to 9, but 9 already sits below it.
        let text = format!("12345678.........9{}", ".".repeat(63));
        let mut board = Board::from_short(&text).unwrap();
        let count = board.brute_force(1);
        assert_eq!(count, 0);
        assert_eq!(board.to_short(), text);
    }

    #[test]
    fn test_brute_force_zero_limit() {
        let mut board = Board::from_short(PUZZLE).unwrap();
        assert_eq!(board.brute_force(0), 0);
        assert_eq!(board.to_short(), PUZZLE);
    }

    #[test]
    fn test_randomized_brute_force_matches_unique_solution() {
        let mut rng = Pcg64::seed_from_u64(7);
        let mut board = Board::from_short(PUZZLE).unwrap();
        assert_eq!(board.brute_force_randomized(2, &mut rng), 1);
        assert_eq!(board.to_short(), SOLUTION);
    }

    #[test]
    fn test_random_filled_is_valid() {
        let mut rng = Pcg64::seed_from_u64(42);
        let board = Board::random_filled(&mut rng);
        assert!(board.is_solved());
    }

    #[test]
    fn test_random_filled_is_deterministic() {
        let a = Board::random_filled(&mut Pcg64::seed_from_u64(123));
        let b = Board::random_filled(&mut Pcg64::seed_from_u64(123));
        assert_eq!(a, b);

        let c = Board::random_filled(&mut Pcg64::seed_from_u64(124));
        assert_ne!(a, c);
    }

    #[test]
    fn test_digit_pattern_and_counts() {
        let board = Board::from_short(PUZZLE).unwrap();
        let d5 = Digit::new(4);
        let pattern = board.digit_pattern(d5);
        // Patterns cover unfilled cells only.
        assert!(pattern.is_disjoint(board.filled()));
        let patterns = board.all_digit_patterns();
        assert_eq!(patterns[4], pattern);
        for cell in board.cells_with_candidate_count(2) {
            assert_eq!(board.candidates(cell).len(), 2);
        }
    }

    #[test]
    fn test_house_pattern() {
        let board = Board::from_short(PUZZLE).unwrap();
        for digit in Digit::ALL {
            for house in House::ALL {
                let spots = board.house_pattern(house, digit);
                for spot in spots {
                    let cell = house.cell_at(spot);
                    assert!(!board.is_filled(cell));
                    assert!(board.candidates(cell).contains(digit));
                }
            }
        }
    }

    #[test]
    fn test_place_strips_peers() {
        let mut board = Board::empty();
        let cell = Cell::new(4, 4);
        let digit = Digit::new(6);
        board.place(cell, digit);
        assert!(board.is_filled(cell));
        for peer in cell.peers() {
            assert!(!board.candidates(peer).contains(digit));
        }
        // Idempotent.
        let snapshot = board.clone();
        board.place(cell, digit);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_set_unknown_and_prune() {
        let mut board = Board::from_short(PUZZLE).unwrap();
        let cell = Cell::new(0, 0);
        board.set_unknown(cell);
        assert!(!board.is_filled(cell));
        assert_eq!(board.candidates(cell), DigitSet::FULL);
        board.prune_candidates();
        // 6 given at r2c1 limits r1c1 again.
        assert!(!board.candidates(cell).contains(Digit::new(5)));
    }

    mod property_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(16))]

            #[test]
            fn random_filled_boards_are_valid(seed: u64) {
                let board = Board::random_filled(&mut Pcg64::seed_from_u64(seed));
                prop_assert!(board.is_solved());
            }

            #[test]
            fn full_representation_round_trips(seed: u64) {
                let mut board = Board::random_filled(&mut Pcg64::seed_from_u64(seed));
                // Punch a few holes so both cell shapes appear.
                for i in 0..20u8 {
                    board.set_unknown(Cell::from_index(i * 4));
                }
                board.prune_candidates();
                let text = board.to_full();
                prop_assert_eq!(Board::from_full(&text).unwrap().to_full(), text);
            }
        }
    }
}
