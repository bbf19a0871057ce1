//! X-Chains and XY-Chains.

use std::fmt::{self, Display};

use sudostep_core::{Board, Cell, CellSet, Digit};

use crate::Step;

/// Longest chain worth trying on a single digit: every node must take part
/// in a strong link, which bounds the useful length.
const X_CHAIN_LENGTH_CAP: usize = 22;

/// Inclusive bounds on a chain's length (number of links).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    /// Shortest chain accepted.
    pub min: usize,
    /// Longest chain accepted.
    pub max: usize,
}

impl Default for LengthRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: usize::MAX,
        }
    }
}

impl LengthRange {
    /// Chains of at most `max` links.
    #[must_use]
    pub fn at_most(max: usize) -> Self {
        Self { min: 0, max }
    }

    /// Chains of at least `min` links.
    #[must_use]
    pub fn at_least(min: usize) -> Self {
        Self {
            min,
            max: usize::MAX,
        }
    }

    /// Chains of between `min` and `max` links.
    #[must_use]
    pub fn between(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// A single-digit alternating chain: strong and weak links alternating,
/// strong at both ends, odd length.
///
/// Whichever end is true, cells seeing both lose the digit. Length 3 is the
/// Turbot Fish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XChain {
    /// The chain digit.
    pub digit: Digit,
    /// The chain cells, endpoints first and last.
    pub cells: Vec<Cell>,
    /// The cells losing the digit.
    pub eliminations: CellSet,
}

impl XChain {
    /// Finds an X-Chain whose length falls inside `length`.
    ///
    /// Only cells participating in at least one strong link are searched.
    #[must_use]
    pub fn find(board: &Board, length: LengthRange) -> Option<Step> {
        let mut strong_patterns = [CellSet::EMPTY; 9];
        let mut max_pattern = 0;
        for digit in Digit::ALL {
            let pattern = strong_link_nodes(board.digit_pattern(digit));
            max_pattern = max_pattern.max(pattern.len());
            strong_patterns[digit.index()] = pattern;
        }
        let cap = length
            .max
            .min(X_CHAIN_LENGTH_CAP)
            .min(max_pattern.saturating_sub(1));
        if cap < 3 {
            return None;
        }
        let max = (cap - 1) / 2 * 2 + 1;
        let min = (length.min / 2 * 2 + 1).max(3);
        let mut len = min;
        while len <= max {
            for digit in Digit::ALL {
                let full = board.digit_pattern(digit);
                let mut finder = XChainFinder {
                    full,
                    links: strong_patterns[digit.index()],
                    length: len,
                    stack: Vec::with_capacity(len + 1),
                    not_in_chain: CellSet::EMPTY,
                };
                if let Some(found) = finder.try_find(digit) {
                    return Some(Step::XChain(found));
                }
            }
            len += 2;
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

impl Display for XChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cells.len() == 4 {
            write!(f, "Turbot Fish: {}, ", self.digit)?;
        } else {
            write!(f, "X-Chain (length {}): {}, ", self.cells.len() - 1, self.digit)?;
        }
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", if i % 2 == 1 { '=' } else { '-' })?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, " => {}!={}", self.eliminations, self.digit)
    }
}

/// Cells of `pattern` that take part in at least one strong link.
fn strong_link_nodes(pattern: CellSet) -> CellSet {
    let mut pattern = pattern;
    let mut nodes = CellSet::EMPTY;
    for cell in Cell::ALL {
        if !pattern.contains(cell) || nodes.contains(cell) {
            continue;
        }
        let peers = pattern & cell.peers();
        let mut linked = false;
        for other in peers {
            // Strongly linked: no third copy of the digit sees both.
            if (peers & other.peers()).is_empty() {
                nodes.insert(cell);
                nodes.insert(other);
                linked = true;
                break;
            }
        }
        if !linked {
            // Nothing strong starts here; drop the cell from the search.
            pattern.remove(cell);
        }
    }
    nodes
}

struct XChainEntry {
    cell: Cell,
    other_link: CellSet,
}

struct XChainFinder {
    full: CellSet,
    links: CellSet,
    length: usize,
    stack: Vec<XChainEntry>,
    not_in_chain: CellSet,
}

impl XChainFinder {
    fn try_find(&mut self, digit: Digit) -> Option<XChain> {
        for initiating in self.links {
            self.not_in_chain = self.links;
            self.not_in_chain.remove(initiating);
            self.stack.clear();
            self.stack.push(XChainEntry {
                cell: initiating,
                other_link: self.strong_links(initiating),
            });
            while !self.stack.is_empty() {
                let depth = self.stack.len();
                if depth == self.length + 1 {
                    let first = self.stack[0].cell;
                    let last = self.stack[depth - 1].cell;
                    let eliminations = first.peers() & last.peers() & self.full;
                    if !eliminations.is_empty() {
                        return Some(XChain {
                            digit,
                            cells: self.stack.iter().map(|e| e.cell).collect(),
                            eliminations,
                        });
                    }
                } else if let Some(next) = self.stack[depth - 1].other_link.pop_first() {
                    self.not_in_chain.remove(next);
                    // Odd positions extend over weak links, even over strong.
                    let other_link = if depth % 2 == 1 {
                        self.weak_links(next)
                    } else {
                        self.strong_links(next)
                    };
                    self.stack.push(XChainEntry {
                        cell: next,
                        other_link,
                    });
                    continue;
                }
                // Backtrack.
                if let Some(entry) = self.stack.pop() {
                    self.not_in_chain.insert(entry.cell);
                }
            }
        }
        None
    }

    fn weak_links(&self, cell: Cell) -> CellSet {
        self.not_in_chain & cell.peers()
    }

    fn strong_links(&self, cell: Cell) -> CellSet {
        let mut strong = CellSet::EMPTY;
        for other in self.weak_links(cell) {
            if (self.full & cell.peers() & other.peers()).is_empty() {
                strong.insert(other);
            }
        }
        strong
    }
}

/// A chain of bivalue cells over weak links, each step committing "the
/// other digit" of the next cell.
///
/// Both endpoints carry the eliminated digit, so it leaves their common
/// peers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XyChain {
    /// The eliminated digit, carried by both endpoints.
    pub digit: Digit,
    /// The chain cells in order.
    pub cells: Vec<Cell>,
    /// The cells losing the digit.
    pub eliminations: CellSet,
}

impl XyChain {
    /// Finds an XY-Chain whose length falls inside `length`.
    #[must_use]
    pub fn find(board: &Board, length: LengthRange) -> Option<Step> {
        let bivalue = board.cells_with_candidate_count(2);
        let min = length.min.max(2);
        let max = length.max.min(bivalue.len().saturating_sub(1));
        for len in min..=max {
            let mut finder = XyChainFinder {
                board,
                patterns: board.all_digit_patterns(),
                bivalue,
                length: len,
                stack: Vec::with_capacity(len + 1),
                not_in_chain: CellSet::EMPTY,
            };
            if let Some(found) = finder.try_find() {
                return Some(Step::XyChain(found));
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

impl Display for XyChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XY-Chain (length {}): {}-", self.cells.len() - 1, self.digit)?;
        for cell in &self.cells {
            write!(f, "{cell}-")?;
        }
        write!(f, "{} => {}!={}", self.digit, self.eliminations, self.digit)
    }
}

struct XyChainEntry {
    cell: Cell,
    digit: Digit,
    other_link: CellSet,
}

struct XyChainFinder<'a> {
    board: &'a Board,
    patterns: [CellSet; 9],
    bivalue: CellSet,
    length: usize,
    stack: Vec<XyChainEntry>,
    not_in_chain: CellSet,
}

impl XyChainFinder<'_> {
    fn try_find(&mut self) -> Option<XyChain> {
        for initiating in self.bivalue {
            let mask = self.board.candidates(initiating);
            for eliminated in mask {
                self.stack.clear();
                self.not_in_chain = self.bivalue;
                self.push(initiating, eliminated, eliminated);
                while !self.stack.is_empty() {
                    let depth = self.stack.len();
                    if depth == self.length + 1 {
                        let first = self.stack[0].cell;
                        let last = self.stack[depth - 1].cell;
                        let eliminations =
                            self.patterns[eliminated.index()] & first.peers() & last.peers();
                        if !eliminations.is_empty() {
                            return Some(XyChain {
                                digit: eliminated,
                                cells: self.stack.iter().map(|e| e.cell).collect(),
                                eliminations,
                            });
                        }
                    } else if let Some(next) = self.stack[depth - 1].other_link.pop_first() {
                        let prev_digit = self.stack[depth - 1].digit;
                        self.push(next, prev_digit, eliminated);
                        continue;
                    }
                    if let Some(entry) = self.stack.pop() {
                        self.not_in_chain.insert(entry.cell);
                    }
                }
            }
        }
        None
    }

    /// Pushes `cell` set to its non-`prev_digit` candidate and precomputes
    /// where the chain may extend.
    fn push(&mut self, cell: Cell, prev_digit: Digit, eliminated: Digit) {
        let set_mask = self.board.candidates(cell) ^ sudostep_core::DigitSet::single(prev_digit);
        let Some(set_digit) = set_mask.first() else {
            return;
        };
        let mut other_link = cell.peers() & self.not_in_chain & self.patterns[set_digit.index()];
        // The penultimate cell may not commit the eliminated digit, and the
        // last cell must.
        if self.stack.len() + 2 == self.length && set_digit != eliminated {
            other_link = other_link.difference(self.patterns[eliminated.index()]);
        }
        if self.stack.len() + 1 == self.length {
            other_link &= self.patterns[eliminated.index()];
        }
        self.not_in_chain.remove(cell);
        self.stack.push(XyChainEntry {
            cell,
            digit: set_digit,
            other_link,
        });
    }
}
