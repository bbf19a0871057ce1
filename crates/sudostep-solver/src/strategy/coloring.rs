//! Remote pairs and simple colours.

use std::fmt::{self, Display};

use sudostep_core::{Board, Cell, CellSet, Digit, DigitSet};

use crate::Step;

use super::peers_of_any;

/// A two-colourable component of identical bivalue cells.
///
/// The component alternates its pair along peer links, so any outside cell
/// seeing both colours loses both digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePair {
    /// The shared candidate pair.
    pub digits: DigitSet,
    /// The two colour groups.
    pub groups: [CellSet; 2],
    /// The cells losing the pair.
    pub eliminations: CellSet,
}

impl RemotePair {
    /// Finds a remote pair.
    #[must_use]
    pub fn find(board: &Board) -> Option<Step> {
        let patterns = board.all_digit_patterns();
        let mut uncolored = board.cells_with_candidate_count(2);
        while let Some(initiating) = uncolored.first() {
            let pair = board.candidates(initiating);
            let mut digits = pair.iter();
            let (Some(x), Some(y)) = (digits.next(), digits.next()) else {
                break;
            };
            let mut pool = uncolored & patterns[x.index()] & patterns[y.index()];
            let mut colors = [CellSet::EMPTY; 2];
            let mut prev = CellSet::single(initiating);
            let mut color = 0;
            while !prev.is_empty() {
                colors[color] |= prev;
                pool = pool.difference(prev);
                color = 1 - color;
                let mut current = CellSet::EMPTY;
                for cell in prev {
                    current |= pool & cell.peers();
                }
                prev = current;
            }

            let eliminations = peers_of_any(colors[0])
                & peers_of_any(colors[1])
                & (patterns[x.index()] | patterns[y.index()]);
            if !eliminations.is_empty() {
                return Some(Step::RemotePair(Self {
                    digits: pair,
                    groups: colors,
                    eliminations,
                }));
            }

            uncolored = uncolored.difference(colors[0] | colors[1]);
        }
        None
    }

    /// Removes both pair digits from the eliminated cells.
    pub fn apply_to(&self, board: &mut Board) {
        for cell in self.eliminations {
            for digit in self.digits {
                board.eliminate(cell, digit);
            }
        }
    }
}

impl Display for RemotePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Remote Pair: 1st group {}, 2nd group {}, {}!={}",
            self.groups[0], self.groups[1], self.eliminations, self.digits
        )
    }
}

/// Two-colouring of a digit's strong-link graph.
///
/// *Trap*: a cell seeing both colours loses the digit. *Wrap*: a colour
/// seeing itself is false wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleColors {
    /// The coloured digit.
    pub digit: Digit,
    /// The colour groups; for a wrap, `colors[1]` is the false colour.
    pub colors: [CellSet; 2],
    /// For a wrap, the weakly linked same-colour pair that proves it.
    pub eliminating_pair: Option<(Cell, Cell)>,
    /// The cells losing the digit.
    pub eliminations: CellSet,
}

impl SimpleColors {
    /// Finds a simple-colour trap or wrap.
    #[must_use]
    pub fn find(board: &Board) -> Option<Step> {
        for digit in Digit::ALL {
            let pattern = board.digit_pattern(digit);
            if pattern.is_empty() {
                continue;
            }
            let mut uncolored = pattern;
            while let Some(initiating) = uncolored.first() {
                let mut colors = [CellSet::EMPTY; 2];
                let mut prev = CellSet::single(initiating);
                let mut color = 0;
                while !prev.is_empty() {
                    colors[color] |= prev;
                    uncolored = uncolored.difference(prev);
                    color = 1 - color;
                    let mut current = CellSet::EMPTY;
                    for cell in prev {
                        for peer in uncolored & cell.peers() {
                            // Strong link: no third copy of the digit sees both.
                            if (cell.peers() & peer.peers() & pattern).is_empty() {
                                current.insert(peer);
                            }
                        }
                    }
                    prev = current;
                }
                let color_peers = [peers_of_any(colors[0]), peers_of_any(colors[1])];

                // Wrap: a colour weakly linked to itself is all false.
                for i in 0..2 {
                    let weak_links = color_peers[i] & colors[i];
                    if let Some(first) = weak_links.first() {
                        let second = (first.peers() & weak_links).first()?;
                        return Some(Step::SimpleColors(Self {
                            digit,
                            colors: [colors[1 - i], colors[i]],
                            eliminating_pair: Some((first, second)),
                            eliminations: colors[i],
                        }));
                    }
                }

                // Trap: outside cells seeing both colours.
                let eliminations = color_peers[0] & color_peers[1] & pattern;
                if !eliminations.is_empty() {
                    return Some(Step::SimpleColors(Self {
                        digit,
                        colors,
                        eliminating_pair: None,
                        eliminations,
                    }));
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

impl Display for SimpleColors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.eliminating_pair {
            None => write!(
                f,
                "Simple Color Trap: {}, 1st color {}, 2nd color {}, {}!={}",
                self.digit, self.colors[0], self.colors[1], self.eliminations, self.digit
            ),
            Some((first, second)) => write!(
                f,
                "Simple Color Wrap: {}, remaining color {}, {}!={} due to {}-{}",
                self.digit, self.colors[0], self.eliminations, self.digit, first, second
            ),
        }
    }
}
