//! The general grouped alternating-inference-chain engine.
//!
//! Nodes are `(cell, candidate)` or `(line∩box cell group, candidate)`
//! statements with a polarity; weak links join statements that cannot both
//! hold, strong links additionally cannot both fail. The engine enumerates
//! every node and length-1 link, then extends paths breadth-first, one
//! length at a time, until a path closes on the complementary polarity of
//! its own start.

use std::collections::HashMap;
use std::fmt::{self, Display};

use sudostep_core::{
    Board, Cell, CellSet, Digit, DigitSet, House, LINE_BOX_INTERSECTIONS, SpotSet,
};

use crate::{Eliminations, Step};

/// One statement in a reported chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AicNode {
    /// The cell (or cell group) the statement is about.
    pub cells: CellSet,
    /// The candidate the statement is about.
    pub digit: Digit,
    /// `true` for "the candidate is placed here".
    pub set: bool,
}

/// A closed alternating inference structure and its consequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aic {
    /// The chain statements in order.
    pub nodes: Vec<AicNode>,
    /// The eliminations, per digit.
    pub eliminations: Eliminations,
    /// For a single-cell verity, the digit it commits.
    pub assignment: Option<(Cell, Digit)>,
    /// `true` for a continuous nice loop.
    pub continuous: bool,
}

impl Aic {
    /// Finds a grouped alternating inference chain of at most `max_length`
    /// links.
    #[must_use]
    pub fn find(board: &Board, max_length: usize) -> Option<Step> {
        let mut engine = Engine::new(board);
        engine.find_nodes();
        engine.find_length_one_links();
        let mut length = 2;
        while length <= max_length {
            let (found, added) = engine.extend(length);
            if let Some(chain) = found {
                return Some(Step::Aic(chain));
            }
            if !added {
                break;
            }
            length += 1;
        }
        None
    }

    /// Applies the eliminations and, for a verity, the assignment.
    pub fn apply_to(&self, board: &mut Board) {
        self.eliminations.apply_to(board);
        if let Some((cell, digit)) = self.assignment {
            board.place(cell, digit);
        }
    }
}

impl Display for Aic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.continuous {
            write!(f, "Continuous Nice Loop: ")?;
        } else {
            write!(f, "Alternate Inference Chain: ")?;
        }
        for (i, node) in self.nodes.iter().enumerate() {
            let link = if node.set { '=' } else { '-' };
            if i > 0 {
                write!(f, " {link}")?;
            }
            write!(f, "{}{link} {}", node.digit, node.cells)?;
        }
        write!(f, " => {}", self.eliminations)?;
        if let Some((cell, digit)) = self.assignment {
            write!(f, ", {cell}={digit}")?;
        }
        Ok(())
    }
}

const NO_LINK: u32 = u32::MAX;

/// A node identity, polarity excluded; the paired entries `2i`/`2i+1` hold
/// the unset and set polarities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum NodeId {
    Cell {
        cell: Cell,
        digit: Digit,
    },
    Group {
        line: House,
        block: House,
        line_spots: SpotSet,
        box_spots: SpotSet,
        digit: Digit,
    },
}

impl NodeId {
    fn digit(self) -> Digit {
        match self {
            Self::Cell { digit, .. } | Self::Group { digit, .. } => digit,
        }
    }

    fn cells(self) -> CellSet {
        match self {
            Self::Cell { cell, .. } => CellSet::single(cell),
            Self::Group {
                line, line_spots, ..
            } => line.cells_in(line_spots),
        }
    }

    fn peers(self) -> CellSet {
        match self {
            Self::Cell { cell, .. } => cell.peers(),
            Self::Group { line, block, .. } => {
                (line.cell_set() | block.cell_set()).difference(self.cells())
            }
        }
    }
}

/// A path endpoint plus a back-pointer to the one-link-shorter path it
/// extends. Back-pointers are per edge so several distinct paths may reach
/// the same node.
#[derive(Debug, Clone, Copy)]
struct LinkPiece {
    node: u32,
    prev: u32,
}

struct NodeEntry {
    id: NodeId,
    /// Number of length-1 links; the prefix of `links` they occupy.
    first_order: usize,
    /// Where the previous length's pieces start.
    last_begin: usize,
    /// Snapshot of length-1 adjacency.
    neighbors: Vec<bool>,
    /// Which nodes any stored path already reaches.
    linked: Vec<bool>,
    links: Vec<LinkPiece>,
}

struct Engine<'a> {
    board: &'a Board,
    patterns: [CellSet; 9],
    index: HashMap<NodeId, usize>,
    nodes: Vec<NodeEntry>,
    group_nodes_by_house: Vec<Vec<usize>>,
}

impl<'a> Engine<'a> {
    fn new(board: &'a Board) -> Self {
        Self {
            board,
            patterns: board.all_digit_patterns(),
            index: HashMap::new(),
            nodes: Vec::new(),
            group_nodes_by_house: vec![Vec::new(); 27],
        }
    }

    fn add_node_pair(&mut self, id: NodeId) {
        self.index.insert(id, self.nodes.len());
        for _ in 0..2 {
            self.nodes.push(NodeEntry {
                id,
                first_order: 0,
                last_begin: 0,
                neighbors: Vec::new(),
                linked: Vec::new(),
                links: Vec::new(),
            });
        }
    }

    fn find_nodes(&mut self) {
        for cell in self.board.unfilled() {
            for digit in self.board.candidates(cell) {
                self.add_node_pair(NodeId::Cell { cell, digit });
            }
        }
        for inter in LINE_BOX_INTERSECTIONS {
            let unfilled = inter.cells() & self.board.unfilled();
            if unfilled.len() < 2 {
                continue;
            }
            for digit in Digit::ALL {
                let carriers: Vec<Cell> =
                    (unfilled & self.patterns[digit.index()]).iter().collect();
                if carriers.len() < 2 {
                    continue;
                }
                for mask in 3u32..(1 << carriers.len()) {
                    if mask.count_ones() < 2 {
                        continue;
                    }
                    let mut line_spots = SpotSet::EMPTY;
                    let mut box_spots = SpotSet::EMPTY;
                    for (i, &cell) in carriers.iter().enumerate() {
                        if mask & (1 << i) != 0 {
                            let line_spot = match inter.line.kind() {
                                sudostep_core::HouseKind::Row => cell.col(),
                                _ => cell.row(),
                            };
                            line_spots.insert(line_spot);
                            box_spots.insert(cell.box_spot());
                        }
                    }
                    let id = NodeId::Group {
                        line: inter.line,
                        block: inter.block,
                        line_spots,
                        box_spots,
                        digit,
                    };
                    let even = self.nodes.len();
                    self.add_node_pair(id);
                    self.group_nodes_by_house[inter.line.index()].push(even);
                    self.group_nodes_by_house[inter.block.index()].push(even);
                }
            }
        }
        let count = self.nodes.len();
        for entry in &mut self.nodes {
            entry.linked = vec![false; count];
        }
    }

    fn try_add(&mut self, from: usize, to: usize) {
        let entry = &mut self.nodes[from];
        if !entry.linked[to] {
            entry.linked[to] = true;
            entry.links.push(LinkPiece {
                node: to as u32,
                prev: NO_LINK,
            });
        }
    }

    fn find_length_one_links(&mut self) {
        for idx in (0..self.nodes.len()).step_by(2) {
            match self.nodes[idx].id {
                NodeId::Cell { .. } => self.find_cell_links(idx),
                NodeId::Group { .. } => self.find_group_links(idx),
            }
        }
        for entry in &mut self.nodes {
            entry.first_order = entry.links.len();
            entry.neighbors = entry.linked.clone();
        }
    }

    /// Length-1 links of a cell node: weak links to the cell's other
    /// candidates and to same-digit peers, strong where the pairing is the
    /// only one.
    fn find_cell_links(&mut self, idx: usize) {
        let NodeId::Cell { cell, digit } = self.nodes[idx].id else {
            return;
        };
        let mut count = 0;
        let mut last = 0;
        for other_digit in self.board.candidates(cell) ^ DigitSet::single(digit) {
            let other = self.index[&NodeId::Cell {
                cell,
                digit: other_digit,
            }];
            self.try_add(idx + 1, other);
            count += 1;
            last = other;
        }
        if count == 1 {
            // Bivalue cell: the pairing is exhaustive.
            self.try_add(idx, last + 1);
        }

        let pattern = cell.peers() & self.patterns[digit.index()];
        for other_cell in pattern {
            let other = self.index[&NodeId::Cell {
                cell: other_cell,
                digit,
            }];
            self.try_add(idx + 1, other);
            if (other_cell.peers() & pattern).is_empty() {
                self.try_add(idx, other + 1);
            }
        }
    }

    /// Length-1 links of a group node: to cells of its houses and to
    /// disjoint groups sharing a house.
    fn find_group_links(&mut self, idx: usize) {
        let NodeId::Group {
            line,
            block,
            line_spots,
            box_spots,
            digit,
        } = self.nodes[idx].id
        else {
            return;
        };
        let group = self.nodes[idx].id.cells();
        let cells = (line.cell_set() | block.cell_set()).difference(group)
            & self.patterns[digit.index()];
        for cell in cells {
            let other = self.index[&NodeId::Cell { cell, digit }];
            self.try_add(idx + 1, other);
            self.try_add(other + 1, idx);
            if (cell.peers() & cells).is_empty() {
                self.try_add(idx, other + 1);
                self.try_add(other, idx + 1);
            }
        }

        let group_size = line_spots.len();
        for (house, by_line) in [(line, true), (block, false)] {
            let candidates_left =
                (self.patterns[digit.index()] & house.cell_set()).len() - group_size;
            let others = self.group_nodes_by_house[house.index()].clone();
            for other_idx in others {
                if other_idx == idx {
                    continue;
                }
                let NodeId::Group {
                    line_spots: other_line,
                    box_spots: other_box,
                    digit: other_digit,
                    ..
                } = self.nodes[other_idx].id
                else {
                    continue;
                };
                let (own, other_mask) = if by_line {
                    (line_spots, other_line)
                } else {
                    (box_spots, other_box)
                };
                if other_digit != digit || !own.is_disjoint(other_mask) {
                    continue;
                }
                self.try_add(idx + 1, other_idx);
                self.try_add(other_idx + 1, idx);
                // Strong when the two groups exhaust the house.
                if other_mask.len() == candidates_left {
                    self.try_add(idx, other_idx + 1);
                    self.try_add(other_idx, idx + 1);
                }
            }
        }
    }

    /// One breadth-first extension pass: grow every stored path by one
    /// first-order link. Returns a found chain and whether any new piece was
    /// recorded.
    fn extend(&mut self, current_length: usize) -> (Option<Aic>, bool) {
        let mut added = false;
        for node_idx in 0..self.nodes.len() {
            let begin = self.nodes[node_idx].last_begin;
            let end = self.nodes[node_idx].links.len();
            self.nodes[node_idx].last_begin = end;
            for link_idx in begin..end {
                let mid = self.nodes[node_idx].links[link_idx].node as usize;
                let mid_first_order = self.nodes[mid].first_order;
                for i in 0..mid_first_order {
                    let new_end = self.nodes[mid].links[i].node as usize;
                    if new_end == node_idx {
                        // A loop back to the start: worth checking only from
                        // the unset polarity, and length-2 loops are trivial.
                        if node_idx % 2 != 0 || current_length == 2 {
                            continue;
                        }
                        self.nodes[node_idx].linked[new_end] = true;
                        self.nodes[node_idx].links.push(LinkPiece {
                            node: new_end as u32,
                            prev: link_idx as u32,
                        });
                        let found = self.check_nice_loop(node_idx);
                        self.nodes[node_idx].links.pop();
                        if let Some(chain) = found {
                            return (Some(chain), added);
                        }
                        continue;
                    }
                    if self.nodes[node_idx].linked[new_end] {
                        continue;
                    }
                    self.nodes[node_idx].linked[new_end] = true;
                    self.nodes[node_idx].links.push(LinkPiece {
                        node: new_end as u32,
                        prev: link_idx as u32,
                    });
                    added = true;
                    if new_end / 2 == node_idx / 2 {
                        let chain = if node_idx % 2 == 0 {
                            self.construct_verity(node_idx)
                        } else {
                            self.construct_discontinuous(node_idx)
                        };
                        // Skip structures with nothing to show for themselves.
                        if !chain.eliminations.is_empty() || chain.assignment.is_some() {
                            return (Some(chain), added);
                        }
                    }
                }
            }
        }
        (None, added)
    }

    /// Walks a stored path back to its start, returning entry indices from
    /// the start node to the final endpoint.
    fn collect(&self, node_idx: usize) -> Vec<usize> {
        let links = &self.nodes[node_idx].links;
        let mut seq = Vec::new();
        let mut cur = links.len() - 1;
        loop {
            seq.push(links[cur].node as usize);
            if links[cur].prev == NO_LINK {
                seq.push(node_idx);
                break;
            }
            cur = links[cur].prev as usize;
        }
        seq.reverse();
        seq
    }

    fn public_nodes(&self, seq: &[usize]) -> Vec<AicNode> {
        seq.iter()
            .map(|&idx| {
                let id = self.nodes[idx].id;
                AicNode {
                    cells: id.cells(),
                    digit: id.digit(),
                    set: idx % 2 == 1,
                }
            })
            .collect()
    }

    /// The chain start weak-links to its own complement: whatever weak
    /// neighbour both ends share is false.
    fn construct_discontinuous(&self, node_idx: usize) -> Aic {
        let seq = self.collect(node_idx);
        let inner = &seq[1..seq.len() - 1];
        let first_entry = &self.nodes[inner[0] + 1];
        let last_entry = &self.nodes[inner[inner.len() - 1]];
        let mut shared = vec![false; self.nodes.len()];
        for piece in &first_entry.links[..first_entry.first_order] {
            shared[piece.node as usize] = true;
        }
        let mut eliminations = Eliminations::new();
        for piece in &last_entry.links[..last_entry.first_order] {
            let target = piece.node as usize;
            if shared[target] {
                let id = self.nodes[target].id;
                eliminations.add(id.digit(), id.cells());
            }
        }
        Aic {
            nodes: self.public_nodes(inner),
            eliminations,
            assignment: None,
            continuous: false,
        }
    }

    /// The chain start strong-links to its own complement: the candidate is
    /// proven and leaves its peers; a single-cell node is committed.
    fn construct_verity(&self, node_idx: usize) -> Aic {
        let seq = self.collect(node_idx);
        let id = self.nodes[node_idx].id;
        let digit = id.digit();
        let mut eliminations = Eliminations::new();
        eliminations.add(digit, id.peers() & self.patterns[digit.index()]);
        let assignment = match id {
            NodeId::Cell { cell, .. } => Some((cell, digit)),
            NodeId::Group { .. } => None,
        };
        Aic {
            nodes: self.public_nodes(&seq),
            eliminations,
            assignment,
            continuous: false,
        }
    }

    /// Every weak link of a closed loop that is not also strong yields
    /// eliminations: the loop is continuous, so each such pairing is exact.
    fn check_nice_loop(&self, node_idx: usize) -> Option<Aic> {
        let links = &self.nodes[node_idx].links;
        let mut current_link = links.len() - 1;
        let mut eliminations = Eliminations::new();
        loop {
            let prev_link = links[current_link].prev;
            if prev_link == NO_LINK {
                break;
            }
            let current_idx = links[current_link].node as usize;
            let prev_idx = links[prev_link as usize].node as usize;
            // A weak link whose strong counterpart is absent.
            if current_idx % 2 == 0 && !self.nodes[prev_idx - 1].neighbors[current_idx + 1] {
                let prev_id = self.nodes[prev_idx].id;
                let current_id = self.nodes[current_idx].id;
                if same_cells(prev_id, current_id) {
                    // Linked within the same cells: other candidates leave.
                    let cells = prev_id.cells();
                    let linked_digits =
                        DigitSet::from_iter([prev_id.digit(), current_id.digit()]);
                    match prev_id {
                        NodeId::Cell { cell, .. } => {
                            for digit in self.board.candidates(cell).difference(linked_digits) {
                                eliminations.add(digit, cells);
                            }
                        }
                        NodeId::Group { .. } => {
                            for digit in !linked_digits {
                                eliminations
                                    .add(digit, cells & self.patterns[digit.index()]);
                            }
                        }
                    }
                } else {
                    // Linked on one digit: common outside peers lose it.
                    let digit = prev_id.digit();
                    eliminations.add(
                        digit,
                        prev_id.peers() & current_id.peers() & self.patterns[digit.index()],
                    );
                }
            }
            current_link = prev_link as usize;
        }
        if eliminations.is_empty() {
            return None;
        }
        Some(Aic {
            nodes: self.public_nodes(&self.collect(node_idx)),
            eliminations,
            assignment: None,
            continuous: true,
        })
    }
}

fn same_cells(lhs: NodeId, rhs: NodeId) -> bool {
    match (lhs, rhs) {
        (NodeId::Cell { cell: a, .. }, NodeId::Cell { cell: b, .. }) => a == b,
        (
            NodeId::Group {
                line: la,
                line_spots: sa,
                ..
            },
            NodeId::Group {
                line: lb,
                line_spots: sb,
                ..
            },
        ) => la == lb && sa == sb,
        _ => false,
    }
}
