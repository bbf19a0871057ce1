//! The step abstraction: one tagged union over every strategy's findings.

use std::fmt::{self, Display};

use sudostep_core::{Board, CellSet, Digit};

use crate::strategy::{
    aic::Aic,
    als::{AlsXyWing, AlsXz},
    chains::{XChain, XyChain},
    coloring::{RemotePair, SimpleColors},
    fish::Fish,
    intersection::Intersection,
    singles::{HiddenSingle, NakedSingle},
    subsets::{HiddenSubset, NakedSubset},
    sue_de_coq::SueDeCoq,
    wings::{WWing, XyWing, XyzWing},
};

/// The static tag of a strategy, usable for dispatch, statistics, and test
/// filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    /// Naked single.
    NakedSingle,
    /// Hidden single.
    HiddenSingle,
    /// Naked pair/triple/quadruple.
    NakedSubset,
    /// Hidden single/pair/triple/quadruple.
    HiddenSubset,
    /// Pointing or claiming box-line intersection.
    Intersection,
    /// Plain or finned fish (X-Wing, Swordfish, Jellyfish).
    Fish,
    /// XY-Wing.
    XyWing,
    /// XYZ-Wing.
    XyzWing,
    /// W-Wing.
    WWing,
    /// Single-digit alternating chain (Turbot Fish and longer).
    XChain,
    /// Bivalue-cell chain.
    XyChain,
    /// Remote pair.
    RemotePair,
    /// Simple colours, trap or wrap.
    SimpleColors,
    /// Sue-de-Coq, basic or extended.
    SueDeCoq,
    /// ALS-XZ.
    AlsXz,
    /// ALS-XY-Wing.
    AlsXyWing,
    /// General grouped alternating inference chain.
    Aic,
}

impl Technique {
    /// The display name of the strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NakedSingle => "Naked Single",
            Self::HiddenSingle => "Hidden Single",
            Self::NakedSubset => "Naked Subset",
            Self::HiddenSubset => "Hidden Subset",
            Self::Intersection => "Intersection",
            Self::Fish => "Fish",
            Self::XyWing => "XY-Wing",
            Self::XyzWing => "XYZ-Wing",
            Self::WWing => "W-Wing",
            Self::XChain => "X-Chain",
            Self::XyChain => "XY-Chain",
            Self::RemotePair => "Remote Pair",
            Self::SimpleColors => "Simple Colors",
            Self::SueDeCoq => "Sue de Coq",
            Self::AlsXz => "ALS-XZ",
            Self::AlsXyWing => "ALS-XY-Wing",
            Self::Aic => "Chain",
        }
    }
}

impl Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-digit elimination patterns.
///
/// Most steps eliminate a single digit from a single pattern, but chains,
/// ALS patterns, and Sue-de-Coq can eliminate several digits at once; this
/// is the shared shape for those.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Eliminations {
    by_digit: [CellSet; 9],
}

impl Eliminations {
    /// No eliminations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cells losing `digit`.
    #[must_use]
    pub fn of(&self, digit: Digit) -> CellSet {
        self.by_digit[digit.index()]
    }

    /// Adds `cells` to the pattern losing `digit`.
    pub fn add(&mut self, digit: Digit, cells: CellSet) {
        self.by_digit[digit.index()] |= cells;
    }

    /// Returns `true` if no digit loses any cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_digit.iter().all(|c| CellSet::is_empty(*c))
    }

    /// Iterates the non-empty `(digit, cells)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Digit, CellSet)> + use<> {
        Digit::ALL
            .into_iter()
            .zip(self.by_digit)
            .filter(|(_, cells)| !cells.is_empty())
    }

    /// Removes every recorded candidate from `board`.
    pub fn apply_to(&self, board: &mut Board) {
        for (digit, cells) in self.iter() {
            for cell in cells {
                board.eliminate(cell, digit);
            }
        }
    }
}

impl Display for Eliminations {
    /// Formats as `cells!=d` clauses separated by commas.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (digit, cells)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cells}!={digit}")?;
        }
        Ok(())
    }
}

/// One deduction found by a strategy: the eliminations and assignments it
/// effects plus enough context to describe itself.
///
/// A tagged union rather than a trait object: every strategy contributes a
/// variant, and [`apply_to`](Self::apply_to) / [`Display`] dispatch over
/// the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// See [`NakedSingle`].
    NakedSingle(NakedSingle),
    /// See [`HiddenSingle`].
    HiddenSingle(HiddenSingle),
    /// See [`NakedSubset`].
    NakedSubset(NakedSubset),
    /// See [`HiddenSubset`].
    HiddenSubset(HiddenSubset),
    /// See [`Intersection`].
    Intersection(Intersection),
    /// See [`Fish`].
    Fish(Fish),
    /// See [`XyWing`].
    XyWing(XyWing),
    /// See [`XyzWing`].
    XyzWing(XyzWing),
    /// See [`WWing`].
    WWing(WWing),
    /// See [`XChain`].
    XChain(XChain),
    /// See [`XyChain`].
    XyChain(XyChain),
    /// See [`RemotePair`].
    RemotePair(RemotePair),
    /// See [`SimpleColors`].
    SimpleColors(SimpleColors),
    /// See [`SueDeCoq`].
    SueDeCoq(SueDeCoq),
    /// See [`AlsXz`].
    AlsXz(AlsXz),
    /// See [`AlsXyWing`].
    AlsXyWing(AlsXyWing),
    /// See [`Aic`].
    Aic(Aic),
}

impl Step {
    /// The static tag of the strategy that produced this step.
    #[must_use]
    pub const fn technique(&self) -> Technique {
        match self {
            Self::NakedSingle(_) => Technique::NakedSingle,
            Self::HiddenSingle(_) => Technique::HiddenSingle,
            Self::NakedSubset(_) => Technique::NakedSubset,
            Self::HiddenSubset(_) => Technique::HiddenSubset,
            Self::Intersection(_) => Technique::Intersection,
            Self::Fish(_) => Technique::Fish,
            Self::XyWing(_) => Technique::XyWing,
            Self::XyzWing(_) => Technique::XyzWing,
            Self::WWing(_) => Technique::WWing,
            Self::XChain(_) => Technique::XChain,
            Self::XyChain(_) => Technique::XyChain,
            Self::RemotePair(_) => Technique::RemotePair,
            Self::SimpleColors(_) => Technique::SimpleColors,
            Self::SueDeCoq(_) => Technique::SueDeCoq,
            Self::AlsXz(_) => Technique::AlsXz,
            Self::AlsXyWing(_) => Technique::AlsXyWing,
            Self::Aic(_) => Technique::Aic,
        }
    }

    /// Applies the step's eliminations and assignments to `board`.
    ///
    /// Idempotent: applying a step twice leaves the board exactly as after
    /// the first application.
    pub fn apply_to(&self, board: &mut Board) {
        match self {
            Self::NakedSingle(step) => step.apply_to(board),
            Self::HiddenSingle(step) => step.apply_to(board),
            Self::NakedSubset(step) => step.apply_to(board),
            Self::HiddenSubset(step) => step.apply_to(board),
            Self::Intersection(step) => step.apply_to(board),
            Self::Fish(step) => step.apply_to(board),
            Self::XyWing(step) => step.apply_to(board),
            Self::XyzWing(step) => step.apply_to(board),
            Self::WWing(step) => step.apply_to(board),
            Self::XChain(step) => step.apply_to(board),
            Self::XyChain(step) => step.apply_to(board),
            Self::RemotePair(step) => step.apply_to(board),
            Self::SimpleColors(step) => step.apply_to(board),
            Self::SueDeCoq(step) => step.apply_to(board),
            Self::AlsXz(step) => step.apply_to(board),
            Self::AlsXyWing(step) => step.apply_to(board),
            Self::Aic(step) => step.apply_to(board),
        }
    }
}

impl Display for Step {
    /// The one-line human-readable rationale for the step.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NakedSingle(step) => step.fmt(f),
            Self::HiddenSingle(step) => step.fmt(f),
            Self::NakedSubset(step) => step.fmt(f),
            Self::HiddenSubset(step) => step.fmt(f),
            Self::Intersection(step) => step.fmt(f),
            Self::Fish(step) => step.fmt(f),
            Self::XyWing(step) => step.fmt(f),
            Self::XyzWing(step) => step.fmt(f),
            Self::WWing(step) => step.fmt(f),
            Self::XChain(step) => step.fmt(f),
            Self::XyChain(step) => step.fmt(f),
            Self::RemotePair(step) => step.fmt(f),
            Self::SimpleColors(step) => step.fmt(f),
            Self::SueDeCoq(step) => step.fmt(f),
            Self::AlsXz(step) => step.fmt(f),
            Self::AlsXyWing(step) => step.fmt(f),
            Self::Aic(step) => step.fmt(f),
        }
    }
}
