//! Human-style solving strategies for Sudostep.
//!
//! # Overview
//!
//! This crate turns a [`Board`](sudostep_core::Board) into a sequence of
//! *steps*: discrete, explainable deductions that eliminate candidates or
//! commit digits. Every strategy exposes a `find` function that scans a
//! board and, if its pattern is present, returns a [`Step`] describing the
//! eliminations and a one-line human-readable rationale.
//!
//! Strategies never mutate the board they scan; a step is applied
//! explicitly with [`Step::apply_to`], which is idempotent and only ever
//! removes candidate bits (or commits a digit through
//! [`Board::place`](sudostep_core::Board::place)).
//!
//! A finder returning `None` means "this strategy does not apply here";
//! saturation is an absence, never an error, and finders never panic.
//!
//! # Strategy library
//!
//! Singles and subsets, box-line intersections, fish (plain and finned,
//! sizes 2-4), XY-/XYZ-/W-Wings, single-digit and bivalue chains, remote
//! pairs, simple colours, Sue-de-Coq (basic and extended), ALS-XZ,
//! ALS-XY-Wing, and a general grouped alternating-inference-chain engine.
//!
//! # Difficulty
//!
//! [`grade`] runs a fixed ladder of strategies in increasing cost and
//! labels a puzzle by the deepest tier it needed; [`solve_logically`]
//! returns the full step trace the ladder produces.

pub use self::{
    grade::{Grade, grade, next_step, solve_logically},
    step::{Eliminations, Step, Technique},
};

pub mod strategy;

mod grade;
mod step;

#[cfg(test)]
mod testing;
