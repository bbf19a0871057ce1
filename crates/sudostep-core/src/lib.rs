//! Core bitboard data model for Sudostep.
//!
//! This crate provides the data structures everything else is built on:
//!
//! - **Basic types**: [`Digit`] (a Sudoku digit), [`Cell`] (a board position,
//!   indexed `row * 9 + col`), [`House`] (one of the 27 rows/columns/boxes).
//! - **Bitsets**: [`DigitSet`] (9-bit candidate mask), [`CellSet`] (81-bit
//!   pattern mask), [`SpotSet`] (9-bit mask of positions *within* a house),
//!   [`HouseSet`] (27-bit mask of houses).
//! - **Geometry**: compile-time peer masks, house cell tables, and the 54
//!   line∩box intersections, shared by every strategy.
//! - **[`Board`]**: 81 candidate masks plus a filled mask, with parsing and
//!   printing of the two textual representations, naked-single propagation,
//!   brute-force solving, and random grid filling.
//!
//! # Representations
//!
//! The *short* form is 81 characters, row-major, `'1'..'9'` for a given and
//! `'.'` for an unknown cell. The *full* form writes every cell either as a
//! single digit (filled) or as a parenthesised ascending candidate list such
//! as `(137)` (unfilled); it round-trips exactly through
//! [`Board::from_full`] / [`Board::to_full`].
//!
//! # Design
//!
//! Boards are plain value types: strategies take `&Board` and return step
//! values, and only applying a step mutates a board. All geometry tables are
//! `const`; there is no global mutable state anywhere in the crate.

pub use self::{board::*, cell::*, digit::*, house::*};

mod board;
mod cell;
mod digit;
mod house;
