//! Core data structures for group-constrained symbol placement puzzles.
//!
//! This crate provides the fundamental types for representing puzzles in which
//! a rectangular grid of cells must be filled with symbols from a finite
//! alphabet, subject to an arbitrary collection of *groups*: sets of cells
//! that must each contain every alphabet symbol exactly once. Classic sudoku
//! is the special case where the groups are the rows, columns, and boxes of a
//! 9x9 grid, but nothing here assumes that shape.
//!
//! # Overview
//!
//! The crate is organized around three layers:
//!
//! 1. **Identifier newtypes** - Dense, zero-based indices
//!    - [`SymbolId`]: position of a symbol within the [`Alphabet`]
//!    - [`CellIndex`]: position of a cell on the board
//!    - [`GroupId`]: position of a group within the puzzle's group list
//!
//! 2. **Value types** - The puzzle state itself
//!    - [`Alphabet`]: the ordered, duplicate-free symbol inventory
//!    - [`SymbolSet`]: the candidate set of one cell, stored as a bitset
//!    - [`Group`]: one exactly-once constraint over a set of cells
//!    - [`CandidateBoard`]: the total mapping from cells to candidate sets
//!
//! 3. **Derived structures** - Built once, then read-only
//!    - [`IncidenceIndex`]: bidirectional cell-to-group / group-to-cell map
//!    - [`Puzzle`]: a fully validated puzzle ready for solving
//!
//! All structural validation happens at construction time and surfaces as a
//! [`StructuralError`]; once a [`Puzzle`] exists it is guaranteed internally
//! consistent.
//!
//! # Examples
//!
//! ```
//! use symbolace_core::{Alphabet, CandidateBoard, CellIndex, Group, Puzzle};
//!
//! // A 2x2 grid over a two-symbol alphabet, constrained by its two rows.
//! let alphabet = Alphabet::new(['a', 'b'])?;
//! let mut board = CandidateBoard::new(4, &alphabet);
//! board.fix(CellIndex::new(0), alphabet.id_of('a').unwrap());
//!
//! let groups = vec![
//!     Group::new([CellIndex::new(0), CellIndex::new(1)]),
//!     Group::new([CellIndex::new(2), CellIndex::new(3)]),
//! ];
//! let puzzle = Puzzle::new(alphabet, board, groups)?;
//! assert_eq!(puzzle.incidence().group_count(), 2);
//! # Ok::<(), symbolace_core::StructuralError>(())
//! ```

pub mod alphabet;
pub mod board;
pub mod error;
pub mod group;
pub mod incidence;
pub mod index;
pub mod puzzle;
pub mod symbol_set;

// Re-export commonly used types
pub use self::{
    alphabet::Alphabet,
    board::CandidateBoard,
    error::StructuralError,
    group::Group,
    incidence::IncidenceIndex,
    index::{CellIndex, GroupId, SymbolId},
    puzzle::Puzzle,
    symbol_set::SymbolSet,
};
