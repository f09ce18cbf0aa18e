//! Text import and rendering for symbol placement puzzles.
//!
//! This crate is the boundary between puzzle files and the core types: it
//! parses grid and group descriptions into a validated
//! [`Puzzle`](symbolace_core::Puzzle), provides the classic sudoku group
//! layouts, and renders candidate boards back to text. The solving engine
//! itself lives in `symbolace-solver` and never touches text.
//!
//! # Grid format
//!
//! One line per row. Within a row, whitespace is ignored and every other
//! character is one cell: an alphabet symbol for a given, or `.`, `_`, or
//! `0` (when `0` is not itself an alphabet symbol) for an unknown cell.
//!
//! # Group format
//!
//! One group per line: whitespace-separated zero-based cell indices.
//! Blank lines and `#` comments are skipped.
//!
//! # Examples
//!
//! ```
//! use symbolace_core::Alphabet;
//! use symbolace_io::{classic_groups, import_puzzle, render_board};
//!
//! let alphabet = Alphabet::new("1234".chars())?;
//! let puzzle = import_puzzle(
//!     alphabet,
//!     "1...\n..2.\n....\n...4\n",
//!     classic_groups(2, 2),
//! )?;
//! assert_eq!(puzzle.board().fixed_count(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    classic::{classic_alphabet, classic_groups, latin_groups},
    import::{GridImport, ImportError, import_puzzle, parse_grid, parse_groups},
    render::render_board,
};

mod classic;
mod import;
mod render;
