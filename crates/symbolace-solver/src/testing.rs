//! Test utilities for solver behavior.
//!
//! This module provides [`SolveTester`], a fluent harness for building small
//! puzzles inline, running propagation or the full solver over them, and
//! asserting on the outcome. It exists so tests can state *what* a deduction
//! should conclude without repeating puzzle-assembly boilerplate.
//!
//! # Example
//!
//! ```
//! use symbolace_solver::testing::SolveTester;
//!
//! SolveTester::new("ab", "a.", &[&[0, 1]])
//!     .propagate()
//!     .assert_fixed(1, 'b')
//!     .assert_complete();
//! ```

use symbolace_core::{Alphabet, CandidateBoard, CellIndex, Group, Puzzle, SymbolSet};

use crate::{
    propagate::{Contradiction, Propagation, propagate},
    search::{Solution, solve},
};

/// A test harness for propagation and solving assertions.
///
/// Panics with descriptive messages on malformed input or failed
/// assertions, using `#[track_caller]` to report the test's own location.
#[derive(Debug, Clone)]
pub struct SolveTester {
    puzzle: Puzzle,
}

impl SolveTester {
    /// Creates a tester from an alphabet string, a grid string, and group
    /// cell lists.
    ///
    /// Each character of `alphabet` is one symbol. The grid holds one
    /// character per cell; whitespace is ignored, and `.`, `_`, or a `0`
    /// that is not itself an alphabet symbol mean "unknown." Groups are
    /// given as slices of zero-based cell indices.
    ///
    /// # Panics
    ///
    /// Panics if the alphabet, grid, or groups are malformed.
    #[track_caller]
    #[must_use]
    pub fn new(alphabet: &str, grid: &str, groups: &[&[u16]]) -> Self {
        let alphabet = Alphabet::new(alphabet.chars()).expect("invalid test alphabet");
        let board = parse_board(&alphabet, grid);
        let groups = groups
            .iter()
            .map(|cells| Group::new(cells.iter().map(|&i| CellIndex::new(i))))
            .collect();
        let puzzle = Puzzle::new(alphabet, board, groups).expect("invalid test puzzle");
        Self { puzzle }
    }

    /// Creates a tester for a classic 9x9 sudoku.
    ///
    /// The alphabet is `1`-`9` and the groups are the nine rows, nine
    /// columns, and nine 3x3 boxes. The grid format matches
    /// [`Self::new`]: digits for givens, `.`, `_`, or `0` for unknowns,
    /// whitespace ignored.
    ///
    /// # Panics
    ///
    /// Panics if the grid does not describe exactly 81 cells.
    #[track_caller]
    #[must_use]
    pub fn classic(grid: &str) -> Self {
        let alphabet = Alphabet::new("123456789".chars()).expect("invalid test alphabet");
        let board = parse_board(&alphabet, grid);
        assert_eq!(board.cell_count(), 81, "classic grid must have 81 cells");
        let puzzle =
            Puzzle::new(alphabet, board, classic_groups()).expect("invalid classic puzzle");
        Self { puzzle }
    }

    /// Restricts a cell's candidates to the given symbols before solving.
    ///
    /// Useful for setting up deduction scenarios (such as hidden singles)
    /// that plain givens cannot express.
    ///
    /// # Panics
    ///
    /// Panics if the cell or any symbol is out of range.
    #[track_caller]
    #[must_use]
    pub fn restrict(self, cell: u16, symbols: &str) -> Self {
        let alphabet = self.puzzle.alphabet().clone();
        let mut board = self.puzzle.board().clone();
        let set: SymbolSet = symbols
            .chars()
            .map(|s| {
                alphabet
                    .id_of(s)
                    .unwrap_or_else(|| panic!("symbol {s:?} not in alphabet"))
            })
            .collect();
        board.set_candidates(CellIndex::new(cell), set);
        let puzzle =
            Puzzle::new(alphabet, board, self.puzzle.groups().to_vec()).expect("invalid puzzle");
        Self { puzzle }
    }

    /// Returns the assembled puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Consumes the tester and returns the assembled puzzle.
    #[must_use]
    pub fn into_puzzle(self) -> Puzzle {
        self.puzzle
    }

    /// Runs the propagation fixpoint and returns an assertion handle.
    #[must_use]
    pub fn propagate(self) -> PropagationTester {
        let result = propagate(self.puzzle.incidence(), self.puzzle.board().clone());
        PropagationTester {
            alphabet: self.puzzle.alphabet().clone(),
            result,
        }
    }

    /// Solves the puzzle, panicking if it is unsolvable.
    #[track_caller]
    #[must_use]
    pub fn solve_expect(self) -> Solution {
        solve(&self.puzzle).expect("puzzle should be solvable")
    }

    /// Asserts that the puzzle has no solution.
    #[track_caller]
    pub fn assert_unsolvable(self) {
        assert!(
            solve(&self.puzzle).is_err(),
            "puzzle was solved but should be unsolvable"
        );
    }
}

/// Assertion handle over a propagation result.
#[derive(Debug)]
pub struct PropagationTester {
    alphabet: Alphabet,
    result: Result<Propagation, Contradiction>,
}

impl PropagationTester {
    #[track_caller]
    fn propagation(&self) -> &Propagation {
        match &self.result {
            Ok(propagation) => propagation,
            Err(contradiction) => panic!("unexpected contradiction: {contradiction}"),
        }
    }

    /// Asserts that a cell was fixed to the given symbol.
    #[track_caller]
    #[must_use]
    pub fn assert_fixed(self, cell: u16, symbol: char) -> Self {
        let cell = CellIndex::new(cell);
        let fixed = self.propagation().board().fixed_symbol(cell);
        let expected = self.alphabet.id_of(symbol);
        assert_eq!(
            fixed, expected,
            "cell {cell} should be fixed to {symbol:?}, candidates are {:?}",
            self.propagation().board().candidates(cell),
        );
        self
    }

    /// Asserts a cell's exact candidate set, written as a symbol string.
    #[track_caller]
    #[must_use]
    pub fn assert_candidates(self, cell: u16, symbols: &str) -> Self {
        let cell = CellIndex::new(cell);
        let expected: SymbolSet = symbols
            .chars()
            .map(|s| {
                self.alphabet
                    .id_of(s)
                    .unwrap_or_else(|| panic!("symbol {s:?} not in alphabet"))
            })
            .collect();
        let actual = self.propagation().board().candidates(cell);
        assert_eq!(
            actual, expected,
            "cell {cell} should hold candidates {symbols:?}"
        );
        self
    }

    /// Asserts that no ambiguity remains.
    #[track_caller]
    #[must_use]
    pub fn assert_complete(self) -> Self {
        let worklist = self.propagation().worklist().to_vec();
        assert!(
            worklist.is_empty(),
            "cells {worklist:?} are still ambiguous"
        );
        self
    }

    /// Asserts that propagation found a contradiction, returning it for
    /// closer inspection.
    #[track_caller]
    pub fn assert_contradiction(self) -> Contradiction {
        match self.result {
            Err(contradiction) => contradiction,
            Ok(propagation) => panic!(
                "expected a contradiction, but propagation succeeded with {} ambiguous cells",
                propagation.worklist().len()
            ),
        }
    }

    /// Returns the raw propagation result.
    pub fn into_result(self) -> Result<Propagation, Contradiction> {
        self.result
    }
}

/// Parses a board from a grid string against an alphabet.
#[track_caller]
fn parse_board(alphabet: &Alphabet, grid: &str) -> CandidateBoard {
    let cells: Vec<Option<char>> = grid
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            if c == '.' || c == '_' || (c == '0' && alphabet.id_of('0').is_none()) {
                None
            } else {
                Some(c)
            }
        })
        .collect();
    let mut board = CandidateBoard::new(cells.len(), alphabet);
    for (i, symbol) in cells.into_iter().enumerate() {
        if let Some(symbol) = symbol {
            let id = alphabet
                .id_of(symbol)
                .unwrap_or_else(|| panic!("symbol {symbol:?} not in alphabet"));
            #[expect(clippy::cast_possible_truncation)]
            board.fix(CellIndex::new(i as u16), id);
        }
    }
    board
}

/// The 27 groups of a classic 9x9 sudoku: rows, columns, 3x3 boxes.
#[must_use]
pub fn classic_groups() -> Vec<Group> {
    let mut groups = Vec::with_capacity(27);
    for row in 0..9u16 {
        groups.push(Group::new((0..9).map(|col| CellIndex::new(row * 9 + col))));
    }
    for col in 0..9u16 {
        groups.push(Group::new((0..9).map(|row| CellIndex::new(row * 9 + col))));
    }
    for band in 0..3u16 {
        for stack in 0..3u16 {
            groups.push(Group::new((0..9).map(|i| {
                let (dr, dc) = (i / 3, i % 3);
                CellIndex::new((band * 3 + dr) * 9 + stack * 3 + dc)
            })));
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_groups_shape() {
        let groups = classic_groups();
        assert_eq!(groups.len(), 27);
        for group in &groups {
            assert_eq!(group.len(), 9);
        }
        // Every cell appears in exactly three groups.
        let mut membership = [0usize; 81];
        for group in &groups {
            for &cell in group.cells() {
                membership[cell.index()] += 1;
            }
        }
        assert!(membership.iter().all(|&count| count == 3));
    }

    #[test]
    fn test_parse_board_unknown_markers() {
        let alphabet = Alphabet::new("12".chars()).unwrap();
        let board = parse_board(&alphabet, "1 . _ 0");
        assert_eq!(board.cell_count(), 4);
        assert_eq!(board.fixed_count(), 1);
    }
}
