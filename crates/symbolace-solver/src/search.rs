//! Depth-first backtracking search over the ambiguous cells.

use symbolace_core::{Alphabet, CandidateBoard, CellIndex, IncidenceIndex, Puzzle, SymbolId};

use crate::{
    propagate::{Propagation, propagate},
    validator::{board_satisfies_groups, has_conflict},
};

/// The terminal failure result: no assignment satisfies every group.
///
/// Distinct from a crash or a structural error — an unsolvable puzzle is a
/// well-formed question with a negative answer. There is no retry policy:
/// the search is deterministic and exhaustive, so asking again yields the
/// same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no assignment satisfies every group constraint")]
pub struct Unsolvable;

/// A complete, validated assignment of symbols to cells.
///
/// Every cell holds exactly one symbol and every group has been audited to
/// contain each alphabet symbol exactly once. The solution also carries a
/// few counters describing how it was found, which the application layer
/// reports alongside timing.
///
/// # Examples
///
/// ```
/// use symbolace_core::{Alphabet, CandidateBoard, CellIndex, Group, Puzzle};
/// use symbolace_solver::solve;
///
/// let alphabet = Alphabet::new(['x', 'y'])?;
/// let mut board = CandidateBoard::new(2, &alphabet);
/// board.fix(CellIndex::new(1), alphabet.id_of('x').unwrap());
/// let puzzle = Puzzle::new(
///     alphabet,
///     board,
///     vec![Group::new([CellIndex::new(0), CellIndex::new(1)])],
/// )?;
///
/// let solution = solve(&puzzle).expect("solvable");
/// assert_eq!(solution.symbol_at(CellIndex::new(0)), 'y');
/// assert_eq!(solution.givens(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    alphabet: Alphabet,
    cells: Box<[SymbolId]>,
    givens: usize,
    propagated: usize,
    guesses: u64,
}

impl Solution {
    /// Returns the symbol id assigned to a cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range for the solved board.
    #[inline]
    #[must_use]
    pub fn id_at(&self, cell: CellIndex) -> SymbolId {
        self.cells[cell.index()]
    }

    /// Returns the printable symbol assigned to a cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range for the solved board.
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, cell: CellIndex) -> char {
        self.alphabet.symbol(self.id_at(cell))
    }

    /// Returns the number of cells on the solved board.
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the alphabet the solution is written in.
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns an iterator over `(cell, symbol)` pairs in cell order.
    #[expect(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, char)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &id)| (CellIndex::new(i as u16), self.alphabet.symbol(id)))
    }

    /// Converts the solution back into a board of singleton candidate sets.
    ///
    /// This is the form the presentation layer consumes.
    #[must_use]
    pub fn to_board(&self) -> CandidateBoard {
        let mut board = CandidateBoard::new(self.cells.len(), &self.alphabet);
        for (i, &id) in self.cells.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            board.fix(CellIndex::new(i as u16), id);
        }
        board
    }

    /// Returns the number of cells that were fixed in the input puzzle.
    #[inline]
    #[must_use]
    pub fn givens(&self) -> usize {
        self.givens
    }

    /// Returns the number of cells the initial propagation fixpoint fixed,
    /// before any guessing.
    #[inline]
    #[must_use]
    pub fn fixed_by_propagation(&self) -> usize {
        self.propagated
    }

    /// Returns the number of trial assignments the search committed,
    /// including ones later backtracked. Zero means deduction alone solved
    /// the puzzle.
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> u64 {
        self.guesses
    }
}

/// Solves a puzzle, or proves that no solution exists.
///
/// Runs the propagation fixpoint first; if ambiguity remains, resolves it by
/// depth-first search with chronological backtracking. Cells are attacked in
/// ascending index order and candidates in ascending symbol order, so the
/// result is deterministic. A found assignment is audited against every
/// group before being returned.
///
/// The puzzle itself is not mutated; all work happens on board snapshots.
///
/// # Errors
///
/// Returns [`Unsolvable`] when every branch of the search is exhausted
/// without a valid assignment — including the degenerate case where the
/// givens already contradict each other.
pub fn solve(puzzle: &Puzzle) -> Result<Solution, Unsolvable> {
    let index = puzzle.incidence();
    let alphabet = puzzle.alphabet();
    let givens = puzzle.board().fixed_count();

    let reduced = propagate(index, puzzle.board().clone()).map_err(|_| Unsolvable)?;
    let propagated = reduced.board().fixed_count() - givens;

    let mut guesses = 0;
    let board = if reduced.is_complete() {
        reduced.into_board()
    } else {
        search(index, &reduced, &mut guesses).ok_or(Unsolvable)?
    };

    if !board_satisfies_groups(index, &board, alphabet.len()) {
        return Err(Unsolvable);
    }

    let mut cells = Vec::with_capacity(board.cell_count());
    for cell in CellIndex::all(board.cell_count()) {
        cells.push(board.fixed_symbol(cell).ok_or(Unsolvable)?);
    }

    Ok(Solution {
        alphabet: alphabet.clone(),
        cells: cells.into_boxed_slice(),
        givens,
        propagated,
        guesses,
    })
}

/// One search node: try every candidate of the first worklist cell.
///
/// Each trial clones the board, fixes the cell, and re-runs full propagation
/// for maximal pruning; a contradiction discards the clone and moves on to
/// the next candidate. Exhausting all candidates reports failure to the
/// parent node, which resumes with its own next candidate.
fn search(
    index: &IncidenceIndex,
    state: &Propagation,
    guesses: &mut u64,
) -> Option<CandidateBoard> {
    let Some(&cell) = state.worklist().first() else {
        return Some(state.board().clone());
    };

    for symbol in state.board().candidates(cell) {
        if has_conflict(index, state.board(), cell, symbol) {
            continue;
        }
        *guesses += 1;
        let mut trial = state.board().clone();
        trial.fix(cell, symbol);
        if let Ok(next) = propagate(index, trial) {
            if let Some(solved) = search(index, &next, guesses) {
                return Some(solved);
            }
        }
    }
    None
}
