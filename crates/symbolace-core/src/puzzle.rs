//! A fully validated puzzle, ready for solving.

use crate::{
    alphabet::Alphabet, board::CandidateBoard, error::StructuralError, group::Group,
    incidence::IncidenceIndex,
};

/// A puzzle: alphabet, initial candidate board, and group constraints.
///
/// Construction validates every structural invariant and builds the
/// [`IncidenceIndex`] up front, so solving code never has to re-check group
/// shapes or cell ranges. The puzzle itself is logically immutable: solving
/// works on clones of the board and leaves the original untouched, which is
/// also what lets a caller display the original givens after a solve.
///
/// # Examples
///
/// ```
/// use symbolace_core::{Alphabet, CandidateBoard, CellIndex, Group, Puzzle};
///
/// // A 1x2 "grid" over a two-symbol alphabet with one group covering both cells.
/// let alphabet = Alphabet::new(['a', 'b'])?;
/// let mut board = CandidateBoard::new(2, &alphabet);
/// board.fix(CellIndex::new(0), alphabet.id_of('b').unwrap());
///
/// let puzzle = Puzzle::new(
///     alphabet,
///     board,
///     vec![Group::new([CellIndex::new(0), CellIndex::new(1)])],
/// )?;
/// assert_eq!(puzzle.board().fixed_count(), 1);
/// # Ok::<(), symbolace_core::StructuralError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Puzzle {
    alphabet: Alphabet,
    board: CandidateBoard,
    groups: Vec<Group>,
    incidence: IncidenceIndex,
}

impl Puzzle {
    /// Creates a puzzle, validating its structure.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::TooManyCells`] if the board exceeds the
    /// [`CellIndex`](crate::CellIndex) range,
    /// [`StructuralError::CandidateOutOfAlphabet`] if any cell's candidate
    /// set strays outside the alphabet, and the
    /// [`IncidenceIndex::build`] errors for malformed groups.
    pub fn new(
        alphabet: Alphabet,
        board: CandidateBoard,
        groups: Vec<Group>,
    ) -> Result<Self, StructuralError> {
        if board.cell_count() > crate::CellIndex::MAX_CELLS {
            return Err(StructuralError::TooManyCells {
                len: board.cell_count(),
            });
        }
        let full = alphabet.full_set();
        for (cell, candidates) in board.iter() {
            if !candidates.is_subset(full) {
                return Err(StructuralError::CandidateOutOfAlphabet { cell });
            }
        }
        let incidence = IncidenceIndex::build(board.cell_count(), alphabet.len(), &groups)?;
        Ok(Self {
            alphabet,
            board,
            groups,
            incidence,
        })
    }

    /// Returns the puzzle's alphabet.
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the initial candidate board, with givens fixed and every
    /// other cell holding the full alphabet.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &CandidateBoard {
        &self.board
    }

    /// Returns the group constraints.
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns the prebuilt incidence index.
    #[inline]
    #[must_use]
    pub fn incidence(&self) -> &IncidenceIndex {
        &self.incidence
    }
}
