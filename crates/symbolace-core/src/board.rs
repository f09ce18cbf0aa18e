//! The cell-to-candidates mapping.

use crate::{alphabet::Alphabet, index::CellIndex, index::SymbolId, symbol_set::SymbolSet};

/// A total mapping from every cell to its candidate set.
///
/// This is the solver's working state: fixed (given or deduced) cells hold a
/// singleton set, unknown cells hold every symbol not yet ruled out. The
/// board is a flat boxed slice of [`SymbolSet`] words, so cloning it is one
/// memcpy — which is exactly how backtracking works here: each search branch
/// clones the board, and reverting a failed branch is dropping the clone. No
/// undo log, no shared mutable state.
///
/// # Examples
///
/// ```
/// use symbolace_core::{Alphabet, CandidateBoard, CellIndex};
///
/// let alphabet = Alphabet::new("1234".chars())?;
/// let mut board = CandidateBoard::new(16, &alphabet);
///
/// // Every cell starts with the full alphabet as candidates.
/// assert_eq!(board.candidates(CellIndex::new(0)).len(), 4);
///
/// // Fixing a given collapses it to a singleton.
/// board.fix(CellIndex::new(0), alphabet.id_of('1').unwrap());
/// assert!(board.is_fixed(CellIndex::new(0)));
/// # Ok::<(), symbolace_core::StructuralError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateBoard {
    cells: Box<[SymbolSet]>,
}

impl CandidateBoard {
    /// Creates a board of `cell_count` cells, each holding the full alphabet
    /// as candidates.
    #[must_use]
    pub fn new(cell_count: usize, alphabet: &Alphabet) -> Self {
        Self {
            cells: vec![alphabet.full_set(); cell_count].into_boxed_slice(),
        }
    }

    /// Returns the number of cells on the board.
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the candidate set of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range for this board.
    #[inline]
    #[must_use]
    pub fn candidates(&self, cell: CellIndex) -> SymbolSet {
        self.cells[cell.index()]
    }

    /// Replaces the candidate set of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range for this board.
    #[inline]
    pub fn set_candidates(&mut self, cell: CellIndex, candidates: SymbolSet) {
        self.cells[cell.index()] = candidates;
    }

    /// Collapses a cell to a single symbol.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range for this board.
    #[inline]
    pub fn fix(&mut self, cell: CellIndex, symbol: SymbolId) {
        self.cells[cell.index()] = SymbolSet::from_elem(symbol);
    }

    /// Removes one candidate from a cell. Returns `true` if it was present.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range for this board.
    #[inline]
    pub fn remove_candidate(&mut self, cell: CellIndex, symbol: SymbolId) -> bool {
        self.cells[cell.index()].remove(symbol)
    }

    /// Returns `true` if the cell is down to exactly one candidate.
    #[inline]
    #[must_use]
    pub fn is_fixed(&self, cell: CellIndex) -> bool {
        self.cells[cell.index()].len() == 1
    }

    /// Returns the cell's symbol if it is fixed, `None` while it is still
    /// ambiguous (or empty, mid-contradiction).
    #[inline]
    #[must_use]
    pub fn fixed_symbol(&self, cell: CellIndex) -> Option<SymbolId> {
        self.cells[cell.index()].as_single()
    }

    /// Returns an iterator over `(cell, candidates)` pairs in cell order.
    #[expect(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, SymbolSet)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &set)| (CellIndex::new(i as u16), set))
    }

    /// Returns the cells still holding more than one candidate, in ascending
    /// cell order.
    ///
    /// This is the solver's worklist; the fixed order is what makes solving
    /// deterministic.
    #[must_use]
    pub fn ambiguous_cells(&self) -> Vec<CellIndex> {
        self.iter()
            .filter(|&(_, set)| set.len() > 1)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Returns the number of fixed cells.
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.cells.iter().filter(|set| set.len() == 1).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::new("1234".chars()).unwrap()
    }

    #[test]
    fn test_new_board_is_all_ambiguous() {
        let board = CandidateBoard::new(4, &alphabet());
        assert_eq!(board.cell_count(), 4);
        assert_eq!(board.fixed_count(), 0);
        assert_eq!(board.ambiguous_cells().len(), 4);
        for (_, set) in board.iter() {
            assert_eq!(set.len(), 4);
        }
    }

    #[test]
    fn test_fix_and_query() {
        let alphabet = alphabet();
        let mut board = CandidateBoard::new(4, &alphabet);
        let one = alphabet.id_of('1').unwrap();

        board.fix(CellIndex::new(2), one);
        assert!(board.is_fixed(CellIndex::new(2)));
        assert_eq!(board.fixed_symbol(CellIndex::new(2)), Some(one));
        assert_eq!(board.fixed_symbol(CellIndex::new(0)), None);
        assert_eq!(
            board.ambiguous_cells(),
            vec![CellIndex::new(0), CellIndex::new(1), CellIndex::new(3)]
        );
    }

    #[test]
    fn test_clone_is_independent() {
        // Backtracking relies on clones not aliasing the parent board.
        let alphabet = alphabet();
        let parent = CandidateBoard::new(4, &alphabet);
        let mut child = parent.clone();
        child.fix(CellIndex::new(0), alphabet.id_of('2').unwrap());

        assert!(child.is_fixed(CellIndex::new(0)));
        assert!(!parent.is_fixed(CellIndex::new(0)));
    }
}
