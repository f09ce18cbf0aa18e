//! Single-assignment and whole-board consistency checks.

use symbolace_core::{CandidateBoard, CellIndex, IncidenceIndex, SymbolId, SymbolSet};

/// Returns `true` if fixing `cell` to `symbol` would collide with a sibling.
///
/// A collision is any *other* cell, in any group containing `cell`, already
/// fixed to the same symbol. This is the pruning check the search runs
/// before committing a trial assignment; it is pure and costs
/// O(groups-per-cell x cells-per-group).
///
/// # Examples
///
/// ```
/// use symbolace_core::{Alphabet, CandidateBoard, CellIndex, Group, IncidenceIndex};
/// use symbolace_solver::has_conflict;
///
/// let alphabet = Alphabet::new(['a', 'b'])?;
/// let mut board = CandidateBoard::new(2, &alphabet);
/// let a = alphabet.id_of('a').unwrap();
/// board.fix(CellIndex::new(0), a);
///
/// let groups = vec![Group::new([CellIndex::new(0), CellIndex::new(1)])];
/// let index = IncidenceIndex::build(2, 2, &groups)?;
///
/// assert!(has_conflict(&index, &board, CellIndex::new(1), a));
/// # Ok::<(), symbolace_core::StructuralError>(())
/// ```
#[must_use]
pub fn has_conflict(
    index: &IncidenceIndex,
    board: &CandidateBoard,
    cell: CellIndex,
    symbol: SymbolId,
) -> bool {
    index.groups_of(cell).iter().any(|&group| {
        index
            .cells_of(group)
            .iter()
            .any(|&other| other != cell && board.fixed_symbol(other) == Some(symbol))
    })
}

/// Returns `true` if every group's cells hold each alphabet symbol exactly
/// once.
///
/// This is the final soundness audit run on a fully fixed board before it is
/// reported as a solution: every cell of every group must be fixed, no
/// symbol may repeat within a group, and each group must cover the whole
/// alphabet.
#[must_use]
pub fn board_satisfies_groups(
    index: &IncidenceIndex,
    board: &CandidateBoard,
    alphabet_len: usize,
) -> bool {
    index.group_ids().all(|group| {
        let mut seen = SymbolSet::EMPTY;
        for &cell in index.cells_of(group) {
            let Some(symbol) = board.fixed_symbol(cell) else {
                return false;
            };
            if !seen.insert(symbol) {
                return false;
            }
        }
        seen.len() == alphabet_len
    })
}

#[cfg(test)]
mod tests {
    use symbolace_core::{Alphabet, Group};

    use super::*;

    fn cell(i: u16) -> CellIndex {
        CellIndex::new(i)
    }

    #[test]
    fn test_conflict_only_within_shared_groups() {
        let alphabet = Alphabet::new("12".chars()).unwrap();
        let mut board = CandidateBoard::new(4, &alphabet);
        let one = alphabet.id_of('1').unwrap();
        board.fix(cell(0), one);

        let groups = vec![
            Group::new([cell(0), cell(1)]),
            Group::new([cell(2), cell(3)]),
        ];
        let index = IncidenceIndex::build(4, 2, &groups).unwrap();

        // Cell 1 shares a group with the fixed '1'; cell 2 does not.
        assert!(has_conflict(&index, &board, cell(1), one));
        assert!(!has_conflict(&index, &board, cell(2), one));
    }

    #[test]
    fn test_cell_does_not_conflict_with_itself() {
        let alphabet = Alphabet::new("12".chars()).unwrap();
        let mut board = CandidateBoard::new(2, &alphabet);
        let one = alphabet.id_of('1').unwrap();
        board.fix(cell(0), one);

        let groups = vec![Group::new([cell(0), cell(1)])];
        let index = IncidenceIndex::build(2, 2, &groups).unwrap();

        assert!(!has_conflict(&index, &board, cell(0), one));
    }

    #[test]
    fn test_board_audit() {
        let alphabet = Alphabet::new("12".chars()).unwrap();
        let one = alphabet.id_of('1').unwrap();
        let two = alphabet.id_of('2').unwrap();
        let groups = vec![Group::new([cell(0), cell(1)])];
        let index = IncidenceIndex::build(2, 2, &groups).unwrap();

        let mut board = CandidateBoard::new(2, &alphabet);
        board.fix(cell(0), one);
        // Cell 1 still ambiguous: not a valid assignment.
        assert!(!board_satisfies_groups(&index, &board, 2));

        board.fix(cell(1), one);
        // Duplicate within the group: invalid.
        assert!(!board_satisfies_groups(&index, &board, 2));

        board.fix(cell(1), two);
        assert!(board_satisfies_groups(&index, &board, 2));
    }
}
