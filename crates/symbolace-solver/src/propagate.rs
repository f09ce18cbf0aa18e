//! The propagation fixpoint engine.

use symbolace_core::{CandidateBoard, CellIndex, GroupId, IncidenceIndex, SymbolId, SymbolSet};

/// A contradiction discovered during propagation.
///
/// This is a recoverable control-flow signal, not a fatal error: the search
/// layer consumes it to discard the current branch and try the next
/// candidate. It only ever escapes the top-level [`solve`](crate::solve)
/// call indirectly, as the terminal [`Unsolvable`](crate::Unsolvable) result
/// once every branch is exhausted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum Contradiction {
    /// Elimination removed a cell's last candidate.
    #[display("cell {cell} has no remaining candidates")]
    EmptyCell {
        /// The emptied cell.
        cell: CellIndex,
    },

    /// Two cells of one group are fixed to the same symbol.
    #[display("symbol {symbol} is fixed twice in group {group}")]
    DuplicateFixed {
        /// The group holding the duplicate.
        group: GroupId,
        /// The twice-placed symbol.
        symbol: SymbolId,
    },

    /// A symbol has no remaining home in a group.
    #[display("symbol {symbol} cannot be placed anywhere in group {group}")]
    UnplaceableSymbol {
        /// The group that cannot accommodate the symbol.
        group: GroupId,
        /// The homeless symbol.
        symbol: SymbolId,
    },
}

/// The result of running propagation to its fixpoint.
///
/// Holds the reduced board and the worklist of cells that remain ambiguous.
/// An empty worklist means every cell is fixed and the puzzle was solved by
/// deduction alone.
#[derive(Debug, Clone)]
pub struct Propagation {
    board: CandidateBoard,
    worklist: Vec<CellIndex>,
}

impl Propagation {
    /// Returns the reduced candidate board.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &CandidateBoard {
        &self.board
    }

    /// Returns the still-ambiguous cells, in ascending cell order.
    #[inline]
    #[must_use]
    pub fn worklist(&self) -> &[CellIndex] {
        &self.worklist
    }

    /// Returns `true` if no ambiguity remains.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.worklist.is_empty()
    }

    /// Consumes the result and returns the reduced board.
    #[inline]
    #[must_use]
    pub fn into_board(self) -> CandidateBoard {
        self.board
    }
}

/// Shrinks every cell's candidate set as far as pure deduction allows.
///
/// Two rules are applied alternately, in full passes over the board, until a
/// pass changes nothing:
///
/// 1. **Elimination**: an ambiguous cell loses every symbol already fixed in
///    a cell sharing a group with it. A cell reduced to one candidate
///    thereby becomes fixed.
/// 2. **Unique value**: if a symbol can live in exactly one cell of a group,
///    that cell is collapsed to it — even if the cell still held other
///    candidates — because every group must place every symbol somewhere.
///
/// Both rules only ever remove candidates, so the fixpoint is unique and
/// independent of visiting order, and running `propagate` on its own output
/// returns it unchanged.
///
/// # Errors
///
/// Returns a [`Contradiction`] as soon as the board is found inconsistent:
/// a cell with no remaining candidates, a symbol fixed twice within a
/// group, or a symbol with no possible home in a group. The board is
/// consumed either way; on contradiction the caller resumes from whatever
/// snapshot it kept.
pub fn propagate(
    index: &IncidenceIndex,
    mut board: CandidateBoard,
) -> Result<Propagation, Contradiction> {
    check_fixed_duplicates(index, &board)?;

    let mut worklist = board.ambiguous_cells();
    loop {
        let mut changed = false;
        eliminate_pass(index, &mut board, &worklist, &mut changed)?;
        unique_value_pass(index, &mut board, &mut changed)?;
        if !changed {
            // The last recompute already reflects the final board.
            break;
        }
        worklist = board.ambiguous_cells();
    }

    Ok(Propagation { board, worklist })
}

/// Rejects boards where a group already holds the same fixed symbol twice.
///
/// Propagation itself never creates such a state (elimination strips a fixed
/// symbol from every sibling before the sibling can collapse onto it), so
/// one scan of the incoming board suffices.
fn check_fixed_duplicates(
    index: &IncidenceIndex,
    board: &CandidateBoard,
) -> Result<(), Contradiction> {
    for group in index.group_ids() {
        let mut seen = SymbolSet::EMPTY;
        for &cell in index.cells_of(group) {
            if let Some(symbol) = board.fixed_symbol(cell)
                && !seen.insert(symbol)
            {
                return Err(Contradiction::DuplicateFixed { group, symbol });
            }
        }
    }
    Ok(())
}

/// One elimination pass over the worklist.
fn eliminate_pass(
    index: &IncidenceIndex,
    board: &mut CandidateBoard,
    worklist: &[CellIndex],
    changed: &mut bool,
) -> Result<(), Contradiction> {
    for &cell in worklist {
        let current = board.candidates(cell);
        if current.len() <= 1 {
            // Fixed earlier in this same pass.
            continue;
        }
        let reduced = current.difference(fixed_peers(index, board, cell));
        if reduced.is_empty() {
            return Err(Contradiction::EmptyCell { cell });
        }
        if reduced != current {
            board.set_candidates(cell, reduced);
            *changed = true;
        }
    }
    Ok(())
}

/// The union of symbols fixed in any cell sharing a group with `cell`.
fn fixed_peers(index: &IncidenceIndex, board: &CandidateBoard, cell: CellIndex) -> SymbolSet {
    let mut fixed = SymbolSet::EMPTY;
    for &group in index.groups_of(cell) {
        for &other in index.cells_of(group) {
            if other != cell {
                let set = board.candidates(other);
                if set.len() == 1 {
                    fixed |= set;
                }
            }
        }
    }
    fixed
}

/// One unique-value pass over every group.
fn unique_value_pass(
    index: &IncidenceIndex,
    board: &mut CandidateBoard,
    changed: &mut bool,
) -> Result<(), Contradiction> {
    for group in index.group_ids() {
        let cells = index.cells_of(group);

        // Symbols present anywhere in the group, fixed cells included.
        let mut present = SymbolSet::EMPTY;
        for &cell in cells {
            present |= board.candidates(cell);
        }

        for symbol in present {
            let mut fixed_here = false;
            let mut holders = 0;
            let mut last_holder = None;
            for &cell in cells {
                let set = board.candidates(cell);
                if set.as_single() == Some(symbol) {
                    fixed_here = true;
                    break;
                }
                if set.len() > 1 && set.contains(symbol) {
                    holders += 1;
                    last_holder = Some(cell);
                }
            }
            if fixed_here {
                continue;
            }
            match (holders, last_holder) {
                (1, Some(cell)) => {
                    board.fix(cell, symbol);
                    *changed = true;
                }
                (0, _) => {
                    // The symbol was present at pass start but every holder
                    // has since collapsed onto some other symbol.
                    return Err(Contradiction::UnplaceableSymbol { group, symbol });
                }
                _ => {}
            }
        }
    }
    Ok(())
}
