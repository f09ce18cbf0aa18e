//! Structural validation errors.

use crate::index::{CellIndex, GroupId};

/// An inconsistency in a puzzle's structure, detected at construction time.
///
/// Structural errors are reported before any solving begins and are never
/// produced mid-search: once a [`Puzzle`](crate::Puzzle) has been built, the
/// solver only ever signals contradictions and unsolvability, never these.
///
/// # Examples
///
/// ```
/// use symbolace_core::{Alphabet, StructuralError};
///
/// let err = Alphabet::new(['a', 'a']).unwrap_err();
/// assert_eq!(err, StructuralError::DuplicateSymbol { symbol: 'a' });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StructuralError {
    /// The alphabet has no symbols.
    #[display("alphabet is empty")]
    EmptyAlphabet,

    /// The alphabet exceeds the candidate bitset capacity.
    #[display("alphabet has {len} symbols, the maximum is 64")]
    AlphabetTooLarge {
        /// Number of symbols supplied.
        len: usize,
    },

    /// A symbol appears more than once in the alphabet.
    #[display("duplicate symbol {symbol:?} in alphabet")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
    },

    /// The board has more cells than a [`CellIndex`] can address.
    #[display("board has {len} cells, the maximum is {max}", max = CellIndex::MAX_CELLS)]
    TooManyCells {
        /// Number of cells supplied.
        len: usize,
    },

    /// A group's cell count does not match the alphabet size.
    ///
    /// Such a group can never map bijectively onto the alphabet, so the
    /// puzzle is unsolvable by construction.
    #[display("group {group} has {len} cells, expected {expected}")]
    GroupSizeMismatch {
        /// The offending group.
        group: GroupId,
        /// Number of distinct cells in the group.
        len: usize,
        /// The alphabet size the group must match.
        expected: usize,
    },

    /// A group references a cell outside the board.
    #[display("group {group} references cell {cell}, but the board has only {cell_count} cells")]
    CellOutOfRange {
        /// The offending group.
        group: GroupId,
        /// The out-of-range cell.
        cell: CellIndex,
        /// Total number of cells on the board.
        cell_count: usize,
    },

    /// A cell's candidate set mentions a symbol id outside the alphabet.
    #[display("cell {cell} holds a candidate outside the alphabet")]
    CandidateOutOfAlphabet {
        /// The offending cell.
        cell: CellIndex,
    },
}
