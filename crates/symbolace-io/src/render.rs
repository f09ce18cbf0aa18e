//! Text rendering of candidate boards.

use symbolace_core::{Alphabet, CandidateBoard};

/// Renders a board as text, one row of `width` cells per line.
///
/// Fixed cells print their symbol; cells that are still ambiguous (or,
/// mid-contradiction, empty) print `.`. This accepts any board: the
/// original givens, a partially propagated board, or a solution converted
/// back to board form, so callers wanting to display partial progress can
/// render the propagator's output directly.
///
/// # Panics
///
/// Panics if `width` is zero.
///
/// # Examples
///
/// ```
/// use symbolace_core::Alphabet;
/// use symbolace_io::{parse_grid, render_board};
///
/// let alphabet = Alphabet::new("12".chars())?;
/// let import = parse_grid("1.\n.2\n", &alphabet)?;
/// assert_eq!(render_board(import.board(), &alphabet, 2), "1.\n.2\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn render_board(board: &CandidateBoard, alphabet: &Alphabet, width: usize) -> String {
    assert!(width > 0, "row width must be positive");
    let mut out = String::with_capacity(board.cell_count() + board.cell_count() / width + 1);
    for (cell, _) in board.iter() {
        match board.fixed_symbol(cell) {
            Some(id) => out.push(alphabet.symbol(id)),
            None => out.push('.'),
        }
        if (cell.index() + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use symbolace_core::{CandidateBoard, CellIndex};

    use super::*;

    #[test]
    fn test_renders_fixed_and_ambiguous_cells() {
        let alphabet = Alphabet::new("1234".chars()).unwrap();
        let mut board = CandidateBoard::new(4, &alphabet);
        board.fix(CellIndex::new(0), alphabet.id_of('3').unwrap());
        board.fix(CellIndex::new(3), alphabet.id_of('1').unwrap());

        assert_eq!(render_board(&board, &alphabet, 2), "3.\n.1\n");
        assert_eq!(render_board(&board, &alphabet, 4), "3..1\n");
    }

    #[test]
    fn test_partial_last_row() {
        let alphabet = Alphabet::new("12".chars()).unwrap();
        let board = CandidateBoard::new(3, &alphabet);
        assert_eq!(render_board(&board, &alphabet, 2), "..\n.");
    }
}
