//! Parsing of puzzle and group description text.

use symbolace_core::{Alphabet, CandidateBoard, CellIndex, Group, Puzzle, StructuralError};

/// An error raised while turning puzzle text into core types.
///
/// Parse-shaped problems get their own variants; structural problems found
/// by the core's own validation are wrapped unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ImportError {
    /// The grid text contains no rows.
    #[display("puzzle grid is empty")]
    EmptyGrid,

    /// A row's cell count differs from the first row's.
    #[display("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row number.
        row: usize,
        /// Cells found in this row.
        len: usize,
        /// Cells in the first row.
        expected: usize,
    },

    /// A cell character is neither an alphabet symbol nor an unknown marker.
    #[display("unknown symbol {symbol:?} in row {row}")]
    UnknownSymbol {
        /// Zero-based row number.
        row: usize,
        /// The offending character.
        symbol: char,
    },

    /// A group line is not a whitespace-separated list of cell indices.
    #[display("malformed group on line {line}")]
    BadGroupLine {
        /// One-based line number.
        line: usize,
    },

    /// The parsed data failed the core's structural validation.
    #[display("{_0}")]
    Structural(#[from] StructuralError),
}

/// A parsed rectangular grid: its dimensions and initial candidate board.
#[derive(Debug, Clone)]
pub struct GridImport {
    width: usize,
    height: usize,
    board: CandidateBoard,
}

impl GridImport {
    /// Returns the number of cells per row.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the parsed board.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &CandidateBoard {
        &self.board
    }

    /// Consumes the import and returns the board.
    #[inline]
    #[must_use]
    pub fn into_board(self) -> CandidateBoard {
        self.board
    }
}

/// Returns `true` if `c` marks an unknown cell under the given alphabet.
fn is_unknown_marker(c: char, alphabet: &Alphabet) -> bool {
    c == '.' || c == '_' || (c == '0' && alphabet.id_of('0').is_none())
}

/// Parses a rectangular grid of symbols.
///
/// One line per row; whitespace within a row is ignored; `.`, `_`, and `0`
/// (unless `0` is an alphabet symbol) mean "unknown." Blank lines are
/// skipped, so a grid written in spaced bands still parses as its rows.
/// Every given cell becomes a singleton candidate set, every unknown cell
/// starts with the full alphabet.
///
/// # Errors
///
/// Returns [`ImportError::EmptyGrid`] for symbol-free text,
/// [`ImportError::RaggedRow`] if rows differ in cell count, and
/// [`ImportError::UnknownSymbol`] for a character that is neither an
/// alphabet symbol nor an unknown marker.
pub fn parse_grid(text: &str, alphabet: &Alphabet) -> Result<GridImport, ImportError> {
    let mut cells: Vec<Option<char>> = Vec::new();
    let mut width = None;
    let mut height = 0;

    for line in text.lines() {
        let row: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
        if row.is_empty() {
            continue;
        }
        let expected = *width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(ImportError::RaggedRow {
                row: height,
                len: row.len(),
                expected,
            });
        }
        for c in row {
            if is_unknown_marker(c, alphabet) {
                cells.push(None);
            } else if alphabet.id_of(c).is_some() {
                cells.push(Some(c));
            } else {
                return Err(ImportError::UnknownSymbol {
                    row: height,
                    symbol: c,
                });
            }
        }
        height += 1;
    }

    let Some(width) = width else {
        return Err(ImportError::EmptyGrid);
    };

    let mut board = CandidateBoard::new(cells.len(), alphabet);
    for (i, symbol) in cells.into_iter().enumerate() {
        if let Some(symbol) = symbol {
            // Presence in the alphabet was checked during the line scan.
            if let Some(id) = alphabet.id_of(symbol) {
                #[expect(clippy::cast_possible_truncation)]
                board.fix(CellIndex::new(i as u16), id);
            }
        }
    }

    Ok(GridImport {
        width,
        height,
        board,
    })
}

/// Parses a group list: one group per line, whitespace-separated zero-based
/// cell indices. Blank lines and `#` comments are skipped.
///
/// Cell-range and group-size validation is the core's job and happens when
/// the groups are handed to [`Puzzle::new`]; this function only insists the
/// text is well-formed.
///
/// # Errors
///
/// Returns [`ImportError::BadGroupLine`] for a line with a token that does
/// not parse as a cell index.
pub fn parse_groups(text: &str) -> Result<Vec<Group>, ImportError> {
    let mut groups = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }
        let cells: Result<Vec<CellIndex>, _> = line
            .split_whitespace()
            .map(|token| token.parse::<u16>().map(CellIndex::new))
            .collect();
        match cells {
            Ok(cells) => groups.push(Group::new(cells)),
            Err(_) => return Err(ImportError::BadGroupLine { line: i + 1 }),
        }
    }
    Ok(groups)
}

/// Parses a grid and assembles a validated puzzle in one step.
///
/// # Errors
///
/// Returns any [`parse_grid`] error, plus the wrapped
/// [`StructuralError`] when the grid and groups do not form a consistent
/// puzzle.
pub fn import_puzzle(
    alphabet: Alphabet,
    grid_text: &str,
    groups: Vec<Group>,
) -> Result<Puzzle, ImportError> {
    let import = parse_grid(grid_text, &alphabet)?;
    Ok(Puzzle::new(alphabet, import.into_board(), groups)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::new("1234".chars()).unwrap()
    }

    #[test]
    fn test_parse_grid_with_markers_and_whitespace() {
        let import = parse_grid("1 2 . _\n0 . 3 4\n", &alphabet()).unwrap();
        assert_eq!(import.width(), 4);
        assert_eq!(import.height(), 2);
        assert_eq!(import.board().cell_count(), 8);
        assert_eq!(import.board().fixed_count(), 4);
    }

    #[test]
    fn test_zero_is_a_symbol_when_in_alphabet() {
        let alphabet = Alphabet::new("protein0".chars()).unwrap();
        let import = parse_grid("p0\n..\n", &alphabet).unwrap();
        assert_eq!(import.board().fixed_count(), 2);
    }

    #[test]
    fn test_rejects_empty_and_blank_text() {
        assert_eq!(
            parse_grid("", &alphabet()).unwrap_err(),
            ImportError::EmptyGrid
        );
        assert_eq!(
            parse_grid("  \n\n  ", &alphabet()).unwrap_err(),
            ImportError::EmptyGrid
        );
    }

    #[test]
    fn test_rejects_ragged_rows() {
        assert_eq!(
            parse_grid("12\n123\n", &alphabet()).unwrap_err(),
            ImportError::RaggedRow {
                row: 1,
                len: 3,
                expected: 2,
            }
        );
    }

    #[test]
    fn test_rejects_unknown_symbols() {
        assert_eq!(
            parse_grid("12\n1x\n", &alphabet()).unwrap_err(),
            ImportError::UnknownSymbol {
                row: 1,
                symbol: 'x',
            }
        );
    }

    #[test]
    fn test_parse_groups() {
        let groups = parse_groups("0 1 2\n# comment line\n3 4 5 # trailing\n\n").unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 3);
        assert_eq!(groups[1].cells()[0], CellIndex::new(3));
    }

    #[test]
    fn test_parse_groups_rejects_bad_tokens() {
        assert_eq!(
            parse_groups("0 1\n2 oops\n"),
            Err(ImportError::BadGroupLine { line: 2 })
        );
    }

    #[test]
    fn test_import_puzzle_surfaces_structural_errors() {
        // A 3-cell group on a 4-symbol alphabet is structurally invalid.
        let groups = parse_groups("0 1 2\n").unwrap();
        let err = import_puzzle(alphabet(), "....\n", groups).unwrap_err();
        assert!(matches!(err, ImportError::Structural(_)));
    }
}
