//! Classic group layouts: sudoku boxes and latin squares.

use symbolace_core::{Alphabet, CellIndex, Group, StructuralError};

/// Symbols used for classic numbered puzzles, in conventional order.
const CLASSIC_SYMBOLS: &str = "123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Builds the conventional alphabet for a square puzzle of the given side:
/// digits `1`-`9`, then uppercase letters, then lowercase letters.
///
/// # Errors
///
/// Returns [`StructuralError::AlphabetTooLarge`] for sides beyond the 61
/// conventional symbols.
pub fn classic_alphabet(side: usize) -> Result<Alphabet, StructuralError> {
    if side > CLASSIC_SYMBOLS.chars().count() {
        return Err(StructuralError::AlphabetTooLarge { len: side });
    }
    Alphabet::new(CLASSIC_SYMBOLS.chars().take(side))
}

/// Builds the groups of a classic sudoku with `box_w` x `box_h` boxes: the
/// rows, columns, and boxes of the resulting `(box_w * box_h)`-sided grid.
///
/// Classic 9x9 sudoku is `classic_groups(3, 3)`; the 6x6 variant with wide
/// boxes is `classic_groups(3, 2)`.
///
/// # Panics
///
/// Panics if either box dimension is zero or the grid side exceeds 64 (the
/// alphabet capacity a matching puzzle could never satisfy anyway).
#[must_use]
pub fn classic_groups(box_w: usize, box_h: usize) -> Vec<Group> {
    assert!(box_w > 0 && box_h > 0, "box dimensions must be positive");
    let side = box_w * box_h;
    assert!(side <= 64, "grid side exceeds the alphabet capacity");

    let mut groups = latin_groups(side);
    for band in 0..box_w {
        for stack in 0..box_h {
            groups.push(Group::new((0..side).map(|i| {
                let (dr, dc) = (i / box_w, i % box_w);
                cell_at(side, band * box_h + dr, stack * box_w + dc)
            })));
        }
    }
    groups
}

/// Builds the row and column groups of a `side` x `side` latin square.
///
/// This is the right layout for grids whose side is not a product of box
/// dimensions.
///
/// # Panics
///
/// Panics if `side` is zero or exceeds 64.
#[must_use]
pub fn latin_groups(side: usize) -> Vec<Group> {
    assert!(side > 0, "grid side must be positive");
    assert!(side <= 64, "grid side exceeds the alphabet capacity");

    let mut groups = Vec::with_capacity(2 * side);
    for row in 0..side {
        groups.push(Group::new((0..side).map(|col| cell_at(side, row, col))));
    }
    for col in 0..side {
        groups.push(Group::new((0..side).map(|row| cell_at(side, row, col))));
    }
    groups
}

#[expect(clippy::cast_possible_truncation)]
fn cell_at(side: usize, row: usize, col: usize) -> CellIndex {
    CellIndex::new((row * side + col) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_alphabet_progression() {
        let nine = classic_alphabet(9).unwrap();
        assert_eq!(nine.symbols(), &['1', '2', '3', '4', '5', '6', '7', '8', '9']);

        let sixteen = classic_alphabet(16).unwrap();
        assert_eq!(sixteen.symbols()[9], 'A');
        assert_eq!(sixteen.symbols()[15], 'G');

        assert!(classic_alphabet(61).is_ok());
        assert_eq!(
            classic_alphabet(62).unwrap_err(),
            StructuralError::AlphabetTooLarge { len: 62 }
        );
    }

    #[test]
    fn test_nine_by_nine_layout() {
        let groups = classic_groups(3, 3);
        assert_eq!(groups.len(), 27);
        for group in &groups {
            assert_eq!(group.len(), 9);
        }

        // Every cell sits in exactly one row, one column, and one box.
        let mut membership = [0usize; 81];
        for group in &groups {
            for &cell in group.cells() {
                membership[cell.index()] += 1;
            }
        }
        assert!(membership.iter().all(|&count| count == 3));
    }

    #[test]
    fn test_rectangular_boxes() {
        // 6x6 sudoku with 3-wide, 2-tall boxes.
        let groups = classic_groups(3, 2);
        assert_eq!(groups.len(), 6 + 6 + 6);
        for group in &groups {
            assert_eq!(group.len(), 6);
        }

        // The first box covers rows 0-1, columns 0-2.
        let first_box = &groups[12];
        let cells: Vec<usize> = first_box.cells().iter().map(|c| c.index()).collect();
        assert_eq!(cells, vec![0, 1, 2, 6, 7, 8]);
    }

    #[test]
    fn test_latin_groups_cover_rows_and_columns() {
        let groups = latin_groups(3);
        assert_eq!(groups.len(), 6);
        let row0: Vec<usize> = groups[0].cells().iter().map(|c| c.index()).collect();
        let col0: Vec<usize> = groups[3].cells().iter().map(|c| c.index()).collect();
        assert_eq!(row0, vec![0, 1, 2]);
        assert_eq!(col0, vec![0, 3, 6]);
    }
}
