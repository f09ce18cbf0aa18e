//! Bidirectional cell/group incidence mapping.

use tinyvec::TinyVec;

use crate::{
    error::StructuralError,
    group::Group,
    index::{CellIndex, GroupId},
};

/// Immutable map answering "which groups contain cell X" and "which cells
/// are in group G" in O(1).
///
/// The index is built once from the puzzle's group list and never mutated
/// afterward; the whole search tree shares it read-only. Building it is also
/// where the structural invariants of the group list are enforced: every
/// group must have exactly as many distinct cells as the alphabet has
/// symbols, and every referenced cell must exist on the board.
///
/// Cells rarely belong to more than a few groups (three in classic sudoku),
/// so the per-cell adjacency lists are inline [`TinyVec`]s that only spill to
/// the heap for unusually overlapping group layouts.
///
/// # Examples
///
/// ```
/// use symbolace_core::{CellIndex, Group, GroupId, IncidenceIndex};
///
/// let groups = vec![
///     Group::new([CellIndex::new(0), CellIndex::new(1)]),
///     Group::new([CellIndex::new(0), CellIndex::new(2)]),
/// ];
/// let index = IncidenceIndex::build(3, 2, &groups)?;
///
/// assert_eq!(index.groups_of(CellIndex::new(0)), &[GroupId::new(0), GroupId::new(1)]);
/// assert_eq!(index.cells_of(GroupId::new(1)), &[CellIndex::new(0), CellIndex::new(2)]);
/// # Ok::<(), symbolace_core::StructuralError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IncidenceIndex {
    cell_to_groups: Box<[TinyVec<[GroupId; 4]>]>,
    group_to_cells: Box<[Box<[CellIndex]>]>,
}

impl IncidenceIndex {
    /// Builds the incidence index for `groups` over a board of `cell_count`
    /// cells and an alphabet of `alphabet_len` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::GroupSizeMismatch`] if any group's distinct
    /// cell count differs from `alphabet_len`, and
    /// [`StructuralError::CellOutOfRange`] if any group references a cell at
    /// or beyond `cell_count`.
    pub fn build(
        cell_count: usize,
        alphabet_len: usize,
        groups: &[Group],
    ) -> Result<Self, StructuralError> {
        let mut cell_to_groups = vec![TinyVec::default(); cell_count].into_boxed_slice();
        let mut group_to_cells = Vec::with_capacity(groups.len());

        for (i, group) in groups.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let id = GroupId::new(i as u16);
            if group.len() != alphabet_len {
                return Err(StructuralError::GroupSizeMismatch {
                    group: id,
                    len: group.len(),
                    expected: alphabet_len,
                });
            }
            for &cell in group.cells() {
                if cell.index() >= cell_count {
                    return Err(StructuralError::CellOutOfRange {
                        group: id,
                        cell,
                        cell_count,
                    });
                }
                cell_to_groups[cell.index()].push(id);
            }
            group_to_cells.push(group.cells().to_vec().into_boxed_slice());
        }

        Ok(Self {
            cell_to_groups,
            group_to_cells: group_to_cells.into_boxed_slice(),
        })
    }

    /// Returns the groups containing `cell`, in group id order.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range for the indexed board.
    #[inline]
    #[must_use]
    pub fn groups_of(&self, cell: CellIndex) -> &[GroupId] {
        &self.cell_to_groups[cell.index()]
    }

    /// Returns the cells of `group`, sorted ascending.
    ///
    /// # Panics
    ///
    /// Panics if `group` is out of range for the indexed group list.
    #[inline]
    #[must_use]
    pub fn cells_of(&self, group: GroupId) -> &[CellIndex] {
        &self.group_to_cells[group.index()]
    }

    /// Returns the number of indexed groups.
    #[inline]
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.group_to_cells.len()
    }

    /// Returns the number of cells of the indexed board.
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cell_to_groups.len()
    }

    /// Returns an iterator over all group ids, in ascending order.
    #[expect(clippy::cast_possible_truncation)]
    pub fn group_ids(&self) -> impl Iterator<Item = GroupId> + use<> {
        (0..self.group_to_cells.len()).map(|i| GroupId::new(i as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(i: u16) -> CellIndex {
        CellIndex::new(i)
    }

    #[test]
    fn test_bidirectional_lookup() {
        let groups = vec![
            Group::new([cell(0), cell(1), cell(2)]),
            Group::new([cell(0), cell(3), cell(4)]),
            Group::new([cell(2), cell(4), cell(5)]),
        ];
        let index = IncidenceIndex::build(6, 3, &groups).unwrap();

        assert_eq!(index.group_count(), 3);
        assert_eq!(index.cell_count(), 6);
        assert_eq!(
            index.groups_of(cell(0)),
            &[GroupId::new(0), GroupId::new(1)]
        );
        assert_eq!(index.groups_of(cell(5)), &[GroupId::new(2)]);
        assert_eq!(
            index.cells_of(GroupId::new(0)),
            &[cell(0), cell(1), cell(2)]
        );
    }

    #[test]
    fn test_rejects_undersized_group() {
        // A 3-cell group on a 4-symbol puzzle can never hold all 4 symbols.
        let groups = vec![Group::new([cell(0), cell(1), cell(2)])];
        assert_eq!(
            IncidenceIndex::build(16, 4, &groups).unwrap_err(),
            StructuralError::GroupSizeMismatch {
                group: GroupId::new(0),
                len: 3,
                expected: 4,
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_cells_via_size() {
        // Duplicates collapse during Group construction, so the shrunken
        // group fails the size check.
        let groups = vec![Group::new([cell(0), cell(0), cell(1)])];
        assert!(matches!(
            IncidenceIndex::build(4, 3, &groups),
            Err(StructuralError::GroupSizeMismatch { len: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_cell() {
        let groups = vec![Group::new([cell(0), cell(9)])];
        assert_eq!(
            IncidenceIndex::build(4, 2, &groups).unwrap_err(),
            StructuralError::CellOutOfRange {
                group: GroupId::new(0),
                cell: cell(9),
                cell_count: 4,
            }
        );
    }

    #[test]
    fn test_cell_in_no_group() {
        let groups = vec![Group::new([cell(0), cell(1)])];
        let index = IncidenceIndex::build(3, 2, &groups).unwrap();
        assert!(index.groups_of(cell(2)).is_empty());
    }
}
