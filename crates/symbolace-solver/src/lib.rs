//! Constraint-propagation and backtracking solver for group-constrained
//! symbol placement puzzles.
//!
//! Given a [`Puzzle`](symbolace_core::Puzzle) — an alphabet, a board of
//! candidate sets, and a collection of exactly-once groups — this crate
//! computes a complete assignment satisfying every group, or reports that
//! none exists.
//!
//! Solving proceeds in two phases:
//!
//! 1. **Propagation** ([`propagate`]): two deduction rules, *elimination*
//!    (remove symbols already fixed in a sibling cell) and *unique value*
//!    (a symbol with only one possible home in a group must live there),
//!    applied alternately until a fixpoint. Many puzzles are fully resolved
//!    here without any guessing.
//! 2. **Search** ([`solve`]): depth-first trial assignment over the cells
//!    propagation left ambiguous, re-propagating after every trial and
//!    backtracking on contradiction.
//!
//! Both phases are pure functions over board snapshots: a search branch
//! clones the board, and undoing a failed guess is dropping the clone. The
//! incidence index is shared read-only across the whole search tree.
//!
//! # Examples
//!
//! ```
//! use symbolace_core::{Alphabet, CandidateBoard, CellIndex, Group, Puzzle};
//! use symbolace_solver::solve;
//!
//! // Two cells, two symbols, one group covering both.
//! let alphabet = Alphabet::new(['a', 'b'])?;
//! let mut board = CandidateBoard::new(2, &alphabet);
//! board.fix(CellIndex::new(0), alphabet.id_of('b').unwrap());
//! let puzzle = Puzzle::new(
//!     alphabet,
//!     board,
//!     vec![Group::new([CellIndex::new(0), CellIndex::new(1)])],
//! )?;
//!
//! let solution = solve(&puzzle).expect("solvable");
//! assert_eq!(solution.symbol_at(CellIndex::new(0)), 'b');
//! assert_eq!(solution.symbol_at(CellIndex::new(1)), 'a');
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    propagate::{Contradiction, Propagation, propagate},
    search::{Solution, Unsolvable, solve},
    validator::{board_satisfies_groups, has_conflict},
};

mod propagate;
mod search;
pub mod testing;
mod validator;
