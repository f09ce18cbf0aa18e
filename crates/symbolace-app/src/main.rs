//! Console puzzle solver.
//!
//! Reads a puzzle grid from a file, prints it, solves it, and prints the
//! solution — or reports that none exists. Group constraints default to the
//! classic sudoku layout inferred from the grid size and can be overridden
//! with a group file or an explicit box size.
//!
//! ```sh
//! symbolace puzzle.txt
//! symbolace puzzle.txt --box-size 3x2
//! symbolace puzzle.txt --groups groups.txt --alphabet abcd
//! ```

use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use symbolace_core::{Alphabet, Group};
use symbolace_io::{
    ImportError, classic_alphabet, classic_groups, import_puzzle, latin_groups, parse_groups,
    render_board,
};
use symbolace_solver::solve;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle grid file: one row per line, `.`, `_`, or `0` for unknown cells.
    grid: PathBuf,

    /// Group definition file: one group per line, as zero-based cell indices.
    ///
    /// Defaults to the classic sudoku groups for the grid size: rows,
    /// columns, and boxes when the side is a perfect square, rows and
    /// columns only otherwise.
    #[arg(long, value_name = "PATH")]
    groups: Option<PathBuf>,

    /// Alphabet symbols, in candidate order.
    ///
    /// Defaults to `1`-`9` followed by letters, sized to the grid width.
    #[arg(long, value_name = "SYMBOLS")]
    alphabet: Option<String>,

    /// Box size for the default sudoku groups, e.g. `3x2` for 6x6 grids.
    #[arg(long, value_name = "WxH", value_parser = parse_box_size)]
    box_size: Option<(usize, usize)>,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
    let grid_text = fs::read_to_string(&args.grid)?;
    let width = inferred_width(&grid_text).ok_or(ImportError::EmptyGrid)?;

    let alphabet = match &args.alphabet {
        Some(symbols) => Alphabet::new(symbols.chars())?,
        None => classic_alphabet(width)?,
    };

    let groups = match (&args.groups, args.box_size) {
        (Some(path), _) => parse_groups(&fs::read_to_string(path)?)?,
        (None, Some((box_w, box_h))) => classic_groups(box_w, box_h),
        (None, None) => default_groups(alphabet.len()),
    };

    let start = Instant::now();
    let puzzle = import_puzzle(alphabet, &grid_text, groups)?;
    log::info!(
        "imported {} cells and {} groups in {:?}",
        puzzle.board().cell_count(),
        puzzle.groups().len(),
        start.elapsed(),
    );

    println!("{}", render_board(puzzle.board(), puzzle.alphabet(), width));

    let start = Instant::now();
    match solve(&puzzle) {
        Ok(solution) => {
            log::info!(
                "solved in {:?}: {} givens, {} fixed by propagation, {} guesses",
                start.elapsed(),
                solution.givens(),
                solution.fixed_by_propagation(),
                solution.guesses(),
            );
            println!(
                "{}",
                render_board(&solution.to_board(), puzzle.alphabet(), width)
            );
            Ok(true)
        }
        Err(err) => {
            log::info!("search exhausted in {:?}", start.elapsed());
            eprintln!("{err}");
            Ok(false)
        }
    }
}

/// Cell count of the first non-blank grid row.
fn inferred_width(text: &str) -> Option<usize> {
    text.lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).count())
        .find(|&n| n > 0)
}

/// Sudoku groups for perfect-square sides, a plain latin square otherwise.
fn default_groups(side: usize) -> Vec<Group> {
    match (1..=side).find(|s| s * s == side) {
        Some(s) => classic_groups(s, s),
        None => latin_groups(side),
    }
}

fn parse_box_size(s: &str) -> Result<(usize, usize), String> {
    let Some((w, h)) = s.split_once(['x', 'X']) else {
        return Err(format!("expected WxH, got {s:?}"));
    };
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| format!("invalid box dimension {part:?}"))
    };
    Ok((parse(w)?, parse(h)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inferred_width() {
        assert_eq!(inferred_width("53. .7.\n6..\n"), Some(5));
        assert_eq!(inferred_width("\n\n12\n"), Some(2));
        assert_eq!(inferred_width("  \n"), None);
    }

    #[test]
    fn test_parse_box_size() {
        assert_eq!(parse_box_size("3x3"), Ok((3, 3)));
        assert_eq!(parse_box_size("3X2"), Ok((3, 2)));
        assert!(parse_box_size("3").is_err());
        assert!(parse_box_size("0x3").is_err());
        assert!(parse_box_size("3xtwo").is_err());
    }

    #[test]
    fn test_default_groups_shape() {
        // 9: perfect square, gets boxes; 6: latin square only.
        assert_eq!(default_groups(9).len(), 27);
        assert_eq!(default_groups(6).len(), 12);
    }
}
