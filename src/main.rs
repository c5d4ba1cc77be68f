use std::io;

use clap::Parser;
use sudoku_backtrack::Sudoku;

/// The grid the program solves when nothing is piped in.
#[rustfmt::skip]
static BUILTIN_PUZZLE: [u8; 81] = [
    5, 3, 0, 0, 7, 0, 0, 0, 0,
    6, 0, 0, 1, 9, 5, 0, 0, 0,
    0, 9, 8, 0, 0, 0, 0, 6, 0,
    8, 0, 0, 0, 6, 0, 0, 0, 3,
    4, 0, 0, 8, 0, 3, 0, 0, 1,
    7, 0, 0, 0, 2, 0, 0, 0, 6,
    0, 6, 0, 0, 0, 0, 2, 8, 0,
    0, 0, 0, 4, 1, 9, 0, 0, 5,
    0, 0, 0, 0, 8, 0, 0, 7, 9,
];

/// Solve a sudoku by brute force backtracking.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Read the puzzle from stdin instead of solving the built-in grid.
    ///
    /// The first 81 digits fill the grid row by row, 0 stands for an
    /// empty cell and every other character is skipped.
    #[arg(long)]
    stdin: bool,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut sudoku = if args.stdin {
        Sudoku::from_reader(io::stdin().lock())?
    } else {
        Sudoku::from_bytes(BUILTIN_PUZZLE).expect("the built-in puzzle is well-formed")
    };

    log::debug!("starting with {} clues", sudoku.n_clues());
    print!("{}", sudoku);

    if sudoku.solve() {
        println!("Solved:");
        print!("{}", sudoku);
    } else {
        log::debug!("search exhausted without a solution");
        println!("Can't solve");
    }

    // an unsolvable puzzle is a result, not a program failure
    Ok(())
}
