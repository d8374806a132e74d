use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use cryptarith::format;
use cryptarith::model::{ColumnCoverage, ModelConfig};
use cryptarith::puzzle::Puzzle;
use cryptarith::solver;
use cryptarith::solver::SolveOutcome;

/// Exit code when the puzzle is well-formed but has no solution
const NO_SOLUTION_EXIT: u8 = 2;

/// Column coverage as accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CoverageArg {
    /// Constrain every column; a shorter addend contributes 0
    Padded,
    /// Constrain only columns where all three words have a letter
    Shared,
}

impl From<CoverageArg> for ColumnCoverage {
    fn from(arg: CoverageArg) -> Self {
        match arg {
            CoverageArg::Padded => ColumnCoverage::Padded,
            CoverageArg::Shared => ColumnCoverage::Shared,
        }
    }
}

/// Cryptarithmetic puzzle solver (WORD + WORD = WORD)
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// The puzzle to solve (e.g., "SEND + MORE = MONEY")
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    equation: Option<String>,

    /// Read the puzzle from a file (an equation line, or one word per line)
    #[arg(short, long)]
    file: Option<String>,

    /// Which columns get an arithmetic constraint when the addends differ in length
    #[arg(short, long, value_enum, default_value_t = CoverageArg::Padded)]
    coverage: CoverageArg,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point of the cryptarith CLI solver.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let debug_enabled = cli.verbose || std::env::var(cryptarith::log::DEBUG_ENV_VAR).is_ok();
    cryptarith::log::init_logger(debug_enabled);

    match try_main(&cli) {
        Ok(code) => code,
        Err(e) => {
            // Print the error message to stderr, with detailed formatting if it's a SolverError
            if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
                eprintln!("Error: {}", solver_err.display_detailed());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Core application logic for the CLI.
///
/// Steps:
/// 1. Read the puzzle from the argument or the file.
/// 2. Solve it.
/// 3. Print one line of digits per word on stdout, or a "no solution" notice.
/// 4. Print the equation and search statistics on stderr.
fn try_main(cli: &Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    // 1. Read the puzzle
    let puzzle = match (&cli.equation, &cli.file) {
        (_, Some(path)) => Puzzle::load_from_path(path)?,
        (Some(equation), None) => equation.parse::<Puzzle>().map_err(solver::SolverError::from)?,
        (None, None) => return Err("no puzzle given (pass an equation or --file)".into()),
    };

    let config = ModelConfig { coverage: cli.coverage.into() };
    log::info!("Solving {puzzle} ({} coverage)", config.coverage);

    // 2. Solve
    let t_solve = Instant::now();
    let result = solver::solve_puzzle(&puzzle, config)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 3. Print the solution, or say there is none
    let code = match &result.outcome {
        SolveOutcome::Solved(assignment) => {
            print!("{}", format::solution_to_string(&result.puzzle, assignment));
            eprintln!("✓ {}", format::equation_string(&result.puzzle, assignment));
            eprintln!("  {}", format::letter_table(assignment));
            ExitCode::SUCCESS
        }
        SolveOutcome::NoSolution => {
            eprintln!("✗ No solution found for {}", result.puzzle);
            ExitCode::from(NO_SOLUTION_EXIT)
        }
    };

    // 4. Diagnostics
    eprintln!("Searched in {:.3}s ({}).", solve_secs, result.stats);

    Ok(code)
}
