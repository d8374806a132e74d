//! The backtracking solver for additive cryptarithmetic puzzles.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with two variants:
//!
//! - S001: `MalformedPuzzle` (Puzzle text or words rejected (wraps [`ParseError`]))
//! - S002: `InternalInconsistency` (A returned assignment broke an invariant)
//!
//! A puzzle without a solution is *not* an error: it comes back as
//! `Ok` with [`SolveOutcome::NoSolution`].
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use cryptarith::solver::{self, SolveOutcome};
//! use cryptarith::model::ModelConfig;
//!
//! let result = solver::solve_equation("SEND + MORE = MONEY", ModelConfig::default())?;
//! if let SolveOutcome::Solved(assignment) = &result.outcome {
//!     print!("{}", cryptarith::format::solution_to_string(&result.puzzle, assignment));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Handling Errors with Detailed Messages
//!
//! ```
//! use cryptarith::solver::{self, SolverError};
//! use cryptarith::model::ModelConfig;
//!
//! match solver::solve_words(&["SEND", "MORE"], ModelConfig::default()) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => {
//!         // Error code: S001, caused by E001
//!         eprintln!("{}", e.display_detailed());
//!         assert!(matches!(e, SolverError::MalformedPuzzle(_)));
//!     }
//! }
//! ```

use std::fmt;
use std::fmt::{Display, Formatter};

use log::{debug, info, trace};

use crate::assignment::Assignment;
use crate::consistency::{audit_solution, is_consistent};
use crate::errors::ParseError;
use crate::model::{Model, ModelConfig};
use crate::ordering::{order_domain_values, select_unassigned_variable};
use crate::puzzle::Puzzle;
use crate::puzzle_char::BASE;

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A complete assignment satisfying every constraint.
    Solved(Assignment),
    /// Every branch was exhausted without a complete consistent assignment.
    NoSolution,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes, i.e. variables selected for branching
    pub nodes: usize,
    /// Tentative assignments undone after their subtree failed
    pub backtracks: usize,
    /// Deepest number of simultaneously open search frames
    pub max_depth: usize,
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} nodes, {} backtracks, max depth {}", self.nodes, self.backtracks, self.max_depth)
    }
}

/// Successful solver run (whether or not a solution exists).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The validated puzzle that was solved
    pub puzzle: Puzzle,
    pub outcome: SolveOutcome,
    pub stats: SearchStats,
}

impl SolveResult {
    /// The solution, if one was found.
    #[must_use]
    pub fn solution(&self) -> Option<&Assignment> {
        match &self.outcome {
            SolveOutcome::Solved(assignment) => Some(assignment),
            SolveOutcome::NoSolution => None,
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution().is_some()
    }
}

/// Unified error type for the solver pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The puzzle was rejected before a model was built.
    ///
    /// These originate from puzzle validation (`ParseError`), which we box to
    /// keep the error type size stable.
    #[error("malformed puzzle: {0}")]
    MalformedPuzzle(#[from] Box<ParseError>),

    /// The search returned an assignment that fails an invariant when
    /// re-checked from scratch.
    ///
    /// This means the model or the search has a defect (for instance a column
    /// left without a constraint); it is never a property of the puzzle.
    #[error("internal inconsistency: {context}")]
    InternalInconsistency { context: String },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::MalformedPuzzle(_) => "S001",
            SolverError::InternalInconsistency { .. } => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::MalformedPuzzle(_) => "Puzzle text or words rejected",
            SolverError::InternalInconsistency { .. } => "A returned assignment broke an invariant",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::MalformedPuzzle(_) => "The puzzle could not be read. This wraps an underlying ParseError (see Parse Errors section for specific error codes). No search is attempted.",
            SolverError::InternalInconsistency { .. } => "The search reported success, but re-checking the assignment found two letters sharing a digit, a leading zero, an unassigned variable, or a column that does not add up. This is a bug in the solver, not in the puzzle.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::InternalInconsistency { .. } => Some("This is an internal error. Please report the puzzle that triggered it."),
            SolverError::MalformedPuzzle(_) => None, // ParseError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::MalformedPuzzle(pe) => {
                // delegate to ParseError's detailed display
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
            SolverError::InternalInconsistency { .. } => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// Everything the search reads but never changes.
struct SearchCtx<'a> {
    model: &'a Model,
}

/// Depth-first backtracking search over `assignment`.
///
/// Returns `true` with `assignment` complete and consistent, or `false` with
/// `assignment` exactly as it was on entry.
///
/// Each frame picks one variable ([`select_unassigned_variable`]), tries its
/// digits in ascending order ([`order_domain_values`]) and keeps the first
/// one that passes [`is_consistent`] and whose subtree succeeds. A digit whose
/// subtree fails is removed again before the next one is tried.
pub fn backtracking_search(model: &Model, assignment: &mut Assignment, stats: &mut SearchStats) -> bool {
    let ctx = SearchCtx { model };
    recursive_search(&ctx, assignment, stats, 0)
}

fn recursive_search(
    ctx: &SearchCtx,
    assignment: &mut Assignment,
    stats: &mut SearchStats,
    depth: usize,
) -> bool {
    let model = ctx.model;

    // Base case: nothing left to assign.
    let Some(var) = select_unassigned_variable(&model.variables, assignment, &model.domains, &model.constraints) else {
        debug_assert!(
            assignment.contains_all_vars(&model.variables),
            "no variable selected but assignment is incomplete"
        );
        return true;
    };

    stats.nodes += 1;
    stats.max_depth = stats.max_depth.max(depth + 1);

    #[cfg(debug_assertions)]
    let on_entry = assignment.clone();

    for value in order_domain_values(var, &model.domains) {
        if !is_consistent(var, value, assignment, &model.constraints) {
            continue;
        }

        trace!("{:depth$}{var} = {value}", "");
        assignment.set(var, value);
        if recursive_search(ctx, assignment, stats, depth + 1) {
            return true;
        }

        // Backtrack: undo only what this frame set.
        assignment.remove(var);
        stats.backtracks += 1;
    }

    #[cfg(debug_assertions)]
    debug_assert_eq!(*assignment, on_entry, "failed frame for {var} must restore the assignment");

    false
}

/// Solve a validated puzzle.
///
/// Builds the model, runs [`backtracking_search`] from the model's initial
/// assignment and re-checks any solution with [`audit_solution`].
///
/// # Errors
///
/// Returns `SolverError::InternalInconsistency` if the solution found fails the
/// audit. An unsolvable puzzle is `Ok` with [`SolveOutcome::NoSolution`].
pub fn solve_puzzle(puzzle: &Puzzle, config: ModelConfig) -> Result<SolveResult, SolverError> {
    let model = Model::build(puzzle, config);
    let mut stats = SearchStats::default();

    let num_letters = model.letters().count();
    if num_letters > usize::from(BASE) {
        info!("{puzzle}: {num_letters} distinct letters but only {BASE} digits");
        return Ok(SolveResult { puzzle: puzzle.clone(), outcome: SolveOutcome::NoSolution, stats });
    }

    let mut assignment = model.initial_assignment.clone();
    let found = backtracking_search(&model, &mut assignment, &mut stats);
    debug!("search for {puzzle} finished: {stats}");

    let outcome = if found {
        audit_solution(&model, &assignment)
            .map_err(|context| SolverError::InternalInconsistency { context })?;
        info!("solved {puzzle}");
        SolveOutcome::Solved(assignment)
    } else {
        debug_assert_eq!(assignment, model.initial_assignment, "failed search must leave the initial assignment");
        info!("no solution for {puzzle}");
        SolveOutcome::NoSolution
    };

    Ok(SolveResult { puzzle: puzzle.clone(), outcome, stats })
}

/// Validate three words (addend, addend, sum) and solve them.
///
/// # Errors
///
/// Returns `SolverError::MalformedPuzzle` before any search step if the words
/// are not exactly three non-empty `A`-`Z` words, otherwise as
/// [`solve_puzzle`].
pub fn solve_words<S: AsRef<str>>(words: &[S], config: ModelConfig) -> Result<SolveResult, SolverError> {
    let puzzle = Puzzle::new(words)?;
    solve_puzzle(&puzzle, config)
}

/// Parse puzzle text (`SEND + MORE = MONEY`, or one word per line) and solve it.
///
/// # Errors
///
/// Returns `SolverError::MalformedPuzzle` if the text cannot be read as a
/// puzzle, otherwise as [`solve_puzzle`].
pub fn solve_equation(input: &str, config: ModelConfig) -> Result<SolveResult, SolverError> {
    let puzzle = input.parse::<Puzzle>()?;
    solve_puzzle(&puzzle, config)
}
