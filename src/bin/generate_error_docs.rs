//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `ParseError` and `SolverError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use cryptarith::errors::ParseError;
use cryptarith::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            let code = error.code();
            let description = error.description();
            let details = error.details();
            let help = error.help();

            println!("### {}: {}\n", code, description);
            println!("**Details:** {}\n", details);

            if let Some(help_text) = help {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// Helper to create all `ParseError` variants for documentation
fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::WrongWordCount { found: 2 },
        ParseError::EmptyWord { index: 1 },
        ParseError::InvalidLetter { word: "SEN0".to_string(), invalid_char: '0' },
        ParseError::WordTooLong {
            word: "A".repeat(40),
            len: 40,
            max: cryptarith::puzzle::MAX_WORD_LEN,
        },
        ParseError::InvalidEquation {
            input: "SEND MORE MONEY".to_string(),
            reason: "expected '+'".to_string(),
        },
    ]
}

/// Helper to create all `SolverError` variants for documentation
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::MalformedPuzzle(Box::new(ParseError::WrongWordCount { found: 2 })),
        SolverError::InternalInconsistency {
            context: "column 0 does not add up: [D=7, E=5, Y=3, C0=0, C1=1]".to_string(),
        },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Solver Errors (S001–S002)](#solver-errors)");
    println!("- [Parse Errors (E001–E005)](#parse-errors)");
    println!("- [How to Use Error Codes](#how-to-use-error-codes)\n");

    generate_solver_error_docs();
    generate_parse_error_docs();

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("{}", ParseError::WrongWordCount { found: 2 }.display_detailed());
    println!("```\n");
    println!("1. Note the error code (e.g., `E001`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps\n");

    println!("## Error Display Formats\n");
    println!("Errors are displayed in two formats:\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}

fn generate_solver_error_docs() {
    println!("## Solver Errors\n");
    println!("Top-level errors from the solver. These wrap puzzle errors or report a solution that failed its final check.\n");
    generate_error_docs!(all_solver_error_variants());
}

fn generate_parse_error_docs() {
    println!("## Parse Errors\n");
    println!("Errors that occur when reading the three words of a puzzle.\n");
    generate_error_docs!(all_parse_error_variants());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_documented_code_is_unique() {
        let mut codes: Vec<&str> = all_parse_error_variants().iter().map(ParseError::code).collect();
        codes.extend(all_solver_error_variants().iter().map(SolverError::code));

        let unique: HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
        assert_eq!(codes, vec!["E001", "E002", "E003", "E004", "E005", "S001", "S002"]);
    }

    #[test]
    fn test_help_text_presence() {
        assert!(all_parse_error_variants().iter().all(|e| e.help().is_some()));
        // a wrapped ParseError carries its own help
        for e in all_solver_error_variants() {
            match e {
                SolverError::MalformedPuzzle(_) => assert!(e.help().is_none()),
                SolverError::InternalInconsistency { .. } => assert!(e.help().is_some()),
            }
        }
    }
}
