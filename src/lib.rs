// Reusable library API, shared by the CLI and the error-docs generator
pub mod assignment;
pub mod consistency;
pub mod constraints;
pub mod domain;
pub mod errors;
pub mod format;
pub mod log;
pub mod model;
pub mod ordering;
pub mod puzzle;
pub mod solver;
pub mod variable;

mod puzzle_char;
