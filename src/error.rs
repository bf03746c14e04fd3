//! Error types for the Automata1D crate.
//!
//! This module provides a unified error type for all operations in the crate,
//! using the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// The main error type for Automata1D operations.
///
/// All variants describe programming or input errors detected at the point of
/// use. None of them are transient, so callers should not retry.
#[derive(Error, Debug)]
pub enum AutomatonError {
    /// Rule number outside the legal range of its rule family
    #[error("Invalid rule number {rule_num} for {family} rule: must be in 0..={max}")]
    InvalidRuleNumber {
        /// Rule family name ("elementary" or "totalistic")
        family: &'static str,
        /// The rejected rule number
        rule_num: u32,
        /// Largest legal rule number for the family
        max: u32,
    },

    /// Negative step number requested from an automaton
    #[error("Invalid step number {0}: step numbers must be non-negative")]
    InvalidStepNumber(isize),

    /// Character that is not a recognized cell symbol
    #[error("Invalid cell symbol {0:?}: expected '.' or 'O'")]
    InvalidSymbol(char),

    /// Two generations of different sizes were compared
    #[error("Generation size mismatch: expected {expected}, got {actual}")]
    SizeMismatch {
        /// Size of the first generation
        expected: usize,
        /// Size of the second generation
        actual: usize,
    },

    /// Index out of bounds
    #[error("Index out of bounds: index {index}, length {length}")]
    IndexOutOfBounds {
        /// The index that was accessed
        index: usize,
        /// The valid length
        length: usize,
    },

    /// Neighborhood slice has the wrong width for the rule
    #[error("Invalid neighborhood size: expected {expected}, got {actual}")]
    InvalidNeighborhoodSize {
        /// Width the rule reads (2 * radius + 1)
        expected: usize,
        /// Width that was supplied
        actual: usize,
    },

    /// Builder was asked to build without a required component
    #[error("Missing automaton component: {0}")]
    MissingComponent(&'static str),

    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error occurred
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

/// A specialized `Result` type for Automata1D operations.
///
/// This is a type alias for `Result<T, AutomatonError>` and is used
/// throughout the crate for consistency.
pub type Result<T> = std::result::Result<T, AutomatonError>;
