//! Automata1D - One-Dimensional Two-State Cellular Automata
//!
//! Automata1D simulates a finite row of cells, each ON or OFF, evolving
//! generation by generation under a deterministic local rule and a boundary
//! policy for the row's edges. Generations are computed lazily and cached, and
//! every evolved cell remembers which rule-table entry produced it so that the
//! measurement layer can report how the rule was used.
//!
//! # Architecture
//!
//! - **CellState / Cell / EvolvedCell**: the two-state alphabet and cells
//! - **Generation**: an immutable row, packed into a `BitVec`
//! - **BoundaryConditions**: circular (wrap-around) or fixed edge states
//! - **Rules**: the `RuleTable` contract with elementary (radius 1, 8
//!   subrules) and totalistic (radius 2, 6 subrules) families
//! - **Automaton**: append-only generation history with lazy extension
//! - **Measurements**: Hamming distances, subrule histograms, densities
//! - **AutomatonConfig**: JSON-serializable description of an automaton
//!
//! # Examples
//!
//! ## Rule 90
//!
//! ```
//! use automata1d::{Automaton, BoundaryConditions, Generation, Rule};
//!
//! let rule = Rule::elementary(90).unwrap();
//! let init = Generation::parse("...O...").unwrap();
//! let mut ca = Automaton::new(rule, init, BoundaryConditions::Circular);
//!
//! ca.evolve(3).unwrap();
//! assert_eq!(
//!     ca.render_history(),
//!     "...O...\n..O.O..\n.O...O.\nO.O.O.O"
//! );
//! ```
//!
//! ## Subrule Usage
//!
//! ```
//! use automata1d::measurements::subrule_count;
//! use automata1d::{Automaton, BoundaryConditions, CellState, Generation, Rule};
//!
//! let rule = Rule::totalistic(22).unwrap();
//! let init = Generation::parse("..O..O..").unwrap();
//! let bc = BoundaryConditions::fixed(CellState::Off, CellState::Off);
//! let mut ca = Automaton::new(rule, init, bc);
//!
//! let counts = subrule_count(0, &mut ca).unwrap();
//! assert_eq!(counts.len(), 6);
//! assert_eq!(counts.iter().sum::<usize>(), 8);
//! ```
//!
//! # Logging
//!
//! The crate logs through the `log` facade: cache extension and persistence
//! at `debug`, every computed generation at `trace`. Install any `log`
//! backend to see it.

// Module declarations
pub mod boundary;
pub mod cell;
pub mod error;
pub mod generation;
pub mod rules;

pub mod automaton;
pub mod automaton_config;
pub mod measurements;

// Re-exports for convenient access
pub use boundary::BoundaryConditions;
pub use cell::{Cell, CellState, EvolvedCell, OFF_SYMBOL, ON_SYMBOL};
pub use error::{AutomatonError, Result};
pub use generation::Generation;
pub use rules::{ElementaryRule, Rule, RuleTable, TotalisticRule};

pub use automaton::{Automaton, AutomatonBuilder};
pub use automaton_config::AutomatonConfig;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Automata1D";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
