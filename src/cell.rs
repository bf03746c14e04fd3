//! Cell states and cells.
//!
//! A row is made of two-state cells. `CellState` is the alphabet, `Cell`
//! holds one state, and `EvolvedCell` additionally records which entry of
//! the rule table (the "subrule") produced it.
//!
//! # Examples
//!
//! ```
//! use automata1d::{Cell, CellState};
//!
//! assert_eq!(CellState::On.symbol(), 'O');
//! assert_eq!(CellState::from_symbol('.').unwrap(), CellState::Off);
//!
//! let cell = Cell::new(CellState::On);
//! assert!(cell.is_on());
//! assert_eq!(cell.to_string(), "O");
//! ```

use crate::error::{AutomatonError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol used to render an OFF cell.
pub const OFF_SYMBOL: char = '.';

/// Symbol used to render an ON cell.
pub const ON_SYMBOL: char = 'O';

/// The two-valued cell alphabet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    #[default]
    Off,
    On,
}

impl CellState {
    /// Return the display symbol for this state.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            CellState::Off => OFF_SYMBOL,
            CellState::On => ON_SYMBOL,
        }
    }

    /// Return the state represented by `symbol`.
    ///
    /// # Errors
    ///
    /// Returns `AutomatonError::InvalidSymbol` for anything other than
    /// `'.'` or `'O'`.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            OFF_SYMBOL => Ok(CellState::Off),
            ON_SYMBOL => Ok(CellState::On),
            other => Err(AutomatonError::InvalidSymbol(other)),
        }
    }

    /// True for `CellState::On`.
    #[inline]
    pub const fn is_on(self) -> bool {
        matches!(self, CellState::On)
    }
}

impl From<bool> for CellState {
    #[inline]
    fn from(on: bool) -> Self {
        if on {
            CellState::On
        } else {
            CellState::Off
        }
    }
}

impl From<CellState> for bool {
    #[inline]
    fn from(state: CellState) -> Self {
        state.is_on()
    }
}

impl TryFrom<char> for CellState {
    type Error = AutomatonError;

    fn try_from(symbol: char) -> Result<Self> {
        CellState::from_symbol(symbol)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single cell of a generation.
///
/// `Cell::default()` is an OFF cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    state: CellState,
}

impl Cell {
    /// Create a cell holding `state`.
    #[inline]
    pub const fn new(state: CellState) -> Self {
        Self { state }
    }

    /// Current state of the cell.
    #[inline]
    pub const fn state(&self) -> CellState {
        self.state
    }

    #[inline]
    pub const fn is_on(&self) -> bool {
        self.state.is_on()
    }
}

impl From<CellState> for Cell {
    #[inline]
    fn from(state: CellState) -> Self {
        Cell::new(state)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state, f)
    }
}

/// A cell produced by applying a rule, tagged with the index of the
/// rule-table entry that determined its state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvolvedCell {
    cell: Cell,
    subrule: usize,
}

impl EvolvedCell {
    /// Create an evolved cell produced by table entry `subrule`.
    #[inline]
    pub const fn new(state: CellState, subrule: usize) -> Self {
        Self {
            cell: Cell::new(state),
            subrule,
        }
    }

    #[inline]
    pub const fn state(&self) -> CellState {
        self.cell.state()
    }

    /// Index of the rule-table entry that produced this cell.
    #[inline]
    pub const fn subrule(&self) -> usize {
        self.subrule
    }

    /// The plain cell, without provenance.
    #[inline]
    pub const fn cell(&self) -> Cell {
        self.cell
    }
}

impl From<EvolvedCell> for Cell {
    #[inline]
    fn from(evolved: EvolvedCell) -> Self {
        evolved.cell
    }
}

impl fmt::Display for EvolvedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cell, f)
    }
}
