//! Boundary conditions - How out-of-range neighbors resolve.
//!
//! Rules read cells on both sides of every cell; at the edges of the row
//! some of those neighbors do not exist. A `BoundaryConditions` value decides
//! what they are:
//!
//! - `Circular` treats the row as a ring (indices wrap around).
//! - `Fixed` treats the row as embedded in an infinite row whose cells left
//!   of index 0 all hold one constant state and whose cells right of the last
//!   index all hold another.
//!
//! Boundary conditions hold no per-generation state, so one value can be
//! shared by any number of automata.
//!
//! # Examples
//!
//! ```
//! use automata1d::{BoundaryConditions, CellState, Generation};
//!
//! let gen = Generation::parse("OO.O.").unwrap();
//!
//! let circular = BoundaryConditions::Circular;
//! assert_eq!(circular.neighbor(0, -1, &gen).unwrap(), gen.cell_at(4).unwrap());
//!
//! let fixed = BoundaryConditions::fixed(CellState::Off, CellState::On);
//! assert_eq!(fixed.neighbor(4, 1, &gen).unwrap().state(), CellState::On);
//! ```

use crate::cell::{Cell, CellState};
use crate::error::{AutomatonError, Result};
use crate::generation::Generation;
use serde::{Deserialize, Serialize};

/// Policy for resolving neighbor lookups past either edge of a generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryConditions {
    /// Wrap around: the row is a ring.
    #[default]
    Circular,

    /// Constant edge states.
    Fixed {
        /// State of every cell with index < 0
        left: CellState,
        /// State of every cell with index >= size
        right: CellState,
    },
}

impl BoundaryConditions {
    #[inline]
    pub const fn circular() -> Self {
        BoundaryConditions::Circular
    }

    /// Fixed boundary with constant `left` and `right` edge states.
    #[inline]
    pub const fn fixed(left: CellState, right: CellState) -> Self {
        BoundaryConditions::Fixed { left, right }
    }

    /// Left edge state for fixed boundaries, `None` for circular ones.
    pub fn left_state(&self) -> Option<CellState> {
        match self {
            BoundaryConditions::Circular => None,
            BoundaryConditions::Fixed { left, .. } => Some(*left),
        }
    }

    /// Right edge state for fixed boundaries, `None` for circular ones.
    pub fn right_state(&self) -> Option<CellState> {
        match self {
            BoundaryConditions::Circular => None,
            BoundaryConditions::Fixed { right, .. } => Some(*right),
        }
    }

    /// Resolve the neighbor at `cell_idx + offset` in `gen`.
    ///
    /// # Errors
    ///
    /// Returns `AutomatonError::IndexOutOfBounds` when an in-range lookup is
    /// impossible: a circular lookup against an empty generation, or a
    /// `cell_idx` that lies outside `gen`.
    pub fn neighbor(&self, cell_idx: usize, offset: isize, gen: &Generation) -> Result<Cell> {
        let size = gen.size() as isize;
        let raw = cell_idx as isize + offset;

        match *self {
            BoundaryConditions::Circular => {
                if size == 0 {
                    return Err(AutomatonError::IndexOutOfBounds {
                        index: cell_idx,
                        length: 0,
                    });
                }
                gen.cell_at(raw.rem_euclid(size))
            }
            BoundaryConditions::Fixed { left, right } => {
                if raw < 0 {
                    Ok(Cell::new(left))
                } else if raw >= size {
                    Ok(Cell::new(right))
                } else {
                    gen.cell_at(raw)
                }
            }
        }
    }
}
