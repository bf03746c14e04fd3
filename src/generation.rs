//! Generation - One time-step of the whole row.
//!
//! A `Generation` is an immutable, fixed-size, ordered sequence of cells.
//! Cell states are packed into a `BitVec<u32, Lsb0>` (ON = 1). Generations
//! produced by a rule additionally carry the subrule index of every cell,
//! which the measurement layer reads back.
//!
//! # Examples
//!
//! ```
//! use automata1d::{CellState, Generation};
//!
//! let gen: Generation = "OO.O.".parse().unwrap();
//! assert_eq!(gen.size(), 5);
//! assert_eq!(gen.cell_at(2).unwrap().state(), CellState::Off);
//! assert_eq!(gen.render(), "OO.O.");
//! ```

use crate::cell::{Cell, CellState, EvolvedCell};
use crate::error::{AutomatonError, Result};
use bitvec::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Immutable row of cells.
///
/// Equality compares cell states only; subrule provenance is ignored, so a
/// seed generation equals an evolved one with the same rendering.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "GenerationRepr", try_from = "GenerationRepr")]
pub struct Generation {
    /// Packed cell states, one bit per cell
    bits: BitVec<u32, Lsb0>,

    /// Subrule index per cell, present only for generations built by a rule
    subrules: Option<Box<[u8]>>,
}

impl Generation {
    /// Construct a generation from a slice of states.
    pub fn new(states: &[CellState]) -> Self {
        Self {
            bits: states.iter().map(|s| s.is_on()).collect(),
            subrules: None,
        }
    }

    /// Construct a generation from a slice of cells.
    ///
    /// The cells are copied, so later changes to the caller's buffer never
    /// reach the generation.
    pub fn from_cells(cells: &[Cell]) -> Self {
        Self {
            bits: cells.iter().map(|c| c.is_on()).collect(),
            subrules: None,
        }
    }

    /// Construct a generation of evolved cells.
    ///
    /// This is the only constructor that records subrule provenance.
    ///
    /// # Errors
    ///
    /// Returns `AutomatonError::InvalidParameter` if a subrule index does not
    /// fit in a byte. Rule tables have at most 8 entries.
    pub fn from_evolved(cells: &[EvolvedCell]) -> Result<Self> {
        let bits = cells.iter().map(|c| c.state().is_on()).collect();
        let subrules = cells
            .iter()
            .map(|c| {
                u8::try_from(c.subrule()).map_err(|_| {
                    AutomatonError::InvalidParameter(format!(
                        "subrule index {} does not fit in a byte",
                        c.subrule()
                    ))
                })
            })
            .collect::<Result<Box<[u8]>>>()?;

        Ok(Self {
            bits,
            subrules: Some(subrules),
        })
    }

    /// Parse a generation from symbol text ('.' for OFF, 'O' for ON).
    ///
    /// # Errors
    ///
    /// Returns `AutomatonError::InvalidSymbol` on the first unrecognized
    /// character. Nothing is built in that case.
    pub fn parse(text: &str) -> Result<Self> {
        let states = text
            .chars()
            .map(CellState::from_symbol)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(&states))
    }

    /// Build a random generation with `round(size * pct)` ON cells.
    ///
    /// `pct` should be in range [0.0, 1.0].
    pub fn random<R: Rng>(size: usize, pct: f64, rng: &mut R) -> Self {
        debug_assert!((0.0..=1.0).contains(&pct));
        let mut bits: BitVec<u32, Lsb0> = BitVec::repeat(false, size);
        let num = (((size as f64) * pct).round() as usize).min(size);

        let mut count = 0;
        while count < num {
            let idx = rng.gen_range(0..size);
            if !bits[idx] {
                bits.set(idx, true);
                count += 1;
            }
        }

        Self {
            bits,
            subrules: None,
        }
    }

    /// Number of cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Return the cell at `index`.
    ///
    /// Negative indices are clamped to 0 rather than rejected. This is kept
    /// for compatibility with existing callers and is the only accessor that
    /// clamps; new code should prefer [`Generation::cell`].
    ///
    /// # Errors
    ///
    /// Returns `AutomatonError::IndexOutOfBounds` if the (clamped) index is
    /// `>= size()`.
    pub fn cell_at(&self, index: isize) -> Result<Cell> {
        let idx = index.max(0) as usize;
        self.cell(idx).ok_or(AutomatonError::IndexOutOfBounds {
            index: idx,
            length: self.size(),
        })
    }

    /// Return the cell at `index`, or `None` when out of range.
    #[inline]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.bits
            .get(index)
            .map(|bit| Cell::new(CellState::from(*bit)))
    }

    /// Return the cell at `index` with the subrule that produced it.
    ///
    /// Returns `None` when out of range or when this generation was not
    /// produced by a rule.
    pub fn evolved_cell_at(&self, index: usize) -> Option<EvolvedCell> {
        let subrules = self.subrules.as_ref()?;
        let cell = self.cell(index)?;
        Some(EvolvedCell::new(cell.state(), subrules[index] as usize))
    }

    /// Subrule index of every cell, if this generation was produced by a rule.
    #[inline]
    pub fn subrules(&self) -> Option<&[u8]> {
        self.subrules.as_deref()
    }

    /// Iterate the cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bits
            .iter()
            .by_vals()
            .map(|on| Cell::new(CellState::from(on)))
    }

    /// Count of ON cells.
    #[inline]
    pub fn num_on(&self) -> usize {
        self.bits.count_ones()
    }

    /// Packed cell states (ON = 1).
    #[inline]
    pub fn bits(&self) -> &BitSlice<u32, Lsb0> {
        &self.bits
    }

    /// Concatenate the symbol of every cell, in order.
    pub fn render(&self) -> String {
        self.cells().map(|c| c.state().symbol()).collect()
    }
}

impl PartialEq for Generation {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for Generation {}

impl FromStr for Generation {
    type Err = AutomatonError;

    fn from_str(s: &str) -> Result<Self> {
        Generation::parse(s)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Serialized form: the rendered row plus optional subrule indices.
#[derive(Serialize, Deserialize)]
struct GenerationRepr {
    cells: String,
    subrules: Option<Vec<u8>>,
}

impl From<Generation> for GenerationRepr {
    fn from(gen: Generation) -> Self {
        Self {
            cells: gen.render(),
            subrules: gen.subrules.map(|s| s.into_vec()),
        }
    }
}

impl TryFrom<GenerationRepr> for Generation {
    type Error = AutomatonError;

    fn try_from(repr: GenerationRepr) -> Result<Self> {
        let mut gen = Generation::parse(&repr.cells)?;
        if let Some(subrules) = repr.subrules {
            if subrules.len() != gen.size() {
                return Err(AutomatonError::InvalidParameter(format!(
                    "generation has {} cells but {} subrule indices",
                    gen.size(),
                    subrules.len()
                )));
            }
            gen.subrules = Some(subrules.into_boxed_slice());
        }
        Ok(gen)
    }
}
