//! Rules - How a cell's next state follows from its neighborhood.
//!
//! Every rule family implements the [`RuleTable`] trait. A rule is a table
//! indexed by "subrule": the elementary family selects the subrule from the
//! exact bit pattern of a 3-cell neighborhood, the totalistic family from the
//! number of ON cells in a 5-cell neighborhood. The rule number, read in
//! binary, is the table itself: entry `k` is bit `k` of the rule number
//! (bit 0 = least significant).
//!
//! [`Rule`] is the closed set of families an automaton can run.
//!
//! # Examples
//!
//! ```
//! use automata1d::{BoundaryConditions, Generation, Rule, RuleTable};
//!
//! let rule = Rule::elementary(90).unwrap();
//! let gen = Generation::parse("...O...").unwrap();
//! let next = rule.evolve(&gen, &BoundaryConditions::Circular).unwrap();
//! assert_eq!(next.render(), "..O.O..");
//! ```

pub mod elementary;
pub mod totalistic;

pub use elementary::ElementaryRule;
pub use totalistic::TotalisticRule;

use crate::boundary::BoundaryConditions;
use crate::cell::{Cell, CellState, EvolvedCell};
use crate::error::{AutomatonError, Result};
use crate::generation::Generation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared contract of all rule families.
///
/// Implementors supply the table layout (`radius`, `num_subrules`,
/// `subrule_index`, `render_table`); neighborhood gathering, cell evolution
/// and whole-generation evolution are provided.
pub trait RuleTable {
    /// The rule number whose bits form the table.
    fn rule_num(&self) -> u32;

    /// Number of cells on each side of the center cell that the rule reads.
    fn radius(&self) -> usize;

    /// Number of table entries (the length of the rule table).
    fn num_subrules(&self) -> usize;

    /// Classify a neighborhood into its table entry.
    ///
    /// # Errors
    ///
    /// Returns `AutomatonError::InvalidNeighborhoodSize` if the slice is not
    /// exactly `2 * radius + 1` cells wide.
    fn subrule_index(&self, neighborhood: &[Cell]) -> Result<usize>;

    /// Render the rule table using the cell symbols.
    fn render_table(&self) -> String;

    /// Width of a neighborhood (`2 * radius + 1`).
    #[inline]
    fn neighborhood_size(&self) -> usize {
        2 * self.radius() + 1
    }

    /// Next state for table entry `subrule`.
    #[inline]
    fn next_state(&self, subrule: usize) -> CellState {
        debug_assert!(subrule < self.num_subrules());
        CellState::from((self.rule_num() >> subrule) & 1 == 1)
    }

    /// Gather the neighborhood of `cell_idx`, left to right.
    ///
    /// The center cell is read directly from the generation; every other
    /// cell goes through the boundary conditions.
    fn neighborhood(
        &self,
        cell_idx: usize,
        gen: &Generation,
        bc: &BoundaryConditions,
    ) -> Result<Vec<Cell>> {
        let radius = self.radius() as isize;
        (-radius..=radius)
            .map(|offset| {
                if offset == 0 {
                    gen.cell_at(cell_idx as isize)
                } else {
                    bc.neighbor(cell_idx, offset, gen)
                }
            })
            .collect()
    }

    /// Apply the rule to one neighborhood.
    fn evolve_cell(&self, neighborhood: &[Cell]) -> Result<EvolvedCell> {
        let subrule = self.subrule_index(neighborhood)?;
        Ok(EvolvedCell::new(self.next_state(subrule), subrule))
    }

    /// Compute the next generation.
    ///
    /// Every neighborhood reads only `gen`, so cells are independent within
    /// a step; they are visited and stored in index order.
    fn evolve(&self, gen: &Generation, bc: &BoundaryConditions) -> Result<Generation> {
        let next = (0..gen.size())
            .map(|i| {
                let neighborhood = self.neighborhood(i, gen, bc)?;
                self.evolve_cell(&neighborhood)
            })
            .collect::<Result<Vec<_>>>()?;
        Generation::from_evolved(&next)
    }
}

/// Check a neighborhood slice against the width a rule reads.
#[inline]
pub(crate) fn check_neighborhood(neighborhood: &[Cell], expected: usize) -> Result<()> {
    if neighborhood.len() != expected {
        return Err(AutomatonError::InvalidNeighborhoodSize {
            expected,
            actual: neighborhood.len(),
        });
    }
    Ok(())
}

/// Rule families an automaton can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    /// Radius 1, 8-entry table indexed by neighborhood bit pattern
    Elementary(ElementaryRule),

    /// Radius 2, 6-entry table indexed by ON count
    Totalistic(TotalisticRule),
}

impl Rule {
    /// Construct an elementary rule (0..=255).
    pub fn elementary(rule_num: u32) -> Result<Self> {
        ElementaryRule::new(rule_num).map(Rule::Elementary)
    }

    /// Construct a totalistic rule (0..=63).
    pub fn totalistic(rule_num: u32) -> Result<Self> {
        TotalisticRule::new(rule_num).map(Rule::Totalistic)
    }

    /// Family name, as used in error messages and configs.
    pub fn family(&self) -> &'static str {
        match self {
            Rule::Elementary(_) => ElementaryRule::FAMILY,
            Rule::Totalistic(_) => TotalisticRule::FAMILY,
        }
    }

    fn inner(&self) -> &dyn RuleTable {
        match self {
            Rule::Elementary(rule) => rule,
            Rule::Totalistic(rule) => rule,
        }
    }
}

impl RuleTable for Rule {
    fn rule_num(&self) -> u32 {
        self.inner().rule_num()
    }

    fn radius(&self) -> usize {
        self.inner().radius()
    }

    fn num_subrules(&self) -> usize {
        self.inner().num_subrules()
    }

    fn subrule_index(&self, neighborhood: &[Cell]) -> Result<usize> {
        self.inner().subrule_index(neighborhood)
    }

    fn render_table(&self) -> String {
        self.inner().render_table()
    }
}

impl From<ElementaryRule> for Rule {
    fn from(rule: ElementaryRule) -> Self {
        Rule::Elementary(rule)
    }
}

impl From<TotalisticRule> for Rule {
    fn from(rule: TotalisticRule) -> Self {
        Rule::Totalistic(rule)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_table())
    }
}
