//! ElementaryRule - Wolfram's elementary cellular automata.
//!
//! An elementary rule reads a 3-cell neighborhood (left, center, right).
//! The neighborhood is read as a 3-bit number with the left cell as the
//! most significant bit, giving a subrule index in 0..8. The next state is
//! bit `index` of the rule number, so there are 256 elementary rules.
//!
//! # Examples
//!
//! ```
//! use automata1d::{ElementaryRule, RuleTable};
//!
//! let rule = ElementaryRule::new(30).unwrap();
//! assert_eq!(
//!     rule.render_table(),
//!     "OOO OO. O.O O.. .OO .O. ..O ...\n .   .   .   O   O   O   O   . "
//! );
//! ```

use super::{check_neighborhood, RuleTable};
use crate::cell::{Cell, CellState};
use crate::error::{AutomatonError, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of table entries
const NUM_SUBRULES: usize = 8;

/// Neighborhood radius
const RADIUS: usize = 1;

/// Elementary rule (radius 1, 8 subrules).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ElementaryRule {
    rule_num: u8,
}

impl ElementaryRule {
    /// Family name.
    pub const FAMILY: &'static str = "elementary";

    /// Largest legal rule number.
    pub const MAX_RULE_NUM: u32 = 255;

    /// Create an elementary rule.
    ///
    /// # Errors
    ///
    /// Returns `AutomatonError::InvalidRuleNumber` if `rule_num > 255`.
    pub fn new(rule_num: u32) -> Result<Self> {
        if rule_num > Self::MAX_RULE_NUM {
            return Err(AutomatonError::InvalidRuleNumber {
                family: Self::FAMILY,
                rule_num,
                max: Self::MAX_RULE_NUM,
            });
        }

        Ok(Self {
            rule_num: rule_num as u8,
        })
    }
}

impl RuleTable for ElementaryRule {
    #[inline]
    fn rule_num(&self) -> u32 {
        self.rule_num as u32
    }

    #[inline]
    fn radius(&self) -> usize {
        RADIUS
    }

    #[inline]
    fn num_subrules(&self) -> usize {
        NUM_SUBRULES
    }

    /// Read the neighborhood as a binary number, leftmost cell first.
    fn subrule_index(&self, neighborhood: &[Cell]) -> Result<usize> {
        check_neighborhood(neighborhood, self.neighborhood_size())?;
        Ok(neighborhood
            .iter()
            .fold(0, |acc, cell| (acc << 1) | cell.is_on() as usize))
    }

    /// Two lines: the eight neighborhood patterns in descending order, then
    /// each pattern's next state aligned under its center symbol.
    fn render_table(&self) -> String {
        let width = self.neighborhood_size();

        let patterns = (0..NUM_SUBRULES)
            .rev()
            .map(|k| {
                (0..width)
                    .rev()
                    .map(|bit| CellState::from((k >> bit) & 1 == 1).symbol())
                    .collect::<String>()
            })
            .join(" ");

        let results = (0..NUM_SUBRULES)
            .rev()
            .map(|k| self.next_state(k).symbol())
            .join("   ");

        format!("{}\n {} ", patterns, results)
    }
}

impl TryFrom<u32> for ElementaryRule {
    type Error = AutomatonError;

    fn try_from(rule_num: u32) -> Result<Self> {
        ElementaryRule::new(rule_num)
    }
}

impl From<ElementaryRule> for u32 {
    fn from(rule: ElementaryRule) -> Self {
        rule.rule_num as u32
    }
}

impl fmt::Display for ElementaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_table())
    }
}
