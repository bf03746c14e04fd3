//! TotalisticRule - Two-state totalistic rules with radius 2.
//!
//! The next state depends only on how many of the five cells in the window
//! `[i-2, i+2]` are ON, so the table has six entries (counts 0 through 5)
//! and there are 64 totalistic rules.

use super::{check_neighborhood, RuleTable};
use crate::cell::Cell;
use crate::error::{AutomatonError, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

const NUM_SUBRULES: usize = 6;

const RADIUS: usize = 2;

/// Totalistic rule (radius 2, 6 subrules).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TotalisticRule {
    rule_num: u8,
}

impl TotalisticRule {
    /// Family name.
    pub const FAMILY: &'static str = "totalistic";

    /// Largest legal rule number.
    pub const MAX_RULE_NUM: u32 = 63;

    /// Create a totalistic rule.
    ///
    /// # Errors
    ///
    /// Returns `AutomatonError::InvalidRuleNumber` if `rule_num > 63`.
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

impl RuleTable for TotalisticRule {
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

    /// Count the ON cells in the window.
    fn subrule_index(&self, neighborhood: &[Cell]) -> Result<usize> {
        check_neighborhood(neighborhood, self.neighborhood_size())?;
        Ok(neighborhood.iter().filter(|cell| cell.is_on()).count())
    }

    /// Header of counts "5 4 3 2 1 0", then the next state for each count.
    fn render_table(&self) -> String {
        let header = (0..NUM_SUBRULES).rev().join(" ");
        let results = (0..NUM_SUBRULES)
            .rev()
            .map(|k| self.next_state(k).symbol())
            .join(" ");

        format!("{}\n{}", header, results)
    }
}

impl TryFrom<u32> for TotalisticRule {
    type Error = AutomatonError;

    fn try_from(rule_num: u32) -> Result<Self> {
        TotalisticRule::new(rule_num)
    }
}

impl From<TotalisticRule> for u32 {
    fn from(rule: TotalisticRule) -> Self {
        rule.rule_num as u32
    }
}

impl fmt::Display for TotalisticRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;

    fn cells(text: &str) -> Vec<Cell> {
        text.chars()
            .map(|c| Cell::new(CellState::from_symbol(c).unwrap()))
            .collect()
    }

    #[test]
    fn test_range_validation() {
        assert!(TotalisticRule::new(63).is_ok());
        assert!(matches!(
            TotalisticRule::new(64),
            Err(AutomatonError::InvalidRuleNumber {
                family: "totalistic",
                rule_num: 64,
                max: 63
            })
        ));
    }

    #[test]
    fn test_subrule_index_is_on_count() {
        let rule = TotalisticRule::new(0).unwrap();
        assert_eq!(rule.subrule_index(&cells(".....")).unwrap(), 0);
        assert_eq!(rule.subrule_index(&cells("O...O")).unwrap(), 2);
        assert_eq!(rule.subrule_index(&cells(".O.O.")).unwrap(), 2);
        assert_eq!(rule.subrule_index(&cells("OOOOO")).unwrap(), 5);
        assert!(rule.subrule_index(&cells("...")).is_err());
    }

    #[test]
    fn test_evolve_cell_rule_22() {
        // 22 = 0b010110: counts 1, 2 and 4 turn ON
        let rule = TotalisticRule::new(22).unwrap();
        for (text, on) in [
            (".....", false),
            ("..O..", true),
            ("O...O", true),
            ("O.O.O", false),
            ("OO.OO", true),
            ("OOOOO", false),
        ] {
            let evolved = rule.evolve_cell(&cells(text)).unwrap();
            assert_eq!(evolved.state().is_on(), on, "neighborhood {}", text);
        }
    }

    #[test]
    fn test_render_table_rule_22() {
        let rule = TotalisticRule::new(22).unwrap();
        assert_eq!(rule.render_table(), "5 4 3 2 1 0\n. O . O O .");
    }
}
