//! Automaton configuration serialization.
//!
//! An `AutomatonConfig` captures everything needed to recreate an automaton:
//! the rule, the boundary policy, the seed row and how many steps to evolve.
//! Configs are plain serde data and round-trip through JSON.
//!
//! # Example
//!
//! ```
//! use automata1d::AutomatonConfig;
//!
//! let json = r#"{
//!     "rule": {"elementary": 90},
//!     "boundary": "circular",
//!     "initial": "...O...",
//!     "steps": 2
//! }"#;
//!
//! let config = AutomatonConfig::from_json(json).unwrap();
//! let ca = config.build().unwrap();
//! assert_eq!(ca.total_steps(), 2);
//! assert_eq!(ca.render_current(), ".O...O.");
//! ```

use crate::automaton::Automaton;
use crate::boundary::BoundaryConditions;
use crate::error::{AutomatonError, Result};
use crate::generation::Generation;
use crate::rules::Rule;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable description of an automaton.
///
/// Rule numbers are range-checked while deserializing, so a config holding
/// an invalid rule cannot be constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutomatonConfig {
    /// Rule family and number
    pub rule: Rule,

    /// Edge policy
    #[serde(default)]
    pub boundary: BoundaryConditions,

    /// Seed generation as symbol text ('.' and 'O')
    pub initial: String,

    /// Number of steps to evolve after construction
    #[serde(default)]
    pub steps: usize,
}

impl AutomatonConfig {
    /// Create a config that builds the seed generation only.
    pub fn new(rule: Rule, boundary: BoundaryConditions, initial: impl Into<String>) -> Self {
        Self {
            rule,
            boundary,
            initial: initial.into(),
            steps: 0,
        }
    }

    /// Set the number of steps to evolve on build.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Build the automaton and evolve it `steps` steps.
    ///
    /// # Errors
    ///
    /// Returns `AutomatonError::InvalidSymbol` if `initial` contains a
    /// character other than '.' or 'O', and `AutomatonError::InvalidParameter`
    /// if `steps` exceeds `isize::MAX`.
    pub fn build(&self) -> Result<Automaton> {
        let steps = isize::try_from(self.steps).map_err(|_| {
            AutomatonError::InvalidParameter(format!("steps {} is too large", self.steps))
        })?;
        let init = Generation::parse(&self.initial)?;
        let mut automaton = Automaton::new(self.rule, init, self.boundary);
        automaton.generation(steps)?;
        Ok(automaton)
    }

    /// Export config to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AutomatonError::Other(format!("Failed to serialize config to JSON: {}", e))
        })
    }

    /// Export config to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Import config from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            AutomatonError::Other(format!("Failed to deserialize config from JSON: {}", e))
        })
    }

    /// Import config from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
