//! Automaton - Lazily evolved, cached generation history.
//!
//! An `Automaton` runs one [`Rule`] under one [`BoundaryConditions`] policy
//! starting from a seed generation. Generations are computed on demand and
//! kept forever: the history only grows, and a step that has been computed
//! is never computed again.
//!
//! # Cache Model
//!
//! With `N` cached generations the automaton knows steps `0..N`.
//! - [`Automaton::evolve`] appends exactly `num_steps` generations.
//! - [`Automaton::generation`] returns a cached step directly, or first
//!   extends the history to exactly that step.
//! - [`Automaton::cached_generation`] never extends and only needs `&self`.
//!
//! Extension needs `&mut self`, so writers are exclusive per automaton while
//! any number of readers can share already-cached steps.
//!
//! # Examples
//!
//! ```
//! use automata1d::{Automaton, BoundaryConditions, Generation, Rule};
//!
//! let rule = Rule::elementary(90).unwrap();
//! let init = Generation::parse("...O...").unwrap();
//! let mut ca = Automaton::new(rule, init, BoundaryConditions::Circular);
//!
//! assert_eq!(ca.generation(1).unwrap().render(), "..O.O..");
//! assert_eq!(ca.total_steps(), 1);
//! assert_eq!(ca.render_history(), "...O...\n..O.O..");
//! ```

use crate::automaton_config::AutomatonConfig;
use crate::boundary::BoundaryConditions;
use crate::error::{AutomatonError, Result};
use crate::generation::Generation;
use crate::rules::{Rule, RuleTable};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// One-dimensional two-state cellular automaton with full history.
#[derive(Clone, Debug)]
pub struct Automaton {
    rule: Rule,
    boundary: BoundaryConditions,

    /// Cached history; index = step number, never empty
    generations: Vec<Generation>,
}

impl Automaton {
    /// Create an automaton whose step 0 is `init`.
    pub fn new(rule: impl Into<Rule>, init: Generation, boundary: BoundaryConditions) -> Self {
        Self {
            rule: rule.into(),
            boundary,
            generations: vec![init],
        }
    }

    /// Start building an automaton component by component.
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::default()
    }

    /// Rule applied at every step.
    #[inline]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Edge policy applied at every step.
    #[inline]
    pub fn boundary_conditions(&self) -> &BoundaryConditions {
        &self.boundary
    }

    /// Highest cached step number.
    #[inline]
    pub fn total_steps(&self) -> usize {
        self.generations.len() - 1
    }

    /// All cached generations, oldest first.
    #[inline]
    pub fn generations(&self) -> &[Generation] {
        &self.generations
    }

    /// Most recently computed generation.
    #[inline]
    pub fn current(&self) -> &Generation {
        &self.generations[self.generations.len() - 1]
    }

    /// Cached generation at `step`, without evolving.
    #[inline]
    pub fn cached_generation(&self, step: usize) -> Option<&Generation> {
        self.generations.get(step)
    }

    /// Evolve `num_steps` more generations and append them to the history.
    ///
    /// A non-positive `num_steps` leaves the automaton unchanged.
    pub fn evolve(&mut self, num_steps: isize) -> Result<()> {
        if num_steps <= 0 {
            log::debug!("ignoring request to evolve {} steps", num_steps);
            return Ok(());
        }

        let num_steps = num_steps as usize;
        log::debug!(
            "evolving {} steps from step {} ({} rule {})",
            num_steps,
            self.total_steps(),
            self.rule.family(),
            self.rule.rule_num()
        );

        self.generations.reserve(num_steps);
        for _ in 0..num_steps {
            let next = self.rule.evolve(self.current(), &self.boundary)?;
            log::trace!("step {}: {}", self.generations.len(), next);
            self.generations.push(next);
        }

        Ok(())
    }

    /// Return the generation at `step`, evolving first if it is not cached.
    ///
    /// Steps already cached are returned as-is; a far-future step computes
    /// every intermediate step exactly once.
    ///
    /// # Errors
    ///
    /// Returns `AutomatonError::InvalidStepNumber` if `step < 0`.
    pub fn generation(&mut self, step: isize) -> Result<&Generation> {
        if step < 0 {
            return Err(AutomatonError::InvalidStepNumber(step));
        }

        let step = step as usize;
        if step >= self.generations.len() {
            self.evolve((step - self.total_steps()) as isize)?;
        }

        Ok(&self.generations[step])
    }

    /// Render the most recently computed generation.
    pub fn render_current(&self) -> String {
        self.current().render()
    }

    /// Render every cached generation, one per line, oldest first.
    pub fn render_history(&self) -> String {
        self.generations.iter().map(Generation::render).join("\n")
    }

    /// Configuration that rebuilds this automaton's history.
    pub fn to_config(&self) -> AutomatonConfig {
        AutomatonConfig {
            rule: self.rule,
            boundary: self.boundary,
            initial: self.generations[0].render(),
            steps: self.total_steps(),
        }
    }

    /// Save the automaton, including its cached history, to a binary file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let snapshot = SnapshotRef {
            rule: &self.rule,
            boundary: &self.boundary,
            generations: &self.generations,
        };

        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, &snapshot)?;
        writer.flush()?;
        log::debug!(
            "saved automaton with {} generations to {}",
            self.generations.len(),
            path.display()
        );
        Ok(())
    }

    /// Load an automaton saved with [`Automaton::save`].
    ///
    /// # Errors
    ///
    /// Returns `AutomatonError::InvalidParameter` if the stored history is
    /// empty or mixes generation sizes.
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let snapshot: Snapshot = bincode::deserialize_from(reader)?;

        let size = match snapshot.generations.first() {
            Some(first) => first.size(),
            None => {
                return Err(AutomatonError::InvalidParameter(
                    "snapshot has no generations".into(),
                ))
            }
        };
        if let Some(bad) = snapshot.generations.iter().find(|g| g.size() != size) {
            return Err(AutomatonError::InvalidParameter(format!(
                "snapshot mixes generation sizes {} and {}",
                size,
                bad.size()
            )));
        }

        log::debug!(
            "loaded automaton with {} generations from {}",
            snapshot.generations.len(),
            path.display()
        );
        Ok(Self {
            rule: snapshot.rule,
            boundary: snapshot.boundary,
            generations: snapshot.generations,
        })
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.current(), f)
    }
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    rule: &'a Rule,
    boundary: &'a BoundaryConditions,
    generations: &'a [Generation],
}

#[derive(Deserialize)]
struct Snapshot {
    rule: Rule,
    boundary: BoundaryConditions,
    generations: Vec<Generation>,
}

/// Builder that refuses to produce an automaton with a missing component.
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    rule: Option<Rule>,
    initial: Option<Generation>,
    boundary: Option<BoundaryConditions>,
}

impl AutomatonBuilder {
    /// Set the rule the automaton runs.
    pub fn rule(mut self, rule: impl Into<Rule>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Set the seed generation (step 0).
    pub fn initial(mut self, init: Generation) -> Self {
        self.initial = Some(init);
        self
    }

    /// Set the edge policy.
    pub fn boundary(mut self, boundary: BoundaryConditions) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Build the automaton.
    ///
    /// # Errors
    ///
    /// Returns `AutomatonError::MissingComponent` naming the first absent
    /// component.
    pub fn build(self) -> Result<Automaton> {
        let rule = self.rule.ok_or(AutomatonError::MissingComponent("rule"))?;
        let init = self
            .initial
            .ok_or(AutomatonError::MissingComponent("initial generation"))?;
        let boundary = self
            .boundary
            .ok_or(AutomatonError::MissingComponent("boundary conditions"))?;

        Ok(Automaton::new(rule, init, boundary))
    }
}
