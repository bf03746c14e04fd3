//! Measurements over an automaton's history.
//!
//! Pure functions that characterize how an automaton evolves: Hamming
//! distances between generations, how often each rule-table entry is used,
//! and the fraction of ON cells. Functions that take `&mut Automaton` may
//! extend its history to reach the requested step; the others read only
//! what is already cached.
//!
//! # Examples
//!
//! ```
//! use automata1d::measurements::{hamming_distance, hamming_distances};
//! use automata1d::{Automaton, BoundaryConditions, Generation, Rule};
//!
//! let g1 = Generation::parse("OO..").unwrap();
//! let g2 = Generation::parse("O.O.").unwrap();
//! assert_eq!(hamming_distance(&g1, &g2).unwrap(), 2);
//!
//! let mut ca = Automaton::new(
//!     Rule::elementary(90).unwrap(),
//!     Generation::parse("...O...").unwrap(),
//!     BoundaryConditions::Circular,
//! );
//! ca.evolve(2).unwrap();
//! assert_eq!(hamming_distances(&ca), vec![3, 4]);
//! ```

use crate::automaton::Automaton;
use crate::error::{AutomatonError, Result};
use crate::generation::Generation;
use crate::rules::RuleTable;

/// Number of positions at which two generations differ.
///
/// # Errors
///
/// Returns `AutomatonError::SizeMismatch` if the generations have different
/// sizes.
pub fn hamming_distance(g1: &Generation, g2: &Generation) -> Result<usize> {
    if g1.size() != g2.size() {
        return Err(AutomatonError::SizeMismatch {
            expected: g1.size(),
            actual: g2.size(),
        });
    }

    Ok(differences(g1, g2))
}

fn differences(g1: &Generation, g2: &Generation) -> usize {
    g1.bits()
        .iter()
        .by_vals()
        .zip(g2.bits().iter().by_vals())
        .filter(|(a, b)| a != b)
        .count()
}

/// Hamming distance between the generations at `step` and `step + 1`.
///
/// Returns 0 without touching the automaton when `step <= 0`. Otherwise the
/// automaton is evolved as far as `step + 1` if needed.
///
/// # Errors
///
/// Returns `AutomatonError::InvalidStepNumber` if `step + 1` overflows.
pub fn step_hamming_distance(step: isize, automaton: &mut Automaton) -> Result<usize> {
    if step <= 0 {
        return Ok(0);
    }

    let next = step
        .checked_add(1)
        .ok_or(AutomatonError::InvalidStepNumber(step))?;
    automaton.generation(next)?;
    let step = step as usize;
    let history = automaton.generations();
    hamming_distance(&history[step], &history[step + 1])
}

/// Hamming distance for each pair of successive cached generations.
///
/// Entry `i` compares steps `i` and `i + 1`; the result has
/// `total_steps()` entries.
pub fn hamming_distances(automaton: &Automaton) -> Vec<usize> {
    automaton
        .generations()
        .windows(2)
        .map(|pair| differences(&pair[0], &pair[1]))
        .collect()
}

/// Histogram of subrule usage when evolving `gen` under the automaton's
/// rule and boundary conditions.
fn classify(gen: &Generation, automaton: &Automaton) -> Result<Vec<usize>> {
    let rule = automaton.rule();
    let bc = automaton.boundary_conditions();
    let mut counts = vec![0; rule.num_subrules()];

    for i in 0..gen.size() {
        let neighborhood = rule.neighborhood(i, gen, bc)?;
        counts[rule.subrule_index(&neighborhood)?] += 1;
    }

    Ok(counts)
}

/// Count how often each subrule is applied to the generation at `step`.
///
/// The result is indexed by subrule and has `num_subrules()` entries; its
/// sum is the row size. A negative `step` yields all zeros.
pub fn subrule_count(step: isize, automaton: &mut Automaton) -> Result<Vec<usize>> {
    if step < 0 {
        return Ok(vec![0; automaton.rule().num_subrules()]);
    }

    automaton.generation(step)?;
    classify(&automaton.generations()[step as usize], automaton)
}

/// Subrule counts for every cached step but the last.
///
/// The result has `total_steps()` entries; entry `i` describes the
/// transition from step `i` to step `i + 1`.
pub fn subrule_counts(automaton: &Automaton) -> Result<Vec<Vec<usize>>> {
    automaton.generations()[..automaton.total_steps()]
        .iter()
        .map(|gen| classify(gen, automaton))
        .collect()
}

/// Subrule histogram read back from the provenance stored in an evolved
/// generation.
///
/// Returns `None` for a generation that was not produced by a rule, or when
/// a stored index does not fit in `num_subrules` entries. For an
/// evolved generation at step `k + 1` this equals `subrule_count(k, ..)`.
pub fn recorded_subrule_count(gen: &Generation, num_subrules: usize) -> Option<Vec<usize>> {
    let subrules = gen.subrules()?;
    let mut counts = vec![0; num_subrules];
    for &k in subrules {
        *counts.get_mut(k as usize)? += 1;
    }
    Some(counts)
}

/// Fraction of ON cells; 0.0 for an empty generation.
pub fn density(gen: &Generation) -> f64 {
    if gen.is_empty() {
        return 0.0;
    }
    gen.num_on() as f64 / gen.size() as f64
}

/// Density of every cached generation, oldest first.
pub fn densities(automaton: &Automaton) -> Vec<f64> {
    automaton.generations().iter().map(density).collect()
}
