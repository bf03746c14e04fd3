//! Build a rule 90 automaton from a JSON config, print its rule table,
//! its history and how much each step changed.
//!
//! Run with `cargo run --example rule90`.

use anyhow::{Context, Result};
use automata1d::measurements::{densities, hamming_distances};
use automata1d::{AutomatonConfig, RuleTable};

const CONFIG: &str = r#"{
    "rule": {"elementary": 90},
    "boundary": "circular",
    "initial": "...............O...............",
    "steps": 15
}"#;

fn main() -> Result<()> {
    let config = AutomatonConfig::from_json(CONFIG).context("parsing config")?;
    let ca = config.build().context("building automaton")?;

    println!("Rule {}", ca.rule().rule_num());
    println!("{}", ca.rule().render_table());
    println!();
    println!("{}", ca.render_history());
    println!();

    let changes = hamming_distances(&ca);
    let density = densities(&ca);
    for (step, d) in changes.iter().enumerate() {
        println!(
            "step {:>2} -> {:>2}: {:>2} cells changed, density {:.3}",
            step,
            step + 1,
            d,
            density[step + 1]
        );
    }

    Ok(())
}
