//! Tests for the elementary and totalistic rule families.
//!
//! Tests cover:
//! - Rule number validation
//! - Neighborhood gathering under both boundary policies
//! - Single-step evolution against known patterns
//! - Rule table rendering
//! - Size preservation and saturation properties

use automata1d::{
    AutomatonError, BoundaryConditions, Cell, CellState, ElementaryRule, Generation, Rule,
    RuleTable, TotalisticRule,
};
use proptest::prelude::*;

fn states(cells: &[Cell]) -> String {
    cells.iter().map(|c| c.state().symbol()).collect()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_elementary_range() {
    for n in [0, 1, 30, 90, 110, 255] {
        assert_eq!(ElementaryRule::new(n).unwrap().rule_num(), n);
    }
    for n in [256, 1000, u32::MAX] {
        assert!(matches!(
            ElementaryRule::new(n),
            Err(AutomatonError::InvalidRuleNumber { .. })
        ));
    }
}

#[test]
fn test_totalistic_range() {
    assert_eq!(TotalisticRule::new(0).unwrap().rule_num(), 0);
    assert_eq!(TotalisticRule::new(63).unwrap().rule_num(), 63);
    assert!(TotalisticRule::new(64).is_err());
}

// =============================================================================
// Neighborhoods
// =============================================================================

#[test]
fn test_elementary_neighborhood() {
    let rule = ElementaryRule::new(30).unwrap();
    let gen = Generation::parse("O...O").unwrap();

    let circular = BoundaryConditions::Circular;
    assert_eq!(states(&rule.neighborhood(0, &gen, &circular).unwrap()), "OO.");
    assert_eq!(states(&rule.neighborhood(2, &gen, &circular).unwrap()), "...");
    assert_eq!(states(&rule.neighborhood(4, &gen, &circular).unwrap()), ".OO");

    let fixed = BoundaryConditions::fixed(CellState::Off, CellState::Off);
    assert_eq!(states(&rule.neighborhood(0, &gen, &fixed).unwrap()), ".O.");
    assert_eq!(states(&rule.neighborhood(4, &gen, &fixed).unwrap()), ".O.");
}

#[test]
fn test_totalistic_neighborhood() {
    let rule = TotalisticRule::new(22).unwrap();
    let gen = Generation::parse("O..O..").unwrap();

    let circular = BoundaryConditions::Circular;
    assert_eq!(states(&rule.neighborhood(0, &gen, &circular).unwrap()), "..O..");
    assert_eq!(states(&rule.neighborhood(5, &gen, &circular).unwrap()), "O..O.");

    let fixed = BoundaryConditions::fixed(CellState::On, CellState::Off);
    assert_eq!(states(&rule.neighborhood(0, &gen, &fixed).unwrap()), "OOO..");
    assert_eq!(states(&rule.neighborhood(5, &gen, &fixed).unwrap()), "O....");
}

// =============================================================================
// Evolution
// =============================================================================

#[test]
fn test_rule_90_single_step() {
    let rule = Rule::elementary(90).unwrap();
    let gen = Generation::parse("...O...").unwrap();
    let next = rule.evolve(&gen, &BoundaryConditions::Circular).unwrap();

    assert_eq!(next.render(), "..O.O..");
    assert_eq!(next.cell_at(2).unwrap().state(), CellState::On);
    assert_eq!(next.cell_at(4).unwrap().state(), CellState::On);
}

#[test]
fn test_rule_30_two_steps() {
    let rule = Rule::elementary(30).unwrap();
    let bc = BoundaryConditions::Circular;
    let gen = Generation::parse("...O...").unwrap();

    let step1 = rule.evolve(&gen, &bc).unwrap();
    assert_eq!(step1.render(), "..OOO..");

    let step2 = rule.evolve(&step1, &bc).unwrap();
    assert_eq!(step2.render(), ".OO..O.");
}

#[test]
fn test_rule_evolution_records_subrules() {
    let rule = Rule::elementary(30).unwrap();
    let gen = Generation::parse("...O...").unwrap();
    let next = rule.evolve(&gen, &BoundaryConditions::Circular).unwrap();

    assert_eq!(next.subrules().unwrap(), &[0, 0, 1, 2, 4, 0, 0]);
    for i in 0..next.size() {
        let evolved = next.evolved_cell_at(i).unwrap();
        assert_eq!(evolved.state(), rule.next_state(evolved.subrule()));
    }
}

#[test]
fn test_boundary_changes_outcome() {
    // Rule 1 turns only "..." ON, so the edge cells depend on the boundary
    let rule = Rule::elementary(1).unwrap();
    let gen = Generation::parse(".....").unwrap();

    let circular = rule.evolve(&gen, &BoundaryConditions::Circular).unwrap();
    assert_eq!(circular.render(), "OOOOO");

    let fixed_off = rule
        .evolve(&gen, &BoundaryConditions::fixed(CellState::Off, CellState::Off))
        .unwrap();
    assert_eq!(fixed_off.render(), "OOOOO");

    let fixed_on = rule
        .evolve(&gen, &BoundaryConditions::fixed(CellState::On, CellState::On))
        .unwrap();
    assert_eq!(fixed_on.render(), ".OOO.");

    let mixed = rule
        .evolve(&gen, &BoundaryConditions::fixed(CellState::On, CellState::Off))
        .unwrap();
    assert_eq!(mixed.render(), ".OOOO");
}

#[test]
fn test_totalistic_rule_22_circular_single_cell() {
    // Every 5-window of a 5-cell ring holds the single ON cell: count 1 -> ON
    let rule = Rule::totalistic(22).unwrap();
    let gen = Generation::parse("..O..").unwrap();
    let next = rule.evolve(&gen, &BoundaryConditions::Circular).unwrap();
    assert_eq!(next.render(), "OOOOO");
    assert_eq!(next.subrules().unwrap(), &[1, 1, 1, 1, 1]);
}

#[test]
fn test_totalistic_rule_22_fixed() {
    let rule = Rule::totalistic(22).unwrap();
    let gen = Generation::parse("...O...").unwrap();
    let bc = BoundaryConditions::fixed(CellState::Off, CellState::Off);
    let next = rule.evolve(&gen, &bc).unwrap();
    // Cells within distance 2 of index 3 see one ON cell
    assert_eq!(next.render(), ".OOOOO.");
}

// =============================================================================
// Tables
// =============================================================================

#[test]
fn test_elementary_tables() {
    assert_eq!(
        ElementaryRule::new(0).unwrap().render_table(),
        "OOO OO. O.O O.. .OO .O. ..O ...\n .   .   .   .   .   .   .   . "
    );
    assert_eq!(
        ElementaryRule::new(110).unwrap().render_table(),
        "OOO OO. O.O O.. .OO .O. ..O ...\n .   O   O   .   O   O   O   . "
    );
}

#[test]
fn test_totalistic_tables() {
    assert_eq!(
        TotalisticRule::new(63).unwrap().render_table(),
        "5 4 3 2 1 0\nO O O O O O"
    );
    assert_eq!(
        Rule::totalistic(22).unwrap().to_string(),
        "5 4 3 2 1 0\n. O . O O ."
    );
}

// =============================================================================
// Properties
// =============================================================================

fn generation() -> impl Strategy<Value = Generation> {
    prop::collection::vec(prop::bool::ANY, 1..120).prop_map(|bits| {
        let states: Vec<CellState> = bits.into_iter().map(CellState::from).collect();
        Generation::new(&states)
    })
}

fn boundary() -> impl Strategy<Value = BoundaryConditions> {
    prop_oneof![
        Just(BoundaryConditions::Circular),
        (prop::bool::ANY, prop::bool::ANY).prop_map(|(l, r)| {
            BoundaryConditions::fixed(CellState::from(l), CellState::from(r))
        }),
    ]
}

fn rule() -> impl Strategy<Value = Rule> {
    prop_oneof![
        (0..=255u32).prop_map(|n| Rule::elementary(n).unwrap()),
        (0..=63u32).prop_map(|n| Rule::totalistic(n).unwrap()),
    ]
}

proptest! {
    #[test]
    fn prop_evolve_preserves_size(gen in generation(), bc in boundary(), rule in rule()) {
        let next = rule.evolve(&gen, &bc).unwrap();
        prop_assert_eq!(next.size(), gen.size());
    }

    #[test]
    fn prop_rule_0_and_255_saturate(gen in generation(), bc in boundary()) {
        let off = Rule::elementary(0).unwrap().evolve(&gen, &bc).unwrap();
        prop_assert_eq!(off.num_on(), 0);

        let on = Rule::elementary(255).unwrap().evolve(&gen, &bc).unwrap();
        prop_assert_eq!(on.num_on(), gen.size());
    }

    #[test]
    fn prop_subrules_in_table_range(gen in generation(), bc in boundary(), rule in rule()) {
        let next = rule.evolve(&gen, &bc).unwrap();
        let subrules = next.subrules().unwrap();
        prop_assert!(subrules.iter().all(|&k| (k as usize) < rule.num_subrules()));
        for i in 0..next.size() {
            let evolved = next.evolved_cell_at(i).unwrap();
            prop_assert_eq!(evolved.state(), rule.next_state(evolved.subrule()));
        }
    }
}
