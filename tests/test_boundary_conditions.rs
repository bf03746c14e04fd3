//! Tests for BoundaryConditions.

use automata1d::{BoundaryConditions, CellState, Generation};
use proptest::prelude::*;

fn gen() -> Generation {
    Generation::parse("OO.O.").unwrap()
}

#[test]
fn test_circular_edges() {
    let g = gen();
    let bc = BoundaryConditions::Circular;
    assert_eq!(bc.neighbor(0, -1, &g).unwrap(), g.cell_at(4).unwrap());
    assert_eq!(bc.neighbor(4, 1, &g).unwrap(), g.cell_at(0).unwrap());
}

#[test]
fn test_circular_interior() {
    let g = gen();
    let bc = BoundaryConditions::Circular;
    for i in 1..4 {
        assert_eq!(bc.neighbor(i, -1, &g).unwrap(), g.cell_at(i as isize - 1).unwrap());
        assert_eq!(bc.neighbor(i, 1, &g).unwrap(), g.cell_at(i as isize + 1).unwrap());
    }
}

#[test]
fn test_fixed_edges() {
    let g = gen();
    let bc = BoundaryConditions::fixed(CellState::Off, CellState::On);
    assert_eq!(bc.neighbor(0, -1, &g).unwrap().state(), CellState::Off);
    assert_eq!(bc.neighbor(4, 1, &g).unwrap().state(), CellState::On);
}

#[test]
fn test_fixed_ignores_generation_at_edges() {
    // Edge cells are ON but the fixed boundary supplies OFF beyond them
    let g = Generation::parse("O...O").unwrap();
    let bc = BoundaryConditions::fixed(CellState::Off, CellState::Off);
    assert_eq!(bc.neighbor(0, -1, &g).unwrap().state(), CellState::Off);
    assert_eq!(bc.neighbor(4, 1, &g).unwrap().state(), CellState::Off);
    assert_eq!(bc.neighbor(1, -1, &g).unwrap().state(), CellState::On);
}

#[test]
fn test_boundary_is_reusable_across_generations() {
    let bc = BoundaryConditions::fixed(CellState::On, CellState::Off);
    let a = Generation::parse("...").unwrap();
    let b = Generation::parse("OOOOOO").unwrap();
    assert_eq!(bc.neighbor(2, 1, &a).unwrap().state(), CellState::Off);
    assert_eq!(bc.neighbor(2, 1, &b).unwrap().state(), CellState::On);
}

proptest! {
    #[test]
    fn prop_circular_is_euclidean_modulo(
        size in 1..50usize,
        idx in 0..50usize,
        offset in -120..120isize,
    ) {
        let idx = idx % size;
        let text: String = (0..size).map(|i| if i % 3 == 0 { 'O' } else { '.' }).collect();
        let g = Generation::parse(&text).unwrap();

        let expected = (idx as isize + offset).rem_euclid(size as isize);
        prop_assert_eq!(
            BoundaryConditions::Circular.neighbor(idx, offset, &g).unwrap(),
            g.cell_at(expected).unwrap()
        );
    }
}
