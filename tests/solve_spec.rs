mod common;

use car_shuffle::{solve, Rule, SolveError, Solver, SolverConfig};
use common::{assert_valid, people, vehicles};

#[test]
fn everyone_fits_in_one_vehicle() {
    let people = people(&["A", "B", "C"]);
    let vehicles = vehicles(&[("x", 3)]);
    let assignment = solve(&people, &vehicles, &[]).unwrap();
    assert_valid(&assignment, &people, &vehicles, &[]);
    assert_eq!(assignment.get("x").unwrap().occupancy(), 3);
}

#[test]
fn group_larger_than_every_vehicle_is_unsatisfiable() {
    let people = people(&["A", "B"]);
    let vehicles = vehicles(&[("x", 1)]);
    let rules = vec![Rule::together(["A", "B"])];

    let loose = Solver::new(SolverConfig::default().with_total_capacity_check(false))
        .solve(&people, &vehicles, &rules);
    assert_eq!(loose, Err(SolveError::UnsatisfiableAssignment));

    let strict = solve(&people, &vehicles, &rules);
    assert_eq!(strict, Err(SolveError::InsufficientCapacity { people: 2, seats: 1 }));
}

#[test]
fn group_fits_only_in_the_big_vehicle() {
    let people = people(&["A", "B", "C"]);
    let vehicles = vehicles(&[("x", 1), ("y", 2)]);
    let rules = vec![Rule::together(["A", "B"])];
    for _ in 0..20 {
        let assignment = solve(&people, &vehicles, &rules).unwrap();
        assert_valid(&assignment, &people, &vehicles, &rules);
        assert_eq!(assignment.get("x").unwrap().people, vec!["C"]);
    }
}

#[test]
fn separated_pair_rides_apart() {
    let people = people(&["A", "B", "C"]);
    let vehicles = vehicles(&[("x", 2), ("y", 2)]);
    let rules = vec![Rule::separate("A", "B")];
    for seed in 0..30 {
        let assignment = Solver::new(SolverConfig::seeded(seed))
            .solve(&people, &vehicles, &rules)
            .unwrap()
            .assignment;
        assert_valid(&assignment, &people, &vehicles, &rules);
    }
}

#[test]
fn too_few_seats_fails_before_search() {
    let people = people(&["A", "B", "C"]);
    let vehicles = vehicles(&[("x", 1), ("y", 1)]);
    assert_eq!(
        solve(&people, &vehicles, &[]),
        Err(SolveError::InsufficientCapacity { people: 3, seats: 2 })
    );
}

#[test]
fn two_pins_into_one_seat_conflict() {
    let people = people(&["A", "B"]);
    let vehicles = vehicles(&[("x", 1), ("y", 1)]);
    let rules = vec![Rule::specific_car("A", "x"), Rule::specific_car("B", "x")];
    assert_eq!(
        solve(&people, &vehicles, &rules),
        Err(SolveError::PinnedSeatConflict { person: "B".into(), vehicle: "x".into() })
    );
}

#[test]
fn group_follows_pinned_member() {
    let people = people(&["A", "B", "C", "D"]);
    let vehicles = vehicles(&[("x", 3), ("y", 3)]);
    let rules = vec![Rule::specific_car("B", "y"), Rule::together(["A", "B", "C"])];
    for seed in 0..10 {
        let assignment = Solver::new(SolverConfig::seeded(seed))
            .solve(&people, &vehicles, &rules)
            .unwrap()
            .assignment;
        assert_valid(&assignment, &people, &vehicles, &rules);
        assert_eq!(assignment.get("x").unwrap().people, vec!["D"]);
    }
}

#[test]
fn group_too_big_for_pinned_member_vehicle() {
    let people = people(&["A", "B", "C"]);
    let vehicles = vehicles(&[("x", 2), ("y", 3)]);
    let rules = vec![Rule::specific_car("A", "x"), Rule::together(["A", "B", "C"])];
    assert_eq!(
        solve(&people, &vehicles, &rules),
        Err(SolveError::CapacityExceeded {
            group: vec!["A".into(), "B".into(), "C".into()],
            vehicle: "x".into()
        })
    );
}

#[test]
fn overlapping_groups_surface_as_internal_error() {
    let people = people(&["A", "B", "C"]);
    let vehicles = vehicles(&[("x", 4)]);
    let rules = vec![Rule::together(["A", "B"]), Rule::together(["B", "C"])];
    assert_eq!(
        solve(&people, &vehicles, &rules),
        Err(SolveError::InternalConsistencyError { person: "B".into() })
    );
}

#[test]
fn stale_rules_are_ignored() {
    let people = people(&["A", "B"]);
    let vehicles = vehicles(&[("x", 1), ("y", 1)]);
    let rules = vec![
        Rule::together(["A", "Zed"]),
        Rule::specific_car("A", "van"),
        Rule::separate("B", "Zed"),
    ];
    let assignment = solve(&people, &vehicles, &rules).unwrap();
    assert_valid(&assignment, &people, &vehicles, &[]);
}

#[test]
fn conflicting_rules_are_unsatisfiable() {
    let people = people(&["A", "B"]);
    let vehicles = vehicles(&[("x", 2), ("y", 2)]);
    let rules = vec![Rule::together(["A", "B"]), Rule::separate("A", "B")];
    assert_eq!(solve(&people, &vehicles, &rules), Err(SolveError::UnsatisfiableAssignment));
}

#[test]
fn pinned_pair_that_must_separate_is_unsatisfiable() {
    let people = people(&["A", "B"]);
    let vehicles = vehicles(&[("x", 2), ("y", 2)]);
    let rules = vec![
        Rule::specific_car("A", "x"),
        Rule::specific_car("B", "x"),
        Rule::separate("A", "B"),
    ];
    assert_eq!(solve(&people, &vehicles, &rules), Err(SolveError::UnsatisfiableAssignment));
}

#[test]
fn shared_name_with_a_pin_is_an_internal_error() {
    let people = people(&["A", "A", "B"]);
    let vehicles = vehicles(&[("x", 3), ("y", 3)]);
    let pinned = vec![Rule::specific_car("A", "x")];
    assert_eq!(
        solve(&people, &vehicles, &pinned),
        Err(SolveError::InternalConsistencyError { person: "A".into() })
    );
    assert_eq!(
        solve(&people, &vehicles, &[]),
        Err(SolveError::InternalConsistencyError { person: "A".into() })
    );
}

#[test]
fn group_pinned_to_two_vehicles_is_unsatisfiable() {
    let people = people(&["A", "B"]);
    let vehicles = vehicles(&[("x", 2), ("y", 2)]);
    let rules = vec![
        Rule::specific_car("A", "x"),
        Rule::specific_car("B", "y"),
        Rule::together(["A", "B"]),
    ];
    assert_eq!(solve(&people, &vehicles, &rules), Err(SolveError::UnsatisfiableAssignment));
}

#[test]
fn person_pinned_twice_is_an_internal_error() {
    let people = people(&["A", "B"]);
    let vehicles = vehicles(&[("x", 2), ("y", 2)]);
    let rules = vec![
        Rule::specific_car("A", "x"),
        Rule::specific_car("A", "y"),
        Rule::together(["A", "B"]),
    ];
    assert_eq!(
        solve(&people, &vehicles, &rules),
        Err(SolveError::InternalConsistencyError { person: "A".into() })
    );
}

#[test]
fn group_naming_someone_twice_is_an_internal_error() {
    let people = people(&["A", "B"]);
    let vehicles = vehicles(&[("x", 3)]);
    let rules = vec![Rule::together(["A", "A", "B"])];
    assert_eq!(
        solve(&people, &vehicles, &rules),
        Err(SolveError::InternalConsistencyError { person: "A".into() })
    );
}

#[test]
fn repeated_solves_stay_valid() {
    let people = people(&["A", "B", "C", "D", "E", "F"]);
    let vehicles = vehicles(&[("sedan", 4), ("coupe", 2), ("suv", 5)]);
    let rules = vec![
        Rule::together(["A", "B"]),
        Rule::separate("C", "D"),
        Rule::specific_car("E", "suv"),
    ];
    for _ in 0..50 {
        let assignment = solve(&people, &vehicles, &rules).unwrap();
        assert_valid(&assignment, &people, &vehicles, &rules);
    }
}
