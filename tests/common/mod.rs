#![allow(dead_code)]

use std::collections::HashMap;

use car_shuffle::{Assignment, Person, Rule, Vehicle};

pub fn people(names: &[&str]) -> Vec<Person> {
    names.iter().enumerate().map(|(i, n)| Person::new(i.to_string(), *n)).collect()
}

pub fn vehicles(specs: &[(&str, usize)]) -> Vec<Vehicle> {
    specs.iter().map(|(id, capacity)| Vehicle::new(*id, id.to_uppercase(), *capacity)).collect()
}

/// Every person seated exactly once, no vehicle over capacity, every rule honored.
pub fn assert_valid(assignment: &Assignment, people: &[Person], vehicles: &[Vehicle], rules: &[Rule]) {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (id, bucket) in assignment.iter() {
        assert!(bucket.occupancy() <= bucket.capacity, "{} is over capacity", id);
        for person in &bucket.people {
            assert!(seen.insert(person.as_str(), id.as_str()).is_none(), "{} seated twice", person);
        }
    }
    assert_eq!(seen.len(), people.len());
    for person in people {
        assert!(seen.contains_key(person.name.as_str()), "{} not seated", person.name);
    }
    assert_eq!(assignment.iter().count(), vehicles.len());

    for rule in rules {
        match rule {
            Rule::Together { people } => {
                let first = seen[people[0].as_str()];
                assert!(people.iter().all(|p| seen[p.as_str()] == first), "{}", rule);
            }
            Rule::Separate { people } => {
                assert_ne!(seen[people[0].as_str()], seen[people[1].as_str()], "{}", rule);
            }
            Rule::SpecificCar { person, vehicle_id } => {
                assert_eq!(seen[person.as_str()], vehicle_id.as_str(), "{}", rule);
            }
        }
    }
}
