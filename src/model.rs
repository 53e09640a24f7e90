pub mod entity {
    use serde::{Deserialize, Serialize};

    pub type Id = String;
    pub type Name = String;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Person {
        pub id: Id,
        pub name: Name,
    }

    impl Person {
        pub fn new(id: impl Into<Id>, name: impl Into<Name>) -> Person {
            Person { id: id.into(), name: name.into() }
        }
    }

    /// A vehicle with a fixed number of seats.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Vehicle {
        pub id: Id,
        pub name: Name,
        pub capacity: usize,
    }

    impl Vehicle {
        pub fn new(id: impl Into<Id>, name: impl Into<Name>, capacity: usize) -> Vehicle {
            Vehicle { id: id.into(), name: name.into(), capacity }
        }
    }
}


pub mod rule {
    use std::collections::{HashMap, HashSet};
    use std::fmt;

    use itertools::Itertools;
    use serde::{Deserialize, Serialize};

    use super::entity::{Id, Name, Person, Vehicle};

    /// A relational constraint between people and vehicles.
    ///
    /// Rules name people by display name and vehicles by id.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(tag = "type", rename_all = "camelCase")]
    pub enum Rule {
        /// All named people end in the same vehicle.
        Together { people: Vec<Name> },
        /// The two named people never share a vehicle.
        Separate { people: Vec<Name> },
        /// The person ends in the given vehicle.
        SpecificCar {
            person: Name,
            #[serde(rename = "vehicleId")]
            vehicle_id: Id,
        },
    }

    impl Rule {
        pub fn together<I, S>(people: I) -> Rule
        where
            I: IntoIterator<Item = S>,
            S: Into<Name>,
        {
            Rule::Together { people: people.into_iter().map(Into::into).collect() }
        }

        pub fn separate(a: impl Into<Name>, b: impl Into<Name>) -> Rule {
            Rule::Separate { people: vec![a.into(), b.into()] }
        }

        pub fn specific_car(person: impl Into<Name>, vehicle_id: impl Into<Id>) -> Rule {
            Rule::SpecificCar { person: person.into(), vehicle_id: vehicle_id.into() }
        }

        /// Every person name this rule mentions.
        pub fn people(&self) -> Vec<&str> {
            match self {
                Rule::Together { people } | Rule::Separate { people } => {
                    people.iter().map(String::as_str).collect()
                }
                Rule::SpecificCar { person, .. } => vec![person.as_str()],
            }
        }

        /// Human readable text, resolving vehicle ids to names.
        pub fn describe(&self, vehicles: &[Vehicle]) -> String {
            match self {
                Rule::SpecificCar { person, vehicle_id } => {
                    let vehicle = vehicles
                        .iter()
                        .find(|v| &v.id == vehicle_id)
                        .map(|v| v.name.as_str())
                        .unwrap_or("Unknown Car");
                    format!("{} must be in {}.", person, vehicle)
                }
                _ => self.to_string(),
            }
        }
    }

    impl fmt::Display for Rule {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Rule::Together { people } => write!(f, "{} must travel together.", people.join(", ")),
                Rule::Separate { people } => write!(f, "{} must travel separately.", people.join(", ")),
                Rule::SpecificCar { person, vehicle_id } => write!(f, "{} must be in {}.", person, vehicle_id),
            }
        }
    }

    /// Drops rules that reference a person or vehicle no longer present.
    pub fn prune_rules(rules: &[Rule], people: &[Person], vehicles: &[Vehicle]) -> Vec<Rule> {
        let names: HashSet<&str> = people.iter().map(|p| p.name.as_str()).collect();
        let vehicle_ids: HashSet<&str> = vehicles.iter().map(|v| v.id.as_str()).collect();
        rules
            .iter()
            .filter(|rule| match rule {
                Rule::SpecificCar { person, vehicle_id } => {
                    names.contains(person.as_str()) && vehicle_ids.contains(vehicle_id.as_str())
                }
                _ => rule.people().iter().all(|name| names.contains(name)),
            })
            .cloned()
            .collect()
    }

    /// Symmetric index of the pairs named by `Separate` rules.
    #[derive(Debug, Clone, Default)]
    pub struct Separations(HashMap<Name, HashSet<Name>>);

    impl Separations {
        pub fn from_rules(rules: &[Rule]) -> Separations {
            let mut pairs: HashMap<Name, HashSet<Name>> = HashMap::new();
            for rule in rules {
                let Rule::Separate { people } = rule else { continue };
                let distinct = people.iter().unique().collect_vec();
                if distinct.len() != 2 || people.len() != 2 {
                    tracing::warn!("ignoring malformed separate rule: {}", rule);
                    continue;
                }
                let (a, b) = (distinct[0], distinct[1]);
                pairs.entry(a.clone()).or_default().insert(b.clone());
                pairs.entry(b.clone()).or_default().insert(a.clone());
            }
            Separations(pairs)
        }

        pub fn forbids(&self, a: &str, b: &str) -> bool {
            self.0.get(a).map_or(false, |others| others.contains(b))
        }

        pub fn is_empty(&self) -> bool {
            self.0.is_empty()
        }
    }
}


pub mod assignment {
    use std::collections::{BTreeMap, HashMap};

    use itertools::Itertools;
    use serde::Serialize;

    use super::entity::{Id, Name};

    /// People seated in one vehicle.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct Bucket {
        pub people: Vec<Name>,
        pub capacity: usize,
    }

    impl Bucket {
        pub fn new(capacity: usize) -> Bucket {
            Bucket { people: Vec::new(), capacity }
        }

        pub fn occupancy(&self) -> usize {
            self.people.len()
        }

        pub fn free_seats(&self) -> usize {
            self.capacity.saturating_sub(self.people.len())
        }

        pub fn fill_percentage(&self) -> f64 {
            if self.capacity == 0 {
                0.0
            } else {
                self.occupancy() as f64 / self.capacity as f64 * 100.0
            }
        }
    }

    /// Mapping from vehicle id to the people it carries.
    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
    #[serde(transparent)]
    pub struct Assignment {
        pub buckets: BTreeMap<Id, Bucket>,
    }

    impl Assignment {
        pub fn get(&self, vehicle_id: &str) -> Option<&Bucket> {
            self.buckets.get(vehicle_id)
        }

        pub fn iter(&self) -> impl Iterator<Item = (&Id, &Bucket)> {
            self.buckets.iter()
        }

        /// The vehicle carrying `person`, if any.
        pub fn vehicle_of(&self, person: &str) -> Option<&Id> {
            self.buckets
                .iter()
                .find(|(_, bucket)| bucket.people.iter().any(|p| p == person))
                .map(|(id, _)| id)
        }

        pub fn total_people(&self) -> usize {
            self.buckets.values().map(Bucket::occupancy).sum()
        }

        /// Names seated more than once, in first-seen order.
        pub fn duplicates(&self) -> Vec<&Name> {
            let mut counts: HashMap<&Name, usize> = HashMap::new();
            let flat = self.buckets.values().flat_map(|b| b.people.iter()).collect_vec();
            for name in &flat {
                *counts.entry(*name).or_insert(0) += 1;
            }
            flat.into_iter().filter(|name| counts[name] > 1).unique().collect()
        }
    }
}
