use std::collections::{HashMap, HashSet};
use std::slice;

use itertools::Itertools;

use crate::error::{Result, SolveError};
use crate::model::entity::{Name, Person, Vehicle};
use crate::model::rule::Rule;
use crate::table::{Index, SeatTable};

/// Seats fixed before the search, plus the together-groups still to place.
#[derive(Debug, Clone)]
pub struct Preprocessed {
    pub table: SeatTable,
    pub seated: HashSet<Name>,
    pub groups: Vec<Vec<Name>>,
}

/// Applies `SpecificCar` rules, then folds every together-group with a
/// pinned member into that member's vehicle.
///
/// A pin into a full vehicle fails with [`SolveError::PinnedSeatConflict`];
/// a group that cannot join its pinned member fails with
/// [`SolveError::CapacityExceeded`]. A group whose members are pinned to
/// different vehicles can never ride together and fails with
/// [`SolveError::UnsatisfiableAssignment`]. Rules naming an unknown person
/// or vehicle are skipped.
pub fn preprocess(people: &[Person], vehicles: &[Vehicle], rules: &[Rule]) -> Result<Preprocessed> {
    let known: HashSet<&str> = people.iter().map(|p| p.name.as_str()).collect();
    let mut table = SeatTable::create(vehicles);
    let mut pinned: HashMap<&str, Index> = HashMap::new();
    let mut seated: HashSet<Name> = HashSet::new();

    for rule in rules {
        let Rule::SpecificCar { person, vehicle_id } = rule else { continue };
        let Some(index) = table.index_of(vehicle_id).filter(|_| known.contains(person.as_str())) else {
            tracing::debug!("skipping rule with unknown reference: {}", rule);
            continue;
        };
        if !table.has_room(index, 1) {
            return Err(SolveError::PinnedSeatConflict {
                person: person.clone(),
                vehicle: vehicle_id.clone(),
            });
        }
        table.place(index, slice::from_ref(person));
        pinned.entry(person.as_str()).or_insert(index);
        seated.insert(person.clone());
    }

    let mut groups = Vec::new();
    for rule in rules {
        let Rule::Together { people: members } = rule else { continue };
        if members.is_empty() || !members.iter().all(|m| known.contains(m.as_str())) {
            tracing::debug!("skipping rule with unknown reference: {}", rule);
            continue;
        }
        let targets: Vec<Index> = members
            .iter()
            .filter_map(|m| pinned.get(m.as_str()).copied())
            .unique()
            .collect();
        if targets.len() > 1 {
            tracing::debug!("members pinned to different vehicles: {}", rule);
            return Err(SolveError::UnsatisfiableAssignment);
        }
        match targets.first().copied() {
            Some(index) => {
                let rest: Vec<Name> = members.iter().filter(|m| !seated.contains(*m)).cloned().collect();
                if !table.has_room(index, rest.len()) {
                    return Err(SolveError::CapacityExceeded {
                        group: members.clone(),
                        vehicle: table.id(index).clone(),
                    });
                }
                table.place(index, &rest);
                seated.extend(rest);
            }
            None => groups.push(members.clone()),
        }
    }

    tracing::debug!(
        "preprocessed: {} seated before search, {} groups deferred",
        seated.len(),
        groups.len()
    );
    Ok(Preprocessed { table, seated, groups })
}
