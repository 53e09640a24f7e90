use std::collections::BTreeMap;

use itertools::Itertools;

use crate::model::assignment::{Assignment, Bucket};
use crate::model::entity::{Id, Name, Vehicle};
use crate::model::rule::Separations;

pub type Index = usize;

/// Seats of every vehicle, addressed by position in the input vehicle list.
///
/// The search mutates one table in place: members are appended with
/// [`SeatTable::place`] and removed again, last in first out, with
/// [`SeatTable::retract`].
#[derive(Debug, Clone, PartialEq)]
pub struct SeatTable {
    ids: Vec<Id>,
    buckets: Vec<Bucket>,
}

impl SeatTable {
    pub fn create(vehicles: &[Vehicle]) -> SeatTable {
        SeatTable {
            ids: vehicles.iter().map(|v| v.id.clone()).collect(),
            buckets: vehicles.iter().map(|v| Bucket::new(v.capacity)).collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn index_of(&self, vehicle_id: &str) -> Option<Index> {
        self.ids.iter().position(|id| id == vehicle_id)
    }

    pub fn id(&self, index: Index) -> &Id {
        &self.ids[index]
    }

    pub fn bucket(&self, index: Index) -> &Bucket {
        &self.buckets[index]
    }

    pub fn has_room(&self, index: Index, count: usize) -> bool {
        let bucket = &self.buckets[index];
        bucket.occupancy() + count <= bucket.capacity
    }

    /// Whether `unit` can board vehicle `index` without overfilling it or
    /// seating a separated pair together.
    pub fn fits(&self, index: Index, unit: &[Name], separations: &Separations) -> bool {
        if !self.has_room(index, unit.len()) {
            return false;
        }
        if separations.is_empty() {
            return true;
        }
        let seated = &self.buckets[index].people;
        !unit.iter().enumerate().any(|(i, newcomer)| {
            seated.iter().chain(&unit[..i]).any(|p| separations.forbids(newcomer, p))
        })
    }

    /// Whether some vehicle already seats a separated pair.
    pub fn has_separated_pair(&self, separations: &Separations) -> bool {
        self.buckets.iter().any(|bucket| {
            bucket
                .people
                .iter()
                .tuple_combinations()
                .any(|(a, b)| separations.forbids(a, b))
        })
    }

    pub fn place(&mut self, index: Index, unit: &[Name]) {
        self.buckets[index].people.extend(unit.iter().cloned());
    }

    /// Removes the last `count` people seated in vehicle `index`.
    pub fn retract(&mut self, index: Index, count: usize) {
        let people = &mut self.buckets[index].people;
        let keep = people.len().saturating_sub(count);
        people.truncate(keep);
    }

    pub fn into_assignment(self) -> Assignment {
        let buckets: BTreeMap<Id, Bucket> = self.ids.into_iter().zip(self.buckets).collect();
        Assignment { buckets }
    }
}
