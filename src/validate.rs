use itertools::Itertools;

use crate::error::{Result, SolveError};
use crate::model::assignment::Assignment;
use crate::model::entity::Person;

/// Fails unless every person holds exactly one seat.
///
/// A name seated twice is reported first. Otherwise a head count mismatch
/// reports the first person left unseated, or failing that the first name
/// shared by two people.
pub fn validate(assignment: &Assignment, people: &[Person]) -> Result<()> {
    if let Some(person) = assignment.duplicates().first() {
        return Err(SolveError::InternalConsistencyError { person: (*person).clone() });
    }
    if assignment.total_people() == people.len() {
        return Ok(());
    }
    let culprit = people
        .iter()
        .map(|p| &p.name)
        .find(|name| assignment.vehicle_of(name).is_none())
        .or_else(|| people.iter().map(|p| &p.name).duplicates().next())
        .or_else(|| assignment.iter().flat_map(|(_, b)| b.people.iter()).next());
    Err(SolveError::InternalConsistencyError {
        person: culprit.cloned().unwrap_or_default(),
    })
}

/// Advisory observations about a valid assignment. Never fatal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Fullest vehicle holds more than two people over the emptiest occupied one.
    pub unbalanced: bool,
    /// Someone rides alone although seats were left elsewhere.
    pub lone_traveler: bool,
}

impl Diagnostics {
    pub fn inspect(assignment: &Assignment, n_people: usize) -> Diagnostics {
        let occupancies: Vec<usize> = assignment.iter().map(|(_, b)| b.occupancy()).collect();
        let max = occupancies.iter().copied().max().unwrap_or(0);
        let min_occupied = occupancies.iter().copied().filter(|&o| o > 0).min().unwrap_or(0);
        let unbalanced = max > min_occupied + 2 && n_people > occupancies.len();

        let singles = occupancies.iter().filter(|&&o| o == 1).count();
        let with_space = assignment.iter().filter(|(_, b)| b.free_seats() > 0).count();
        let lone_traveler = singles > 0 && with_space > singles;

        Diagnostics { unbalanced, lone_traveler }
    }

    pub fn report(&self) {
        if self.unbalanced {
            tracing::warn!("Distribution may not be perfectly balanced.");
        }
        if self.lone_traveler {
            tracing::warn!(
                "Found a solution with a lone traveler, which might be avoidable. Trying again could yield a better result."
            );
        }
    }
}
