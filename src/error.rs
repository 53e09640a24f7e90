use thiserror::Error;

use crate::model::entity::{Id, Name};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("Nothing to solve: no {0} given")]
    EmptyInput(&'static str),

    #[error("Not enough seats: {people} people but only {seats} seats")]
    InsufficientCapacity { people: usize, seats: usize },

    #[error("Cannot place {person} in {vehicle}, it's already full")]
    PinnedSeatConflict { person: Name, vehicle: Id },

    #[error("Group [{}] cannot fit in their assigned car {}", .group.join(", "), .vehicle)]
    CapacityExceeded { group: Vec<Name>, vehicle: Id },

    #[error("Could not find a valid assignment with the given rules and people")]
    UnsatisfiableAssignment,

    #[error("{person} was placed in more than one seat")]
    InternalConsistencyError { person: Name },
}

pub type Result<T> = std::result::Result<T, SolveError>;
