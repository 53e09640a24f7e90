use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::entity::{Name, Person};
use crate::preprocess::Preprocessed;

/// People that board a vehicle together or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub members: Vec<Name>,
}

impl Unit {
    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }
}

/// One unit per deferred group, one singleton per remaining person, shuffled.
///
/// Groups are taken as written. A person named by two deferred groups ends
/// up in two units; the duplicate is reported after the search.
pub fn build_units<R: Rng + ?Sized>(people: &[Person], pre: &Preprocessed, rng: &mut R) -> Vec<Unit> {
    let grouped: HashSet<&str> = pre.groups.iter().flatten().map(String::as_str).collect();
    let mut units: Vec<Unit> = pre
        .groups
        .iter()
        .map(|members| Unit { members: members.clone() })
        .chain(
            people
                .iter()
                .filter(|p| !pre.seated.contains(&p.name) && !grouped.contains(p.name.as_str()))
                .map(|p| Unit { members: vec![p.name.clone()] }),
        )
        .collect();
    units.shuffle(rng);
    tracing::debug!("built {} units", units.len());
    units
}
