use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::model::entity::{Person, Vehicle};
use crate::model::rule::{prune_rules, Rule};

/// Knobs for a single solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Seed for unit and vehicle ordering. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Reject up front when there are more people than seats.
    pub check_total_capacity: bool,
    /// Log advisory warnings about the shape of the result.
    pub diagnostics: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            seed: None,
            check_total_capacity: true,
            diagnostics: true,
        }
    }
}

impl SolverConfig {
    pub fn seeded(seed: u64) -> Self {
        SolverConfig { seed: Some(seed), ..Default::default() }
    }

    pub fn with_total_capacity_check(mut self, enabled: bool) -> Self {
        self.check_total_capacity = enabled;
        self
    }

    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }
}

/// A problem document as read by the command line tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub people: Vec<Person>,
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub config: SolverConfig,
}

impl Problem {
    pub fn from_json(text: &str) -> serde_json::Result<Problem> {
        serde_json::from_str(text)
    }

    /// Drops rules left behind by deleted people or vehicles, returning how many went.
    pub fn prune(&mut self) -> usize {
        let before = self.rules.len();
        self.rules = prune_rules(&self.rules, &self.people, &self.vehicles);
        before - self.rules.len()
    }
}
