//! Seat people in capacity-limited vehicles under together, separate and
//! pinned-seat rules.
//!
//! A solve runs in four stages: [`preprocess`] seats pinned people and the
//! groups that follow them, [`unit`] turns the rest into placement units,
//! [`search`] backtracks over vehicles for each unit, and [`validate`]
//! rejects any result that does not seat every person exactly once.
//!
//! ```
//! use car_shuffle::{solve, Person, Rule, Vehicle};
//!
//! let people = vec![Person::new("1", "Ann"), Person::new("2", "Bob"), Person::new("3", "Cid")];
//! let vehicles = vec![Vehicle::new("x", "Sedan", 2), Vehicle::new("y", "Coupe", 2)];
//! let rules = vec![Rule::separate("Ann", "Bob")];
//!
//! let assignment = solve(&people, &vehicles, &rules).unwrap();
//! assert_ne!(assignment.vehicle_of("Ann"), assignment.vehicle_of("Bob"));
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod model;
pub mod preprocess;
pub mod search;
pub mod table;
pub mod unit;
pub mod validate;

pub use config::SolverConfig;
pub use error::{Result, SolveError};
pub use model::assignment::{Assignment, Bucket};
pub use model::entity::{Person, Vehicle};
pub use model::rule::{prune_rules, Rule};
pub use validate::Diagnostics;

use model::rule::Separations;
use search::{Search, SearchStats};

/// An assignment together with what was learned while finding it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub assignment: Assignment,
    pub diagnostics: Diagnostics,
    pub stats: SearchStats,
}

/// Solves with [`SolverConfig::default`], seeding from entropy.
pub fn solve(people: &[Person], vehicles: &[Vehicle], rules: &[Rule]) -> Result<Assignment> {
    Solver::new(SolverConfig::default())
        .solve(people, vehicles, rules)
        .map(|solution| solution.assignment)
}

pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Solver {
        Solver { config }
    }

    pub fn solve(&self, people: &[Person], vehicles: &[Vehicle], rules: &[Rule]) -> Result<Solution> {
        if people.is_empty() {
            return Err(SolveError::EmptyInput("people"));
        }
        if vehicles.is_empty() {
            return Err(SolveError::EmptyInput("vehicles"));
        }
        if self.config.check_total_capacity {
            let seats: usize = vehicles.iter().map(|v| v.capacity).sum();
            if seats < people.len() {
                return Err(SolveError::InsufficientCapacity { people: people.len(), seats });
            }
        }

        let mut rng = self.config.rng();
        let pre = preprocess::preprocess(people, vehicles, rules)?;
        let separations = Separations::from_rules(rules);
        if pre.table.has_separated_pair(&separations) {
            tracing::debug!("pinned seats already break a separate rule");
            return Err(SolveError::UnsatisfiableAssignment);
        }
        let units = unit::build_units(people, &pre, &mut rng);

        let mut search = Search::new(&separations);
        let table = search
            .run(pre.table, &units, &mut rng)
            .ok_or(SolveError::UnsatisfiableAssignment)?;
        let assignment = table.into_assignment();
        validate::validate(&assignment, people)?;

        let diagnostics = Diagnostics::inspect(&assignment, people.len());
        if self.config.diagnostics {
            diagnostics.report();
        }
        tracing::info!(
            "seated {} people in {} vehicles",
            assignment.total_people(),
            vehicles.len()
        );
        Ok(Solution { assignment, diagnostics, stats: search.stats })
    }
}
