//! Depth-first placement of units into vehicles.
//!
//! Every unit is tried against every vehicle, in a freshly shuffled vehicle
//! order at each depth, so the search is exhaustive for the given unit
//! order. The seed only decides *which* solution is found first.
//!
//! The recursion is unrolled into an explicit stack of choice points. One
//! [`SeatTable`] is shared by all branches: a placement is retracted before
//! the next vehicle at the same depth is tried, which leaves the table
//! exactly as the sibling branch expects it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::rule::Separations;
use crate::table::{Index, SeatTable};
use crate::unit::Unit;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vehicle scans started, one per visit of a choice point.
    pub steps: usize,
    /// Placements undone after their subtree failed.
    pub backtracks: usize,
}

struct ChoicePoint {
    depth: usize,
    order: Vec<Index>,
    cursor: usize,
    placed: Option<Index>,
}

impl ChoicePoint {
    fn new<R: Rng + ?Sized>(depth: usize, n_vehicles: usize, rng: &mut R) -> ChoicePoint {
        let mut order: Vec<Index> = (0..n_vehicles).collect();
        order.shuffle(rng);
        ChoicePoint { depth, order, cursor: 0, placed: None }
    }

    fn next_fit(&mut self, table: &SeatTable, unit: &Unit, separations: &Separations) -> Option<Index> {
        while let Some(&index) = self.order.get(self.cursor) {
            self.cursor += 1;
            if table.fits(index, &unit.members, separations) {
                return Some(index);
            }
        }
        None
    }
}

pub struct Search<'a> {
    separations: &'a Separations,
    pub stats: SearchStats,
}

impl<'a> Search<'a> {
    pub fn new(separations: &'a Separations) -> Search<'a> {
        Search { separations, stats: SearchStats::default() }
    }

    /// Seats every unit on top of `table`, or returns `None` when no
    /// placement exists for this unit order.
    pub fn run<R: Rng + ?Sized>(&mut self, mut table: SeatTable, units: &[Unit], rng: &mut R) -> Option<SeatTable> {
        if units.is_empty() {
            return Some(table);
        }
        let mut stack: Vec<ChoicePoint> = Vec::with_capacity(units.len());
        stack.push(ChoicePoint::new(0, table.len(), rng));

        while let Some(point) = stack.last_mut() {
            let unit = &units[point.depth];
            if let Some(index) = point.placed.take() {
                table.retract(index, unit.len());
                self.stats.backtracks += 1;
            }
            self.stats.steps += 1;

            match point.next_fit(&table, unit, self.separations) {
                Some(index) => {
                    table.place(index, &unit.members);
                    point.placed = Some(index);
                    let depth = point.depth + 1;
                    if depth == units.len() {
                        tracing::debug!(
                            "search succeeded after {} steps, {} backtracks",
                            self.stats.steps,
                            self.stats.backtracks
                        );
                        return Some(table);
                    }
                    stack.push(ChoicePoint::new(depth, table.len(), rng));
                }
                None => {
                    stack.pop();
                }
            }
        }

        tracing::debug!(
            "search exhausted after {} steps, {} backtracks",
            self.stats.steps,
            self.stats.backtracks
        );
        None
    }
}
