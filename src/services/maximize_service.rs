//! Maximize Service
//!
//! Picks the booking, or the combination of bookings, with the highest total
//! profit out of a batch of requests.
//!
//! ## Selection
//! - Bookings are stable-sorted by check-in on a private copy
//! - Every booking is a candidate on its own
//! - Every booking not yet taken by an earlier combination seeds one: the
//!   bookings checking in after its check-out are collected walking back from
//!   the end of the sorted list, and the walk stops at the first overlap
//! - The best individual wins only when it is strictly better than the best
//!   combination
//!
//! This is a greedy pass, not weighted interval scheduling: the selection
//! depends on the scan direction, and members of one combination may overlap
//! each other as long as they all start after the seed's check-out.

use std::collections::{HashMap, HashSet};

use crate::models::{booking::BookingRequest, profit::MaximizeProfit};
use crate::services::stats_service::StatsService;

#[derive(Debug, Clone, Copy, Default)]
pub struct MaximizeService {
    stats_service: StatsService,
}

impl MaximizeService {
    pub fn new(stats_service: StatsService) -> Self {
        Self { stats_service }
    }

    pub fn maximize_total_profits(&self, bookings: &[BookingRequest]) -> MaximizeProfit {
        let mut sorted: Vec<&BookingRequest> = bookings.iter().collect();
        // sort_by is stable: same check-in keeps the caller's order
        sorted.sort_by(|a, b| a.check_in().cmp(&b.check_in()));

        // Combinations are keyed by request id, so a repeated id keeps
        // extending the list started by its first occurrence.
        let mut combinations: HashMap<&str, Vec<&BookingRequest>> = HashMap::new();
        let mut consumed: HashSet<&str> = HashSet::new();
        let mut best_individual = MaximizeProfit::default();
        let mut best_combination = MaximizeProfit::default();

        for (i, &booking) in sorted.iter().enumerate() {
            let individual = self.calculate_individual(booking);
            if has_better_total_profit(&best_individual, &individual) {
                best_individual = individual;
            }

            if consumed.contains(booking.request_id()) {
                continue;
            }

            let combination = combinations.entry(booking.request_id()).or_default();
            combination.push(booking);

            for &candidate in sorted[i + 1..].iter().rev() {
                if !booking.no_overlap(candidate) {
                    break;
                }
                combination.push(candidate);
                consumed.insert(candidate.request_id());
            }

            if combination.len() > 1 {
                let combo = self.calculate_combination(combination);
                if has_better_total_profit(&best_combination, &combo) {
                    best_combination = combo;
                }
            }
        }

        log::debug!(
            "maximize over {} bookings: best individual {}, best combination {}",
            bookings.len(),
            best_individual.total_profit,
            best_combination.total_profit
        );

        best_one(best_individual, best_combination)
    }

    fn calculate_individual(&self, booking: &BookingRequest) -> MaximizeProfit {
        MaximizeProfit::new(
            vec![booking.request_id().to_string()],
            booking.profit(),
            self.stats_service.profit_per_night([booking]),
        )
    }

    /// Profit adds up over every member, valid or not; the per-night figures
    /// only see the valid ones.
    fn calculate_combination(&self, bookings: &[&BookingRequest]) -> MaximizeProfit {
        let request_ids = bookings
            .iter()
            .map(|booking| booking.request_id().to_string())
            .collect();
        // saturates rather than wrapping: margins have no upper bound
        let total_profit = bookings
            .iter()
            .fold(0i64, |total, booking| total.saturating_add(booking.profit()));
        let profit_per_night = self.stats_service.profit_per_night(bookings.iter().copied());

        MaximizeProfit::new(request_ids, total_profit, profit_per_night)
    }
}

/// A best of zero is always replaced, even by another zero
fn has_better_total_profit(current: &MaximizeProfit, candidate: &MaximizeProfit) -> bool {
    current.total_profit == 0 || current.total_profit < candidate.total_profit
}

/// Ties go to the combination
fn best_one(individual: MaximizeProfit, combination: MaximizeProfit) -> MaximizeProfit {
    if individual.total_profit > combination.total_profit {
        individual
    } else {
        combination
    }
}
