//! # Replacement
//!
//! Elitist truncation of a ranking down to the target population size. Fronts are taken
//! whole in rank order while they fit; the first front that would overflow is sorted by
//! descending crowding distance and only its most isolated members are kept.
//!
//! Crowding distance is assigned to every front that contributes members, so that selection
//! in the next generation can use it for crowded comparison.

use crate::{
    crowding::{assign_crowding_distance, sort_by_crowding_distance},
    population::Population,
    ranking::Ranking,
    solution::Encoding,
};

/// Builds the next population of exactly `min(target, ranking.len())` members.
pub fn truncate<V: Encoding>(ranking: Ranking<V>, target: usize) -> Population<V> {
    let mut next = Population::with_capacity(target);

    for front in ranking.into_fronts() {
        let remaining = target - next.len();
        if remaining == 0 {
            break;
        }

        let mut members = front.into_vec();
        assign_crowding_distance(&mut members);

        if members.len() <= remaining {
            next.extend(members);
        } else {
            sort_by_crowding_distance(&mut members);
            members.truncate(remaining);
            next.extend(members);
        }
    }

    next
}
