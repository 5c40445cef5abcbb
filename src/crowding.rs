//! # Crowding Distance
//!
//! Estimates how isolated each member of one front is in objective space. For every
//! objective the front is sorted by that objective; the two boundary members receive an
//! infinite contribution and every interior member adds the gap between its two neighbours,
//! normalized by the objective's range across the front. An objective whose range is zero
//! contributes nothing to interior members.
//!
//! Distances are only meaningful between members of the same front.

use std::cmp::Ordering;

use crate::solution::{Encoding, Solution};

/// Populates the crowding-distance field of every member of `front`.
///
/// Fronts of one or two members are all boundary members and get `f64::INFINITY`.
pub fn assign_crowding_distance<V: Encoding>(front: &mut [Solution<V>]) {
    let n = front.len();
    if n == 0 {
        return;
    }
    if n <= 2 {
        front
            .iter_mut()
            .for_each(|s| s.set_crowding_distance(f64::INFINITY));
        return;
    }

    let objectives = front[0].number_of_objectives();
    let mut distances = vec![0.0f64; n];
    let mut order: Vec<usize> = (0..n).collect();

    for m in 0..objectives {
        order.sort_by(|&a, &b| {
            front[a]
                .objective(m)
                .partial_cmp(&front[b].objective(m))
                .unwrap_or(Ordering::Equal)
        });

        let first = order[0];
        let last = order[n - 1];
        distances[first] = f64::INFINITY;
        distances[last] = f64::INFINITY;

        let range = front[last].objective(m) - front[first].objective(m);
        if range <= 0.0 {
            continue;
        }

        for k in 1..(n - 1) {
            let gap = front[order[k + 1]].objective(m) - front[order[k - 1]].objective(m);
            distances[order[k]] += gap / range;
        }
    }

    for (solution, distance) in front.iter_mut().zip(distances) {
        solution.set_crowding_distance(distance);
    }
}

/// Sorts `front` by descending crowding distance; infinite distances come first.
///
/// The sort is stable, so members with equal distance keep their relative order.
pub fn sort_by_crowding_distance<V: Encoding>(front: &mut [Solution<V>]) {
    front.sort_by(|a, b| {
        b.crowding_distance()
            .partial_cmp(&a.crowding_distance())
            .unwrap_or(Ordering::Equal)
    });
}

/// Crowded comparison: lower rank first, then larger crowding distance.
///
/// Returns `Ordering::Less` when `a` is preferred over `b`.
pub fn crowded_comparison<V: Encoding>(a: &Solution<V>, b: &Solution<V>) -> Ordering {
    a.rank().cmp(&b.rank()).then_with(|| {
        b.crowding_distance()
            .partial_cmp(&a.crowding_distance())
            .unwrap_or(Ordering::Equal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front(objectives: &[&[f64]]) -> Vec<Solution<usize>> {
        objectives
            .iter()
            .enumerate()
            .map(|(id, o)| Solution::with_objectives(id, o.to_vec()))
            .collect()
    }

    #[test]
    fn test_small_fronts_are_all_boundary() {
        let mut single = front(&[&[1.0, 2.0]]);
        assign_crowding_distance(&mut single);
        assert!(single[0].crowding_distance().is_infinite());

        let mut pair = front(&[&[1.0, 3.0], &[3.0, 1.0]]);
        assign_crowding_distance(&mut pair);
        assert!(pair.iter().all(|s| s.crowding_distance().is_infinite()));
    }

    #[test]
    fn test_boundaries_and_interior() {
        let mut members = front(&[&[0.0, 4.0], &[1.0, 3.0], &[2.0, 2.0], &[3.0, 1.0], &[4.0, 0.0]]);
        assign_crowding_distance(&mut members);

        assert!(members[0].crowding_distance().is_infinite());
        assert!(members[4].crowding_distance().is_infinite());

        // Evenly spaced: each interior member has gap 2/4 in both objectives.
        for member in &members[1..4] {
            assert!((member.crowding_distance() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_range_objective_contributes_nothing() {
        let mut members = front(&[&[1.0, 5.0], &[2.0, 5.0], &[4.0, 5.0]]);
        assign_crowding_distance(&mut members);

        let interior = members
            .iter()
            .find(|s| *s.variables() == 1)
            .map(|s| s.crowding_distance());
        assert_eq!(interior, Some(1.0));
    }

    #[test]
    fn test_recomputation_overwrites_previous_values() {
        let mut members = front(&[&[0.0, 2.0], &[1.0, 1.0], &[2.0, 0.0]]);
        members[1].set_crowding_distance(123.0);
        assign_crowding_distance(&mut members);
        assert!((members[1].crowding_distance() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sort_puts_boundaries_first() {
        let mut members = front(&[&[1.0, 3.0], &[0.0, 4.0], &[3.0, 1.0], &[4.0, 0.0], &[2.5, 1.5]]);
        assign_crowding_distance(&mut members);
        sort_by_crowding_distance(&mut members);

        assert!(members[0].crowding_distance().is_infinite());
        assert!(members[1].crowding_distance().is_infinite());
        for pair in members.windows(2) {
            assert!(pair[0].crowding_distance() >= pair[1].crowding_distance());
        }
    }

    #[test]
    fn test_crowded_comparison_prefers_rank_then_distance() {
        let mut a = Solution::with_objectives(0usize, vec![0.0]);
        let mut b = Solution::with_objectives(1usize, vec![0.0]);
        a.set_rank(0);
        b.set_rank(1);
        b.set_crowding_distance(f64::INFINITY);
        assert_eq!(crowded_comparison(&a, &b), Ordering::Less);

        b.set_rank(0);
        a.set_crowding_distance(0.5);
        assert_eq!(crowded_comparison(&a, &b), Ordering::Greater);
    }
}
