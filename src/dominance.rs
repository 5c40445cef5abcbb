//! # Dominance
//!
//! Constraint-aware Pareto dominance under the minimization convention.
//!
//! Constraint dominance is checked first: when two solutions differ in overall constraint
//! violation and at least one of them is infeasible, the one with the lower violation
//! dominates regardless of objective values. Otherwise `a` dominates `b` iff `a` is no worse
//! in every objective and strictly better in at least one.

use crate::solution::{Encoding, Solution};

/// Outcome of comparing two solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// The left solution dominates the right one.
    Dominates,
    /// The right solution dominates the left one.
    DominatedBy,
    /// Neither solution dominates the other.
    NonDominated,
}

/// Compares two solutions, constraint violation first and objectives second.
pub fn compare<V: Encoding>(a: &Solution<V>, b: &Solution<V>) -> Dominance {
    let (va, vb) = (a.constraint_violation(), b.constraint_violation());
    if va != vb && (va > 0.0 || vb > 0.0) {
        return if va < vb {
            Dominance::Dominates
        } else {
            Dominance::DominatedBy
        };
    }

    compare_objectives(a.objectives(), b.objectives())
}

/// Pure objective dominance between two objective vectors.
pub fn compare_objectives(a: &[f64], b: &[f64]) -> Dominance {
    let mut a_better = false;
    let mut b_better = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better = true;
        } else if vb < va {
            b_better = true;
        }
        if a_better && b_better {
            return Dominance::NonDominated;
        }
    }

    match (a_better, b_better) {
        (true, false) => Dominance::Dominates,
        (false, true) => Dominance::DominatedBy,
        _ => Dominance::NonDominated,
    }
}

/// Returns `true` if `a` dominates `b`.
pub fn dominates<V: Encoding>(a: &Solution<V>, b: &Solution<V>) -> bool {
    compare(a, b) == Dominance::Dominates
}
