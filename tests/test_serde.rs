#![cfg(feature = "serde")]

use paretoga::{operators::TournamentSelection, problem::Bounds, solution::Solution};

#[test]
fn test_solution_json() {
    let mut solution = Solution::with_objectives(vec![0.5, 1.5], vec![2.0, 3.0]);
    solution.set_rank(1);
    solution.set_crowding_distance(0.25);

    let json = serde_json::to_string(&solution).unwrap();
    let restored: Solution<Vec<f64>> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, solution);
}

#[test]
fn test_bounds_and_selection_json() {
    let bounds = Bounds::new(vec![0.0, -1.0], vec![1.0, 1.0]).unwrap();
    let json = serde_json::to_value(&bounds).unwrap();
    assert_eq!(json["lower"], serde_json::json!([0.0, -1.0]));

    let selection: TournamentSelection =
        serde_json::from_str(r#"{"tournament_size":4}"#).unwrap();
    assert_eq!(selection.tournament_size(), 4);
}
