use paretoga::{
    crowding::{assign_crowding_distance, sort_by_crowding_distance},
    dominance::dominates,
    population::Population,
    ranking::{non_dominated_fronts, Ranking},
    replacement::truncate,
    rng::RandomNumberGenerator,
    solution::Solution,
};

fn random_population(
    size: usize,
    objectives: usize,
    rng: &mut RandomNumberGenerator,
) -> Population<usize> {
    (0..size)
        .map(|id| {
            // Coarse grid values so that ties and duplicates actually occur.
            let values = (0..objectives)
                .map(|_| (rng.gen_range(0.0, 10.0)).floor())
                .collect();
            Solution::with_objectives(id, values)
        })
        .collect()
}

#[test]
fn test_fronts_partition_the_population() {
    let mut rng = RandomNumberGenerator::from_seed(11);

    for round in 0..20 {
        let size = 5 + round * 7;
        let ranking = Ranking::new(random_population(size, 2 + round % 3, &mut rng));

        let mut ids: Vec<usize> = ranking
            .fronts()
            .iter()
            .flat_map(|front| front.iter().map(|s| *s.variables()))
            .collect();
        ids.sort_unstable();

        assert_eq!(ids, (0..size).collect::<Vec<_>>());
        assert!(ranking.fronts().iter().all(|front| !front.is_empty()));
    }
}

#[test]
fn test_fronts_are_internally_non_dominated() {
    let mut rng = RandomNumberGenerator::from_seed(12);
    let ranking = Ranking::new(random_population(120, 3, &mut rng));

    for front in ranking.fronts() {
        for a in front {
            for b in front {
                assert!(!dominates(a, b));
            }
        }
    }
}

#[test]
fn test_every_later_member_is_dominated_by_the_previous_front() {
    let mut rng = RandomNumberGenerator::from_seed(13);
    let ranking = Ranking::new(random_population(150, 2, &mut rng));

    for (rank, pair) in ranking.fronts().windows(2).enumerate() {
        let (better, worse) = (&pair[0], &pair[1]);
        for member in worse {
            assert_eq!(member.rank(), rank + 1);
            assert!(better.iter().any(|b| dominates(b, member)));
        }
    }
}

#[test]
fn test_index_fronts_match_ranking() {
    let mut rng = RandomNumberGenerator::from_seed(14);
    let population = random_population(60, 2, &mut rng);

    let indices = non_dominated_fronts(population.as_slice());
    let ranking = Ranking::new(population);

    let sizes: Vec<usize> = indices.iter().map(Vec::len).collect();
    assert_eq!(sizes, ranking.front_sizes());
}

#[test]
fn test_truncation_keeps_size_and_elitism() {
    let mut rng = RandomNumberGenerator::from_seed(15);

    for target in [1, 7, 20, 33, 50] {
        let union = random_population(100, 2, &mut rng);
        let ranking = Ranking::new(union);
        let sizes = ranking.front_sizes();

        let survivors = truncate(ranking, target);
        assert_eq!(survivors.len(), target);

        // Every front below the worst surviving rank is kept whole.
        let worst = survivors.iter().map(|s| s.rank()).max().unwrap();
        for (rank, &size) in sizes.iter().enumerate().take(worst) {
            let kept = survivors.iter().filter(|s| s.rank() == rank).count();
            assert_eq!(kept, size);
        }
    }
}

#[test]
fn test_boundary_members_have_infinite_crowding() {
    let mut rng = RandomNumberGenerator::from_seed(16);
    let ranking = Ranking::new(random_population(80, 2, &mut rng));
    let mut front = ranking.into_first_front().into_vec();

    assign_crowding_distance(&mut front);
    for m in 0..2 {
        let min = front
            .iter()
            .map(|s| s.objective(m))
            .fold(f64::INFINITY, f64::min);
        let max = front
            .iter()
            .map(|s| s.objective(m))
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(front
            .iter()
            .any(|s| s.objective(m) == min && s.crowding_distance().is_infinite()));
        assert!(front
            .iter()
            .any(|s| s.objective(m) == max && s.crowding_distance().is_infinite()));
    }

    sort_by_crowding_distance(&mut front);
    assert!(front
        .windows(2)
        .all(|w| w[0].crowding_distance() >= w[1].crowding_distance()));
}
