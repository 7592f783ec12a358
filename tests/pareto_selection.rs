use moea_core::config::SelectionConfig;
use moea_core::engines::generation::{
    assign_ranks, compare, dominates, equal_distribution, linear_rank_distribution, roulette_index,
    universal_sampling, Dominance, SelectionEngine,
};
use moea_core::Genotype;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vector(rng: &mut StdRng, dimension: usize) -> Vec<f64> {
    (0..dimension).map(|_| rng.gen_range(0..4) as f64).collect()
}

#[test]
fn test_dominance_is_antisymmetric_and_irreflexive() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..500 {
        let a = random_vector(&mut rng, 3);
        let b = random_vector(&mut rng, 3);

        assert!(!dominates(&a, &a).unwrap());
        if dominates(&a, &b).unwrap() {
            assert!(!dominates(&b, &a).unwrap());
        }
        assert_eq!(compare(&a, &b).unwrap().as_i8(), -compare(&b, &a).unwrap().as_i8());
    }
}

#[test]
fn test_dominance_rejects_mismatched_lengths() {
    assert!(compare(&[1.0, 2.0], &[1.0]).is_err());
    assert_eq!(compare(&[], &[]).unwrap(), Dominance::Neither);
}

#[test]
fn test_linear_rank_reduces_to_equal_distribution() {
    let linear = linear_rank_distribution(3, 1.0, true).unwrap();
    let equal = equal_distribution(3, true).unwrap();
    for (l, e) in linear.iter().zip(&equal) {
        assert!((l - e).abs() < 1e-12);
    }
    let mut values = linear.clone();
    values.sort_by(f64::total_cmp);
    for (value, expected) in values.iter().zip([1.0 / 3.0, 2.0 / 3.0, 1.0]) {
        assert!((value - expected).abs() < 1e-12);
    }
}

#[test]
fn test_roulette_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(5);
    for steps in 1..20 {
        let distribution = linear_rank_distribution(steps, 1.7, false).unwrap();
        for _ in 0..50 {
            let index = roulette_index(&distribution, rng.gen::<f64>()).unwrap();
            assert!(index < steps);
        }
    }
}

#[test]
fn test_universal_sampling_returns_requested_amount() {
    let mut rng = StdRng::seed_from_u64(8);
    for steps in 1..15 {
        let cumulative = linear_rank_distribution(steps, 1.3, true).unwrap();
        for amount in [1, 2, 7, 31] {
            let selected = universal_sampling(&cumulative, amount, &mut rng).unwrap();
            assert_eq!(selected.len(), amount);
            assert!(selected.iter().all(|&i| i < steps));
        }
    }
}

#[test]
fn test_rank_then_select() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut population: Vec<Genotype> = (0..30)
        .map(|i| Genotype::parametric(i, vec![]).with_fitness(random_vector(&mut rng, 2)))
        .collect();

    let fronts = assign_ranks(&mut population).unwrap();
    assert_eq!(fronts.iter().map(Vec::len).sum::<usize>(), population.len());
    assert!(population.iter().all(|g| g.rank.is_some()));

    let engine = SelectionEngine::new(&SelectionConfig::default()).unwrap();
    let parents = engine.select(&population, 30, &mut rng).unwrap();
    assert_eq!(parents.len(), 30);
    assert!(parents.iter().all(|&i| i < population.len()));
}
