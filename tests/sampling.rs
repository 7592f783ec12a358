use moea_core::config::SamplingConfig;
use moea_core::engines::evaluation::{
    build_strategy, NoNoise, ProgressPublisher, SampleData, SamplingStrategy,
    StandardErrorSampling,
};
use rayon::prelude::*;
use std::sync::Arc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_no_noise_allows_one_sample_per_reference() {
    let mut data = SampleData::new();
    for reference in 0..5 {
        assert!(NoNoise.can_sample(&data, reference));
        data.add_sample(reference, vec![0.1, 0.2]).unwrap();
        for _ in 0..3 {
            assert!(!NoNoise.can_sample(&data, reference));
        }
    }
}

#[test]
fn test_standard_error_governs_middle_range() {
    let mut publisher = ProgressPublisher::new();
    let strategy =
        StandardErrorSampling::subscribed(2, 6, 2.0, 0.0, 0.1, &mut publisher).unwrap();

    // Noisy reference: standard error stays large
    let mut noisy = SampleData::new();
    for (i, value) in [0.0, 1.0, 0.0, 1.0, 0.0, 1.0].into_iter().enumerate() {
        let expected = i < 6;
        assert_eq!(strategy.can_sample(&noisy, 1), expected);
        noisy.add_sample(1, vec![value]).unwrap();
    }
    assert!(!strategy.can_sample(&noisy, 1));

    // Quiet reference stops at the lower bound
    let mut quiet = SampleData::new();
    quiet.add_sample(2, vec![0.5]).unwrap();
    assert!(strategy.can_sample(&quiet, 2));
    quiet.add_sample(2, vec![0.51]).unwrap();
    assert!(!strategy.can_sample(&quiet, 2));

    // Late in the run the threshold reaches seth_min and even small noise counts
    publisher.publish(1.0);
    assert_eq!(strategy.max_std_err(), 0.0);
    assert!(strategy.can_sample(&quiet, 2));
}

#[test]
fn test_concurrent_progress_and_queries() {
    init_logging();
    let mut publisher = ProgressPublisher::new();
    let strategy = build_strategy(&SamplingConfig::standard_error(2, 10), &mut publisher).unwrap();

    let mut data = SampleData::new();
    for value in [0.0, 0.2, 0.4] {
        data.add_sample(0, vec![value]).unwrap();
    }
    let data = Arc::new(data);

    let publisher = std::sync::Mutex::new(publisher);
    let decisions: Vec<bool> = (0..1000)
        .into_par_iter()
        .map(|i| {
            if i % 10 == 0 {
                publisher.lock().unwrap().publish(i as f64 / 1000.0);
            }
            strategy.can_sample(&data, 0)
        })
        .collect();

    // Standard error of 0.1155 exceeds every threshold of the default schedule
    assert!(decisions.into_iter().all(|d| d));
}
