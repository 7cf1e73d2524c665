//! Library-level properties of the reciprocal sum engine

use recipsum::sum::{
    IndexRange, SumError, SumOptions, SumTask, chunk_range, chunk_size, parallel_sum,
    parallel_sum_range, parallel_sum_with, sequential_sum,
};

fn linear_values(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

fn relative_error(a: f64, b: f64) -> f64 {
    (a - b).abs() / b.abs().max(f64::MIN_POSITIVE)
}

/// Every fan-out must visit every element exactly once, so parallel and
/// sequential results agree within floating-point tolerance.
#[test]
fn test_parallel_matches_sequential_across_fan_outs() {
    let values = linear_values(10_000);
    let baseline = sequential_sum(&values);

    for num_tasks in [1, 2, 3, 8] {
        // Small threshold forces several levels of recursive splitting
        let options = SumOptions {
            num_tasks,
            threshold: 100,
        };
        let result = parallel_sum_with(&values, &options).unwrap();
        assert!(
            relative_error(result, baseline) < 1e-9,
            "num_tasks {num_tasks}: {result} vs {baseline}"
        );
    }
}

/// With the default threshold the root of a small array is a single leaf;
/// the result must still match the baseline exactly.
#[test]
fn test_default_threshold_small_input_is_leaf() {
    let values = linear_values(1_000);
    let baseline = sequential_sum(&values);
    let result = parallel_sum(&values, 4).unwrap();
    assert_eq!(result.to_bits(), baseline.to_bits());
}

#[test]
fn test_chunk_partitioner_covers_without_gaps() {
    for n_chunks in [1, 2, 3, 5, 8, 13] {
        for n_elements in [0, 1, 2, 7, 64, 100, 101] {
            let full = chunk_size(n_chunks, n_elements);
            let mut next_start = 0;
            for chunk in 0..n_chunks {
                let (start, end) = chunk_range(chunk, n_chunks, n_elements);
                assert_eq!(
                    start, next_start,
                    "chunk {chunk}/{n_chunks} over {n_elements}"
                );
                assert!(end >= start);
                assert!(end - start <= full);
                next_start = end;
            }
            assert_eq!(next_start, n_elements);
        }
    }
}

#[test]
fn test_threshold_boundary() {
    let values = vec![1.0; 32];

    // Exactly at the threshold: leaf
    let at = SumTask::new(&values, IndexRange::full(16), 2, 16);
    assert!(at.split_ranges().is_none());

    // One past the threshold: splits
    let above = SumTask::new(&values, IndexRange::full(17), 2, 16);
    let children = above.split_ranges().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].len() + children[1].len(), 17);
}

#[test]
fn test_degenerate_inputs() {
    assert_eq!(sequential_sum(&[]), 0.0);
    assert_eq!(parallel_sum(&[], 4).unwrap(), 0.0);

    assert_eq!(sequential_sum(&[8.0]), 0.125);
    assert_eq!(parallel_sum(&[8.0], 4).unwrap(), 0.125);
}

#[test]
fn test_worked_example() {
    let values = vec![1.0, 2.0, 4.0, 5.0];
    let expected = 1.95;

    let baseline = sequential_sum(&values);
    assert!((baseline - expected).abs() < 1e-12);

    let options = SumOptions {
        num_tasks: 2,
        threshold: 1,
    };
    let result = parallel_sum_with(&values, &options).unwrap();
    assert!((result - expected).abs() < 1e-12);
}

/// Repeated calls with identical inputs must be bit-identical: the
/// combination order is fixed even though thread interleaving is not.
#[test]
fn test_deterministic_across_runs() {
    let values: Vec<f64> = (1..=50_000).map(|i| 1.0 + (i % 97) as f64).collect();
    let options = SumOptions {
        num_tasks: 3,
        threshold: 64,
    };

    let first = parallel_sum_with(&values, &options).unwrap();
    for _ in 0..5 {
        let again = parallel_sum_with(&values, &options).unwrap();
        assert_eq!(first.to_bits(), again.to_bits());
    }
}

#[test]
fn test_single_task_equals_baseline() {
    let values = linear_values(5_000);
    let result = parallel_sum(&values, 1).unwrap();
    assert_eq!(result.to_bits(), sequential_sum(&values).to_bits());
}

#[test]
fn test_error_taxonomy() {
    let values = vec![1.0, 2.0, 3.0];

    let err = parallel_sum(&values, 0).unwrap_err();
    assert!(matches!(err, SumError::InvalidArgument { .. }));

    let options = SumOptions::default();
    let err = parallel_sum_range(&values, 2, 1, &options).unwrap_err();
    assert_eq!(
        err,
        SumError::InvalidRange {
            start: 2,
            end: 1,
            len: 3
        }
    );

    let err = parallel_sum_range(&values, 0, 4, &options).unwrap_err();
    assert!(matches!(err, SumError::InvalidRange { end: 4, .. }));
}

/// Zero and non-finite elements are not validated; IEEE-754 semantics flow
/// through the summation instead.
#[test]
fn test_ieee_propagation() {
    let values = vec![1.0, 0.0, 2.0];
    assert_eq!(sequential_sum(&values), f64::INFINITY);
    assert_eq!(parallel_sum(&values, 2).unwrap(), f64::INFINITY);

    let values = vec![1.0, f64::NAN];
    assert!(sequential_sum(&values).is_nan());
    assert!(parallel_sum(&values, 2).unwrap().is_nan());
}

#[test]
fn test_oversubscribed_fan_out() {
    // More tasks than elements: trailing chunks are empty but the result
    // is unchanged
    let values = vec![1.0, 2.0, 4.0];
    let options = SumOptions {
        num_tasks: 8,
        threshold: 1,
    };
    let result = parallel_sum_with(&values, &options).unwrap();
    assert!((result - 1.75).abs() < 1e-12);
}
