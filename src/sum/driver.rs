//! Execution driver: public entry points over the task tree.

use crate::parallel;

use super::error::SumError;
use super::range::IndexRange;
use super::task::{SumTask, reduce_sequential};

/// Range length at or below which a task always reduces sequentially.
pub const DEFAULT_THRESHOLD: usize = 500_000;

/// Control parameters for a parallel reciprocal sum.
///
/// `num_tasks` and `threshold` are independent: the first sets the fan-out
/// of every split, the second bounds leaf size. Neither is tied to the
/// worker-thread count, which only affects throughput.
#[derive(Debug, Clone, Copy)]
pub struct SumOptions {
    /// Number of chunked children a splitting task fans out into.
    pub num_tasks: usize,
    /// Maximum range length reduced sequentially as a leaf.
    pub threshold: usize,
}

impl Default for SumOptions {
    fn default() -> Self {
        Self {
            num_tasks: 2,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SumOptions {
    fn validate(&self) -> Result<(), SumError> {
        if self.num_tasks < 1 {
            return Err(SumError::InvalidArgument {
                reason: "num_tasks must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Reciprocal sum of the whole input with no parallelism.
///
/// Numerically identical to a single leaf reduction over the full array:
/// ascending index order, IEEE-754 propagation of non-finite values.
pub fn sequential_sum(input: &[f64]) -> f64 {
    reduce_sequential(input, IndexRange::full(input.len()))
}

/// Reciprocal sum with divide-and-conquer parallelism.
///
/// Builds a root task spanning the full array with the requested fan-out
/// and the default threshold, then blocks until the aggregated value is
/// available. `num_tasks == 1` is valid and equivalent to the sequential
/// baseline.
pub fn parallel_sum(input: &[f64], num_tasks: usize) -> Result<f64, SumError> {
    parallel_sum_with(
        input,
        &SumOptions {
            num_tasks,
            ..SumOptions::default()
        },
    )
}

/// Reciprocal sum with explicit control parameters.
pub fn parallel_sum_with(input: &[f64], options: &SumOptions) -> Result<f64, SumError> {
    options.validate()?;
    let root = SumTask::new(
        input,
        IndexRange::full(input.len()),
        options.num_tasks,
        options.threshold,
    );
    Ok(parallel::install(|| root.compute()))
}

/// Reciprocal sum over `[start, end)` of the input only.
///
/// Malformed bounds fail with [`SumError::InvalidRange`] before any work
/// executes.
pub fn parallel_sum_range(
    input: &[f64],
    start: usize,
    end: usize,
    options: &SumOptions,
) -> Result<f64, SumError> {
    options.validate()?;
    let range = IndexRange::new(start, end, input.len())?;
    let root = SumTask::new(input, range, options.num_tasks, options.threshold);
    Ok(parallel::install(|| root.compute()))
}
