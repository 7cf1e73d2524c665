//! Recursive sum tasks and the sequential leaf reducer.

use rayon::prelude::*;

use super::chunk::chunk_range;
use super::range::IndexRange;

/// A unit of work bound to a contiguous index range of the input.
///
/// A task whose range is at most `threshold` elements long is a leaf and
/// reduces sequentially. Anything larger splits into `fan_out` chunked
/// children scoped to its own range; children execute on the rayon pool and
/// their values are combined in ascending child order, so results are
/// reproducible regardless of thread interleaving.
///
/// A fan-out of 1 is always a leaf: a single chunk would reproduce the
/// parent range and the recursion would never terminate. Ranges of length
/// 0 or 1 are leaves for the same reason, whatever the threshold.
pub struct SumTask<'a> {
    input: &'a [f64],
    range: IndexRange,
    fan_out: usize,
    threshold: usize,
}

impl<'a> SumTask<'a> {
    pub fn new(input: &'a [f64], range: IndexRange, fan_out: usize, threshold: usize) -> Self {
        debug_assert!(fan_out >= 1);
        debug_assert!(range.end() <= input.len());
        Self {
            input,
            range,
            fan_out,
            threshold,
        }
    }

    /// The range this task reduces.
    pub fn range(&self) -> IndexRange {
        self.range
    }

    /// Child ranges this task splits into, or `None` when it is a leaf.
    pub fn split_ranges(&self) -> Option<Vec<IndexRange>> {
        let len = self.range.len();
        if len <= self.threshold || len <= 1 || self.fan_out < 2 {
            return None;
        }
        let base = self.range.start();
        Some(
            (0..self.fan_out)
                .map(|chunk| {
                    let (start, end) = chunk_range(chunk, self.fan_out, len);
                    IndexRange::from_parts(base + start, base + end)
                })
                .collect(),
        )
    }

    /// Execute this task to completion and return its value.
    ///
    /// Non-leaf tasks block until every child is complete before combining;
    /// that join is the only suspension point in the computation.
    pub fn compute(&self) -> f64 {
        match self.split_ranges() {
            None => reduce_sequential(self.input, self.range),
            Some(children) => children
                .par_iter()
                .map(|child| {
                    SumTask::new(self.input, *child, self.fan_out, self.threshold).compute()
                })
                // collect preserves child order; the final fold must not
                // depend on completion order
                .collect::<Vec<f64>>()
                .into_iter()
                .sum(),
        }
    }
}

/// Sum of `1 / input[i]` over `range`, accumulated in ascending index order.
///
/// Ascending order is the canonical summation order for the whole engine;
/// every other path must produce bit-identical results to this one.
pub(crate) fn reduce_sequential(input: &[f64], range: IndexRange) -> f64 {
    input[range.start()..range.end()].iter().map(|v| 1.0 / v).sum()
}
