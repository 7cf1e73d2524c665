//! Reciprocal array sum engine
//!
//! Divide-and-conquer reduction of `sum(1 / a[i])` over an in-memory `f64`
//! slice. A root task spanning the array splits N-way into chunked child
//! tasks until ranges fall under the leaf threshold, leaves reduce
//! sequentially, and values combine bottom-up in a fixed order so results
//! are bit-for-bit reproducible.

// Sub-modules
mod chunk;
mod driver;
mod error;
mod range;
mod task;

// Public API exports
pub use chunk::{chunk_range, chunk_size};
pub use driver::{
    DEFAULT_THRESHOLD, SumOptions, parallel_sum, parallel_sum_range, parallel_sum_with,
    sequential_sum,
};
pub use error::SumError;
pub use range::IndexRange;
pub use task::SumTask;
