//! # recipsum - Parallel reciprocal array sum
//!
//! recipsum computes `sum(1 / a[i])` over an in-memory `f64` array using
//! recursive divide-and-conquer task decomposition:
//!
//! - **Deterministic results**: child values always combine in ascending
//!   index order, so repeated runs are bit-identical regardless of thread
//!   interleaving
//! - **Independent knobs**: task fan-out and the sequential leaf threshold
//!   are separate from the worker-thread count, which is advisory only
//! - **Multi-threaded execution** on a rayon worker pool sized from the
//!   host CPU count and configuration
//!
//! ## Library Usage
//!
//! ```rust
//! use recipsum::sum::{parallel_sum, sequential_sum};
//!
//! let values = vec![1.0, 2.0, 4.0, 5.0];
//! let baseline = sequential_sum(&values);
//! let parallel = parallel_sum(&values, 2)?;
//!
//! assert!((baseline - parallel).abs() < 1e-9);
//! assert!((baseline - 1.95).abs() < 1e-12);
//! # Ok::<(), recipsum::sum::SumError>(())
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Sum a file with one value per line
//! recipsum sum --input values.txt
//!
//! # Synthesize 10M elements and fan out into 8 tasks
//! recipsum sum --generate 10000000 --tasks 8 --mode parallel
//!
//! # Compare sequential and parallel execution
//! recipsum bench --size 50000000 --tasks 2,4,8
//! ```

pub mod cli;
pub mod config;
pub mod parallel;
pub mod sum;
