use std::sync::OnceLock;

use anyhow::Result;
use serde::Deserialize;

/// Process-wide settings for the parallel execution facility.
#[derive(Debug, Clone, Deserialize)]
pub struct ParallelConfig {
    /// Maximum number of worker threads (0 = derive from CPU count)
    pub max_threads: usize,
    /// Percentage of CPU cores to utilize (1-100)
    pub thread_percentage: u8,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_threads: 0,
            thread_percentage: 75,
        }
    }
}

/// Shared rayon pool - built once, used by every reduction in the process
static POOL: OnceLock<rayon::ThreadPool> = OnceLock::new();

/// Build the shared worker pool from `config` and return its thread count.
///
/// Set-once lifecycle: the first call sizes and builds the pool, later
/// calls keep the existing pool and return its size. Pool size is advisory
/// for throughput only; task fan-out alone controls decomposition, so
/// results never depend on it.
pub fn init_thread_pool(config: &ParallelConfig) -> Result<usize> {
    if let Some(pool) = POOL.get() {
        tracing::debug!("thread pool already initialized");
        return Ok(pool.current_num_threads());
    }

    let workers = calculate_optimal_workers(config.max_threads, config.thread_percentage);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("recipsum-worker-{i}"))
        .build()?;

    if POOL.set(pool).is_err() {
        tracing::debug!("thread pool already initialized");
    }
    let active = POOL
        .get()
        .map(|p| p.current_num_threads())
        .unwrap_or(workers);
    tracing::info!("parallel execution using {active} worker threads");
    Ok(active)
}

/// Run `op` inside the shared pool.
///
/// When no pool has been configured, `op` runs on the caller's thread and
/// any nested parallelism lands on rayon's default global pool.
pub fn install<R, F>(op: F) -> R
where
    F: FnOnce() -> R + Send,
    R: Send,
{
    match POOL.get() {
        Some(pool) => pool.install(op),
        None => op(),
    }
}

/// Calculate optimal workers based on available system resources and
/// configuration limits.
///
/// Detects cores with `num_cpus`, applies the configured percentage, caps
/// at `max_threads_config` when non-zero, and never returns less than 1.
/// No domain knowledge here: workload-specific adaptation belongs to the
/// caller.
pub fn calculate_optimal_workers(max_threads_config: usize, thread_percentage: u8) -> usize {
    let available_cores = num_cpus::get();

    let workers_by_percentage =
        std::cmp::max(1, (available_cores * thread_percentage as usize) / 100);

    if max_threads_config > 0 {
        std::cmp::min(max_threads_config, workers_by_percentage)
    } else {
        workers_by_percentage
    }
}

/// Execution strategy for a single reduction.
#[derive(Debug, Clone)]
pub enum ExecutionStrategy {
    Sequential,
    Parallel { tasks: usize },
}

impl ExecutionStrategy {
    /// Threshold-based choice between sequential and parallel execution.
    ///
    /// Inputs shorter than `min_len_for_parallel` skip the fan-out overhead
    /// entirely. The caller provides the fan-out; this method only makes
    /// the threshold decision.
    pub fn auto(input_len: usize, min_len_for_parallel: usize, tasks: usize) -> Self {
        if input_len >= min_len_for_parallel {
            ExecutionStrategy::Parallel { tasks }
        } else {
            ExecutionStrategy::Sequential
        }
    }
}
