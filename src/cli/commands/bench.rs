//! Bench command implementation
//!
//! Times the sequential baseline against the parallel task tree on a
//! synthesized array and reports the speedup per fan-out.

use anyhow::Result;
use clap::Args;
use std::time::{Duration, Instant};

use crate::cli::Output;
use crate::config::RecipsumConfig;
use crate::parallel;
use crate::sum::{SumError, SumOptions, parallel_sum_with, sequential_sum};

#[derive(Args)]
pub struct BenchArgs {
    /// Number of synthesized elements (values are 1.0..=N)
    #[arg(long, default_value = "10000000")]
    pub size: usize,

    /// Fan-out values to compare (comma-separated)
    #[arg(short = 't', long, value_delimiter = ',', default_values_t = vec![2usize, 4, 8])]
    pub tasks: Vec<usize>,

    /// Timed runs per configuration (best run is reported)
    #[arg(long, default_value = "5")]
    pub runs: usize,

    /// Range length at or below which a task reduces sequentially
    #[arg(long)]
    pub threshold: Option<usize>,
}

pub fn execute(args: BenchArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    if args.runs == 0 {
        anyhow::bail!("--runs must be at least 1");
    }

    let config = RecipsumConfig::load(config_path)?;
    let workers = parallel::init_thread_pool(&config.parallel)?;
    let threshold = args.threshold.unwrap_or(config.sum.threshold);

    output.header(&format!(
        "Reciprocal sum benchmark — {} elements, {} worker threads",
        args.size, workers
    ));

    let values: Vec<f64> = (1..=args.size).map(|i| i as f64).collect();

    let (seq_best, seq_sum) = time_best(args.runs, || Ok::<_, SumError>(sequential_sum(&values)))?;
    output.key_value("Sequential:", &format!("{seq_best:.2?}"), false);

    let mut diverged = false;
    for &tasks in &args.tasks {
        let options = SumOptions {
            num_tasks: tasks,
            threshold,
        };

        // Warm-up run so pool spin-up does not skew the first measurement
        parallel_sum_with(&values, &options)?;

        let (par_best, par_sum) = time_best(args.runs, || parallel_sum_with(&values, &options))?;
        let speedup = seq_best.as_secs_f64() / par_best.as_secs_f64();
        output.key_value(
            &format!("Parallel ({tasks} tasks):"),
            &format!("{par_best:.2?} ({speedup:.2}x)"),
            speedup > 1.0,
        );

        if (par_sum - seq_sum).abs() > seq_sum.abs() * 1e-9 {
            diverged = true;
            output.warning(&format!(
                "parallel result diverged from sequential baseline: {par_sum} vs {seq_sum}"
            ));
        }
    }

    if !diverged {
        output.blank_line();
        output.success("all parallel results matched the sequential baseline");
    }

    Ok(())
}

/// Run `op` the requested number of times and keep the fastest run.
fn time_best<F, E>(runs: usize, mut op: F) -> Result<(Duration, f64), E>
where
    F: FnMut() -> Result<f64, E>,
{
    let mut best = Duration::MAX;
    let mut last = 0.0;
    for _ in 0..runs {
        let started = Instant::now();
        last = op()?;
        let elapsed = started.elapsed();
        if elapsed < best {
            best = elapsed;
        }
    }
    Ok((best, last))
}
