//! Sum command implementation
//!
//! Computes the reciprocal sum of an input array loaded from a file or
//! synthesized on the fly, choosing between sequential and parallel
//! execution.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Output;
use crate::config::RecipsumConfig;
use crate::parallel::{self, ExecutionStrategy};
use crate::sum::{SumOptions, parallel_sum_with, sequential_sum};

#[derive(Args)]
pub struct SumArgs {
    /// File with one floating-point value per line
    #[arg(long, value_name = "FILE", conflicts_with = "generate")]
    pub input: Option<PathBuf>,

    /// Synthesize an input array with values 1.0..=N
    #[arg(long, value_name = "N")]
    pub generate: Option<usize>,

    /// Number of tasks to fan out into at each split
    #[arg(short = 't', long)]
    pub tasks: Option<usize>,

    /// Range length at or below which a task reduces sequentially
    #[arg(long)]
    pub threshold: Option<usize>,

    /// Processing mode: auto (smart default), parallel, or sequential
    #[arg(long, value_enum, default_value_t = SumMode::Auto)]
    pub mode: SumMode,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SumMode {
    /// Pick sequential or parallel from the input size
    Auto,
    /// Always use the parallel task tree
    Parallel,
    /// Always use the sequential baseline
    Sequential,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON format
    Json,
}

#[derive(Serialize)]
struct SumReport<'a> {
    elements: usize,
    mode: &'a str,
    tasks: usize,
    threshold: usize,
    sum: f64,
    elapsed_ms: f64,
}

pub fn execute(args: SumArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = RecipsumConfig::load(config_path)?;
    parallel::init_thread_pool(&config.parallel)?;

    let values = load_values(&args)?;
    tracing::debug!("loaded {} input values", values.len());

    if values.iter().any(|v| *v == 0.0) {
        output.warning("input contains zero elements; the sum will not be finite");
    }

    let num_tasks = args.tasks.unwrap_or(config.sum.num_tasks);
    let threshold = args.threshold.unwrap_or(config.sum.threshold);

    let strategy = match args.mode {
        SumMode::Sequential => ExecutionStrategy::Sequential,
        SumMode::Parallel => ExecutionStrategy::Parallel { tasks: num_tasks },
        SumMode::Auto => {
            ExecutionStrategy::auto(values.len(), config.sum.min_parallel_len, num_tasks)
        }
    };

    let started = Instant::now();
    let (sum, mode_label, tasks_used) = match strategy {
        ExecutionStrategy::Sequential => (sequential_sum(&values), "sequential", 1),
        ExecutionStrategy::Parallel { tasks } => {
            let options = SumOptions {
                num_tasks: tasks,
                threshold,
            };
            (parallel_sum_with(&values, &options)?, "parallel", tasks)
        }
    };
    let elapsed = started.elapsed();

    match args.format {
        OutputFormat::Text => {
            output.key_value("Elements:", &values.len().to_string(), false);
            output.key_value("Mode:", mode_label, false);
            if tasks_used > 1 {
                output.key_value("Tasks:", &tasks_used.to_string(), false);
            }
            output.key_value("Sum:", &format!("{sum}"), true);
            output.verbose(&format!("completed in {elapsed:.2?}"));
        }
        OutputFormat::Json => {
            let report = SumReport {
                elements: values.len(),
                mode: mode_label,
                tasks: tasks_used,
                threshold,
                sum,
                elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Load the input array from the file argument, or synthesize one.
fn load_values(args: &SumArgs) -> Result<Vec<f64>> {
    if let Some(path) = &args.input {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display()))?;
        raw.lines()
            .enumerate()
            .map(|(idx, line)| (idx, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| {
                line.parse::<f64>()
                    .with_context(|| format!("invalid value on line {}: {line:?}", idx + 1))
            })
            .collect()
    } else if let Some(n) = args.generate {
        Ok((1..=n).map(|i| i as f64).collect())
    } else {
        anyhow::bail!("provide an input file with --input or synthesize one with --generate")
    }
}
