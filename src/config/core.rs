use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;

use crate::parallel::ParallelConfig;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Settings for the reduction engine.
#[derive(Debug, Clone, Deserialize)]
pub struct SumSettings {
    /// Range length at or below which a task reduces sequentially
    pub threshold: usize,
    /// Default fan-out for parallel runs
    pub num_tasks: usize,
    /// Input length below which auto mode stays sequential
    pub min_parallel_len: usize,
}

/// Merged configuration for the whole tool.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipsumConfig {
    pub sum: SumSettings,
    pub parallel: ParallelConfig,
}

impl RecipsumConfig {
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        // If a custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            figment = figment.merge(Toml::file(custom_path));
        } else {
            figment = figment.merge(Toml::file("recipsum.toml"));
        }

        // Environment variables always have highest priority
        // (RECIPSUM_SUM__THRESHOLD, RECIPSUM_PARALLEL__MAX_THREADS, ...)
        figment = figment.merge(Env::prefixed("RECIPSUM_").split("__"));

        Ok(figment.extract()?)
    }
}
