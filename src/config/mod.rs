//! Configuration loading for recipsum
//!
//! Layered figment configuration: embedded defaults, then `recipsum.toml`
//! (or an explicit `--config` file), then `RECIPSUM_`-prefixed environment
//! variables.

mod core;

pub use self::core::{RecipsumConfig, SumSettings};
