//! Benchmark suite for U-CutStock
//!
//! This crate provides:
//! - JSON dataset parser for cutting-stock instances
//! - Built-in fixtures and a seeded synthetic instance generator
//! - Benchmark runner comparing strategies and kerf policies
//! - Result recording (JSON, CSV, summary table)

mod dataset;
mod parser;
mod result;
mod runner;
mod synthetic;

pub use dataset::{Dataset, DatasetInfo};
pub use parser::{DatasetParser, ParseError};
pub use result::{BenchmarkResult, RunResult, StrategySummary};
pub use runner::{BenchmarkConfig, BenchmarkRunner};
pub use synthetic::{SyntheticGenerator, STOCK_LENGTHS};
