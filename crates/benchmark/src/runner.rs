//! Benchmark runner for cutting-stock datasets.

use crate::dataset::Dataset;
use crate::result::{BenchmarkResult, RunResult};
use u_cutstock_core::{Config, KerfPolicy, Solver, Strategy};
use u_cutstock_d1::CutOptimizer;

/// Configuration for benchmark runs.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Strategies to benchmark.
    pub strategies: Vec<Strategy>,
    /// Kerf policies to benchmark.
    pub kerf_policies: Vec<KerfPolicy>,
    /// Number of runs per configuration (for averaging time).
    pub runs_per_config: usize,
    /// Whether to show progress.
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            strategies: Strategy::all().to_vec(),
            kerf_policies: vec![KerfPolicy::BetweenCuts],
            runs_per_config: 1,
            show_progress: true,
        }
    }
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategies to benchmark.
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Sets the kerf policies to benchmark.
    pub fn with_kerf_policies(mut self, policies: Vec<KerfPolicy>) -> Self {
        self.kerf_policies = policies;
        self
    }

    /// Sets the number of runs per configuration.
    pub fn with_runs_per_config(mut self, n: usize) -> Self {
        self.runs_per_config = n.max(1);
        self
    }

    /// Disables progress output.
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Quick preset: default policy, one run each.
    pub fn quick() -> Self {
        Self::default()
    }

    /// Every strategy under every kerf policy, three runs each.
    pub fn standard() -> Self {
        Self {
            strategies: Strategy::all().to_vec(),
            kerf_policies: vec![KerfPolicy::BetweenCuts, KerfPolicy::EveryCut],
            runs_per_config: 3,
            show_progress: true,
        }
    }
}

/// Benchmark runner.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    /// Creates a new benchmark runner.
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Runs benchmarks on a single dataset.
    ///
    /// Failed runs are logged and skipped.
    pub fn run_dataset(&self, dataset: &Dataset) -> BenchmarkResult {
        let mut results = BenchmarkResult::new();

        if self.config.show_progress {
            let info = dataset.info();
            println!("\nBenchmarking dataset: {}", dataset.name);
            println!("  Stock types: {} ({} bars)", info.stock_types, info.total_bars);
            println!("  Cut types: {} ({} pieces)", info.cut_types, info.total_pieces);
            println!("  Kerf: {}", info.kerf_width);
            println!("  Lower bound: {} bars", dataset.lower_bound());
        }

        for strategy in &self.config.strategies {
            for policy in &self.config.kerf_policies {
                if self.config.show_progress {
                    println!("  Running {} / {:?}...", strategy.name(), policy);
                }

                let solver = CutOptimizer::new(
                    Config::new()
                        .with_strategy(*strategy)
                        .with_kerf_policy(*policy),
                );

                for run_idx in 0..self.config.runs_per_config {
                    match solver.solve(&dataset.input) {
                        Ok(result) => {
                            let mut run =
                                RunResult::new(dataset.name.clone(), *strategy, *policy, &result);
                            if let Some(best) = dataset.best_known {
                                run = run.with_best_known(best);
                            }

                            if self.config.show_progress {
                                println!(
                                    "    Run {}: bars={}, waste={:.1}mm ({:.1}%), time={:.3}ms",
                                    run_idx + 1,
                                    run.bars_used,
                                    run.total_waste,
                                    run.waste_percent,
                                    run.time_ms
                                );
                            }

                            results.add_run(run);
                        }
                        Err(e) => {
                            log::warn!(
                                "{} / {:?} run {} on '{}' failed: {}",
                                strategy.name(),
                                policy,
                                run_idx + 1,
                                dataset.name,
                                e
                            );
                        }
                    }
                }
            }
        }

        results
    }

    /// Runs benchmarks on multiple datasets.
    pub fn run_datasets(&self, datasets: &[Dataset]) -> BenchmarkResult {
        let mut combined = BenchmarkResult::new();
        for dataset in datasets {
            combined.merge(self.run_dataset(dataset));
        }
        combined
    }
}
