//! Benchmark result types and recording.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use u_cutstock_core::{CalculationResult, KerfPolicy, Strategy};

/// Result of a single benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Dataset name
    pub dataset: String,
    /// Strategy used
    pub strategy: String,
    /// Kerf policy used
    pub kerf_policy: String,
    /// Bars used (lower is better)
    pub bars_used: usize,
    /// Pieces cut
    pub pieces: usize,
    /// Total waste in mm
    pub total_waste: f64,
    /// Waste as a percentage of used stock length
    pub waste_percent: f64,
    /// Mean utilization over used bars (0 - 100)
    pub utilization: f64,
    /// Purchase cost of the used bars
    pub cost: f64,
    /// Computation time in milliseconds
    pub time_ms: f64,
    /// Best known bar count for comparison
    pub best_known: Option<usize>,
    /// Gap from best known (percentage)
    pub gap_percent: Option<f64>,
}

impl RunResult {
    /// Records a calculation result.
    pub fn new(
        dataset: impl Into<String>,
        strategy: Strategy,
        kerf_policy: KerfPolicy,
        result: &CalculationResult,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            strategy: strategy.name().to_string(),
            kerf_policy: format!("{:?}", kerf_policy),
            bars_used: result.total_stock,
            pieces: result.total_cuts(),
            total_waste: result.total_waste,
            waste_percent: result.waste_percent(),
            utilization: result.average_utilization,
            cost: result.total_cost,
            time_ms: result.execution_time_ms,
            best_known: None,
            gap_percent: None,
        }
    }

    /// Sets the best known bar count and calculates gap.
    pub fn with_best_known(mut self, best: usize) -> Self {
        self.best_known = Some(best);
        if best > 0 {
            self.gap_percent =
                Some((self.bars_used as f64 - best as f64) / best as f64 * 100.0);
        }
        self
    }
}

/// Collection of benchmark results.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Individual run results
    pub runs: Vec<RunResult>,
    /// Crate version that produced the runs
    pub version: String,
}

impl BenchmarkResult {
    /// Creates a new benchmark result.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Adds a run result.
    pub fn add_run(&mut self, result: RunResult) {
        self.runs.push(result);
    }

    /// Appends all runs of another result.
    pub fn merge(&mut self, other: BenchmarkResult) {
        self.runs.extend(other.runs);
    }

    /// Run with the fewest bars, then least waste. Earlier runs win ties.
    pub fn best_run(&self) -> Option<&RunResult> {
        self.runs.iter().reduce(|best, run| {
            let better = run.bars_used < best.bars_used
                || (run.bars_used == best.bars_used && run.total_waste < best.total_waste);
            if better {
                run
            } else {
                best
            }
        })
    }

    /// Saves results to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Saves results to a CSV file.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        self.write_csv(&mut file)
    }

    /// Writes results as CSV.
    pub fn write_csv(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(
            out,
            "dataset,strategy,kerf_policy,bars_used,pieces,total_waste,waste_percent,utilization,cost,time_ms,best_known,gap_percent"
        )?;

        for run in &self.runs {
            writeln!(
                out,
                "{},{},{},{},{},{:.2},{:.1},{:.1},{:.2},{:.3},{},{}",
                run.dataset,
                run.strategy,
                run.kerf_policy,
                run.bars_used,
                run.pieces,
                run.total_waste,
                run.waste_percent,
                run.utilization,
                run.cost,
                run.time_ms,
                run.best_known.map_or(String::new(), |b| b.to_string()),
                run.gap_percent
                    .map_or(String::new(), |g| format!("{:.2}", g)),
            )?;
        }

        Ok(())
    }

    /// Prints a summary table to stdout.
    pub fn print_summary(&self) {
        println!("\n{:=<96}", "");
        println!("BENCHMARK RESULTS");
        println!("{:=<96}", "");
        println!(
            "{:<16} {:<6} {:<12} {:>6} {:>12} {:>8} {:>8} {:>10} {:>8}",
            "Dataset", "Strat", "Kerf", "Bars", "Waste(mm)", "Waste%", "Util%", "Time(ms)", "Gap%"
        );
        println!("{:-<96}", "");

        for run in &self.runs {
            let gap_str = run
                .gap_percent
                .map_or("-".to_string(), |g| format!("{:.1}", g));
            println!(
                "{:<16} {:<6} {:<12} {:>6} {:>12.1} {:>8.1} {:>8.1} {:>10.3} {:>8}",
                run.dataset,
                run.strategy,
                run.kerf_policy,
                run.bars_used,
                run.total_waste,
                run.waste_percent,
                run.utilization,
                run.time_ms,
                gap_str
            );
        }

        println!("{:=<96}\n", "");
    }

    /// Computes summary statistics grouped by strategy.
    pub fn summary_by_strategy(&self) -> Vec<StrategySummary> {
        let mut by_strategy: BTreeMap<&str, Vec<&RunResult>> = BTreeMap::new();
        for run in &self.runs {
            by_strategy.entry(run.strategy.as_str()).or_default().push(run);
        }

        by_strategy
            .into_iter()
            .map(|(strategy, runs)| {
                let n = runs.len() as f64;
                StrategySummary {
                    strategy: strategy.to_string(),
                    run_count: runs.len(),
                    avg_bars: runs.iter().map(|r| r.bars_used as f64).sum::<f64>() / n,
                    avg_waste: runs.iter().map(|r| r.total_waste).sum::<f64>() / n,
                    avg_utilization: runs.iter().map(|r| r.utilization).sum::<f64>() / n,
                    avg_time_ms: runs.iter().map(|r| r.time_ms).sum::<f64>() / n,
                }
            })
            .collect()
    }
}

/// Summary statistics for a strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy: String,
    pub run_count: usize,
    pub avg_bars: f64,
    pub avg_waste: f64,
    pub avg_utilization: f64,
    pub avg_time_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use u_cutstock_core::CutPattern;

    fn calc(bars: usize, waste_each: f64) -> CalculationResult {
        let mut result = CalculationResult::new();
        for i in 0..bars {
            result.patterns.push(CutPattern::new(
                i + 1,
                1000.0,
                vec![1000.0 - waste_each],
                waste_each,
                100.0 - waste_each / 10.0,
            ));
        }
        result.total_stock = bars;
        result.total_waste = waste_each * bars as f64;
        result.average_utilization = 100.0 - waste_each / 10.0;
        result
    }

    fn run(dataset: &str, strategy: Strategy, policy: KerfPolicy, bars: usize, waste: f64) -> RunResult {
        RunResult::new(dataset, strategy, policy, &calc(bars, waste))
    }

    #[test]
    fn test_run_result_gap() {
        let recorded =
            run("x", Strategy::FirstFitDecreasing, KerfPolicy::BetweenCuts, 3, 100.0).with_best_known(2);
        assert_eq!(recorded.strategy, "FFD");
        assert_eq!(recorded.bars_used, 3);
        assert_eq!(recorded.pieces, 3);
        assert_relative_eq!(recorded.gap_percent.unwrap(), 50.0);
        assert_relative_eq!(recorded.waste_percent, 10.0);
    }

    #[test]
    fn test_best_run_prefers_fewer_bars_then_less_waste() {
        let mut results = BenchmarkResult::new();
        results.add_run(run("x", Strategy::FirstFitDecreasing, KerfPolicy::BetweenCuts, 3, 10.0));
        results.add_run(run("x", Strategy::BestFitDecreasing, KerfPolicy::BetweenCuts, 2, 50.0));
        results.add_run(run("x", Strategy::FirstFitDecreasing, KerfPolicy::EveryCut, 2, 40.0));

        let best = results.best_run().unwrap();
        assert_eq!(best.bars_used, 2);
        assert_eq!(best.kerf_policy, "EveryCut");
        assert!(BenchmarkResult::new().best_run().is_none());
    }

    #[test]
    fn test_csv_output() {
        let mut results = BenchmarkResult::new();
        results.add_run(run("basic", Strategy::BestFitDecreasing, KerfPolicy::BetweenCuts, 1, 0.0));

        let mut buf = Vec::new();
        results.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("dataset,strategy"));
        assert!(lines[1].starts_with("basic,BFD,BetweenCuts,1,1,"));
    }

    #[test]
    fn test_summary_by_strategy() {
        let mut results = BenchmarkResult::new();
        results.add_run(run("a", Strategy::FirstFitDecreasing, KerfPolicy::BetweenCuts, 2, 0.0));
        results.add_run(run("b", Strategy::FirstFitDecreasing, KerfPolicy::BetweenCuts, 4, 0.0));
        results.add_run(run("a", Strategy::BestFitDecreasing, KerfPolicy::BetweenCuts, 1, 0.0));

        let summary = results.summary_by_strategy();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].strategy, "BFD");
        assert_eq!(summary[1].strategy, "FFD");
        assert_relative_eq!(summary[1].avg_bars, 3.0);
    }
}
