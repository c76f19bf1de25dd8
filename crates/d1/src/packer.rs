//! 1D cutting-stock solver.
//!
//! Unit demands are sorted longest first and dropped into bars that are
//! already being cut. A new bar is taken from stock only when no open bar has
//! room, choosing the shortest stock length that can hold the demand.

use crate::input::CutCalculatorInput;
use crate::stats::build_result;
use crate::validate::validate_input;
use u_cutstock_core::item::{expand_units, fits_within, LinearItem};
use u_cutstock_core::solver::{Config, KerfPolicy, Solver, Strategy};
use u_cutstock_core::{CalculationResult, Error, Result};

use std::time::Instant;

/// A stock bar that has been taken from the pool and is receiving cuts.
#[derive(Debug, Clone)]
pub(crate) struct OpenBar {
    /// Index into the input stock items.
    pub stock_item: usize,
    /// Nominal bar length.
    pub length: f64,
    /// Cut lengths in placement order.
    pub cuts: Vec<f64>,
    /// Requirement index for each cut.
    pub sources: Vec<usize>,
    /// Length consumed so far by cuts and kerf.
    used: f64,
}

impl OpenBar {
    fn new(stock_item: usize, length: f64) -> Self {
        Self {
            stock_item,
            length,
            cuts: Vec::new(),
            sources: Vec::new(),
            used: 0.0,
        }
    }

    /// Length a cut would consume on this bar, kerf included.
    fn demand_for(&self, cut: f64, kerf: f64, policy: KerfPolicy) -> f64 {
        cut + policy.increment(kerf, self.cuts.len())
    }

    /// Remaining length after placing the cut, or `None` if it does not fit.
    fn slack_after(&self, cut: f64, kerf: f64, policy: KerfPolicy) -> Option<f64> {
        let needed = self.demand_for(cut, kerf, policy);
        fits_within(self.used + needed, self.length).then(|| self.length - self.used - needed)
    }

    fn place(&mut self, cut: f64, source: usize, kerf: f64, policy: KerfPolicy) {
        self.used += self.demand_for(cut, kerf, policy);
        self.cuts.push(cut);
        self.sources.push(source);
    }
}

/// Bars still available in stock, tried shortest first.
struct StockPool {
    lengths: Vec<f64>,
    remaining: Vec<usize>,
    order: Vec<usize>,
}

impl StockPool {
    fn new(input: &CutCalculatorInput) -> Self {
        let lengths: Vec<f64> = input.stock_items.iter().map(|s| s.length()).collect();
        let remaining = input.stock_items.iter().map(|s| s.quantity()).collect();

        // Stable: equal lengths keep input order.
        let mut order: Vec<usize> = (0..lengths.len()).collect();
        order.sort_by(|&a, &b| lengths[a].total_cmp(&lengths[b]));

        Self {
            lengths,
            remaining,
            order,
        }
    }

    /// Takes the shortest available bar that can hold `needed`.
    fn take(&mut self, needed: f64) -> Option<OpenBar> {
        let index = self
            .order
            .iter()
            .copied()
            .find(|&i| self.remaining[i] > 0 && fits_within(needed, self.lengths[i]))?;
        self.remaining[index] -= 1;
        Some(OpenBar::new(index, self.lengths[index]))
    }
}

/// Packs every unit demand into bars taken from stock.
///
/// Returns the bars in the order they were opened.
pub(crate) fn pack(input: &CutCalculatorInput, config: &Config) -> Result<Vec<OpenBar>> {
    let kerf = input.kerf_width;
    let policy = config.kerf_policy;

    let mut demands = expand_units(&input.requirements);
    // Stable: equal lengths keep requirement order.
    demands.sort_by(|a, b| b.1.total_cmp(&a.1));

    let total_demand: f64 = demands.iter().map(|d| d.1).sum();
    let total_supply = input.total_stock_length();
    if !fits_within(total_demand, total_supply) {
        return Err(Error::InfeasiblePacking(format!(
            "{}mm of cuts requested but only {}mm of stock available",
            total_demand, total_supply
        )));
    }

    let mut pool = StockPool::new(input);
    let mut bars: Vec<OpenBar> = Vec::new();

    for (placed, &(source, cut)) in demands.iter().enumerate() {
        let target = match config.strategy {
            Strategy::FirstFitDecreasing => bars
                .iter()
                .position(|bar| bar.slack_after(cut, kerf, policy).is_some()),
            Strategy::BestFitDecreasing => {
                let mut best: Option<(usize, f64)> = None;
                for (i, bar) in bars.iter().enumerate() {
                    if let Some(slack) = bar.slack_after(cut, kerf, policy) {
                        if best.map_or(true, |(_, s)| slack < s) {
                            best = Some((i, slack));
                        }
                    }
                }
                best.map(|(i, _)| i)
            }
        };

        match target {
            Some(i) => bars[i].place(cut, source, kerf, policy),
            None => {
                let needed = cut + policy.increment(kerf, 0);
                let mut bar = pool.take(needed).ok_or_else(|| {
                    Error::InfeasiblePacking(format!(
                        "no stock left for a {}mm cut ({} of {} cuts placed)",
                        cut,
                        placed,
                        demands.len()
                    ))
                })?;
                bar.place(cut, source, kerf, policy);
                bars.push(bar);
            }
        }
    }

    Ok(bars)
}

/// 1D cutting-stock optimizer.
#[derive(Debug, Clone, Default)]
pub struct CutOptimizer {
    config: Config,
}

impl CutOptimizer {
    /// Creates a new optimizer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates an optimizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }
}

impl Solver for CutOptimizer {
    type Input = CutCalculatorInput;

    fn solve(&self, input: &CutCalculatorInput) -> Result<CalculationResult> {
        let start = Instant::now();
        validate_input(input)?;

        log::debug!(
            "Cutting {} pieces from {} bars ({} stock items), kerf {}mm, strategy {}",
            input.total_cut_count(),
            input.total_stock_count(),
            input.stock_items.len(),
            input.kerf_width,
            self.config.strategy.name()
        );

        let bars = pack(input, &self.config)?;
        let mut result = build_result(&bars, input, &self.config);
        result.execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        log::debug!(
            "Used {} bars, waste {}mm, average utilization {:.1}%",
            result.total_stock,
            result.total_waste,
            result.average_utilization
        );

        Ok(result)
    }

    fn config(&self) -> &Config {
        &self.config
    }
}
