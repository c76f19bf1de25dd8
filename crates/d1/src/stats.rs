//! Pattern finalization and aggregate statistics.

use crate::input::CutCalculatorInput;
use crate::packer::OpenBar;
use crate::pricing::Pricing;
use u_cutstock_core::item::LinearItem;
use u_cutstock_core::result::round_to_tenth;
use u_cutstock_core::solver::Config;
use u_cutstock_core::{CalculationResult, CutPattern, StockUsage};

/// Waste as a percentage of `total`, rounded to one decimal.
///
/// Returns 0 when `total` is not positive.
pub fn calculate_waste_percentage(waste: f64, total: f64) -> f64 {
    if total > 0.0 {
        round_to_tenth(waste / total * 100.0)
    } else {
        0.0
    }
}

/// Mean pattern utilization rounded to one decimal (0 without patterns).
pub fn average_utilization(patterns: &[CutPattern]) -> f64 {
    if patterns.is_empty() {
        return 0.0;
    }
    let sum: f64 = patterns.iter().map(|p| p.utilization).sum();
    round_to_tenth(sum / patterns.len() as f64)
}

/// Purchase cost of the bars behind `patterns`.
///
/// Bars whose length has no listed price cost nothing.
pub fn total_cost(patterns: &[CutPattern], pricing: Option<&Pricing>) -> f64 {
    let Some(pricing) = pricing else {
        return 0.0;
    };
    patterns
        .iter()
        .map(|p| {
            pricing.price_for(p.stock_length).unwrap_or_else(|| {
                log::warn!(
                    "No price listed for {}mm stock (bar #{}), counting it as 0",
                    p.stock_length,
                    p.stock_index
                );
                0.0
            })
        })
        .sum()
}

/// Converts an open bar into its final pattern.
fn finalize(index: usize, bar: &OpenBar, input: &CutCalculatorInput, config: &Config) -> CutPattern {
    let cut_length: f64 = bar.cuts.iter().sum();
    let kerf_loss = config.kerf_policy.loss(input.kerf_width, bar.cuts.len());
    let waste = (bar.length - cut_length - kerf_loss).max(0.0);
    let utilization = 100.0 * (bar.length - waste) / bar.length;

    let requirement_ids = bar
        .sources
        .iter()
        .map(|&r| input.requirements[r].id().clone())
        .collect();

    CutPattern::new(index + 1, bar.length, bar.cuts.clone(), waste, utilization)
        .with_stock_id(input.stock_items[bar.stock_item].id().clone())
        .with_requirement_ids(requirement_ids)
}

/// Builds the calculation result from packed bars (execution time left at 0).
pub(crate) fn build_result(
    bars: &[OpenBar],
    input: &CutCalculatorInput,
    config: &Config,
) -> CalculationResult {
    let patterns: Vec<CutPattern> = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| finalize(i, bar, input, config))
        .collect();

    let stock_usage = input
        .stock_items
        .iter()
        .enumerate()
        .map(|(i, stock)| StockUsage {
            stock_id: stock.id().clone(),
            length: stock.length(),
            available: stock.quantity(),
            used: bars.iter().filter(|b| b.stock_item == i).count(),
        })
        .collect();

    let mut result = CalculationResult::new().with_strategy(config.strategy.name());
    result.total_stock = patterns.len();
    result.total_waste = patterns.iter().map(|p| p.waste).sum();
    result.average_utilization = average_utilization(&patterns);
    result.total_cost = total_cost(&patterns, input.pricing.as_ref());
    result.stock_usage = stock_usage;
    result.patterns = patterns;
    result
}
