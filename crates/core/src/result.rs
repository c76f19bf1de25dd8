//! Calculation result representation.

use crate::item::ItemId;
use crate::pattern::CutPattern;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounds a value to one decimal place.
#[inline]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// How many bars of one stock item were consumed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StockUsage {
    /// Stock item ID.
    pub stock_id: ItemId,
    /// Nominal bar length.
    pub length: f64,
    /// Bars available in the input.
    pub available: usize,
    /// Bars actually cut.
    pub used: usize,
}

impl StockUsage {
    /// Bars left over.
    pub fn remaining(&self) -> usize {
        self.available.saturating_sub(self.used)
    }
}

/// Result of a cutting-stock calculation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CalculationResult {
    /// One pattern per stock bar used, in the order bars were taken.
    pub patterns: Vec<CutPattern>,

    /// Number of stock bars used (equals `patterns.len()`).
    pub total_stock: usize,

    /// Sum of the waste of every pattern.
    pub total_waste: f64,

    /// Mean pattern utilization (percent), rounded to one decimal.
    pub average_utilization: f64,

    /// Total purchase cost of the bars used (0 without pricing).
    pub total_cost: f64,

    /// Wall-clock time spent in the calculation, in milliseconds.
    pub execution_time_ms: f64,

    /// Strategy used for solving.
    #[cfg_attr(feature = "serde", serde(default))]
    pub strategy: Option<String>,

    /// Per stock item consumption, in input order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stock_usage: Vec<StockUsage>,
}

impl CalculationResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
            total_stock: 0,
            total_waste: 0.0,
            average_utilization: 0.0,
            total_cost: 0.0,
            execution_time_ms: 0.0,
            strategy: None,
            stock_usage: Vec::new(),
        }
    }

    /// Returns true if no stock was used.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the number of placed cuts.
    pub fn total_cuts(&self) -> usize {
        self.patterns.iter().map(|p| p.cut_count()).sum()
    }

    /// Returns the summed length of all placed cuts.
    pub fn total_cut_length(&self) -> f64 {
        self.patterns.iter().map(|p| p.cut_length()).sum()
    }

    /// Returns the summed nominal length of all bars used.
    pub fn total_stock_length(&self) -> f64 {
        self.patterns.iter().map(|p| p.stock_length).sum()
    }

    /// Returns the length lost to kerf across all bars.
    pub fn total_kerf_loss(&self) -> f64 {
        self.patterns.iter().map(|p| p.kerf_loss()).sum()
    }

    /// Waste as a percentage of the stock length used, rounded to one decimal.
    pub fn waste_percent(&self) -> f64 {
        let total = self.total_stock_length();
        if total > 0.0 {
            round_to_tenth(self.total_waste / total * 100.0)
        } else {
            0.0
        }
    }

    /// Returns average utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.average_utilization)
    }

    /// Number of cuts placed for the given requirement.
    pub fn cuts_for(&self, requirement_id: &str) -> usize {
        self.patterns
            .iter()
            .flat_map(|p| p.requirement_ids.iter())
            .filter(|id| id.as_str() == requirement_id)
            .count()
    }

    /// Sets the strategy name.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }
}

impl Default for CalculationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a calculation result.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CalculationSummary {
    /// Bars used.
    pub total_stock: usize,
    /// Cuts placed.
    pub total_cuts: usize,
    /// Summed cut length.
    pub total_cut_length: f64,
    /// Summed bar length.
    pub total_stock_length: f64,
    /// Summed waste.
    pub total_waste: f64,
    /// Waste percentage of the bar length used.
    pub waste_percent: f64,
    /// Mean utilization percentage.
    pub average_utilization: f64,
    /// Total cost.
    pub total_cost: f64,
    /// Computation time in milliseconds.
    pub time_ms: f64,
    /// Strategy used.
    pub strategy: String,
}

impl From<&CalculationResult> for CalculationSummary {
    fn from(result: &CalculationResult) -> Self {
        Self {
            total_stock: result.total_stock,
            total_cuts: result.total_cuts(),
            total_cut_length: result.total_cut_length(),
            total_stock_length: result.total_stock_length(),
            total_waste: result.total_waste,
            waste_percent: result.waste_percent(),
            average_utilization: result.average_utilization,
            total_cost: result.total_cost,
            time_ms: result.execution_time_ms,
            strategy: result
                .strategy
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
