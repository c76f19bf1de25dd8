//! Solver traits and configuration.

use crate::result::CalculationResult;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Optimization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// First-Fit Decreasing: first open bar with room wins.
    #[default]
    FirstFitDecreasing,
    /// Best-Fit Decreasing: open bar left with the least room wins.
    BestFitDecreasing,
}

impl Strategy {
    /// Short name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FirstFitDecreasing => "FFD",
            Strategy::BestFitDecreasing => "BFD",
        }
    }

    /// All available strategies.
    pub fn all() -> [Strategy; 2] {
        [Strategy::FirstFitDecreasing, Strategy::BestFitDecreasing]
    }
}

/// How kerf (blade width) loss is charged against a stock bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KerfPolicy {
    /// One kerf per gap between consecutive cuts (`n - 1` for `n` cuts).
    #[default]
    BetweenCuts,
    /// One kerf for every cut, including the last one.
    EveryCut,
}

impl KerfPolicy {
    /// Total kerf loss for a bar holding `cut_count` cuts.
    pub fn loss(&self, kerf: f64, cut_count: usize) -> f64 {
        match self {
            KerfPolicy::BetweenCuts => kerf * cut_count.saturating_sub(1) as f64,
            KerfPolicy::EveryCut => kerf * cut_count as f64,
        }
    }

    /// Kerf charged when adding one more cut to a bar holding `cut_count` cuts.
    pub fn increment(&self, kerf: f64, cut_count: usize) -> f64 {
        match self {
            KerfPolicy::BetweenCuts if cut_count == 0 => 0.0,
            _ => kerf,
        }
    }
}

/// Common configuration for solvers.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Optimization strategy.
    pub strategy: Strategy,

    /// Kerf accounting convention.
    pub kerf_policy: KerfPolicy,
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the optimization strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the kerf accounting convention.
    pub fn with_kerf_policy(mut self, policy: KerfPolicy) -> Self {
        self.kerf_policy = policy;
        self
    }
}

/// Trait for cutting-stock solvers.
pub trait Solver {
    /// The problem description this solver consumes.
    type Input;

    /// Solves the cutting-stock problem.
    fn solve(&self, input: &Self::Input) -> Result<CalculationResult>;

    /// Returns the configuration the solver runs with.
    fn config(&self) -> &Config;
}
