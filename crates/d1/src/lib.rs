//! # U-CutStock 1D
//!
//! One-dimensional cutting-stock optimization: cutting required lengths from
//! stock bars with minimal waste, accounting for kerf loss and bar cost.
//!
//! ## Quick Start
//!
//! ```rust
//! use u_cutstock_d1::{calculate_optimal_cuts, describe_cut_pattern};
//! use u_cutstock_d1::{CutCalculatorInput, CutRequirement, StockItem};
//!
//! let input = CutCalculatorInput::new(
//!     vec![StockItem::new("1", 1000.0).with_quantity(2)],
//!     vec![CutRequirement::new("a", 450.0).with_quantity(2)],
//! )
//! .with_kerf_width(4.0);
//!
//! let result = calculate_optimal_cuts(&input).unwrap();
//! assert_eq!(result.total_stock, 1);
//! println!("{}", describe_cut_pattern(&result.patterns[0]));
//! ```

pub mod format;
pub mod input;
pub mod packer;
pub mod pricing;
pub mod requirement;
pub mod stats;
pub mod stock;
pub mod validate;

// Re-exports
pub use format::{describe_cut_pattern, describe_result, format_cut_length};
pub use input::CutCalculatorInput;
pub use packer::CutOptimizer;
pub use pricing::{PriceEntry, Pricing};
pub use requirement::CutRequirement;
pub use stats::calculate_waste_percentage;
pub use stock::StockItem;
pub use validate::validate_input;
pub use u_cutstock_core::{
    CalculationResult, Config, CutPattern, Error, KerfPolicy, LinearItem, Result, Solver,
    Strategy,
};

/// Computes the cut plan with the default configuration.
pub fn calculate_optimal_cuts(input: &CutCalculatorInput) -> Result<CalculationResult> {
    CutOptimizer::default_config().solve(input)
}

/// Computes the cut plan with the given configuration.
pub fn calculate_optimal_cuts_with(
    input: &CutCalculatorInput,
    config: &Config,
) -> Result<CalculationResult> {
    CutOptimizer::new(config.clone()).solve(input)
}
