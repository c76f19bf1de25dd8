//! # U-CutStock
//!
//! Cutting-stock optimization engine.
//!
//! This crate provides algorithms for:
//! - **1D Cutting Stock**: cutting required lengths from stock bars with
//!   minimal waste, accounting for kerf loss and bar cost
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use u_cutstock::d1::{calculate_optimal_cuts, CutCalculatorInput, CutRequirement, StockItem};
//!
//! let input = CutCalculatorInput::new(
//!     vec![StockItem::new("6m", 6000.0).with_quantity(4)],
//!     vec![CutRequirement::new("rail", 1180.0).with_quantity(6)],
//! )
//! .with_kerf_width(3.0);
//!
//! let result = calculate_optimal_cuts(&input)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `d1` (default): 1D cutting-stock algorithms
//! - `serde`: Serialization support

/// Core traits and abstractions.
pub use u_cutstock_core as core;

/// 1D cutting-stock algorithms.
#[cfg(feature = "d1")]
pub use u_cutstock_d1 as d1;

// Re-export commonly used types at root level
pub use u_cutstock_core::{
    CalculationResult, Config, CutPattern, Error, KerfPolicy, Result, Solver, Strategy,
};
