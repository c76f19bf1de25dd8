//! # U-CutStock Core
//!
//! Core traits and types for the U-CutStock cutting-stock optimizer.
//!
//! This crate provides the foundational types shared between the solver
//! crates and the tools built on top of them.
//!
//! ## Core Components
//!
//! - **Item trait**: `LinearItem` for anything with a length and a quantity
//! - **Solver trait**: Common interface for all cutting-stock algorithms
//! - **Configuration**: `Config`, `Strategy`, `KerfPolicy`
//! - **Results**: `CutPattern`, `CalculationResult`, `CalculationSummary`
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod item;
pub mod pattern;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use item::{ItemId, LinearItem, LENGTH_EPSILON};
pub use pattern::CutPattern;
pub use result::{CalculationResult, CalculationSummary, StockUsage};
pub use solver::{Config, KerfPolicy, Solver, Strategy};
