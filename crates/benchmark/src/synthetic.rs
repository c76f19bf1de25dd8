//! Synthetic instance generator.
//!
//! Produces random but always feasible cutting-stock instances: the longest
//! stock length is supplied in enough quantity to hold every piece alone.

use crate::dataset::Dataset;
use rand::prelude::*;
use u_cutstock_d1::{CutCalculatorInput, CutRequirement, LinearItem, Pricing, StockItem};

/// Stock lengths drawn from when generating instances (mm).
pub const STOCK_LENGTHS: [f64; 5] = [1000.0, 2000.0, 3000.0, 4000.0, 6000.0];

/// Generator for synthetic cutting-stock datasets.
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    rng: StdRng,
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticGenerator {
    /// Creates a new generator with a random seed.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates an instance with the given number of stock and cut types.
    ///
    /// Both counts are clamped to at least 1; stock types to at most
    /// [`STOCK_LENGTHS`]`.len()`.
    pub fn generate(&mut self, stock_types: usize, cut_types: usize) -> Dataset {
        let stock_types = stock_types.clamp(1, STOCK_LENGTHS.len());
        let cut_types = cut_types.max(1);

        let mut lengths: Vec<f64> = STOCK_LENGTHS
            .choose_multiple(&mut self.rng, stock_types)
            .copied()
            .collect();
        lengths.sort_by(|a, b| a.total_cmp(b));
        let longest = lengths[lengths.len() - 1];

        let kerf = [0.0, 2.0, 3.0, 3.2, 4.0]
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(0.0);

        let requirements: Vec<CutRequirement> = (0..cut_types)
            .map(|i| {
                let length = (self.rng.gen_range(0.05..0.8) * longest).round();
                let quantity = self.rng.gen_range(1..=8);
                CutRequirement::new(format!("c{}", i + 1), length).with_quantity(quantity)
            })
            .collect();
        let pieces: usize = requirements.iter().map(|r| r.quantity()).sum();

        let mut pricing = Pricing::new();
        let mut stock_items = Vec::with_capacity(lengths.len());
        for &length in &lengths {
            let quantity = if length == longest {
                pieces
            } else {
                self.rng.gen_range(1..=pieces)
            };
            let per_meter: f64 = self.rng.gen_range(6.0..12.0);
            pricing = pricing.with_price(length, (length / 1000.0 * per_meter * 100.0).round() / 100.0);
            stock_items.push(StockItem::new(format!("{}mm", length), length).with_quantity(quantity));
        }

        let input = CutCalculatorInput::new(stock_items, requirements)
            .with_kerf_width(kerf)
            .with_pricing(pricing);

        Dataset::new(format!("synthetic_{}x{}", stock_types, cut_types), input)
            .with_description("Randomly generated instance")
    }
}
