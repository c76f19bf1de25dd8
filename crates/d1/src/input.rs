//! Calculator input.

use crate::pricing::Pricing;
use crate::requirement::CutRequirement;
use crate::stock::StockItem;
use u_cutstock_core::item::LinearItem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the optimizer needs for one calculation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CutCalculatorInput {
    /// Available stock bars.
    pub stock_items: Vec<StockItem>,

    /// Required cuts.
    pub requirements: Vec<CutRequirement>,

    /// Material lost per cut, in millimetres.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kerf_width: f64,

    /// Optional bar prices by stock length.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub pricing: Option<Pricing>,
}

impl CutCalculatorInput {
    /// Creates an input with the given stock and demand and no kerf.
    pub fn new(stock_items: Vec<StockItem>, requirements: Vec<CutRequirement>) -> Self {
        Self {
            stock_items,
            requirements,
            kerf_width: 0.0,
            pricing: None,
        }
    }

    /// Sets the kerf width.
    pub fn with_kerf_width(mut self, kerf: f64) -> Self {
        self.kerf_width = kerf;
        self
    }

    /// Sets the bar prices.
    pub fn with_pricing(mut self, pricing: Pricing) -> Self {
        self.pricing = Some(pricing);
        self
    }

    /// Length of the longest stock item, or `None` without stock.
    pub fn max_stock_length(&self) -> Option<f64> {
        self.stock_items
            .iter()
            .map(|s| s.length())
            .reduce(f64::max)
    }

    /// Total number of bars available.
    pub fn total_stock_count(&self) -> usize {
        self.stock_items.iter().map(|s| s.quantity()).sum()
    }

    /// Total number of pieces required.
    pub fn total_cut_count(&self) -> usize {
        self.requirements.iter().map(|r| r.quantity()).sum()
    }

    /// Summed length of every available bar.
    pub fn total_stock_length(&self) -> f64 {
        self.stock_items.iter().map(|s| s.total_length()).sum()
    }

    /// Summed length of every required piece.
    pub fn total_cut_length(&self) -> f64 {
        self.requirements.iter().map(|r| r.total_length()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let input = CutCalculatorInput::new(
            vec![
                StockItem::new("1", 1000.0).with_quantity(2),
                StockItem::new("2", 6000.0),
            ],
            vec![
                CutRequirement::new("a", 450.0).with_quantity(2),
                CutRequirement::new("b", 300.0),
            ],
        )
        .with_kerf_width(4.0);

        assert_eq!(input.max_stock_length(), Some(6000.0));
        assert_eq!(input.total_stock_count(), 3);
        assert_eq!(input.total_cut_count(), 3);
        assert_eq!(input.total_stock_length(), 8000.0);
        assert_eq!(input.total_cut_length(), 1200.0);
        assert_eq!(input.kerf_width, 4.0);
        assert!(input.pricing.is_none());
    }

    #[test]
    fn test_empty_max_length() {
        let input = CutCalculatorInput::default();
        assert_eq!(input.max_stock_length(), None);
    }
}
