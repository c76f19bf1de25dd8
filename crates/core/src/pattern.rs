//! Cut pattern representation for a single stock bar.

use crate::item::ItemId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The sequence of cuts assigned to one physical stock bar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CutPattern {
    /// Position (1-based) in the order bars were taken from stock.
    pub stock_index: usize,

    /// ID of the stock item this bar was taken from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stock_id: ItemId,

    /// Nominal length of the bar.
    pub stock_length: f64,

    /// Cut lengths in placement order.
    pub cuts: Vec<f64>,

    /// Requirement ID satisfied by each cut (parallel to `cuts`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirement_ids: Vec<ItemId>,

    /// Leftover length after cuts and kerf.
    pub waste: f64,

    /// Percentage (0 - 100) of the bar consumed by cuts and kerf.
    pub utilization: f64,
}

impl CutPattern {
    /// Creates a pattern without source tracking.
    pub fn new(
        stock_index: usize,
        stock_length: f64,
        cuts: Vec<f64>,
        waste: f64,
        utilization: f64,
    ) -> Self {
        Self {
            stock_index,
            stock_id: ItemId::new(),
            stock_length,
            cuts,
            requirement_ids: Vec::new(),
            waste,
            utilization,
        }
    }

    /// Sets the source stock item ID.
    pub fn with_stock_id(mut self, id: impl Into<ItemId>) -> Self {
        self.stock_id = id.into();
        self
    }

    /// Sets the requirement ID for each cut.
    pub fn with_requirement_ids(mut self, ids: Vec<ItemId>) -> Self {
        self.requirement_ids = ids;
        self
    }

    /// Returns the number of cuts on this bar.
    pub fn cut_count(&self) -> usize {
        self.cuts.len()
    }

    /// Returns the summed length of all cuts (kerf excluded).
    pub fn cut_length(&self) -> f64 {
        self.cuts.iter().sum()
    }

    /// Returns the length lost to kerf on this bar.
    pub fn kerf_loss(&self) -> f64 {
        (self.stock_length - self.cut_length() - self.waste).max(0.0)
    }

    /// Returns the number of cuts of the given length.
    pub fn count_of(&self, length: f64) -> usize {
        self.cuts
            .iter()
            .filter(|&&c| (c - length).abs() <= crate::item::LENGTH_EPSILON)
            .count()
    }

    /// Iterates `(requirement_id, length)` pairs; empty if IDs were not tracked.
    pub fn tracked_cuts(&self) -> impl Iterator<Item = (&ItemId, f64)> + '_ {
        self.requirement_ids.iter().zip(self.cuts.iter().copied())
    }
}
