//! Per-length stock pricing.

use u_cutstock_core::item::LENGTH_EPSILON;
use u_cutstock_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Price of one bar of a given stock length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceEntry {
    /// Stock length the price applies to.
    pub length: f64,
    /// Price per bar.
    pub price: f64,
}

/// Maps stock lengths to bar prices.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Pricing {
    entries: Vec<PriceEntry>,
}

impl Pricing {
    /// Creates an empty price list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a price list from `(length, price)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::new(), |p, (length, price)| p.with_price(length, price))
    }

    /// Sets the price for a stock length, replacing any previous entry.
    pub fn with_price(mut self, length: f64, price: f64) -> Self {
        match self
            .entries
            .iter_mut()
            .find(|e| (e.length - length).abs() <= LENGTH_EPSILON)
        {
            Some(entry) => entry.price = price,
            None => self.entries.push(PriceEntry { length, price }),
        }
        self
    }

    /// Returns the price of one bar of `length`, if listed.
    pub fn price_for(&self, length: f64) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| (e.length - length).abs() <= LENGTH_EPSILON)
            .map(|e| e.price)
    }

    /// Returns the listed entries.
    pub fn entries(&self) -> &[PriceEntry] {
        &self.entries
    }

    /// Returns true if no prices are listed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks every price is a finite, non-negative number.
    pub fn validate(&self) -> Result<()> {
        if self
            .entries
            .iter()
            .any(|e| !e.price.is_finite() || e.price < 0.0)
        {
            return Err(Error::InvalidInput(
                "Stock prices must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
