//! Stock bar types.

use u_cutstock_core::item::{ItemId, LinearItem};
use u_cutstock_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A purchasable stock bar of a given length, available in a finite count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StockItem {
    /// Unique identifier.
    id: ItemId,

    /// Bar length in millimetres.
    length: f64,

    /// Number of bars available.
    #[cfg_attr(feature = "serde", serde(default = "default_quantity"))]
    quantity: usize,
}

#[cfg(feature = "serde")]
fn default_quantity() -> usize {
    1
}

impl StockItem {
    /// Creates a single bar of the given length.
    pub fn new(id: impl Into<ItemId>, length: f64) -> Self {
        Self {
            id: id.into(),
            length,
            quantity: 1,
        }
    }

    /// Sets the number of bars available.
    pub fn with_quantity(mut self, n: usize) -> Self {
        self.quantity = n;
        self
    }
}

impl LinearItem for StockItem {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn quantity(&self) -> usize {
        self.quantity
    }

    fn validate(&self) -> Result<()> {
        if self.length.is_nan() || self.length <= 0.0 {
            return Err(Error::InvalidInput(
                "All stock lengths must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
