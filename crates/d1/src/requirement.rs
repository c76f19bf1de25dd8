//! Cut demand types.

use u_cutstock_core::item::{ItemId, LinearItem};
use u_cutstock_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Demand for a number of pieces cut to the same length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutRequirement {
    /// Unique identifier.
    id: ItemId,

    /// Required piece length in millimetres.
    length: f64,

    /// Number of pieces required.
    #[cfg_attr(feature = "serde", serde(default = "default_quantity"))]
    quantity: usize,
}

#[cfg(feature = "serde")]
fn default_quantity() -> usize {
    1
}

impl CutRequirement {
    /// Creates a requirement for a single piece.
    pub fn new(id: impl Into<ItemId>, length: f64) -> Self {
        Self {
            id: id.into(),
            length,
            quantity: 1,
        }
    }

    /// Sets the number of pieces required.
    pub fn with_quantity(mut self, n: usize) -> Self {
        self.quantity = n;
        self
    }
}

impl LinearItem for CutRequirement {
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
        if !self.length.is_finite() {
            return Err(Error::InvalidInput(
                "All lengths must be finite numbers".into(),
            ));
        }
        if self.length <= 0.0 {
            return Err(Error::InvalidInput(
                "All cut lengths must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
