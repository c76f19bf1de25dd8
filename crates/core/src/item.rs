//! Linear item traits shared by stock bars and cut demands.

use crate::Result;

/// Identifier type for stock items and cut requirements.
pub type ItemId = String;

/// Absolute tolerance (mm) for length comparisons.
pub const LENGTH_EPSILON: f64 = 1e-9;

/// A one-dimensional item with a length and a quantity.
///
/// Implemented both by purchasable stock bars and by required cuts, so the
/// packing engine can expand either side into unit instances the same way.
pub trait LinearItem: Clone + Send + Sync {
    /// Returns the unique identifier.
    fn id(&self) -> &ItemId;

    /// Returns the nominal length in millimetres.
    fn length(&self) -> f64;

    /// Returns the number of units of this item.
    fn quantity(&self) -> usize;

    /// Validates the item on its own (independent of other input).
    fn validate(&self) -> Result<()>;

    /// Total length of all units of this item.
    fn total_length(&self) -> f64 {
        self.length() * self.quantity() as f64
    }
}

/// Expands items into one `(item_index, length)` entry per unit of quantity.
pub fn expand_units<T: LinearItem>(items: &[T]) -> Vec<(usize, f64)> {
    let count: usize = items.iter().map(|i| i.quantity()).sum();
    let mut units = Vec::with_capacity(count);
    for (index, item) in items.iter().enumerate() {
        for _ in 0..item.quantity() {
            units.push((index, item.length()));
        }
    }
    units
}

/// Returns true if `a` is less than or equal to `b` within [`LENGTH_EPSILON`].
#[inline]
pub fn fits_within(a: f64, b: f64) -> bool {
    a <= b + LENGTH_EPSILON
}
