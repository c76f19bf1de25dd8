//! Input validation performed before packing.

use crate::input::CutCalculatorInput;
use u_cutstock_core::item::{LinearItem, LENGTH_EPSILON};
use u_cutstock_core::{Error, Result};

/// Validates calculator input, reporting the first failing check.
///
/// Checks run in this order:
/// 1. at least one stock item
/// 2. at least one cut requirement
/// 3. every stock length greater than 0
/// 4. no cut longer than the longest stock
/// 5. kerf width non-negative
///
/// followed by finiteness checks on lengths and kerf, positive cut lengths,
/// and non-negative prices.
pub fn validate_input(input: &CutCalculatorInput) -> Result<()> {
    if input.stock_items.is_empty() {
        return Err(Error::InvalidInput(
            "At least one stock item is required".into(),
        ));
    }

    if input.requirements.is_empty() {
        return Err(Error::InvalidInput(
            "At least one cut requirement is needed".into(),
        ));
    }

    input.stock_items.iter().try_for_each(LinearItem::validate)?;

    let longest = input.max_stock_length().unwrap_or(0.0);
    if input
        .requirements
        .iter()
        .any(|r| r.length() > longest + LENGTH_EPSILON)
    {
        return Err(Error::InvalidInput(
            "Some cuts are longer than longest available stock".into(),
        ));
    }

    if input.kerf_width.is_nan() || input.kerf_width < 0.0 {
        return Err(Error::InvalidInput(
            "Kerf width must be non-negative".into(),
        ));
    }

    if input.stock_items.iter().any(|s| !s.length().is_finite()) {
        return Err(Error::InvalidInput(
            "All lengths must be finite numbers".into(),
        ));
    }

    input.requirements.iter().try_for_each(LinearItem::validate)?;

    if !input.kerf_width.is_finite() {
        return Err(Error::InvalidInput(
            "Kerf width must be a finite number".into(),
        ));
    }

    if let Some(pricing) = &input.pricing {
        pricing.validate()?;
    }

    Ok(())
}
