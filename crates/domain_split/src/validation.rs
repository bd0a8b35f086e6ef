//! Receipt request validation
//!
//! A single pass over a request before it reaches the calculators. The
//! calculators still reject a zero party size, an empty party, unknown
//! assignees, and a zero itemized subtotal themselves, since those depend on
//! the split method.
//!
//! # Rules
//!
//! - Item names must not be blank
//! - Item quantity must be at least 1
//! - Unit prices and charges must not be negative
//! - Charge names must not be blank

use crate::error::SplitError;
use crate::model::{AdditionalCharges, LineItem, ReceiptRequest, SplitStrategy};

impl ReceiptRequest {
    /// Builds a request and validates it
    pub fn new(
        items: Vec<LineItem>,
        charges: AdditionalCharges,
        strategy: SplitStrategy,
    ) -> Result<Self, SplitError> {
        let request = Self {
            items,
            charges,
            strategy,
        };
        request.validate()?;
        Ok(request)
    }

    /// Checks item and charge invariants, returning the first violation
    pub fn validate(&self) -> Result<(), SplitError> {
        for (index, item) in self.items.iter().enumerate() {
            validate_item(index, item)?;
        }
        validate_charges(&self.charges)
    }
}

fn validate_item(index: usize, item: &LineItem) -> Result<(), SplitError> {
    if item.name.trim().is_empty() {
        return Err(SplitError::invalid_input(
            format!("items[{index}].name"),
            "item name cannot be empty",
        ));
    }
    if item.quantity < 1 {
        return Err(SplitError::invalid_input(
            format!("items[{index}].quantity"),
            "quantity must be greater than 0",
        ));
    }
    if item.unit_price.is_negative() {
        return Err(SplitError::invalid_input(
            format!("items[{index}].price"),
            format!("price cannot be negative, got {}", item.unit_price),
        ));
    }
    Ok(())
}

fn validate_charges(charges: &AdditionalCharges) -> Result<(), SplitError> {
    for (name, amount) in charges {
        if name.trim().is_empty() {
            return Err(SplitError::invalid_input(
                "additional_charges",
                "charge name cannot be empty",
            ));
        }
        if amount.is_negative() {
            return Err(SplitError::invalid_input(
                format!("additional_charges.{name}"),
                format!("charge cannot be negative, got {amount}"),
            ));
        }
    }
    Ok(())
}
