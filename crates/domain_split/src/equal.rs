//! Equal split calculator
//!
//! Divides the subtotal, each charge, and the grand total by the party size.
//! Each quotient is rounded on its own, so the per-person base plus charges
//! may differ from the per-person total by a cent. That difference is part of
//! the contract and is not reconciled.

use core_kernel::money::checked_div;
use core_kernel::{Money, MoneyError};
use rust_decimal::Decimal;

use crate::distribution::{charges_total, divide_charges, receipt_subtotal, rounded_charges};
use crate::error::SplitError;
use crate::model::{AdditionalCharges, LineItem, PerPersonCharges, SplitBreakdown, SplitMethod, SplitResult};

/// Splits a receipt evenly across `party_size` people
///
/// A missing party size means a party of one. A party size of zero is
/// rejected as invalid input. An empty item list is valid and yields a zero
/// subtotal.
pub fn split_equally(
    items: &[LineItem],
    charges: &AdditionalCharges,
    party_size: Option<u32>,
) -> Result<SplitResult, SplitError> {
    let party_size = party_size.unwrap_or(1);
    if party_size == 0 {
        return Err(SplitError::invalid_input(
            "party_size",
            "party size must be greater than zero",
        ));
    }

    let subtotal = receipt_subtotal(items)?;
    let total_charges = charges_total(charges)?;
    let total_paid = subtotal
        .checked_add(total_charges)
        .ok_or(MoneyError::Overflow)?;

    let n = Decimal::from(party_size);
    let per_person = PerPersonCharges {
        base_amount: Money::round(checked_div(subtotal, n)?),
        charges: divide_charges(charges, n)?,
        total: Money::round(checked_div(total_paid, n)?),
    };

    Ok(SplitResult {
        split_method: SplitMethod::Equal,
        subtotal: Money::round(subtotal),
        charges: rounded_charges(charges),
        total_paid: Money::round(total_paid),
        breakdown: SplitBreakdown::PerPerson(per_person),
    })
}
