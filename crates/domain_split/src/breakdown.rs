//! Line-item breakdown
//!
//! Spreads the combined additional charges over each line in proportion to
//! its price, answering "what did this dish really cost".

use std::collections::BTreeMap;

use core_kernel::money::checked_div;
use core_kernel::{Money, MoneyError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::distribution::{charges_total, receipt_subtotal, rounded_charges};
use crate::error::SplitError;
use crate::model::{AdditionalCharges, LineItem};

/// One line with its proportional share of all charges folded in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemWithCharges {
    pub name: String,
    pub quantity: u32,
    #[serde(rename = "price")]
    pub unit_price: Money,
    pub total_with_charges: Money,
}

/// Receipt totals with every line carrying its share of the charges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemBreakdown {
    pub subtotal: Money,
    pub charges: BTreeMap<String, Money>,
    pub total_paid: Money,
    pub party_size: u32,
    pub per_person_cost: Money,
    pub items: Vec<ItemWithCharges>,
}

/// Computes the line-item breakdown of a receipt
///
/// # Errors
///
/// `InvalidInput` when the subtotal is zero or the party size is zero.
pub fn line_item_breakdown(
    items: &[LineItem],
    charges: &AdditionalCharges,
    party_size: Option<u32>,
) -> Result<LineItemBreakdown, SplitError> {
    let party_size = party_size.unwrap_or(1);
    if party_size == 0 {
        return Err(SplitError::invalid_input(
            "party_size",
            "party size must be greater than zero",
        ));
    }

    let subtotal = receipt_subtotal(items)?;
    if subtotal.is_zero() {
        return Err(SplitError::invalid_input("items", "subtotal cannot be zero"));
    }
    let total_charges = charges_total(charges)?;

    let rows = items
        .iter()
        .map(|item| {
            let item_total = item.total()?;
            let item_charges = checked_div(
                item_total.checked_mul(total_charges).ok_or(MoneyError::Overflow)?,
                subtotal,
            )?;
            let total_with_charges = item_total
                .checked_add(item_charges)
                .ok_or(MoneyError::Overflow)?;
            Ok(ItemWithCharges {
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                total_with_charges: Money::round(total_with_charges),
            })
        })
        .collect::<Result<Vec<_>, MoneyError>>()?;

    let total_paid = subtotal
        .checked_add(total_charges)
        .ok_or(MoneyError::Overflow)?;

    Ok(LineItemBreakdown {
        subtotal: Money::round(subtotal),
        charges: rounded_charges(charges),
        total_paid: Money::round(total_paid),
        party_size,
        per_person_cost: Money::round(checked_div(total_paid, Decimal::from(party_size))?),
        items: rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_charges_folded_into_items() {
        let items = vec![
            LineItem::new("Pasta", 1, Money::round(dec!(30.00))),
            LineItem::new("Salad", 2, Money::round(dec!(5.00))),
        ];
        let mut charges = AdditionalCharges::new();
        charges.insert("tax".to_string(), Money::round(dec!(4.00)));
        charges.insert("tip".to_string(), Money::round(dec!(6.00)));

        let breakdown = line_item_breakdown(&items, &charges, Some(2)).unwrap();

        assert_eq!(breakdown.subtotal.amount(), dec!(40.00));
        assert_eq!(breakdown.total_paid.amount(), dec!(50.00));
        assert_eq!(breakdown.items[0].total_with_charges.amount(), dec!(37.50));
        assert_eq!(breakdown.items[1].total_with_charges.amount(), dec!(12.50));
        assert_eq!(breakdown.per_person_cost.amount(), dec!(25.00));
    }

    #[test]
    fn test_zero_subtotal_rejected() {
        let err = line_item_breakdown(&[], &AdditionalCharges::new(), None).unwrap_err();
        assert_eq!(err.field(), Some("items"));
    }
}
