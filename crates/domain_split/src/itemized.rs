//! Itemized split calculator
//!
//! Each item is divided among its assignees (or the whole party when it has
//! none). Every additional charge is then distributed in proportion to each
//! person's item subtotal relative to the receipt subtotal.

use std::collections::{BTreeMap, BTreeSet};

use core_kernel::money::checked_div;
use core_kernel::{MemberId, Money, MoneyError};
use rust_decimal::Decimal;

use crate::distribution::{charges_total, money_sum, proportional_share, rounded_charges};
use crate::error::SplitError;
use crate::model::{
    AdditionalCharges, ItemShare, LineItem, PersonTotal, SplitBreakdown, SplitMethod, SplitResult,
};

/// Splits a receipt by item assignment among `assigned_parties`
///
/// # Errors
///
/// - `InvalidInput` when the party is empty, or when the item subtotal is
///   zero and charges cannot be distributed proportionally
/// - `UnassignedParty` when an item names someone outside the party; no
///   partial result is returned
pub fn split_by_item(
    items: &[LineItem],
    charges: &AdditionalCharges,
    assigned_parties: &BTreeSet<MemberId>,
) -> Result<SplitResult, SplitError> {
    if assigned_parties.is_empty() {
        return Err(SplitError::invalid_input(
            "assigned_parties",
            "assigned_parties is required for itemized split",
        ));
    }

    let mut person_totals: BTreeMap<MemberId, PersonTotal> = assigned_parties
        .iter()
        .map(|member| (member.clone(), PersonTotal::default()))
        .collect();

    // Running total of unrounded item totals, the base for proportional charges
    let mut subtotal = Decimal::ZERO;

    for (index, item) in items.iter().enumerate() {
        let item_total = item.total()?;
        let assignees = match &item.assigned_to {
            Some(members) if !members.is_empty() => members,
            _ => assigned_parties,
        };

        let per_person_amount =
            Money::round(checked_div(item_total, Decimal::from(assignees.len() as u64))?);

        for member in assignees {
            let person = person_totals.get_mut(member).ok_or_else(|| {
                SplitError::UnassignedParty {
                    member: member.clone(),
                    item: item.name.clone(),
                    field: format!("items[{index}].assigned_to"),
                }
            })?;
            person.subtotal = person.subtotal.checked_add(per_person_amount)?;
            person.items.push(ItemShare {
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                share: per_person_amount,
            });
        }

        subtotal = subtotal.checked_add(item_total).ok_or(MoneyError::Overflow)?;
    }

    if subtotal.is_zero() {
        return Err(SplitError::invalid_input(
            "items",
            "item subtotal is zero, charges cannot be distributed proportionally",
        ));
    }

    for person in person_totals.values_mut() {
        let person_subtotal = person.subtotal.amount();
        person.charges = charges
            .iter()
            .map(|(name, amount)| {
                let share = proportional_share(amount.amount(), person_subtotal, subtotal)?;
                Ok((name.clone(), share))
            })
            .collect::<Result<_, MoneyError>>()?;
        let charge_sum = money_sum(person.charges.values())?;
        person.total = person.subtotal.checked_add(charge_sum)?;
    }

    let total_paid = subtotal
        .checked_add(charges_total(charges)?)
        .ok_or(MoneyError::Overflow)?;

    Ok(SplitResult {
        split_method: SplitMethod::Itemized,
        subtotal: Money::round(subtotal),
        charges: rounded_charges(charges),
        total_paid: Money::round(total_paid),
        breakdown: SplitBreakdown::PersonTotals(person_totals),
    })
}
