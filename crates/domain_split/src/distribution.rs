//! Shared subtotal and charge distribution helpers

use std::collections::BTreeMap;

use core_kernel::money::{checked_div, checked_sum};
use core_kernel::{Money, MoneyError};
use rust_decimal::Decimal;

use crate::model::{AdditionalCharges, LineItem};

/// Σ quantity × unit_price over all items, unrounded
pub fn receipt_subtotal(items: &[LineItem]) -> Result<Decimal, MoneyError> {
    let totals = items.iter().map(LineItem::total).collect::<Result<Vec<_>, _>>()?;
    checked_sum(totals)
}

/// Σ of every additional charge
pub fn charges_total(charges: &AdditionalCharges) -> Result<Decimal, MoneyError> {
    checked_sum(charges.values().map(Money::amount))
}

/// Rounded copy of the charges as echoed in a result
pub fn rounded_charges(charges: &AdditionalCharges) -> BTreeMap<String, Money> {
    charges
        .iter()
        .map(|(name, amount)| (name.clone(), Money::round(amount.amount())))
        .collect()
}

/// `round(amount / n)` applied to every charge independently
pub fn divide_charges(
    charges: &AdditionalCharges,
    n: Decimal,
) -> Result<BTreeMap<String, Money>, MoneyError> {
    charges
        .iter()
        .map(|(name, amount)| Ok((name.clone(), Money::round(checked_div(amount.amount(), n)?))))
        .collect()
}

/// `round(amount × part / whole)`
///
/// Multiplies before dividing so a terminating quotient is never truncated
/// to 28 digits first.
pub fn proportional_share(
    amount: Decimal,
    part: Decimal,
    whole: Decimal,
) -> Result<Money, MoneyError> {
    let scaled = amount.checked_mul(part).ok_or(MoneyError::Overflow)?;
    Ok(Money::round(checked_div(scaled, whole)?))
}

/// Sums already-rounded amounts and rounds the result
pub fn money_sum<'a, I>(amounts: I) -> Result<Money, MoneyError>
where
    I: IntoIterator<Item = &'a Money>,
{
    checked_sum(amounts.into_iter().map(Money::amount)).map(Money::round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_receipt_subtotal() {
        let items = vec![
            LineItem::new("Burger", 2, Money::round(dec!(10.00))),
            LineItem::new("Fries", 1, Money::round(dec!(4.50))),
        ];
        assert_eq!(receipt_subtotal(&items).unwrap(), dec!(24.50));
    }

    #[test]
    fn test_proportional_share() {
        let share = proportional_share(dec!(4.50), dec!(37.50), dec!(45.00)).unwrap();
        assert_eq!(share.amount(), dec!(3.75));
    }

    #[test]
    fn test_proportional_share_zero_whole() {
        assert_eq!(
            proportional_share(dec!(1), dec!(1), Decimal::ZERO),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_charges_rounds_each_independently() {
        let mut charges = AdditionalCharges::new();
        charges.insert("tax".to_string(), Money::round(dec!(1.00)));
        charges.insert("tip".to_string(), Money::round(dec!(2.00)));

        let divided = divide_charges(&charges, dec!(3)).unwrap();
        assert_eq!(divided["tax"].amount(), dec!(0.33));
        assert_eq!(divided["tip"].amount(), dec!(0.67));
    }
}
