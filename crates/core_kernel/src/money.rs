//! Money types with precise decimal arithmetic
//!
//! All receipt amounts are carried as `rust_decimal::Decimal` and every value
//! that leaves the split engine passes through [`round_money`]. Upstream data
//! that arrives as binary floats crosses into decimal here and nowhere else.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of fraction digits carried by every monetary output
pub const MONEY_DP: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow during calculation")]
    Overflow,
}

/// Rounds an amount half away from zero to exactly two decimal places
///
/// The result always carries a scale of two so that `15` renders as `15.00`.
///
/// # Example
///
/// ```rust
/// use core_kernel::money::round_money;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_money(dec!(2.675)).to_string(), "2.68");
/// assert_eq!(round_money(dec!(15)).to_string(), "15.00");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DP);
    rounded
}

/// Converts a binary float into a decimal without picking up representation error
///
/// The float is rendered with its shortest round-trip representation first, so
/// `0.1` becomes exactly `0.1` rather than `0.1000000000000000055511151231257827`.
pub fn decimal_from_f64(value: f64) -> Result<Decimal, MoneyError> {
    if !value.is_finite() {
        return Err(MoneyError::InvalidAmount(format!("{value} is not a finite number")));
    }
    Decimal::from_str(&value.to_string()).map_err(|_| MoneyError::Overflow)
}

/// Multiplies a unit price by a quantity
pub fn line_total(quantity: u32, unit_price: Decimal) -> Result<Decimal, MoneyError> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or(MoneyError::Overflow)
}

/// Sums amounts, failing instead of panicking on overflow
pub fn checked_sum<I>(amounts: I) -> Result<Decimal, MoneyError>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or(MoneyError::Overflow)
}

/// Divides an amount, reporting a zero divisor as an error
pub fn checked_div(amount: Decimal, divisor: Decimal) -> Result<Decimal, MoneyError> {
    if divisor.is_zero() {
        return Err(MoneyError::DivisionByZero);
    }
    amount.checked_div(divisor).ok_or(MoneyError::Overflow)
}

/// A non-fractional-cent monetary amount
///
/// `Money` always holds a value already rounded by [`round_money`]. It
/// serializes as a decimal string with two fraction digits (`"19.50"`) and
/// rounds anything it deserializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Zero with two fraction digits
    pub fn zero() -> Self {
        Self(round_money(Decimal::ZERO))
    }

    /// Rounds an arbitrary decimal into money
    pub fn round(amount: Decimal) -> Self {
        Self(round_money(amount))
    }

    /// Creates money from an integer amount in cents
    pub fn from_minor(cents: i64) -> Self {
        Self(Decimal::new(cents, MONEY_DP))
    }

    /// Converts an upstream float, see [`decimal_from_f64`]
    pub fn from_f64(value: f64) -> Result<Self, MoneyError> {
        decimal_from_f64(value).map(Self::round)
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Checked addition of two already-rounded amounts
    pub fn checked_add(&self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Self::round)
            .ok_or(MoneyError::Overflow)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::round(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.0
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
