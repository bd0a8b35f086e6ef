//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for split results that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_split::{SplitError, SplitResult};
use rust_decimal::Decimal;

/// Asserts that a Money value equals a decimal amount
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Money mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that two amounts differ by no more than `tolerance`
///
/// # Panics
///
/// Panics if the amounts differ by more than tolerance
pub fn assert_within(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that every monetary value in a result carries exactly two decimals
pub fn assert_cent_precision(result: &SplitResult) {
    let mut amounts = vec![result.subtotal, result.total_paid];
    amounts.extend(result.charges.values().copied());
    if let Some(per_person) = result.per_person() {
        amounts.push(per_person.base_amount);
        amounts.push(per_person.total);
        amounts.extend(per_person.charges.values().copied());
    }
    if let Some(totals) = result.person_totals() {
        for person in totals.values() {
            amounts.push(person.subtotal);
            amounts.push(person.total);
            amounts.extend(person.charges.values().copied());
            amounts.extend(person.items.iter().map(|share| share.share));
        }
    }

    for amount in amounts {
        assert_eq!(
            amount.amount().scale(),
            2,
            "Expected two decimal places, got {}",
            amount.amount()
        );
    }
}

/// Asserts that a split failed with the given error kind
pub fn assert_split_error_kind<T: std::fmt::Debug>(result: Result<T, SplitError>, kind: &str) {
    match result {
        Ok(value) => panic!("Expected {} error, got Ok({:?})", kind, value),
        Err(err) => assert_eq!(err.kind(), kind, "Unexpected error: {}", err),
    }
}
