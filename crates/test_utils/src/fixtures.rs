//! Pre-built Test Fixtures
//!
//! Receipts for the documented reference scenarios, shared by the domain and
//! API test suites.

use domain_split::ReceiptRequest;
use rust_decimal_macros::dec;

use crate::builders::ReceiptRequestBuilder;

/// Fixture for receipt requests
pub struct ReceiptFixtures;

impl ReceiptFixtures {
    /// Burger and fries for three, with tax and tip
    ///
    /// Subtotal 15.00, total paid 19.50, 6.50 per person.
    pub fn burger_night() -> ReceiptRequestBuilder {
        ReceiptRequestBuilder::new()
            .item("Burger", 1, dec!(10.00))
            .item("Fries", 1, dec!(5.00))
            .charge("tax", dec!(1.50))
            .charge("tip", dec!(3.00))
            .equal(3)
    }

    /// Alice's steak plus an appetizer shared with Bob
    ///
    /// Alice owes 48.75 and Bob 9.75.
    pub fn steak_dinner() -> ReceiptRequestBuilder {
        ReceiptRequestBuilder::new()
            .assigned_item("Steak", 1, dec!(30.00), &["Alice"])
            .item("Shared Appetizer", 1, dec!(15.00))
            .charge("tax", dec!(4.50))
            .charge("tip", dec!(9.00))
            .itemized(&["Alice", "Bob"])
    }

    /// Four diners with tax, tip and a service fee
    pub fn team_lunch() -> ReceiptRequestBuilder {
        ReceiptRequestBuilder::new()
            .item("Pizza", 2, dec!(14.00))
            .item("Salad", 1, dec!(8.00))
            .item("Soda", 4, dec!(1.00))
            .charge("tax", dec!(4.00))
            .charge("tip", dec!(8.00))
            .charge("service_fee", dec!(2.00))
            .equal(4)
    }

    pub fn burger_night_request() -> ReceiptRequest {
        Self::burger_night()
            .build()
            .expect("burger night fixture is valid")
    }

    pub fn steak_dinner_request() -> ReceiptRequest {
        Self::steak_dinner()
            .build()
            .expect("steak dinner fixture is valid")
    }
}
