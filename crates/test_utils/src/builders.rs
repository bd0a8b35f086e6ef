//! Test Data Builders
//!
//! Provides a builder for receipt requests so tests can state only the items
//! and charges that matter to them.

use std::collections::BTreeSet;

use core_kernel::{MemberId, Money};
use domain_split::{AdditionalCharges, LineItem, ReceiptRequest, SplitError, SplitStrategy};
use rust_decimal::Decimal;

/// Parses a member identifier, panicking on blank input
pub fn member(name: &str) -> MemberId {
    MemberId::parse(name).expect("member names in tests are never blank")
}

/// Builder for constructing receipt requests
///
/// Defaults to an equal split with no party size, no items, and no charges.
#[derive(Debug, Clone)]
pub struct ReceiptRequestBuilder {
    items: Vec<LineItem>,
    charges: AdditionalCharges,
    strategy: SplitStrategy,
}

impl Default for ReceiptRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptRequestBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            charges: AdditionalCharges::new(),
            strategy: SplitStrategy::Equal { party_size: None },
        }
    }

    /// Adds an item shared by the whole party
    pub fn item(mut self, name: &str, quantity: u32, unit_price: Decimal) -> Self {
        self.items.push(LineItem::new(name, quantity, Money::round(unit_price)));
        self
    }

    /// Adds an item assigned to specific members
    pub fn assigned_item(
        mut self,
        name: &str,
        quantity: u32,
        unit_price: Decimal,
        members: &[&str],
    ) -> Self {
        let item = LineItem::new(name, quantity, Money::round(unit_price))
            .assigned_to(members.iter().map(|m| member(m)));
        self.items.push(item);
        self
    }

    /// Adds an additional charge
    pub fn charge(mut self, name: &str, amount: Decimal) -> Self {
        self.charges.insert(name.to_string(), Money::round(amount));
        self
    }

    /// Switches to an equal split across `party_size` people
    pub fn equal(mut self, party_size: u32) -> Self {
        self.strategy = SplitStrategy::Equal {
            party_size: Some(party_size),
        };
        self
    }

    /// Switches to an itemized split among the named members
    pub fn itemized(mut self, parties: &[&str]) -> Self {
        let assigned_parties: BTreeSet<MemberId> = parties.iter().map(|p| member(p)).collect();
        self.strategy = SplitStrategy::Itemized { assigned_parties };
        self
    }

    /// Builds and validates the request
    pub fn build(self) -> Result<ReceiptRequest, SplitError> {
        ReceiptRequest::new(self.items, self.charges, self.strategy)
    }

    /// Builds the request without validation, for exercising engine guards
    pub fn build_unchecked(self) -> ReceiptRequest {
        ReceiptRequest {
            items: self.items,
            charges: self.charges,
            strategy: self.strategy,
        }
    }
}
