//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating receipts that maintain the
//! request invariants: positive quantities, non-negative prices, and item
//! assignments drawn from the declared party.

use std::collections::BTreeSet;

use core_kernel::{MemberId, Money};
use domain_split::{AdditionalCharges, LineItem};
use proptest::prelude::*;
use rust_decimal::Decimal;

const MEMBER_POOL: &[&str] = &["Alice", "Bob", "Carol", "Dan", "Erin", "Frank"];

/// Strategy for non-negative prices with cent precision (0.00 to 999.99)
pub fn price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for strictly positive prices (0.01 to 999.99)
pub fn positive_price_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for item quantities
pub fn quantity_strategy() -> impl Strategy<Value = u32> {
    1u32..10u32
}

/// Strategy for party sizes
pub fn party_size_strategy() -> impl Strategy<Value = u32> {
    1u32..20u32
}

/// Strategy for zero to three named charges
pub fn charges_strategy() -> impl Strategy<Value = AdditionalCharges> {
    let name = prop_oneof![Just("tax"), Just("tip"), Just("service_fee")].prop_map(String::from);
    proptest::collection::btree_map(name, price_strategy().prop_map(Money::round), 0..=3)
}

/// Strategy for a non-empty party drawn from a fixed pool of names
pub fn party_strategy() -> impl Strategy<Value = Vec<MemberId>> {
    proptest::sample::subsequence(MEMBER_POOL.to_vec(), 1..=MEMBER_POOL.len()).prop_map(|names| {
        names
            .into_iter()
            .map(|name| MemberId::parse(name).expect("pool names are not blank"))
            .collect()
    })
}

/// Strategy for items shared by everyone
pub fn shared_items_strategy() -> impl Strategy<Value = Vec<LineItem>> {
    proptest::collection::vec(
        (quantity_strategy(), price_strategy()).prop_map(|(quantity, price)| {
            LineItem::new("item", quantity, Money::round(price))
        }),
        0..8,
    )
}

/// Strategy for an equal split: items, charges, party size
pub fn equal_receipt_strategy() -> impl Strategy<Value = (Vec<LineItem>, AdditionalCharges, u32)> {
    (shared_items_strategy(), charges_strategy(), party_size_strategy())
}

/// Strategy for an itemized split: items, charges, party
///
/// Every item has a positive price so the subtotal is never zero, and every
/// assignment is a subset of the party (possibly empty, meaning everyone).
pub fn itemized_receipt_strategy(
) -> impl Strategy<Value = (Vec<LineItem>, AdditionalCharges, BTreeSet<MemberId>)> {
    party_strategy().prop_flat_map(|party| {
        let size = party.len();
        let item = (
            quantity_strategy(),
            positive_price_strategy(),
            proptest::option::of(proptest::sample::subsequence(party.clone(), 0..=size)),
        );
        let items = proptest::collection::vec(item, 1..8).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(index, (quantity, price, assignees))| {
                    let item = LineItem::new(format!("item-{index}"), quantity, Money::round(price));
                    match assignees {
                        Some(members) => item.assigned_to(members),
                        None => item,
                    }
                })
                .collect::<Vec<_>>()
        });
        let party: BTreeSet<MemberId> = party.into_iter().collect();
        (items, charges_strategy(), Just(party))
    })
}

/// Strategy for an itemized split where each item belongs to one member
///
/// Item shares are exact here, so person subtotals add up to the receipt
/// subtotal and charge shares only carry per-person rounding.
pub fn solo_assigned_receipt_strategy(
) -> impl Strategy<Value = (Vec<LineItem>, AdditionalCharges, BTreeSet<MemberId>)> {
    party_strategy().prop_flat_map(|party| {
        let owners = party.clone();
        let item = (
            quantity_strategy(),
            positive_price_strategy(),
            proptest::sample::select(owners),
        );
        let items = proptest::collection::vec(item, 1..8).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(index, (quantity, price, owner))| {
                    LineItem::new(format!("item-{index}"), quantity, Money::round(price))
                        .assigned_to([owner])
                })
                .collect::<Vec<_>>()
        });
        let party: BTreeSet<MemberId> = party.into_iter().collect();
        (items, charges_strategy(), Just(party))
    })
}
