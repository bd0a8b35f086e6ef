//! Receipt and split result types
//!
//! All entities are transient: a [`ReceiptRequest`] is built for one
//! computation and consumed to produce one [`SplitResult`].

use std::collections::{BTreeMap, BTreeSet};

use core_kernel::money::line_total;
use core_kernel::{MemberId, Money, MoneyError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Strategy for dividing a receipt among people
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMethod {
    /// Flat per-capita split
    #[default]
    Equal,
    /// Per-item assignment with proportional charges
    Itemized,
}

/// Additional charges keyed by name (`tax`, `tip`, `service_fee`, ...)
pub type AdditionalCharges = BTreeMap<String, Money>;

/// A line on the receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    /// Members sharing this item; `None` or empty means the whole party
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<BTreeSet<MemberId>>,
}

impl LineItem {
    /// Creates an item shared by the whole party
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
            assigned_to: None,
        }
    }

    /// Restricts the item to the given members
    pub fn assigned_to<I>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = MemberId>,
    {
        self.assigned_to = Some(members.into_iter().collect());
        self
    }

    /// `quantity × unit_price`, unrounded
    pub fn total(&self) -> Result<Decimal, MoneyError> {
        line_total(self.quantity, self.unit_price.amount())
    }
}

/// Largest party a split may be recorded for
pub const MAX_PARTY_SIZE: u32 = 1000;

/// How the party is described for each split method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Divide by head count; `None` means a party of one
    Equal { party_size: Option<u32> },
    /// Divide by item assignment among the named members
    Itemized { assigned_parties: BTreeSet<MemberId> },
}

impl SplitStrategy {
    pub fn method(&self) -> SplitMethod {
        match self {
            SplitStrategy::Equal { .. } => SplitMethod::Equal,
            SplitStrategy::Itemized { .. } => SplitMethod::Itemized,
        }
    }
}

/// A receipt ready to be split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptRequest {
    pub items: Vec<LineItem>,
    pub charges: AdditionalCharges,
    pub strategy: SplitStrategy,
}

impl ReceiptRequest {
    pub fn split_method(&self) -> SplitMethod {
        self.strategy.method()
    }
}

/// One person's share of one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemShare {
    pub name: String,
    pub quantity: u32,
    #[serde(rename = "price")]
    pub unit_price: Money,
    pub share: Money,
}

/// Everything one person owes under an itemized split
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonTotal {
    pub items: Vec<ItemShare>,
    pub subtotal: Money,
    pub charges: BTreeMap<String, Money>,
    pub total: Money,
}

/// What each person owes under an equal split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerPersonCharges {
    pub base_amount: Money,
    pub charges: BTreeMap<String, Money>,
    pub total: Money,
}

/// Method-specific part of a split result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitBreakdown {
    PerPerson(PerPersonCharges),
    PersonTotals(BTreeMap<MemberId, PersonTotal>),
}

/// The computed split of a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResult {
    pub split_method: SplitMethod,
    pub subtotal: Money,
    pub charges: BTreeMap<String, Money>,
    pub total_paid: Money,
    #[serde(flatten)]
    pub breakdown: SplitBreakdown,
}

impl SplitResult {
    /// The per-person amounts of an equal split
    pub fn per_person(&self) -> Option<&PerPersonCharges> {
        match &self.breakdown {
            SplitBreakdown::PerPerson(per_person) => Some(per_person),
            SplitBreakdown::PersonTotals(_) => None,
        }
    }

    /// The per-member totals of an itemized split
    pub fn person_totals(&self) -> Option<&BTreeMap<MemberId, PersonTotal>> {
        match &self.breakdown {
            SplitBreakdown::PersonTotals(totals) => Some(totals),
            SplitBreakdown::PerPerson(_) => None,
        }
    }
}
