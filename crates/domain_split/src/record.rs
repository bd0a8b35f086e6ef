//! Per-person split records handed to the persistence layer

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use core_kernel::{MemberId, Money, ReceiptId, SplitId};
use serde::{Deserialize, Serialize};

use crate::error::SplitError;
use crate::model::{
    ItemShare, ReceiptRequest, SplitBreakdown, SplitResult, SplitStrategy, MAX_PARTY_SIZE,
};

/// What one person owes for one receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRecord {
    pub id: SplitId,
    pub receipt_id: ReceiptId,
    pub member: MemberId,
    pub items: Vec<ItemShare>,
    pub subtotal: Money,
    pub charges: BTreeMap<String, Money>,
    pub total: Money,
    pub created_at: DateTime<Utc>,
}

impl SplitRecord {
    /// Derives one record per person from a computed split
    ///
    /// Equal splits have no names, so their records are named `guest-1`
    /// through `guest-n` and carry no item shares. Parties larger than
    /// [`MAX_PARTY_SIZE`] are rejected before any record is built.
    pub fn from_result(
        receipt_id: ReceiptId,
        request: &ReceiptRequest,
        result: &SplitResult,
    ) -> Result<Vec<SplitRecord>, SplitError> {
        let created_at = Utc::now();

        match (&result.breakdown, &request.strategy) {
            (SplitBreakdown::PerPerson(per_person), SplitStrategy::Equal { party_size }) => {
                let party_size = party_size.unwrap_or(1);
                if party_size > MAX_PARTY_SIZE {
                    return Err(SplitError::invalid_input(
                        "party_size",
                        format!("party size cannot exceed {MAX_PARTY_SIZE}"),
                    ));
                }

                (1..=party_size)
                    .map(|n| -> Result<SplitRecord, SplitError> {
                        Ok(SplitRecord {
                            id: SplitId::new_v7(),
                            receipt_id,
                            member: MemberId::parse(format!("guest-{n}"))?,
                            items: Vec::new(),
                            subtotal: per_person.base_amount,
                            charges: per_person.charges.clone(),
                            total: per_person.total,
                            created_at,
                        })
                    })
                    .collect()
            }
            (SplitBreakdown::PersonTotals(totals), SplitStrategy::Itemized { .. }) => Ok(totals
                .iter()
                .map(|(member, person)| SplitRecord {
                    id: SplitId::new_v7(),
                    receipt_id,
                    member: member.clone(),
                    items: person.items.clone(),
                    subtotal: person.subtotal,
                    charges: person.charges.clone(),
                    total: person.total,
                    created_at,
                })
                .collect()),
            _ => Err(SplitError::invalid_input(
                "split_method",
                "split result does not match the request's split method",
            )),
        }
    }
}
