//! In-memory split record storage
//!
//! Records live for the lifetime of the process. Suitable for a single
//! instance and for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use core_kernel::{DomainPort, PortError, ReceiptId};
use domain_split::{SplitRecord, SplitRepository};
use tokio::sync::RwLock;

/// Split records keyed by receipt
#[derive(Debug, Default)]
pub struct InMemorySplitRepository {
    records: RwLock<HashMap<ReceiptId, Vec<SplitRecord>>>,
}

impl InMemorySplitRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemorySplitRepository {}

#[async_trait]
impl SplitRepository for InMemorySplitRepository {
    async fn replace_for_receipt(
        &self,
        receipt_id: ReceiptId,
        records: Vec<SplitRecord>,
    ) -> Result<(), PortError> {
        if let Some(stray) = records.iter().find(|r| r.receipt_id != receipt_id) {
            return Err(PortError::conflict(format!(
                "record {} belongs to receipt {}, not {}",
                stray.id, stray.receipt_id, receipt_id
            )));
        }

        self.records.write().await.insert(receipt_id, records);
        Ok(())
    }

    async fn list_by_receipt(&self, receipt_id: ReceiptId) -> Result<Vec<SplitRecord>, PortError> {
        self.records
            .read()
            .await
            .get(&receipt_id)
            .cloned()
            .ok_or_else(|| PortError::not_found("SplitRecord", receipt_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_split::{process_receipt, SplitRecord};
    use test_utils::ReceiptFixtures;

    fn records(receipt_id: ReceiptId) -> Vec<SplitRecord> {
        let request = ReceiptFixtures::steak_dinner_request();
        let result = process_receipt(&request).unwrap();
        SplitRecord::from_result(receipt_id, &request, &result).unwrap()
    }

    #[tokio::test]
    async fn test_replace_then_list() {
        let repo = InMemorySplitRepository::new();
        let receipt_id = ReceiptId::new_v7();

        repo.replace_for_receipt(receipt_id, records(receipt_id)).await.unwrap();
        repo.replace_for_receipt(receipt_id, records(receipt_id)).await.unwrap();

        let stored = repo.list_by_receipt(receipt_id).await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].member.as_str(), "Alice");
        assert_eq!(stored[1].member.as_str(), "Bob");
    }

    #[tokio::test]
    async fn test_unknown_receipt_is_not_found() {
        let repo = InMemorySplitRepository::new();
        let err = repo.list_by_receipt(ReceiptId::new()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_records_for_other_receipt_conflict() {
        let repo = InMemorySplitRepository::new();
        let err = repo
            .replace_for_receipt(ReceiptId::new(), records(ReceiptId::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, PortError::Conflict { .. }));
    }
}
