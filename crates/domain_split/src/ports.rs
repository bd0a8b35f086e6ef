//! Persistence port for computed splits
//!
//! The split engine returns values and never persists; the HTTP layer hands
//! derived [`SplitRecord`]s to an implementation of this port.

use async_trait::async_trait;
use core_kernel::{DomainPort, PortError, ReceiptId};

use crate::record::SplitRecord;

/// Storage for per-person split records
#[async_trait]
pub trait SplitRepository: DomainPort {
    /// Stores records, replacing any previously stored for the same receipt
    ///
    /// # Arguments
    ///
    /// * `receipt_id` - The receipt the records belong to
    /// * `records` - Per-person records derived from one split result
    async fn replace_for_receipt(
        &self,
        receipt_id: ReceiptId,
        records: Vec<SplitRecord>,
    ) -> Result<(), PortError>;

    /// Lists the records stored for a receipt, in the order they were stored
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` when nothing was stored for the receipt
    async fn list_by_receipt(&self, receipt_id: ReceiptId) -> Result<Vec<SplitRecord>, PortError>;
}
